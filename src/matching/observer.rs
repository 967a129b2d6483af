//! 검색 관찰 훅
//!
//! 스코어링 함수는 로그를 남기지 않습니다. 진단이 필요하면
//! `MatchEngine::with_observer`로 관찰자를 주입합니다.

use super::algorithm::Algorithm;

/// 비교 한 건의 결과
#[derive(Debug, Clone, Copy)]
pub struct ComparisonEvent<'a> {
    /// 카탈로그 내 위치
    pub index: usize,
    pub normalized_query: &'a str,
    pub normalized_name: &'a str,
    pub algorithm: Algorithm,
    pub score: u8,
    /// threshold 통과 여부
    pub passed: bool,
}

/// 검색 진행 관찰자
///
/// 병렬 스코어링에서도 호출되므로 `Send + Sync`가 필요합니다.
/// 모든 메서드는 기본 구현이 아무것도 하지 않습니다.
pub trait MatchObserver: Send + Sync {
    fn on_search_start(&self, _query: &str, _catalog_len: usize, _algorithm: Algorithm) {}

    fn on_comparison(&self, _event: &ComparisonEvent<'_>) {}

    /// `passed`: threshold 통과 개수, `returned`: limit 적용 후 개수
    fn on_search_end(&self, _passed: usize, _returned: usize) {}
}

/// `log` 파사드로 이벤트를 전달하는 관찰자
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl MatchObserver for LogObserver {
    fn on_search_start(&self, query: &str, catalog_len: usize, algorithm: Algorithm) {
        log::debug!(
            "검색 시작: \"{}\", 알고리즘: {}, 카탈로그 {}개",
            query,
            algorithm,
            catalog_len
        );
    }

    fn on_comparison(&self, event: &ComparisonEvent<'_>) {
        log::trace!(
            "[{}] {} ↔ {} = {}{}",
            event.index,
            event.normalized_query,
            event.normalized_name,
            event.score,
            if event.passed { "" } else { " (제외)" }
        );
    }

    fn on_search_end(&self, passed: usize, returned: usize) {
        log::debug!("threshold 통과 {}개, 반환 {}개", passed, returned);
    }
}

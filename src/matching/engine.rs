//! MatchEngine - 카탈로그 전체에 대한 정규화 → 스코어 → 필터 → 정렬 → 자르기

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::catalog::CatalogEntry;
use crate::core::normalize::normalize;

use super::algorithm::Algorithm;
use super::error::MatchError;
use super::observer::{ComparisonEvent, MatchObserver};
use super::similarity::score_with;

/// 점수 상한
pub const MAX_SCORE: i64 = 100;
/// 이 크기 이상의 카탈로그는 병렬로 스코어링 (`parallel` feature)
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1000;

/// 검색 설정
///
/// threshold/limit은 외부 입력을 그대로 받을 수 있도록 부호 있는 정수로 두고,
/// 검색 시작 시 [`SearchOptions::validate`]로 검증합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOptions {
    #[serde(default)]
    pub algorithm: Algorithm,
    /// 최소 유사도 점수 (0~100)
    #[serde(default = "default_threshold")]
    pub threshold: i64,
    /// 최대 결과 개수 (1 이상)
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_threshold() -> i64 {
    30
}

fn default_limit() -> i64 {
    5
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            threshold: default_threshold(),
            limit: default_limit(),
        }
    }
}

impl SearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_threshold(mut self, threshold: i64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }

    /// 검증 후 (threshold, limit) 반환
    pub fn validate(&self) -> Result<(u8, usize), MatchError> {
        if !(0..=MAX_SCORE).contains(&self.threshold) {
            return Err(MatchError::invalid("threshold", self.threshold));
        }
        if self.limit <= 0 {
            return Err(MatchError::invalid("limit", self.limit));
        }
        let limit = usize::try_from(self.limit).map_err(|_| MatchError::invalid("limit", self.limit))?;
        Ok((self.threshold as u8, limit))
    }
}

/// 점수가 매겨진 카탈로그 항목
///
/// 검색 한 번 동안만 유효하며 원본 항목을 빌려 씁니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredMatch<'a> {
    pub entry: &'a CatalogEntry,
    pub score: u8,
    /// 비교에 사용한 원래 이름
    pub matched_name: String,
    /// 정규화된 이름 (실제 스코어링 대상)
    pub normalized_name: String,
}

/// 약품명 매칭 엔진
///
/// 상태가 없으므로 여러 스레드에서 동시에 `search`를 호출해도 됩니다.
/// 스코어링은 정규화된 이름끼리 수행합니다.
pub struct MatchEngine {
    parallel_threshold: usize,
    observer: Option<Arc<dyn MatchObserver>>,
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MatchEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatchEngine")
            .field("parallel_threshold", &self.parallel_threshold)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

impl MatchEngine {
    pub fn new() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            observer: None,
        }
    }

    /// 관찰자 주입
    pub fn with_observer(mut self, observer: Arc<dyn MatchObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// 병렬 스코어링 기준 크기 (`parallel` feature 없으면 무시됨)
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// 카탈로그에서 검색어와 비슷한 항목 찾기
    ///
    /// 결과는 점수 내림차순이며 동점이면 카탈로그 순서를 유지합니다.
    /// 빈 검색어는 에러가 아니라 빈 결과입니다.
    ///
    /// ```
    /// use yakmatch::catalog::CatalogEntry;
    /// use yakmatch::matching::{MatchEngine, SearchOptions};
    ///
    /// let catalog = vec![CatalogEntry::named("타이레놀정500mg"), CatalogEntry::named("게보린")];
    /// let options = SearchOptions::new().with_threshold(50).with_limit(1);
    /// let matches = MatchEngine::new().search(&catalog, "타이레놀", &options).unwrap();
    /// assert_eq!(matches.len(), 1);
    /// assert_eq!(matches[0].matched_name, "타이레놀정500mg");
    /// ```
    pub fn search<'a>(
        &self,
        catalog: &'a [CatalogEntry],
        query: &str,
        options: &SearchOptions,
    ) -> Result<Vec<ScoredMatch<'a>>, MatchError> {
        let (threshold, limit) = options.validate()?;

        if query.trim().is_empty() {
            return Ok(Vec::new());
        }

        let normalized_query = normalize(query);
        if let Some(observer) = &self.observer {
            observer.on_search_start(&normalized_query, catalog.len(), options.algorithm);
        }

        let scored = self.score_catalog(catalog, &normalized_query, options.algorithm, threshold);

        let mut matches: Vec<ScoredMatch<'a>> =
            scored.into_iter().filter(|m| m.score >= threshold).collect();
        let passed = matches.len();

        // sort_by는 안정 정렬
        matches.sort_by(|a, b| b.score.cmp(&a.score));
        matches.truncate(limit);

        if let Some(observer) = &self.observer {
            observer.on_search_end(passed, matches.len());
        }
        Ok(matches)
    }

    /// 카탈로그 순서대로 점수 계산
    #[cfg(feature = "parallel")]
    fn score_catalog<'a>(
        &self,
        catalog: &'a [CatalogEntry],
        normalized_query: &str,
        algorithm: Algorithm,
        threshold: u8,
    ) -> Vec<ScoredMatch<'a>> {
        if catalog.len() >= self.parallel_threshold {
            // par_iter().collect()는 입력 순서를 보존
            catalog
                .par_iter()
                .enumerate()
                .map(|(idx, entry)| self.score_entry(idx, entry, normalized_query, algorithm, threshold))
                .collect()
        } else {
            self.score_sequential(catalog, normalized_query, algorithm, threshold)
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn score_catalog<'a>(
        &self,
        catalog: &'a [CatalogEntry],
        normalized_query: &str,
        algorithm: Algorithm,
        threshold: u8,
    ) -> Vec<ScoredMatch<'a>> {
        self.score_sequential(catalog, normalized_query, algorithm, threshold)
    }

    fn score_sequential<'a>(
        &self,
        catalog: &'a [CatalogEntry],
        normalized_query: &str,
        algorithm: Algorithm,
        threshold: u8,
    ) -> Vec<ScoredMatch<'a>> {
        catalog
            .iter()
            .enumerate()
            .map(|(idx, entry)| self.score_entry(idx, entry, normalized_query, algorithm, threshold))
            .collect()
    }

    fn score_entry<'a>(
        &self,
        index: usize,
        entry: &'a CatalogEntry,
        normalized_query: &str,
        algorithm: Algorithm,
        threshold: u8,
    ) -> ScoredMatch<'a> {
        let normalized_name = normalize(&entry.name);
        let score = score_with(algorithm, normalized_query, &normalized_name);

        if let Some(observer) = &self.observer {
            observer.on_comparison(&ComparisonEvent {
                index,
                normalized_query,
                normalized_name: &normalized_name,
                algorithm,
                score,
                passed: score >= threshold,
            });
        }

        ScoredMatch {
            entry,
            score,
            matched_name: entry.name.clone(),
            normalized_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn catalog(names: &[&str]) -> Vec<CatalogEntry> {
        names.iter().map(|n| CatalogEntry::named(*n)).collect()
    }

    fn names<'a>(matches: &'a [ScoredMatch<'_>]) -> Vec<&'a str> {
        matches.iter().map(|m| m.matched_name.as_str()).collect()
    }

    #[test]
    fn test_ranking_order() {
        let catalog = catalog(&["아스피린", "아스피린정", "타이레놀"]);
        let options = SearchOptions::new().with_threshold(0).with_limit(3);
        let matches = MatchEngine::new().search(&catalog, "아스피린", &options).unwrap();

        assert_eq!(names(&matches), vec!["아스피린", "아스피린정", "타이레놀"]);
        assert_eq!(matches[0].score, 100);
        assert_eq!(matches[1].score, 93);
        assert_eq!(matches[2].score, 0);
    }

    #[test]
    fn test_threshold_filters() {
        let catalog = catalog(&["아스피린", "아스피린정", "타이레놀"]);
        let options = SearchOptions::new().with_threshold(50).with_limit(10);
        let matches = MatchEngine::new().search(&catalog, "아스피린", &options).unwrap();

        assert_eq!(names(&matches), vec!["아스피린", "아스피린정"]);
        assert!(matches.iter().all(|m| m.score >= 50));
    }

    #[test]
    fn test_limit_truncates() {
        let catalog = catalog(&["아스피린", "아스피린정", "아스피린장용정"]);
        let options = SearchOptions::new().with_threshold(0).with_limit(2);
        let matches = MatchEngine::new().search(&catalog, "아스피린", &options).unwrap();
        assert_eq!(matches.len(), 2);
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let catalog = catalog(&["게보린B", "게보린A", "게보린C"]);
        let options = SearchOptions::new().with_threshold(0).with_limit(3);
        let matches = MatchEngine::new().search(&catalog, "게보린", &options).unwrap();

        assert!(matches.iter().all(|m| m.score == matches[0].score));
        assert_eq!(names(&matches), vec!["게보린B", "게보린A", "게보린C"]);
    }

    #[test]
    fn test_empty_query() {
        let catalog = catalog(&["아스피린"]);
        let options = SearchOptions::new().with_threshold(0);
        let engine = MatchEngine::new();
        assert!(engine.search(&catalog, "", &options).unwrap().is_empty());
        assert!(engine.search(&catalog, "   ", &options).unwrap().is_empty());
    }

    #[test]
    fn test_scores_normalized_forms() {
        let catalog = catalog(&["타이레놀 정 (500mg)"]);
        let matches = MatchEngine::new()
            .search(&catalog, " 타이레놀정500MG ", &SearchOptions::new())
            .unwrap();
        assert_eq!(matches[0].score, 100);
        assert_eq!(matches[0].normalized_name, "타이레놀정500mg");
        assert_eq!(matches[0].matched_name, "타이레놀 정 (500mg)");
    }

    #[test]
    fn test_invalid_options_rejected() {
        let catalog = catalog(&["아스피린"]);
        let engine = MatchEngine::new();

        let err = engine
            .search(&catalog, "아스피린", &SearchOptions::new().with_limit(0))
            .unwrap_err();
        assert_eq!(err, MatchError::invalid("limit", 0));

        let err = engine
            .search(&catalog, "아스피린", &SearchOptions::new().with_threshold(101))
            .unwrap_err();
        assert_eq!(err.field(), "threshold");

        let err = engine
            .search(&catalog, "", &SearchOptions::new().with_threshold(-1))
            .unwrap_err();
        assert_eq!(err.field(), "threshold");
    }

    #[derive(Default)]
    struct Recorder {
        comparisons: Mutex<Vec<(usize, u8, bool)>>,
        end: Mutex<Option<(usize, usize)>>,
    }

    impl MatchObserver for Recorder {
        fn on_comparison(&self, event: &ComparisonEvent<'_>) {
            self.comparisons
                .lock()
                .unwrap()
                .push((event.index, event.score, event.passed));
        }

        fn on_search_end(&self, passed: usize, returned: usize) {
            *self.end.lock().unwrap() = Some((passed, returned));
        }
    }

    #[test]
    fn test_observer_sees_every_comparison() {
        let recorder = Arc::new(Recorder::default());
        let engine = MatchEngine::new().with_observer(recorder.clone());
        let catalog = catalog(&["아스피린", "아스피린정", "타이레놀"]);
        let options = SearchOptions::new().with_threshold(50).with_limit(1);

        engine.search(&catalog, "아스피린", &options).unwrap();

        let mut seen = recorder.comparisons.lock().unwrap().clone();
        seen.sort();
        assert_eq!(seen, vec![(0, 100, true), (1, 93, true), (2, 0, false)]);
        assert_eq!(*recorder.end.lock().unwrap(), Some((2, 1)));
    }

    #[test]
    fn test_parallel_threshold_does_not_change_results() {
        let catalog = catalog(&["아스피린정", "아스피린", "아스피린장용정", "타이레놀"]);
        let options = SearchOptions::new().with_threshold(0).with_limit(4);
        let sequential = MatchEngine::new()
            .with_parallel_threshold(usize::MAX)
            .search(&catalog, "아스피린", &options)
            .unwrap();
        let parallel = MatchEngine::new()
            .with_parallel_threshold(1)
            .search(&catalog, "아스피린", &options)
            .unwrap();
        assert_eq!(sequential, parallel);
    }

    /// `cargo test --features parallel` (또는 `cargo test-all`)에서만 컴파일
    #[cfg(feature = "parallel")]
    #[test]
    fn test_rayon_scoring_keeps_catalog_order_for_ties() {
        // 동점 항목이 많은 큰 카탈로그: rayon 경로에서도 카탈로그 순서가 유지되어야 함
        let names: Vec<String> = (0..2000)
            .map(|i| match i % 3 {
                0 => format!("게보린{}", i),
                1 => format!("타이레놀{}", i),
                _ => format!("아스피린{}", i),
            })
            .collect();
        let catalog: Vec<CatalogEntry> = names.iter().map(|n| CatalogEntry::named(n.as_str())).collect();
        let options = SearchOptions::new().with_threshold(0).with_limit(2000);

        let recorder = Arc::new(Recorder::default());
        let engine = MatchEngine::new()
            .with_parallel_threshold(100)
            .with_observer(recorder.clone());
        let parallel = engine.search(&catalog, "게보린", &options).unwrap();
        let sequential = MatchEngine::new()
            .with_parallel_threshold(usize::MAX)
            .search(&catalog, "게보린", &options)
            .unwrap();

        assert_eq!(parallel, sequential);
        assert_eq!(recorder.comparisons.lock().unwrap().len(), catalog.len());

        // 같은 점수끼리는 카탈로그 인덱스 오름차순
        let position = |m: &ScoredMatch<'_>| {
            catalog
                .iter()
                .position(|e| std::ptr::eq(e, m.entry))
                .unwrap()
        };
        for pair in parallel.windows(2) {
            if pair[0].score == pair[1].score {
                assert!(position(&pair[0]) < position(&pair[1]));
            }
        }
    }
}

//! 약품명 유사도 매칭
//!
//! 정규화된 검색어와 카탈로그 항목 이름을 비교해 점수를 매기고,
//! threshold 필터 → 점수 내림차순 안정 정렬 → limit 자르기 순서로 결과를 만듭니다.
//!
//! # 알고리즘
//!
//! - `edit-distance` (`levenshtein`): 직접 유사도
//! - `initial`: 초성 시퀀스 유사도
//! - `combined` (기본값): 직접 70% + 초성 30%
//!
//! # 사용 예시
//!
//! ```
//! use yakmatch::catalog::CatalogEntry;
//! use yakmatch::matching::{Algorithm, MatchEngine, SearchOptions};
//!
//! let catalog = vec![
//!     CatalogEntry::named("아스피린"),
//!     CatalogEntry::named("아스피린정"),
//!     CatalogEntry::named("타이레놀"),
//! ];
//! let options = SearchOptions::new()
//!     .with_algorithm(Algorithm::Combined)
//!     .with_threshold(50)
//!     .with_limit(3);
//!
//! let matches = MatchEngine::new().search(&catalog, "아스피린", &options).unwrap();
//! assert_eq!(matches[0].score, 100);
//! assert_eq!(matches.len(), 2);
//! ```

mod algorithm;
mod engine;
mod error;
mod observer;
mod similarity;

pub use algorithm::Algorithm;
pub use engine::{MatchEngine, ScoredMatch, SearchOptions, DEFAULT_PARALLEL_THRESHOLD};
pub use error::MatchError;
pub use observer::{ComparisonEvent, LogObserver, MatchObserver};
pub use similarity::{score_with, similarity};

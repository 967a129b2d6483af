//! 문자열 비교 기본 요소: 편집 거리, 초성 추출, 정규화

pub mod initials;
pub mod levenshtein;
pub mod normalize;
pub mod unicode;

pub use initials::initials;
pub use levenshtein::{distance, str_distance};
pub use normalize::normalize;

//! 0~100 유사도 점수
//!
//! 순서대로 평가하며 처음 해당하는 규칙에서 끝납니다:
//!
//! 1. 빈 입력 → 0
//! 2. 소문자화 + trim 후 완전 일치 → 100 (둘 다 공백뿐이어도 100)
//! 3. 짧은 쪽이 긴 쪽에 포함 → `85 + (짧은 길이 / 긴 길이) × 10` (반올림 안 함)
//! 4. 그 외 → `round((maxLen - 편집거리) / maxLen × 100)`

use crate::core::initials::initials;
use crate::core::levenshtein::distance;

use super::algorithm::Algorithm;

/// 포함 일치 기본 점수
const SUBSTRING_BASE: f64 = 85.0;
/// 포함 일치 길이 비율 가중치
const SUBSTRING_RATIO_WEIGHT: f64 = 10.0;
/// combined 모드의 직접 유사도 가중치
const DIRECT_WEIGHT: f64 = 0.7;
/// combined 모드의 초성 유사도 가중치
const INITIAL_WEIGHT: f64 = 0.3;

/// 두 문자열의 유사도 (0~100)
///
/// 포함 일치 점수는 소수 그대로 두고 편집 거리 점수는 이 단계에서 반올림합니다.
/// 반환값은 둘 중 어느 경우든 최종 반올림된 정수입니다.
///
/// ```
/// use yakmatch::matching::similarity;
/// assert_eq!(similarity("아스피린", "아스피린"), 100);
/// assert_eq!(similarity("아스피린", "아스피린정"), 93);
/// ```
pub fn similarity(input: &str, target: &str) -> u8 {
    to_score(raw_similarity(input, target))
}

/// 선택한 알고리즘으로 유사도 계산
pub fn score_with(algorithm: Algorithm, input: &str, target: &str) -> u8 {
    let raw = match algorithm {
        Algorithm::EditDistance => raw_similarity(input, target),
        Algorithm::Initial => raw_similarity(&initials(input), &initials(target)),
        Algorithm::Combined => {
            let direct = raw_similarity(input, target);
            let initial = raw_similarity(&initials(input), &initials(target));
            direct * DIRECT_WEIGHT + initial * INITIAL_WEIGHT
        }
    };
    to_score(raw)
}

/// 최종 반올림 전 점수
///
/// 편집 거리 규칙은 이미 정수로 반올림된 값이고, 포함 일치 규칙만 소수입니다.
/// combined 가중합은 이 값으로 계산한 뒤 한 번 더 반올림합니다.
fn raw_similarity(input: &str, target: &str) -> f64 {
    if input.is_empty() || target.is_empty() {
        return 0.0;
    }

    let a: Vec<char> = input.trim().to_lowercase().chars().collect();
    let b: Vec<char> = target.trim().to_lowercase().chars().collect();

    if a == b {
        return 100.0;
    }

    let (longer, shorter) = if a.len() >= b.len() { (&a, &b) } else { (&b, &a) };
    if contains_run(longer, shorter) {
        let ratio = shorter.len() as f64 / longer.len() as f64;
        return SUBSTRING_BASE + ratio * SUBSTRING_RATIO_WEIGHT;
    }

    let max_len = longer.len();
    if max_len == 0 {
        return 100.0;
    }
    let d = distance(&a, &b);
    (((max_len - d) as f64 / max_len as f64) * 100.0).round()
}

/// `haystack` 안에 `needle`이 연속으로 나타나는지 (빈 `needle`은 포함으로 보지 않음)
fn contains_run(haystack: &[char], needle: &[char]) -> bool {
    !needle.is_empty() && haystack.windows(needle.len()).any(|w| w == needle)
}

fn to_score(raw: f64) -> u8 {
    raw.round().clamp(0.0, 100.0) as u8
}

//! 비교 전 문자열 정규화

use super::unicode::is_complete_hangul;

/// 약품명 정규화
///
/// - 소문자화
/// - 공백 제거 (앞뒤 + 내부)
/// - 영숫자/한글 음절 이외의 문자 제거
///
/// 소문자화를 먼저 수행해야 멱등성이 유지됩니다
/// (`İ` 같은 문자는 소문자화하면 결합 문자가 붙음).
pub fn normalize(s: &str) -> String {
    s.trim()
        .chars()
        .flat_map(char::to_lowercase)
        .filter(|&c| is_kept(c))
        .collect()
}

fn is_kept(c: char) -> bool {
    !c.is_whitespace() && (c.is_alphanumeric() || is_complete_hangul(c))
}

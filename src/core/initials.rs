//! 초성 추출기
//!
//! 완성형 한글 음절을 초성 자모로 치환합니다. 한글이 아닌 문자는 그대로 둡니다.
//! 입력 한 글자당 출력 한 글자 (1:1 위치 대응).

use super::unicode::{choseong_to_jamo_char, syllable_offset, SYLLABLES_PER_CHOSEONG};

/// 문자 하나의 초성 (한글 음절이 아니면 원래 문자)
pub fn initial_of(c: char) -> char {
    syllable_offset(c)
        .and_then(|offset| choseong_to_jamo_char(offset / SYLLABLES_PER_CHOSEONG))
        .unwrap_or(c)
}

/// 문자열의 초성 시퀀스
///
/// ```
/// use yakmatch::core::initials::initials;
/// assert_eq!(initials("타이레놀"), "ㅌㅇㄹㄴ");
/// assert_eq!(initials("게보린500mg"), "ㄱㅂㄹ500mg");
/// ```
pub fn initials(s: &str) -> String {
    s.chars().map(initial_of).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_initials() {
        assert_eq!(initials("아스피린"), "ㅇㅅㅍㄹ");
        assert_eq!(initials("한글"), "ㅎㄱ");
        // 쌍자음
        assert_eq!(initials("까스활명수"), "ㄲㅅㅎㅁㅅ");
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(initial_of('가'), 'ㄱ');
        assert_eq!(initial_of('힣'), 'ㅎ');
        // 588개 단위로 초성이 바뀜
        assert_eq!(initial_of('\u{AC00}'), 'ㄱ');
        assert_eq!(initial_of('\u{ABFF}'), '\u{ABFF}');
        assert_eq!(initial_of(char::from_u32(0xAC00 + 587).unwrap()), 'ㄱ');
        assert_eq!(initial_of(char::from_u32(0xAC00 + 588).unwrap()), 'ㄲ');
    }

    #[test]
    fn test_passthrough() {
        assert_eq!(initials("tylenol 500"), "tylenol 500");
        // 이미 자모인 문자는 그대로
        assert_eq!(initials("ㄱㄴ"), "ㄱㄴ");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_length_preserved() {
        let s = "타이레놀정500mg (일반)";
        assert_eq!(initials(s).chars().count(), s.chars().count());
    }
}

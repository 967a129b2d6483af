//! 유니코드 한글 음절 유틸리티

/// 한글 음절 시작 코드포인트 (가)
pub const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;
/// 한글 음절 마지막 오프셋 (힣 - 가)
pub const HANGUL_SYLLABLE_LAST_OFFSET: u32 = 11171;

/// 초성 개수
pub const CHOSEONG_COUNT: u32 = 19;
/// 초성 하나가 차지하는 음절 수 (중성 21 × 종성 28)
pub const SYLLABLES_PER_CHOSEONG: u32 = 588;

/// 초성 호환용 자모 (초성 인덱스 순서)
#[rustfmt::skip]
pub const CHOSEONG_JAMO: [char; CHOSEONG_COUNT as usize] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ',
    'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// 완성형 한글 음절의 오프셋 (가 = 0 ... 힣 = 11171)
/// 음절 영역 밖이면 None
pub fn syllable_offset(c: char) -> Option<u32> {
    let offset = (c as u32).checked_sub(HANGUL_SYLLABLE_BASE)?;
    (offset <= HANGUL_SYLLABLE_LAST_OFFSET).then_some(offset)
}

/// 문자가 완성형 한글(가-힣)인지 확인
pub fn is_complete_hangul(c: char) -> bool {
    syllable_offset(c).is_some()
}

/// 초성 인덱스에 해당하는 호환용 자모 반환
pub fn choseong_to_jamo_char(cho: u32) -> Option<char> {
    CHOSEONG_JAMO.get(cho as usize).copied()
}

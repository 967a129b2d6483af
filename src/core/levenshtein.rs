//! 편집 거리 (Levenshtein distance)

/// 두 문자 시퀀스 사이의 편집 거리
///
/// 삽입/삭제/치환 한 번을 비용 1로 계산합니다.
/// 전체 (|a|+1) × (|b|+1) 테이블 대신 한 행만 유지합니다.
pub fn distance(a: &[char], b: &[char]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // 짧은 쪽을 열로 사용
    let (rows, cols) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    let mut prev: Vec<usize> = (0..=cols.len()).collect();
    let mut curr = vec![0; cols.len() + 1];

    for (i, rc) in rows.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cc) in cols.iter().enumerate() {
            curr[j + 1] = if rc == cc {
                prev[j]
            } else {
                1 + prev[j].min(prev[j + 1]).min(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[cols.len()]
}

/// 문자열 편집 거리 (코드포인트 단위)
pub fn str_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    distance(&a, &b)
}

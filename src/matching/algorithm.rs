//! 유사도 알고리즘 선택

use serde::{Deserialize, Serialize};
use std::fmt;

/// 유사도 알고리즘
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", from = "String")]
pub enum Algorithm {
    /// 편집 거리 기반 직접 비교
    EditDistance,
    /// 초성 시퀀스 비교
    Initial,
    /// 직접 유사도 70% + 초성 유사도 30%
    #[default]
    Combined,
}

impl Algorithm {
    /// 엄격한 이름 파싱 (모르는 이름이면 None)
    ///
    /// `levenshtein`은 `edit-distance`의 별칭입니다.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "edit-distance" | "edit_distance" | "levenshtein" => Some(Algorithm::EditDistance),
            "initial" | "initials" | "choseong" => Some(Algorithm::Initial),
            "combined" => Some(Algorithm::Combined),
            _ => None,
        }
    }

    /// 관대한 파싱: 모르는 이름은 `Combined`로 대체하고 경고
    pub fn from_name_or_default(name: &str) -> Self {
        Self::from_name(name).unwrap_or_else(|| {
            log::warn!("알 수 없는 알고리즘 '{}', combined로 대체", name);
            Algorithm::Combined
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::EditDistance => "edit-distance",
            Algorithm::Initial => "initial",
            Algorithm::Combined => "combined",
        }
    }
}

impl From<String> for Algorithm {
    fn from(name: String) -> Self {
        Self::from_name_or_default(&name)
    }
}

impl From<&str> for Algorithm {
    fn from(name: &str) -> Self {
        Self::from_name_or_default(name)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(Algorithm::from_name("levenshtein"), Some(Algorithm::EditDistance));
        assert_eq!(Algorithm::from_name("edit-distance"), Some(Algorithm::EditDistance));
        assert_eq!(Algorithm::from_name("Initial"), Some(Algorithm::Initial));
        assert_eq!(Algorithm::from_name("combined"), Some(Algorithm::Combined));
        assert_eq!(Algorithm::from_name("soundex"), None);
    }

    #[test]
    fn test_unknown_falls_back_to_combined() {
        assert_eq!(Algorithm::from("soundex"), Algorithm::Combined);
        assert_eq!(Algorithm::from(""), Algorithm::Combined);
    }

    #[test]
    fn test_serde() {
        let parsed: Algorithm = serde_json::from_str(r#""levenshtein""#).unwrap();
        assert_eq!(parsed, Algorithm::EditDistance);

        let parsed: Algorithm = serde_json::from_str(r#""bogus""#).unwrap();
        assert_eq!(parsed, Algorithm::Combined);

        let json = serde_json::to_string(&Algorithm::EditDistance).unwrap();
        assert_eq!(json, r#""edit-distance""#);
    }
}

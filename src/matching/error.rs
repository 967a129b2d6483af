//! 매칭 에러 타입

use thiserror::Error;

/// 검색 요청 에러
///
/// 비교 작업을 시작하기 전에 보고되며, 부분 결과는 없습니다.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// 잘못된 입력값 (필드명 + 값)
    #[error("invalid input: {field} = {value}")]
    InvalidInput { field: &'static str, value: String },
}

impl MatchError {
    pub(crate) fn invalid(field: &'static str, value: impl ToString) -> Self {
        MatchError::InvalidInput {
            field,
            value: value.to_string(),
        }
    }

    /// 문제가 된 필드명
    pub fn field(&self) -> &'static str {
        match self {
            MatchError::InvalidInput { field, .. } => field,
        }
    }
}

//! JSON 카탈로그 파일 로드

use std::fs;
use std::io;
use std::ops::Deref;
use std::path::Path;

use serde_json::Value;
use thiserror::Error;

use super::entry::{CatalogEntry, CatalogRecord};

/// 카탈로그 조회 에러
#[derive(Debug, Error)]
pub enum CatalogError {
    /// 원본을 읽을 수 없음
    #[error("catalog unavailable: {0}")]
    Unavailable(#[from] io::Error),

    /// JSON 파싱 실패
    #[error("catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// 최상위가 배열이 아님
    #[error("catalog must be a JSON array, got {0}")]
    NotASequence(&'static str),

    /// 개별 행 형식 오류
    #[error("invalid catalog record #{index}: {reason}")]
    InvalidRecord { index: usize, reason: String },

    /// 항목이 하나도 없음
    #[error("catalog is empty")]
    Empty,
}

/// 메모리에 모두 적재된 카탈로그
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// 비어 있으면 `CatalogError::Empty`
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { entries })
    }

    /// 저장소 행들로부터 생성
    pub fn from_records(records: Vec<CatalogRecord>) -> Result<Self, CatalogError> {
        Self::new(records.into_iter().map(CatalogEntry::from_record).collect())
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<CatalogEntry> {
        self.entries
    }
}

impl Deref for Catalog {
    type Target = [CatalogEntry];

    fn deref(&self) -> &Self::Target {
        &self.entries
    }
}

/// JSON 문자열에서 카탈로그 파싱
///
/// 형식: `[{"content": "...", "metadata": {...} | "..."}, ...]`
pub fn parse_catalog(json: &str) -> Result<Catalog, CatalogError> {
    let root: Value = serde_json::from_str(json)?;
    let rows = match root {
        Value::Array(rows) => rows,
        other => return Err(CatalogError::NotASequence(value_kind(&other))),
    };

    let records = rows
        .into_iter()
        .enumerate()
        .map(|(index, row)| {
            if !row.is_object() {
                return Err(CatalogError::InvalidRecord {
                    index,
                    reason: format!("expected object, got {}", value_kind(&row)),
                });
            }
            serde_json::from_value::<CatalogRecord>(row).map_err(|e| CatalogError::InvalidRecord {
                index,
                reason: e.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let catalog = Catalog::from_records(records)?;
    log::debug!("카탈로그 로드: {}개", catalog.len());
    Ok(catalog)
}

/// JSON 파일에서 카탈로그 로드
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog, CatalogError> {
    let content = fs::read_to_string(path.as_ref())?;
    parse_catalog(&content)
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

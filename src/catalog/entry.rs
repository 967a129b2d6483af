//! 카탈로그 항목과 메타데이터 해석

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 검색 대상 약품 하나
///
/// `attributes`는 엔진이 해석하지 않고 그대로 전달하는 메타데이터입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// 검색/표시용 약품명
    pub name: String,
    #[serde(default)]
    pub attributes: Value,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>, attributes: Value) -> Self {
        Self {
            name: name.into(),
            attributes,
        }
    }

    /// 메타데이터 없는 항목
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, Value::Null)
    }

    /// 저장소 행에서 변환
    ///
    /// - `content`가 없으면 빈 이름
    /// - `metadata`가 JSON 문자열이면 파싱, 파싱 실패 시 문자열 그대로 보존
    pub fn from_record(record: CatalogRecord) -> Self {
        let attributes = match record.metadata {
            Some(Value::String(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                log::warn!("metadata 파싱 실패, 원문 유지: {}", e);
                Value::String(raw)
            }),
            Some(other) => other,
            None => Value::Null,
        };
        Self {
            name: record.content.unwrap_or_default(),
            attributes,
        }
    }

    /// 표준 메타데이터 필드 해석
    pub fn drug_attributes(&self) -> DrugAttributes {
        DrugAttributes::resolve(&self.attributes)
    }
}

/// 외부 저장소의 원본 행 (`content`, `metadata` 컬럼)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogRecord {
    #[serde(default)]
    pub content: Option<String>,
    /// 객체 또는 JSON 인코딩된 문자열
    #[serde(default)]
    pub metadata: Option<Value>,
}

/// 응답에 노출하는 대표 메타데이터 필드
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DrugAttributes {
    pub product_name: Option<String>,
    pub ingredient: Option<String>,
    pub ingredient_a: Option<String>,
}

impl DrugAttributes {
    /// 한글 필드명을 우선하고 없으면 영문 필드명 사용
    pub fn resolve(metadata: &Value) -> Self {
        Self {
            product_name: first_text(metadata, &["제품명", "product_name"]),
            ingredient: first_text(metadata, &["성분명", "ingredient"]),
            ingredient_a: first_text(metadata, &["성분명A"]),
        }
    }
}

/// 처음으로 비어 있지 않은 값을 문자열로
fn first_text(metadata: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match metadata.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Null | Value::String(_) => None,
        Value::Bool(false) => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    })
}

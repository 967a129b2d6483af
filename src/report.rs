//! 여러 약품명 일괄 검색과 응답 형태 구성
//!
//! 엔진 결과([`ScoredMatch`])를 외부로 내보낼 JSON 구조로 바꿉니다.
//! 필드명은 기존 서비스 응답과 호환되도록 유지합니다.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::catalog::CatalogEntry;
use crate::matching::{Algorithm, MatchEngine, MatchError, ScoredMatch, SearchOptions};

/// 일괄 검색 요청
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchRequest {
    /// 검색할 약품명 목록 (비어 있으면 안 됨)
    #[serde(default)]
    pub drug_names: Vec<String>,
    /// 검색 의도 (그대로 응답에 포함)
    #[serde(default)]
    pub intent: Option<String>,
    /// 원본 질의 (그대로 응답에 포함)
    #[serde(default)]
    pub question_summary: Option<String>,
    #[serde(default)]
    pub algorithm: Algorithm,
    #[serde(default = "default_batch_threshold")]
    pub threshold: i64,
    #[serde(default = "default_batch_limit")]
    pub limit: i64,
}

fn default_batch_threshold() -> i64 {
    50
}

fn default_batch_limit() -> i64 {
    3
}

impl BatchRequest {
    /// 기본 설정으로 요청 생성
    pub fn new<I, S>(drug_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            drug_names: drug_names.into_iter().map(Into::into).collect(),
            intent: None,
            question_summary: None,
            algorithm: Algorithm::default(),
            threshold: default_batch_threshold(),
            limit: default_batch_limit(),
        }
    }

    pub fn with_options(mut self, options: &SearchOptions) -> Self {
        self.algorithm = options.algorithm;
        self.threshold = options.threshold;
        self.limit = options.limit;
        self
    }

    pub fn options(&self) -> SearchOptions {
        SearchOptions {
            algorithm: self.algorithm,
            threshold: self.threshold,
            limit: self.limit,
        }
    }
}

/// 매칭 결과 한 건
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchView {
    #[serde(rename = "약품명")]
    pub drug_name: String,
    #[serde(rename = "제품명")]
    pub product_name: Option<String>,
    #[serde(rename = "성분명")]
    pub ingredient: Option<String>,
    #[serde(rename = "성분명_A")]
    pub ingredient_a: Option<String>,
    #[serde(rename = "유사도점수")]
    pub score: u8,
    pub metadata: Value,
}

impl From<&ScoredMatch<'_>> for MatchView {
    fn from(m: &ScoredMatch<'_>) -> Self {
        let attrs = m.entry.drug_attributes();
        Self {
            drug_name: m.entry.name.clone(),
            product_name: attrs.product_name,
            ingredient: attrs.ingredient,
            ingredient_a: attrs.ingredient_a,
            score: m.score,
            metadata: m.entry.attributes.clone(),
        }
    }
}

/// 최고 점수 항목 요약
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BestMatch {
    #[serde(rename = "약품명")]
    pub drug_name: String,
    pub metadata: Value,
    #[serde(rename = "유사도점수")]
    pub score: u8,
}

/// 약품명 하나의 검색 결과
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DrugNameResult {
    pub input_drug_name: String,
    pub found: bool,
    pub match_count: usize,
    pub matches: Vec<MatchView>,
    pub best_match: Option<BestMatch>,
}

impl DrugNameResult {
    fn from_matches(input: &str, matches: &[ScoredMatch<'_>]) -> Self {
        let best_match = matches.first().map(|m| BestMatch {
            drug_name: m.entry.name.clone(),
            metadata: m.entry.attributes.clone(),
            score: m.score,
        });
        Self {
            input_drug_name: input.to_string(),
            found: !matches.is_empty(),
            match_count: matches.len(),
            matches: matches.iter().map(MatchView::from).collect(),
            best_match,
        }
    }
}

/// 일괄 검색 집계
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSummary {
    pub total_searched: usize,
    pub total_found: usize,
    pub not_found: Vec<String>,
}

/// 일괄 검색 응답
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    pub success: bool,
    pub intent: Option<String>,
    pub original_query: Option<String>,
    pub drug_count: usize,
    pub search_results: Vec<DrugNameResult>,
    pub summary: BatchSummary,
}

/// 단건 검색 응답
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupReport {
    pub success: bool,
    pub input_drug_name: String,
    pub found: bool,
    pub results: Vec<MatchView>,
}

/// 약품명 여러 개를 한 카탈로그에서 검색
///
/// 옵션과 약품명 목록은 검색 전에 검증하며, 실패 시 부분 결과 없이 에러를 반환합니다.
pub fn search_batch(
    engine: &MatchEngine,
    catalog: &[CatalogEntry],
    request: &BatchRequest,
) -> Result<BatchReport, MatchError> {
    if request.drug_names.is_empty() {
        return Err(MatchError::invalid("drug_names", "[]"));
    }
    let options = request.options();
    options.validate()?;

    let search_results = request
        .drug_names
        .iter()
        .map(|name| {
            let matches = engine.search(catalog, name, &options)?;
            Ok(DrugNameResult::from_matches(name, &matches))
        })
        .collect::<Result<Vec<_>, MatchError>>()?;

    let not_found: Vec<String> = search_results
        .iter()
        .filter(|r| !r.found)
        .map(|r| r.input_drug_name.clone())
        .collect();
    let summary = BatchSummary {
        total_searched: request.drug_names.len(),
        total_found: search_results.len() - not_found.len(),
        not_found,
    };
    log::debug!(
        "일괄 검색: {}개 중 {}개 발견",
        summary.total_searched,
        summary.total_found
    );

    Ok(BatchReport {
        success: true,
        intent: request.intent.clone(),
        original_query: request.question_summary.clone(),
        drug_count: request.drug_names.len(),
        search_results,
        summary,
    })
}

/// 약품명 하나를 combined 알고리즘으로 검색
pub fn lookup(
    engine: &MatchEngine,
    catalog: &[CatalogEntry],
    drug_name: &str,
    threshold: i64,
    limit: i64,
) -> Result<LookupReport, MatchError> {
    let options = SearchOptions::new()
        .with_algorithm(Algorithm::Combined)
        .with_threshold(threshold)
        .with_limit(limit);
    let matches = engine.search(catalog, drug_name, &options)?;
    Ok(LookupReport {
        success: true,
        input_drug_name: drug_name.to_string(),
        found: !matches.is_empty(),
        results: matches.iter().map(MatchView::from).collect(),
    })
}

//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::matching::{Algorithm, MatchEngine, SearchOptions, DEFAULT_PARALLEL_THRESHOLD};

/// 설정 파일 경로 환경 변수
pub const CONFIG_ENV: &str = "YAKMATCH_CONFIG";
/// 환경 변수가 없을 때 사용하는 파일명 (현재 디렉토리 기준)
pub const DEFAULT_CONFIG_FILE: &str = "yakmatch.json";

/// 설정 저장 에러
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("설정 파일 저장 실패: {0}")]
    Io(#[from] io::Error),
    #[error("직렬화 실패: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// yakmatch 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct YakmatchConfig {
    /// 기본 알고리즘
    #[serde(default)]
    pub algorithm: Algorithm,
    /// 최소 유사도 점수
    #[serde(default = "default_threshold")]
    pub threshold: i64,
    /// 약품명당 최대 결과 개수
    #[serde(default = "default_limit")]
    pub limit: i64,
    /// 이 크기 이상의 카탈로그는 병렬 스코어링
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
}

fn default_threshold() -> i64 {
    30
}

fn default_limit() -> i64 {
    5
}

fn default_parallel_threshold() -> usize {
    DEFAULT_PARALLEL_THRESHOLD
}

impl Default for YakmatchConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            threshold: default_threshold(),
            limit: default_limit(),
            parallel_threshold: default_parallel_threshold(),
        }
    }
}

impl YakmatchConfig {
    /// 검색 옵션으로 변환
    pub fn search_options(&self) -> SearchOptions {
        SearchOptions::new()
            .with_algorithm(self.algorithm)
            .with_threshold(self.threshold)
            .with_limit(self.limit)
    }

    /// 설정값을 반영한 엔진 생성
    pub fn engine(&self) -> MatchEngine {
        MatchEngine::new().with_parallel_threshold(self.parallel_threshold)
    }
}

/// 설정 파일 경로: $YAKMATCH_CONFIG, 없으면 ./yakmatch.json
pub fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> YakmatchConfig {
    load_config_from(config_path())
}

/// 지정한 경로에서 설정 로드
pub fn load_config_from(path: impl AsRef<Path>) -> YakmatchConfig {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("설정 파일 파싱 실패 ({}), 기본값 사용: {}", path.display(), e);
            YakmatchConfig::default()
        }),
        Err(_) => YakmatchConfig::default(),
    }
}

/// 설정 파일 저장
pub fn save_config(config: &YakmatchConfig, path: impl AsRef<Path>) -> Result<(), ConfigError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    Ok(())
}

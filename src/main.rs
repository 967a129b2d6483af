//! yakmatch - 약품명 유사도 검색 CLI
//!
//! 사용법: yakmatch <catalog.json> <약품명>...

use std::process;
use std::sync::Arc;

use yakmatch::catalog::load_catalog;
use yakmatch::config::{config_path, load_config};
use yakmatch::matching::LogObserver;
use yakmatch::report::{search_batch, BatchRequest};

fn main() {
    // 로깅 초기화 (error/warn만 출력, RUST_LOG로 조정)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut args = std::env::args().skip(1);
    let Some(catalog_path) = args.next() else {
        eprintln!("사용법: yakmatch <catalog.json> <약품명>...");
        process::exit(2);
    };
    let drug_names: Vec<String> = args.collect();

    // 설정 로드
    let config = load_config();
    log::debug!("설정: {} → {:?}", config_path().display(), config);

    let catalog = match load_catalog(&catalog_path) {
        Ok(catalog) => catalog,
        Err(e) => {
            log::error!("카탈로그 로드 실패: {}", e);
            eprintln!("카탈로그 로드 실패 ({}): {}", catalog_path, e);
            process::exit(1);
        }
    };

    let engine = config.engine().with_observer(Arc::new(LogObserver));
    let request = BatchRequest::new(drug_names).with_options(&config.search_options());

    let report = match search_batch(&engine, &catalog, &request) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("검색 실패: {}", e);
            process::exit(1);
        }
    };

    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("응답 직렬화 실패: {}", e);
            process::exit(1);
        }
    }
}

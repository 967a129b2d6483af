//! 약품 카탈로그
//!
//! 외부 저장소에서 가져온 `{content, metadata}` 행을 엔진이 쓰는
//! 단일 형태의 [`CatalogEntry`]로 변환합니다. 메타데이터 필드명
//! 분기(`제품명`/`product_name` 등)는 모두 여기서 처리하며 엔진은 관여하지 않습니다.

mod entry;
mod loader;

pub use entry::{CatalogEntry, CatalogRecord, DrugAttributes};
pub use loader::{load_catalog, parse_catalog, Catalog, CatalogError};

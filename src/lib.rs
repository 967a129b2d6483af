pub mod catalog;
pub mod config;
pub mod core;
pub mod matching;
pub mod report;

pub use catalog::{Catalog, CatalogEntry};
pub use matching::{Algorithm, MatchEngine, MatchError, ScoredMatch, SearchOptions};
pub use report::{search_batch, BatchRequest, BatchReport};

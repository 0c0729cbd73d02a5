//! In-memory keyword search: documents go into an inverted index and queries
//! come back as the top-k documents ranked by TF-IDF.

pub mod config;
pub mod engine;
pub mod error;
pub mod index;
pub mod scorer;
pub mod shared;
pub mod tokenizer;
pub mod topk;

pub use config::{DuplicatePolicy, EngineConfig, TokenizerConfig};
pub use engine::SearchEngine;
pub use error::{Result, SearchError};
pub use shared::SharedEngine;
pub use topk::ScoredDoc;

pub type DocId = u32;

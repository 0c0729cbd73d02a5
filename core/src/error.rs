use thiserror::Error;

pub type Result<T> = std::result::Result<T, SearchError>;

#[derive(Error, Debug)]
pub enum SearchError {
    /// The identifier is already in the index and the engine rejects duplicates.
    #[error("document {id} is already indexed")]
    DuplicateDocument { id: String },

    #[error("invalid engine configuration: {0}")]
    Config(#[from] serde_json::Error),
}

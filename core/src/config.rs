use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Number of results returned by [`crate::SearchEngine::search_default`].
pub const DEFAULT_K: usize = 5;

/// What `add_document` does with an identifier that is already indexed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Fail with [`crate::SearchError::DuplicateDocument`].
    #[default]
    Reject,
    /// Drop every contribution of the old document, then index the new text.
    Replace,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    /// Apply NFKC normalization before splitting into terms.
    pub unicode_normalization: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub default_k: usize,
    pub duplicate_policy: DuplicatePolicy,
    pub tokenizer: TokenizerConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_k: DEFAULT_K,
            duplicate_policy: DuplicatePolicy::default(),
            tokenizer: TokenizerConfig::default(),
        }
    }
}

impl EngineConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

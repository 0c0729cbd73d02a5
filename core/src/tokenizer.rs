use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::config::TokenizerConfig;

lazy_static! {
    // Letter and number categories only: circled letters and combining
    // vowel signs are separators.
    static ref RE: Regex = Regex::new(r"[\p{L}\p{N}]+").expect("valid regex");
}

/// Split text into lowercase alphanumeric terms. Anything that is not a letter
/// or a number separates terms and is dropped.
pub fn tokenize(text: &str) -> Vec<String> {
    // per character, so final sigma lowercases the same as any other sigma
    RE.find_iter(text)
        .map(|m| m.as_str().chars().flat_map(char::to_lowercase).collect())
        .collect()
}

/// Tokenizer shared by ingestion and query parsing, so both sides always
/// produce the same terms for the same input.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    config: TokenizerConfig,
}

impl Tokenizer {
    pub fn new(config: TokenizerConfig) -> Self { Self { config } }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        if self.config.unicode_normalization {
            let normalized = text.nfkc().collect::<String>();
            tokenize(&normalized)
        } else {
            tokenize(text)
        }
    }
}

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use tracing::{debug, trace};

use crate::config::{DuplicatePolicy, EngineConfig};
use crate::error::{Result, SearchError};
use crate::index::InvertedIndex;
use crate::scorer::Scorer;
use crate::tokenizer::Tokenizer;
use crate::topk::{top_k, ScoredDoc};
use crate::DocId;

/// Keyword search engine: an inverted index ranked by TF-IDF.
///
/// Ingestion needs `&mut self` while `search` only needs `&self`, so any
/// number of searches may share an engine as long as nothing is being added.
#[derive(Debug)]
pub struct SearchEngine<K = DocId> {
    index: InvertedIndex<K>,
    tokenizer: Tokenizer,
    config: EngineConfig,
}

impl<K> Default for SearchEngine<K>
where
    K: Ord + Hash + Clone + Debug,
{
    fn default() -> Self { Self::new() }
}

impl<K> SearchEngine<K>
where
    K: Ord + Hash + Clone + Debug,
{
    pub fn new() -> Self { Self::with_config(EngineConfig::default()) }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            index: InvertedIndex::new(),
            tokenizer: Tokenizer::new(config.tokenizer.clone()),
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig { &self.config }

    /// Add a document. Reusing an id fails with
    /// [`SearchError::DuplicateDocument`] unless the engine is configured with
    /// [`DuplicatePolicy::Replace`].
    pub fn add_document(&mut self, id: K, text: impl Into<String>) -> Result<()> {
        if self.config.duplicate_policy == DuplicatePolicy::Reject && self.index.contains(&id) {
            return Err(SearchError::DuplicateDocument { id: format!("{id:?}") });
        }

        let text = text.into();
        let tokens = self.tokenizer.tokenize(&text);
        let term_count = tokens.len();
        if self.index.insert(id.clone(), text, &tokens).is_some() {
            debug!(?id, "replaced document");
        }
        debug!(doc_count = self.index.num_docs(), term_count, "indexed document");
        Ok(())
    }

    /// Add documents in order, stopping at the first error.
    pub fn add_documents<I, T>(&mut self, docs: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, T)>,
        T: Into<String>,
    {
        for (id, text) in docs {
            self.add_document(id, text)?;
        }
        Ok(())
    }

    /// Top `k` documents for `query`, best first; equal scores are ordered by
    /// descending id. Only documents sharing at least one term with the query
    /// are scored.
    pub fn search(&self, query: &str, k: usize) -> Vec<ScoredDoc<K>> {
        let terms = self.tokenizer.tokenize(query);
        if terms.is_empty() || k == 0 {
            return Vec::new();
        }

        let scorer = Scorer::new(&self.index);
        let mut scores: HashMap<&K, f64> = HashMap::new();
        // a term repeated in the query contributes once per occurrence
        for term in &terms {
            let Some(docs) = self.index.postings(term) else { continue };
            for doc in docs {
                if let Some(weight) = scorer.tfidf(term, doc) {
                    *scores.entry(doc).or_insert(0.0) += weight;
                }
            }
        }

        let candidates = scores.len();
        let results: Vec<ScoredDoc<K>> = top_k(scores, k)
            .into_iter()
            .map(|hit| ScoredDoc { score: hit.score, doc_id: hit.doc_id.clone() })
            .collect();
        trace!(terms = terms.len(), candidates, k, returned = results.len(), "search");
        results
    }

    /// [`search`](Self::search) with the configured `default_k`.
    pub fn search_default(&self, query: &str) -> Vec<ScoredDoc<K>> {
        self.search(query, self.config.default_k)
    }

    /// Original text of a document.
    pub fn document(&self, id: &K) -> Option<&str> {
        self.index.document(id).map(|doc| doc.text.as_str())
    }

    pub fn contains(&self, id: &K) -> bool { self.index.contains(id) }

    pub fn len(&self) -> usize { self.index.num_docs() }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    pub fn document_frequency(&self, term: &str) -> usize { self.index.df(term) as usize }

    pub fn postings(&self, term: &str) -> Option<&HashSet<K>> { self.index.postings(term) }

    pub fn term_frequency(&self, term: &str, id: &K) -> Option<u32> { self.index.tf(term, id) }

    pub fn terms(&self) -> impl Iterator<Item = &str> + '_ { self.index.terms() }
}

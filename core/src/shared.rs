use parking_lot::RwLock;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;

use crate::engine::SearchEngine;
use crate::error::Result;
use crate::topk::ScoredDoc;
use crate::DocId;

/// Cloneable handle for using one engine from several threads.
/// Searches take a read lock and run concurrently; ingestion takes the write lock.
#[derive(Debug)]
pub struct SharedEngine<K = DocId> {
    inner: Arc<RwLock<SearchEngine<K>>>,
}

impl<K> Clone for SharedEngine<K> {
    fn clone(&self) -> Self { Self { inner: Arc::clone(&self.inner) } }
}

impl<K> SharedEngine<K>
where
    K: Ord + Hash + Clone + Debug,
{
    pub fn new(engine: SearchEngine<K>) -> Self {
        Self { inner: Arc::new(RwLock::new(engine)) }
    }

    pub fn add_document(&self, id: K, text: impl Into<String>) -> Result<()> {
        self.inner.write().add_document(id, text)
    }

    pub fn search(&self, query: &str, k: usize) -> Vec<ScoredDoc<K>> {
        self.inner.read().search(query, k)
    }

    /// Run `f` against the engine under a read lock.
    pub fn read<R>(&self, f: impl FnOnce(&SearchEngine<K>) -> R) -> R {
        f(&self.inner.read())
    }
}

use std::hash::Hash;

use crate::index::InvertedIndex;

/// TF-IDF weights over an [`InvertedIndex`].
///
/// IDF values are memoized in the index's cache, which the index clears on
/// every insert, so a cached value always matches the current N and df.
#[derive(Debug)]
pub struct Scorer<'a, K> {
    index: &'a InvertedIndex<K>,
}

impl<'a, K: Eq + Hash + Clone> Scorer<'a, K> {
    pub fn new(index: &'a InvertedIndex<K>) -> Self { Self { index } }

    /// `ln(1 + N / (1 + df))`. Finite for unseen terms (df = 0).
    pub fn idf(&self, term: &str) -> f64 {
        let mut cache = self.index.idf_cache().lock();
        if let Some(&idf) = cache.get(term) {
            return idf;
        }
        let n = self.index.num_docs() as f64;
        let df = f64::from(self.index.df(term));
        let idf = (1.0 + n / (1.0 + df)).ln();
        cache.insert(term.to_owned(), idf);
        idf
    }

    /// `(1 + ln(tf)) * idf(term)`, or `None` when `doc` does not contain `term`.
    pub fn tfidf(&self, term: &str, doc: &K) -> Option<f64> {
        let tf = self.index.tf(term, doc)?;
        Some((1.0 + f64::from(tf).ln()) * self.idf(term))
    }
}

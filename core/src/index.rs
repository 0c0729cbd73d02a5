use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// A stored document: its original text and how often each term occurs in it.
#[derive(Debug, Clone)]
pub struct DocEntry {
    pub text: String,
    pub terms: HashMap<String, u32>, // term -> tf, only counts > 0
}

/// In-memory inverted index.
///
/// `df[term]` always equals `postings[term].len()`, and the IDF cache is
/// cleared by every mutation so it never outlives the corpus it was
/// computed from.
#[derive(Debug)]
pub struct InvertedIndex<K> {
    docs: HashMap<K, DocEntry>,
    postings: HashMap<String, HashSet<K>>,
    df: HashMap<String, u32>,
    idf_cache: Mutex<HashMap<String, f64>>,
}

impl<K> Default for InvertedIndex<K> {
    fn default() -> Self {
        Self {
            docs: HashMap::new(),
            postings: HashMap::new(),
            df: HashMap::new(),
            idf_cache: Mutex::new(HashMap::new()),
        }
    }
}

impl<K: Eq + Hash + Clone> InvertedIndex<K> {
    pub fn new() -> Self { Self::default() }

    /// Corpus size N.
    pub fn num_docs(&self) -> usize { self.docs.len() }

    pub fn contains(&self, id: &K) -> bool { self.docs.contains_key(id) }

    pub fn document(&self, id: &K) -> Option<&DocEntry> { self.docs.get(id) }

    pub fn postings(&self, term: &str) -> Option<&HashSet<K>> { self.postings.get(term) }

    /// Document frequency; 0 for unseen terms.
    pub fn df(&self, term: &str) -> u32 { self.df.get(term).copied().unwrap_or(0) }

    pub fn tf(&self, term: &str, id: &K) -> Option<u32> {
        self.docs.get(id)?.terms.get(term).copied()
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> + '_ {
        self.postings.keys().map(String::as_str)
    }

    pub(crate) fn idf_cache(&self) -> &Mutex<HashMap<String, f64>> { &self.idf_cache }

    /// Number of terms whose IDF is currently cached.
    pub fn cached_idf_len(&self) -> usize { self.idf_cache.lock().len() }

    /// Index `text` under `id` from its already tokenized `tokens`.
    ///
    /// If `id` was present its old contributions are removed first and the old
    /// text is returned; the caller decides whether replacing is allowed.
    pub fn insert(&mut self, id: K, text: String, tokens: &[String]) -> Option<String> {
        let previous = self.docs.remove(&id).map(|old| {
            self.retract(&id, &old);
            old.text
        });

        let mut terms: HashMap<String, u32> = HashMap::new();
        for token in tokens {
            *terms.entry(token.clone()).or_insert(0) += 1;
        }

        for term in terms.keys() {
            let docs = self.postings.entry(term.clone()).or_default();
            // df moves only when the (term, doc) pair is new
            if docs.insert(id.clone()) {
                *self.df.entry(term.clone()).or_insert(0) += 1;
            }
        }

        self.docs.insert(id, DocEntry { text, terms });
        self.idf_cache.get_mut().clear();
        previous
    }

    fn retract(&mut self, id: &K, old: &DocEntry) {
        for term in old.terms.keys() {
            let emptied = match self.postings.get_mut(term) {
                Some(docs) => {
                    if docs.remove(id) {
                        let remaining = self.df.get_mut(term).map(|n| {
                            *n = n.saturating_sub(1);
                            *n
                        });
                        if remaining == Some(0) {
                            self.df.remove(term);
                        }
                    }
                    docs.is_empty()
                }
                None => false,
            };
            if emptied {
                self.postings.remove(term);
            }
        }
    }
}

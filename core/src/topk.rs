use ordered_float::OrderedFloat;
use serde::Serialize;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// One ranked search result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredDoc<K> {
    pub score: f64,
    pub doc_id: K,
}

/// Return the `k` best `(doc_id, score)` pairs, best first.
///
/// Ranking key is `(score, doc_id)` compared lexicographically, larger first,
/// so equal scores come out by descending id. Keeps a min-heap of at most `k`
/// entries: O(n log k) instead of sorting every candidate.
pub fn top_k<K, I>(scores: I, k: usize) -> Vec<ScoredDoc<K>>
where
    K: Ord,
    I: IntoIterator<Item = (K, f64)>,
{
    if k == 0 {
        return Vec::new();
    }

    let scores = scores.into_iter();
    let capacity = k.min(scores.size_hint().0);
    let mut heap: BinaryHeap<Reverse<(OrderedFloat<f64>, K)>> = BinaryHeap::with_capacity(capacity);
    for (doc_id, score) in scores {
        let entry = Reverse((OrderedFloat(score), doc_id));
        if heap.len() < k {
            heap.push(entry);
        } else if let Some(mut weakest) = heap.peek_mut() {
            // reversed order: smaller wrapper means larger key
            if entry < *weakest {
                *weakest = entry;
            }
        }
    }

    heap.into_sorted_vec()
        .into_iter()
        .map(|Reverse((score, doc_id))| ScoredDoc { score: score.into_inner(), doc_id })
        .collect()
}

//! Counting and ranking helpers shared by the statistics.

use std::collections::HashMap;
use std::hash::Hash;

/// Counts items and returns them by descending count.
///
/// Items with equal counts keep the order in which they were first seen, so
/// the result is fully determined by the input order. `limit` truncates the
/// ranking.
///
/// # Example
/// Input:  `["b", "a", "b", "c", "a"]`, limit `Some(2)`
/// Output: `[("b", 2), ("a", 2)]`
pub fn rank_counts<K, I>(items: I, limit: Option<usize>) -> Vec<(K, usize)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = K>,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut counts: Vec<(K, usize)> = Vec::new();

    for item in items {
        match index.get(&item) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                index.insert(item.clone(), counts.len());
                counts.push((item, 1));
            }
        }
    }

    // Stable: ties stay in first-seen order.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    if let Some(limit) = limit {
        counts.truncate(limit);
    }
    counts
}

/// Percentage of `part` in `total`, rounded to two decimals.
///
/// Returns `0.0` when `total` is zero.
pub fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let value = part as f64 / total as f64 * 100.0;
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_counts_orders_by_count() {
        let ranked = rank_counts(["a", "b", "b", "c", "b", "c"], None);
        assert_eq!(ranked, [("b", 3), ("c", 2), ("a", 1)]);
    }

    #[test]
    fn test_rank_counts_ties_keep_first_seen() {
        let ranked = rank_counts(["b", "a", "b", "c", "a"], None);
        assert_eq!(ranked, [("b", 2), ("a", 2), ("c", 1)]);
    }

    #[test]
    fn test_rank_counts_limit() {
        let ranked = rank_counts(["x", "y", "z"], Some(2));
        assert_eq!(ranked, [("x", 1), ("y", 1)]);
    }

    #[test]
    fn test_rank_counts_empty() {
        let ranked: Vec<(&str, usize)> = rank_counts(Vec::<&str>::new(), Some(5));
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(1, 3), 33.33);
        assert_eq!(percent(2, 3), 66.67);
        assert_eq!(percent(3, 3), 100.0);
        assert_eq!(percent(0, 0), 0.0);
    }
}

//! Pairwise shared-n-gram counting driven by the inverted index.

use crate::index::NgramIndex;
use crate::map::AvlMap;
use crate::models::DocumentPair;

/// Shared-gram counts keyed by ordered pair. Both directions of every
/// matching pair are present with the same count; the ranker collapses
/// them to one.
pub type SimilarityMap = AvlMap<DocumentPair, usize>;

/// Count shared n-grams for every pair of documents that co-occur in at
/// least one posting list.
///
/// Each index entry contributes one increment per ordered pair of distinct
/// documents in its list, so documents with nothing in common are never
/// compared at all. Work is quadratic in posting-list length, not in the
/// corpus size.
pub fn score_pairs(index: &NgramIndex) -> SimilarityMap {
    let mut similarity = SimilarityMap::new();
    for (_, postings) in index {
        for first in postings {
            for second in postings {
                if first == second {
                    continue;
                }
                let pair = DocumentPair::new(first.clone(), second.clone());
                if let Some(count) = similarity.get_mut(&pair) {
                    *count += 1;
                } else {
                    similarity.insert(pair, 1);
                }
            }
        }
    }
    similarity
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use crate::corpus::DocumentMap;
    use crate::index::build_index;
    use crate::ngram::Ngram;

    fn documents(entries: &[(&str, &[&str])]) -> DocumentMap {
        let mut map = DocumentMap::new();
        for (path, grams) in entries {
            map.insert(
                PathBuf::from(path),
                grams.iter().map(|gram| Ngram::new(*gram)).collect(),
            );
        }
        map
    }

    fn count(similarity: &SimilarityMap, first: &str, second: &str) -> Option<usize> {
        similarity.get(&DocumentPair::new(first, second)).copied()
    }

    #[test]
    fn disjoint_documents_produce_no_pairs() {
        let docs = documents(&[("a.txt", &["aaaaa"]), ("b.txt", &["bbbbb"])]);
        let similarity = score_pairs(&build_index(&docs));
        assert!(similarity.is_empty());
    }

    #[test]
    fn shared_grams_are_counted_in_both_directions() {
        let docs = documents(&[
            ("a.txt", &["aaaaa", "bbbbb", "ccccc"]),
            ("b.txt", &["aaaaa", "bbbbb", "ddddd"]),
        ]);
        let similarity = score_pairs(&build_index(&docs));
        assert_eq!(count(&similarity, "a.txt", "b.txt"), Some(2));
        assert_eq!(count(&similarity, "b.txt", "a.txt"), Some(2));
        assert_eq!(similarity.len(), 2);
    }

    #[test]
    fn documents_never_pair_with_themselves() {
        let docs = documents(&[("a.txt", &["aaaaa", "bbbbb"])]);
        let similarity = score_pairs(&build_index(&docs));
        assert!(similarity.is_empty());
    }

    #[test]
    fn counts_accumulate_across_posting_lists() {
        let docs = documents(&[
            ("a.txt", &["aaaaa", "bbbbb", "ccccc"]),
            ("b.txt", &["aaaaa", "ccccc", "eeeee"]),
            ("c.txt", &["aaaaa"]),
        ]);
        let similarity = score_pairs(&build_index(&docs));
        assert_eq!(count(&similarity, "a.txt", "b.txt"), Some(2));
        assert_eq!(count(&similarity, "a.txt", "c.txt"), Some(1));
        assert_eq!(count(&similarity, "b.txt", "c.txt"), Some(1));
        // Three unordered pairs, stored in both directions.
        assert_eq!(similarity.len(), 6);
    }

    #[test]
    fn identical_documents_score_their_distinct_gram_count() {
        let grams: &[&str] = &["aaaaa", "bbbbb", "ccccc", "ddddd"];
        let docs = documents(&[("a.txt", grams), ("b.txt", grams)]);
        let similarity = score_pairs(&build_index(&docs));
        assert_eq!(count(&similarity, "a.txt", "b.txt"), Some(4));
    }

    #[test]
    fn pairs_without_shared_grams_are_absent_not_zero() {
        let docs = documents(&[
            ("a.txt", &["aaaaa"]),
            ("b.txt", &["aaaaa"]),
            ("c.txt", &["zzzzz"]),
        ]);
        let similarity = score_pairs(&build_index(&docs));
        assert_eq!(count(&similarity, "a.txt", "c.txt"), None);
        assert_eq!(count(&similarity, "b.txt", "c.txt"), None);
        assert_eq!(similarity.len(), 2);
    }
}

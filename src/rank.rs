//! Threshold filtering and ordering of the similarity map.

use crate::models::RankedPair;
use crate::similarity::SimilarityMap;

/// Reduce the similarity map to the rows worth reporting.
///
/// A pair qualifies when its shared count is at least `min_shared`. The map
/// holds both directions of every pair, so only the `first < second`
/// direction is kept. Rows are sorted by shared count descending, ties
/// broken by ascending pair order, which makes repeated runs print
/// identical reports.
pub fn most_similar(similarity: &SimilarityMap, min_shared: usize) -> Vec<RankedPair> {
    let mut ranked: Vec<RankedPair> = similarity
        .iter()
        .filter(|(pair, count)| **count >= min_shared && pair.is_canonical())
        .map(|(pair, count)| RankedPair::new(pair.clone(), *count))
        .collect();
    ranked.sort_by(|a, b| b.shared.cmp(&a.shared).then_with(|| a.pair.cmp(&b.pair)));
    ranked
}

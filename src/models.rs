//! Data structures shared across the gramscan pipeline.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::map::AvlMap;
use crate::ngram::DEFAULT_NGRAM_SIZE;

/// An ordered pair of distinct document paths.
///
/// Equality and ordering are the derived lexicographic comparison on
/// `(first, second)`, so `(a, b)` and `(b, a)` are different keys. The
/// similarity map carries both directions of every matching pair with
/// identical counts; the ranker keeps only the `first < second` direction.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DocumentPair {
    pub first: PathBuf,
    pub second: PathBuf,
}

impl DocumentPair {
    pub fn new(first: impl Into<PathBuf>, second: impl Into<PathBuf>) -> Self {
        DocumentPair {
            first: first.into(),
            second: second.into(),
        }
    }

    /// The same pair with the roles exchanged.
    pub fn swapped(&self) -> Self {
        DocumentPair {
            first: self.second.clone(),
            second: self.first.clone(),
        }
    }

    /// True for the direction kept in reports (`first < second`).
    pub fn is_canonical(&self) -> bool {
        self.first < self.second
    }
}

impl fmt::Display for DocumentPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} and {}", self.first.display(), self.second.display())
    }
}

/// Scan parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanParams {
    /// Characters per extraction window.
    pub ngram_size: usize,
    /// Minimum shared n-gram count for a pair to be reported (inclusive).
    pub min_shared: usize,
}

impl Default for ScanParams {
    fn default() -> Self {
        Self {
            ngram_size: DEFAULT_NGRAM_SIZE,
            min_shared: 30,
        }
    }
}

/// One row of the ranked report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedPair {
    pub pair: DocumentPair,
    pub shared: usize,
}

impl RankedPair {
    pub fn new(pair: DocumentPair, shared: usize) -> Self {
        RankedPair { pair, shared }
    }
}

/// Size and height of one ordered map, captured after its phase completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapStats {
    pub size: usize,
    pub height: usize,
}

impl MapStats {
    pub fn of<K, V>(map: &AvlMap<K, V>) -> Self {
        MapStats {
            size: map.len(),
            height: map.height(),
        }
    }
}

/// Corpus-level counters plus the balance diagnostics of the three maps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanSummary {
    pub document_count: usize,
    /// N-gram occurrences summed over documents (each document's grams
    /// already deduplicated).
    pub total_ngrams: usize,
    /// Distinct n-grams across the whole corpus (index size).
    pub distinct_ngrams: usize,
    /// Unordered document pairs sharing at least one n-gram.
    pub candidate_pairs: usize,
    /// Pairs that met the reporting threshold.
    pub reported_pairs: usize,
    pub documents: MapStats,
    pub index: MapStats,
    pub similarity: MapStats,
}

/// Full scan result
#[derive(Debug, Serialize, Deserialize)]
pub struct ScanResult {
    pub version: String,
    pub directory: Option<PathBuf>,
    pub parameters: ScanParams,
    pub summary: ScanSummary,
    pub matches: Vec<RankedPair>,
}

//! N-gram near-duplicate detection for text corpora.
//!
//! Chops every document in a directory into overlapping character n-grams,
//! builds an inverted index from gram to documents, counts the grams each
//! pair of documents shares, and reports the pairs above a threshold, most
//! similar first. Every phase keeps its data in an ordered map, so runs
//! are reproducible and tree balance can be inspected afterwards.
//!
//! # Example
//!
//! ```no_run
//! use gramscan::prelude::*;
//! use std::path::Path;
//!
//! let params = ScanParams::default();
//! let result = scan_directory(Path::new("documents"), &params, true).unwrap();
//!
//! print_stats(&result);
//! print_report(&result, None);
//! ```
//!
//! # In-memory example
//!
//! ```
//! use gramscan::prelude::*;
//! use std::path::PathBuf;
//!
//! let mut documents = DocumentMap::new();
//! documents.insert(PathBuf::from("a.txt"), extract_ngrams("one shared phrase", 5));
//! documents.insert(PathBuf::from("b.txt"), extract_ngrams("one shared phrase, edited", 5));
//!
//! let params = ScanParams { min_shared: 5, ..Default::default() };
//! let result = scan_documents(&documents, &params, false);
//! assert_eq!(result.matches.len(), 1);
//! ```

pub mod corpus;
pub mod index;
pub mod map;
pub mod models;
pub mod ngram;
pub mod output;
pub mod rank;
pub mod scan;
pub mod similarity;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::corpus::{
        list_documents, read_corpus, read_documents, CorpusError, DocumentMap,
    };
    pub use crate::index::{build_index, NgramIndex};
    pub use crate::map::AvlMap;
    pub use crate::models::{
        DocumentPair, MapStats, RankedPair, ScanParams, ScanResult, ScanSummary,
    };
    pub use crate::ngram::{extract_ngrams, Ngram, DEFAULT_NGRAM_SIZE};
    pub use crate::output::{
        format_match, print_report, print_stats, print_summary, write_csv, write_csv_file,
        write_json, write_json_file, OutputError,
    };
    pub use crate::rank::most_similar;
    pub use crate::scan::{scan_directory, scan_documents};
    pub use crate::similarity::{score_pairs, SimilarityMap};
}

// Re-export commonly used types at the crate root
pub use map::AvlMap;
pub use models::{DocumentPair, RankedPair, ScanParams, ScanResult};

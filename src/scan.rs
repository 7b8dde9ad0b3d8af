//! Scan orchestration.
//!
//! Drives the full pipeline over a directory: read documents, build the
//! inverted index, score pairs, rank, and capture the summary diagnostics.

use std::path::Path;
use std::time::Instant;

use crate::corpus::{read_corpus, CorpusError, DocumentMap};
use crate::index::build_index;
use crate::models::{MapStats, ScanParams, ScanResult, ScanSummary};
use crate::rank::most_similar;
use crate::similarity::score_pairs;

/// Run the in-memory phases over an already-loaded corpus.
pub fn scan_documents(
    documents: &DocumentMap,
    params: &ScanParams,
    show_progress: bool,
) -> ScanResult {
    if show_progress {
        eprintln!("Building n-gram index...");
    }
    let start = Instant::now();
    let index = build_index(documents);
    if show_progress {
        eprintln!("  {} distinct n-grams in {:.2?}", index.len(), start.elapsed());
    }

    if show_progress {
        eprintln!("Scoring document pairs...");
    }
    let start = Instant::now();
    let similarity = score_pairs(&index);
    if show_progress {
        // Both directions of each pair are stored, so halve for display.
        eprintln!(
            "  {} candidate pairs in {:.2?}",
            similarity.len() / 2,
            start.elapsed()
        );
    }

    if show_progress {
        eprintln!("Ranking pairs (min shared: {})...", params.min_shared);
    }
    let matches = most_similar(&similarity, params.min_shared);
    if show_progress {
        eprintln!("  {} pairs at or above threshold", matches.len());
    }

    let total_ngrams: usize = documents.iter().map(|(_, grams)| grams.len()).sum();

    let summary = ScanSummary {
        document_count: documents.len(),
        total_ngrams,
        distinct_ngrams: index.len(),
        candidate_pairs: similarity.len() / 2,
        reported_pairs: matches.len(),
        documents: MapStats::of(documents),
        index: MapStats::of(&index),
        similarity: MapStats::of(&similarity),
    };

    ScanResult {
        version: env!("CARGO_PKG_VERSION").to_string(),
        directory: None,
        parameters: params.clone(),
        summary,
        matches,
    }
}

/// Read a directory and scan it.
pub fn scan_directory(
    dir: &Path,
    params: &ScanParams,
    show_progress: bool,
) -> Result<ScanResult, CorpusError> {
    let start = Instant::now();
    let documents = read_corpus(dir, params, show_progress)?;
    if show_progress {
        eprintln!(
            "  {} documents read in {:.2?}",
            documents.len(),
            start.elapsed()
        );
    }

    let mut result = scan_documents(&documents, params, show_progress);
    result.directory = Some(dir.to_path_buf());
    Ok(result)
}

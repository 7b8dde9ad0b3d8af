//! Output formatting for scan results (report, statistics, JSON, CSV).

use crate::models::{RankedPair, ScanResult};
use std::io::{self, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Format one report row: right-aligned count, then the pair.
pub fn format_match(row: &RankedPair) -> String {
    format!("{:>5} similarity: {}", row.shared, row.pair)
}

/// Print the ranked report to stdout, most similar pairs first.
pub fn print_report(result: &ScanResult, limit: Option<usize>) {
    let matches = &result.matches;
    let to_print = match limit {
        Some(n) => &matches[..n.min(matches.len())],
        None => matches,
    };

    println!("Plagiarism report:");
    for row in to_print {
        println!("{}", format_match(row));
    }

    if let Some(n) = limit {
        if matches.len() > n {
            println!("... and {} more pairs", matches.len() - n);
        }
    }
}

/// Print the size and height of each phase's map to stdout.
pub fn print_stats(result: &ScanResult) {
    let summary = &result.summary;
    println!("\nMap balance statistics:");
    println!(
        "  documents: size {}, height {}",
        summary.documents.size, summary.documents.height
    );
    println!(
        "  index: size {}, height {}",
        summary.index.size, summary.index.height
    );
    println!(
        "  similarity: size {}, height {}",
        summary.similarity.size, summary.similarity.height
    );
    println!();
}

/// Write a corpus summary to stdout.
pub fn print_summary(result: &ScanResult) {
    println!("\n=== Scan Summary ===");
    println!("Version: {}", result.version);
    if let Some(dir) = &result.directory {
        println!("Directory: {}", dir.display());
    }
    println!();
    println!("Parameters:");
    println!("  N-gram size: {}", result.parameters.ngram_size);
    println!("  Min shared: {}", result.parameters.min_shared);
    println!();
    println!("Corpus:");
    println!("  Documents: {}", result.summary.document_count);
    println!("  Total n-grams: {}", result.summary.total_ngrams);
    println!("  Distinct n-grams: {}", result.summary.distinct_ngrams);
    println!();
    println!("Results:");
    println!("  Candidate pairs: {}", result.summary.candidate_pairs);
    println!("  Reported pairs: {}", result.summary.reported_pairs);
}

/// Write the scan result as JSON.
pub fn write_json<W: Write>(result: &ScanResult, writer: &mut W) -> Result<(), OutputError> {
    let json = serde_json::to_string_pretty(result)?;
    writer.write_all(json.as_bytes())?;
    Ok(())
}

/// Write the scan result as JSON to a file.
pub fn write_json_file(result: &ScanResult, path: &Path) -> Result<(), OutputError> {
    let mut file = std::fs::File::create(path)?;
    write_json(result, &mut file)
}

/// Write report rows as CSV.
pub fn write_csv<W: Write>(matches: &[RankedPair], writer: &mut W) -> Result<(), OutputError> {
    // Write header
    writeln!(writer, "first,second,shared")?;

    // Write rows; paths are debug-quoted so commas in names stay intact
    for row in matches {
        writeln!(
            writer,
            "{:?},{:?},{}",
            row.pair.first, row.pair.second, row.shared
        )?;
    }

    Ok(())
}

/// Write report rows as CSV to a file.
pub fn write_csv_file(matches: &[RankedPair], path: &Path) -> Result<(), OutputError> {
    let mut file = std::fs::File::create(path)?;
    write_csv(matches, &mut file)
}

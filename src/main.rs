//! gramscan command-line interface.
//!
//! Scans a directory of text documents for near-duplicates by counting
//! shared character n-grams through an inverted index.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use gramscan::corpus::DocumentMap;
use gramscan::index::build_index;
use gramscan::models::ScanParams;
use gramscan::ngram::extract_ngrams;
use gramscan::output::{print_report, print_stats, print_summary, write_csv_file, write_json_file};
use gramscan::rank::most_similar;
use gramscan::scan::scan_directory;
use gramscan::similarity::score_pairs;

#[derive(Parser)]
#[command(name = "gramscan")]
#[command(about = "N-gram near-duplicate detection for text corpora")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Output format for scan results
#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    /// JSON file with the full scan result
    Json,
    /// CSV file with one row per reported pair
    Csv,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a directory and report the most similar document pairs
    ///
    /// Parameters default to ScanParams::default(); override any of them
    /// explicitly to customize behavior.
    Scan {
        /// Directory of documents to scan
        dir: PathBuf,

        /// Characters per n-gram window [default: 5]
        #[arg(long)]
        ngram_size: Option<usize>,

        /// Minimum shared n-grams for a pair to be reported [default: 30]
        #[arg(long)]
        min_shared: Option<usize>,

        /// Write the scan result to this file
        #[arg(long)]
        output: Option<PathBuf>,

        /// Output format used with --output
        #[arg(long, value_enum, default_value = "json")]
        format: OutputFormat,

        /// Print at most N report lines
        #[arg(long)]
        limit: Option<usize>,

        /// Suppress progress output
        #[arg(long)]
        quiet: bool,
    },

    /// Show corpus statistics for a directory
    Stats {
        /// Directory of documents to scan
        dir: PathBuf,

        /// Characters per n-gram window [default: 5]
        #[arg(long)]
        ngram_size: Option<usize>,

        /// Suppress progress output
        #[arg(long)]
        quiet: bool,
    },

    /// Benchmark the scan phases on a synthetic corpus
    Benchmark {
        /// Number of synthetic documents
        #[arg(long, default_value = "100")]
        documents: usize,

        /// Characters per synthetic document
        #[arg(long, default_value = "2000")]
        chars: usize,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Scan {
            dir,
            ngram_size,
            min_shared,
            output,
            format,
            limit,
            quiet,
        } => {
            // Overlay user-specified values onto the library defaults
            let defaults = ScanParams::default();
            let params = ScanParams {
                ngram_size: ngram_size.unwrap_or(defaults.ngram_size),
                min_shared: min_shared.unwrap_or(defaults.min_shared),
            };

            let result = scan_directory(&dir, &params, !quiet)?;

            if let Some(path) = output {
                match format {
                    OutputFormat::Json => write_json_file(&result, &path)?,
                    OutputFormat::Csv => write_csv_file(&result.matches, &path)?,
                }
                if !quiet {
                    eprintln!("Output: {}", path.display());
                }
            }

            print_stats(&result);
            print_report(&result, limit);
        }

        Commands::Stats {
            dir,
            ngram_size,
            quiet,
        } => {
            let defaults = ScanParams::default();
            let params = ScanParams {
                ngram_size: ngram_size.unwrap_or(defaults.ngram_size),
                ..defaults
            };

            let result = scan_directory(&dir, &params, !quiet)?;
            print_summary(&result);
            print_stats(&result);
        }

        Commands::Benchmark { documents, chars } => {
            run_benchmark(documents, chars);
        }
    }

    Ok(())
}

/// Deterministic synthetic document: a shared skeleton with per-document
/// noise, so roughly 70% of each text is common to the whole corpus.
fn synthetic_document(seed: usize, chars: usize) -> String {
    (0..chars)
        .map(|i| {
            let value = if i % 10 < 7 {
                i.wrapping_mul(31)
            } else {
                i.wrapping_mul(31).wrapping_add(seed.wrapping_mul(101))
            };
            char::from(b'a' + (value % 26) as u8)
        })
        .collect()
}

/// Time each scan phase over a synthetic corpus.
fn run_benchmark(documents: usize, chars: usize) {
    use std::time::Instant;

    println!("=== Scan Benchmark ===");
    println!("Documents: {}", documents);
    println!("Chars per document: {}", chars);

    let params = ScanParams::default();

    println!("\nExtraction:");
    let start = Instant::now();
    let mut corpus = DocumentMap::new();
    for doc in 0..documents {
        let text = synthetic_document(doc, chars);
        corpus.insert(
            PathBuf::from(format!("doc{:04}.txt", doc)),
            extract_ngrams(&text, params.ngram_size),
        );
    }
    let elapsed = start.elapsed();
    println!("  Total time: {:.3}s", elapsed.as_secs_f64());
    println!(
        "  Per document: {:.3}ms",
        elapsed.as_secs_f64() * 1000.0 / documents.max(1) as f64
    );

    println!("\nIndex build:");
    let start = Instant::now();
    let index = build_index(&corpus);
    let elapsed = start.elapsed();
    println!("  Total time: {:.3}s", elapsed.as_secs_f64());
    println!("  Distinct n-grams: {}", index.len());
    println!("  Index height: {}", index.height());

    println!("\nSimilarity scoring:");
    let start = Instant::now();
    let similarity = score_pairs(&index);
    let elapsed = start.elapsed();
    println!("  Total time: {:.3}s", elapsed.as_secs_f64());
    println!("  Candidate pairs: {}", similarity.len() / 2);

    println!("\nRanking:");
    let start = Instant::now();
    let ranked = most_similar(&similarity, params.min_shared);
    let elapsed = start.elapsed();
    println!("  Total time: {:.3}s", elapsed.as_secs_f64());
    println!("  Reported pairs: {}", ranked.len());
}

//! Corpus loading: directory listing, file reading, n-gram extraction.

use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::map::AvlMap;
use crate::models::ScanParams;
use crate::ngram::{extract_ngrams, Ngram};

/// Per-document n-gram sets keyed by path, each sorted and distinct.
pub type DocumentMap = AvlMap<PathBuf, Vec<Ngram>>;

#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("cannot read directory {}: {source}", .path.display())]
    Directory { path: PathBuf, source: io::Error },
    #[error("cannot read file {}: {source}", .path.display())]
    File { path: PathBuf, source: io::Error },
}

/// List the regular files directly under `dir`, sorted ascending.
///
/// Subdirectories and other non-file entries are skipped, not descended
/// into.
pub fn list_documents(dir: &Path) -> Result<Vec<PathBuf>, CorpusError> {
    let entries = fs::read_dir(dir).map_err(|source| CorpusError::Directory {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| CorpusError::Directory {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

fn read_document(path: &Path, ngram_size: usize) -> Result<Vec<Ngram>, CorpusError> {
    let bytes = fs::read(path).map_err(|source| CorpusError::File {
        path: path.to_path_buf(),
        source,
    })?;
    // Documents are treated as text; undecodable bytes become U+FFFD and
    // are windowed like any other character.
    let text = String::from_utf8_lossy(&bytes);
    Ok(extract_ngrams(&text, ngram_size))
}

/// Read every listed file and extract its n-gram set.
///
/// Reading and extraction run on the rayon pool; insertion into the map is
/// sequential in the given (sorted) path order, so the resulting map and
/// its balance diagnostics are identical to a sequential read.
pub fn read_documents(
    paths: Vec<PathBuf>,
    params: &ScanParams,
    show_progress: bool,
) -> Result<DocumentMap, CorpusError> {
    let progress = if show_progress {
        let pb = ProgressBar::new(paths.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec})",
                )
                .unwrap()
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let ngram_size = params.ngram_size;
    let extracted: Vec<(PathBuf, Result<Vec<Ngram>, CorpusError>)> = paths
        .into_par_iter()
        .map(|path| {
            let grams = read_document(&path, ngram_size);
            if let Some(ref pb) = progress {
                pb.inc(1);
            }
            (path, grams)
        })
        .collect();

    if let Some(pb) = progress {
        pb.finish_with_message("Done");
    }

    let mut documents = DocumentMap::new();
    for (path, grams) in extracted {
        documents.insert(path, grams?);
    }
    Ok(documents)
}

/// List a directory and read every document in it.
pub fn read_corpus(
    dir: &Path,
    params: &ScanParams,
    show_progress: bool,
) -> Result<DocumentMap, CorpusError> {
    let paths = list_documents(dir)?;
    if show_progress {
        eprintln!("Reading {} documents from {}...", paths.len(), dir.display());
    }
    read_documents(paths, params, show_progress)
}

//! Inverted index construction: n-gram → documents containing it.

use std::path::PathBuf;

use crate::corpus::DocumentMap;
use crate::map::AvlMap;
use crate::ngram::Ngram;

/// Inverted index from each n-gram to the documents containing it.
pub type NgramIndex = AvlMap<Ngram, Vec<PathBuf>>;

/// Build the inverted index over every document's n-gram set.
///
/// Documents are visited in ascending path order and each document's gram
/// set is already distinct, so posting lists come out sorted and free of
/// duplicates without any further checking.
pub fn build_index(documents: &DocumentMap) -> NgramIndex {
    let mut index = NgramIndex::new();
    for (path, grams) in documents {
        for gram in grams {
            if let Some(postings) = index.get_mut(gram) {
                postings.push(path.clone());
            } else {
                index.insert(gram.clone(), vec![path.clone()]);
            }
        }
    }
    index
}

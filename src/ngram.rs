//! Character n-grams and their extraction from document text.

use std::fmt;

/// Default window width for extraction. Five characters is wide enough that
/// shared grams indicate copied phrasing rather than shared vocabulary, and
/// narrow enough to survive small edits around the copied run.
pub const DEFAULT_NGRAM_SIZE: usize = 5;

/// A fixed-width run of consecutive characters from a document.
///
/// Ordering is lexicographic over the underlying characters, which gives
/// the index a stable key order.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ngram(String);

impl Ngram {
    pub fn new(text: impl Into<String>) -> Self {
        Ngram(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ngram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Slide an `n`-character window over `text` one position at a time and
/// collect every distinct gram, sorted ascending.
///
/// Text shorter than the window produces no grams, as does `n == 0`.
/// Characters are taken as-is: case, whitespace, and punctuation all
/// distinguish grams, and multi-byte characters count as one position.
/// Sorting and deduplication here make every later phase independent of
/// the original text order.
pub fn extract_ngrams(text: &str, n: usize) -> Vec<Ngram> {
    if n == 0 {
        return Vec::new();
    }
    let chars: Vec<char> = text.chars().collect();
    if chars.len() < n {
        return Vec::new();
    }
    let mut grams: Vec<Ngram> = chars
        .windows(n)
        .map(|window| Ngram(window.iter().collect()))
        .collect();
    grams.sort_unstable();
    grams.dedup();
    grams
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_yields_nothing() {
        assert!(extract_ngrams("", DEFAULT_NGRAM_SIZE).is_empty());
        assert!(extract_ngrams("abcd", DEFAULT_NGRAM_SIZE).is_empty());
    }

    #[test]
    fn zero_width_window_yields_nothing() {
        assert!(extract_ngrams("plenty of text here", 0).is_empty());
    }

    #[test]
    fn exact_window_yields_single_gram() {
        let grams = extract_ngrams("abcde", 5);
        assert_eq!(grams, vec![Ngram::new("abcde")]);
    }

    #[test]
    fn windows_overlap_by_one_character() {
        let grams = extract_ngrams("abcdef", 5);
        assert_eq!(grams, vec![Ngram::new("abcde"), Ngram::new("bcdef")]);
    }

    #[test]
    fn repeated_text_is_deduplicated() {
        // "aaaaaa" has two windows, both "aaaaa".
        let grams = extract_ngrams("aaaaaa", 5);
        assert_eq!(grams, vec![Ngram::new("aaaaa")]);
    }

    #[test]
    fn output_is_sorted() {
        let grams = extract_ngrams("the cat sat on the mat", 5);
        let mut sorted = grams.clone();
        sorted.sort();
        assert_eq!(grams, sorted);
        assert!(grams.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn whitespace_and_punctuation_are_kept() {
        let grams = extract_ngrams("a b.c", 5);
        assert_eq!(grams, vec![Ngram::new("a b.c")]);
    }

    #[test]
    fn multibyte_characters_count_one_position() {
        // Five chars, more than five bytes.
        let grams = extract_ngrams("héllo", 5);
        assert_eq!(grams, vec![Ngram::new("héllo")]);
    }

    #[test]
    fn case_distinguishes_grams() {
        assert_ne!(extract_ngrams("Abcde", 5), extract_ngrams("abcde", 5));
    }

    #[test]
    fn narrower_window_catches_shorter_runs() {
        let grams = extract_ngrams("abc", 3);
        assert_eq!(grams, vec![Ngram::new("abc")]);
    }

    #[test]
    fn displays_underlying_text() {
        assert_eq!(Ngram::new("abcde").to_string(), "abcde");
    }
}

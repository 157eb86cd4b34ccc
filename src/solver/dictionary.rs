use std::collections::{BTreeSet, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use fst::automaton::Str;
use fst::{Automaton, IntoStreamer, Set, Streamer};

use super::error::SolverError;
use super::{MAX_WORD_LENGTH, MIN_WORD_LENGTH};

/// Immutable word list. Exact lookups go through a hash set since they happen
/// once per search node; prefix queries go through an fst mirror of the same
/// words so the search can drop branches no word can ever complete.
#[derive(Debug)]
pub struct Dictionary {
    words: HashSet<String>,
    prefixes: Set<Vec<u8>>,
}

impl Dictionary {
    /// Builds a dictionary from candidate lines. Each line is trimmed and
    /// lowercased, then kept only if its length falls within
    /// [MIN_WORD_LENGTH, MAX_WORD_LENGTH]. Duplicates collapse.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: HashSet<String> = lines
            .into_iter()
            .map(|line| line.as_ref().trim().to_lowercase())
            .filter(|word| {
                let len = word.chars().count();
                (MIN_WORD_LENGTH..=MAX_WORD_LENGTH).contains(&len)
            })
            .collect();

        // The fst builder wants sorted unique keys, so feed it through a
        // BTreeSet. Cannot fail on sorted input.
        let sorted: BTreeSet<&[u8]> = words.iter().map(|word| word.as_bytes()).collect();
        let prefixes = Set::from_iter(sorted).unwrap();

        Self { words, prefixes }
    }

    /// Reads a newline-delimited word list from disk.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SolverError> {
        let path = path.as_ref();
        let unavailable = |source| SolverError::SourceUnavailable {
            path: path.display().to_string(),
            source,
        };

        let file = File::open(path).map_err(unavailable)?;
        let reader = BufReader::new(file);
        let mut lines = Vec::new();
        for line in reader.lines() {
            lines.push(line.map_err(unavailable)?);
        }

        let dictionary = Self::from_lines(lines);
        tracing::info!(
            "loaded {} words from {}",
            dictionary.len(),
            path.display()
        );
        Ok(dictionary)
    }

    /// Exact-match lookup, O(1) amortized.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// True if any word starts with `prefix` (including `prefix` itself).
    pub fn has_prefix(&self, prefix: &str) -> bool {
        let matcher = Str::new(prefix).starts_with();
        self.prefixes.search(matcher).into_stream().next().is_some()
    }

    /// Iterates the stored words. The order is the hash set's, i.e. not
    /// deterministic across runs; callers that need stable output sort the
    /// result set instead.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(|word| word.as_str())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_and_filters_lines() {
        let dict = Dictionary::from_lines([
            "  Apple \n",
            "apple",
            "at",                   // below minimum
            "incomprehensibilities", // above maximum
            "CATS",
        ]);
        assert_eq!(dict.len(), 2);
        assert!(dict.contains("apple"));
        assert!(dict.contains("cats"));
        assert!(!dict.contains("at"));
        assert!(!dict.contains("Apple"));
    }

    #[test]
    fn length_bounds_are_inclusive() {
        let dict = Dictionary::from_lines(["cat", "abcdefghijklmnop"]);
        assert!(dict.contains("cat"));
        assert!(dict.contains("abcdefghijklmnop"));
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn prefix_queries() {
        let dict = Dictionary::from_lines(["apple", "applet", "cats"]);
        assert!(dict.has_prefix("a"));
        assert!(dict.has_prefix("appl"));
        assert!(dict.has_prefix("apple"));
        assert!(dict.has_prefix("cats"));
        assert!(!dict.has_prefix("applets"));
        assert!(!dict.has_prefix("b"));
    }

    #[test]
    fn missing_file_is_source_unavailable() {
        let err = Dictionary::from_file("definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, SolverError::SourceUnavailable { .. }));
    }
}

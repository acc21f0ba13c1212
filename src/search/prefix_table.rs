//! Prefix-Table Substring Search
//!
//! The pattern is preprocessed into a failure table in O(m) time and space,
//! then the text is scanned exactly once in O(n) time:
//! - No text byte is examined twice after it has been consumed
//! - A mismatch falls back along the table instead of rewinding the text
//! - The table is owned by the finder (or by a single `find` call)

use crate::error::SearchError;

/// Failure table over a pattern
///
/// Entry `i` is the length of the longest proper prefix of `pattern[..=i]`
/// that is also a suffix of it, i.e. the prefix run ending at `i`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FailureTable {
    runs: Vec<usize>,
}

impl FailureTable {
    /// Build the table for a pattern - O(m)
    pub fn new(pattern: &[u8]) -> Self {
        let mut runs = vec![0; pattern.len()];

        for i in 1..pattern.len() {
            let mut run = runs[i - 1];

            // Fall back through shorter runs until one can be extended
            while run > 0 && pattern[i] != pattern[run] {
                run = runs[run - 1];
            }

            if pattern[i] == pattern[run] {
                run += 1;
            }
            runs[i] = run;
        }

        Self { runs }
    }

    /// Prefix run ending at pattern position `index`
    pub fn get(&self, index: usize) -> Option<usize> {
        self.runs.get(index).copied()
    }

    /// Number of entries (equal to the pattern length)
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    /// Whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.runs
    }
}

/// Reusable finder that owns the failure table for one pattern
#[derive(Clone, Debug)]
pub struct PrefixTableFinder<'p> {
    pattern: &'p [u8],
    table: FailureTable,
}

impl<'p> PrefixTableFinder<'p> {
    /// Preprocess a pattern, rejecting the empty pattern
    pub fn new(pattern: &'p [u8]) -> Result<Self, SearchError> {
        if pattern.is_empty() {
            return Err(SearchError::EmptyPattern);
        }

        Ok(Self {
            pattern,
            table: FailureTable::new(pattern),
        })
    }

    /// Start index of the first occurrence of the pattern in `text`
    pub fn find(&self, text: &[u8]) -> Option<usize> {
        let pattern = self.pattern;
        let runs = self.table.as_slice();
        // Number of pattern bytes matched ending at the current text byte
        let mut state = 0;

        for (i, &byte) in text.iter().enumerate() {
            while state > 0 && byte != pattern[state] {
                state = runs[state - 1];
            }

            if byte == pattern[state] {
                state += 1;
                if state == pattern.len() {
                    return Some(i + 1 - state);
                }
            }
        }

        None
    }

    pub fn pattern(&self) -> &'p [u8] {
        self.pattern
    }

    pub fn table(&self) -> &FailureTable {
        &self.table
    }
}

/// One-shot search: the table lives only for the duration of this call
pub fn find(pattern: &[u8], text: &[u8]) -> Result<Option<usize>, SearchError> {
    Ok(PrefixTableFinder::new(pattern)?.find(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_periodic_pattern() {
        let table = FailureTable::new(b"aaaaabaaaabaaabaabab");
        assert_eq!(
            table.as_slice(),
            &[0, 1, 2, 3, 4, 0, 1, 2, 3, 4, 0, 1, 2, 3, 0, 1, 2, 0, 1, 0]
        );
    }

    #[test]
    fn test_table_deep_fallback() {
        // Position 5 needs two fallbacks: run 2 -> 1 -> extend to 2
        let table = FailureTable::new(b"aabaaa");
        assert_eq!(table.as_slice(), &[0, 1, 0, 1, 2, 2]);
    }

    #[test]
    fn test_table_single_byte() {
        let table = FailureTable::new(b"x");
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(0), Some(0));
        assert_eq!(table.get(1), None);
    }

    #[test]
    fn test_table_empty() {
        assert!(FailureTable::new(b"").is_empty());
    }

    #[test]
    fn test_worked_example() {
        let result = find(b"aaaaabaaaabaaabaabab", b"aaaaaaaabaaaabaaabaabab");
        assert_eq!(result, Ok(Some(3)));
    }

    #[test]
    fn test_repeated_bytes() {
        assert_eq!(find(b"aaa", b"aaaa"), Ok(Some(0)));
        assert_eq!(find(b"aaa", b"aa"), Ok(None));
    }

    #[test]
    fn test_single_byte_pattern() {
        assert_eq!(find(b"x", b"abcx"), Ok(Some(3)));
        assert_eq!(find(b"x", b"abc"), Ok(None));
    }

    #[test]
    fn test_fallback_keeps_partial_match() {
        // "aba" is abandoned at the second 'a' but its suffix "a" carries over
        assert_eq!(find(b"abab", b"abaabab"), Ok(Some(3)));
        assert_eq!(find(b"aab", b"aaab"), Ok(Some(1)));
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(find(b"abc", b""), Ok(None));
    }

    #[test]
    fn test_empty_pattern_rejected() {
        assert_eq!(find(b"", b"abc"), Err(SearchError::EmptyPattern));
        assert!(PrefixTableFinder::new(b"").is_err());
    }

    #[test]
    fn test_finder_reuse() {
        let finder = PrefixTableFinder::new(b"needle").unwrap();

        assert_eq!(finder.find(b"haystack with a needle in it"), Some(16));
        assert_eq!(finder.find(b"needle"), Some(0));
        assert_eq!(finder.find(b"needl"), None);
        assert_eq!(finder.pattern(), b"needle");
        assert_eq!(finder.table().len(), 6);
    }
}

//! Exact substring search in linear time
//!
//! Two matchers find the first occurrence of a pattern in a text:
//! - [`search::prefix_table`]: failure table over the pattern, O(m) space
//! - [`search::constant_space`]: critical factorization, O(1) space
//!
//! Both run in O(m + n), return `Ok(None)` when there is no match, and reject
//! an empty pattern with [`SearchError::EmptyPattern`].
//!
//! ```
//! use string_search::{find_str, Matcher};
//!
//! assert_eq!(find_str("abab", "abaabab"), Ok(Some(3)));
//! assert_eq!(Matcher::ConstantSpace.find(b"aaa", b"aa"), Ok(None));
//! ```

pub mod config;
pub mod error;
pub mod search;
pub mod telemetry;

pub use config::{ConfigError, SearchConfig};
pub use error::SearchError;
pub use search::{ConstantSpaceFinder, FailureTable, Matcher, PrefixTableFinder};
pub use telemetry::{SearchEvent, SearchOutcome};

/// First occurrence of `pattern` in `text`, using the prefix-table matcher
pub fn find(pattern: &[u8], text: &[u8]) -> Result<Option<usize>, SearchError> {
    search::prefix_table::find(pattern, text)
}

/// Like [`find`] for string slices; the index is a byte offset
pub fn find_str(pattern: &str, text: &str) -> Result<Option<usize>, SearchError> {
    find(pattern.as_bytes(), text.as_bytes())
}

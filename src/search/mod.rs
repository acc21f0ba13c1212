//! Substring search module
//!
//! This module provides two interchangeable matchers that:
//! - Return the start of the first occurrence, or `None`
//! - Run in O(m + n) time for a pattern of m bytes and a text of n bytes
//! - Reject the empty pattern with `SearchError::EmptyPattern`
//!
//! `prefix_table` trades an O(m) table for a simple single-pass scan;
//! `constant_space` keeps only a few counters.

pub mod constant_space;
pub mod prefix_table;

pub use constant_space::{ConstantSpaceFinder, Shift};
pub use prefix_table::{FailureTable, PrefixTableFinder};

use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// Selects one of the matchers by name (used by configuration)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Matcher {
    /// Failure-table matcher
    PrefixTable,
    /// Table-free matcher
    #[default]
    ConstantSpace,
}

impl Matcher {
    /// All matchers, for callers that want to compare them
    pub const ALL: [Matcher; 2] = [Matcher::PrefixTable, Matcher::ConstantSpace];

    /// Run a one-shot search with this matcher
    pub fn find(self, pattern: &[u8], text: &[u8]) -> Result<Option<usize>, SearchError> {
        match self {
            Matcher::PrefixTable => prefix_table::find(pattern, text),
            Matcher::ConstantSpace => constant_space::find(pattern, text),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Matcher::PrefixTable => "prefix_table",
            Matcher::ConstantSpace => "constant_space",
        }
    }
}

impl std::fmt::Display for Matcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

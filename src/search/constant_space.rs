//! Constant-Space Substring Search
//!
//! Same contract and O(m + n) bound as the prefix-table matcher, but no
//! pattern-length table is allocated. Preprocessing finds a critical
//! factorization of the pattern (a split point and a period); the scan then
//! slides a window over the text carrying two rolling indices:
//! - `match_index`: start of the current window in the text
//! - `prefix_run`: how many leading pattern bytes are already known to match
//!   at that window, so they are not compared again

use std::cmp;

use crate::error::SearchError;

/// How far the window moves when the left half of the pattern mismatches
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shift {
    /// The pattern is periodic with this exact period; a prefix run of
    /// `m - period` bytes survives each shift
    Small { period: usize },
    /// Lower bound on the period; nothing survives a shift
    Large { shift: usize },
}

/// Reusable finder holding O(1) preprocessed state for one pattern
#[derive(Clone, Debug)]
pub struct ConstantSpaceFinder<'p> {
    pattern: &'p [u8],
    /// Start of the right half of the critical factorization
    critical_pos: usize,
    shift: Shift,
}

impl<'p> ConstantSpaceFinder<'p> {
    /// Factorize a pattern, rejecting the empty pattern - O(m)
    pub fn new(pattern: &'p [u8]) -> Result<Self, SearchError> {
        if pattern.is_empty() {
            return Err(SearchError::EmptyPattern);
        }

        let (pos_less, period_less) = maximal_suffix(pattern, false);
        let (pos_greater, period_greater) = maximal_suffix(pattern, true);

        // The later of the two maximal suffixes gives a critical factorization
        let (critical_pos, period) = if pos_less > pos_greater {
            (pos_less, period_less)
        } else {
            (pos_greater, period_greater)
        };

        let shift = if pattern[..critical_pos] == pattern[period..period + critical_pos] {
            Shift::Small { period }
        } else {
            Shift::Large {
                shift: cmp::max(critical_pos, pattern.len() - critical_pos) + 1,
            }
        };

        Ok(Self {
            pattern,
            critical_pos,
            shift,
        })
    }

    /// Start index of the first occurrence of the pattern in `text`
    pub fn find(&self, text: &[u8]) -> Option<usize> {
        let pattern = self.pattern;
        let crit = self.critical_pos;
        let mut match_index = 0;
        let mut prefix_run = 0;

        'window: while match_index + pattern.len() <= text.len() {
            let window = &text[match_index..match_index + pattern.len()];

            // Right half, left to right
            for i in cmp::max(crit, prefix_run)..pattern.len() {
                if pattern[i] != window[i] {
                    match_index += i - crit + 1;
                    prefix_run = 0;
                    continue 'window;
                }
            }

            // Left half, right to left, skipping the known prefix run
            for i in (prefix_run..crit).rev() {
                if pattern[i] != window[i] {
                    match self.shift {
                        Shift::Small { period } => {
                            match_index += period;
                            prefix_run = pattern.len() - period;
                        }
                        Shift::Large { shift } => {
                            match_index += shift;
                        }
                    }
                    continue 'window;
                }
            }

            return Some(match_index);
        }

        None
    }

    pub fn pattern(&self) -> &'p [u8] {
        self.pattern
    }

    pub fn critical_pos(&self) -> usize {
        self.critical_pos
    }

    pub fn shift(&self) -> Shift {
        self.shift
    }
}

/// Maximal suffix of `bytes` under the byte order (reversed when
/// `order_greater` is set).
///
/// Returns `(start, period)`: where the suffix begins and the period of that
/// suffix. Runs in O(m) time with four counters.
fn maximal_suffix(bytes: &[u8], order_greater: bool) -> (usize, usize) {
    let mut left = 0;
    let mut right = 1;
    let mut offset = 0;
    let mut period = 1;

    while let Some(&candidate) = bytes.get(right + offset) {
        let current = bytes[left + offset];
        let smaller = if order_greater {
            candidate > current
        } else {
            candidate < current
        };

        if smaller {
            // Candidate suffix loses; everything so far is one period
            right += offset + 1;
            offset = 0;
            period = right - left;
        } else if candidate == current {
            if offset + 1 == period {
                right += offset + 1;
                offset = 0;
            } else {
                offset += 1;
            }
        } else {
            // Candidate suffix wins, restart from it
            left = right;
            right += 1;
            offset = 0;
            period = 1;
        }
    }

    (left, period)
}

/// One-shot search with no auxiliary allocation
pub fn find(pattern: &[u8], text: &[u8]) -> Result<Option<usize>, SearchError> {
    Ok(ConstantSpaceFinder::new(pattern)?.find(text))
}

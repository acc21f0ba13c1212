//! Telemetry Module
//!
//! Structured search events. Each event is serialized to one JSON line and
//! written through the `log` facade, so whichever logger the binary installs
//! decides where it goes.

use log::{debug, info, warn};
use serde::Serialize;

use crate::error::SearchError;
use crate::search::Matcher;

/// Outcome of a single search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchOutcome {
    /// Pattern found
    Found,
    /// Text exhausted without a match
    NotFound,
    /// Search refused (invalid pattern)
    Rejected,
}

/// Search event for logging
#[derive(Debug, Clone, Serialize)]
pub struct SearchEvent {
    pub outcome: SearchOutcome,
    pub matcher: Matcher,
    pub pattern_len: usize,
    pub text_len: usize,
    /// Start of the match
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,
    /// Why the search was rejected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl SearchEvent {
    /// Create a new event for a search over the given inputs
    pub fn new(outcome: SearchOutcome, matcher: Matcher, pattern: &[u8], text: &[u8]) -> Self {
        Self {
            outcome,
            matcher,
            pattern_len: pattern.len(),
            text_len: text.len(),
            position: None,
            reason: None,
        }
    }

    /// Build the event describing a finished search
    pub fn from_result(
        matcher: Matcher,
        pattern: &[u8],
        text: &[u8],
        result: &Result<Option<usize>, SearchError>,
    ) -> Self {
        match result {
            Ok(Some(position)) => {
                Self::new(SearchOutcome::Found, matcher, pattern, text).with_position(*position)
            }
            Ok(None) => Self::new(SearchOutcome::NotFound, matcher, pattern, text),
            Err(e) => Self::new(SearchOutcome::Rejected, matcher, pattern, text)
                .with_reason(&e.to_string()),
        }
    }

    /// Set match position
    pub fn with_position(mut self, position: usize) -> Self {
        self.position = Some(position);
        self
    }

    /// Set reason
    pub fn with_reason(mut self, reason: &str) -> Self {
        self.reason = Some(reason.to_string());
        self
    }

    /// Log the event
    pub fn emit(&self) {
        match serde_json::to_string(self) {
            Ok(json) => match self.outcome {
                SearchOutcome::Found => info!("[STRING-SEARCH] {}", json),
                SearchOutcome::NotFound => debug!("[STRING-SEARCH] {}", json),
                SearchOutcome::Rejected => warn!("[STRING-SEARCH] {}", json),
            },
            Err(e) => {
                warn!("Failed to serialize search event: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serialization() {
        let event = SearchEvent::new(SearchOutcome::Found, Matcher::PrefixTable, b"ab", b"xxab")
            .with_position(2);

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"outcome\":\"found\""));
        assert!(json.contains("\"matcher\":\"prefix_table\""));
        assert!(json.contains("\"position\":2"));
        assert!(!json.contains("reason"));
    }

    #[test]
    fn test_from_result() {
        let found = SearchEvent::from_result(Matcher::ConstantSpace, b"x", b"abcx", &Ok(Some(3)));
        assert_eq!(found.outcome, SearchOutcome::Found);
        assert_eq!(found.position, Some(3));
        assert_eq!(found.text_len, 4);

        let missing = SearchEvent::from_result(Matcher::ConstantSpace, b"x", b"abc", &Ok(None));
        assert_eq!(missing.outcome, SearchOutcome::NotFound);
        assert!(missing.position.is_none());
    }

    #[test]
    fn test_rejected_event() {
        let event = SearchEvent::from_result(
            Matcher::PrefixTable,
            b"",
            b"abc",
            &Err(SearchError::EmptyPattern),
        );
        assert_eq!(event.outcome, SearchOutcome::Rejected);
        assert!(event.reason.as_ref().unwrap().contains("empty"));

        // No logger installed in tests; emitting must not panic
        event.emit();
    }
}

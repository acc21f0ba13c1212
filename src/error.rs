//! Search errors
//!
//! "No match" is an ordinary result (`Ok(None)`), not an error. The only
//! way a search can fail is a precondition violation on the pattern.

/// Errors returned when constructing a finder or running a search
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchError {
    /// The pattern has no bytes to search for
    EmptyPattern,
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchError::EmptyPattern => write!(f, "Invalid argument: pattern must not be empty"),
        }
    }
}

impl std::error::Error for SearchError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = SearchError::EmptyPattern;
        assert!(err.to_string().contains("pattern must not be empty"));
    }
}

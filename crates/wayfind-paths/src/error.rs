use std::fmt;

/// Why a search produced no path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// Every reachable state was expanded without selecting the goal.
    NoPath {
        /// States expanded before the frontier ran dry.
        expanded: usize,
    },
    /// The configured expansion budget ran out before the goal was selected.
    ExpansionLimit { limit: usize },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPath { expanded } => {
                write!(f, "no path: frontier exhausted after {expanded} expansions")
            }
            Self::ExpansionLimit { limit } => {
                write!(f, "search aborted: expansion limit of {limit} reached")
            }
        }
    }
}

impl std::error::Error for SearchError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            SearchError::NoPath { expanded: 3 }.to_string(),
            "no path: frontier exhausted after 3 expansions"
        );
        assert_eq!(
            SearchError::ExpansionLimit { limit: 10 }.to_string(),
            "search aborted: expansion limit of 10 reached"
        );
    }
}

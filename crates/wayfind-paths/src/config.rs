/// Tunables for a [`PathFinder`](crate::PathFinder).
///
/// The default configuration places no bound on the search, which is the
/// plain A* contract: run until the goal is selected or the frontier is
/// exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Stop after this many states have been expanded without reaching the
    /// goal. `None` means unbounded.
    pub max_expansions: Option<usize>,
    /// Initial capacity reserved for the node table and the frontier.
    pub capacity_hint: usize,
}

impl SearchConfig {
    /// Cap the number of expansions.
    pub fn with_max_expansions(mut self, limit: usize) -> Self {
        self.max_expansions = Some(limit);
        self
    }

    /// Reserve room for roughly `n` states up front.
    pub fn with_capacity_hint(mut self, n: usize) -> Self {
        self.capacity_hint = n;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unbounded() {
        let cfg = SearchConfig::default();
        assert_eq!(cfg.max_expansions, None);
        assert_eq!(cfg.capacity_hint, 0);
    }

    #[test]
    fn builder_setters() {
        let cfg = SearchConfig::default()
            .with_max_expansions(50)
            .with_capacity_hint(128);
        assert_eq!(cfg.max_expansions, Some(50));
        assert_eq!(cfg.capacity_hint, 128);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let cfg: SearchConfig = serde_json::from_str(r#"{"max_expansions": 10}"#).unwrap();
        assert_eq!(cfg, SearchConfig::default().with_max_expansions(10));
    }
}

//! Query configuration.

use crate::domain::Train;

/// Options applied around the arrivals and trips queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryConfig {
    /// Whether weekend-only trains are considered.
    pub include_weekend: bool,

    /// Maximum number of results to return; `None` for all.
    pub max_results: Option<usize>,
}

impl QueryConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(include_weekend: bool, max_results: Option<usize>) -> Self {
        Self {
            include_weekend,
            max_results,
        }
    }

    /// Exclude weekend-only service.
    pub fn weekday_only(mut self) -> Self {
        self.include_weekend = false;
        self
    }

    /// Return at most `n` results.
    pub fn with_max_results(mut self, n: usize) -> Self {
        self.max_results = Some(n);
        self
    }

    /// Returns true if the train should be considered at all.
    pub fn admits(&self, train: &Train) -> bool {
        self.include_weekend || !train.service.is_weekend()
    }

    /// Truncate an ordered result list to the configured limit.
    pub fn limit<T>(&self, mut results: Vec<T>) -> Vec<T> {
        if let Some(max) = self.max_results {
            results.truncate(max);
        }
        results
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            include_weekend: true,
            max_results: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Direction, ServiceType};

    #[test]
    fn default_config() {
        let config = QueryConfig::default();
        assert!(config.include_weekend);
        assert_eq!(config.max_results, None);
    }

    #[test]
    fn custom_config() {
        let config = QueryConfig::new(false, Some(3));
        assert_eq!(config, QueryConfig::default().weekday_only().with_max_results(3));
    }

    #[test]
    fn weekday_only_rejects_weekend_trains() {
        let weekend = Train::new(801, Direction::Northbound, ServiceType::Weekend);
        let bullet = Train::new(501, Direction::Northbound, ServiceType::Bullet);

        let all = QueryConfig::default();
        assert!(all.admits(&weekend));
        assert!(all.admits(&bullet));

        let weekday = QueryConfig::default().weekday_only();
        assert!(!weekday.admits(&weekend));
        assert!(weekday.admits(&bullet));
    }

    #[test]
    fn limit_truncates() {
        let config = QueryConfig::default().with_max_results(2);
        assert_eq!(config.limit(vec![1, 2, 3]), [1, 2]);
        assert_eq!(QueryConfig::default().limit(vec![1, 2, 3]), [1, 2, 3]);
    }
}

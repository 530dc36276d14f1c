//! Fixture configuration.

use crate::errors::{Failure, FixtureResult};
use fixture_types::env_utils::{env_var, env_var_or};
use std::ops::RangeInclusive;

pub const DEFAULT_COLLECTION_MIN: usize = 1;
pub const DEFAULT_COLLECTION_MAX: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureConfig {
    /// Inclusive range collection lengths are drawn from
    pub collection_range: RangeInclusive<usize>,
    /// Seed for the default random source; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            collection_range: DEFAULT_COLLECTION_MIN..=DEFAULT_COLLECTION_MAX,
            seed: None,
        }
    }
}

impl FixtureConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `FIXTURE_SEED`, `FIXTURE_COLLECTION_MIN` and `FIXTURE_COLLECTION_MAX`.
    pub fn from_env() -> FixtureResult<Self> {
        Self::from_env_with(None, None, None)
    }

    /// Like [`from_env`](Self::from_env), but explicit values win over the
    /// environment. The range is validated once, after merging.
    pub fn from_env_with(
        seed: Option<u64>,
        min: Option<usize>,
        max: Option<usize>,
    ) -> FixtureResult<Self> {
        let min =
            min.unwrap_or_else(|| env_var_or("FIXTURE_COLLECTION_MIN", DEFAULT_COLLECTION_MIN));
        let max =
            max.unwrap_or_else(|| env_var_or("FIXTURE_COLLECTION_MAX", DEFAULT_COLLECTION_MAX));
        Self::new()
            .with_seed(seed.or_else(|| env_var("FIXTURE_SEED")))
            .with_collection_range(min..=max)
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Set the collection length range. An inverted range is rejected.
    pub fn with_collection_range(mut self, range: RangeInclusive<usize>) -> FixtureResult<Self> {
        if range.is_empty() {
            return Err(Failure::invalid_config(format!(
                "collection range {}..={} is empty",
                range.start(),
                range.end()
            )));
        }
        self.collection_range = range;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_defaults() {
        let config = FixtureConfig::default();
        assert_eq!(config.collection_range, 1..=5);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_inverted_range_rejected() {
        let (min, max) = (4, 2);
        let err = FixtureConfig::new().with_collection_range(min..=max).unwrap_err();
        assert!(err.is(ErrorCode::InvalidConfig));

        let config = FixtureConfig::new().with_collection_range(3..=3).unwrap();
        assert_eq!(config.collection_range, 3..=3);
    }

    #[test]
    fn test_from_env() {
        std::env::set_var("FIXTURE_SEED", "77");
        std::env::set_var("FIXTURE_COLLECTION_MIN", "2");
        std::env::set_var("FIXTURE_COLLECTION_MAX", "4");

        let config = FixtureConfig::from_env().unwrap();
        assert_eq!(config.seed, Some(77));
        assert_eq!(config.collection_range, 2..=4);

        let config = FixtureConfig::from_env_with(Some(1), None, Some(9)).unwrap();
        assert_eq!(config.seed, Some(1));
        assert_eq!(config.collection_range, 2..=9);

        std::env::set_var("FIXTURE_COLLECTION_MIN", "8");
        assert!(FixtureConfig::from_env().is_err());
        let config = FixtureConfig::from_env_with(None, Some(1), Some(2)).unwrap();
        assert_eq!(config.collection_range, 1..=2);

        std::env::remove_var("FIXTURE_SEED");
        std::env::remove_var("FIXTURE_COLLECTION_MIN");
        std::env::remove_var("FIXTURE_COLLECTION_MAX");
    }
}

//! Environment variable parsing utilities.
//!
//! Type-safe helpers for reading configuration overrides such as
//! `FIXTURE_SEED` or `FIXTURE_COLLECTION_MAX`, replacing the usual
//! `std::env::var(..).ok().and_then(|v| v.parse().ok())` boilerplate.
//!
//! # Example
//!
//! ```
//! use fixture_types::env_utils::{env_var, env_var_or};
//!
//! let max_len: usize = env_var_or("FIXTURE_COLLECTION_MAX", 5);
//! let seed: Option<u64> = env_var("FIXTURE_SEED");
//! ```

use std::str::FromStr;

/// Parse an environment variable into a type that implements `FromStr`.
///
/// Returns `None` if the variable is not set or cannot be parsed.
pub fn env_var<T: FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

/// Parse an environment variable with a default value.
///
/// Returns the default if the variable is not set or cannot be parsed.
pub fn env_var_or<T: FromStr>(key: &str, default: T) -> T {
    env_var(key).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_var_parsing() {
        std::env::set_var("FIXTURE_TEST_U64", " 42 ");
        let val: Option<u64> = env_var("FIXTURE_TEST_U64");
        assert_eq!(val, Some(42));

        let missing: Option<u64> = env_var("FIXTURE_NONEXISTENT_VAR_12345");
        assert_eq!(missing, None);

        std::env::remove_var("FIXTURE_TEST_U64");
    }

    #[test]
    fn test_env_var_or() {
        std::env::set_var("FIXTURE_TEST_WITH_DEFAULT", "not-a-number");
        let val: usize = env_var_or("FIXTURE_TEST_WITH_DEFAULT", 5);
        assert_eq!(val, 5);

        let default_val: usize = env_var_or("FIXTURE_NONEXISTENT_VAR_12346", 7);
        assert_eq!(default_val, 7);

        std::env::remove_var("FIXTURE_TEST_WITH_DEFAULT");
    }
}

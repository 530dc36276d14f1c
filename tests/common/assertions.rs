//! Custom assertion utilities for tests.
//!
//! Provides assertion helpers that give better error messages than bare
//! `unwrap()` and `assert!`.

use fixture::{ErrorCode, Failure};

/// Assert that a result is Ok and return the inner value.
///
/// # Panics
///
/// Panics with `context` and the error if the result is `Err`.
#[allow(dead_code)]
pub fn assert_ok<T, E: std::fmt::Debug>(result: Result<T, E>, context: &str) -> T {
    match result {
        Ok(v) => v,
        Err(e) => panic!("{} failed: {:?}", context, e),
    }
}

/// Assert that a synthesis result failed with `code` and return the failure.
#[allow(dead_code)]
pub fn assert_failure_code<T: std::fmt::Debug>(
    result: Result<T, Failure>,
    code: ErrorCode,
    context: &str,
) -> Failure {
    match result {
        Ok(v) => panic!(
            "{} should have failed with {} but got: {:?}",
            context,
            code.code_string(),
            v
        ),
        Err(failure) => {
            assert_eq!(
                failure.code,
                code,
                "{}: expected {}, got {}",
                context,
                code.code_string(),
                failure
            );
            failure
        }
    }
}

/// Assert that an error message contains expected text (case-insensitive).
#[allow(dead_code)]
pub fn assert_error_contains<E: std::fmt::Display>(error: E, expected_text: &str, context: &str) {
    let error_str = error.to_string().to_lowercase();

    assert!(
        error_str.contains(&expected_text.to_lowercase()),
        "{}: error message should contain '{}', got: {}",
        context,
        expected_text,
        error
    );
}

/// Assert that a value is within an inclusive range.
#[allow(dead_code)]
pub fn assert_in_range<T: PartialOrd + std::fmt::Debug>(value: T, min: T, max: T, context: &str) {
    assert!(
        value >= min && value <= max,
        "{}: expected value in range [{:?}, {:?}], got {:?}",
        context,
        min,
        max,
        value
    );
}

#![allow(unused_imports)]
//! Shared test utilities for integration tests.
//!
//! # Modules
//!
//! - `fixtures`: Engines preloaded with sample catalog types, and catalog files on disk
//! - `assertions`: Assertion helpers with descriptive failure messages

pub mod assertions;
pub mod fixtures;

pub use fixtures::{sample_catalog_file, sample_fixture, td, SAMPLE_CATALOG_JSON};

pub use assertions::{assert_error_contains, assert_failure_code, assert_in_range, assert_ok};

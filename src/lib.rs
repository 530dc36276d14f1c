//! fixture: type-driven synthesis of randomized test fixtures.
//!
//! The workspace is split into:
//!
//! - `fixture-types`: type descriptors and type string parsing
//! - `fixture-core`: the synthesis engine
//!
//! This crate hosts the `fixture` binary and re-exports the most used items.
//!
//! ```
//! use fixture::{Classifier, Fixture, Value};
//!
//! let engine = Fixture::seeded(1);
//! engine.register(Classifier::String, |_| Ok(Value::from("alice")));
//! let names: Vec<String> = engine.next().unwrap();
//! assert!(names.iter().all(|n| n == "alice"));
//! ```

pub use fixture_core::{
    ClassDef, Classifier, Describe, ErrorCode, Failure, Fixture, FixtureConfig, FixtureResult,
    FromValue, TypeCatalog, TypeDescriptor, Value,
};

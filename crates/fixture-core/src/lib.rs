//! Fixture Core
//!
//! Type-driven synthesis of randomized test fixtures.
//!
//! Given a [`TypeDescriptor`] such as `List<Pair<String, Int>>`, the engine
//! decomposes the type, resolves each generic slot and produces a
//! structurally valid [`Value`].
//!
//! # Features
//!
//! - **Overrides**: replace synthesis per type, or per named constructor slot
//! - **Primitives and collections**: drawn from a seedable random source
//! - **Catalog types**: constructor-based classes, variants, singletons and
//!   capability proxies, declared in code or loaded from JSON
//! - **Typed access**: `fixture.next::<Vec<bool>>()`
//!
//! # Core Modules
//!
//! - [`engine`]: `Fixture`, the resolution engine
//! - [`catalog`]: class definitions the engine instantiates
//! - [`registry`]: override providers
//! - [`synth`]: the synthesizer chain
//! - [`random`]: `RandomSource` and its seeded implementation
//! - [`errors`]: phase/code failure taxonomy
//!
//! # Example
//!
//! ```
//! use fixture_core::catalog::{ClassDef, ConstructorCandidate};
//! use fixture_core::{Fixture, TypeDescriptor};
//! use fixture_types::parse_type_descriptor_with_params;
//!
//! let fixture = Fixture::seeded(42);
//! fixture.define(
//!     ClassDef::class("Pair").type_params(["A", "B"]).constructor(
//!         ConstructorCandidate::public("new")
//!             .param("first", TypeDescriptor::param("A"))
//!             .param("second", parse_type_descriptor_with_params("List<B>", &["B"]).unwrap()),
//!     ),
//! );
//!
//! let pair = fixture.resolve_str("Pair<String, Int>").unwrap();
//! let instance = pair.as_object().unwrap();
//! assert!(instance.field("first").unwrap().as_str().is_some());
//! ```

#![allow(clippy::result_large_err)]

pub mod catalog;
pub mod config;
pub mod engine;
pub mod errors;
pub mod random;
pub mod registry;
pub mod synth;
pub mod typed;
pub mod value;

pub use catalog::{ClassDef, TypeCatalog};
pub use config::FixtureConfig;
pub use engine::Fixture;
pub use errors::{ErrorCode, Failure, FixtureResult, Phase};
pub use fixture_types::{parse_type_descriptor, Classifier, TypeDescriptor};
pub use random::{RandomSource, SeededRandom};
pub use typed::{Describe, FromValue};
pub use value::{Instance, Value, ValueMap};

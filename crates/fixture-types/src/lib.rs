//! Shared types for the fixture workspace.
//!
//! This crate holds the type descriptor model consumed by the synthesis engine
//! and the utilities that produce descriptors, kept separate so that catalogs
//! and callers can describe types without depending on the engine.
//!
//! ## Descriptors
//!
//! - [`TypeDescriptor`](descriptor::TypeDescriptor) - classifier, type arguments, nullability
//! - [`Classifier`](descriptor::Classifier) - nominal identity, generic parameter or `*`
//! - [`Substitution`](descriptor::Substitution) - binds declared generic parameters to arguments
//!
//! ## Parsing
//!
//! The [`type_parsing`] module turns strings such as `List<Map<String, Int>>?`
//! into descriptors.

pub mod descriptor;
pub mod env_utils;
pub mod type_parsing;

pub use descriptor::{Classifier, Substitution, SubstitutionError, TypeDescriptor};
pub use type_parsing::{
    parse_type_descriptor, parse_type_descriptor_with_params, split_type_params, TypeParseError,
};

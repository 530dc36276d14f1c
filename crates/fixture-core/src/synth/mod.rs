//! Synthesizers: the ordered resolver chain behind [`Fixture::resolve`].
//!
//! ## How It Works
//!
//! After the nullable short-circuit and the override lookup, the engine asks
//! each synthesizer in [`CHAIN`] in turn. A synthesizer returns `None` when
//! the descriptor is not its kind, and `Some(result)` when it takes the
//! request. The first synthesizer that takes a request owns its outcome,
//! including failures.
//!
//! Nested types are resolved by calling back into the engine, so overrides
//! apply at every depth.
//!
//! [`Fixture::resolve`]: crate::engine::Fixture::resolve

pub mod capability;
pub mod collection;
pub mod constructor;
pub mod primitive;
pub mod variant;

use crate::engine::Fixture;
use crate::errors::FixtureResult;
use crate::value::Value;
use fixture_types::TypeDescriptor;

/// One link of the resolver chain.
pub trait Synthesizer: Send + Sync {
    fn name(&self) -> &'static str;

    /// `None` when this synthesizer does not handle `ty`.
    fn synthesize(&self, fixture: &Fixture, ty: &TypeDescriptor) -> Option<FixtureResult<Value>>;
}

/// Resolution order after overrides.
pub const CHAIN: &[&dyn Synthesizer] = &[
    &primitive::PrimitiveSynthesizer,
    &collection::CollectionSynthesizer,
    &variant::VariantSynthesizer,
    &capability::CapabilitySynthesizer,
    &constructor::ConstructorSynthesizer,
];

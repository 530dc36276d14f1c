//! Variant types: always the first declared alternative.

use super::Synthesizer;
use crate::catalog::{ClassDef, ClassKind};
use crate::engine::Fixture;
use crate::errors::{ErrorCode, Failure, FixtureResult};
use crate::value::Value;
use fixture_types::TypeDescriptor;

pub struct VariantSynthesizer;

impl Synthesizer for VariantSynthesizer {
    fn name(&self) -> &'static str {
        "variant"
    }

    fn synthesize(&self, fixture: &Fixture, ty: &TypeDescriptor) -> Option<FixtureResult<Value>> {
        let def = fixture.class_def(&ty.classifier)?;
        let ClassKind::Variant { alternatives } = &def.kind else {
            return None;
        };

        let Some(first) = alternatives.first() else {
            return Some(Err(Failure::new(
                ErrorCode::TypeNotSupported,
                format!("variant {} has no alternatives", def.name()),
            )
            .with_type(ty)));
        };

        Some(resolve_alternative(fixture, &def, ty, first))
    }
}

fn resolve_alternative(
    fixture: &Fixture,
    def: &ClassDef,
    ty: &TypeDescriptor,
    alternative: &TypeDescriptor,
) -> FixtureResult<Value> {
    let chosen = def.substitution(&ty.type_arguments).apply(alternative)?;
    tracing::trace!(variant = %ty, alternative = %chosen, "selected first alternative");
    fixture.resolve(&chosen)
}

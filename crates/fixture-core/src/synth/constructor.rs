//! Constructor-based instantiation of catalog classes.
//!
//! The candidate with the fewest parameters among the non-private ones is
//! selected; ties keep declaration order. Each parameter is resolved
//! through the engine after substituting the owning class's generic
//! parameters, so `Box<Int>` with `new(value: T, rest: List<T>)` resolves
//! `Int` and `List<Int>`.
//!
//! A parameter named `p` is resolved under slot key `p` when an override for
//! `(parameter type, p)` is registered, otherwise without a key.

use super::Synthesizer;
use crate::catalog::{ClassDef, ClassKind, ConstructorCandidate, Fallback};
use crate::engine::Fixture;
use crate::errors::{Failure, FixtureResult};
use crate::value::{Instance, Value};
use fixture_types::TypeDescriptor;

pub struct ConstructorSynthesizer;

impl Synthesizer for ConstructorSynthesizer {
    fn name(&self) -> &'static str {
        "constructor"
    }

    fn synthesize(&self, fixture: &Fixture, ty: &TypeDescriptor) -> Option<FixtureResult<Value>> {
        let def = fixture.class_def(&ty.classifier)?;
        let ClassKind::Class {
            constructors,
            fallback,
        } = &def.kind
        else {
            return None;
        };

        let result = match select(constructors) {
            Some(candidate) => instantiate(fixture, &def, ty, candidate),
            None => use_fallback(&def, ty, *fallback),
        };
        Some(result)
    }
}

/// Fewest parameters first among eligible candidates; the first of equals wins.
pub fn select(constructors: &[ConstructorCandidate]) -> Option<&ConstructorCandidate> {
    constructors
        .iter()
        .filter(|c| c.is_eligible())
        .min_by_key(|c| c.param_count())
}

fn use_fallback(def: &ClassDef, ty: &TypeDescriptor, fallback: Fallback) -> FixtureResult<Value> {
    match fallback {
        Fallback::Singleton => {
            tracing::debug!(class = %def.classifier, "using singleton instance");
            Ok(Value::Singleton(def.name().to_string()))
        }
        Fallback::ZeroArgument => {
            tracing::debug!(class = %def.classifier, "instantiating without arguments");
            Ok(Value::Object(Instance {
                ty: ty.clone(),
                constructor: String::new(),
                fields: Vec::new(),
            }))
        }
        Fallback::None => Err(Failure::no_usable_constructor(&def.classifier)),
    }
}

fn instantiate(
    fixture: &Fixture,
    def: &ClassDef,
    ty: &TypeDescriptor,
    candidate: &ConstructorCandidate,
) -> FixtureResult<Value> {
    tracing::trace!(
        class = %ty,
        constructor = %candidate.name,
        params = candidate.param_count(),
        "selected constructor"
    );

    let substitution = def.substitution(&ty.type_arguments);
    let mut fields = Vec::with_capacity(candidate.param_count());

    for param in &candidate.parameters {
        let param_ty = match param.slot {
            Some(index) => substitution.argument_at(index, param.ty.nullable)?,
            None => substitution.apply(&param.ty)?,
        };
        let key = fixture
            .has_override(&param_ty.classifier, Some(&param.name))
            .then_some(param.name.as_str());
        let value = fixture.resolve_slot(&param_ty, key)?;
        fields.push((param.name.clone(), value));
    }

    Ok(Value::Object(Instance {
        ty: ty.clone(),
        constructor: candidate.name.clone(),
        fields,
    }))
}

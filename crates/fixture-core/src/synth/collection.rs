//! Sequences (`List`, `Collection`, `Array`) and mappings (`Map`).

use super::Synthesizer;
use crate::engine::Fixture;
use crate::errors::FixtureResult;
use crate::value::{Value, ValueMap};
use fixture_types::TypeDescriptor;

pub struct CollectionSynthesizer;

impl Synthesizer for CollectionSynthesizer {
    fn name(&self) -> &'static str {
        "collection"
    }

    fn synthesize(&self, fixture: &Fixture, ty: &TypeDescriptor) -> Option<FixtureResult<Value>> {
        if ty.classifier.is_sequence() {
            Some(sequence(fixture, ty))
        } else if ty.classifier.is_mapping() {
            Some(mapping(fixture, ty))
        } else {
            None
        }
    }
}

/// Type argument at `index`, or `Any` when the caller left it out.
fn argument_or_any(ty: &TypeDescriptor, index: usize) -> TypeDescriptor {
    ty.argument(index).cloned().unwrap_or_else(TypeDescriptor::any)
}

fn draw_many(fixture: &Fixture, element: &TypeDescriptor, n: usize) -> FixtureResult<Vec<Value>> {
    (0..n).map(|_| fixture.resolve(element)).collect()
}

fn sequence(fixture: &Fixture, ty: &TypeDescriptor) -> FixtureResult<Value> {
    let element = argument_or_any(ty, 0);
    let n = fixture.next_size();
    tracing::trace!(ty = %ty, len = n, "synthesizing sequence");
    draw_many(fixture, &element, n).map(Value::List)
}

/// Keys and values are drawn independently, then paired by position.
/// Duplicate keys collapse, so the map can hold fewer than `n` entries.
fn mapping(fixture: &Fixture, ty: &TypeDescriptor) -> FixtureResult<Value> {
    let key_ty = argument_or_any(ty, 0);
    let value_ty = argument_or_any(ty, 1);
    let n = fixture.next_size();
    tracing::trace!(ty = %ty, len = n, "synthesizing mapping");

    let keys = draw_many(fixture, &key_ty, n)?;
    let values = draw_many(fixture, &value_ty, n)?;
    Ok(Value::Map(keys.into_iter().zip(values).collect::<ValueMap>()))
}

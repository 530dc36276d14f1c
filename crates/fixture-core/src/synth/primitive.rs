//! Primitive kinds, drawn straight from the random source.

use super::Synthesizer;
use crate::engine::Fixture;
use crate::errors::FixtureResult;
use crate::random::RandomSource;
use crate::value::Value;
use fixture_types::{Classifier, TypeDescriptor};

/// Kinds `Any` picks from, uniformly.
static ANY_KINDS: [Classifier; 7] = [
    Classifier::Boolean,
    Classifier::Char,
    Classifier::Int,
    Classifier::Long,
    Classifier::Float,
    Classifier::Double,
    Classifier::String,
];

pub struct PrimitiveSynthesizer;

impl Synthesizer for PrimitiveSynthesizer {
    fn name(&self) -> &'static str {
        "primitive"
    }

    fn synthesize(&self, fixture: &Fixture, ty: &TypeDescriptor) -> Option<FixtureResult<Value>> {
        if !ty.classifier.is_primitive() {
            return None;
        }
        fixture.random(|random| draw(random, &ty.classifier)).map(Ok)
    }
}

/// Draw a value for a primitive classifier. `Star` draws like `Any`.
pub fn draw(random: &mut dyn RandomSource, classifier: &Classifier) -> Option<Value> {
    let value = match classifier {
        Classifier::Any | Classifier::Star => {
            let kind = &ANY_KINDS[random.next_size(0..=ANY_KINDS.len() - 1)];
            return draw(random, kind);
        }
        Classifier::Boolean => Value::Bool(random.next_bool()),
        Classifier::Char => Value::Char(random.next_char()),
        Classifier::Int => Value::Int(random.next_int()),
        Classifier::Long => Value::Long(random.next_long()),
        Classifier::Float => Value::Float(random.next_float()),
        Classifier::Double => Value::Double(random.next_double()),
        Classifier::String => Value::String(random.next_string()),
        _ => return None,
    };
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SeededRandom;

    #[test]
    fn test_each_primitive_kind() {
        let mut random = SeededRandom::new(3);
        assert!(matches!(draw(&mut random, &Classifier::Boolean), Some(Value::Bool(_))));
        assert!(matches!(draw(&mut random, &Classifier::Char), Some(Value::Char(_))));
        assert!(matches!(draw(&mut random, &Classifier::Int), Some(Value::Int(_))));
        assert!(matches!(draw(&mut random, &Classifier::Long), Some(Value::Long(_))));
        assert!(matches!(draw(&mut random, &Classifier::Float), Some(Value::Float(_))));
        assert!(matches!(draw(&mut random, &Classifier::Double), Some(Value::Double(_))));
        assert!(matches!(draw(&mut random, &Classifier::String), Some(Value::String(_))));
    }

    #[test]
    fn test_non_primitives_declined() {
        let mut random = SeededRandom::new(3);
        assert!(draw(&mut random, &Classifier::List).is_none());
        assert!(draw(&mut random, &Classifier::named("User")).is_none());
        assert!(draw(&mut random, &Classifier::Param("T".into())).is_none());
    }

    #[test]
    fn test_any_covers_several_kinds() {
        let mut random = SeededRandom::new(11);
        let mut kinds = std::collections::HashSet::new();
        for _ in 0..200 {
            let value = draw(&mut random, &Classifier::Any).unwrap();
            assert!(!value.is_null());
            kinds.insert(value.kind_name());
        }
        assert_eq!(kinds.len(), ANY_KINDS.len());
    }
}

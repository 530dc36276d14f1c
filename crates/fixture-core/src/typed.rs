//! Typed access on top of the dynamic engine.
//!
//! [`Describe`] maps a Rust type to the descriptor the engine resolves, and
//! [`FromValue`] converts the synthesized [`Value`] back:
//!
//! ```
//! use fixture_core::Fixture;
//!
//! let fixture = Fixture::seeded(7);
//! let flags: Vec<bool> = fixture.next().unwrap();
//! assert!((1..=5).contains(&flags.len()));
//!
//! let missing: Option<i64> = fixture.next().unwrap();
//! assert!(missing.is_none());
//! ```

use crate::engine::Fixture;
use crate::errors::{Failure, FixtureResult};
use crate::value::Value;
use fixture_types::{Classifier, TypeDescriptor};
use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

/// Rust types with a descriptor.
pub trait Describe {
    fn describe() -> TypeDescriptor;
}

/// Rust types that can be rebuilt from a synthesized value.
pub trait FromValue: Sized {
    fn from_value(value: Value) -> FixtureResult<Self>;
}

macro_rules! impl_primitive {
    ($($ty:ty => $classifier:ident / $variant:ident),* $(,)?) => {
        $(
            impl Describe for $ty {
                fn describe() -> TypeDescriptor {
                    TypeDescriptor::of(Classifier::$classifier)
                }
            }

            impl FromValue for $ty {
                fn from_value(value: Value) -> FixtureResult<Self> {
                    match value {
                        Value::$variant(v) => Ok(v),
                        other => Err(Failure::value_mismatch(
                            stringify!($classifier),
                            other.kind_name(),
                        )),
                    }
                }
            }
        )*
    };
}

impl_primitive! {
    bool => Boolean / Bool,
    char => Char / Char,
    i32 => Int / Int,
    i64 => Long / Long,
    f32 => Float / Float,
    f64 => Double / Double,
    String => String / String,
}

impl Describe for Value {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::any()
    }
}

impl FromValue for Value {
    fn from_value(value: Value) -> FixtureResult<Self> {
        Ok(value)
    }
}

impl<T: Describe> Describe for Vec<T> {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::list_of(T::describe())
    }
}

impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(value: Value) -> FixtureResult<Self> {
        match value {
            Value::List(items) => items.into_iter().map(T::from_value).collect(),
            other => Err(Failure::value_mismatch("List", other.kind_name())),
        }
    }
}

impl<T: Describe> Describe for Option<T> {
    fn describe() -> TypeDescriptor {
        T::describe().nullable()
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: Value) -> FixtureResult<Self> {
        match value {
            Value::Null => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }
}

impl<K: Describe, V: Describe> Describe for HashMap<K, V> {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::map_of(K::describe(), V::describe())
    }
}

impl<K: FromValue + Eq + Hash, V: FromValue> FromValue for HashMap<K, V> {
    fn from_value(value: Value) -> FixtureResult<Self> {
        match value {
            Value::Map(map) => map
                .into_iter()
                .map(|(k, v)| Ok((K::from_value(k)?, V::from_value(v)?)))
                .collect(),
            other => Err(Failure::value_mismatch("Map", other.kind_name())),
        }
    }
}

impl<K: Describe, V: Describe> Describe for BTreeMap<K, V> {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::map_of(K::describe(), V::describe())
    }
}

impl<K: FromValue + Ord, V: FromValue> FromValue for BTreeMap<K, V> {
    fn from_value(value: Value) -> FixtureResult<Self> {
        match value {
            Value::Map(map) => map
                .into_iter()
                .map(|(k, v)| Ok((K::from_value(k)?, V::from_value(v)?)))
                .collect(),
            other => Err(Failure::value_mismatch("Map", other.kind_name())),
        }
    }
}

impl Fixture {
    /// Synthesize a `T`.
    pub fn next<T: Describe + FromValue>(&self) -> FixtureResult<T> {
        T::from_value(self.resolve(&T::describe())?)
    }

    /// Synthesize a `T` using the override registered under `key`.
    pub fn next_keyed<T: Describe + FromValue>(&self, key: &str) -> FixtureResult<T> {
        T::from_value(self.resolve_keyed(&T::describe(), key)?)
    }

    /// Exactly `size` independently synthesized values.
    pub fn next_list_of<T: Describe + FromValue>(&self, size: usize) -> FixtureResult<Vec<T>> {
        (0..size).map(|_| self.next::<T>()).collect()
    }

    /// Register an override for `T`'s classifier with a typed provider.
    pub fn register_value<T, F>(&self, provider: F)
    where
        T: Describe + Into<Value>,
        F: Fn(&Fixture) -> FixtureResult<T> + Send + Sync + 'static,
    {
        self.register(T::describe().classifier, move |fixture| {
            provider(fixture).map(Into::into)
        });
    }
}

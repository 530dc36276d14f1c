//! Override registry.
//!
//! Maps `(classifier, optional slot key)` to a caller-supplied provider that
//! replaces default synthesis. Re-registering a key replaces the previous
//! provider.

use crate::engine::Fixture;
use crate::errors::FixtureResult;
use crate::value::Value;
use fixture_types::Classifier;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A synthesis override. Receives the engine so it can delegate back into it.
pub type Provider = Arc<dyn Fn(&Fixture) -> FixtureResult<Value> + Send + Sync>;

#[derive(Clone, Default)]
struct ProviderSlots {
    unkeyed: Option<Provider>,
    keyed: HashMap<String, Provider>,
}

#[derive(Clone, Default)]
pub struct OverrideRegistry {
    slots: HashMap<Classifier, ProviderSlots>,
}

impl OverrideRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the unkeyed override for `classifier`.
    pub fn register(&mut self, classifier: Classifier, provider: Provider) {
        self.slots.entry(classifier).or_default().unkeyed = Some(provider);
    }

    /// Register an override scoped to `key` (typically a constructor parameter name).
    pub fn register_keyed(
        &mut self,
        classifier: Classifier,
        key: impl Into<String>,
        provider: Provider,
    ) {
        self.slots
            .entry(classifier)
            .or_default()
            .keyed
            .insert(key.into(), provider);
    }

    /// Exact lookup. A key that is not registered does not fall back to the
    /// unkeyed override.
    pub fn lookup(&self, classifier: &Classifier, key: Option<&str>) -> Option<Provider> {
        let slots = self.slots.get(classifier)?;
        match key {
            Some(key) => slots.keyed.get(key).cloned(),
            None => slots.unkeyed.clone(),
        }
    }

    pub fn contains(&self, classifier: &Classifier, key: Option<&str>) -> bool {
        self.slots.get(classifier).is_some_and(|slots| match key {
            Some(key) => slots.keyed.contains_key(key),
            None => slots.unkeyed.is_some(),
        })
    }

    /// Number of registered providers, keyed and unkeyed.
    pub fn len(&self) -> usize {
        self.slots
            .values()
            .map(|s| s.keyed.len() + usize::from(s.unkeyed.is_some()))
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for OverrideRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<String> = Vec::new();
        for (classifier, slots) in &self.slots {
            if slots.unkeyed.is_some() {
                entries.push(classifier.to_string());
            }
            for key in slots.keyed.keys() {
                entries.push(format!("{}#{}", classifier, key));
            }
        }
        entries.sort();
        f.debug_struct("OverrideRegistry")
            .field("overrides", &entries)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constant(value: i32) -> Provider {
        Arc::new(move |_: &Fixture| Ok(Value::Int(value)))
    }

    #[test]
    fn test_last_registration_wins() {
        let mut registry = OverrideRegistry::new();
        registry.register(Classifier::Int, constant(1));
        registry.register(Classifier::Int, constant(2));

        let fixture = Fixture::seeded(0);
        let provider = registry.lookup(&Classifier::Int, None).unwrap();
        assert_eq!(provider(&fixture).unwrap(), Value::Int(2));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_keyed_lookup_is_exact() {
        let mut registry = OverrideRegistry::new();
        registry.register(Classifier::String, constant(0));
        registry.register_keyed(Classifier::String, "email", constant(1));

        assert!(registry.contains(&Classifier::String, Some("email")));
        assert!(!registry.contains(&Classifier::String, Some("username")));
        assert!(registry.lookup(&Classifier::String, Some("username")).is_none());
        assert!(registry.contains(&Classifier::String, None));
        assert!(!registry.contains(&Classifier::Int, None));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_debug_lists_overrides() {
        let mut registry = OverrideRegistry::new();
        registry.register_keyed(Classifier::named("User"), "id", constant(3));
        assert_eq!(
            format!("{:?}", registry),
            "OverrideRegistry { overrides: [\"User#id\"] }"
        );
    }
}

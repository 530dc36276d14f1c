//! The resolution engine.
//!
//! [`Fixture`] owns the catalog, the override registry and the random
//! source, and runs every request through the same order:
//!
//! 1. nullable requests yield [`Value::Null`]
//! 2. an override registered for `(classifier, key)`
//! 3. the synthesizer chain ([`synth::CHAIN`]): primitive, collection,
//!    variant, capability, constructor
//!
//! Anything no link of the chain takes fails with `TypeNotSupported`.
//!
//! `Fixture` is a cheap handle; clones share all state. Registration and
//! definition take `&self`, so providers and proxies can hold a handle and
//! re-enter the engine.

use crate::catalog::{ClassDef, TypeCatalog};
use crate::config::FixtureConfig;
use crate::errors::{Failure, FixtureResult};
use crate::random::{RandomSource, SeededRandom};
use crate::registry::{OverrideRegistry, Provider};
use crate::synth;
use crate::value::Value;
use fixture_types::{parse_type_descriptor, Classifier, TypeDescriptor};
use parking_lot::{Mutex, RwLock};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

struct FixtureInner {
    config: FixtureConfig,
    catalog: RwLock<TypeCatalog>,
    overrides: RwLock<OverrideRegistry>,
    random: Mutex<Box<dyn RandomSource>>,
}

#[derive(Clone)]
pub struct Fixture {
    inner: Arc<FixtureInner>,
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

impl Fixture {
    /// Engine with default configuration, seeded from the OS.
    pub fn new() -> Self {
        Self::with_config(FixtureConfig::default())
    }

    /// Engine with default configuration and a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_config(FixtureConfig::default().with_seed(Some(seed)))
    }

    pub fn with_config(config: FixtureConfig) -> Self {
        let random = match config.seed {
            Some(seed) => SeededRandom::new(seed),
            None => SeededRandom::from_entropy(),
        };
        Self::with_random(config, random)
    }

    /// Engine drawing from a caller-supplied random source. `config.seed` is ignored.
    pub fn with_random(config: FixtureConfig, random: impl RandomSource + 'static) -> Self {
        Self {
            inner: Arc::new(FixtureInner {
                config,
                catalog: RwLock::new(TypeCatalog::new()),
                overrides: RwLock::new(OverrideRegistry::new()),
                random: Mutex::new(Box::new(random)),
            }),
        }
    }

    pub fn config(&self) -> &FixtureConfig {
        &self.inner.config
    }

    /// Whether two handles share the same engine state.
    pub fn same_engine(&self, other: &Fixture) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    // --- Catalog ---

    /// Add or replace a class definition.
    pub fn define(&self, def: ClassDef) {
        debug!(class = %def.classifier, kind = def.kind.label(), "defining class");
        self.inner.catalog.write().define(def);
    }

    /// Merge a catalog; its definitions replace existing ones of the same name.
    pub fn load_catalog(&self, catalog: TypeCatalog) {
        debug!(classes = catalog.len(), "loading catalog");
        self.inner.catalog.write().extend(catalog);
    }

    pub fn class_def(&self, classifier: &Classifier) -> Option<Arc<ClassDef>> {
        self.inner.catalog.read().get(classifier)
    }

    // --- Overrides ---

    /// Replace default synthesis for `classifier`.
    pub fn register<F>(&self, classifier: Classifier, provider: F)
    where
        F: Fn(&Fixture) -> FixtureResult<Value> + Send + Sync + 'static,
    {
        debug!(classifier = %classifier, "registering override");
        let provider: Provider = Arc::new(provider);
        self.inner.overrides.write().register(classifier, provider);
    }

    /// Replace synthesis for `classifier` when requested under `key`.
    pub fn register_keyed<F>(&self, classifier: Classifier, key: impl Into<String>, provider: F)
    where
        F: Fn(&Fixture) -> FixtureResult<Value> + Send + Sync + 'static,
    {
        let key = key.into();
        debug!(classifier = %classifier, key = %key, "registering keyed override");
        let provider: Provider = Arc::new(provider);
        self.inner
            .overrides
            .write()
            .register_keyed(classifier, key, provider);
    }

    pub fn has_override(&self, classifier: &Classifier, key: Option<&str>) -> bool {
        self.inner.overrides.read().contains(classifier, key)
    }

    // --- Randomness ---

    /// Run `f` against the shared random source.
    ///
    /// The source stays locked while `f` runs, so `f` must not call back
    /// into the engine.
    pub fn random<R>(&self, f: impl FnOnce(&mut dyn RandomSource) -> R) -> R {
        let mut guard = self.inner.random.lock();
        f(&mut **guard)
    }

    /// Draw a collection length from the configured range.
    pub fn next_size(&self) -> usize {
        let range = self.inner.config.collection_range.clone();
        self.random(|r| r.next_size(range))
    }

    pub fn next_bool(&self) -> bool {
        self.random(|r| r.next_bool())
    }

    pub fn next_int(&self) -> i32 {
        self.random(|r| r.next_int())
    }

    pub fn next_int_in(&self, range: std::ops::RangeInclusive<i32>) -> i32 {
        self.random(|r| r.next_int_in(range))
    }

    pub fn next_long(&self) -> i64 {
        self.random(|r| r.next_long())
    }

    pub fn next_double(&self) -> f64 {
        self.random(|r| r.next_double())
    }

    pub fn next_string(&self) -> String {
        self.random(|r| r.next_string())
    }

    pub fn next_string_with_prefix(&self, prefix: &str) -> String {
        self.random(|r| r.next_string_with_prefix(prefix))
    }

    // --- Resolution ---

    /// Synthesize a value for `ty`.
    pub fn resolve(&self, ty: &TypeDescriptor) -> FixtureResult<Value> {
        self.resolve_slot(ty, None)
    }

    /// Synthesize a value for `ty`, consulting only the override registered
    /// under `key`.
    pub fn resolve_keyed(&self, ty: &TypeDescriptor, key: &str) -> FixtureResult<Value> {
        self.resolve_slot(ty, Some(key))
    }

    /// Parse a type string and synthesize a value for it.
    pub fn resolve_str(&self, type_str: &str) -> FixtureResult<Value> {
        let ty = parse_type_descriptor(type_str)?;
        self.resolve(&ty)
    }

    pub(crate) fn resolve_slot(
        &self,
        ty: &TypeDescriptor,
        key: Option<&str>,
    ) -> FixtureResult<Value> {
        trace!(ty = %ty, key = ?key, "resolving");

        if ty.nullable {
            return Ok(Value::Null);
        }

        // Lock released before the provider runs
        let provider = self.inner.overrides.read().lookup(&ty.classifier, key);
        if let Some(provider) = provider {
            debug!(ty = %ty, key = ?key, "override hit");
            return provider(self);
        }

        if let Classifier::Param(name) = &ty.classifier {
            return Err(Failure::unsupported_classifier_kind(format!(
                "type parameter {} reached the engine without substitution",
                name
            ))
            .with_type(ty));
        }

        for synthesizer in synth::CHAIN {
            trace!(synthesizer = synthesizer.name(), ty = %ty, "trying");
            if let Some(result) = synthesizer.synthesize(self, ty) {
                return result;
            }
        }

        debug!(ty = %ty, "no synthesizer produced a value");
        Err(Failure::type_not_supported(&ty.classifier))
    }
}

impl fmt::Debug for Fixture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fixture")
            .field("config", &self.inner.config)
            .field("classes", &self.inner.catalog.read().len())
            .field("overrides", &*self.inner.overrides.read())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ConstructorCandidate, Fallback, MethodSig};
    use crate::errors::ErrorCode;

    fn td(s: &str) -> TypeDescriptor {
        parse_type_descriptor(s).unwrap()
    }

    #[test]
    fn test_nullable_is_null_even_with_override() {
        let fixture = Fixture::seeded(1);
        fixture.register(Classifier::Int, |_| Ok(Value::Int(9)));
        assert_eq!(fixture.resolve(&td("Int?")).unwrap(), Value::Null);
        assert_eq!(fixture.resolve(&td("Missing?")).unwrap(), Value::Null);
    }

    #[test]
    fn test_override_precedes_primitive() {
        let fixture = Fixture::seeded(1);
        fixture.register(Classifier::String, |_| Ok("fixed".into()));
        assert_eq!(fixture.resolve(&td("String")).unwrap(), Value::from("fixed"));
    }

    #[test]
    fn test_override_may_return_null() {
        let fixture = Fixture::seeded(1);
        fixture.register(Classifier::Long, |_| Ok(Value::Null));
        assert_eq!(fixture.resolve(&td("Long")).unwrap(), Value::Null);
    }

    #[test]
    fn test_keyed_request_does_not_use_unkeyed_override() {
        let fixture = Fixture::seeded(1);
        fixture.register(Classifier::Int, |_| Ok(Value::Int(1)));
        fixture.register_keyed(Classifier::Int, "age", |_| Ok(Value::Int(30)));

        assert_eq!(fixture.resolve_keyed(&td("Int"), "age").unwrap(), Value::Int(30));
        assert_eq!(fixture.resolve(&td("Int")).unwrap(), Value::Int(1));
        // Unregistered key falls through to default synthesis
        assert!(matches!(
            fixture.resolve_keyed(&td("Int"), "height").unwrap(),
            Value::Int(_)
        ));
    }

    #[test]
    fn test_provider_can_reenter_engine() {
        let fixture = Fixture::seeded(1);
        fixture.register(Classifier::named("Email"), |f| {
            Ok(Value::String(format!("{}@example.com", f.next_string_with_prefix("user-"))))
        });
        fixture.register(Classifier::named("Contact"), |f| f.resolve(&td("Email")));

        let value = fixture.resolve(&td("Contact")).unwrap();
        let email = value.as_str().unwrap();
        assert!(email.starts_with("user-"));
        assert!(email.ends_with("@example.com"));
    }

    #[test]
    fn test_unknown_name_not_supported() {
        let fixture = Fixture::seeded(1);
        let err = fixture.resolve(&td("Widget")).unwrap_err();
        assert!(err.is(ErrorCode::TypeNotSupported));
        assert_eq!(err.type_name.as_deref(), Some("Widget"));
    }

    #[test]
    fn test_param_reaching_engine_is_rejected() {
        let fixture = Fixture::seeded(1);
        let err = fixture.resolve(&TypeDescriptor::param("T")).unwrap_err();
        assert!(err.is(ErrorCode::UnsupportedClassifierKind));
    }

    #[test]
    fn test_star_resolves_as_any() {
        let fixture = Fixture::seeded(1);
        assert!(!fixture.resolve(&TypeDescriptor::star()).unwrap().is_null());
    }

    #[test]
    fn test_failure_in_nested_slot_propagates() {
        let fixture = Fixture::seeded(1);
        fixture.define(ClassDef::class("Locked").constructor(ConstructorCandidate::private("new")));
        let err = fixture.resolve(&td("List<Locked>")).unwrap_err();
        assert!(err.is(ErrorCode::NoUsableConstructor));
    }

    #[test]
    fn test_fallbacks() {
        let fixture = Fixture::seeded(1);
        fixture.define(ClassDef::singleton("Unit"));
        fixture.define(
            ClassDef::class("Token")
                .constructor(ConstructorCandidate::private("new").param("raw", td("String")))
                .fallback(Fallback::ZeroArgument),
        );

        assert_eq!(fixture.resolve(&td("Unit")).unwrap(), Value::Singleton("Unit".into()));
        let token = fixture.resolve(&td("Token")).unwrap();
        let instance = token.as_object().unwrap();
        assert!(instance.fields.is_empty());
        assert!(instance.constructor.is_empty());
    }

    #[test]
    fn test_resolve_str() {
        let fixture = Fixture::seeded(1);
        assert!(fixture.resolve_str("Map<String, List<Int>>").is_ok());
        let err = fixture.resolve_str("Map<String").unwrap_err();
        assert!(err.is(ErrorCode::InvalidTypeDescriptor));
    }

    #[test]
    fn test_clones_share_state() {
        let fixture = Fixture::seeded(1);
        let other = fixture.clone();
        other.define(
            ClassDef::capability("Clock").method(MethodSig::new("now", td("Long"))),
        );
        assert!(fixture.class_def(&Classifier::named("Clock")).is_some());
        assert!(fixture.same_engine(&other));
        assert!(!fixture.same_engine(&Fixture::seeded(1)));
    }

    #[test]
    fn test_debug_output() {
        let fixture = Fixture::seeded(1);
        fixture.register(Classifier::Int, |_| Ok(Value::Int(0)));
        let debug = format!("{:?}", fixture);
        assert!(debug.contains("Fixture"));
        assert!(debug.contains("overrides: [\"Int\"]"));
    }
}

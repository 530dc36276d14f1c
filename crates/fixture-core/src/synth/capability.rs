//! Capability types, synthesized as dispatch proxies.
//!
//! A [`ProxyInstance`] answers method calls by resolving the method's
//! declared return type through the engine at call time. Nothing is cached,
//! so two calls to the same method are synthesized independently.

use super::Synthesizer;
use crate::catalog::{ClassDef, ClassKind};
use crate::engine::Fixture;
use crate::errors::FixtureResult;
use crate::value::Value;
use fixture_types::TypeDescriptor;
use std::fmt;
use std::sync::Arc;

pub struct CapabilitySynthesizer;

impl Synthesizer for CapabilitySynthesizer {
    fn name(&self) -> &'static str {
        "capability"
    }

    fn synthesize(&self, fixture: &Fixture, ty: &TypeDescriptor) -> Option<FixtureResult<Value>> {
        let def = fixture.class_def(&ty.classifier)?;
        if !matches!(def.kind, ClassKind::Capability { .. }) {
            return None;
        }
        tracing::trace!(interface = %ty, "building proxy");
        Some(Ok(Value::Proxy(ProxyInstance::new(fixture.clone(), def, ty.clone()))))
    }
}

#[derive(Clone)]
pub struct ProxyInstance {
    fixture: Fixture,
    def: Arc<ClassDef>,
    interface: TypeDescriptor,
}

impl ProxyInstance {
    pub(crate) fn new(fixture: Fixture, def: Arc<ClassDef>, interface: TypeDescriptor) -> Self {
        Self {
            fixture,
            def,
            interface,
        }
    }

    /// The concrete interface type this proxy implements.
    pub fn interface(&self) -> &TypeDescriptor {
        &self.interface
    }

    pub fn methods(&self) -> impl Iterator<Item = &str> {
        let methods = match &self.def.kind {
            ClassKind::Capability { methods } => methods.as_slice(),
            _ => &[][..],
        };
        methods.iter().map(|m| m.name.as_str())
    }

    pub fn responds_to(&self, method: &str) -> bool {
        self.def.find_method(method).is_some()
    }

    /// Invoke `method`.
    ///
    /// The declared return type is substituted against the interface's type
    /// arguments (method-level parameters erase to `Any`) and resolved. Calls
    /// to unknown methods, or methods whose return type is unknown, return
    /// `Null`.
    pub fn call(&self, method: &str) -> FixtureResult<Value> {
        let Some(returns) = self.def.find_method(method).and_then(|m| m.returns.as_ref()) else {
            tracing::trace!(interface = %self.interface, method, "no declared return type");
            return Ok(Value::Null);
        };
        let ty = self
            .def
            .substitution(&self.interface.type_arguments)
            .apply_erasing(returns);
        tracing::trace!(interface = %self.interface, method, returns = %ty, "proxy call");
        self.fixture.resolve(&ty)
    }
}

impl PartialEq for ProxyInstance {
    /// Proxies are equal when they come from the same engine and definition.
    fn eq(&self, other: &Self) -> bool {
        self.fixture.same_engine(&other.fixture)
            && Arc::ptr_eq(&self.def, &other.def)
            && self.interface == other.interface
    }
}

impl fmt::Debug for ProxyInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProxyInstance")
            .field("interface", &self.interface)
            .field("methods", &self.methods().collect::<Vec<_>>())
            .finish()
    }
}

//! Runtime type catalog.
//!
//! The engine has no reflection to lean on, so everything it needs to know
//! about a non-primitive type is declared up front as a [`ClassDef`]:
//!
//! - **Class**: ordered constructor candidates plus an optional fallback
//!   (singleton or zero-argument instantiation) used when none is eligible.
//! - **Variant**: a closed, ordered list of alternatives.
//! - **Capability**: a method contract, synthesized as a dispatch proxy.
//!
//! Definitions are built programmatically with the builders below or loaded
//! from JSON with [`file`].

pub mod file;

use fixture_types::{Classifier, Substitution, TypeDescriptor};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Constructor visibility. Only `Private` excludes a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    #[default]
    Public,
    Internal,
    Protected,
    Private,
}

/// One constructor parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamDef {
    pub name: String,
    pub ty: TypeDescriptor,
    /// Index of the owning class's type parameter when `ty` is exactly that
    /// parameter. Bound when the class is added to a [`TypeCatalog`].
    pub slot: Option<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConstructorCandidate {
    pub name: String,
    pub visibility: Visibility,
    pub parameters: Vec<ParamDef>,
}

impl ConstructorCandidate {
    pub fn new(name: impl Into<String>, visibility: Visibility) -> Self {
        Self {
            name: name.into(),
            visibility,
            parameters: Vec::new(),
        }
    }

    pub fn public(name: impl Into<String>) -> Self {
        Self::new(name, Visibility::Public)
    }

    pub fn internal(name: impl Into<String>) -> Self {
        Self::new(name, Visibility::Internal)
    }

    pub fn protected(name: impl Into<String>) -> Self {
        Self::new(name, Visibility::Protected)
    }

    pub fn private(name: impl Into<String>) -> Self {
        Self::new(name, Visibility::Private)
    }

    /// Append a parameter.
    pub fn param(mut self, name: impl Into<String>, ty: TypeDescriptor) -> Self {
        self.parameters.push(ParamDef {
            name: name.into(),
            ty,
            slot: None,
        });
        self
    }

    pub fn param_count(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_eligible(&self) -> bool {
        self.visibility != Visibility::Private
    }
}

/// A capability method. `returns` is `None` when the return type is unknown.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodSig {
    pub name: String,
    pub returns: Option<TypeDescriptor>,
}

impl MethodSig {
    pub fn new(name: impl Into<String>, returns: impl Into<Option<TypeDescriptor>>) -> Self {
        Self {
            name: name.into(),
            returns: returns.into(),
        }
    }
}

/// What to do when a class has no eligible constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fallback {
    #[default]
    None,
    /// Use the class's single shared instance
    Singleton,
    /// Instantiate without arguments
    ZeroArgument,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ClassKind {
    Class {
        constructors: Vec<ConstructorCandidate>,
        fallback: Fallback,
    },
    Variant {
        alternatives: Vec<TypeDescriptor>,
    },
    Capability {
        methods: Vec<MethodSig>,
    },
}

impl ClassKind {
    pub fn label(&self) -> &'static str {
        match self {
            ClassKind::Class {
                fallback: Fallback::Singleton,
                constructors,
            } if constructors.is_empty() => "singleton",
            ClassKind::Class { .. } => "class",
            ClassKind::Variant { .. } => "variant",
            ClassKind::Capability { .. } => "capability",
        }
    }
}

/// Everything the engine knows about one catalog type.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassDef {
    pub classifier: Classifier,
    /// Declared generic parameter names, in order
    pub type_params: Vec<String>,
    pub kind: ClassKind,
}

impl ClassDef {
    fn with_kind(name: impl Into<String>, kind: ClassKind) -> Self {
        Self {
            classifier: Classifier::named(name),
            type_params: Vec::new(),
            kind,
        }
    }

    pub fn class(name: impl Into<String>) -> Self {
        Self::with_kind(
            name,
            ClassKind::Class {
                constructors: Vec::new(),
                fallback: Fallback::None,
            },
        )
    }

    /// A class whose only instance is shared.
    pub fn singleton(name: impl Into<String>) -> Self {
        Self::with_kind(
            name,
            ClassKind::Class {
                constructors: Vec::new(),
                fallback: Fallback::Singleton,
            },
        )
    }

    pub fn variant(name: impl Into<String>) -> Self {
        Self::with_kind(
            name,
            ClassKind::Variant {
                alternatives: Vec::new(),
            },
        )
    }

    pub fn capability(name: impl Into<String>) -> Self {
        Self::with_kind(
            name,
            ClassKind::Capability {
                methods: Vec::new(),
            },
        )
    }

    pub fn type_params<I, S>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.type_params = params.into_iter().map(Into::into).collect();
        self
    }

    /// Add a constructor candidate. Ignored unless this is a class.
    pub fn constructor(mut self, candidate: ConstructorCandidate) -> Self {
        if let ClassKind::Class { constructors, .. } = &mut self.kind {
            constructors.push(candidate);
        }
        self
    }

    /// Set the fallback. Ignored unless this is a class.
    pub fn fallback(mut self, value: Fallback) -> Self {
        if let ClassKind::Class { fallback, .. } = &mut self.kind {
            *fallback = value;
        }
        self
    }

    /// Add an alternative. Ignored unless this is a variant.
    pub fn alternative(mut self, ty: TypeDescriptor) -> Self {
        if let ClassKind::Variant { alternatives } = &mut self.kind {
            alternatives.push(ty);
        }
        self
    }

    /// Add a method. Ignored unless this is a capability.
    pub fn method(mut self, sig: MethodSig) -> Self {
        if let ClassKind::Capability { methods } = &mut self.kind {
            methods.push(sig);
        }
        self
    }

    pub fn name(&self) -> &str {
        self.classifier.name()
    }

    pub fn find_method(&self, name: &str) -> Option<&MethodSig> {
        match &self.kind {
            ClassKind::Capability { methods } => methods.iter().find(|m| m.name == name),
            _ => None,
        }
    }

    /// Substitution of this class's parameters with `args`.
    pub fn substitution<'a>(&'a self, args: &'a [TypeDescriptor]) -> Substitution<'a> {
        Substitution::new(&self.type_params, args)
    }

    fn bind_slots(&mut self) {
        let type_params = &self.type_params;
        if let ClassKind::Class { constructors, .. } = &mut self.kind {
            for param in constructors.iter_mut().flat_map(|c| c.parameters.iter_mut()) {
                param.slot = match &param.ty.classifier {
                    Classifier::Param(name) => type_params.iter().position(|p| p == name),
                    _ => None,
                };
            }
        }
    }
}

/// Catalog of class definitions keyed by classifier.
#[derive(Debug, Clone, Default)]
pub struct TypeCatalog {
    classes: HashMap<Classifier, Arc<ClassDef>>,
}

impl TypeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a definition, returning the one it replaced.
    pub fn define(&mut self, mut def: ClassDef) -> Option<Arc<ClassDef>> {
        def.bind_slots();
        self.classes.insert(def.classifier.clone(), Arc::new(def))
    }

    pub fn get(&self, classifier: &Classifier) -> Option<Arc<ClassDef>> {
        self.classes.get(classifier).cloned()
    }

    pub fn contains(&self, classifier: &Classifier) -> bool {
        self.classes.contains_key(classifier)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Definitions sorted by name.
    pub fn classes(&self) -> Vec<Arc<ClassDef>> {
        let mut defs: Vec<_> = self.classes.values().cloned().collect();
        defs.sort_by(|a, b| a.name().cmp(b.name()));
        defs
    }

    /// Merge another catalog into this one; its definitions win.
    pub fn extend(&mut self, other: TypeCatalog) {
        self.classes.extend(other.classes);
    }
}

//! Type descriptor model.
//!
//! A [`TypeDescriptor`] is the full generic shape of a value request: the
//! [`Classifier`] naming the type, its ordered type arguments and whether the
//! request is nullable. Descriptors are plain immutable data; all behavior
//! lives in the engine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Nominal identity of a type, independent of its generic arguments.
///
/// The well-known variants are the kinds the engine synthesizes without a
/// catalog entry. `Param` refers to a generic parameter declared by an
/// enclosing type and `Star` is a star projection (`*`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum Classifier {
    Any,
    Boolean,
    Char,
    Int,
    Long,
    Float,
    Double,
    String,
    List,
    Collection,
    Array,
    Map,
    /// A catalog type (class, variant, capability or singleton)
    Named(String),
    /// A reference to a declared generic parameter, by name
    Param(String),
    /// Star projection / wildcard
    Star,
}

impl Classifier {
    /// Create a classifier for a catalog type.
    pub fn named(name: impl Into<String>) -> Self {
        Classifier::Named(name.into())
    }

    /// Map a type name to its classifier.
    ///
    /// Well-known names (and their Rust spellings such as `i32` or `Vec`)
    /// map to the built-in kinds; anything else is a catalog name.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Any" => Classifier::Any,
            "Boolean" | "bool" => Classifier::Boolean,
            "Char" | "char" => Classifier::Char,
            "Int" | "i32" => Classifier::Int,
            "Long" | "i64" => Classifier::Long,
            "Float" | "f32" => Classifier::Float,
            "Double" | "f64" => Classifier::Double,
            "String" => Classifier::String,
            "List" | "Vec" => Classifier::List,
            "Collection" => Classifier::Collection,
            "Array" => Classifier::Array,
            "Map" | "HashMap" | "BTreeMap" => Classifier::Map,
            "*" => Classifier::Star,
            other => Classifier::Named(other.to_string()),
        }
    }

    /// Canonical name used in descriptor strings.
    pub fn name(&self) -> &str {
        match self {
            Classifier::Any => "Any",
            Classifier::Boolean => "Boolean",
            Classifier::Char => "Char",
            Classifier::Int => "Int",
            Classifier::Long => "Long",
            Classifier::Float => "Float",
            Classifier::Double => "Double",
            Classifier::String => "String",
            Classifier::List => "List",
            Classifier::Collection => "Collection",
            Classifier::Array => "Array",
            Classifier::Map => "Map",
            Classifier::Named(name) | Classifier::Param(name) => name,
            Classifier::Star => "*",
        }
    }

    /// Kinds drawn directly from a random source, including `Any` and `*`.
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            Classifier::Any
                | Classifier::Star
                | Classifier::Boolean
                | Classifier::Char
                | Classifier::Int
                | Classifier::Long
                | Classifier::Float
                | Classifier::Double
                | Classifier::String
        )
    }

    pub fn is_sequence(&self) -> bool {
        matches!(
            self,
            Classifier::List | Classifier::Collection | Classifier::Array
        )
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self, Classifier::Map)
    }

    pub fn is_param(&self) -> bool {
        matches!(self, Classifier::Param(_))
    }
}

impl fmt::Display for Classifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classifier + ordered type arguments + nullability.
///
/// A descriptor whose classifier is [`Classifier::Param`] never carries type
/// arguments; the constructors below and the parser keep it that way.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeDescriptor {
    pub classifier: Classifier,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_arguments: Vec<TypeDescriptor>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub nullable: bool,
}

impl TypeDescriptor {
    pub fn new(classifier: Classifier, type_arguments: Vec<TypeDescriptor>) -> Self {
        if classifier.is_param() {
            return Self::of(classifier);
        }
        Self {
            classifier,
            type_arguments,
            nullable: false,
        }
    }

    /// A non-generic, non-null descriptor.
    pub fn of(classifier: Classifier) -> Self {
        Self {
            classifier,
            type_arguments: Vec::new(),
            nullable: false,
        }
    }

    /// A catalog type with the given arguments.
    pub fn named(name: impl Into<String>, type_arguments: Vec<TypeDescriptor>) -> Self {
        Self::new(Classifier::Named(name.into()), type_arguments)
    }

    /// A reference to a declared generic parameter.
    pub fn param(name: impl Into<String>) -> Self {
        Self::of(Classifier::Param(name.into()))
    }

    pub fn any() -> Self {
        Self::of(Classifier::Any)
    }

    pub fn star() -> Self {
        Self::of(Classifier::Star)
    }

    pub fn list_of(element: TypeDescriptor) -> Self {
        Self::new(Classifier::List, vec![element])
    }

    pub fn map_of(key: TypeDescriptor, value: TypeDescriptor) -> Self {
        Self::new(Classifier::Map, vec![key, value])
    }

    /// Same descriptor, marked nullable.
    pub fn nullable(self) -> Self {
        self.with_nullable(true)
    }

    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// Type argument at `index`, if the caller supplied one.
    pub fn argument(&self, index: usize) -> Option<&TypeDescriptor> {
        self.type_arguments.get(index)
    }

    /// Whether any generic parameter reference appears in this descriptor.
    pub fn contains_params(&self) -> bool {
        self.classifier.is_param() || self.type_arguments.iter().any(|a| a.contains_params())
    }
}

impl From<Classifier> for TypeDescriptor {
    fn from(classifier: Classifier) -> Self {
        TypeDescriptor::of(classifier)
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.classifier)?;
        if !self.type_arguments.is_empty() {
            f.write_str("<")?;
            for (i, arg) in self.type_arguments.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}", arg)?;
            }
            f.write_str(">")?;
        }
        if self.nullable {
            f.write_str("?")?;
        }
        Ok(())
    }
}

/// Why a generic parameter could not be substituted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubstitutionError {
    /// The parameter name is not declared by the owning type
    UndeclaredParameter(String),
    /// The caller supplied another unresolved parameter as the argument
    UnresolvedArgument { parameter: String, argument: String },
}

impl fmt::Display for SubstitutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubstitutionError::UndeclaredParameter(name) => {
                write!(f, "type parameter {} is not declared by the owning type", name)
            }
            SubstitutionError::UnresolvedArgument {
                parameter,
                argument,
            } => write!(
                f,
                "type parameter {} is bound to unresolved parameter {}",
                parameter, argument
            ),
        }
    }
}

impl std::error::Error for SubstitutionError {}

/// Maps an owning type's declared generic parameters to the concrete
/// arguments of one request.
///
/// Missing or star-projected arguments become `Any`.
#[derive(Debug, Clone, Copy)]
pub struct Substitution<'a> {
    params: &'a [String],
    args: &'a [TypeDescriptor],
}

impl<'a> Substitution<'a> {
    pub fn new(params: &'a [String], args: &'a [TypeDescriptor]) -> Self {
        Self { params, args }
    }

    /// Index of `name` in the declared parameter list.
    pub fn slot_of(&self, name: &str) -> Option<usize> {
        self.params.iter().position(|p| p == name)
    }

    /// Concrete argument for the declared parameter at `index`.
    ///
    /// `nullable` is the nullability of the use site (`T?`), which is kept on
    /// the substituted descriptor.
    pub fn argument_at(
        &self,
        index: usize,
        nullable: bool,
    ) -> Result<TypeDescriptor, SubstitutionError> {
        match self.args.get(index) {
            None => Ok(TypeDescriptor::any().with_nullable(nullable)),
            Some(arg) => match &arg.classifier {
                Classifier::Star => Ok(TypeDescriptor::any().with_nullable(nullable)),
                Classifier::Param(inner) => Err(SubstitutionError::UnresolvedArgument {
                    parameter: self
                        .params
                        .get(index)
                        .cloned()
                        .unwrap_or_else(|| format!("#{}", index)),
                    argument: inner.clone(),
                }),
                _ => {
                    let mut resolved = arg.clone();
                    resolved.nullable |= nullable;
                    Ok(resolved)
                }
            },
        }
    }

    /// Replace every parameter reference in `ty`, at any depth.
    pub fn apply(&self, ty: &TypeDescriptor) -> Result<TypeDescriptor, SubstitutionError> {
        match &ty.classifier {
            Classifier::Param(name) => {
                let index = self
                    .slot_of(name)
                    .ok_or_else(|| SubstitutionError::UndeclaredParameter(name.clone()))?;
                self.argument_at(index, ty.nullable)
            }
            _ if ty.type_arguments.is_empty() => Ok(ty.clone()),
            _ => {
                let type_arguments = ty
                    .type_arguments
                    .iter()
                    .map(|arg| self.apply(arg))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(TypeDescriptor {
                    classifier: ty.classifier.clone(),
                    type_arguments,
                    nullable: ty.nullable,
                })
            }
        }
    }

    /// Like [`apply`](Self::apply), but parameters that cannot be resolved
    /// erase to `Any` instead of failing.
    pub fn apply_erasing(&self, ty: &TypeDescriptor) -> TypeDescriptor {
        match &ty.classifier {
            Classifier::Param(name) => self
                .slot_of(name)
                .and_then(|index| self.argument_at(index, ty.nullable).ok())
                .unwrap_or_else(|| TypeDescriptor::any().with_nullable(ty.nullable)),
            _ => TypeDescriptor {
                classifier: ty.classifier.clone(),
                type_arguments: ty
                    .type_arguments
                    .iter()
                    .map(|arg| self.apply_erasing(arg))
                    .collect(),
                nullable: ty.nullable,
            },
        }
    }
}

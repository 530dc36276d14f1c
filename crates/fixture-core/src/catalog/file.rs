//! JSON catalog documents.
//!
//! ```json
//! { "classes": [
//!   { "name": "Pair", "type_params": ["A", "B"], "kind": "class",
//!     "constructors": [ { "name": "new", "visibility": "public",
//!       "params": [ { "name": "first", "type": "A" }, { "name": "second", "type": "B" } ] } ] },
//!   { "name": "Shape", "kind": "variant", "alternatives": ["Circle", "Square"] },
//!   { "name": "Named", "kind": "capability",
//!     "methods": [ { "name": "get_name", "returns": "String" } ] },
//!   { "name": "Unit", "kind": "singleton" } ] }
//! ```
//!
//! Type strings inside a class are parsed with that class's type parameters
//! in scope.

use super::{ClassDef, ConstructorCandidate, Fallback, MethodSig, TypeCatalog, Visibility};
use crate::errors::{Failure, FixtureResult};
use anyhow::Context;
use fixture_types::{parse_type_descriptor_with_params, Classifier, TypeDescriptor};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogFile {
    pub classes: Vec<ClassSpec>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClassSpec {
    pub name: String,
    #[serde(default)]
    pub type_params: Vec<String>,
    #[serde(flatten)]
    pub kind: KindSpec,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum KindSpec {
    Class {
        #[serde(default)]
        constructors: Vec<ConstructorSpec>,
        #[serde(default)]
        fallback: Fallback,
    },
    Singleton,
    Variant {
        alternatives: Vec<String>,
    },
    Capability {
        #[serde(default)]
        methods: Vec<MethodSpec>,
    },
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConstructorSpec {
    #[serde(default = "default_constructor_name")]
    pub name: String,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub params: Vec<ParamSpec>,
}

fn default_constructor_name() -> String {
    "new".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParamSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MethodSpec {
    pub name: String,
    #[serde(default)]
    pub returns: Option<String>,
}

impl ClassSpec {
    /// Build the definition, parsing every type string.
    pub fn into_def(self) -> FixtureResult<ClassDef> {
        // A bare, non-reserved type name
        let valid_name = matches!(Classifier::from_name(&self.name), Classifier::Named(_))
            && fixture_types::parse_type_descriptor(&self.name)
                .map(|ty| ty.type_arguments.is_empty() && !ty.nullable)
                .unwrap_or(false);
        if !valid_name {
            return Err(Failure::invalid_catalog(format!(
                "class name '{}' is reserved or invalid",
                self.name
            )));
        }
        let mut seen = HashSet::new();
        if let Some(dup) = self.type_params.iter().find(|p| !seen.insert(p.as_str())) {
            return Err(Failure::invalid_catalog(format!(
                "class {} declares type parameter {} twice",
                self.name, dup
            )));
        }

        let name = self.name;
        let params = self.type_params;
        let parse = |ty: &str| -> FixtureResult<TypeDescriptor> {
            parse_type_descriptor_with_params(ty, &params)
                .map_err(|err| Failure::invalid_catalog(format!("class {}: {}", name, err)))
        };

        let def = match self.kind {
            KindSpec::Class {
                constructors,
                fallback,
            } => {
                let mut def = ClassDef::class(name.as_str()).fallback(fallback);
                for spec in constructors {
                    let mut candidate = ConstructorCandidate::new(spec.name, spec.visibility);
                    for param in spec.params {
                        candidate = candidate.param(param.name, parse(&param.ty)?);
                    }
                    def = def.constructor(candidate);
                }
                def
            }
            KindSpec::Singleton => ClassDef::singleton(name.as_str()),
            KindSpec::Variant { alternatives } => {
                if alternatives.is_empty() {
                    return Err(Failure::invalid_catalog(format!(
                        "variant {} has no alternatives",
                        name
                    )));
                }
                let mut def = ClassDef::variant(name.as_str());
                for alt in &alternatives {
                    def = def.alternative(parse(alt)?);
                }
                def
            }
            KindSpec::Capability { methods } => {
                let mut def = ClassDef::capability(name.as_str());
                for method in methods {
                    let returns = method.returns.as_deref().map(parse).transpose()?;
                    def = def.method(MethodSig::new(method.name, returns));
                }
                def
            }
        };
        Ok(def.type_params(params.iter().cloned()))
    }
}

impl CatalogFile {
    pub fn into_catalog(self) -> FixtureResult<TypeCatalog> {
        let mut catalog = TypeCatalog::new();
        for spec in self.classes {
            let name = spec.name.clone();
            if catalog.define(spec.into_def()?).is_some() {
                return Err(Failure::invalid_catalog(format!(
                    "class {} is defined more than once",
                    name
                )));
            }
        }
        Ok(catalog)
    }
}

/// Parse a catalog document.
pub fn from_json_str(json: &str) -> FixtureResult<TypeCatalog> {
    let file: CatalogFile = serde_json::from_str(json)
        .map_err(|e| Failure::invalid_catalog(format!("malformed catalog: {}", e)))?;
    file.into_catalog()
}

/// Read and parse a catalog file.
pub fn load(path: &Path) -> anyhow::Result<TypeCatalog> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog {}", path.display()))?;
    let catalog = from_json_str(&json)
        .with_context(|| format!("failed to load catalog {}", path.display()))?;
    tracing::debug!(path = %path.display(), classes = catalog.len(), "loaded catalog");
    Ok(catalog)
}

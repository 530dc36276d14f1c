//! Catalog command - inspect a catalog file

use anyhow::Result;
use clap::Parser;
use fixture_core::catalog::{file, ClassDef, ClassKind, Fallback, Visibility};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct CatalogCmd {
    /// Catalog JSON file
    pub path: PathBuf,
}

#[derive(Debug, Serialize)]
struct ClassSummary {
    name: String,
    kind: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    type_params: Vec<String>,
    /// Constructor signatures, alternatives or methods, depending on kind
    members: Vec<String>,
}

impl CatalogCmd {
    pub fn execute(&self, json_output: bool) -> Result<()> {
        let catalog = file::load(&self.path)?;
        let summaries: Vec<ClassSummary> =
            catalog.classes().iter().map(|def| summarize(def)).collect();

        if json_output {
            println!("{}", serde_json::to_string_pretty(&summaries)?);
            return Ok(());
        }

        for summary in &summaries {
            let params = if summary.type_params.is_empty() {
                String::new()
            } else {
                format!("<{}>", summary.type_params.join(", "))
            };
            println!("{}{} ({})", summary.name, params, summary.kind);
            for member in &summary.members {
                println!("  {}", member);
            }
        }
        Ok(())
    }
}

fn summarize(def: &ClassDef) -> ClassSummary {
    let members = match &def.kind {
        ClassKind::Class {
            constructors,
            fallback,
        } => {
            let mut members: Vec<String> = constructors
                .iter()
                .map(|c| {
                    let params: Vec<String> = c
                        .parameters
                        .iter()
                        .map(|p| format!("{}: {}", p.name, p.ty))
                        .collect();
                    format!("{} {}({})", visibility_label(c.visibility), c.name, params.join(", "))
                })
                .collect();
            if *fallback == Fallback::ZeroArgument {
                members.push("fallback: zero-argument".to_string());
            }
            members
        }
        ClassKind::Variant { alternatives } => {
            alternatives.iter().map(|a| format!("| {}", a)).collect()
        }
        ClassKind::Capability { methods } => methods
            .iter()
            .map(|m| match &m.returns {
                Some(ty) => format!("fn {}() -> {}", m.name, ty),
                None => format!("fn {}() -> ?", m.name),
            })
            .collect(),
    };

    ClassSummary {
        name: def.name().to_string(),
        kind: def.kind.label(),
        type_params: def.type_params.clone(),
        members,
    }
}

fn visibility_label(visibility: Visibility) -> &'static str {
    match visibility {
        Visibility::Public => "public",
        Visibility::Internal => "internal",
        Visibility::Protected => "protected",
        Visibility::Private => "private",
    }
}

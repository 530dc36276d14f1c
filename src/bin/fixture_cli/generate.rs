//! Generate command - synthesize values for a type

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use fixture_core::catalog::file;
use fixture_core::{Classifier, Fixture, FixtureConfig, Value};
use fixture_types::parse_type_descriptor;
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct GenerateCmd {
    /// Type to synthesize, e.g. "Map<String, List<Int>>"
    pub type_str: String,

    /// Catalog JSON file declaring classes, variants and capabilities
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Seed for reproducible output (default: FIXTURE_SEED, else random)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of values to generate
    #[arg(long, default_value_t = 1)]
    pub count: usize,

    /// Resolve the requested type under this slot key
    #[arg(long)]
    pub key: Option<String>,

    /// Minimum collection length
    #[arg(long)]
    pub min: Option<usize>,

    /// Maximum collection length
    #[arg(long)]
    pub max: Option<usize>,

    /// Constant override as TYPE=JSON or TYPE#KEY=JSON (repeatable)
    #[arg(long = "set", value_name = "TYPE[#KEY]=JSON")]
    pub overrides: Vec<String>,
}

impl GenerateCmd {
    pub fn execute(&self) -> Result<()> {
        let ty = parse_type_descriptor(&self.type_str)
            .with_context(|| format!("cannot parse '{}'", self.type_str))?;

        let fixture = Fixture::with_config(self.config()?);
        if let Some(path) = &self.catalog {
            fixture.load_catalog(file::load(path)?);
        }
        for spec in &self.overrides {
            OverrideSpec::parse(spec)?.register(&fixture);
        }

        for _ in 0..self.count {
            let value = match &self.key {
                Some(key) => fixture.resolve_keyed(&ty, key),
                None => fixture.resolve(&ty),
            }
            .with_context(|| format!("failed to generate {}", ty))?;
            println!("{}", serde_json::to_string(&value)?);
        }
        Ok(())
    }

    fn config(&self) -> Result<FixtureConfig> {
        Ok(FixtureConfig::from_env_with(self.seed, self.min, self.max)?)
    }
}

/// A `--set` argument.
#[derive(Debug, PartialEq)]
struct OverrideSpec {
    classifier: Classifier,
    key: Option<String>,
    value: Value,
}

impl OverrideSpec {
    fn parse(spec: &str) -> Result<Self> {
        let (target, json) = spec
            .split_once('=')
            .ok_or_else(|| anyhow!("override '{}' must look like TYPE=JSON", spec))?;
        let (type_str, key) = match target.split_once('#') {
            Some((type_str, key)) if !key.trim().is_empty() => {
                (type_str, Some(key.trim().to_string()))
            }
            Some(_) => return Err(anyhow!("override '{}' has an empty key", spec)),
            None => (target, None),
        };
        let ty = parse_type_descriptor(type_str)
            .with_context(|| format!("invalid override target in '{}'", spec))?;
        let json: serde_json::Value = serde_json::from_str(json)
            .with_context(|| format!("invalid override value in '{}'", spec))?;

        Ok(Self {
            classifier: ty.classifier,
            key,
            value: json_to_value(json),
        })
    }

    fn register(self, fixture: &Fixture) {
        let value = self.value;
        let provider = move |_: &Fixture| Ok(value.clone());
        match self.key {
            Some(key) => fixture.register_keyed(self.classifier, key, provider),
            None => fixture.register(self.classifier, provider),
        }
    }
}

fn json_to_value(json: serde_json::Value) -> Value {
    use serde_json::Value as Json;
    match json {
        Json::Null => Value::Null,
        Json::Bool(b) => Value::Bool(b),
        Json::Number(n) => match n.as_i64() {
            Some(i) => i32::try_from(i).map_or(Value::Long(i), Value::Int),
            None => n.as_f64().map_or(Value::Null, Value::Double),
        },
        Json::String(s) => Value::String(s),
        Json::Array(items) => Value::List(items.into_iter().map(json_to_value).collect()),
        Json::Object(map) => Value::Map(
            map.into_iter()
                .map(|(k, v)| (Value::String(k), json_to_value(v)))
                .collect(),
        ),
    }
}

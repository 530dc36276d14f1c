//! Parse command - normalize a type string

use anyhow::{Context, Result};
use clap::Parser;
use fixture_types::parse_type_descriptor;

#[derive(Parser, Debug)]
pub struct ParseCmd {
    /// Type string, e.g. "List<Map<String, Int>>?"
    pub type_str: String,
}

impl ParseCmd {
    pub fn execute(&self, json_output: bool) -> Result<()> {
        let ty = parse_type_descriptor(&self.type_str)
            .with_context(|| format!("cannot parse '{}'", self.type_str))?;

        if json_output {
            println!("{}", serde_json::to_string_pretty(&ty)?);
        } else {
            println!("{}", ty);
        }
        Ok(())
    }
}

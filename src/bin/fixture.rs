//! fixture: synthesize randomized test fixtures from type descriptions
//!
//! ## Commands
//!
//! - **parse**: Normalize a type string, or show its descriptor as JSON
//! - **generate**: Synthesize values for a type, one JSON document per line
//! - **catalog**: List the classes declared in a catalog file
//!
//! ## Example Usage
//!
//! ```bash
//! # Normalize a type string
//! fixture parse "Vec<HashMap<String, i32>>"
//!
//! # Three reproducible values of a catalog type
//! fixture generate "Pair<String, Int>" --catalog types.json --seed 7 --count 3
//!
//! # Pin a constructor slot to a constant
//! fixture generate User --catalog types.json --set 'String#email="a@b.c"'
//!
//! # Trace resolution
//! RUST_LOG=fixture_core=trace fixture --verbose generate "List<Int>"
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod fixture_cli;

use fixture_cli::{catalog::CatalogCmd, generate::GenerateCmd, parse::ParseCmd};

#[derive(Parser)]
#[command(
    name = "fixture",
    author,
    version,
    about = "Type-driven fixture synthesis",
    long_about = "Synthesizes plausible, randomized values for a type from its description.\n\n\
                  Primitives and collections work out of the box; \
                  other types come from a JSON catalog."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output as JSON instead of human-readable format
    #[arg(long, global = true)]
    json: bool,

    /// Verbose output (log resolution steps to stderr, filtered by RUST_LOG)
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse and normalize a type string
    Parse(ParseCmd),

    /// Generate values for a type
    Generate(GenerateCmd),

    /// List the classes of a catalog file
    Catalog(CatalogCmd),
}

fn init_tracing(verbose: bool) {
    if !verbose {
        return;
    }
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!("tracing initialized");
}

fn main() -> Result<()> {
    let Cli {
        command,
        json,
        verbose,
    } = Cli::parse();
    init_tracing(verbose);

    match command {
        Commands::Parse(cmd) => cmd.execute(json),
        Commands::Generate(cmd) => cmd.execute(),
        Commands::Catalog(cmd) => cmd.execute(json),
    }
}

//! Subcommands of the `fixture` binary.

pub mod catalog;
pub mod generate;
pub mod parse;

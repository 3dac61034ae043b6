//! CLI subcommand implementations.

pub mod render;
pub mod repl;
pub mod script;

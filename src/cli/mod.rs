//! CLI module
//!
//! Command-line interface. Running with no arguments fetches the default
//! SIDRA table and writes its lists to `saida_dados/`.

mod commands;
mod runner;

pub use commands::Cli;
pub use runner::Runner;

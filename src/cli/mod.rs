//! CLI command handlers for Sitewright.
//!
//! Each subcommand is a clap `Args` struct with an `execute()` method
//! returning a [`common::CliResult`], so commands stay scriptable for
//! automation and CI use.

pub mod common;
pub mod fonts;
pub mod generate;
pub mod palette;

// Re-export types used by main.rs and tests
pub use common::ExitCode;
pub use fonts::FontsArgs;
pub use generate::GenerateArgs;
pub use palette::PaletteArgs;

//! Sitewright - Rule-based website template generator
//!
//! Generates complete HTML/CSS website templates from a short project brief,
//! using industry-aware color palettes, curated font pairings, and a content
//! strategy engine.

use clap::{Parser, Subcommand};
use sitewright::cli::{FontsArgs, GenerateArgs, PaletteArgs};
use sitewright::constants::APP_NAME;
use tracing_subscriber::EnvFilter;

/// Sitewright - Rule-based website template generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a website template from a project brief
    Generate(GenerateArgs),
    /// Print the color palette for an industry and style
    Palette(PaletteArgs),
    /// Print the font pairing and type scale for a brief
    Fonts(FontsArgs),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::debug!(app = APP_NAME, "starting");

    let result = match cli.command {
        Commands::Generate(args) => args.execute(),
        Commands::Palette(args) => args.execute(),
        Commands::Fonts(args) => args.execute(),
    };

    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code().code());
    }
}

//! Fonts command: show the font pairing and type scale for a brief.

use crate::cli::common::{CliError, CliResult};
use crate::generator::design_system::DEFAULT_SCALE_RATIO;
use crate::typography::{
    generate_typography_system, google_fonts_url, select_font_pairing, validate_accessibility,
};
use clap::Args;
use serde::Serialize;

/// Print the selected font pairing and modular scale
#[derive(Debug, Clone, Args)]
pub struct FontsArgs {
    /// Typography style: professional, creative, technical, or friendly
    #[arg(short, long, value_name = "NAME", default_value = "professional")]
    pub style: String,

    /// Industry the pairing is scored against
    #[arg(short, long, value_name = "NAME")]
    pub industry: String,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON shape emitted under `--json`.
#[derive(Debug, Serialize)]
struct FontsReport<'a> {
    pairing: &'a str,
    heading: &'a str,
    body: &'a str,
    google_fonts_url: String,
    system: &'a crate::models::TypographySystem,
    accessible: bool,
    issues: &'a [String],
    suggestions: &'a [String],
}

impl FontsArgs {
    /// Execute the fonts command
    pub fn execute(&self) -> CliResult<()> {
        let pairing = select_font_pairing(&self.style, &self.industry);
        let system = generate_typography_system(&self.style, &self.industry, DEFAULT_SCALE_RATIO);
        let audit = validate_accessibility(&system);

        if self.json {
            let report = FontsReport {
                pairing: &pairing.name,
                heading: &pairing.heading.family,
                body: &pairing.body.family,
                google_fonts_url: google_fonts_url(pairing),
                system: &system,
                accessible: audit.valid,
                issues: &audit.issues,
                suggestions: &audit.suggestions,
            };
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| CliError::io(format!("Failed to serialize fonts report: {e}")))?;
            println!("{json}");
            return Ok(());
        }

        println!("Pairing: {}", pairing.name);
        println!("  heading  {}", pairing.heading.family);
        println!("  body     {}", pairing.body.family);
        println!("  fonts    {}", google_fonts_url(pairing));
        println!("Scale:");
        for (key, size) in system.scale.entries() {
            println!("  {key:<5} {size}");
        }
        if audit.valid {
            println!("✓ Typography passes legibility checks");
        } else {
            for issue in &audit.issues {
                println!("⚠ {issue}");
            }
            for suggestion in &audit.suggestions {
                println!("  hint: {suggestion}");
            }
        }

        Ok(())
    }
}

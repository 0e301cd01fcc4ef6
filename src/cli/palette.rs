//! Palette command: print the accessible color palette for an industry.

use crate::cli::common::{CliError, CliResult};
use crate::color::{ensure_accessibility, generate_industry_palette};
use clap::Args;

/// Print the generated color palette for an industry
#[derive(Debug, Clone, Args)]
pub struct PaletteArgs {
    /// Industry to generate for (e.g. tech, finance, healthcare)
    #[arg(short, long, value_name = "NAME")]
    pub industry: String,

    /// Style direction: modern, minimal, bold, classic, or playful
    #[arg(short, long, value_name = "NAME", default_value = "modern")]
    pub style: String,

    /// Seed the palette from a brand color instead of the industry table
    #[arg(long, value_name = "HEX")]
    pub base_color: Option<String>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

impl PaletteArgs {
    /// Execute the palette command
    pub fn execute(&self) -> CliResult<()> {
        let palette = generate_industry_palette(
            &self.industry,
            self.base_color.as_deref(),
            &self.style,
        );
        let palette = ensure_accessibility(&palette);

        if self.json {
            let json = serde_json::to_string_pretty(&palette)
                .map_err(|e| CliError::io(format!("Failed to serialize palette: {e}")))?;
            println!("{json}");
        } else {
            println!("Palette for {} ({}):", self.industry, self.style);
            println!("  primary    {}", palette.primary);
            println!("  secondary  {}", palette.secondary);
            println!("  accent     {}", palette.accent);
            println!("  neutral    {}", palette.neutral);
            println!("  success    {}", palette.semantic.success);
            println!("  warning    {}", palette.semantic.warning);
            println!("  error      {}", palette.semantic.error);
            println!("  info       {}", palette.semantic.info);
        }

        Ok(())
    }
}

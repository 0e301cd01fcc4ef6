//! Generate command: brief in, website template files out.

use crate::cli::common::{CliError, CliResult};
use crate::generator::TemplateGenerator;
use crate::models::ProjectRequirements;
use clap::Args;
use std::path::{Path, PathBuf};

/// Stable id substituted for the timestamped one under `--deterministic`.
const DETERMINISTIC_ID: &str = "template-0000000000000-000000000";

/// Generate a website template from a project brief
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Path to project brief file (JSON or TOML)
    #[arg(short, long, value_name = "FILE")]
    pub brief: PathBuf,

    /// Output directory for generated files
    #[arg(short, long, value_name = "DIR")]
    pub out_dir: PathBuf,

    /// Also write the full template object as template.json
    #[arg(long)]
    pub json: bool,

    /// Use a stable template id for deterministic output (for testing)
    #[arg(long)]
    pub deterministic: bool,
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self) -> CliResult<()> {
        let requirements = load_brief(&self.brief)?;

        if !requirements.has_required_fields() {
            return Err(CliError::validation(
                "Brief must specify both 'project_type' and 'industry'",
            ));
        }

        let mut template = TemplateGenerator::generate(&requirements);
        if self.deterministic {
            template.id = DETERMINISTIC_ID.to_string();
        }

        std::fs::create_dir_all(&self.out_dir)
            .map_err(|e| CliError::io(format!("Failed to create output directory: {e}")))?;

        std::fs::write(self.out_dir.join("template.html"), &template.html)
            .map_err(|e| CliError::io(format!("Failed to write template.html: {e}")))?;
        std::fs::write(self.out_dir.join("styles.css"), &template.css)
            .map_err(|e| CliError::io(format!("Failed to write styles.css: {e}")))?;

        let tokens_json = template
            .design_tokens_json()
            .map_err(|e| CliError::io(format!("Failed to serialize design tokens: {e}")))?;
        std::fs::write(self.out_dir.join("design-tokens.json"), tokens_json)
            .map_err(|e| CliError::io(format!("Failed to write design-tokens.json: {e}")))?;

        if self.json {
            let template_json = serde_json::to_string_pretty(&template)
                .map_err(|e| CliError::io(format!("Failed to serialize template: {e}")))?;
            std::fs::write(self.out_dir.join("template.json"), template_json)
                .map_err(|e| CliError::io(format!("Failed to write template.json: {e}")))?;
        }

        println!("✓ Generated {}", template.name);
        println!("  {} components, {}", template.components.len(), template.id);
        println!("  Output: {}", self.out_dir.display());

        Ok(())
    }
}

/// Loads a brief from JSON or TOML, chosen by file extension.
fn load_brief(path: &Path) -> CliResult<ProjectRequirements> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| CliError::io(format!("Failed to read brief {}: {e}", path.display())))?;

    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    if is_toml {
        toml::from_str(&raw).map_err(|e| CliError::validation(format!("Invalid TOML brief: {e}")))
    } else {
        serde_json::from_str(&raw)
            .map_err(|e| CliError::validation(format!("Invalid JSON brief: {e}")))
    }
}

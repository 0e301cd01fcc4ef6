//! Terminal artifact of a generation run.

use serde::{Deserialize, Serialize};

use super::{ComponentDefinition, DesignTokens};

/// The assembled website template returned to the caller.
///
/// Self-contained and JSON-serializable with no external resource handles:
/// downstream exporters (file writers, design-tool bridges) consume it as-is.
/// The generator retains no reference once it is returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedTemplate {
    /// Unique id, `template-{unix_millis}-{suffix}`. The only
    /// non-deterministic field of a generation run.
    pub id: String,
    /// Human-readable name, e.g. "Modern Landing Template".
    pub name: String,
    /// One-sentence description of the generated artifact.
    pub description: String,
    /// Full assembled HTML document.
    pub html: String,
    /// Aggregated stylesheet: reset, token block, then component CSS in
    /// generation order.
    pub css: String,
    /// Design tokens the components were rendered with.
    pub design_tokens: DesignTokens,
    /// Generated components in generation order.
    pub components: Vec<ComponentDefinition>,
}

impl GeneratedTemplate {
    /// Looks up a component by id.
    #[must_use]
    pub fn component(&self, id: &str) -> Option<&ComponentDefinition> {
        self.components.iter().find(|c| c.id == id)
    }

    /// Design tokens rendered as pretty JSON, for token export.
    pub fn design_tokens_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.design_tokens)
    }
}

//! Template generator: the orchestrator that turns a brief into a finished
//! website artifact.

pub mod atoms;
pub mod design_system;
pub mod document;
pub mod sections;

pub use design_system::build_design_tokens;
pub use document::{active_sections, assemble_css, assemble_html, default_sections, SECTION_ORDER};

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::models::{GeneratedTemplate, ProjectRequirements};
use crate::typography::{google_fonts_url, select_font_pairing};
use sections::SectionContext;

/// Rule-based website template generator.
///
/// Stateless; [`TemplateGenerator::generate`] is a pure pipeline over the
/// brief and the embedded data tables, deterministic for identical inputs
/// except for the generated template id.
pub struct TemplateGenerator;

impl TemplateGenerator {
    /// Runs the full generation pipeline for a brief.
    ///
    /// Missing optional fields are filled with their documented defaults
    /// first, so a minimal brief (project type + industry) always generates.
    #[must_use]
    pub fn generate(requirements: &ProjectRequirements) -> GeneratedTemplate {
        let requirements = requirements.clone().with_defaults();
        info!(
            project_type = %requirements.project_type,
            industry = %requirements.industry,
            style = %requirements.style_direction,
            "generating template"
        );

        let design_tokens = build_design_tokens(&requirements);
        let ctx = SectionContext::new(&requirements, &design_tokens);

        let mut components = atoms::atoms(&design_tokens);
        for section_id in active_sections(&requirements) {
            if let Some(component) = sections::section_component(section_id, &ctx) {
                components.push(component);
            }
        }
        for element_id in &requirements.interactive_elements {
            if let Some(component) = sections::interactive_component(element_id, &ctx) {
                components.push(component);
            }
        }
        info!(components = components.len(), "components generated");

        let pairing = select_font_pairing(&requirements.typography_style, &requirements.industry);
        let css = assemble_css(&design_tokens, &components);
        let html = assemble_html(&requirements, &components, &css, &google_fonts_url(pairing));

        GeneratedTemplate {
            id: generate_id(),
            name: template_name(&requirements),
            description: template_description(&requirements),
            html,
            css,
            design_tokens,
            components,
        }
    }
}

/// Unique template id, `template-{unix millis}-{9-char suffix}`.
fn generate_id() -> String {
    let suffix: String = Uuid::new_v4().simple().to_string().chars().take(9).collect();
    format!("template-{}-{}", Utc::now().timestamp_millis(), suffix)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn template_name(requirements: &ProjectRequirements) -> String {
    format!(
        "{} {} Template",
        capitalize(&requirements.style_direction),
        capitalize(&requirements.project_type)
    )
}

fn template_description(requirements: &ProjectRequirements) -> String {
    format!(
        "A {} {} template designed for {} with {} color scheme.",
        requirements.style_direction,
        requirements.project_type,
        requirements.industry,
        requirements.color_preferences.source.label()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ComponentType;

    #[test]
    fn test_generate_from_minimal_brief() {
        let req = ProjectRequirements::new("landing", "tech");
        let template = TemplateGenerator::generate(&req);
        assert_eq!(template.name, "Modern Landing Template");
        assert!(template.id.starts_with("template-"));
        assert!(template.component("button").is_some());
        assert!(template.component("heading").is_some());
        // default landing sections
        for id in ["hero", "about", "services", "contact"] {
            assert!(template.component(id).is_some(), "{id}");
        }
    }

    #[test]
    fn test_description_mentions_color_source() {
        let req = ProjectRequirements::new("saas", "finance");
        let template = TemplateGenerator::generate(&req);
        assert_eq!(
            template.description,
            "A modern saas template designed for finance with ai-suggested color scheme."
        );
    }

    #[test]
    fn test_generate_is_deterministic_except_id() {
        let req = ProjectRequirements::new("portfolio", "creative").with_defaults();
        let first = TemplateGenerator::generate(&req);
        let second = TemplateGenerator::generate(&req);
        assert_eq!(first.html, second.html);
        assert_eq!(first.css, second.css);
        assert_eq!(first.design_tokens, second.design_tokens);
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_contact_form_included_when_requested() {
        let mut req = ProjectRequirements::new("landing", "tech").with_defaults();
        req.interactive_elements = vec!["contact_form".to_string(), "search".to_string()];
        let template = TemplateGenerator::generate(&req);
        let form = template.component("contact_form").unwrap();
        assert_eq!(form.component_type, ComponentType::Molecule);
        assert!(template.component("search").is_none());
    }

    #[test]
    fn test_id_shape() {
        let id = generate_id();
        let parts: Vec<&str> = id.splitn(3, '-').collect();
        assert_eq!(parts[0], "template");
        assert!(parts[1].parse::<i64>().is_ok());
        assert_eq!(parts[2].len(), 9);
    }

    #[test]
    fn test_template_serializes_to_json() {
        let req = ProjectRequirements::new("landing", "healthcare");
        let template = TemplateGenerator::generate(&req);
        let json = serde_json::to_string(&template).unwrap();
        let parsed: GeneratedTemplate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.components.len(), template.components.len());
    }
}

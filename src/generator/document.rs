//! Full-page assembly: section ordering, the stylesheet cascade and the
//! HTML5 document wrapper.

use tracing::debug;

use crate::models::{ComponentDefinition, ComponentType, DesignTokens, ProjectRequirements};
use crate::typography::{line_height_for, rem_value};

/// Fixed top-to-bottom rendering order for page sections.
///
/// Requested sections are rendered in this order regardless of how the brief
/// listed them.
pub const SECTION_ORDER: [&str; 8] = [
    "hero",
    "about",
    "services",
    "portfolio",
    "testimonials",
    "team",
    "pricing",
    "contact",
];

/// Default section list applied when a brief requests no sections.
#[must_use]
pub fn default_sections(project_type: &str) -> &'static [&'static str] {
    match project_type {
        "landing" => &["hero", "about", "services", "contact"],
        "portfolio" => &["hero", "about", "portfolio", "contact"],
        "ecommerce" => &["hero", "services", "pricing", "contact"],
        "saas" => &["hero", "services", "pricing", "testimonials", "contact"],
        "corporate" => &["hero", "about", "services", "team", "contact"],
        // "blog" and anything unrecognized
        _ => &["hero", "about", "contact"],
    }
}

/// Section ids to render for a brief, in the fixed rendering order.
///
/// Ids outside [`SECTION_ORDER`] are dropped; they have no organism.
#[must_use]
pub fn active_sections(requirements: &ProjectRequirements) -> Vec<&'static str> {
    let requested: Vec<&str> = if requirements.required_sections.is_empty() {
        default_sections(&requirements.project_type).to_vec()
    } else {
        requirements
            .required_sections
            .iter()
            .map(String::as_str)
            .collect()
    };

    SECTION_ORDER
        .into_iter()
        .filter(|id| requested.contains(id))
        .collect()
}

/// Joins the reset block, the token custom-property block and every
/// component's CSS, in generation order. No deduplication; later rules win
/// by source order.
#[must_use]
pub fn assemble_css(tokens: &DesignTokens, components: &[ComponentDefinition]) -> String {
    let mut css = String::new();
    css.push_str(RESET_CSS);
    css.push_str("\n\n");
    css.push_str(&token_css(tokens));
    for component in components {
        css.push_str("\n\n");
        css.push_str(&component.css);
    }
    css
}

/// Wraps the rendered sections in a complete HTML5 document.
///
/// Fallback chain when no requested section resolved to a component: first
/// every organism in generation order, then a plain component showcase so
/// the document is never bodyless.
#[must_use]
pub fn assemble_html(
    requirements: &ProjectRequirements,
    components: &[ComponentDefinition],
    css: &str,
    fonts_href: &str,
) -> String {
    let sections = active_sections(requirements);
    let mut body: Vec<&str> = sections
        .iter()
        .filter_map(|id| components.iter().find(|c| c.id == *id))
        .map(|c| c.html.as_str())
        .collect();

    if body.is_empty() {
        body = components
            .iter()
            .filter(|c| c.component_type == ComponentType::Organism)
            .map(|c| c.html.as_str())
            .collect();
        if !body.is_empty() {
            debug!("no requested section resolved; rendering all organisms");
        }
    }

    let body_html = if body.is_empty() {
        debug!("no organisms generated; falling back to component showcase");
        let mut showcase = String::from("<main class=\"component-showcase\">\n");
        for component in components {
            showcase.push_str(&component.html);
            showcase.push('\n');
        }
        showcase.push_str("</main>");
        showcase
    } else {
        body.join("\n\n")
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{industry} {project_type}</title>
    <link rel="preconnect" href="https://fonts.googleapis.com">
    <link href="{fonts_href}" rel="stylesheet">
    <style>
{css}
    </style>
</head>
<body>
{body_html}
</body>
</html>"#,
        industry = requirements.industry,
        project_type = requirements.project_type,
    )
}

const RESET_CSS: &str = r"* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

body {
  line-height: 1.6;
  color: #333;
  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', 'Roboto', sans-serif;
}

img {
  max-width: 100%;
  height: auto;
}";

/// Renders every token as a `:root` custom property.
fn token_css(tokens: &DesignTokens) -> String {
    let mut css = String::from(":root {\n");
    let colors = &tokens.colors;
    for (name, value) in [
        ("primary", &colors.primary),
        ("secondary", &colors.secondary),
        ("accent", &colors.accent),
        ("neutral", &colors.neutral),
        ("success", &colors.semantic.success),
        ("warning", &colors.semantic.warning),
        ("error", &colors.semantic.error),
        ("info", &colors.semantic.info),
    ] {
        css.push_str(&format!("  --color-{name}: {value};\n"));
    }
    css.push_str(&format!(
        "  --font-heading: '{}', serif;\n",
        tokens.typography.font_pairings.heading
    ));
    css.push_str(&format!(
        "  --font-body: '{}', sans-serif;\n",
        tokens.typography.font_pairings.body
    ));
    for (key, size) in tokens.typography.scale.entries() {
        css.push_str(&format!("  --font-size-{key}: {size};\n"));
        css.push_str(&format!(
            "  --line-height-{key}: {};\n",
            line_height_for(rem_value(size))
        ));
    }
    for (key, weight) in tokens.typography.weights.entries() {
        css.push_str(&format!("  --font-weight-{key}: {weight};\n"));
    }
    for (key, step) in tokens.spacing.entries() {
        css.push_str(&format!("  --spacing-{key}: {step};\n"));
    }
    for (key, radius) in tokens.border_radius.entries() {
        css.push_str(&format!("  --radius-{key}: {radius};\n"));
    }
    for (key, shadow) in tokens.shadows.entries() {
        css.push_str(&format!("  --shadow-{key}: {shadow};\n"));
    }
    css.push('}');
    css
}

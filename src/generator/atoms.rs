//! Atom components shared by every template: button and heading.

use crate::color::parse_hex;
use crate::models::{ComponentDefinition, ComponentType, ComponentVariant, DesignTokens};

/// The two atoms included in every generation run.
#[must_use]
pub fn atoms(tokens: &DesignTokens) -> Vec<ComponentDefinition> {
    vec![
        ComponentDefinition {
            id: "button".to_string(),
            name: "Button".to_string(),
            component_type: ComponentType::Atom,
            html: r#"<button class="btn btn-primary">{{text}}</button>"#.to_string(),
            css: button_css(tokens),
            variants: vec![
                ComponentVariant::single("primary", "class", "btn-primary"),
                ComponentVariant::single("secondary", "class", "btn-secondary"),
                ComponentVariant::single("outline", "class", "btn-outline"),
            ],
        },
        ComponentDefinition {
            id: "heading".to_string(),
            name: "Heading".to_string(),
            component_type: ComponentType::Atom,
            html: r#"<h1 class="heading">{{text}}</h1>"#.to_string(),
            css: heading_css(tokens),
            variants: vec![
                ComponentVariant::single("h1", "tag", "h1"),
                ComponentVariant::single("h2", "tag", "h2"),
                ComponentVariant::single("h3", "tag", "h3"),
            ],
        },
    ]
}

fn button_css(tokens: &DesignTokens) -> String {
    format!(
        r".btn {{
  display: inline-flex;
  align-items: center;
  justify-content: center;
  padding: 0.75rem 1.5rem;
  font-family: '{body_font}', sans-serif;
  font-weight: {medium};
  font-size: {base_size};
  line-height: 1.5;
  border: none;
  border-radius: {radius_md};
  cursor: pointer;
  transition: all 0.2s ease-in-out;
  text-decoration: none;
}}

.btn-primary {{
  background-color: {primary};
  color: white;
  box-shadow: {shadow_sm};
}}

.btn-primary:hover {{
  background-color: {primary_hover};
  box-shadow: {shadow_md};
  transform: translateY(-1px);
}}

.btn-secondary {{
  background-color: {secondary};
  color: {primary};
  box-shadow: {shadow_sm};
}}

.btn-outline {{
  background-color: transparent;
  color: {primary};
  border: 2px solid {primary};
}}
",
        body_font = tokens.typography.font_pairings.body,
        medium = tokens.typography.weights.medium,
        base_size = tokens.typography.scale.base,
        radius_md = tokens.border_radius.md,
        primary = tokens.colors.primary,
        primary_hover = darken_color(&tokens.colors.primary, 10.0),
        secondary = tokens.colors.secondary,
        shadow_sm = tokens.shadows.sm,
        shadow_md = tokens.shadows.md,
    )
}

fn heading_css(tokens: &DesignTokens) -> String {
    format!(
        r".heading {{
  font-family: '{heading_font}', serif;
  font-weight: {semibold};
  line-height: 1.2;
  color: {primary};
  margin-bottom: 1rem;
}}
",
        heading_font = tokens.typography.font_pairings.heading,
        semibold = tokens.typography.weights.semibold,
        primary = tokens.colors.primary,
    )
}

/// Darkens a hex color by a flat per-channel amount of `2.55 * percent`,
/// clamped at zero. Used for hover states.
#[must_use]
pub fn darken_color(hex: &str, percent: f64) -> String {
    let Ok((r, g, b)) = parse_hex(hex) else {
        return hex.to_string();
    };
    let amount = (2.55 * percent).round() as i32;
    let shift = |channel: u8| u8::try_from((i32::from(channel) - amount).clamp(0, 255)).unwrap_or(0);
    format!("#{:02x}{:02x}{:02x}", shift(r), shift(g), shift(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::design_system::build_design_tokens;
    use crate::models::ProjectRequirements;

    fn tokens() -> DesignTokens {
        build_design_tokens(&ProjectRequirements::new("landing", "tech").with_defaults())
    }

    #[test]
    fn test_darken_color_flat_shift() {
        // 2.55 * 10 rounds to 26; 0x80 - 26 = 0x66
        assert_eq!(darken_color("#808080", 10.0), "#666666");
        assert_eq!(darken_color("#100000", 10.0), "#000000");
        assert_eq!(darken_color("#ffffff", 0.0), "#ffffff");
    }

    #[test]
    fn test_darken_color_passes_through_invalid_hex() {
        assert_eq!(darken_color("oops", 10.0), "oops");
    }

    #[test]
    fn test_atoms_carry_variants() {
        let atoms = atoms(&tokens());
        assert_eq!(atoms.len(), 2);
        assert_eq!(atoms[0].id, "button");
        assert_eq!(atoms[0].variants.len(), 3);
        assert_eq!(atoms[1].id, "heading");
        assert_eq!(atoms[1].variants.len(), 3);
    }

    #[test]
    fn test_button_css_uses_palette_and_tokens() {
        let tokens = tokens();
        let css = button_css(&tokens);
        assert!(css.contains(&tokens.colors.primary));
        assert!(css.contains(&tokens.border_radius.md));
        assert!(css.contains(&darken_color(&tokens.colors.primary, 10.0)));
    }
}

//! Design-token assembly: palette, typography, spacing, radii and shadows.

use tracing::debug;

use crate::color::{ensure_accessibility, generate_industry_palette};
use crate::models::{DesignTokens, ProjectRequirements, SpacingScale, StyleScale};
use crate::typography::generate_typography_system;

/// Default modular-scale ratio (Major Third).
pub const DEFAULT_SCALE_RATIO: f64 = 1.25;

/// The fixed 8pt spacing grid, identical for every style.
#[must_use]
pub fn spacing_tokens() -> SpacingScale {
    SpacingScale {
        xs: "0.5rem".to_string(),
        sm: "1rem".to_string(),
        md: "1.5rem".to_string(),
        lg: "2rem".to_string(),
        xl: "3rem".to_string(),
        xl2: "4rem".to_string(),
        xl3: "6rem".to_string(),
        xl4: "8rem".to_string(),
    }
}

/// Border-radius steps for a style direction, modern when unknown.
#[must_use]
pub fn radius_tokens(style: &str) -> StyleScale {
    let (sm, md, lg, xl) = match style {
        "minimal" => ("0.25rem", "0.375rem", "0.5rem", "0.75rem"),
        "bold" => ("0.5rem", "0.75rem", "1rem", "1.5rem"),
        "classic" => ("0.25rem", "0.5rem", "0.75rem", "1rem"),
        "playful" => ("0.75rem", "1rem", "1.5rem", "2rem"),
        // "modern" and anything unrecognized
        _ => ("0.375rem", "0.5rem", "0.75rem", "1rem"),
    };
    StyleScale {
        sm: sm.to_string(),
        md: md.to_string(),
        lg: lg.to_string(),
        xl: xl.to_string(),
    }
}

/// Box-shadow steps for a style direction.
///
/// Only modern, minimal and bold have dedicated shadow sets; every other
/// style uses the modern set.
#[must_use]
pub fn shadow_tokens(style: &str) -> StyleScale {
    let (sm, md, lg, xl) = match style {
        "minimal" => (
            "0 1px 2px 0 rgb(0 0 0 / 0.02)",
            "0 2px 4px -1px rgb(0 0 0 / 0.05)",
            "0 4px 6px -1px rgb(0 0 0 / 0.05)",
            "0 8px 10px -2px rgb(0 0 0 / 0.05)",
        ),
        "bold" => (
            "0 2px 4px 0 rgb(0 0 0 / 0.1)",
            "0 8px 12px -2px rgb(0 0 0 / 0.15)",
            "0 16px 24px -4px rgb(0 0 0 / 0.15)",
            "0 32px 40px -8px rgb(0 0 0 / 0.15)",
        ),
        _ => (
            "0 1px 2px 0 rgb(0 0 0 / 0.05)",
            "0 4px 6px -1px rgb(0 0 0 / 0.1)",
            "0 10px 15px -3px rgb(0 0 0 / 0.1)",
            "0 20px 25px -5px rgb(0 0 0 / 0.1)",
        ),
    };
    StyleScale {
        sm: sm.to_string(),
        md: md.to_string(),
        lg: lg.to_string(),
        xl: xl.to_string(),
    }
}

/// Assembles the complete token set for one brief.
///
/// The palette goes through the accessibility pass before it is handed to
/// any component generator.
#[must_use]
pub fn build_design_tokens(requirements: &ProjectRequirements) -> DesignTokens {
    let palette = generate_industry_palette(
        &requirements.industry,
        requirements.color_preferences.base_color(),
        &requirements.style_direction,
    );
    let colors = ensure_accessibility(&palette);
    let typography = generate_typography_system(
        &requirements.typography_style,
        &requirements.industry,
        DEFAULT_SCALE_RATIO,
    );
    debug!(
        primary = %colors.primary,
        heading_font = %typography.font_pairings.heading,
        "design tokens assembled"
    );

    DesignTokens {
        colors,
        typography,
        spacing: spacing_tokens(),
        border_radius: radius_tokens(&requirements.style_direction),
        shadows: shadow_tokens(&requirements.style_direction),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spacing_is_style_independent() {
        let spacing = spacing_tokens();
        assert_eq!(spacing.xs, "0.5rem");
        assert_eq!(spacing.xl4, "8rem");
    }

    #[test]
    fn test_radius_varies_by_style() {
        assert_eq!(radius_tokens("playful").xl, "2rem");
        assert_eq!(radius_tokens("minimal").sm, "0.25rem");
        assert_eq!(radius_tokens("unknown"), radius_tokens("modern"));
    }

    #[test]
    fn test_shadows_fall_back_to_modern() {
        // classic and playful have no shadow set of their own
        assert_eq!(shadow_tokens("classic"), shadow_tokens("modern"));
        assert_eq!(shadow_tokens("playful"), shadow_tokens("modern"));
        assert_ne!(shadow_tokens("bold"), shadow_tokens("modern"));
    }

    #[test]
    fn test_tokens_reflect_style_direction() {
        let mut req = ProjectRequirements::new("landing", "tech").with_defaults();
        req.style_direction = "bold".to_string();
        let tokens = build_design_tokens(&req);
        assert_eq!(tokens.border_radius, radius_tokens("bold"));
        assert_eq!(tokens.shadows, shadow_tokens("bold"));
    }

    #[test]
    fn test_palette_in_tokens_is_accessible() {
        let req = ProjectRequirements::new("landing", "finance").with_defaults();
        let tokens = build_design_tokens(&req);
        let repass = ensure_accessibility(&tokens.colors);
        assert_eq!(repass, tokens.colors);
    }
}

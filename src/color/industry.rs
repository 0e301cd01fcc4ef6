//! Industry-driven palette synthesis and the accessibility pass.

use tracing::warn;

use super::{analogous, complementary, contrast_ratio, hex_to_hsl, hsl_to_hex, Hsl};
use crate::models::{ColorPalette, SemanticColors};

/// Base hue/saturation/lightness per industry (color-psychology table).
///
/// Total lookup: unknown industries resolve to the default entry.
#[must_use]
pub fn industry_base(industry: &str) -> Hsl {
    match industry {
        "tech" => Hsl::new(220.0, 70.0, 50.0), // blue - trust, innovation
        "healthcare" => Hsl::new(200.0, 60.0, 55.0), // light blue - health, cleanliness
        "finance" => Hsl::new(240.0, 45.0, 35.0), // dark blue - trust, stability
        "creative" => Hsl::new(280.0, 80.0, 60.0), // purple - creativity
        "ecommerce" => Hsl::new(350.0, 65.0, 55.0), // red-pink - energy, action
        "education" => Hsl::new(25.0, 70.0, 55.0), // orange - enthusiasm, learning
        "corporate" => Hsl::new(210.0, 40.0, 40.0), // professional blue
        "food" => Hsl::new(30.0, 85.0, 60.0),  // orange - appetite, warmth
        "real_estate" => Hsl::new(120.0, 30.0, 45.0), // green - growth, stability
        _ => Hsl::new(220.0, 60.0, 50.0),      // default blue
    }
}

/// Saturation/lightness delta applied for a style direction.
///
/// Total lookup: unknown styles resolve to the modern (zero) delta.
#[must_use]
pub fn style_adjustment(style: &str) -> (f64, f64) {
    match style {
        "minimal" => (-20.0, 10.0),
        "bold" => (20.0, -10.0),
        "classic" => (-10.0, -5.0),
        "playful" => (30.0, 15.0),
        // "modern" and anything unrecognized
        _ => (0.0, 0.0),
    }
}

/// Synthesizes an industry-appropriate palette.
///
/// The base hue comes from the industry table unless the caller supplies a
/// base color; a malformed base color is logged and ignored rather than
/// failing the run. The style delta is applied to the base, then secondary
/// (complementary), accent (analogous) and a desaturated neutral are derived.
/// Semantic colors sit at fixed hues. Deterministic for identical inputs.
#[must_use]
pub fn generate_industry_palette(
    industry: &str,
    base_color: Option<&str>,
    style: &str,
) -> ColorPalette {
    let base = match base_color {
        Some(hex) => match hex_to_hsl(hex) {
            Ok(hsl) => hsl,
            Err(err) => {
                warn!("ignoring invalid base color '{hex}': {err}");
                industry_base(industry)
            }
        },
        None => industry_base(industry),
    };

    let (delta_s, delta_l) = style_adjustment(style);
    let adjusted = Hsl {
        h: base.h,
        s: (base.s + delta_s).clamp(10.0, 100.0),
        l: (base.l + delta_l).clamp(10.0, 90.0),
    };

    let complementary = complementary(adjusted);
    let analogous = analogous(adjusted);

    ColorPalette {
        primary: hsl_to_hex(adjusted),
        secondary: hsl_to_hex(complementary.colors[1]),
        accent: hsl_to_hex(analogous.colors[1]),
        neutral: hsl_to_hex(Hsl::new(adjusted.h, 10.0, 70.0)),
        semantic: SemanticColors {
            success: hsl_to_hex(Hsl::new(120.0, 50.0, 50.0)),
            warning: hsl_to_hex(Hsl::new(45.0, 85.0, 60.0)),
            error: hsl_to_hex(Hsl::new(0.0, 70.0, 55.0)),
            info: hsl_to_hex(Hsl::new(200.0, 60.0, 60.0)),
        },
    }
}

/// Minimum WCAG AA contrast for normal text.
const MIN_CONTRAST: f64 = 4.5;

/// Single corrective lightness shift for a color that fails contrast against
/// both white and black: darken by 20 points when light, lighten by 20 when
/// dark, clamped to 20..80. The result is not re-tested; a mid-lightness
/// input can remain below 4.5:1 after the shift, and that output is part of
/// the contract.
fn ensure_contrast(color: &str) -> String {
    let passes = contrast_ratio(color, "#ffffff")
        .and_then(|white| contrast_ratio(color, "#000000").map(|black| white.max(black)))
        .map(|best| best >= MIN_CONTRAST);

    match passes {
        Ok(true) | Err(_) => color.to_string(),
        Ok(false) => match hex_to_hsl(color) {
            Ok(hsl) => {
                let l = if hsl.l > 50.0 {
                    (hsl.l - 20.0).max(20.0)
                } else {
                    (hsl.l + 20.0).min(80.0)
                };
                hsl_to_hex(Hsl { l, ..hsl })
            }
            Err(_) => color.to_string(),
        },
    }
}

/// Accessibility pass over a generated palette.
///
/// Applies [`ensure_contrast`]'s one-shot adjustment to primary, secondary,
/// accent and the four semantic colors. The neutral is a background tone and
/// is left untouched.
#[must_use]
pub fn ensure_accessibility(palette: &ColorPalette) -> ColorPalette {
    ColorPalette {
        primary: ensure_contrast(&palette.primary),
        secondary: ensure_contrast(&palette.secondary),
        accent: ensure_contrast(&palette.accent),
        neutral: palette.neutral.clone(),
        semantic: SemanticColors {
            success: ensure_contrast(&palette.semantic.success),
            warning: ensure_contrast(&palette.semantic.warning),
            error: ensure_contrast(&palette.semantic.error),
            info: ensure_contrast(&palette.semantic.info),
        },
    }
}

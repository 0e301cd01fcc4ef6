//! Typography engine: pairing selection, modular scale and line heights.

pub mod pairings;

pub use pairings::{catalog, FontFace, FontPairing, GoogleFontsSpec};

use crate::models::{FontPair, FontWeights, TypeScale, TypographySystem};

/// A named modular-scale preset.
#[derive(Debug, Clone, Copy)]
pub struct ScalePreset {
    /// Preset name ("Major Third", ...).
    pub name: &'static str,
    /// Geometric ratio between steps.
    pub ratio: f64,
    /// Base size in px.
    pub base_size: f64,
    /// What the preset is good for.
    pub description: &'static str,
}

/// The catalog of modular-scale ratios offered to callers.
#[must_use]
pub const fn scale_presets() -> [ScalePreset; 6] {
    [
        ScalePreset {
            name: "Minor Second",
            ratio: 1.067,
            base_size: 16.0,
            description: "Subtle, close harmony - good for text-heavy designs",
        },
        ScalePreset {
            name: "Major Second",
            ratio: 1.125,
            base_size: 16.0,
            description: "Balanced and versatile - most common choice",
        },
        ScalePreset {
            name: "Minor Third",
            ratio: 1.2,
            base_size: 16.0,
            description: "Gentle contrast - readable and pleasant",
        },
        ScalePreset {
            name: "Major Third",
            ratio: 1.25,
            base_size: 16.0,
            description: "Strong hierarchy - good for marketing sites",
        },
        ScalePreset {
            name: "Perfect Fourth",
            ratio: 1.333,
            base_size: 16.0,
            description: "Clear distinction - excellent for landing pages",
        },
        ScalePreset {
            name: "Golden Ratio",
            ratio: 1.618,
            base_size: 16.0,
            description: "Dramatic contrast - bold and attention-grabbing",
        },
    ]
}

/// Personality traits preferred for a typography style.
///
/// Total lookup: unknown styles resolve to the professional trait set.
#[must_use]
pub fn style_traits(style: &str) -> &'static [&'static str] {
    match style {
        "creative" => &["creative", "artistic", "unique", "expressive"],
        "technical" => &["tech", "modern", "clean", "minimal"],
        "friendly" => &["warm", "friendly", "approachable", "human"],
        // "professional" and anything unrecognized
        _ => &["modern", "clean", "professional", "corporate"],
    }
}

/// Additional traits contributed by the industry, empty when unknown.
#[must_use]
pub fn industry_traits(industry: &str) -> &'static [&'static str] {
    match industry {
        "tech" => &["tech", "startup", "modern", "innovative"],
        "finance" => &["corporate", "reliable", "professional", "clean"],
        "healthcare" => &["friendly", "approachable", "clean", "reliable"],
        "creative" => &["creative", "artistic", "unique", "expressive"],
        "education" => &["friendly", "approachable", "warm", "accessible"],
        "ecommerce" => &["modern", "clean", "friendly", "accessible"],
        _ => &[],
    }
}

/// Selects the best font pairing for a style/industry combination.
///
/// Each catalog entry is scored by counting its personality tags that appear
/// in the union of style and industry traits. The catalog is walked in its
/// fixed order and only a strictly higher score displaces the current best,
/// so ties resolve to the earliest entry.
#[must_use]
pub fn select_font_pairing(style: &str, industry: &str) -> &'static FontPairing {
    let style_traits = style_traits(style);
    let industry_traits = industry_traits(industry);

    let pairings = catalog();
    let mut best = &pairings[0];
    let mut best_score = 0;

    for pairing in pairings {
        let score = pairing
            .personality
            .iter()
            .filter(|tag| {
                style_traits.contains(&tag.as_str()) || industry_traits.contains(&tag.as_str())
            })
            .count();
        if score > best_score {
            best_score = score;
            best = pairing;
        }
    }

    best
}

/// Generates the ten-step modular scale for a base size (px) and ratio.
///
/// Step n is `base * ratio^n`, exponents -2..=+7, rendered in rem at three
/// decimal places. `base` is exactly `base_size / 16` rem.
#[must_use]
pub fn modular_scale(base_size: f64, ratio: f64) -> TypeScale {
    let step = |n: i32| format!("{:.3}rem", base_size * ratio.powi(n) / 16.0);
    TypeScale {
        xs: step(-2),
        sm: step(-1),
        base: step(0),
        lg: step(1),
        xl: step(2),
        xl2: step(3),
        xl3: step(4),
        xl4: step(5),
        xl5: step(6),
        xl6: step(7),
    }
}

/// Banded line-height heuristic, a pure function of the font size in rem.
#[must_use]
pub fn line_height_for(font_size_rem: f64) -> &'static str {
    if font_size_rem <= 1.125 {
        "1.5" // body text
    } else if font_size_rem <= 1.5 {
        "1.4" // large body / small headings
    } else if font_size_rem <= 2.25 {
        "1.3" // medium headings
    } else {
        "1.2" // large headings
    }
}

/// Parses the leading float out of a rem string ("1.250rem" -> 1.25).
#[must_use]
pub fn rem_value(size: &str) -> f64 {
    size.trim_end_matches("rem").parse().unwrap_or(0.0)
}

/// Composes a complete typography system for a style/industry combination.
///
/// The weight map is constant regardless of inputs.
#[must_use]
pub fn generate_typography_system(style: &str, industry: &str, ratio: f64) -> TypographySystem {
    let pairing = select_font_pairing(style, industry);
    TypographySystem {
        font_pairings: FontPair {
            heading: pairing.heading.family.clone(),
            body: pairing.body.family.clone(),
        },
        scale: modular_scale(16.0, ratio),
        weights: FontWeights::default(),
    }
}

/// Google Fonts css2 URL for a pairing's heading and body specs.
#[must_use]
pub fn google_fonts_url(pairing: &FontPairing) -> String {
    format!(
        "https://fonts.googleapis.com/css2?family={}&family={}&display=swap",
        pairing.google_fonts.heading, pairing.google_fonts.body
    )
}

/// Advisory result of the typography accessibility check.
#[derive(Debug, Clone, Default)]
pub struct TypographyAudit {
    /// True when no issues were found.
    pub valid: bool,
    /// Detected problems.
    pub issues: Vec<String>,
    /// Matching remediation hints.
    pub suggestions: Vec<String>,
}

/// Checks a typography system against minimum legibility thresholds.
///
/// Advisory only; generation never blocks on the outcome.
#[must_use]
pub fn validate_accessibility(system: &TypographySystem) -> TypographyAudit {
    let mut issues = Vec::new();
    let mut suggestions = Vec::new();

    if rem_value(&system.scale.base) < 1.0 {
        issues.push("Base font size is below 16px, which may be difficult to read".to_string());
        suggestions.push("Consider increasing base font size to at least 1rem (16px)".to_string());
    }

    if rem_value(&system.scale.sm) < 0.875 {
        issues.push("Small text is below 14px, which may fail accessibility standards".to_string());
        suggestions.push("Increase small text size to at least 0.875rem (14px)".to_string());
    }

    if system.weights.normal < 400 {
        issues.push("Normal weight is below 400, which may appear too light".to_string());
        suggestions.push("Set normal weight to at least 400 for better readability".to_string());
    }

    TypographyAudit {
        valid: issues.is_empty(),
        issues,
        suggestions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_pairing_deterministic() {
        let first = select_font_pairing("technical", "tech");
        let second = select_font_pairing("technical", "tech");
        assert_eq!(first.name, second.name);
        // technical traits {tech, modern, clean, minimal} + tech industry
        // {tech, startup, modern, innovative}: Tech Startup scores 4.
        assert_eq!(first.name, "Tech Startup");
    }

    #[test]
    fn test_select_pairing_tie_breaks_to_catalog_order() {
        // With no industry contribution, "professional" traits score
        // Modern Professional 3; no later entry beats it.
        let pairing = select_font_pairing("professional", "unknown_industry");
        assert_eq!(pairing.name, "Modern Professional");
    }

    #[test]
    fn test_select_pairing_unknown_style_falls_back() {
        let fallback = select_font_pairing("no_such_style", "finance");
        let professional = select_font_pairing("professional", "finance");
        assert_eq!(fallback.name, professional.name);
    }

    #[test]
    fn test_modular_scale_strictly_increasing() {
        for ratio in [1.067, 1.125, 1.25, 1.618] {
            let scale = modular_scale(16.0, ratio);
            let values: Vec<f64> = scale.entries().iter().map(|(_, v)| rem_value(v)).collect();
            for pair in values.windows(2) {
                assert!(pair[0] < pair[1], "scale not increasing at ratio {ratio}");
            }
        }
    }

    #[test]
    fn test_modular_scale_base_step() {
        let scale = modular_scale(16.0, 1.25);
        assert_eq!(scale.base, "1.000rem");
        assert_eq!(scale.lg, "1.250rem");
        assert_eq!(scale.xs, "0.640rem");
    }

    #[test]
    fn test_line_height_bands() {
        assert_eq!(line_height_for(1.0), "1.5");
        assert_eq!(line_height_for(1.125), "1.5");
        assert_eq!(line_height_for(1.25), "1.4");
        assert_eq!(line_height_for(2.0), "1.3");
        assert_eq!(line_height_for(3.0), "1.2");
    }

    #[test]
    fn test_typography_system_weights_constant() {
        let a = generate_typography_system("creative", "creative", 1.25);
        let b = generate_typography_system("technical", "finance", 1.333);
        assert_eq!(a.weights, b.weights);
        assert_eq!(a.weights.normal, 400);
    }

    #[test]
    fn test_google_fonts_url_shape() {
        let pairing = select_font_pairing("friendly", "education");
        let url = google_fonts_url(pairing);
        assert!(url.starts_with("https://fonts.googleapis.com/css2?family="));
        assert!(url.ends_with("&display=swap"));
        assert!(url.contains("&family="));
    }

    #[test]
    fn test_validate_accessibility_passes_major_second_scale() {
        // sm at ratio 1.125 is 0.889rem, above the 14px floor
        let system = generate_typography_system("professional", "tech", 1.125);
        let audit = validate_accessibility(&system);
        assert!(audit.valid, "issues: {:?}", audit.issues);
    }

    #[test]
    fn test_validate_accessibility_flags_major_third_small_step() {
        // sm at ratio 1.25 is 0.800rem, under the 14px floor
        let system = generate_typography_system("professional", "tech", 1.25);
        let audit = validate_accessibility(&system);
        assert!(!audit.valid);
        assert_eq!(audit.issues.len(), 1);
        assert!(audit.issues[0].contains("Small text"));
    }

    #[test]
    fn test_validate_accessibility_flags_small_base() {
        let mut system = generate_typography_system("professional", "tech", 1.25);
        system.scale.base = "0.875rem".to_string();
        system.scale.sm = "0.700rem".to_string();
        let audit = validate_accessibility(&system);
        assert!(!audit.valid);
        assert_eq!(audit.issues.len(), 2);
        assert_eq!(audit.suggestions.len(), 2);
    }

    #[test]
    fn test_scale_presets_cover_standard_ratios() {
        let presets = scale_presets();
        assert_eq!(presets.len(), 6);
        assert!((presets[3].ratio - 1.25).abs() < f64::EPSILON);
        assert_eq!(presets[5].name, "Golden Ratio");
    }
}

//! Font-pairing catalog, embedded as JSON data.
//!
//! The catalog order is significant: pairing selection iterates it front to
//! back and breaks score ties in favor of the earliest entry.

use anyhow::Result;
use serde::Deserialize;
use std::sync::OnceLock;

/// One half of a pairing (heading or body).
#[derive(Debug, Clone, Deserialize)]
pub struct FontFace {
    /// CSS font-family name.
    pub family: String,
    /// Available numeric weights.
    pub weights: Vec<u16>,
    /// Font category ("serif", "sans-serif", "display", "monospace").
    pub category: String,
}

/// Google Fonts request specs for a pairing.
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleFontsSpec {
    /// Heading family spec, e.g. "Inter:wght@400;500;600;700".
    pub heading: String,
    /// Body family spec.
    pub body: String,
}

/// A curated heading/body font pairing.
#[derive(Debug, Clone, Deserialize)]
pub struct FontPairing {
    /// Display name ("Modern Professional", ...).
    pub name: String,
    /// Heading face.
    pub heading: FontFace,
    /// Body face.
    pub body: FontFace,
    /// Short description.
    pub description: String,
    /// Personality tags matched against style/industry traits.
    pub personality: Vec<String>,
    /// Google Fonts specs for the `<link>` tag.
    pub google_fonts: GoogleFontsSpec,
}

#[derive(Debug, Deserialize)]
struct Catalog {
    pairings: Vec<FontPairing>,
}

fn load_catalog() -> Result<Vec<FontPairing>> {
    let json_data = include_str!("data/font_pairings.json");
    let catalog: Catalog = serde_json::from_str(json_data)?;
    Ok(catalog.pairings)
}

/// The fixed eight-entry pairing catalog, loaded once.
#[must_use]
pub fn catalog() -> &'static [FontPairing] {
    static CATALOG: OnceLock<Vec<FontPairing>> = OnceLock::new();
    CATALOG.get_or_init(|| load_catalog().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_loads_eight_pairings() {
        assert_eq!(catalog().len(), 8);
    }

    #[test]
    fn test_catalog_order_is_stable() {
        let names: Vec<&str> = catalog().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "Modern Professional",
                "Editorial Classic",
                "Tech Startup",
                "Creative Studio",
                "Corporate Reliable",
                "Minimal Geometric",
                "Warm Humanist",
                "Bold Statement",
            ]
        );
    }

    #[test]
    fn test_every_pairing_has_tags_and_fonts() {
        for pairing in catalog() {
            assert!(!pairing.personality.is_empty(), "{} has no tags", pairing.name);
            assert!(
                pairing.google_fonts.heading.starts_with(&pairing.heading.family),
                "{} google spec does not match family",
                pairing.name
            );
            assert!(!pairing.body.weights.is_empty());
        }
    }
}

//! Color palette model shared between the color engine and the generator.

use serde::{Deserialize, Serialize};

/// Fixed semantic colors carried by every palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemanticColors {
    /// Positive/confirmation color (green band).
    pub success: String,
    /// Caution color (amber band).
    pub warning: String,
    /// Failure color (red band).
    pub error: String,
    /// Informational color (blue band).
    pub info: String,
}

/// A complete generated color palette.
///
/// All values are `#rrggbb` hex strings. After the accessibility pass every
/// role except `neutral` satisfies a 4.5:1 contrast against at least one of
/// pure white or pure black, subject to the one-shot adjustment limitation
/// documented on `ensure_accessibility`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPalette {
    /// Main brand color, derived from the industry base hue.
    pub primary: String,
    /// Complementary hue of the primary.
    pub secondary: String,
    /// Analogous hue of the primary.
    pub accent: String,
    /// Desaturated light tone for backgrounds and borders.
    pub neutral: String,
    /// Fixed-hue semantic sub-map.
    pub semantic: SemanticColors,
}

impl ColorPalette {
    /// Iterates every hex value in the palette, semantic colors included.
    pub fn all_colors(&self) -> impl Iterator<Item = &str> {
        [
            self.primary.as_str(),
            self.secondary.as_str(),
            self.accent.as_str(),
            self.neutral.as_str(),
            self.semantic.success.as_str(),
            self.semantic.warning.as_str(),
            self.semantic.error.as_str(),
            self.semantic.info.as_str(),
        ]
        .into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ColorPalette {
        ColorPalette {
            primary: "#2563eb".to_string(),
            secondary: "#eb7725".to_string(),
            accent: "#25c4eb".to_string(),
            neutral: "#adb3bd".to_string(),
            semantic: SemanticColors {
                success: "#40bf40".to_string(),
                warning: "#f2c230".to_string(),
                error: "#db3b3b".to_string(),
                info: "#5cb8db".to_string(),
            },
        }
    }

    #[test]
    fn test_all_colors_yields_eight_values() {
        assert_eq!(sample().all_colors().count(), 8);
    }

    #[test]
    fn test_palette_round_trips_through_json() {
        let palette = sample();
        let json = serde_json::to_string(&palette).unwrap();
        let parsed: ColorPalette = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, palette);
    }
}

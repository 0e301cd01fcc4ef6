//! Aggregated design tokens: the style primitives shared by every component.

use serde::{Deserialize, Serialize};

use super::{ColorPalette, TypographySystem};

/// Fixed eight-step spacing scale on an 8pt grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpacingScale {
    /// 0.5rem / 8px
    pub xs: String,
    /// 1rem / 16px
    pub sm: String,
    /// 1.5rem / 24px
    pub md: String,
    /// 2rem / 32px
    pub lg: String,
    /// 3rem / 48px
    pub xl: String,
    /// 4rem / 64px
    #[serde(rename = "2xl")]
    pub xl2: String,
    /// 6rem / 96px
    #[serde(rename = "3xl")]
    pub xl3: String,
    /// 8rem / 128px
    #[serde(rename = "4xl")]
    pub xl4: String,
}

impl SpacingScale {
    /// Steps paired with their key names, ascending.
    #[must_use]
    pub fn entries(&self) -> [(&'static str, &str); 8] {
        [
            ("xs", self.xs.as_str()),
            ("sm", self.sm.as_str()),
            ("md", self.md.as_str()),
            ("lg", self.lg.as_str()),
            ("xl", self.xl.as_str()),
            ("2xl", self.xl2.as_str()),
            ("3xl", self.xl3.as_str()),
            ("4xl", self.xl4.as_str()),
        ]
    }
}

/// Four-step scale used for both border radii and shadows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleScale {
    /// Smallest step.
    pub sm: String,
    /// Default step.
    pub md: String,
    /// Large step.
    pub lg: String,
    /// Largest step.
    pub xl: String,
}

impl StyleScale {
    /// Steps paired with their key names, ascending.
    #[must_use]
    pub fn entries(&self) -> [(&'static str, &str); 4] {
        [
            ("sm", self.sm.as_str()),
            ("md", self.md.as_str()),
            ("lg", self.lg.as_str()),
            ("xl", self.xl.as_str()),
        ]
    }
}

/// All design tokens for one generation run.
///
/// Created once by the generator, never mutated afterwards; every generated
/// component reads from the same instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignTokens {
    /// Accessible color palette.
    pub colors: ColorPalette,
    /// Font pair, scale and weights.
    pub typography: TypographySystem,
    /// 8pt spacing grid.
    pub spacing: SpacingScale,
    /// Style-dependent border radii.
    pub border_radius: StyleScale,
    /// Style-dependent box shadows.
    pub shadows: StyleScale,
}

//! Typography system model: font pair, modular scale and weight map.

use serde::{Deserialize, Serialize};

/// Heading/body font family pair selected from the pairing catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontPair {
    /// Family used for headings.
    pub heading: String,
    /// Family used for body text.
    pub body: String,
}

/// Ten-step modular type scale, each step a rem string ("1.250rem").
///
/// Steps map to ratio exponents -2..=+7; `base` is exponent 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeScale {
    /// Exponent -2.
    pub xs: String,
    /// Exponent -1.
    pub sm: String,
    /// Exponent 0, always equals the base size.
    pub base: String,
    /// Exponent 1.
    pub lg: String,
    /// Exponent 2.
    pub xl: String,
    /// Exponent 3.
    #[serde(rename = "2xl")]
    pub xl2: String,
    /// Exponent 4.
    #[serde(rename = "3xl")]
    pub xl3: String,
    /// Exponent 5.
    #[serde(rename = "4xl")]
    pub xl4: String,
    /// Exponent 6.
    #[serde(rename = "5xl")]
    pub xl5: String,
    /// Exponent 7.
    #[serde(rename = "6xl")]
    pub xl6: String,
}

impl TypeScale {
    /// Steps in ascending order paired with their fixed key names.
    #[must_use]
    pub fn entries(&self) -> [(&'static str, &str); 10] {
        [
            ("xs", self.xs.as_str()),
            ("sm", self.sm.as_str()),
            ("base", self.base.as_str()),
            ("lg", self.lg.as_str()),
            ("xl", self.xl.as_str()),
            ("2xl", self.xl2.as_str()),
            ("3xl", self.xl3.as_str()),
            ("4xl", self.xl4.as_str()),
            ("5xl", self.xl5.as_str()),
            ("6xl", self.xl6.as_str()),
        ]
    }
}

/// Fixed numeric weight map, constant regardless of inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontWeights {
    /// 300
    pub light: u16,
    /// 400
    pub normal: u16,
    /// 500
    pub medium: u16,
    /// 600
    pub semibold: u16,
    /// 700
    pub bold: u16,
}

impl Default for FontWeights {
    fn default() -> Self {
        Self {
            light: 300,
            normal: 400,
            medium: 500,
            semibold: 600,
            bold: 700,
        }
    }
}

impl FontWeights {
    /// Weights paired with their key names, ascending.
    #[must_use]
    pub const fn entries(&self) -> [(&'static str, u16); 5] {
        [
            ("light", self.light),
            ("normal", self.normal),
            ("medium", self.medium),
            ("semibold", self.semibold),
            ("bold", self.bold),
        ]
    }
}

/// Complete typography system produced by the typography engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypographySystem {
    /// Selected heading/body families.
    pub font_pairings: FontPair,
    /// Modular scale.
    pub scale: TypeScale,
    /// Fixed weight map.
    pub weights: FontWeights,
}

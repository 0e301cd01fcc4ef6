//! Color-theory engine: HSL conversion, harmonies, contrast and palette synthesis.
//!
//! Everything in this module is a pure function of its inputs. Hex strings
//! are `#rrggbb`; HSL values use degrees (0-360) for hue and percent (0-100)
//! for saturation and lightness, quantized to whole units on conversion from
//! hex so round-trips stay within one 8-bit unit per channel.

// Standard color-space algorithms use single-char channel names
#![allow(clippy::many_single_char_names)]

pub mod harmony;
pub mod industry;

pub use harmony::{analogous, complementary, monochromatic, triadic, Harmony};
pub use industry::{ensure_accessibility, generate_industry_palette};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A color in HSL space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    /// Hue in degrees (0-360).
    pub h: f64,
    /// Saturation in percent (0-100).
    pub s: f64,
    /// Lightness in percent (0-100).
    pub l: f64,
}

impl Hsl {
    /// Creates an HSL color from raw components.
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({:.0}, {:.0}%, {:.0}%)", self.h, self.s, self.l)
    }
}

/// Parses a `#rrggbb` hex string into 8-bit channels.
///
/// Accepts an optional leading `#` and surrounding whitespace.
///
/// # Errors
///
/// Returns an error if the string is not six hex digits.
pub fn parse_hex(hex: &str) -> Result<(u8, u8, u8)> {
    let hex = hex.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);

    if hex.len() != 6 {
        anyhow::bail!("Invalid hex color format '{hex}'. Expected 6 hex digits (rrggbb)");
    }

    let r = u8::from_str_radix(&hex[0..2], 16)
        .context(format!("Invalid red channel in hex color '{hex}'"))?;
    let g = u8::from_str_radix(&hex[2..4], 16)
        .context(format!("Invalid green channel in hex color '{hex}'"))?;
    let b = u8::from_str_radix(&hex[4..6], 16)
        .context(format!("Invalid blue channel in hex color '{hex}'"))?;

    Ok((r, g, b))
}

/// Converts a hex color to HSL.
///
/// Components are rounded to whole degrees/percent, matching the
/// quantization the rest of the pipeline assumes.
///
/// # Errors
///
/// Returns an error for malformed hex input.
pub fn hex_to_hsl(hex: &str) -> Result<Hsl> {
    let (r, g, b) = parse_hex(hex)?;
    let r = f64::from(r) / 255.0;
    let g = f64::from(g) / 255.0;
    let b = f64::from(b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    let mut h = 0.0;
    let mut s = 0.0;

    if max != min {
        let d = max - min;
        s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };

        h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        h /= 6.0;
    }

    Ok(Hsl {
        h: (h * 360.0).round(),
        s: (s * 100.0).round(),
        l: (l * 100.0).round(),
    })
}

/// Converts an HSL color to a lowercase `#rrggbb` hex string.
#[must_use]
pub fn hsl_to_hex(color: Hsl) -> String {
    let h = color.h / 360.0;
    let s = color.s / 100.0;
    let l = color.l / 100.0;

    let (r, g, b) = if s == 0.0 {
        (l, l, l)
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        (
            hue_to_rgb(p, q, h + 1.0 / 3.0),
            hue_to_rgb(p, q, h),
            hue_to_rgb(p, q, h - 1.0 / 3.0),
        )
    };

    format!(
        "#{:02x}{:02x}{:02x}",
        (r * 255.0).round() as u8,
        (g * 255.0).round() as u8,
        (b * 255.0).round() as u8
    )
}

fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let mut t = t;
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

/// WCAG relative luminance of a hex color (0.0 for black, 1.0 for white).
///
/// # Errors
///
/// Returns an error for malformed hex input.
pub fn relative_luminance(hex: &str) -> Result<f64> {
    let (r, g, b) = parse_hex(hex)?;
    let linearize = |c: u8| {
        let c = f64::from(c) / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    Ok(0.2126 * linearize(r) + 0.7152 * linearize(g) + 0.0722 * linearize(b))
}

/// WCAG 2.0 contrast ratio between two hex colors.
///
/// Symmetric in its arguments; ranges from 1.0 (identical) to 21.0
/// (black against white).
///
/// # Errors
///
/// Returns an error if either color is malformed.
pub fn contrast_ratio(color1: &str, color2: &str) -> Result<f64> {
    let lum1 = relative_luminance(color1)?;
    let lum2 = relative_luminance(color2)?;
    let brightest = lum1.max(lum2);
    let darkest = lum1.min(lum2);
    Ok((brightest + 0.05) / (darkest + 0.05))
}

//! Hue-wheel harmony generation.
//!
//! All harmonies are deterministic angular offsets; there is no randomness
//! anywhere in this module.

use serde::{Deserialize, Serialize};

use super::Hsl;

/// A set of colors related by a fixed hue-wheel relationship.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Harmony {
    /// Harmony name ("Complementary", "Triadic", "Analogous").
    pub name: String,
    /// Member colors, base color first.
    pub colors: Vec<Hsl>,
    /// Short description of the visual effect.
    pub description: String,
}

/// Complementary harmony: the base plus its 180-degree opposite.
#[must_use]
pub fn complementary(base: Hsl) -> Harmony {
    let opposite = Hsl {
        h: (base.h + 180.0) % 360.0,
        s: base.s,
        l: base.l,
    };
    Harmony {
        name: "Complementary".to_string(),
        colors: vec![base, opposite],
        description:
            "Colors opposite on the color wheel, creating high contrast and vibrant look"
                .to_string(),
    }
}

/// Triadic harmony: three colors evenly spaced at 120-degree intervals.
#[must_use]
pub fn triadic(base: Hsl) -> Harmony {
    let second = Hsl {
        h: (base.h + 120.0) % 360.0,
        s: base.s,
        l: base.l,
    };
    let third = Hsl {
        h: (base.h + 240.0) % 360.0,
        s: base.s,
        l: base.l,
    };
    Harmony {
        name: "Triadic".to_string(),
        colors: vec![base, second, third],
        description:
            "Three colors evenly spaced on the color wheel, offering vibrant yet balanced contrast"
                .to_string(),
    }
}

/// Analogous harmony: the base plus its +/-30-degree neighbors.
///
/// Neighbors are desaturated by 10 points with a floor of 20.
#[must_use]
pub fn analogous(base: Hsl) -> Harmony {
    let desaturated = (base.s - 10.0).max(20.0);
    let second = Hsl {
        h: (base.h + 30.0) % 360.0,
        s: desaturated,
        l: base.l,
    };
    let third = Hsl {
        h: (base.h - 30.0 + 360.0) % 360.0,
        s: desaturated,
        l: base.l,
    };
    Harmony {
        name: "Analogous".to_string(),
        colors: vec![base, second, third],
        description: "Colors adjacent on the color wheel, creating serene and comfortable designs"
            .to_string(),
    }
}

/// Monochromatic variations: five lightness steps around the base.
#[must_use]
pub fn monochromatic(base: Hsl) -> Vec<Hsl> {
    vec![
        Hsl { l: (base.l + 40.0).min(95.0), ..base },
        Hsl { l: (base.l + 20.0).min(90.0), ..base },
        base,
        Hsl { l: (base.l - 20.0).max(10.0), ..base },
        Hsl { l: (base.l - 40.0).max(5.0), ..base },
    ]
}

//! Project brief input model.
//!
//! A [`ProjectRequirements`] value is the single input to the generation
//! pipeline. Only `project_type` and `industry` are mandatory; every other
//! field has a documented default applied by [`ProjectRequirements::with_defaults`].

use serde::{Deserialize, Serialize};

/// How the color palette base should be chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorSource {
    /// Derive the base color from the industry table.
    #[default]
    AiSuggested,
    /// Seed the palette from an existing brand color.
    Brand,
    /// Seed the palette from a mood-board color.
    Mood,
}

impl ColorSource {
    /// Lowercase kebab-case label, as used in template descriptions.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::AiSuggested => "ai-suggested",
            Self::Brand => "brand",
            Self::Mood => "mood",
        }
    }
}

/// Color preference block of a project brief.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ColorPreferences {
    /// Where the palette base color comes from.
    #[serde(default)]
    pub source: ColorSource,
    /// Optional seed values (hex strings). Only the first is consulted.
    #[serde(default)]
    pub values: Vec<String>,
}

impl ColorPreferences {
    /// The caller-supplied base color, if any.
    #[must_use]
    pub fn base_color(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }
}

/// Validated, fully-populated input record for one generation run.
///
/// Categorical fields are open string sets: unknown values never error, they
/// resolve to documented defaults inside each lookup table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectRequirements {
    /// Kind of site to assemble (e.g. "landing", "portfolio", "saas").
    pub project_type: String,
    /// Industry the site is for (e.g. "tech", "finance", "healthcare").
    pub industry: String,
    /// Stated purpose of the site, keys the content strategy.
    #[serde(default)]
    pub purpose: String,
    /// Target audience, keys the audience modifiers.
    #[serde(default)]
    pub target_audience: String,
    /// Visual style direction ("modern", "minimal", "bold", "classic", "playful").
    #[serde(default)]
    pub style_direction: String,
    /// Typography style ("professional", "creative", "technical", "friendly").
    #[serde(default)]
    pub typography_style: String,
    /// Business name used for copy personalization, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    /// Palette seeding preference.
    #[serde(default)]
    pub color_preferences: ColorPreferences,
    /// Selected page section ids. Order-irrelevant set.
    #[serde(default)]
    pub required_sections: Vec<String>,
    /// Selected interactive element ids. Order-irrelevant set.
    #[serde(default)]
    pub interactive_elements: Vec<String>,
    /// Selected special feature ids. Order-irrelevant set.
    #[serde(default)]
    pub special_features: Vec<String>,
    /// Device priority ("mobile-first" or "desktop-first").
    #[serde(default)]
    pub device_priority: String,
    /// Accessibility target ("standard", "enhanced", "maximum").
    #[serde(default)]
    pub accessibility_level: String,
}

impl ProjectRequirements {
    /// Creates a minimal brief from the two mandatory fields.
    #[must_use]
    pub fn new(project_type: impl Into<String>, industry: impl Into<String>) -> Self {
        Self {
            project_type: project_type.into(),
            industry: industry.into(),
            purpose: String::new(),
            target_audience: String::new(),
            style_direction: String::new(),
            typography_style: String::new(),
            business_name: None,
            color_preferences: ColorPreferences::default(),
            required_sections: Vec::new(),
            interactive_elements: Vec::new(),
            special_features: Vec::new(),
            device_priority: String::new(),
            accessibility_level: String::new(),
        }
    }

    /// Fills every empty optional field with its documented default.
    ///
    /// Applied at the boundary before the pipeline runs, so the engines can
    /// assume a fully-populated brief.
    #[must_use]
    pub fn with_defaults(mut self) -> Self {
        if self.purpose.is_empty() {
            self.purpose = "Build brand awareness".to_string();
        }
        if self.target_audience.is_empty() {
            self.target_audience = "General consumers (B2C)".to_string();
        }
        if self.style_direction.is_empty() {
            self.style_direction = "modern".to_string();
        }
        if self.typography_style.is_empty() {
            self.typography_style = "professional".to_string();
        }
        if self.device_priority.is_empty() {
            self.device_priority = "mobile-first".to_string();
        }
        if self.accessibility_level.is_empty() {
            self.accessibility_level = "enhanced".to_string();
        }
        self
    }

    /// True when the mandatory categorical fields are present.
    #[must_use]
    pub fn has_required_fields(&self) -> bool {
        !self.project_type.trim().is_empty() && !self.industry.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_empty_fields() {
        let req = ProjectRequirements::new("landing", "tech").with_defaults();
        assert_eq!(req.purpose, "Build brand awareness");
        assert_eq!(req.target_audience, "General consumers (B2C)");
        assert_eq!(req.style_direction, "modern");
        assert_eq!(req.typography_style, "professional");
        // section defaulting is per project type, not done here
        assert!(req.required_sections.is_empty());
        assert_eq!(req.device_priority, "mobile-first");
        assert_eq!(req.accessibility_level, "enhanced");
    }

    #[test]
    fn test_defaults_preserve_existing_values() {
        let mut req = ProjectRequirements::new("landing", "tech");
        req.purpose = "Educate and inform".to_string();
        req.required_sections = vec!["hero".to_string()];
        let req = req.with_defaults();
        assert_eq!(req.purpose, "Educate and inform");
        assert_eq!(req.required_sections, vec!["hero"]);
    }

    #[test]
    fn test_has_required_fields() {
        assert!(ProjectRequirements::new("landing", "tech").has_required_fields());
        assert!(!ProjectRequirements::new("", "tech").has_required_fields());
        assert!(!ProjectRequirements::new("landing", "  ").has_required_fields());
    }

    #[test]
    fn test_brief_deserializes_with_minimal_fields() {
        let req: ProjectRequirements =
            serde_json::from_str(r#"{"project_type":"landing","industry":"tech"}"#).unwrap();
        assert_eq!(req.project_type, "landing");
        assert!(req.required_sections.is_empty());
        assert_eq!(req.color_preferences.source, ColorSource::AiSuggested);
    }

    #[test]
    fn test_color_source_labels() {
        assert_eq!(ColorSource::AiSuggested.label(), "ai-suggested");
        assert_eq!(ColorSource::Brand.label(), "brand");
        assert_eq!(ColorSource::Mood.label(), "mood");
    }
}

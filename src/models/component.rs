//! Generated component model: a markup+style pair with optional variants.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Atomic-design level of a generated component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentType {
    /// Basic building block (button, heading).
    Atom,
    /// Small composite (contact form).
    Molecule,
    /// Page-section-level component (hero, pricing).
    Organism,
    /// Full-page wrapper.
    Template,
}

/// Named variant of a component with a property override map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentVariant {
    /// Variant name ("primary", "h2", ...).
    pub name: String,
    /// Property overrides applied on top of the base component.
    pub properties: BTreeMap<String, String>,
}

impl ComponentVariant {
    /// Convenience constructor for a single-property variant.
    #[must_use]
    pub fn single(name: &str, key: &str, value: &str) -> Self {
        let mut properties = BTreeMap::new();
        properties.insert(key.to_string(), value.to_string());
        Self {
            name: name.to_string(),
            properties,
        }
    }
}

/// One generated markup+style pair.
///
/// Created during the component-generation phase and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentDefinition {
    /// Stable identifier ("button", "hero", "contact_form").
    pub id: String,
    /// Display name.
    pub name: String,
    /// Atomic-design level.
    #[serde(rename = "type")]
    pub component_type: ComponentType,
    /// Markup string. Atoms keep `{{placeholder}}` slots; organisms carry
    /// fully rendered copy.
    pub html: String,
    /// Scoped style string.
    pub css: String,
    /// Optional named variants.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<ComponentVariant>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_type_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ComponentType::Organism).unwrap(),
            "\"organism\""
        );
    }

    #[test]
    fn test_variant_single() {
        let variant = ComponentVariant::single("primary", "class", "btn-primary");
        assert_eq!(variant.name, "primary");
        assert_eq!(variant.properties["class"], "btn-primary");
    }

    #[test]
    fn test_type_field_name_in_json() {
        let component = ComponentDefinition {
            id: "button".to_string(),
            name: "Button".to_string(),
            component_type: ComponentType::Atom,
            html: "<button>{{text}}</button>".to_string(),
            css: ".btn {}".to_string(),
            variants: Vec::new(),
        };
        let json = serde_json::to_value(&component).unwrap();
        assert_eq!(json["type"], "atom");
        assert!(json.get("variants").is_none());
    }
}

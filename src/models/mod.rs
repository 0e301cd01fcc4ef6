//! Data models for briefs, design tokens, components and templates.
//!
//! This module contains all the core data structures used throughout the
//! generator. Models are designed to be independent of the engines and of
//! any output format.

pub mod component;
pub mod palette;
pub mod requirements;
pub mod template;
pub mod tokens;
pub mod typography;

// Re-export all model types
pub use component::{ComponentDefinition, ComponentType, ComponentVariant};
pub use palette::{ColorPalette, SemanticColors};
pub use requirements::{ColorPreferences, ColorSource, ProjectRequirements};
pub use template::GeneratedTemplate;
pub use tokens::{DesignTokens, SpacingScale, StyleScale};
pub use typography::{FontPair, FontWeights, TypeScale, TypographySystem};

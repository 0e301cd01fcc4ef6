//! Content engine: strategy tables, industry copy library and personalization.

pub mod library;
pub mod personalize;
pub mod strategy;

pub use library::{industry_content, IndustryContent};
pub use personalize::personalize;
pub use strategy::{
    cta_text, modifiers_for_audience, strategy_for_purpose, value_propositions, AudienceModifier,
    ContentStrategy, CtaText,
};

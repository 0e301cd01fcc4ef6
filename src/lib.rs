//! Sitewright Library
//!
//! Rule-based website template generation: an industry-aware color engine,
//! a typography engine built on curated font pairings, a content strategy
//! engine, and a generator that assembles them into a complete HTML/CSS
//! template with design tokens.

// Module declarations
pub mod cli;
pub mod color;
pub mod constants;
pub mod content;
pub mod generator;
pub mod models;
pub mod typography;

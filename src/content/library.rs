//! Industry copy library, embedded as JSON data.
//!
//! Six fully-written industry profiles cover every section kind. Lookups
//! for industries outside the library fall back to the tech profile, so a
//! section generator always has copy to work with.

use anyhow::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Hero section copy.
#[derive(Debug, Clone, Deserialize)]
pub struct HeroContent {
    /// Headline.
    pub title: String,
    /// Supporting line under the headline.
    pub subtitle: String,
    /// Primary call-to-action label in the library copy.
    pub primary_cta: String,
    /// Secondary call-to-action label in the library copy.
    pub secondary_cta: String,
    /// Caption for the hero visual placeholder block.
    pub visual_placeholder: String,
}

/// One feature card in the about section.
#[derive(Debug, Clone, Deserialize)]
pub struct AboutFeature {
    /// Card title.
    pub title: String,
    /// Card body.
    pub description: String,
}

/// About section copy with three feature cards.
#[derive(Debug, Clone, Deserialize)]
pub struct AboutContent {
    /// Section title.
    pub title: String,
    /// Lead paragraph.
    pub description: String,
    /// Three feature cards.
    pub features: Vec<AboutFeature>,
}

/// One service card.
#[derive(Debug, Clone, Deserialize)]
pub struct Service {
    /// Service name.
    pub title: String,
    /// Service summary.
    pub description: String,
    /// Bullet list of capabilities.
    pub features: Vec<String>,
    /// Icon name rendered as a label in the card header.
    pub icon: String,
}

/// Services section copy.
#[derive(Debug, Clone, Deserialize)]
pub struct ServicesContent {
    /// Section title.
    pub title: String,
    /// Section subtitle.
    pub subtitle: String,
    /// Four service cards.
    pub services: Vec<Service>,
}

/// One testimonial quote.
#[derive(Debug, Clone, Deserialize)]
pub struct Testimonial {
    /// Customer name.
    pub name: String,
    /// Customer role.
    pub role: String,
    /// Customer company.
    pub company: String,
    /// The quote itself.
    pub content: String,
    /// Star rating, 1 to 5.
    pub rating: u8,
}

/// Testimonials section copy.
#[derive(Debug, Clone, Deserialize)]
pub struct TestimonialsContent {
    /// Section title.
    pub title: String,
    /// Section subtitle.
    pub subtitle: String,
    /// Three quotes.
    pub testimonials: Vec<Testimonial>,
}

/// One team member profile.
#[derive(Debug, Clone, Deserialize)]
pub struct TeamMember {
    /// Member name.
    pub name: String,
    /// Member role.
    pub role: String,
    /// Short bio.
    pub description: String,
    /// Skill labels.
    pub expertise: Vec<String>,
}

/// Team section copy.
#[derive(Debug, Clone, Deserialize)]
pub struct TeamContent {
    /// Section title.
    pub title: String,
    /// Section subtitle.
    pub subtitle: String,
    /// Three member profiles.
    pub members: Vec<TeamMember>,
}

/// One pricing plan.
#[derive(Debug, Clone, Deserialize)]
pub struct PricingPlan {
    /// Plan name.
    pub name: String,
    /// Displayed price, currency included.
    pub price: String,
    /// Billing period label.
    pub period: String,
    /// Plan summary.
    pub description: String,
    /// Bullet list of inclusions.
    pub features: Vec<String>,
    /// The plan visually emphasized in the grid.
    #[serde(default)]
    pub highlighted: bool,
}

/// Pricing section copy.
#[derive(Debug, Clone, Deserialize)]
pub struct PricingContent {
    /// Section title.
    pub title: String,
    /// Section subtitle.
    pub subtitle: String,
    /// Three plans, exactly one highlighted.
    pub plans: Vec<PricingPlan>,
}

/// One portfolio case study.
#[derive(Debug, Clone, Deserialize)]
pub struct PortfolioProject {
    /// Project title.
    pub title: String,
    /// Project summary.
    pub description: String,
    /// Category label.
    pub category: String,
    /// Technology or discipline tags.
    pub tags: Vec<String>,
    /// Headline outcome, e.g. "40% efficiency increase".
    #[serde(default)]
    pub metrics: Option<String>,
}

/// Portfolio section copy.
#[derive(Debug, Clone, Deserialize)]
pub struct PortfolioContent {
    /// Section title.
    pub title: String,
    /// Section subtitle.
    pub subtitle: String,
    /// Three case studies.
    pub projects: Vec<PortfolioProject>,
}

/// Contact section copy.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactContent {
    /// Section title.
    pub title: String,
    /// Lead paragraph.
    pub description: String,
    /// Phone number, if the profile lists one.
    #[serde(default)]
    pub phone: Option<String>,
    /// Email address, if the profile lists one.
    #[serde(default)]
    pub email: Option<String>,
    /// Street address, if the profile lists one.
    #[serde(default)]
    pub address: Option<String>,
}

/// The complete copy profile for one industry.
#[derive(Debug, Clone, Deserialize)]
pub struct IndustryContent {
    /// Hero copy.
    pub hero: HeroContent,
    /// About copy.
    pub about: AboutContent,
    /// Services copy.
    pub services: ServicesContent,
    /// Testimonials copy.
    pub testimonials: TestimonialsContent,
    /// Team copy.
    pub team: TeamContent,
    /// Pricing copy.
    pub pricing: PricingContent,
    /// Portfolio copy.
    pub portfolio: PortfolioContent,
    /// Contact copy.
    pub contact: ContactContent,
}

#[derive(Debug, Deserialize)]
struct Library {
    industries: HashMap<String, IndustryContent>,
}

fn load_library() -> Result<HashMap<String, IndustryContent>> {
    let json_data = include_str!("data/industry_content.json");
    let library: Library = serde_json::from_str(json_data)?;
    Ok(library.industries)
}

fn library() -> &'static HashMap<String, IndustryContent> {
    static LIBRARY: OnceLock<HashMap<String, IndustryContent>> = OnceLock::new();
    LIBRARY.get_or_init(|| load_library().unwrap_or_default())
}

/// Copy profile for an industry, falling back to the tech profile.
///
/// # Panics
///
/// Panics only if the embedded library is missing its tech entry, which the
/// data file guarantees is present.
#[must_use]
pub fn industry_content(industry: &str) -> &'static IndustryContent {
    let library = library();
    library
        .get(industry)
        .or_else(|| library.get("tech"))
        .unwrap_or_else(|| unreachable!("embedded content library always has a tech profile"))
}

/// Industries with a dedicated copy profile, sorted.
#[must_use]
pub fn known_industries() -> Vec<&'static str> {
    let mut industries: Vec<&str> = library().keys().map(String::as_str).collect();
    industries.sort_unstable();
    industries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_covers_six_industries() {
        assert_eq!(
            known_industries(),
            ["corporate", "creative", "education", "finance", "healthcare", "tech"]
        );
    }

    #[test]
    fn test_unknown_industry_falls_back_to_tech() {
        let fallback = industry_content("agriculture");
        let tech = industry_content("tech");
        assert_eq!(fallback.hero.title, tech.hero.title);
        assert_eq!(fallback.hero.title, "Innovative Technology Solutions");
    }

    #[test]
    fn test_profiles_are_structurally_complete() {
        for industry in known_industries() {
            let content = industry_content(industry);
            assert_eq!(content.about.features.len(), 3, "{industry} about features");
            assert_eq!(content.services.services.len(), 4, "{industry} services");
            assert_eq!(
                content.testimonials.testimonials.len(),
                3,
                "{industry} testimonials"
            );
            assert_eq!(content.team.members.len(), 3, "{industry} team");
            assert_eq!(content.pricing.plans.len(), 3, "{industry} pricing plans");
            assert_eq!(content.portfolio.projects.len(), 3, "{industry} projects");
            assert_eq!(
                content.pricing.plans.iter().filter(|p| p.highlighted).count(),
                1,
                "{industry} highlighted plan"
            );
        }
    }

    #[test]
    fn test_ratings_within_range() {
        for industry in known_industries() {
            for quote in &industry_content(industry).testimonials.testimonials {
                assert!((1..=5).contains(&quote.rating));
            }
        }
    }
}

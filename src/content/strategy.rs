//! Purpose- and audience-driven content strategy tables.
//!
//! All tables are total lookups: unknown keys resolve to a documented
//! default entry, never to an error.

use crate::models::ProjectRequirements;

/// Messaging bundle attached to a content strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messaging {
    /// Primary value proposition.
    pub primary_value: &'static str,
    /// Supporting value propositions.
    pub secondary_values: &'static [&'static str],
    /// Objection/risk counters.
    pub risk_mitigators: &'static [&'static str],
}

/// Tone, urgency, focus and CTA style derived from the site's purpose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentStrategy {
    /// Copy tone ("professional", "friendly", "authoritative", "approachable", "technical").
    pub tone: &'static str,
    /// Urgency level ("low", "medium", "high").
    pub urgency: &'static str,
    /// What the copy should emphasize.
    pub focus_area: &'static str,
    /// Call-to-action style ("soft", "direct", "urgent", "consultative").
    pub cta_style: &'static str,
    /// Messaging bundle.
    pub messaging: Messaging,
}

/// Language and decision characteristics of a target audience.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudienceModifier {
    /// Expected language complexity ("simple", "moderate", "advanced").
    pub language_complexity: &'static str,
    /// How quickly the audience decides ("fast", "moderate", "slow").
    pub decision_speed: &'static str,
    /// What builds trust with this audience.
    pub trust_factors: &'static [&'static str],
    /// What this audience worries about.
    pub pain_points: &'static [&'static str],
}

/// Looks up the content strategy for a purpose string.
///
/// Unknown purposes resolve to the "Generate leads and conversions" strategy.
#[must_use]
pub fn strategy_for_purpose(purpose: &str) -> ContentStrategy {
    match purpose {
        "Build brand awareness" => ContentStrategy {
            tone: "approachable",
            urgency: "low",
            focus_area: "innovation",
            cta_style: "soft",
            messaging: Messaging {
                primary_value: "innovative solutions that set you apart",
                secondary_values: &["thought leadership", "industry expertise", "creative approach"],
                risk_mitigators: &["awards and recognition", "media features", "industry partnerships"],
            },
        },
        "Sell products or services" => ContentStrategy {
            tone: "friendly",
            urgency: "medium",
            focus_area: "results",
            cta_style: "direct",
            messaging: Messaging {
                primary_value: "quality solutions at competitive prices",
                secondary_values: &["customer satisfaction", "value for money", "fast delivery"],
                risk_mitigators: &["customer reviews", "satisfaction guarantee", "secure payment"],
            },
        },
        "Share information and content" => ContentStrategy {
            tone: "authoritative",
            urgency: "low",
            focus_area: "expertise",
            cta_style: "consultative",
            messaging: Messaging {
                primary_value: "trusted expertise and insights",
                secondary_values: &["comprehensive resources", "regular updates", "expert analysis"],
                risk_mitigators: &["credentials and certifications", "published research", "industry recognition"],
            },
        },
        "Collect user data" => ContentStrategy {
            tone: "approachable",
            urgency: "medium",
            focus_area: "personal",
            cta_style: "soft",
            messaging: Messaging {
                primary_value: "personalized experiences tailored to you",
                secondary_values: &["privacy protection", "valuable insights", "exclusive content"],
                risk_mitigators: &["privacy policy", "data security", "opt-out options"],
            },
        },
        "Provide customer support" => ContentStrategy {
            tone: "friendly",
            urgency: "low",
            focus_area: "credibility",
            cta_style: "consultative",
            messaging: Messaging {
                primary_value: "reliable support when you need it most",
                secondary_values: &["24/7 availability", "expert assistance", "quick resolution"],
                risk_mitigators: &["response time guarantees", "satisfaction ratings", "multiple contact options"],
            },
        },
        "Showcase portfolio/work" => ContentStrategy {
            tone: "professional",
            urgency: "low",
            focus_area: "expertise",
            cta_style: "consultative",
            messaging: Messaging {
                primary_value: "exceptional work that speaks for itself",
                secondary_values: &["creative excellence", "attention to detail", "client satisfaction"],
                risk_mitigators: &["client testimonials", "award recognition", "portfolio diversity"],
            },
        },
        "Build community" => ContentStrategy {
            tone: "friendly",
            urgency: "low",
            focus_area: "personal",
            cta_style: "soft",
            messaging: Messaging {
                primary_value: "a welcoming community where you belong",
                secondary_values: &["shared interests", "supportive environment", "valuable connections"],
                risk_mitigators: &["member testimonials", "community guidelines", "free to join"],
            },
        },
        "Educate and inform" => ContentStrategy {
            tone: "authoritative",
            urgency: "low",
            focus_area: "expertise",
            cta_style: "consultative",
            messaging: Messaging {
                primary_value: "comprehensive education from trusted experts",
                secondary_values: &["practical knowledge", "step-by-step guidance", "real-world application"],
                risk_mitigators: &["instructor credentials", "student success stories", "curriculum transparency"],
            },
        },
        "Drive event attendance" => ContentStrategy {
            tone: "approachable",
            urgency: "high",
            focus_area: "innovation",
            cta_style: "urgent",
            messaging: Messaging {
                primary_value: "exclusive insights you can't get anywhere else",
                secondary_values: &["networking opportunities", "industry leaders", "limited availability"],
                risk_mitigators: &["speaker lineup", "past attendee feedback", "agenda preview"],
            },
        },
        // "Generate leads and conversions" and anything unrecognized
        _ => ContentStrategy {
            tone: "professional",
            urgency: "high",
            focus_area: "results",
            cta_style: "direct",
            messaging: Messaging {
                primary_value: "proven results that drive growth",
                secondary_values: &["measurable outcomes", "quick implementation", "ROI focus"],
                risk_mitigators: &["free consultation", "case studies", "money-back guarantee"],
            },
        },
    }
}

/// Looks up the audience modifiers for a target-audience string.
///
/// Unknown audiences resolve to the general-consumer entry.
#[must_use]
pub fn modifiers_for_audience(audience: &str) -> AudienceModifier {
    match audience {
        "Business professionals (B2B)" => AudienceModifier {
            language_complexity: "advanced",
            decision_speed: "slow",
            trust_factors: &["case studies", "ROI data", "industry certifications"],
            pain_points: &["efficiency", "scalability", "compliance"],
        },
        "Young adults (18-30)" => AudienceModifier {
            language_complexity: "moderate",
            decision_speed: "fast",
            trust_factors: &["social proof", "innovation", "sustainability"],
            pain_points: &["affordability", "convenience", "social impact"],
        },
        "Middle-aged professionals (30-50)" => AudienceModifier {
            language_complexity: "advanced",
            decision_speed: "moderate",
            trust_factors: &["expertise", "track record", "comprehensive solutions"],
            pain_points: &["time constraints", "family considerations", "career advancement"],
        },
        "Seniors (50+)" => AudienceModifier {
            language_complexity: "simple",
            decision_speed: "slow",
            trust_factors: &["personal service", "established reputation", "clear communication"],
            pain_points: &["simplicity", "reliability", "personal attention"],
        },
        "Students and educators" => AudienceModifier {
            language_complexity: "moderate",
            decision_speed: "moderate",
            trust_factors: &["educational value", "peer recommendations", "institutional partnerships"],
            pain_points: &["budget constraints", "learning outcomes", "practical application"],
        },
        "Entrepreneurs and startups" => AudienceModifier {
            language_complexity: "advanced",
            decision_speed: "fast",
            trust_factors: &["scalability", "innovation", "growth potential"],
            pain_points: &["resource constraints", "speed to market", "competitive advantage"],
        },
        "Enterprise decision makers" => AudienceModifier {
            language_complexity: "advanced",
            decision_speed: "slow",
            trust_factors: &["security", "compliance", "enterprise support"],
            pain_points: &["integration complexity", "risk management", "stakeholder buy-in"],
        },
        "Creative professionals" => AudienceModifier {
            language_complexity: "moderate",
            decision_speed: "moderate",
            trust_factors: &["portfolio quality", "creative freedom", "industry recognition"],
            pain_points: &["creative constraints", "client management", "pricing pressures"],
        },
        "Technical/Developer audience" => AudienceModifier {
            language_complexity: "advanced",
            decision_speed: "moderate",
            trust_factors: &["technical specifications", "documentation quality", "open source"],
            pain_points: &["technical debt", "scalability", "maintenance overhead"],
        },
        // "General consumers (B2C)" and anything unrecognized
        _ => AudienceModifier {
            language_complexity: "simple",
            decision_speed: "fast",
            trust_factors: &["customer reviews", "money-back guarantee", "easy returns"],
            pain_points: &["saving money", "convenience", "quality concerns"],
        },
    }
}

/// A primary/secondary call-to-action pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CtaText {
    /// Main call to action.
    pub primary: &'static str,
    /// Secondary call to action.
    pub secondary: &'static str,
}

/// Selects call-to-action copy from the fixed style/decision-speed table.
///
/// The primary option index is fast=0, moderate=1, slow=2; the secondary is
/// fast=0, otherwise 1. Indices are clamped to the available list length.
#[must_use]
pub fn cta_text(requirements: &ProjectRequirements) -> CtaText {
    let strategy = strategy_for_purpose(&requirements.purpose);
    let audience = modifiers_for_audience(&requirements.target_audience);

    let (primary_options, secondary_options): (&[&str], &[&str]) = match strategy.cta_style {
        "soft" => (
            &["Learn More", "Explore Options", "See How It Works", "Get Information"],
            &["Contact Us", "Schedule Call", "Request Info", "Ask Questions"],
        ),
        "urgent" => (
            &["Register Now", "Claim Your Spot", "Don't Miss Out", "Act Now"],
            &["Limited Time", "Reserve Seat", "Join Waitlist", "Get Notified"],
        ),
        "consultative" => (
            &["Schedule Consultation", "Get Expert Advice", "Discuss Your Needs", "Free Assessment"],
            &["Learn More", "View Portfolio", "Read Case Studies", "Contact Expert"],
        ),
        // "direct" is also the fallback style
        _ => (
            &["Get Started", "Start Now", "Try It Free", "Get Quote"],
            &["See Pricing", "View Plans", "Contact Sales", "Learn More"],
        ),
    };

    let primary_index = match audience.decision_speed {
        "fast" => 0,
        "moderate" => 1,
        _ => 2,
    };
    let secondary_index = usize::from(audience.decision_speed != "fast");

    CtaText {
        primary: primary_options[primary_index.min(primary_options.len() - 1)],
        secondary: secondary_options[secondary_index.min(secondary_options.len() - 1)],
    }
}

/// Builds up to four value propositions for the brief.
///
/// Order: strategy secondary values, audience pain points prefixed with
/// "addressing ", then the first two trust factors; truncated to four.
#[must_use]
pub fn value_propositions(requirements: &ProjectRequirements) -> Vec<String> {
    let strategy = strategy_for_purpose(&requirements.purpose);
    let audience = modifiers_for_audience(&requirements.target_audience);

    let mut values: Vec<String> = strategy
        .messaging
        .secondary_values
        .iter()
        .map(|v| (*v).to_string())
        .collect();
    values.extend(audience.pain_points.iter().map(|p| format!("addressing {p}")));
    values.extend(audience.trust_factors.iter().take(2).map(|t| (*t).to_string()));

    values.truncate(4);
    values
}

//! Copy personalization: business-name substitution and vocabulary rewrites.

use regex::{Captures, Regex};
use std::sync::OnceLock;

use super::strategy::{AudienceModifier, ContentStrategy};
use crate::models::ProjectRequirements;

fn pronoun_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)\b(we|our|us)\b").unwrap())
}

fn generic_org_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)\bthe (company|business|organization)\b").unwrap())
}

fn possessive_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)\bour (team|services|solutions)\b").unwrap())
}

/// Rewrites library copy for one brief.
///
/// Rules run in a fixed order and each sees the previous rule's output. The
/// pronoun rule runs first, so "our team" becomes "Acme's team" through the
/// pronoun rewrite before the possessive rule can match it.
#[must_use]
pub fn personalize(
    content: &str,
    requirements: &ProjectRequirements,
    strategy: &ContentStrategy,
    audience: &AudienceModifier,
) -> String {
    let mut result = content.to_string();

    if let Some(name) = requirements.business_name.as_deref() {
        result = pronoun_re()
            .replace_all(&result, |caps: &Captures<'_>| {
                match caps[1].to_lowercase().as_str() {
                    "our" => format!("{name}'s"),
                    // "we" and "us" both become the plain name
                    _ => name.to_string(),
                }
            })
            .into_owned();
        result = generic_org_re()
            .replace_all(&result, |_: &Captures<'_>| name.to_string())
            .into_owned();
        result = possessive_re()
            .replace_all(&result, |caps: &Captures<'_>| format!("{name}'s {}", &caps[1]))
            .into_owned();
    }

    if strategy.tone == "technical" && audience.language_complexity == "simple" {
        result = replace_ci(&result, "utilize", "use");
        result = replace_ci(&result, "implement", "put in place");
        result = replace_ci(&result, "comprehensive", "complete");
        result = replace_ci(&result, "optimize", "improve");
        result = replace_ci(&result, "facilitate", "help with");
    }

    if requirements.target_audience == "General consumers (B2C)" {
        result = replace_ci(&result, "solutions", "services");
        result = replace_ci(&result, "leverage", "use");
        result = replace_ci(&result, "scalable", "flexible");
    }

    if audience.decision_speed == "fast" && strategy.urgency == "high" {
        result = replace_ci(&result, "contact us", "get started today");
        result = replace_ci(&result, "learn more", "see results now");
    }

    result
}

/// Case-insensitive substring replacement with a fixed-case replacement.
///
/// Needles are ASCII, so matched spans always fall on char boundaries.
fn replace_ci(haystack: &str, needle: &str, replacement: &str) -> String {
    let needle_bytes = needle.as_bytes();
    let mut result = String::with_capacity(haystack.len());
    let mut rest = haystack;
    while let Some(pos) = rest
        .as_bytes()
        .windows(needle_bytes.len())
        .position(|window| window.eq_ignore_ascii_case(needle_bytes))
    {
        result.push_str(&rest[..pos]);
        result.push_str(replacement);
        rest = &rest[pos + needle_bytes.len()..];
    }
    result.push_str(rest);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::strategy::{modifiers_for_audience, strategy_for_purpose};

    fn brief(business_name: Option<&str>, purpose: &str, audience: &str) -> ProjectRequirements {
        let mut req = ProjectRequirements::new("landing", "tech").with_defaults();
        req.business_name = business_name.map(ToString::to_string);
        req.purpose = purpose.to_string();
        req.target_audience = audience.to_string();
        req
    }

    #[test]
    fn test_business_name_substitution() {
        let req = brief(
            Some("Acme"),
            "Build brand awareness",
            "Business professionals (B2B)",
        );
        let strategy = strategy_for_purpose(&req.purpose);
        let audience = modifiers_for_audience(&req.target_audience);

        let out = personalize("We deliver for us and our clients.", &req, &strategy, &audience);
        assert_eq!(out, "Acme deliver for Acme and Acme's clients.");

        let out = personalize("Trust the company.", &req, &strategy, &audience);
        assert_eq!(out, "Trust Acme.");
    }

    #[test]
    fn test_pronoun_rule_runs_before_possessive_rule() {
        let req = brief(
            Some("Acme"),
            "Build brand awareness",
            "Business professionals (B2B)",
        );
        let strategy = strategy_for_purpose(&req.purpose);
        let audience = modifiers_for_audience(&req.target_audience);

        // "our team" hits the pronoun rule first, so no double possessive.
        let out = personalize("Meet our team.", &req, &strategy, &audience);
        assert_eq!(out, "Meet Acme's team.");
    }

    #[test]
    fn test_substitution_is_case_insensitive() {
        let req = brief(
            Some("Acme"),
            "Build brand awareness",
            "Business professionals (B2B)",
        );
        let strategy = strategy_for_purpose(&req.purpose);
        let audience = modifiers_for_audience(&req.target_audience);

        let out = personalize("WE lead. Our record shows it.", &req, &strategy, &audience);
        assert_eq!(out, "Acme lead. Acme's record shows it.");
    }

    #[test]
    fn test_consumer_vocabulary_swaps_are_substring() {
        let req = brief(None, "Share information and content", "General consumers (B2C)");
        let strategy = strategy_for_purpose(&req.purpose);
        let audience = modifiers_for_audience(&req.target_audience);

        // "solutions" swaps even inside a larger context; "scalable" swaps
        // as a bare substring.
        let out = personalize(
            "Scalable solutions you can leverage.",
            &req,
            &strategy,
            &audience,
        );
        assert_eq!(out, "flexible services you can use.");
    }

    #[test]
    fn test_urgency_cta_rewrites() {
        // leads purpose -> high urgency; B2C -> fast decisions
        let req = brief(None, "Generate leads and conversions", "General consumers (B2C)");
        let strategy = strategy_for_purpose(&req.purpose);
        let audience = modifiers_for_audience(&req.target_audience);

        let out = personalize("Contact us to learn more.", &req, &strategy, &audience);
        assert_eq!(out, "get started today to see results now.");
    }

    #[test]
    fn test_no_rewrites_without_triggers() {
        let req = brief(None, "Build brand awareness", "Business professionals (B2B)");
        let strategy = strategy_for_purpose(&req.purpose);
        let audience = modifiers_for_audience(&req.target_audience);

        let text = "Our comprehensive solutions help you learn more.";
        // No business name, low urgency, B2B audience, non-technical tone:
        // only the untriggered rules exist, so the copy passes through.
        assert_eq!(personalize(text, &req, &strategy, &audience), text);
    }
}

//! Section (organism) generators.
//!
//! Each generator renders canned industry copy through the personalization
//! pass into a fixed HTML skeleton, with CSS driven by the shared token set.
//! Unknown section ids produce no component.

use crate::content::library::{industry_content, IndustryContent};
use crate::content::personalize::personalize;
use crate::content::strategy::{
    cta_text, modifiers_for_audience, strategy_for_purpose, AudienceModifier, ContentStrategy,
    CtaText,
};
use crate::models::{ComponentDefinition, ComponentType, DesignTokens, ProjectRequirements};

/// Shared inputs for one run's section generators.
pub struct SectionContext<'a> {
    /// The fully-defaulted brief.
    pub requirements: &'a ProjectRequirements,
    /// Immutable token set.
    pub tokens: &'a DesignTokens,
    /// Strategy derived from the brief's purpose.
    pub strategy: ContentStrategy,
    /// Modifiers derived from the brief's audience.
    pub audience: AudienceModifier,
    /// Industry copy profile (tech fallback applied).
    pub content: &'static IndustryContent,
    /// Call-to-action pair for the brief.
    pub cta: CtaText,
}

impl<'a> SectionContext<'a> {
    /// Derives strategy, audience, copy profile and CTAs once per run.
    #[must_use]
    pub fn new(requirements: &'a ProjectRequirements, tokens: &'a DesignTokens) -> Self {
        Self {
            requirements,
            tokens,
            strategy: strategy_for_purpose(&requirements.purpose),
            audience: modifiers_for_audience(&requirements.target_audience),
            content: industry_content(&requirements.industry),
            cta: cta_text(requirements),
        }
    }

    /// Runs library copy through the personalization pass.
    #[must_use]
    pub fn text(&self, copy: &str) -> String {
        personalize(copy, self.requirements, &self.strategy, &self.audience)
    }
}

/// Generator for one requested section id. Unknown ids yield `None`.
#[must_use]
pub fn section_component(section_id: &str, ctx: &SectionContext<'_>) -> Option<ComponentDefinition> {
    match section_id {
        "hero" => Some(hero(ctx)),
        "about" => Some(about(ctx)),
        "services" => Some(services(ctx)),
        "portfolio" => Some(portfolio(ctx)),
        "testimonials" => Some(testimonials(ctx)),
        "team" => Some(team(ctx)),
        "pricing" => Some(pricing(ctx)),
        "contact" => Some(contact(ctx)),
        _ => None,
    }
}

/// Generator for an interactive element id.
///
/// Only `contact_form` maps to a component; every other id is a deliberate
/// no-op.
#[must_use]
pub fn interactive_component(
    element_id: &str,
    ctx: &SectionContext<'_>,
) -> Option<ComponentDefinition> {
    match element_id {
        "contact_form" => Some(contact_form(ctx)),
        _ => None,
    }
}

fn organism(id: &str, name: &str, html: String, css: String) -> ComponentDefinition {
    ComponentDefinition {
        id: id.to_string(),
        name: name.to_string(),
        component_type: ComponentType::Organism,
        html,
        css,
        variants: Vec::new(),
    }
}

fn hero(ctx: &SectionContext<'_>) -> ComponentDefinition {
    let copy = &ctx.content.hero;
    let html = format!(
        r#"<section class="hero">
  <div class="hero-container">
    <div class="hero-content">
      <h1 class="hero-title">{title}</h1>
      <p class="hero-subtitle">{subtitle}</p>
      <div class="hero-actions">
        <button class="btn btn-primary">{primary_cta}</button>
        <button class="btn btn-secondary">{secondary_cta}</button>
      </div>
    </div>
    <div class="hero-visual">
      <div class="hero-placeholder">{placeholder}</div>
    </div>
  </div>
</section>"#,
        title = ctx.text(&copy.title),
        subtitle = ctx.text(&copy.subtitle),
        primary_cta = ctx.cta.primary,
        secondary_cta = ctx.cta.secondary,
        placeholder = copy.visual_placeholder,
    );

    let css = format!(
        r".hero {{
  padding: {xl} 1rem;
  background: linear-gradient(135deg, {primary}10, {secondary}10);
}}

.hero-container {{
  max-width: 1200px;
  margin: 0 auto;
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: {lg_gap};
  align-items: center;
}}

.hero-title {{
  font-family: '{heading_font}', serif;
  font-size: {size_5xl};
  font-weight: {bold};
  line-height: 1.1;
  margin-bottom: 1.5rem;
  color: {primary};
}}

.hero-subtitle {{
  font-size: {size_xl};
  line-height: 1.6;
  margin-bottom: 2rem;
  color: #6b7280;
}}

.hero-actions {{
  display: flex;
  gap: 1rem;
  flex-wrap: wrap;
}}

.hero-placeholder {{
  display: flex;
  align-items: center;
  justify-content: center;
  min-height: 320px;
  background-color: {neutral};
  border-radius: {radius_lg};
  color: {primary};
  font-family: '{heading_font}', serif;
  font-size: {size_lg};
}}

@media (max-width: 768px) {{
  .hero-container {{
    grid-template-columns: 1fr;
    text-align: center;
  }}

  .hero-title {{
    font-size: {size_3xl};
  }}
}}
",
        xl = ctx.tokens.spacing.xl,
        primary = ctx.tokens.colors.primary,
        secondary = ctx.tokens.colors.secondary,
        lg_gap = ctx.tokens.spacing.xl,
        heading_font = ctx.tokens.typography.font_pairings.heading,
        size_5xl = ctx.tokens.typography.scale.xl5,
        bold = ctx.tokens.typography.weights.bold,
        size_xl = ctx.tokens.typography.scale.xl,
        neutral = ctx.tokens.colors.neutral,
        radius_lg = ctx.tokens.border_radius.lg,
        size_lg = ctx.tokens.typography.scale.lg,
        size_3xl = ctx.tokens.typography.scale.xl3,
    );

    organism("hero", "Hero Section", html, css)
}

fn about(ctx: &SectionContext<'_>) -> ComponentDefinition {
    let copy = &ctx.content.about;
    let mut cards = String::new();
    for feature in &copy.features {
        cards.push_str(&format!(
            r#"      <div class="about-card">
        <h3>{title}</h3>
        <p>{description}</p>
      </div>
"#,
            title = ctx.text(&feature.title),
            description = ctx.text(&feature.description),
        ));
    }

    let html = format!(
        r#"<section class="about">
  <div class="about-container">
    <h2 class="about-title">{title}</h2>
    <p class="about-description">{description}</p>
    <div class="about-grid">
{cards}    </div>
  </div>
</section>"#,
        title = ctx.text(&copy.title),
        description = ctx.text(&copy.description),
    );

    let css = format!(
        r"{heading}

.about-description {{
  max-width: 640px;
  margin: 0 auto {lg};
  text-align: center;
  color: #6b7280;
  font-size: {size_lg};
}}

.about-grid {{
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: {md};
}}

.about-card {{
  padding: {md};
  background-color: {neutral};
  border-radius: {radius_md};
  box-shadow: {shadow_sm};
}}

.about-card h3 {{
  font-family: '{heading_font}', serif;
  font-size: {size_xl};
  color: {primary};
  margin-bottom: 0.5rem;
}}

@media (max-width: 768px) {{
  .about-grid {{
    grid-template-columns: 1fr;
  }}
}}
",
        heading = section_shell_css("about", ctx),
        lg = ctx.tokens.spacing.lg,
        size_lg = ctx.tokens.typography.scale.lg,
        md = ctx.tokens.spacing.md,
        neutral = ctx.tokens.colors.neutral,
        radius_md = ctx.tokens.border_radius.md,
        shadow_sm = ctx.tokens.shadows.sm,
        heading_font = ctx.tokens.typography.font_pairings.heading,
        size_xl = ctx.tokens.typography.scale.xl,
        primary = ctx.tokens.colors.primary,
    );

    organism("about", "About Section", html, css)
}

fn services(ctx: &SectionContext<'_>) -> ComponentDefinition {
    let copy = &ctx.content.services;
    let mut cards = String::new();
    for service in &copy.services {
        let mut items = String::new();
        for feature in &service.features {
            items.push_str(&format!("          <li>{}</li>\n", ctx.text(feature)));
        }
        cards.push_str(&format!(
            r#"      <div class="service-card">
        <span class="service-icon">{icon}</span>
        <h3>{title}</h3>
        <p>{description}</p>
        <ul>
{items}        </ul>
      </div>
"#,
            icon = service.icon,
            title = ctx.text(&service.title),
            description = ctx.text(&service.description),
        ));
    }

    let html = format!(
        r#"<section class="services">
  <div class="services-container">
    <h2 class="services-title">{title}</h2>
    <p class="services-subtitle">{subtitle}</p>
    <div class="services-grid">
{cards}    </div>
  </div>
</section>"#,
        title = ctx.text(&copy.title),
        subtitle = ctx.text(&copy.subtitle),
    );

    let css = format!(
        r"{shell}

.services-grid {{
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: {md};
}}

.service-card {{
  padding: {md};
  border: 1px solid {neutral};
  border-radius: {radius_md};
  box-shadow: {shadow_sm};
}}

.service-icon {{
  display: inline-block;
  margin-bottom: 0.75rem;
  padding: 0.25rem 0.75rem;
  background-color: {neutral};
  border-radius: {radius_sm};
  color: {primary};
  font-weight: {medium};
  font-size: {size_sm};
}}

.service-card h3 {{
  font-family: '{heading_font}', serif;
  font-size: {size_xl};
  color: {primary};
  margin-bottom: 0.5rem;
}}

.service-card ul {{
  margin-top: 0.75rem;
  padding-left: 1.25rem;
  color: #6b7280;
}}

@media (max-width: 768px) {{
  .services-grid {{
    grid-template-columns: 1fr;
  }}
}}
",
        shell = section_shell_css("services", ctx),
        md = ctx.tokens.spacing.md,
        neutral = ctx.tokens.colors.neutral,
        radius_md = ctx.tokens.border_radius.md,
        shadow_sm = ctx.tokens.shadows.sm,
        radius_sm = ctx.tokens.border_radius.sm,
        primary = ctx.tokens.colors.primary,
        medium = ctx.tokens.typography.weights.medium,
        size_sm = ctx.tokens.typography.scale.sm,
        heading_font = ctx.tokens.typography.font_pairings.heading,
        size_xl = ctx.tokens.typography.scale.xl,
    );

    organism("services", "Services Section", html, css)
}

fn portfolio(ctx: &SectionContext<'_>) -> ComponentDefinition {
    let copy = &ctx.content.portfolio;
    let mut cards = String::new();
    for project in &copy.projects {
        let tags: String = project
            .tags
            .iter()
            .map(|tag| format!(r#"<span class="project-tag">{tag}</span>"#))
            .collect::<Vec<_>>()
            .join("\n          ");
        let metrics = project
            .metrics
            .as_deref()
            .map(|m| format!(r#"        <strong class="project-metrics">{m}</strong>
"#))
            .unwrap_or_default();
        cards.push_str(&format!(
            r#"      <div class="project-card">
        <span class="project-category">{category}</span>
        <h3>{title}</h3>
        <p>{description}</p>
        <div class="project-tags">
          {tags}
        </div>
{metrics}      </div>
"#,
            category = project.category,
            title = ctx.text(&project.title),
            description = ctx.text(&project.description),
        ));
    }

    let html = format!(
        r#"<section class="portfolio">
  <div class="portfolio-container">
    <h2 class="portfolio-title">{title}</h2>
    <p class="portfolio-subtitle">{subtitle}</p>
    <div class="portfolio-grid">
{cards}    </div>
  </div>
</section>"#,
        title = ctx.text(&copy.title),
        subtitle = ctx.text(&copy.subtitle),
    );

    let css = format!(
        r"{shell}

.portfolio-grid {{
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: {md};
}}

.project-card {{
  padding: {md};
  border-radius: {radius_md};
  box-shadow: {shadow_md};
}}

.project-category {{
  color: {accent};
  font-weight: {medium};
  font-size: {size_sm};
  text-transform: uppercase;
  letter-spacing: 0.05em;
}}

.project-card h3 {{
  font-family: '{heading_font}', serif;
  font-size: {size_xl};
  color: {primary};
  margin: 0.5rem 0;
}}

.project-tags {{
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
  margin: 0.75rem 0;
}}

.project-tag {{
  padding: 0.125rem 0.625rem;
  background-color: {neutral};
  border-radius: {radius_sm};
  font-size: {size_sm};
}}

.project-metrics {{
  color: {primary};
}}

@media (max-width: 768px) {{
  .portfolio-grid {{
    grid-template-columns: 1fr;
  }}
}}
",
        shell = section_shell_css("portfolio", ctx),
        md = ctx.tokens.spacing.md,
        radius_md = ctx.tokens.border_radius.md,
        shadow_md = ctx.tokens.shadows.md,
        accent = ctx.tokens.colors.accent,
        medium = ctx.tokens.typography.weights.medium,
        size_sm = ctx.tokens.typography.scale.sm,
        heading_font = ctx.tokens.typography.font_pairings.heading,
        size_xl = ctx.tokens.typography.scale.xl,
        primary = ctx.tokens.colors.primary,
        neutral = ctx.tokens.colors.neutral,
        radius_sm = ctx.tokens.border_radius.sm,
    );

    organism("portfolio", "Portfolio Section", html, css)
}

fn testimonials(ctx: &SectionContext<'_>) -> ComponentDefinition {
    let copy = &ctx.content.testimonials;
    let mut cards = String::new();
    for quote in &copy.testimonials {
        cards.push_str(&format!(
            r#"      <div class="testimonial-card">
        <div class="testimonial-stars">{stars}</div>
        <blockquote>{content}</blockquote>
        <footer>
          <strong>{name}</strong>
          <span>{role}, {company}</span>
        </footer>
      </div>
"#,
            stars = "★".repeat(usize::from(quote.rating.min(5))),
            content = ctx.text(&quote.content),
            name = quote.name,
            role = quote.role,
            company = quote.company,
        ));
    }

    let html = format!(
        r#"<section class="testimonials">
  <div class="testimonials-container">
    <h2 class="testimonials-title">{title}</h2>
    <p class="testimonials-subtitle">{subtitle}</p>
    <div class="testimonials-grid">
{cards}    </div>
  </div>
</section>"#,
        title = ctx.text(&copy.title),
        subtitle = ctx.text(&copy.subtitle),
    );

    let css = format!(
        r"{shell}

.testimonials-grid {{
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: {md};
}}

.testimonial-card {{
  padding: {md};
  background-color: {neutral};
  border-radius: {radius_md};
}}

.testimonial-stars {{
  color: {warning};
  margin-bottom: 0.5rem;
}}

.testimonial-card blockquote {{
  font-size: {size_base};
  line-height: 1.6;
  margin-bottom: 1rem;
}}

.testimonial-card footer {{
  display: flex;
  flex-direction: column;
}}

.testimonial-card footer span {{
  color: #6b7280;
  font-size: {size_sm};
}}

@media (max-width: 768px) {{
  .testimonials-grid {{
    grid-template-columns: 1fr;
  }}
}}
",
        shell = section_shell_css("testimonials", ctx),
        md = ctx.tokens.spacing.md,
        neutral = ctx.tokens.colors.neutral,
        radius_md = ctx.tokens.border_radius.md,
        warning = ctx.tokens.colors.semantic.warning,
        size_base = ctx.tokens.typography.scale.base,
        size_sm = ctx.tokens.typography.scale.sm,
    );

    organism("testimonials", "Testimonials Section", html, css)
}

fn team(ctx: &SectionContext<'_>) -> ComponentDefinition {
    let copy = &ctx.content.team;
    let mut cards = String::new();
    for member in &copy.members {
        let expertise: String = member
            .expertise
            .iter()
            .map(|skill| format!(r#"<span class="team-skill">{skill}</span>"#))
            .collect::<Vec<_>>()
            .join("\n          ");
        cards.push_str(&format!(
            r#"      <div class="team-card">
        <h3>{name}</h3>
        <span class="team-role">{role}</span>
        <p>{description}</p>
        <div class="team-skills">
          {expertise}
        </div>
      </div>
"#,
            name = member.name,
            role = member.role,
            description = ctx.text(&member.description),
        ));
    }

    let html = format!(
        r#"<section class="team">
  <div class="team-container">
    <h2 class="team-title">{title}</h2>
    <p class="team-subtitle">{subtitle}</p>
    <div class="team-grid">
{cards}    </div>
  </div>
</section>"#,
        title = ctx.text(&copy.title),
        subtitle = ctx.text(&copy.subtitle),
    );

    let css = format!(
        r"{shell}

.team-grid {{
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: {md};
}}

.team-card {{
  padding: {md};
  border: 1px solid {neutral};
  border-radius: {radius_md};
  text-align: center;
}}

.team-card h3 {{
  font-family: '{heading_font}', serif;
  font-size: {size_xl};
  color: {primary};
}}

.team-role {{
  display: block;
  color: {accent};
  font-weight: {medium};
  margin-bottom: 0.75rem;
}}

.team-skills {{
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 0.5rem;
  margin-top: 0.75rem;
}}

.team-skill {{
  padding: 0.125rem 0.625rem;
  background-color: {neutral};
  border-radius: {radius_sm};
  font-size: {size_sm};
}}

@media (max-width: 768px) {{
  .team-grid {{
    grid-template-columns: 1fr;
  }}
}}
",
        shell = section_shell_css("team", ctx),
        md = ctx.tokens.spacing.md,
        neutral = ctx.tokens.colors.neutral,
        radius_md = ctx.tokens.border_radius.md,
        heading_font = ctx.tokens.typography.font_pairings.heading,
        size_xl = ctx.tokens.typography.scale.xl,
        primary = ctx.tokens.colors.primary,
        accent = ctx.tokens.colors.accent,
        medium = ctx.tokens.typography.weights.medium,
        radius_sm = ctx.tokens.border_radius.sm,
        size_sm = ctx.tokens.typography.scale.sm,
    );

    organism("team", "Team Section", html, css)
}

fn pricing(ctx: &SectionContext<'_>) -> ComponentDefinition {
    let copy = &ctx.content.pricing;
    let mut cards = String::new();
    for plan in &copy.plans {
        let mut items = String::new();
        for feature in &plan.features {
            items.push_str(&format!("          <li>{}</li>\n", ctx.text(feature)));
        }
        let card_class = if plan.highlighted {
            "plan-card plan-highlighted"
        } else {
            "plan-card"
        };
        let button_class = if plan.highlighted {
            "btn btn-primary"
        } else {
            "btn btn-outline"
        };
        cards.push_str(&format!(
            r#"      <div class="{card_class}">
        <h3>{name}</h3>
        <div class="plan-price">{price}<span>/{period}</span></div>
        <p>{description}</p>
        <ul>
{items}        </ul>
        <button class="{button_class}">{cta}</button>
      </div>
"#,
            name = plan.name,
            price = plan.price,
            period = plan.period,
            description = ctx.text(&plan.description),
            cta = ctx.cta.primary,
        ));
    }

    let html = format!(
        r#"<section class="pricing">
  <div class="pricing-container">
    <h2 class="pricing-title">{title}</h2>
    <p class="pricing-subtitle">{subtitle}</p>
    <div class="pricing-grid">
{cards}    </div>
  </div>
</section>"#,
        title = ctx.text(&copy.title),
        subtitle = ctx.text(&copy.subtitle),
    );

    let css = format!(
        r"{shell}

.pricing-grid {{
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: {md};
  align-items: start;
}}

.plan-card {{
  padding: {lg};
  border: 1px solid {neutral};
  border-radius: {radius_lg};
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}}

.plan-highlighted {{
  border: 2px solid {primary};
  box-shadow: {shadow_lg};
}}

.plan-card h3 {{
  font-family: '{heading_font}', serif;
  font-size: {size_xl};
  color: {primary};
}}

.plan-price {{
  font-size: {size_3xl};
  font-weight: {bold};
  color: {primary};
}}

.plan-price span {{
  font-size: {size_sm};
  font-weight: {normal};
  color: #6b7280;
}}

.plan-card ul {{
  padding-left: 1.25rem;
  color: #6b7280;
  flex-grow: 1;
}}

@media (max-width: 768px) {{
  .pricing-grid {{
    grid-template-columns: 1fr;
  }}
}}
",
        shell = section_shell_css("pricing", ctx),
        md = ctx.tokens.spacing.md,
        lg = ctx.tokens.spacing.lg,
        neutral = ctx.tokens.colors.neutral,
        radius_lg = ctx.tokens.border_radius.lg,
        primary = ctx.tokens.colors.primary,
        shadow_lg = ctx.tokens.shadows.lg,
        heading_font = ctx.tokens.typography.font_pairings.heading,
        size_xl = ctx.tokens.typography.scale.xl,
        size_3xl = ctx.tokens.typography.scale.xl3,
        bold = ctx.tokens.typography.weights.bold,
        size_sm = ctx.tokens.typography.scale.sm,
        normal = ctx.tokens.typography.weights.normal,
    );

    organism("pricing", "Pricing Section", html, css)
}

fn contact(ctx: &SectionContext<'_>) -> ComponentDefinition {
    let copy = &ctx.content.contact;
    let mut details = String::new();
    if let Some(phone) = &copy.phone {
        details.push_str(&format!(
            r#"      <div class="contact-item"><strong>Phone</strong><span>{phone}</span></div>
"#
        ));
    }
    if let Some(email) = &copy.email {
        details.push_str(&format!(
            r#"      <div class="contact-item"><strong>Email</strong><span>{email}</span></div>
"#
        ));
    }
    if let Some(address) = &copy.address {
        details.push_str(&format!(
            r#"      <div class="contact-item"><strong>Address</strong><span>{address}</span></div>
"#
        ));
    }

    let html = format!(
        r#"<section class="contact">
  <div class="contact-container">
    <h2 class="contact-title">{title}</h2>
    <p class="contact-description">{description}</p>
    <div class="contact-details">
{details}    </div>
    <button class="btn btn-primary">{cta}</button>
  </div>
</section>"#,
        title = ctx.text(&copy.title),
        description = ctx.text(&copy.description),
        cta = ctx.cta.primary,
    );

    let css = format!(
        r"{shell}

.contact-container {{
  text-align: center;
}}

.contact-description {{
  max-width: 560px;
  margin: 0 auto {lg};
  color: #6b7280;
}}

.contact-details {{
  display: flex;
  justify-content: center;
  flex-wrap: wrap;
  gap: {md};
  margin-bottom: {lg};
}}

.contact-item {{
  display: flex;
  flex-direction: column;
  gap: 0.25rem;
}}

.contact-item strong {{
  color: {primary};
}}

.contact-item span {{
  color: #6b7280;
  font-size: {size_sm};
}}
",
        shell = section_shell_css("contact", ctx),
        lg = ctx.tokens.spacing.lg,
        md = ctx.tokens.spacing.md,
        primary = ctx.tokens.colors.primary,
        size_sm = ctx.tokens.typography.scale.sm,
    );

    organism("contact", "Contact Section", html, css)
}

fn contact_form(ctx: &SectionContext<'_>) -> ComponentDefinition {
    let html = format!(
        r#"<form class="contact-form">
  <label>Name<input type="text" name="name" required /></label>
  <label>Email<input type="email" name="email" required /></label>
  <label>Message<textarea name="message" rows="5" required></textarea></label>
  <button type="submit" class="btn btn-primary">{cta}</button>
</form>"#,
        cta = ctx.cta.primary,
    );

    let css = format!(
        r".contact-form {{
  display: flex;
  flex-direction: column;
  gap: {sm};
  max-width: 480px;
  margin: 0 auto;
}}

.contact-form label {{
  display: flex;
  flex-direction: column;
  gap: 0.25rem;
  font-weight: {medium};
  color: {primary};
}}

.contact-form input,
.contact-form textarea {{
  padding: 0.625rem 0.75rem;
  border: 1px solid {neutral};
  border-radius: {radius_sm};
  font-family: '{body_font}', sans-serif;
  font-size: {size_base};
}}

.contact-form input:focus,
.contact-form textarea:focus {{
  outline: 2px solid {primary};
  outline-offset: 1px;
}}
",
        sm = ctx.tokens.spacing.sm,
        medium = ctx.tokens.typography.weights.medium,
        primary = ctx.tokens.colors.primary,
        neutral = ctx.tokens.colors.neutral,
        radius_sm = ctx.tokens.border_radius.sm,
        body_font = ctx.tokens.typography.font_pairings.body,
        size_base = ctx.tokens.typography.scale.base,
    );

    ComponentDefinition {
        id: "contact_form".to_string(),
        name: "Contact Form".to_string(),
        component_type: ComponentType::Molecule,
        html,
        css,
        variants: Vec::new(),
    }
}

/// Shared container/title/subtitle rules every non-hero section starts with.
fn section_shell_css(section: &str, ctx: &SectionContext<'_>) -> String {
    format!(
        r".{section} {{
  padding: {xl} 1rem;
}}

.{section}-container {{
  max-width: 1100px;
  margin: 0 auto;
}}

.{section}-title {{
  font-family: '{heading_font}', serif;
  font-size: {size_3xl};
  font-weight: {semibold};
  color: {primary};
  text-align: center;
  margin-bottom: 0.75rem;
}}

.{section}-subtitle {{
  text-align: center;
  color: #6b7280;
  margin-bottom: {lg};
}}",
        xl = ctx.tokens.spacing.xl,
        heading_font = ctx.tokens.typography.font_pairings.heading,
        size_3xl = ctx.tokens.typography.scale.xl3,
        semibold = ctx.tokens.typography.weights.semibold,
        primary = ctx.tokens.colors.primary,
        lg = ctx.tokens.spacing.lg,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::design_system::build_design_tokens;

    #[test]
    fn test_all_known_sections_generate() {
        let req = ProjectRequirements::new("landing", "tech").with_defaults();
        let tokens = build_design_tokens(&req);
        let ctx = SectionContext::new(&req, &tokens);
        for id in [
            "hero",
            "about",
            "services",
            "portfolio",
            "testimonials",
            "team",
            "pricing",
            "contact",
        ] {
            let component = section_component(id, &ctx).expect(id);
            assert_eq!(component.id, id);
            assert_eq!(component.component_type, ComponentType::Organism);
            assert!(!component.html.is_empty());
            assert!(!component.css.is_empty());
        }
    }

    #[test]
    fn test_unknown_section_is_skipped() {
        let req = ProjectRequirements::new("landing", "tech").with_defaults();
        let tokens = build_design_tokens(&req);
        let ctx = SectionContext::new(&req, &tokens);
        assert!(section_component("faq", &ctx).is_none());
        assert!(section_component("newsletter", &ctx).is_none());
    }

    #[test]
    fn test_hero_uses_strategy_ctas() {
        // brand awareness + B2C -> soft style, fast speed -> first options
        let req = ProjectRequirements::new("landing", "tech").with_defaults();
        let tokens = build_design_tokens(&req);
        let ctx = SectionContext::new(&req, &tokens);
        let hero = section_component("hero", &ctx).unwrap();
        assert!(hero.html.contains(">Learn More<"));
        assert!(hero.html.contains(">Contact Us<"));
    }

    #[test]
    fn test_sections_carry_personalized_copy() {
        let mut req = ProjectRequirements::new("landing", "tech").with_defaults();
        req.business_name = Some("Acme".to_string());
        let tokens = build_design_tokens(&req);
        let ctx = SectionContext::new(&req, &tokens);
        let about = section_component("about", &ctx).unwrap();
        // library copy says "About Our Technology"
        assert!(about.html.contains("About Acme's Technology"));
    }

    #[test]
    fn test_pricing_highlights_exactly_one_plan() {
        let req = ProjectRequirements::new("saas", "finance").with_defaults();
        let tokens = build_design_tokens(&req);
        let ctx = SectionContext::new(&req, &tokens);
        let pricing = section_component("pricing", &ctx).unwrap();
        assert_eq!(pricing.html.matches("plan-highlighted").count(), 1);
    }

    #[test]
    fn test_only_contact_form_is_interactive() {
        let req = ProjectRequirements::new("landing", "tech").with_defaults();
        let tokens = build_design_tokens(&req);
        let ctx = SectionContext::new(&req, &tokens);
        let form = interactive_component("contact_form", &ctx).unwrap();
        assert_eq!(form.component_type, ComponentType::Molecule);
        assert!(form.html.contains("type=\"email\""));
        for id in ["search", "newsletter", "live_chat", "analytics"] {
            assert!(interactive_component(id, &ctx).is_none(), "{id}");
        }
    }

    #[test]
    fn test_section_css_is_token_driven() {
        let req = ProjectRequirements::new("landing", "creative").with_defaults();
        let tokens = build_design_tokens(&req);
        let ctx = SectionContext::new(&req, &tokens);
        let services = section_component("services", &ctx).unwrap();
        assert!(services.css.contains(&tokens.colors.primary));
        assert!(services.css.contains(&tokens.typography.font_pairings.heading));
    }
}

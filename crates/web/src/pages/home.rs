// =============================================================================
// CA Journey Web - Home Page
// =============================================================================
// Table of Contents:
// 1. Main Component
// 2. Journey Stages
// 3. Experience Highlights
// 4. Call to Action
// =============================================================================

use leptos::prelude::*;

use crate::components::{HeroSection, Icon, Layout, SectionHeader};
use crate::state::use_site;

// -----------------------------------------------------------------------------
// 1. Main Component
// -----------------------------------------------------------------------------

/// Public landing page.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Layout class="page-home">
            <HeroSection />
            <JourneyStages />
            <ExperienceHighlights />
            <CallToAction />
        </Layout>
    }
}

// -----------------------------------------------------------------------------
// 2. Journey Stages
// -----------------------------------------------------------------------------

#[component]
fn JourneyStages() -> impl IntoView {
    let content = use_site().content;

    view! {
        <section class="home-section stages-section">
            <div class="container">
                <SectionHeader
                    title="The CA Journey Roadmap"
                    subtitle="Understand the complete path to becoming a Chartered Accountant, with insights at each stage of the journey"
                />
                <div class="stages-grid">
                    {content.journey_stages.iter().map(|stage| view! {
                        <div class="stage-card">
                            <div class="stage-icon">
                                <Icon name=stage.icon.name() />
                            </div>
                            <h3 class="stage-title">{stage.title.clone()}</h3>
                            <p class="stage-desc">{stage.description.clone()}</p>
                            <a href=stage.href.clone() class="text-link">
                                {stage.link_text.clone()}
                                <Icon name="arrow-right" class="link-arrow" />
                            </a>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

// -----------------------------------------------------------------------------
// 3. Experience Highlights
// -----------------------------------------------------------------------------

#[component]
fn ExperienceHighlights() -> impl IntoView {
    let content = use_site().content;

    view! {
        <section class="home-section highlights-section">
            <div class="container">
                <SectionHeader
                    title="Diverse Experience Areas"
                    subtitle="Explore different domains of work that chartered accountants encounter during articleship and beyond"
                />
                <div class="highlights-grid">
                    {content.home_highlights.iter().map(|area| view! {
                        <a href=area.href.clone() class="highlight-card">
                            <h3 class="highlight-title">{area.title.clone()}</h3>
                            <p class="highlight-desc">{area.description.clone()}</p>
                            <span class="read-more">
                                "Read more"
                                <Icon name="arrow-right" class="read-more-icon" />
                            </span>
                        </a>
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

// -----------------------------------------------------------------------------
// 4. Call to Action
// -----------------------------------------------------------------------------

#[component]
fn CallToAction() -> impl IntoView {
    view! {
        <section class="cta-band">
            <div class="container narrow">
                <h2 class="cta-title">"Ready to Excel in Your CA Journey?"</h2>
                <p class="cta-text">
                    "Join thousands of aspiring CAs who use our resources to navigate their path to success"
                </p>
                <a href="/resources" class="btn btn-accent">"Access Free Resources"</a>
            </div>
        </section>
    }
}

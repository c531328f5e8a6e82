// =============================================================================
// CA Journey Web - Journey Page
// =============================================================================
// Table of Contents:
// 1. Main Component
// 2. Timeline Item
// 3. Resource Card
// =============================================================================

use ca_journey_common::content::{ResourceLink, TimelineStep};
use leptos::prelude::*;

use crate::components::{Card, Icon, Layout, SectionHeader};
use crate::state::use_site;

// -----------------------------------------------------------------------------
// 1. Main Component
// -----------------------------------------------------------------------------

/// Step-by-step timeline from registration to membership.
#[component]
pub fn JourneyPage() -> impl IntoView {
    let content = use_site().content;

    view! {
        <Layout title="CA Journey" class="page-journey">
            <div class="container page-body">
                <SectionHeader
                    primary=true
                    title="The Chartered Accountancy Journey"
                    subtitle="A comprehensive guide to the path of becoming a Chartered Accountant in India, from registration to qualification"
                />

                <div class="timeline">
                    <div class="timeline-line"></div>
                    {content.timeline.iter().cloned().enumerate().map(|(index, step)| view! {
                        // Even steps sit left of the line, odd steps right
                        <TimelineItem step=step left=index % 2 == 0 />
                    }).collect::<Vec<_>>()}
                </div>

                <Card title="Additional Resources" class="resources-panel">
                    <div class="resources-grid">
                        {content.journey_resources.iter().cloned().map(|resource| view! {
                            <ResourceCard resource=resource />
                        }).collect::<Vec<_>>()}
                    </div>
                </Card>
            </div>
        </Layout>
    }
}

// -----------------------------------------------------------------------------
// 2. Timeline Item
// -----------------------------------------------------------------------------

#[component]
fn TimelineItem(step: TimelineStep, left: bool) -> impl IntoView {
    let row_class = if left { "timeline-item left" } else { "timeline-item right" };

    view! {
        <div class=row_class>
            <div class="timeline-content">
                <h3 class="timeline-title">{step.title}</h3>
                <p class="timeline-desc">{step.description}</p>
                <ul class="timeline-points">
                    {step.points.into_iter().map(|point| view! {
                        <li>
                            <Icon name="chevron-right" class="point-icon" />
                            <span>{point}</span>
                        </li>
                    }).collect::<Vec<_>>()}
                </ul>
                <a href=step.button_link class="text-link">
                    {step.button_text}
                    <Icon name="chevron-right" class="link-arrow" />
                </a>
            </div>

            <div class="timeline-marker">
                <div class="timeline-icon">
                    <Icon name=step.icon.name() />
                </div>
            </div>

            <div class="timeline-spacer"></div>
        </div>
    }
}

// -----------------------------------------------------------------------------
// 3. Resource Card
// -----------------------------------------------------------------------------

#[component]
fn ResourceCard(resource: ResourceLink) -> impl IntoView {
    let (target, rel, action) = if resource.external {
        ("_blank", "noopener noreferrer", "Visit Official Site")
    } else {
        ("_self", "", "Learn More")
    };

    view! {
        <a href=resource.href target=target rel=rel class="resource-card">
            <h3 class="resource-title">{resource.title}</h3>
            <p class="resource-desc">{resource.description}</p>
            <span class="text-link">
                {action}
                <Icon name="chevron-right" class="link-arrow" />
            </span>
        </a>
    }
}

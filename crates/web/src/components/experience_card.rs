// =============================================================================
// CA Journey Web - Experience Card
// =============================================================================

use ca_journey_common::ExperienceArea;
use leptos::prelude::*;

use crate::components::Icon;

/// Listing card with a category-colored accent strip and the area's tags.
#[component]
pub fn ExperienceCard(experience: ExperienceArea) -> impl IntoView {
    let accent = format!("card-accent {}", experience.category.accent_class());

    view! {
        <a href=experience.href class="experience-card">
            <div class=accent></div>
            <div class="experience-card-body">
                <span class="experience-category">{experience.category.label()}</span>
                <h3 class="experience-card-title">{experience.title}</h3>
                <p class="experience-card-desc">{experience.description}</p>
                <div class="card-tags">
                    {experience.tags.into_iter().map(|tag| view! {
                        <span class="card-tag">{tag}</span>
                    }).collect::<Vec<_>>()}
                </div>
                <div class="read-more">
                    "Read more"
                    <Icon name="arrow-right" class="read-more-icon" />
                </div>
            </div>
        </a>
    }
}

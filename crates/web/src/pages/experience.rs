// =============================================================================
// CA Journey Web - Experiences Pages
// =============================================================================
// Table of Contents:
// 1. Listing Page
// 2. Testimonials
// 3. Detail Page
// 4. Detailed Guide
// 5. Summary Fallback
// =============================================================================

use ca_journey_common::content::{ExperienceDetail, ResourceKind};
use ca_journey_common::filter::filter_options;
use ca_journey_common::{ExperienceArea, ExperienceQuery};
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate, use_params_map, use_query_map};
use leptos_router::NavigateOptions;

use crate::components::{Card, ExperienceCard, Icon, Layout, SectionHeader};
use crate::pages::not_found::NotFoundPage;
use crate::state::use_site;

// -----------------------------------------------------------------------------
// 1. Listing Page
// -----------------------------------------------------------------------------

/// Experiences directory with search and category filter.
///
/// The filter lives in a local signal seeded from `?q=` and `?category=`;
/// every change is written back to the address bar so filtered views can
/// be bookmarked.
#[component]
pub fn ExperiencesPage() -> impl IntoView {
    let content = use_site().content;

    let query_map = use_query_map();
    let read_params = move || {
        query_map.with(|params| {
            ExperienceQuery::from_params(
                params.get("q").as_deref(),
                params.get("category").as_deref(),
            )
        })
    };
    let query = RwSignal::new(untrack(read_params));

    // Links into the listing while it is mounted (nav, footer) change the URL only
    Effect::new(move |_| {
        let from_url = read_params();
        if query.with_untracked(|q| *q != from_url) {
            query.set(from_url);
        }
    });

    // Mirror filter state into the URL
    let navigate = use_navigate();
    let search = use_location().search;
    Effect::new(move |_| {
        let query_string = query.with(|q| q.to_query_string());
        let current = search.get_untracked();
        let current = if current.is_empty() || current.starts_with('?') {
            current
        } else {
            format!("?{}", current)
        };
        if query_string != current {
            navigate(
                &format!("/experiences{}", query_string),
                NavigateOptions {
                    replace: true,
                    scroll: false,
                    ..Default::default()
                },
            );
        }
    });

    let all_experiences = content.experiences.clone();
    let results = Memo::new(move |_| query.with(|q| q.apply(&all_experiences)));

    let clear_filters = move |_| {
        log::debug!("Clearing experience filters");
        query.update(|q| q.reset());
    };

    view! {
        <Layout title="Experiences" class="page-experiences">
            <div class="container page-body">
                <SectionHeader
                    primary=true
                    title="CA Articleship Experiences"
                    subtitle="Explore various domains and specializations you may encounter during your chartered accountancy journey"
                />

                // Search and Filters
                <section class="card experiences-filters">
                    <div class="search-bar">
                        <Icon name="search" class="search-icon" />
                        <input
                            type="text"
                            placeholder="Search experiences..."
                            class="search-input"
                            prop:value=move || query.with(|q| q.text.clone())
                            on:input=move |e| {
                                let text = event_target_value(&e);
                                query.update(|q| q.text = text);
                            }
                        />
                    </div>

                    <div class="category-filters">
                        {filter_options().into_iter().map(|option| {
                            let filter = option.filter;
                            view! {
                                <button
                                    class=move || {
                                        if query.with(|q| q.category == filter) {
                                            "filter-btn active"
                                        } else {
                                            "filter-btn"
                                        }
                                    }
                                    on:click=move |_| query.update(|q| q.category = filter)
                                >
                                    {option.label}
                                </button>
                            }
                        }).collect::<Vec<_>>()}
                    </div>
                </section>

                // Experience Grid
                <section class="experiences-grid">
                    {move || {
                        let matches = results.get();
                        if matches.is_empty() {
                            view! {
                                <div class="no-results">
                                    <p>"No experiences found matching your search criteria."</p>
                                    <button class="text-button" on:click=clear_filters>
                                        "Clear filters"
                                    </button>
                                </div>
                            }.into_any()
                        } else {
                            matches.into_iter().map(|experience| view! {
                                <ExperienceCard experience=experience />
                            }).collect::<Vec<_>>().into_any()
                        }
                    }}
                </section>

                <Testimonials />

                // Call to Action
                <section class="listing-cta">
                    <h2 class="section-title">"Can't Find What You're Looking For?"</h2>
                    <p class="section-subtitle">"Reach out to us and we'll help guide you in the right direction"</p>
                    <a href="/about#contact" class="btn btn-primary">"Contact Us"</a>
                </section>
            </div>
        </Layout>
    }
}

// -----------------------------------------------------------------------------
// 2. Testimonials
// -----------------------------------------------------------------------------

#[component]
fn Testimonials() -> impl IntoView {
    let content = use_site().content;

    view! {
        <Card title="What CA Students Are Saying" class="testimonials">
            <div class="testimonials-grid">
                {content.testimonials.iter().map(|t| view! {
                    <figure class="testimonial">
                        <blockquote>"\u{201c}" {t.quote.clone()} "\u{201d}"</blockquote>
                        <figcaption class="testimonial-author">
                            <span class="avatar">{t.initial()}</span>
                            <span>
                                <span class="author-name">{t.name.clone()}</span>
                                <span class="author-position">{t.position.clone()}</span>
                            </span>
                        </figcaption>
                    </figure>
                }).collect::<Vec<_>>()}
            </div>
        </Card>
    }
}

// -----------------------------------------------------------------------------
// 3. Detail Page
// -----------------------------------------------------------------------------

/// Standalone experience page - accessed via /experiences/:slug
#[component]
pub fn ExperienceDetailPage() -> impl IntoView {
    let content = use_site().content;
    let params = use_params_map();
    let slug = move || params.read().get("slug").unwrap_or_default();

    move || {
        let slug = slug();

        let Some(area) = content.experience_by_slug(&slug).cloned() else {
            log::warn!("Unknown experience area: {}", slug);
            return view! { <NotFoundPage /> }.into_any();
        };

        match content.detail_for(&slug).cloned() {
            Some(detail) => view! {
                <Layout title=area.title.clone() class="page-experience-detail">
                    <DetailedGuide area=area detail=detail />
                </Layout>
            }.into_any(),
            None => view! {
                <Layout title=area.title.clone() class="page-experience-detail">
                    <GuideSummary area=area />
                </Layout>
            }.into_any(),
        }
    }
}

// -----------------------------------------------------------------------------
// 4. Detailed Guide
// -----------------------------------------------------------------------------

#[component]
fn DetailedGuide(area: ExperienceArea, detail: ExperienceDetail) -> impl IntoView {
    let accent = area.category.accent_class();

    view! {
        <div class="container narrow page-body">
            <header class="detail-header">
                <div class=format!("detail-accent {}", accent)></div>
                <h1 class="page-title">{detail.heading}</h1>
                <div class="card-tags">
                    {area.tags.into_iter().map(|tag| view! {
                        <span class=format!("card-tag tinted {}", accent)>{tag}</span>
                    }).collect::<Vec<_>>()}
                </div>
                <p class="detail-lead">{detail.lead}</p>
            </header>

            <Card title="Overview">
                {detail.overview.into_iter().map(|p| view! { <p class="detail-text">{p}</p> }).collect::<Vec<_>>()}
                <ul class="check-list">
                    {detail.responsibilities.into_iter().map(|item| view! {
                        <li>
                            <Icon name="check-circle" class="check-icon" />
                            <span>{item}</span>
                        </li>
                    }).collect::<Vec<_>>()}
                </ul>
            </Card>

            <Card title=detail.day_in_life_title>
                <div class="day-timeline">
                    {detail.day_in_life.into_iter().map(|task| view! {
                        <div class="day-task">
                            <div class="day-marker">
                                <Icon name="clock" />
                            </div>
                            <div class="day-body">
                                <h3 class="day-time">{task.time}</h3>
                                <p class="detail-text">{task.description}</p>
                                {task.note.map(|note| view! {
                                    <div class="day-note">
                                        <Icon name="alert-circle" class="note-icon" />
                                        <p>{note}</p>
                                    </div>
                                })}
                            </div>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>
            </Card>

            <Card title="Practical Insights">
                <div class="insights-grid">
                    {detail.insights.into_iter().map(|insight| view! {
                        <div class="insight-card">
                            <div class="insight-head">
                                <Icon name="book-open" class="insight-icon" />
                                <h3>{insight.title}</h3>
                            </div>
                            <p class="detail-text">{insight.description}</p>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>
            </Card>

            <Card title="Common Challenges">
                {detail.challenges.into_iter().map(|challenge| view! {
                    <div class="challenge">
                        <h3 class="challenge-title">
                            <Icon name="alert-circle" class="challenge-icon" />
                            {challenge.title}
                        </h3>
                        <p class="detail-text">{challenge.description}</p>
                        <div class="challenge-solution">
                            <h4>"How to Handle:"</h4>
                            <p>{challenge.solution}</p>
                        </div>
                    </div>
                }).collect::<Vec<_>>()}
            </Card>

            <Card title="Helpful Resources">
                <div class="resources-grid">
                    {detail.resources.into_iter().map(|resource| {
                        let icon = match resource.kind {
                            ResourceKind::Document => "file-text",
                            ResourceKind::Download => "download",
                        };
                        view! {
                            <a href=resource.href target="_blank" rel="noopener noreferrer" class="guide-resource">
                                <Icon name=icon class="resource-icon" />
                                <span>
                                    <span class="resource-title">{resource.title}</span>
                                    <span class="resource-desc">{resource.description}</span>
                                </span>
                            </a>
                        }
                    }).collect::<Vec<_>>()}
                </div>
            </Card>

            <div class="related-band">
                <div>
                    <h3>"Explore More Experiences"</h3>
                    <p>"Continue your learning journey with related experiences"</p>
                </div>
                <div class="related-links">
                    {detail.related.into_iter().map(|link| view! {
                        <a href=link.href class="related-link">{link.label}</a>
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </div>
    }
}

// -----------------------------------------------------------------------------
// 5. Summary Fallback
// -----------------------------------------------------------------------------

/// Shown for areas that are listed but have no long-form guide yet.
#[component]
fn GuideSummary(area: ExperienceArea) -> impl IntoView {
    let accent = area.category.accent_class();

    view! {
        <div class="container narrow page-body">
            <header class="detail-header">
                <div class=format!("detail-accent {}", accent)></div>
                <span class="experience-category">{area.category.label()}</span>
                <h1 class="page-title">{area.title}</h1>
                <div class="card-tags">
                    {area.tags.into_iter().map(|tag| view! {
                        <span class=format!("card-tag tinted {}", accent)>{tag}</span>
                    }).collect::<Vec<_>>()}
                </div>
                <p class="detail-lead">{area.description}</p>
            </header>

            <Card title="Guide in Progress">
                <p class="detail-text">
                    "A detailed walkthrough of this area is being written by practicing CAs. "
                    "Have you worked in it during your articleship? Share what you learned."
                </p>
                <div class="related-links">
                    <a href="/about#contact" class="btn btn-primary">"Share Your Experience"</a>
                    <a href="/experiences" class="related-link">"Back to all experiences"</a>
                </div>
            </Card>
        </div>
    }
}

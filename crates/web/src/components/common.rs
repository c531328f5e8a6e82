// =============================================================================
// CA Journey Web - Common UI Components
// =============================================================================
// Table of Contents:
// 1. Icon
// 2. Section Header
// 3. Card
// 4. Status Banner
// =============================================================================

use ca_journey_common::FormStatus;
use leptos::prelude::*;

use crate::utils::icon_src;

// -----------------------------------------------------------------------------
// 1. Icon
// -----------------------------------------------------------------------------

/// Decorative SVG icon from `/assets/icons`.
#[component]
pub fn Icon(
    #[prop(into)] name: String,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let class = if class.is_empty() { "icon".to_string() } else { format!("icon {}", class) };

    view! {
        <img src=icon_src(&name) alt="" aria-hidden="true" class=class />
    }
}

// -----------------------------------------------------------------------------
// 2. Section Header
// -----------------------------------------------------------------------------

/// Centered heading with an optional lead paragraph.
#[component]
pub fn SectionHeader(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
    /// Render as the page's `<h1>`
    #[prop(optional)] primary: bool,
) -> impl IntoView {
    let heading = if primary {
        view! { <h1 class="page-title">{title}</h1> }.into_any()
    } else {
        view! { <h2 class="section-title">{title}</h2> }.into_any()
    };

    view! {
        <header class="section-header">
            {heading}
            {subtitle.map(|s| view! { <p class="section-subtitle">{s}</p> })}
        </header>
    }
}

// -----------------------------------------------------------------------------
// 3. Card
// -----------------------------------------------------------------------------

/// White panel wrapping a page section.
#[component]
pub fn Card(
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] id: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <section class=format!("card {}", class) id=id>
            {title.map(|t| view! { <h2 class="card-title">{t}</h2> })}
            {children()}
        </section>
    }
}

// -----------------------------------------------------------------------------
// 4. Status Banner
// -----------------------------------------------------------------------------

/// Confirmation or failure banner under a form. Renders nothing for `None`.
#[component]
pub fn StatusBanner(#[prop(into)] status: Signal<FormStatus>) -> impl IntoView {
    move || {
        let current = status.get();
        current.message().map(|message| {
            let (class, icon) = match current {
                FormStatus::Error => ("status-banner error", "alert-circle"),
                _ => ("status-banner success", "check-circle"),
            };
            view! {
                <div class=class role="status">
                    <Icon name=icon class="status-icon" />
                    {message}
                </div>
            }
        })
    }
}

// =============================================================================
// CA Journey Web - Layout Components
// =============================================================================
// Table of Contents:
// 1. Layout (Page Shell)
// =============================================================================

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_location;

use crate::components::{CentralNav, Footer};
use crate::state::use_site;
use crate::utils::{anchor_id, scroll_to_anchor, scroll_to_top};

// -----------------------------------------------------------------------------
// 1. Layout (Page Shell)
// -----------------------------------------------------------------------------

/// Page shell: navigation bar, page body and footer.
///
/// `title` sets the browser tab title; an empty title shows the site name.
#[component]
pub fn Layout(
    #[prop(optional, into)] title: String,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let site = use_site();
    let tab_title = site.config.page_title(&title);

    // Pages mount fresh on every route change. A `#fragment` target only
    // exists once this view is in the DOM, so jump to it on the next frame.
    let hash = use_location().hash.get_untracked();
    match anchor_id(&hash).map(str::to_string) {
        Some(id) => request_animation_frame(move || {
            if !scroll_to_anchor(&id) {
                log::debug!("No element for anchor #{}", id);
            }
        }),
        None => scroll_to_top(),
    }

    view! {
        <Title text=tab_title />
        <div class=format!("page {}", class)>
            <CentralNav />
            <main class="page-main">
                {children()}
            </main>
            <Footer />
        </div>
    }
}

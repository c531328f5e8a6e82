// =============================================================================
// CA Journey Web - Main App Component
// =============================================================================
// Table of Contents:
// 1. Imports
// 2. App Component
// 3. Router Configuration
// =============================================================================

use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::pages::{
    about::AboutPage,
    experience::{ExperienceDetailPage, ExperiencesPage},
    home::HomePage,
    journey::JourneyPage,
    not_found::NotFoundPage,
};
use crate::state::SiteState;

// -----------------------------------------------------------------------------
// 2. App Component
// -----------------------------------------------------------------------------

/// Root application component with routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Content and config are built once and shared read-only
    provide_context(SiteState::new());

    // -------------------------------------------------------------------------
    // 3. Router Configuration
    // -------------------------------------------------------------------------
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/journey") view=JourneyPage />
                <Route path=path!("/experiences") view=ExperiencesPage />
                <Route path=path!("/experiences/:slug") view=ExperienceDetailPage />
                <Route path=path!("/about") view=AboutPage />
            </Routes>
        </Router>
    }
}

// =============================================================================
// CA Journey Web - 404 Not Found Page
// =============================================================================

use leptos::prelude::*;

use crate::components::Layout;

/// 404 Not Found page.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Layout title="Page Not Found" class="page-not-found">
            <div class="not-found-content">
                <span class="not-found-code">"404"</span>
                <h1>"Page Not Found"</h1>
                <p>"The page you're looking for doesn't exist or has been moved."</p>
                <div class="not-found-actions">
                    <a href="/" class="btn btn-primary">"Go Home"</a>
                    <a href="/experiences" class="btn btn-outline">"Browse Experiences"</a>
                </div>
            </div>
        </Layout>
    }
}

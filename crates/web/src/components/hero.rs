// =============================================================================
// CA Journey Web - Hero Section
// =============================================================================

use leptos::prelude::*;

/// Full-height landing banner with the two primary calls to action.
#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-grid-bg"></div>
            <div class="hero-blobs">
                <div class="hero-blob blob-1"></div>
                <div class="hero-blob blob-2"></div>
                <div class="hero-blob blob-3"></div>
            </div>

            <div class="hero-content">
                <h1 class="hero-title fade-up">
                    "Your Complete Guide to the "
                    <span class="hero-highlight">"CA Journey"</span>
                </h1>
                <p class="hero-subtitle fade-up delay-1">
                    "From foundation to articleship and beyond - all the experiences, insights, and resources you need to succeed as a Chartered Accountant"
                </p>
                <div class="hero-actions fade-up delay-2">
                    <a href="/journey" class="btn btn-accent">"Explore CA Journey"</a>
                    <a href="/experiences" class="btn btn-outline-light">"Browse Experiences"</a>
                </div>
            </div>

            <div class="hero-scroll-indicator" aria-hidden="true">
                <svg width="36" height="36" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                    <path d="M12 5v14M5 12l7 7 7-7"></path>
                </svg>
            </div>
        </section>
    }
}

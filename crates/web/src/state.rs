// =============================================================================
// CA Journey Web - Global Site State
// =============================================================================
// Table of Contents:
// 1. Site State
// 2. Accessors
// =============================================================================

use std::sync::Arc;

use ca_journey_common::{SiteConfig, SiteContent};
use leptos::prelude::*;

// -----------------------------------------------------------------------------
// 1. Site State
// -----------------------------------------------------------------------------

/// Read-only content and configuration provided via Leptos context.
#[derive(Clone)]
pub struct SiteState {
    /// Built-in catalog, shared by every page.
    pub content: Arc<SiteContent>,

    /// Embedded configuration with the build environment applied.
    pub config: SiteConfig,
}

impl SiteState {
    /// Create the site state, validating the built-in catalog once.
    pub fn new() -> Self {
        let content = SiteContent::builtin();
        if let Err(e) = content.validate() {
            log::error!("Site content failed validation: {}", e);
        }

        let config = SiteConfig::for_build();
        log::debug!(
            "Site state ready ({:?}, {} experience areas)",
            config.environment,
            content.experiences.len()
        );

        Self {
            content: Arc::new(content),
            config,
        }
    }
}

impl Default for SiteState {
    fn default() -> Self {
        Self::new()
    }
}

// -----------------------------------------------------------------------------
// 2. Accessors
// -----------------------------------------------------------------------------

/// Shorthand for `expect_context::<SiteState>()`.
pub fn use_site() -> SiteState {
    expect_context::<SiteState>()
}

// =============================================================================
// CA Journey Web - Utility Functions
// =============================================================================
// Table of Contents:
// 1. DOM Utilities
// 2. Format Utilities
// =============================================================================

use ca_journey_common::Environment;
use chrono::Datelike;

// -----------------------------------------------------------------------------
// 1. DOM Utilities
// -----------------------------------------------------------------------------

/// Vertical scroll offset of the page, 0 when there is no window.
pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Jump back to the top of the page after a client-side navigation.
pub fn scroll_to_top() {
    if let Some(win) = web_sys::window() {
        win.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Element id named by a location hash (`#contact` -> `contact`).
pub fn anchor_id(hash: &str) -> Option<&str> {
    let id = hash.trim_start_matches('#');
    (!id.is_empty()).then_some(id)
}

/// Scroll the element with `id` into view. Returns `false` if it is not in the DOM.
pub fn scroll_to_anchor(id: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .map(|el| el.scroll_into_view())
        .is_some()
}

// -----------------------------------------------------------------------------
// 2. Format Utilities
// -----------------------------------------------------------------------------

/// Console log level for the build environment.
pub fn log_level() -> log::Level {
    if Environment::from_build().is_production() {
        log::Level::Info
    } else {
        log::Level::Debug
    }
}

/// Path of a bundled SVG icon.
pub fn icon_src(name: &str) -> String {
    format!("/assets/icons/{}.svg", name)
}

/// Current calendar year for the copyright line.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_src_points_at_bundled_assets() {
        assert_eq!(icon_src("book-open"), "/assets/icons/book-open.svg");
    }

    #[test]
    fn anchor_id_strips_hash() {
        assert_eq!(anchor_id("#contact"), Some("contact"));
        assert_eq!(anchor_id("contact"), Some("contact"));
        assert_eq!(anchor_id("#"), None);
        assert_eq!(anchor_id(""), None);
    }

    #[test]
    fn current_year_is_plausible() {
        assert!(current_year() >= 2024);
    }
}

// =============================================================================
// CA Journey Web - Central Navigation Component
// =============================================================================
// Navigation bar shown on every page, built from the site menu.
// Transparent over the hero, solid once the page scrolls.
// Mobile-responsive with hamburger menu and slide-out drawer
// =============================================================================

use ca_journey_common::MenuItem;
use leptos::ev;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::Icon;
use crate::state::use_site;
use crate::utils::scroll_y;

/// Central navigation bar component.
#[component]
pub fn CentralNav() -> impl IntoView {
    let site = use_site();
    let site_name = site.config.site_name.clone();
    let threshold = site.config.nav_scroll_threshold;
    let menu = site.content.menu.clone();

    let pathname = use_location().pathname;

    // Mobile menu state
    let menu_open = RwSignal::new(false);
    // Label of the expanded submenu in the drawer
    let open_submenu = RwSignal::new(Option::<String>::None);

    let scrolled = RwSignal::new(scroll_y() > threshold);
    let scroll_handle = window_event_listener(ev::scroll, move |_| {
        scrolled.set(scroll_y() > threshold);
    });
    on_cleanup(move || scroll_handle.remove());

    let close_menu = move || {
        menu_open.set(false);
        open_submenu.set(None);
    };

    let nav_class = move || {
        if scrolled.get() || menu_open.get() {
            "central-nav scrolled"
        } else {
            "central-nav"
        }
    };

    let desktop_links = menu
        .iter()
        .cloned()
        .map(|item| view! { <DesktopLink item=item pathname=pathname /> })
        .collect::<Vec<_>>();

    let drawer_links = menu
        .into_iter()
        .map(|item| {
            let item_for_class = item.clone();
            let link_class = move || {
                if item_for_class.is_active(&pathname.get()) {
                    "mobile-nav-link active"
                } else {
                    "mobile-nav-link"
                }
            };

            if item.has_submenu() {
                let label = item.label.clone();
                let label_for_toggle = item.label.clone();
                let is_open = move || open_submenu.get().as_deref() == Some(label.as_str());
                let is_open_for_list = is_open.clone();

                view! {
                    <div class="drawer-group">
                        <button
                            class=link_class
                            aria-expanded=move || is_open().to_string()
                            on:click=move |_| toggle_submenu(open_submenu, &label_for_toggle)
                        >
                            {item.label.clone()}
                            <Icon name="chevron-down" class="drawer-chevron" />
                        </button>
                        <div class=move || if is_open_for_list() { "drawer-submenu open" } else { "drawer-submenu" }>
                            <a href=item.href.clone() class="drawer-sublink" on:click=move |_| close_menu()>
                                "All " {item.label.clone()}
                            </a>
                            {item.submenu.into_iter().map(|sub| view! {
                                <a href=sub.href class="drawer-sublink" on:click=move |_| close_menu()>
                                    {sub.label}
                                </a>
                            }).collect::<Vec<_>>()}
                        </div>
                    </div>
                }.into_any()
            } else {
                view! {
                    <a href=item.href class=link_class on:click=move |_| close_menu()>
                        {item.label}
                    </a>
                }.into_any()
            }
        })
        .collect::<Vec<_>>();

    view! {
        <nav class=nav_class>
            // Logo (always visible)
            <a href="/" class="nav-logo" on:click=move |_| close_menu()>
                <span class="nav-logo-mark">"CA"</span>
                <span class="nav-logo-text">{site_name}</span>
            </a>

            // Desktop nav links (hidden on mobile)
            <div class="nav-links desktop-only">
                {desktop_links}
            </div>

            // Hamburger button (mobile only)
            <button
                class="hamburger-btn mobile-only"
                aria-label="Toggle menu"
                aria-expanded=move || menu_open.get().to_string()
                on:click=move |_| menu_open.update(|v| *v = !*v)
            >
                <span class=move || if menu_open.get() { "hamburger-line open line-1" } else { "hamburger-line line-1" }></span>
                <span class=move || if menu_open.get() { "hamburger-line open line-2" } else { "hamburger-line line-2" }></span>
                <span class=move || if menu_open.get() { "hamburger-line open line-3" } else { "hamburger-line line-3" }></span>
            </button>

            // Mobile backdrop (closes menu on tap)
            <div
                class=move || if menu_open.get() { "mobile-backdrop visible" } else { "mobile-backdrop" }
                on:click=move |_| close_menu()
            ></div>

            // Mobile drawer
            <div class=move || if menu_open.get() { "mobile-drawer open" } else { "mobile-drawer" }>
                <nav class="drawer-nav">
                    {drawer_links}
                </nav>
            </div>
        </nav>
    }
}

/// Top-level desktop link, with a hover dropdown when the item has a submenu.
#[component]
fn DesktopLink(item: MenuItem, pathname: Memo<String>) -> impl IntoView {
    let item_for_class = item.clone();
    let link_class = move || {
        if item_for_class.is_active(&pathname.get()) {
            "central-nav-link active"
        } else {
            "central-nav-link"
        }
    };

    if !item.has_submenu() {
        return view! { <a href=item.href class=link_class>{item.label}</a> }.into_any();
    }

    view! {
        <div class="nav-dropdown">
            <a href=item.href class=link_class>
                {item.label}
                <Icon name="chevron-down" class="dropdown-chevron" />
            </a>
            <div class="nav-dropdown-menu">
                {item.submenu.into_iter().map(|sub| view! {
                    <a href=sub.href class="dropdown-item">{sub.label}</a>
                }).collect::<Vec<_>>()}
            </div>
        </div>
    }
    .into_any()
}

/// Open `label`'s submenu, or close it if it is already open.
fn toggle_submenu(open_submenu: RwSignal<Option<String>>, label: &str) {
    open_submenu.update(|current| {
        *current = if current.as_deref() == Some(label) {
            None
        } else {
            Some(label.to_string())
        };
    });
}

// =============================================================================
// CA Journey Web - Footer Component
// =============================================================================
// Global footer shown on all pages
// =============================================================================

use leptos::prelude::*;

use crate::components::Icon;
use crate::state::use_site;
use crate::utils::current_year;

// -----------------------------------------------------------------------------
// Footer Component
// -----------------------------------------------------------------------------

/// Site footer: brand, link columns and contact details.
#[component]
pub fn Footer() -> impl IntoView {
    let site = use_site();
    let content = site.content.clone();
    let contact = content.contact.clone();
    let copyright = format!(
        "© {} {}. All rights reserved.",
        current_year(),
        site.config.copyright_holder
    );

    view! {
        <footer class="site-footer">
            <div class="footer-main">
                // Brand Column
                <div class="footer-brand-col">
                    <h3 class="footer-brand">{site.config.site_name.clone()}</h3>
                    <p class="footer-tagline">{site.config.tagline.clone()}</p>
                    <div class="footer-social-row">
                        {content.social.iter().map(|link| view! {
                            <a href=link.href.clone() class="social-link" title=link.network.clone()>
                                <Icon name=link.network.clone() />
                            </a>
                        }).collect::<Vec<_>>()}
                    </div>
                </div>

                // Link Columns
                {content.footer_columns.iter().map(|column| view! {
                    <div class="footer-link-col">
                        <h5 class="footer-col-title">{column.title.clone()}</h5>
                        {column.links.iter().map(|link| view! {
                            <a href=link.href.clone() class="footer-link">{link.label.clone()}</a>
                        }).collect::<Vec<_>>()}
                    </div>
                }).collect::<Vec<_>>()}

                // Contact Column
                <div class="footer-link-col">
                    <h5 class="footer-col-title">"Contact Us"</h5>
                    <div class="footer-contact-row">
                        <Icon name="map-pin" />
                        <span>{contact.address}</span>
                    </div>
                    <div class="footer-contact-row">
                        <Icon name="phone" />
                        <span>{contact.phone}</span>
                    </div>
                    <div class="footer-contact-row">
                        <Icon name="mail" />
                        <span>{contact.email}</span>
                    </div>
                </div>
            </div>

            <div class="footer-divider"></div>

            <div class="footer-bottom-bar">
                <p class="footer-copyright">{copyright}</p>
            </div>
        </footer>
    }
}

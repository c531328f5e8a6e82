//! Menu tree, footer columns and social links.

use super::{FooterColumn, MenuItem, MenuLink, SocialLink};

fn experience_shortcuts() -> Vec<MenuLink> {
    vec![
        MenuLink::new("GST", "/experiences/gst"),
        MenuLink::new("Bank Audit", "/experiences/bank-audit"),
        MenuLink::new("Industry Audit", "/experiences/industry-audit"),
        MenuLink::new("Tax", "/experiences/tax"),
    ]
}

pub(super) fn menu() -> Vec<MenuItem> {
    vec![
        MenuItem::link("Home", "/"),
        MenuItem::link("CA Journey", "/journey"),
        MenuItem::with_submenu("Experiences", "/experiences", experience_shortcuts()),
        MenuItem::link("Resources", "/resources"),
        MenuItem::link("About", "/about"),
    ]
}

pub(super) fn footer_columns() -> Vec<FooterColumn> {
    let quick_links = menu()
        .into_iter()
        .map(|item| MenuLink {
            label: item.label,
            href: item.href,
        })
        .collect();

    vec![
        FooterColumn {
            title: "Quick Links".to_string(),
            links: quick_links,
        },
        FooterColumn {
            title: "Experience Areas".to_string(),
            links: experience_shortcuts(),
        },
    ]
}

pub(super) fn social_links() -> Vec<SocialLink> {
    ["linkedin", "instagram", "twitter", "facebook"]
        .into_iter()
        .map(|network| SocialLink {
            network: network.to_string(),
            href: "#".to_string(),
        })
        .collect()
}

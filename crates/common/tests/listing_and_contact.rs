//! Listing filter and contact form behaviour against the built-in catalog.

use ca_journey_common::content::Category;
use ca_journey_common::filter::filter_options;
use ca_journey_common::{
    CategoryFilter, ContactField, ContactForm, ExperienceArea, ExperienceQuery, FormStatus,
    SiteConfig, SiteContent,
};

fn titles(areas: &[ExperienceArea]) -> Vec<String> {
    areas.iter().map(|a| a.title.clone()).collect()
}

fn is_subsequence(sub: &[ExperienceArea], full: &[ExperienceArea]) -> bool {
    let mut rest = full.iter();
    sub.iter().all(|item| rest.any(|candidate| candidate == item))
}

fn sample_queries() -> Vec<ExperienceQuery> {
    let texts = ["", "gst", "AUDIT", "tax", "finance", "  ", "zzz-no-match", "&"];
    let mut queries = Vec::new();
    for text in texts {
        for option in filter_options() {
            queries.push(ExperienceQuery::new(text, option.filter));
        }
    }
    queries
}

#[test]
fn filtered_listing_preserves_order() {
    let content = SiteContent::builtin();
    for query in sample_queries() {
        let result = query.apply(&content.experiences);
        assert!(
            is_subsequence(&result, &content.experiences),
            "order broken for {:?}",
            query
        );
    }
}

#[test]
fn filtering_is_idempotent() {
    let content = SiteContent::builtin();
    for query in sample_queries() {
        let once = query.apply(&content.experiences);
        let twice = query.apply(&once);
        assert_eq!(once, twice);
        assert_eq!(once, query.apply(&content.experiences));
    }
}

#[test]
fn clearing_filters_restores_full_list() {
    let content = SiteContent::builtin();
    let mut query = ExperienceQuery::new("zzz", Category::Finance.into());
    assert!(query.apply(&content.experiences).is_empty());

    query.reset();
    assert_eq!(query.category, CategoryFilter::All);
    assert_eq!(query.apply(&content.experiences), content.experiences);
}

#[test]
fn gst_search_finds_single_entry() {
    let content = SiteContent::builtin();
    let query = ExperienceQuery::new("GST", CategoryFilter::All);
    assert_eq!(
        titles(&query.apply(&content.experiences)),
        vec!["GST Compliance & Filing"]
    );
}

#[test]
fn finance_category_in_declared_order() {
    let content = SiteContent::builtin();
    let query = ExperienceQuery::new("", CategoryFilter::parse("finance"));
    assert_eq!(
        titles(&query.apply(&content.experiences)),
        vec!["Financial Management", "Corporate Finance & Valuations"]
    );
}

#[test]
fn unmatched_search_is_empty() {
    let content = SiteContent::builtin();
    let query = ExperienceQuery::new("zzz-no-match", CategoryFilter::All);
    assert!(query.apply(&content.experiences).is_empty());
    assert!(!query.is_default());
}

#[test]
fn query_survives_url_round_trip() {
    let query = ExperienceQuery::new("tax", Category::Taxation.into());
    let qs = query.to_query_string();
    assert_eq!(qs, "?q=tax&category=taxation");
    assert_eq!(ExperienceQuery::from_params(Some("tax"), Some("taxation")), query);
}

#[test]
fn contact_ticket_expiry_clears_form() {
    // The about page's reset timer waits this long before expiring the ticket
    assert_eq!(SiteConfig::for_build().contact_reset_ms, 3000);

    let mut form = ContactForm::new();
    form.set_field(ContactField::Name, "Kabir Mehta");
    form.set_field(ContactField::Email, "kabir@example.com");
    form.set_field(ContactField::Subject, "Experience Sharing");
    form.set_field(ContactField::Message, "I audited a cooperative bank last year.");

    let ticket = form.submit().expect("all fields populated");
    assert_eq!(form.status(), FormStatus::Success);

    assert!(form.expire(ticket));
    assert_eq!(form.status(), FormStatus::None);
    for field in ContactField::ALL {
        assert_eq!(form.field(field), "");
    }
}

#[test]
fn discarded_view_leaves_state_alone() {
    let mut form = ContactForm::new();
    for field in ContactField::ALL {
        form.set_field(field, "x");
    }
    let ticket = form.submit().unwrap();
    form.cancel_pending();
    assert!(!form.expire(ticket));
    assert_eq!(form.status(), FormStatus::Success);
}

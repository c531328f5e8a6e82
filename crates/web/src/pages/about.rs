// =============================================================================
// CA Journey Web - About Page
// =============================================================================
// Table of Contents:
// 1. Main Component
// 2. Mission & Values
// 3. Team
// 4. Contact Section
// 5. FAQ
// =============================================================================

use ca_journey_common::contact::SUBJECT_OPTIONS;
use ca_journey_common::{ContactField, ContactForm};
use gloo_timers::future::TimeoutFuture;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{
    Card, Icon, Layout, SectionHeader, Select, SelectOption, StatusBanner, TextArea, TextInput,
};
use crate::state::use_site;

// -----------------------------------------------------------------------------
// 1. Main Component
// -----------------------------------------------------------------------------

/// About page - mission, team, contact form and FAQ.
#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Layout title="About" class="page-about">
            <div class="container page-body">
                <SectionHeader
                    primary=true
                    title="About CA Journey"
                    subtitle="Your comprehensive guide to navigating the Chartered Accountancy journey in India"
                />
                <MissionSection />
                <TeamSection />
                <ContactSection />
                <FaqSection />
            </div>
        </Layout>
    }
}

// -----------------------------------------------------------------------------
// 2. Mission & Values
// -----------------------------------------------------------------------------

#[component]
fn MissionSection() -> impl IntoView {
    let content = use_site().content;

    view! {
        <Card class="mission-card">
            <div class="mission-layout">
                <div class="mission-text">
                    <h2 class="card-title">"Our Mission"</h2>
                    {content.mission.iter().map(|p| view! { <p>{p.clone()}</p> }).collect::<Vec<_>>()}
                </div>
                <div class="values-grid">
                    {content.values.iter().map(|value| view! {
                        <div class="value-card">
                            <div class="value-icon">
                                <Icon name=value.icon.name() />
                            </div>
                            <h3>{value.title.clone()}</h3>
                            <p>{value.description.clone()}</p>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </Card>
    }
}

// -----------------------------------------------------------------------------
// 3. Team
// -----------------------------------------------------------------------------

#[component]
fn TeamSection() -> impl IntoView {
    let content = use_site().content;

    view! {
        <Card title="Our Team" class="team-card">
            <div class="team-grid">
                {content.team.iter().map(|member| view! {
                    <div class="team-member">
                        <div class="team-avatar">{member.initials()}</div>
                        <h3>{member.name.clone()}</h3>
                        <p class="team-role">{member.role.clone()}</p>
                        <p class="team-bio">{member.bio.clone()}</p>
                        <div class="team-links">
                            {member.links.iter().map(|link| view! {
                                <a href=link.href.clone() target="_blank" rel="noopener noreferrer" title=link.network.clone()>
                                    <Icon name=link.network.clone() />
                                </a>
                            }).collect::<Vec<_>>()}
                        </div>
                    </div>
                }).collect::<Vec<_>>()}
            </div>
        </Card>
    }
}

// -----------------------------------------------------------------------------
// 4. Contact Section
// -----------------------------------------------------------------------------

/// Contact form plus postal/email/phone details.
///
/// Nothing is sent anywhere: a complete submission flips the form to
/// `Success` and a timer clears it again after `contact_reset_ms`.
#[component]
fn ContactSection() -> impl IntoView {
    let site = use_site();
    let contact = site.content.contact.clone();
    let reset_ms = site.config.contact_reset_ms;

    let form = RwSignal::new(ContactForm::new());

    // A pending reset must not fire into a discarded view
    on_cleanup(move || {
        form.try_update(|f| f.cancel_pending());
    });

    let value_of = move |field: ContactField| {
        Signal::derive(move || form.with(|f| f.field(field).to_string()))
    };
    let setter_for = move |field: ContactField| {
        Callback::new(move |value: String| form.update(|f| f.set_field(field, value)))
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        match form.try_update(|f| f.submit()) {
            Some(Ok(ticket)) => {
                spawn_local(async move {
                    TimeoutFuture::new(reset_ms).await;
                    // `None` once the view is gone
                    if form.try_update(|f| f.expire(ticket)) == Some(true) {
                        log::debug!("Contact form reset");
                    }
                });
            }
            Some(Err(e)) => log::warn!("Contact form not submitted: {}", e),
            None => {}
        }
    };

    let subject_options = SUBJECT_OPTIONS
        .iter()
        .map(|(value, label)| SelectOption::new(value, label))
        .collect::<Vec<_>>();

    view! {
        <Card title="Contact Us" id="contact" class="contact-card">
            <div class="contact-layout">
                <form class="contact-form" on:submit=on_submit>
                    <TextInput
                        name=ContactField::Name.name()
                        label=ContactField::Name.label()
                        placeholder=ContactField::Name.placeholder()
                        value=value_of(ContactField::Name)
                        on_input=setter_for(ContactField::Name)
                        required=true
                    />
                    <TextInput
                        name=ContactField::Email.name()
                        label=ContactField::Email.label()
                        placeholder=ContactField::Email.placeholder()
                        input_type="email"
                        value=value_of(ContactField::Email)
                        on_input=setter_for(ContactField::Email)
                        required=true
                    />
                    <Select
                        name=ContactField::Subject.name()
                        label=ContactField::Subject.label()
                        placeholder=ContactField::Subject.placeholder()
                        options=subject_options
                        value=value_of(ContactField::Subject)
                        on_change=setter_for(ContactField::Subject)
                        required=true
                    />
                    <TextArea
                        name=ContactField::Message.name()
                        label=ContactField::Message.label()
                        placeholder=ContactField::Message.placeholder()
                        rows=5
                        value=value_of(ContactField::Message)
                        on_input=setter_for(ContactField::Message)
                        required=true
                    />

                    <button type="submit" class="btn btn-primary btn-block">
                        "Send Message"
                        <Icon name="send" class="btn-icon" />
                    </button>

                    <StatusBanner status=Signal::derive(move || form.with(|f| f.status())) />
                </form>

                <div class="contact-info">
                    <div>
                        <h3>"Get in Touch"</h3>
                        <div class="contact-detail">
                            <Icon name="map-pin" />
                            <div>
                                <h4>"Address"</h4>
                                <p>{contact.address}</p>
                            </div>
                        </div>
                        <div class="contact-detail">
                            <Icon name="mail" />
                            <div>
                                <h4>"Email"</h4>
                                <p>{contact.email}</p>
                            </div>
                        </div>
                        <div class="contact-detail">
                            <Icon name="phone" />
                            <div>
                                <h4>"Phone"</h4>
                                <p>{contact.phone}</p>
                            </div>
                        </div>
                    </div>

                    <div class="share-box">
                        <h3>"Share Your Experience"</h3>
                        <p>
                            "Are you a CA or article assistant with valuable experiences to share? We'd love to feature your insights on our platform to help others in their journey."
                        </p>
                        <a href="#contact" class="text-link">
                            "Learn how to contribute"
                            <Icon name="send" class="link-arrow" />
                        </a>
                    </div>
                </div>
            </div>
        </Card>
    }
}

// -----------------------------------------------------------------------------
// 5. FAQ
// -----------------------------------------------------------------------------

#[component]
fn FaqSection() -> impl IntoView {
    let content = use_site().content;

    view! {
        <Card title="Frequently Asked Questions" class="faq-card">
            <div class="faq-list">
                {content.faqs.iter().map(|faq| view! {
                    <div class="faq-item">
                        <h3>{faq.question.clone()}</h3>
                        <p>{faq.answer.clone()}</p>
                    </div>
                }).collect::<Vec<_>>()}
            </div>
        </Card>
    }
}

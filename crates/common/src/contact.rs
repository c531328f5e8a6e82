//! # Contact Form
//!
//! Field state and status for the about page's contact form.
//!
//! ## States
//!
//! - `FormStatus::None`: idle, fields editable
//! - `FormStatus::Success`: submitted, confirmation banner shown until the
//!   scheduled reset fires
//! - `FormStatus::Error`: rendered by the view but never entered; there is no
//!   delivery step that could fail
//!
//! Every successful `submit` hands out a [`ResetTicket`]. The view waits for
//! the configured delay and then calls [`ContactForm::expire`] with it. Only
//! the ticket from the latest submission still resets the form, and
//! [`ContactForm::cancel_pending`] voids all of them when the view goes away.

use serde::{Deserialize, Serialize};

use crate::error::ContactError;

/// Values offered by the subject select, as `(value, label)`.
pub const SUBJECT_OPTIONS: [(&str, &str); 5] = [
    ("General Inquiry", "General Inquiry"),
    ("Content Suggestion", "Content Suggestion"),
    ("Experience Sharing", "Share Your Experience"),
    ("Feedback", "Feedback"),
    ("Other", "Other"),
];

/// The four form inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    /// Input `name`/`id` attribute.
    pub fn name(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Your Name",
            ContactField::Email => "Your Email",
            ContactField::Subject => "Subject",
            ContactField::Message => "Message",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            ContactField::Name => "Enter your full name",
            ContactField::Email => "Enter your email address",
            ContactField::Subject => "Select a subject",
            ContactField::Message => "Type your message here...",
        }
    }
}

/// Raw values of the four inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFormData {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFormData {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        ContactField::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

/// Status banner shown under the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FormStatus {
    #[default]
    None,
    Success,
    /// Never produced; kept so the error banner has a state to render.
    Error,
}

impl FormStatus {
    pub fn message(&self) -> Option<&'static str> {
        match self {
            FormStatus::None => None,
            FormStatus::Success => {
                Some("Your message has been sent successfully! We'll respond shortly.")
            }
            FormStatus::Error => {
                Some("There was an error sending your message. Please try again.")
            }
        }
    }
}

/// Handle for one scheduled reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetTicket(u64);

/// Contact form state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    data: ContactFormData,
    status: FormStatus,
    generation: u64,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(&self) -> &ContactFormData {
        &self.data
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn field(&self, field: ContactField) -> &str {
        self.data.get(field)
    }

    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        self.data.set(field, value.into());
    }

    /// Fields that are still empty, in form order.
    ///
    /// Same rule as the inputs' `required` attribute: whitespace is a value.
    pub fn missing_fields(&self) -> Vec<ContactField> {
        ContactField::ALL
            .into_iter()
            .filter(|f| self.data.get(*f).is_empty())
            .collect()
    }

    /// Accepts the current values and switches to `Success`.
    ///
    /// The browser's `required` attributes stop an empty field before this is
    /// called, so anything they let through is accepted here too. Only a
    /// truly empty field (a form driven without the browser) is refused. Resubmitting
    /// while `Success` is shown is allowed and moves the reset window forward.
    pub fn submit(&mut self) -> Result<ResetTicket, ContactError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            tracing::debug!("Contact form rejected, missing {:?}", missing);
            return Err(ContactError::MissingFields(missing));
        }

        tracing::info!(
            name = %self.data.name,
            email = %self.data.email,
            subject = %self.data.subject,
            "Contact form submitted"
        );

        self.status = FormStatus::Success;
        self.generation += 1;
        Ok(ResetTicket(self.generation))
    }

    /// Clears fields and status if `ticket` is still the current one.
    ///
    /// Returns whether the form was reset.
    pub fn expire(&mut self, ticket: ResetTicket) -> bool {
        if ticket.0 != self.generation || self.status != FormStatus::Success {
            return false;
        }
        self.data = ContactFormData::default();
        self.status = FormStatus::None;
        true
    }

    /// Voids every outstanding ticket without touching the fields.
    pub fn cancel_pending(&mut self) {
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.set_field(ContactField::Name, "Asha Rao");
        form.set_field(ContactField::Email, "asha@example.com");
        form.set_field(ContactField::Subject, "Feedback");
        form.set_field(ContactField::Message, "Great guides.");
        form
    }

    #[test]
    fn test_new_form_is_idle_and_empty() {
        let form = ContactForm::new();
        assert_eq!(form.status(), FormStatus::None);
        assert!(form.data().is_empty());
        assert_eq!(form.missing_fields(), ContactField::ALL.to_vec());
    }

    #[test]
    fn test_submit_then_expire() {
        let mut form = filled();
        let ticket = form.submit().unwrap();
        assert_eq!(form.status(), FormStatus::Success);
        assert_eq!(form.field(ContactField::Name), "Asha Rao");

        assert!(form.expire(ticket));
        assert_eq!(form.status(), FormStatus::None);
        assert!(form.data().is_empty());
    }

    #[test]
    fn test_incomplete_submit_is_rejected() {
        let mut form = filled();
        form.set_field(ContactField::Subject, "");
        form.set_field(ContactField::Message, "");

        let err = form.submit().unwrap_err();
        assert_eq!(
            err,
            ContactError::MissingFields(vec![ContactField::Subject, ContactField::Message])
        );
        assert_eq!(form.status(), FormStatus::None);
        assert_eq!(form.field(ContactField::Name), "Asha Rao");
    }

    #[test]
    fn test_whitespace_only_field_is_accepted() {
        let mut form = filled();
        form.set_field(ContactField::Message, "   ");

        assert!(form.missing_fields().is_empty());
        let ticket = form.submit().unwrap();
        assert_eq!(form.status(), FormStatus::Success);
        assert!(form.expire(ticket));
        assert_eq!(form.status(), FormStatus::None);
    }

    #[test]
    fn test_resubmit_moves_reset_window() {
        let mut form = filled();
        let first = form.submit().unwrap();
        let second = form.submit().unwrap();

        assert!(!form.expire(first));
        assert_eq!(form.status(), FormStatus::Success);
        assert!(form.expire(second));
        assert_eq!(form.status(), FormStatus::None);
    }

    #[test]
    fn test_cancel_pending_voids_ticket() {
        let mut form = filled();
        let ticket = form.submit().unwrap();
        form.cancel_pending();

        assert!(!form.expire(ticket));
        assert_eq!(form.status(), FormStatus::Success);
        assert!(!form.data().is_empty());
    }

    #[test]
    fn test_expire_twice_is_noop() {
        let mut form = filled();
        let ticket = form.submit().unwrap();
        assert!(form.expire(ticket));

        form.set_field(ContactField::Name, "typing again");
        assert!(!form.expire(ticket));
        assert_eq!(form.field(ContactField::Name), "typing again");
    }

    #[test]
    fn test_status_messages() {
        assert_eq!(FormStatus::None.message(), None);
        assert!(FormStatus::Success.message().unwrap().starts_with("Your message has been sent"));
        assert!(FormStatus::Error.message().unwrap().contains("error sending"));
    }

    #[test]
    fn test_subject_options() {
        let values: Vec<_> = SUBJECT_OPTIONS.iter().map(|(v, _)| *v).collect();
        assert!(values.contains(&"Experience Sharing"));
        assert_eq!(SUBJECT_OPTIONS[2].1, "Share Your Experience");
    }
}

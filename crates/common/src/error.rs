//! # Errors
//!
//! Content and contact form error types.

use crate::contact::ContactField;

/// Result type for content operations
pub type ContentResult<T> = Result<T, ContentError>;

/// Content catalog and configuration errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Invalid content in {section}: {reason}")]
    InvalidContent { section: &'static str, reason: String },

    #[error("Config error: {0}")]
    Config(String),
}

/// Contact form errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("Missing required fields: {}", format_fields(.0))]
    MissingFields(Vec<ContactField>),
}

fn format_fields(fields: &[ContactField]) -> String {
    fields
        .iter()
        .map(|f| f.name())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_message_lists_names() {
        let err = ContactError::MissingFields(vec![ContactField::Email, ContactField::Message]);
        assert_eq!(err.to_string(), "Missing required fields: email, message");
    }

    #[test]
    fn invalid_content_message() {
        let err = ContentError::InvalidContent {
            section: "menu",
            reason: "empty label".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid content in menu: empty label");
    }
}

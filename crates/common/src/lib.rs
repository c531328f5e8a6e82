//! # CA Journey Common
//!
//! Platform-independent core of the CA Journey site: the content catalog,
//! the experience listing filter and the contact form state machine.
//! The web crate renders these; nothing here touches the DOM.
//!
//! ## Modules
//!
//! - `config`: Site configuration (TOML, embedded at build time)
//! - `contact`: Contact form fields, status and reset tickets
//! - `content`: Content types and the built-in catalog
//! - `error`: Error types
//! - `filter`: Search + category filter over experience areas

pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod filter;

pub use config::{Environment, SiteConfig};
pub use contact::{ContactField, ContactForm, ContactFormData, FormStatus, ResetTicket};
pub use content::{Category, ExperienceArea, MenuItem, MenuLink, SiteContent};
pub use error::{ContactError, ContentError};
pub use filter::{CategoryFilter, ExperienceQuery, FilterOption};

//! # Site Configuration
//!
//! TOML-based configuration embedded at build time.
//!
//! The deployment environment comes from the compile-time `ENVIRONMENT`
//! variable (`production` or anything else for development).

use serde::{Deserialize, Serialize};

use crate::error::{ContentError, ContentResult};

/// Embedded `config/site.toml`
pub const EMBEDDED_CONFIG: &str = include_str!("../config/site.toml");

/// Deployment environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    /// Reads the `ENVIRONMENT` variable captured at compile time.
    pub fn from_build() -> Self {
        Self::parse(option_env!("ENVIRONMENT"))
    }

    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.eq_ignore_ascii_case("production") => Environment::Production,
            _ => Environment::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// Site configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_site_name")]
    pub site_name: String,

    #[serde(default = "default_tagline")]
    pub tagline: String,

    /// Name after the copyright sign in the footer
    #[serde(default = "default_copyright_holder")]
    pub copyright_holder: String,

    /// Contact form confirmation display time in milliseconds
    #[serde(default = "default_contact_reset_ms")]
    pub contact_reset_ms: u32,

    /// Scroll offset (px) after which the nav bar turns solid
    #[serde(default = "default_nav_scroll_threshold")]
    pub nav_scroll_threshold: f64,

    #[serde(default)]
    pub environment: Environment,
}

fn default_site_name() -> String { "CA Journey".to_string() }
fn default_tagline() -> String {
    "Your comprehensive guide through the entire chartered accountancy journey, from student to professional.".to_string()
}
fn default_copyright_holder() -> String { "CA Journey Portal".to_string() }
fn default_contact_reset_ms() -> u32 { 3000 }
fn default_nav_scroll_threshold() -> f64 { 20.0 }

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: default_site_name(),
            tagline: default_tagline(),
            copyright_holder: default_copyright_holder(),
            contact_reset_ms: default_contact_reset_ms(),
            nav_scroll_threshold: default_nav_scroll_threshold(),
            environment: Environment::default(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> ContentResult<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| ContentError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Embedded config, or defaults if it does not parse
    pub fn load_embedded_or_default() -> Self {
        Self::from_toml_str(EMBEDDED_CONFIG).unwrap_or_else(|e| {
            tracing::warn!("Failed to load site config: {}", e);
            Self::default()
        })
    }

    /// Embedded config with the environment set from the build
    pub fn for_build() -> Self {
        let config = Self::for_environment(Environment::from_build());
        tracing::debug!(environment = ?config.environment, "Site config loaded");
        config
    }

    pub fn for_environment(environment: Environment) -> Self {
        match environment {
            Environment::Development => Self::development(),
            Environment::Production => Self::production(),
        }
    }

    pub fn validate(&self) -> ContentResult<()> {
        if self.contact_reset_ms == 0 {
            return Err(ContentError::Config(
                "contact_reset_ms must be greater than zero".to_string(),
            ));
        }
        if self.site_name.trim().is_empty() {
            return Err(ContentError::Config("site_name is empty".to_string()));
        }
        Ok(())
    }

    /// Create a development config from the embedded file
    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            ..Self::load_embedded_or_default()
        }
    }

    /// Create a production config from the embedded file
    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            ..Self::load_embedded_or_default()
        }
    }

    /// Browser tab title for a page
    pub fn page_title(&self, page: &str) -> String {
        if page.is_empty() {
            self.site_name.clone()
        } else {
            format!("{} | {}", page, self.site_name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = SiteConfig::from_toml_str(EMBEDDED_CONFIG).unwrap();
        assert_eq!(config.site_name, "CA Journey");
        assert_eq!(config.contact_reset_ms, 3000);
        assert_eq!(config.nav_scroll_threshold, 20.0);
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let config = SiteConfig::from_toml_str("site_name = \"Articleship Hub\"").unwrap();
        assert_eq!(config.site_name, "Articleship Hub");
        assert_eq!(config.contact_reset_ms, 3000);
        assert_eq!(config.environment, Environment::Development);
    }

    #[test]
    fn test_zero_delay_rejected() {
        let err = SiteConfig::from_toml_str("contact_reset_ms = 0").unwrap_err();
        assert!(matches!(err, ContentError::Config(_)));
    }

    #[test]
    fn test_bad_toml_rejected() {
        assert!(SiteConfig::from_toml_str("contact_reset_ms = \"soon\"").is_err());
    }

    #[test]
    fn test_environment_parse() {
        assert_eq!(Environment::parse(Some("production")), Environment::Production);
        assert_eq!(Environment::parse(Some("PRODUCTION")), Environment::Production);
        assert_eq!(Environment::parse(Some("staging")), Environment::Development);
        assert_eq!(Environment::parse(None), Environment::Development);
        assert!(SiteConfig::production().environment.is_production());
        assert!(!SiteConfig::development().environment.is_production());
    }

    #[test]
    fn test_for_environment_uses_presets() {
        let prod = SiteConfig::for_environment(Environment::Production);
        assert_eq!(prod, SiteConfig::production());
        assert_eq!(prod.contact_reset_ms, 3000);

        let dev = SiteConfig::for_environment(Environment::Development);
        assert_eq!(dev, SiteConfig::development());
        assert_eq!(dev.site_name, prod.site_name);
        assert_eq!(SiteConfig::for_build().environment, Environment::from_build());
    }

    #[test]
    fn test_page_title() {
        let config = SiteConfig::default();
        assert_eq!(config.page_title("About"), "About | CA Journey");
        assert_eq!(config.page_title(""), "CA Journey");
    }
}

//! # Experience Filter
//!
//! Free-text search plus category filter over the experience listing.
//!
//! The two predicates are independent: the text must appear (case-insensitively)
//! in the title or the description, and the category must match unless the
//! filter is `All`. Results keep declaration order.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::content::{Category, ExperienceArea};

// ─────────────────────────────────────────────
// CategoryFilter
// ─────────────────────────────────────────────

/// Category half of the listing filter.
///
/// Serializes to the same string as the `category` URL parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Parses a filter value coming from a button or the URL.
    ///
    /// Never fails: `all`, empty and unknown values all fall back to `All`.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("all") {
            return CategoryFilter::All;
        }
        match value.parse::<Category>() {
            Ok(category) => CategoryFilter::Only(category),
            Err(e) => {
                tracing::warn!("Ignoring category filter: {}", e);
                CategoryFilter::All
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.slug(),
        }
    }

    pub fn admits(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        filter.as_str().to_string()
    }
}

impl From<String> for CategoryFilter {
    fn from(value: String) -> Self {
        CategoryFilter::parse(&value)
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

/// One filter button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub label: &'static str,
    pub filter: CategoryFilter,
}

/// Filter buttons in display order, "All Experiences" first.
pub fn filter_options() -> Vec<FilterOption> {
    std::iter::once(FilterOption {
        label: "All Experiences",
        filter: CategoryFilter::All,
    })
    .chain(Category::ALL.into_iter().map(|category| FilterOption {
        label: category.label(),
        filter: CategoryFilter::Only(category),
    }))
    .collect()
}

// ─────────────────────────────────────────────
// ExperienceQuery
// ─────────────────────────────────────────────

/// Current state of the listing's search box and category buttons.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExperienceQuery {
    pub text: String,
    pub category: CategoryFilter,
}

impl ExperienceQuery {
    pub fn new(text: impl Into<String>, category: CategoryFilter) -> Self {
        Self {
            text: text.into(),
            category,
        }
    }

    /// Builds a query from the `q` and `category` URL parameters.
    pub fn from_params(text: Option<&str>, category: Option<&str>) -> Self {
        Self {
            text: text.unwrap_or_default().to_string(),
            category: category.map(CategoryFilter::parse).unwrap_or_default(),
        }
    }

    /// Query string for the current state, empty when nothing is filtered.
    ///
    /// Text is percent-encoded so it survives a round trip through the address bar.
    pub fn to_query_string(&self) -> String {
        let mut parts = Vec::new();
        if !self.text.is_empty() {
            parts.push(format!("q={}", urlencoding::encode(&self.text)));
        }
        if let CategoryFilter::Only(category) = self.category {
            parts.push(format!("category={}", category.slug()));
        }
        if parts.is_empty() {
            String::new()
        } else {
            format!("?{}", parts.join("&"))
        }
    }

    pub fn matches(&self, area: &ExperienceArea) -> bool {
        self.category.admits(area.category) && self.matches_text(area)
    }

    fn matches_text(&self, area: &ExperienceArea) -> bool {
        if self.text.is_empty() {
            return true;
        }
        let needle = self.text.to_lowercase();
        area.title.to_lowercase().contains(&needle)
            || area.description.to_lowercase().contains(&needle)
    }

    /// Matching areas in their original order.
    pub fn apply(&self, areas: &[ExperienceArea]) -> Vec<ExperienceArea> {
        areas.iter().filter(|a| self.matches(a)).cloned().collect()
    }

    /// Clears the search text and selects every category.
    pub fn reset(&mut self) {
        self.text.clear();
        self.category = CategoryFilter::All;
    }

    pub fn is_default(&self) -> bool {
        self.text.is_empty() && self.category == CategoryFilter::All
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SiteContent;

    fn titles(areas: &[ExperienceArea]) -> Vec<&str> {
        areas.iter().map(|a| a.title.as_str()).collect()
    }

    #[test]
    fn test_parse_is_lenient() {
        assert_eq!(CategoryFilter::parse("all"), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse(""), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse("ALL"), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse("crypto"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::parse("Auditing"),
            CategoryFilter::Only(Category::Auditing)
        );
    }

    #[test]
    fn test_serde_uses_url_form() {
        let json = serde_json::to_string(&CategoryFilter::Only(Category::Finance)).unwrap();
        assert_eq!(json, "\"finance\"");
        assert_eq!(serde_json::to_string(&CategoryFilter::All).unwrap(), "\"all\"");

        let query: ExperienceQuery =
            serde_json::from_str(r#"{"text":"audit","category":"auditing"}"#).unwrap();
        assert_eq!(query, ExperienceQuery::new("audit", Category::Auditing.into()));
        assert_eq!(
            serde_json::to_string(&query).unwrap(),
            r#"{"text":"audit","category":"auditing"}"#
        );
    }

    #[test]
    fn test_filter_options_order() {
        let labels: Vec<_> = filter_options().iter().map(|o| o.label).collect();
        assert_eq!(
            labels,
            vec!["All Experiences", "Auditing", "Taxation", "Compliance", "Finance"]
        );
        assert_eq!(filter_options()[0].filter, CategoryFilter::All);
    }

    #[test]
    fn test_text_is_case_insensitive() {
        let content = SiteContent::builtin();
        let query = ExperienceQuery::new("bank", CategoryFilter::All);
        assert_eq!(titles(&query.apply(&content.experiences)), vec!["Bank Audit"]);
    }

    #[test]
    fn test_description_is_searched() {
        let content = SiteContent::builtin();
        // Only appears in descriptions
        let query = ExperienceQuery::new("ROC filings", CategoryFilter::All);
        assert_eq!(
            titles(&query.apply(&content.experiences)),
            vec!["Statutory Compliance"]
        );
    }

    #[test]
    fn test_tags_are_not_searched() {
        let content = SiteContent::builtin();
        let query = ExperienceQuery::new("NBFC", CategoryFilter::All);
        assert!(query.apply(&content.experiences).is_empty());
    }

    #[test]
    fn test_text_and_category_combine() {
        let content = SiteContent::builtin();
        let query = ExperienceQuery::new("audit", Category::Auditing.into());
        assert_eq!(
            titles(&query.apply(&content.experiences)),
            vec!["Bank Audit", "Industry Audit", "Internal Audit & Controls"]
        );

        let query = ExperienceQuery::new("audit", Category::Taxation.into());
        assert_eq!(
            titles(&query.apply(&content.experiences)),
            vec!["GST Compliance & Filing"]
        );
    }

    #[test]
    fn test_reset() {
        let mut query = ExperienceQuery::new("zzz", Category::Finance.into());
        assert!(!query.is_default());
        query.reset();
        assert!(query.is_default());
        assert_eq!(query, ExperienceQuery::default());
    }

    #[test]
    fn test_query_string() {
        assert_eq!(ExperienceQuery::default().to_query_string(), "");
        assert_eq!(
            ExperienceQuery::new("M&A deals", Category::Finance.into()).to_query_string(),
            "?q=M%26A%20deals&category=finance"
        );
        assert_eq!(
            ExperienceQuery::new("", Category::Compliance.into()).to_query_string(),
            "?category=compliance"
        );
    }

    #[test]
    fn test_from_params() {
        let query = ExperienceQuery::from_params(Some("gst"), Some("taxation"));
        assert_eq!(query, ExperienceQuery::new("gst", Category::Taxation.into()));
        assert!(ExperienceQuery::from_params(None, None).is_default());
        assert!(ExperienceQuery::from_params(None, Some("unknown")).is_default());
    }
}

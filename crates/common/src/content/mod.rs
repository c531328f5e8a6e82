//! # Site Content
//!
//! Table of Contents:
//! 1. Category: Professional-practice domain of an experience area
//! 2. Icon: Named icon shown next to content blocks
//! 3. ExperienceArea: One card in the experiences listing
//! 4. Navigation: Menu tree and footer link columns
//! 5. Page content: Timeline, testimonials, team, FAQ, detail guides
//! 6. SiteContent: Immutable aggregate handed to every page
//!
//! All content is defined at build time by the `builtin` constructors in the
//! submodules and never mutated afterwards.

mod about;
mod experiences;
mod gst;
mod journey;
mod navigation;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ContentError, ContentResult};

// ─────────────────────────────────────────────
// 1. Category
// ─────────────────────────────────────────────

/// Professional-practice domain an experience area belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Auditing,
    Taxation,
    Compliance,
    Finance,
}

impl Category {
    /// Every category, in filter-button order.
    pub const ALL: [Category; 4] = [
        Category::Auditing,
        Category::Taxation,
        Category::Compliance,
        Category::Finance,
    ];

    /// Value used in URLs and filter state.
    pub fn slug(&self) -> &'static str {
        match self {
            Category::Auditing => "auditing",
            Category::Taxation => "taxation",
            Category::Compliance => "compliance",
            Category::Finance => "finance",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Auditing => "Auditing",
            Category::Taxation => "Taxation",
            Category::Compliance => "Compliance",
            Category::Finance => "Finance",
        }
    }

    /// CSS modifier for the colored accent strip on cards.
    pub fn accent_class(&self) -> &'static str {
        match self {
            Category::Auditing => "accent-auditing",
            Category::Taxation => "accent-taxation",
            Category::Compliance => "accent-compliance",
            Category::Finance => "accent-finance",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Category {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.slug().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ContentError::UnknownCategory(s.to_string()))
    }
}

// ─────────────────────────────────────────────
// 2. Icon
// ─────────────────────────────────────────────

/// Icon shown next to a content block. Rendered from `/assets/icons/<name>.svg`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Award,
    BookOpen,
    Briefcase,
    FileCheck,
    GraduationCap,
    Heart,
    Users,
}

impl Icon {
    /// File stem of the SVG asset.
    pub fn name(&self) -> &'static str {
        match self {
            Icon::Award => "award",
            Icon::BookOpen => "book-open",
            Icon::Briefcase => "briefcase",
            Icon::FileCheck => "file-check",
            Icon::GraduationCap => "graduation-cap",
            Icon::Heart => "heart",
            Icon::Users => "users",
        }
    }
}

// ─────────────────────────────────────────────
// 3. ExperienceArea
// ─────────────────────────────────────────────

/// One professional-practice domain shown in the experiences listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceArea {
    pub title: String,
    pub description: String,
    pub category: Category,
    /// Display order is significant
    pub tags: Vec<String>,
    pub href: String,
}

impl ExperienceArea {
    pub fn new(title: &str, description: &str, category: Category, tags: &[&str], href: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            category,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            href: href.to_string(),
        }
    }

    /// Last path segment of `href`, e.g. `gst` for `/experiences/gst`.
    pub fn slug(&self) -> &str {
        self.href.rsplit('/').next().unwrap_or_default()
    }
}

// ─────────────────────────────────────────────
// 4. Navigation
// ─────────────────────────────────────────────

/// Leaf link in the menu or footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuLink {
    pub label: String,
    pub href: String,
}

impl MenuLink {
    pub fn new(label: &str, href: &str) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
        }
    }
}

/// Top-level menu entry. The tree is two levels deep at most.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub label: String,
    pub href: String,
    #[serde(default)]
    pub submenu: Vec<MenuLink>,
}

impl MenuItem {
    pub fn link(label: &str, href: &str) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
            submenu: Vec::new(),
        }
    }

    pub fn with_submenu(label: &str, href: &str, submenu: Vec<MenuLink>) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
            submenu,
        }
    }

    pub fn has_submenu(&self) -> bool {
        !self.submenu.is_empty()
    }

    /// Whether this item should be highlighted for the given path.
    pub fn is_active(&self, path: &str) -> bool {
        if self.href == "/" {
            return path == "/";
        }
        path == self.href
            || path.starts_with(&format!("{}/", self.href))
            || self.submenu.iter().any(|s| s.href == path)
    }
}

/// Titled column of footer links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterColumn {
    pub title: String,
    pub links: Vec<MenuLink>,
}

/// Social profile link in the footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub network: String,
    pub href: String,
}

// ─────────────────────────────────────────────
// 5. Page content
// ─────────────────────────────────────────────

/// Stage card on the home page roadmap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JourneyStage {
    pub title: String,
    pub description: String,
    pub icon: Icon,
    pub link_text: String,
    pub href: String,
}

/// One step in the journey timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineStep {
    pub title: String,
    pub description: String,
    pub icon: Icon,
    pub points: Vec<String>,
    pub button_text: String,
    pub button_link: String,
}

/// Card linking to further reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLink {
    pub title: String,
    pub description: String,
    pub href: String,
    /// Opens in a new tab
    pub external: bool,
}

/// Quote from a student shown under the listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub name: String,
    pub position: String,
}

impl Testimonial {
    /// First letter of the name, shown in the avatar bubble.
    pub fn initial(&self) -> String {
        self.name.chars().next().map(String::from).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreValue {
    pub title: String,
    pub description: String,
    pub icon: Icon,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub bio: String,
    /// Icon links under the bio (`mail`, `phone`)
    pub links: Vec<SocialLink>,
}

impl TeamMember {
    /// First letter of every name part, e.g. `RS` for "Rajat Sharma".
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

/// Postal, email and phone details shown in the footer and contact section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    pub address: String,
    pub email: String,
    pub phone: String,
}

/// Timed task in the "day in the life" section of a detail guide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayTask {
    pub time: String,
    pub description: String,
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    pub title: String,
    pub description: String,
    pub solution: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Document,
    Download,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuideResource {
    pub title: String,
    pub description: String,
    pub href: String,
    pub kind: ResourceKind,
}

/// Long-form guide for a single experience area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceDetail {
    /// Matches [`ExperienceArea::slug`]
    pub slug: String,
    pub heading: String,
    pub lead: String,
    pub overview: Vec<String>,
    pub responsibilities: Vec<String>,
    /// Heading of the day-in-the-life section
    pub day_in_life_title: String,
    pub day_in_life: Vec<DayTask>,
    pub insights: Vec<Insight>,
    pub challenges: Vec<Challenge>,
    pub resources: Vec<GuideResource>,
    pub related: Vec<MenuLink>,
}

// ─────────────────────────────────────────────
// 6. SiteContent
// ─────────────────────────────────────────────

/// Everything the pages render, built once at startup and shared read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteContent {
    pub menu: Vec<MenuItem>,
    pub footer_columns: Vec<FooterColumn>,
    pub social: Vec<SocialLink>,
    pub contact: ContactDetails,
    pub journey_stages: Vec<JourneyStage>,
    pub timeline: Vec<TimelineStep>,
    pub journey_resources: Vec<ResourceLink>,
    pub home_highlights: Vec<ResourceLink>,
    pub experiences: Vec<ExperienceArea>,
    pub testimonials: Vec<Testimonial>,
    pub mission: Vec<String>,
    pub values: Vec<CoreValue>,
    pub team: Vec<TeamMember>,
    pub faqs: Vec<Faq>,
    pub details: Vec<ExperienceDetail>,
}

impl SiteContent {
    /// The catalog shipped with the site.
    pub fn builtin() -> Self {
        Self {
            menu: navigation::menu(),
            footer_columns: navigation::footer_columns(),
            social: navigation::social_links(),
            contact: about::contact_details(),
            journey_stages: journey::stages(),
            timeline: journey::timeline(),
            journey_resources: journey::resources(),
            home_highlights: journey::home_highlights(),
            experiences: experiences::experience_areas(),
            testimonials: experiences::testimonials(),
            mission: about::mission(),
            values: about::values(),
            team: about::team(),
            faqs: about::faqs(),
            details: vec![gst::detail()],
        }
    }

    /// Experience area whose href ends in `slug`.
    pub fn experience_by_slug(&self, slug: &str) -> Option<&ExperienceArea> {
        self.experiences.iter().find(|e| e.slug() == slug)
    }

    /// Long-form guide for `slug`, if one has been written.
    pub fn detail_for(&self, slug: &str) -> Option<&ExperienceDetail> {
        self.details.iter().find(|d| d.slug == slug)
    }

    /// Structural checks on the catalog.
    pub fn validate(&self) -> ContentResult<()> {
        for item in &self.menu {
            check_href("menu", &item.href)?;
            for link in &item.submenu {
                check_href("menu", &link.href)?;
            }
        }

        for card in &self.home_highlights {
            check_href("home", &card.href)?;
        }

        let mut titles = std::collections::HashSet::new();
        for area in &self.experiences {
            check_href("experiences", &area.href)?;
            if !titles.insert(area.title.as_str()) {
                return Err(ContentError::InvalidContent {
                    section: "experiences",
                    reason: format!("duplicate title '{}'", area.title),
                });
            }
        }

        for detail in &self.details {
            for link in &detail.related {
                check_href("details", &link.href)?;
            }
            if self.experience_by_slug(&detail.slug).is_none() {
                return Err(ContentError::InvalidContent {
                    section: "details",
                    reason: format!("no experience area for guide '{}'", detail.slug),
                });
            }
        }

        Ok(())
    }
}

impl Default for SiteContent {
    fn default() -> Self {
        Self::builtin()
    }
}

fn check_href(section: &'static str, href: &str) -> ContentResult<()> {
    if href.starts_with('/') || href.starts_with('#') {
        Ok(())
    } else {
        Err(ContentError::InvalidContent {
            section,
            reason: format!("href '{}' is not site-relative", href),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_content_is_valid() {
        let content = SiteContent::builtin();
        assert!(content.validate().is_ok());
        assert_eq!(content.experiences.len(), 9);
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("taxation".parse::<Category>().unwrap(), Category::Taxation);
        assert_eq!(" Finance ".parse::<Category>().unwrap(), Category::Finance);
        assert_eq!(
            "marketing".parse::<Category>(),
            Err(ContentError::UnknownCategory("marketing".to_string()))
        );
    }

    #[test]
    fn test_category_serde_uses_slug() {
        let json = serde_json::to_string(&Category::Compliance).unwrap();
        assert_eq!(json, "\"compliance\"");
    }

    #[test]
    fn test_slug_from_href() {
        let content = SiteContent::builtin();
        let gst = content.experience_by_slug("gst").unwrap();
        assert_eq!(gst.title, "GST Compliance & Filing");
        assert!(content.detail_for("gst").is_some());
        assert!(content.detail_for("bank-audit").is_none());
        assert!(content.experience_by_slug("payroll").is_none());
    }

    #[test]
    fn test_menu_is_two_levels() {
        let content = SiteContent::builtin();
        let experiences = content
            .menu
            .iter()
            .find(|m| m.label == "Experiences")
            .unwrap();
        assert!(experiences.has_submenu());
        assert_eq!(experiences.submenu.len(), 4);
        assert!(content.menu.iter().filter(|m| m.label != "Experiences").all(|m| !m.has_submenu()));
    }

    #[test]
    fn test_menu_active_matching() {
        let content = SiteContent::builtin();
        let home = &content.menu[0];
        let experiences = content.menu.iter().find(|m| m.href == "/experiences").unwrap();
        assert!(home.is_active("/"));
        assert!(!home.is_active("/about"));
        assert!(experiences.is_active("/experiences"));
        assert!(experiences.is_active("/experiences/gst"));
        assert!(!experiences.is_active("/experiences-old"));
    }

    #[test]
    fn test_initials() {
        let content = SiteContent::builtin();
        assert_eq!(content.team[0].initials(), "RS");
        assert_eq!(content.testimonials[0].initial(), "P");
    }

    #[test]
    fn test_validate_rejects_orphan_guide() {
        let mut content = SiteContent::builtin();
        content.details[0].slug = "payroll".to_string();
        assert!(matches!(
            content.validate(),
            Err(ContentError::InvalidContent { section: "details", .. })
        ));
    }

    #[test]
    fn test_validate_rejects_absolute_href() {
        let mut content = SiteContent::builtin();
        content.experiences[0].href = "https://example.com".to_string();
        assert!(content.validate().is_err());
    }
}

// =============================================================================
// CA Journey Web - Page Components
// =============================================================================
// Table of Contents:
// 1. Public Pages
// 2. Fallback
// =============================================================================

pub mod about;
pub mod experience;
pub mod home;
pub mod journey;
pub mod not_found;

pub use about::AboutPage;
pub use experience::{ExperienceDetailPage, ExperiencesPage};
pub use home::HomePage;
pub use journey::JourneyPage;
pub use not_found::NotFoundPage;

// =============================================================================
// CA Journey Web - UI Components
// =============================================================================
// Table of Contents:
// 1. Layout Components
// 2. Common Components
// 3. Form Components
// 4. Content Components
// =============================================================================

pub mod common;
pub mod experience_card;
pub mod footer;
pub mod forms;
pub mod hero;
pub mod layout;
pub mod nav;

pub use common::{Card, Icon, SectionHeader, StatusBanner};
pub use experience_card::ExperienceCard;
pub use footer::Footer;
pub use forms::{Select, SelectOption, TextArea, TextInput};
pub use hero::HeroSection;
pub use layout::Layout;
pub use nav::CentralNav;

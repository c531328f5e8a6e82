//! Roadmap stages, timeline steps and resource cards.

use super::{Icon, JourneyStage, ResourceLink, TimelineStep};

pub(super) fn stages() -> Vec<JourneyStage> {
    let stage = |title: &str, description: &str, icon: Icon, link_text: &str, href: &str| JourneyStage {
        title: title.to_string(),
        description: description.to_string(),
        icon,
        link_text: link_text.to_string(),
        href: href.to_string(),
    };

    vec![
        stage(
            "Foundation & Intermediate",
            "Master the fundamental concepts and build a strong base for your CA career",
            Icon::GraduationCap,
            "Learn more",
            "/journey/foundation-intermediate",
        ),
        stage(
            "Articleship Experience",
            "Gain practical knowledge and hands-on experience across various domains of accounting",
            Icon::Briefcase,
            "Explore experiences",
            "/experiences",
        ),
        stage(
            "Final & Professional Career",
            "Complete your exams and transition into a fulfilling professional career",
            Icon::BookOpen,
            "Learn more",
            "/journey/final-professional",
        ),
    ]
}

fn step(
    title: &str,
    description: &str,
    icon: Icon,
    points: &[&str],
    button_text: &str,
    button_link: &str,
) -> TimelineStep {
    TimelineStep {
        title: title.to_string(),
        description: description.to_string(),
        icon,
        points: points.iter().map(|p| p.to_string()).collect(),
        button_text: button_text.to_string(),
        button_link: button_link.to_string(),
    }
}

pub(super) fn timeline() -> Vec<TimelineStep> {
    vec![
        step(
            "Registration & Foundation",
            "Beginning your CA journey with the foundational course",
            Icon::BookOpen,
            &[
                "Register with ICAI after completing 10+2",
                "Study fundamental accounting, business laws, and mathematics",
                "Four-month study period with comprehensive examination",
                "Gateway to the intermediate level after passing all subjects",
            ],
            "Foundation details",
            "/journey/foundation-intermediate#foundation",
        ),
        step(
            "Intermediate Course",
            "Building advanced knowledge and preparing for practical training",
            Icon::GraduationCap,
            &[
                "Eight papers divided into two groups",
                "Study advanced accounting, auditing, taxation, and corporate laws",
                "Can be pursued through direct entry for commerce graduates",
                "Eligibility for articleship after clearing one group",
            ],
            "Intermediate details",
            "/journey/foundation-intermediate#intermediate",
        ),
        step(
            "Articleship Training",
            "Hands-on practical experience under a practicing CA",
            Icon::Briefcase,
            &[
                "Three-year training period with a practicing CA",
                "Exposure to various areas like auditing, taxation, and accounting",
                "Learn professional ethics and business communication",
                "Monthly stipend as per ICAI guidelines",
                "Opportunity to specialize in areas of interest",
            ],
            "Explore articleship experiences",
            "/experiences",
        ),
        step(
            "Information Technology Training & Orientation",
            "Developing IT and soft skills necessary for the profession",
            Icon::FileCheck,
            &[
                "100-hour IT training program",
                "General Management and Communication Skills (GMCS)",
                "Advanced Integrated Course on Information Technology and Soft Skills (AICITSS)",
                "Mandatory completion before registering for final examination",
            ],
            "IT & Orientation details",
            "/journey/it-orientation",
        ),
        step(
            "Final Examination",
            "The culmination of academic learning in the CA program",
            Icon::Award,
            &[
                "Eight papers divided into two groups",
                "Advanced study of financial reporting, strategic management, and specialized areas",
                "Can be attempted in the last six months of articleship",
                "Challenging examination with comprehensive syllabus",
            ],
            "Final exam details",
            "/journey/final-professional#final",
        ),
        step(
            "Membership & Professional Career",
            "Becoming a Chartered Accountant and starting your professional journey",
            Icon::Award,
            &[
                "Apply for ICAI membership after passing final exam and completing articleship",
                "Opportunity to practice as a CA or join industry",
                "Various career paths including audit, taxation, consulting, or corporate finance",
                "Continuous professional education to stay updated",
            ],
            "Career opportunities",
            "/journey/final-professional#career",
        ),
    ]
}

fn resource(title: &str, description: &str, href: &str, external: bool) -> ResourceLink {
    ResourceLink {
        title: title.to_string(),
        description: description.to_string(),
        href: href.to_string(),
        external,
    }
}

pub(super) fn resources() -> Vec<ResourceLink> {
    vec![
        resource(
            "ICAI Official Guidelines",
            "Official requirements, exam schedules and registration process",
            "https://www.icai.org",
            true,
        ),
        resource(
            "Study Material",
            "Comprehensive study guides, practice papers and resources",
            "/resources/study-material",
            false,
        ),
        resource(
            "Articleship Experiences",
            "Real stories and experiences from articleship training",
            "/experiences",
            false,
        ),
        resource(
            "Career Opportunities",
            "Explore various career paths after becoming a CA",
            "/resources/career-paths",
            false,
        ),
    ]
}

/// Short cards for the home page grid. Titles are shorter than the listing's.
pub(super) fn home_highlights() -> Vec<ResourceLink> {
    vec![
        resource(
            "GST Compliance",
            "Learn about filing returns, reconciliations, assessments and handling GST audits",
            "/experiences/gst",
            false,
        ),
        resource(
            "Bank Audit",
            "Understand the nuances of auditing banking operations, loans, advances and financial reporting",
            "/experiences/bank-audit",
            false,
        ),
        resource(
            "Industry Audit",
            "Explore various types of industry-specific audits and their unique requirements",
            "/experiences/industry-audit",
            false,
        ),
        resource(
            "Tax Planning & Assessment",
            "Master the skills of tax assessment, planning and representation for individuals and businesses",
            "/experiences/tax",
            false,
        ),
        resource(
            "Statutory Compliance",
            "Navigate through various statutory requirements, ROC filings and legal compliances",
            "/experiences/statutory-compliance",
            false,
        ),
        resource(
            "Internal Audit",
            "Learn methodologies for evaluating internal controls and improving business processes",
            "/experiences/internal-audit",
            false,
        ),
        resource(
            "Financial Management",
            "Understand financial analysis, planning, and strategic decision-making processes",
            "/experiences/financial-management",
            false,
        ),
        resource(
            "Corporate Finance",
            "Explore valuation, mergers & acquisitions, and corporate restructuring",
            "/experiences/corporate-finance",
            false,
        ),
    ]
}

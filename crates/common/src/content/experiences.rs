//! Experience areas and student testimonials for the listing page.

use super::{Category, ExperienceArea, Testimonial};

pub(super) fn experience_areas() -> Vec<ExperienceArea> {
    vec![
        ExperienceArea::new(
            "GST Compliance & Filing",
            "Learn about GST return filing, reconciliations, assessments and handling GST audits",
            Category::Taxation,
            &["GST", "Indirect Tax", "Compliance", "Returns"],
            "/experiences/gst",
        ),
        ExperienceArea::new(
            "Bank Audit",
            "Understand the nuances of auditing banking operations, loans, advances and financial reporting",
            Category::Auditing,
            &["Banking", "NBFC", "Financial Statements", "RBI Guidelines"],
            "/experiences/bank-audit",
        ),
        ExperienceArea::new(
            "Industry Audit",
            "Explore various types of industry-specific audits and their unique requirements and challenges",
            Category::Auditing,
            &["Manufacturing", "Retail", "Service Industry", "Statutory Audit"],
            "/experiences/industry-audit",
        ),
        ExperienceArea::new(
            "Direct Tax Assessment & Planning",
            "Master the skills of tax assessment, planning and representation for individuals and businesses",
            Category::Taxation,
            &["Income Tax", "Corporate Tax", "Tax Planning", "Appeals"],
            "/experiences/tax",
        ),
        ExperienceArea::new(
            "Statutory Compliance",
            "Navigate through various statutory requirements, ROC filings and legal compliances",
            Category::Compliance,
            &["Companies Act", "ROC", "Annual Filings", "Legal"],
            "/experiences/statutory-compliance",
        ),
        ExperienceArea::new(
            "Internal Audit & Controls",
            "Learn methodologies for evaluating internal controls and improving business processes",
            Category::Auditing,
            &["Risk Management", "SOPs", "Process Improvement", "Internal Controls"],
            "/experiences/internal-audit",
        ),
        ExperienceArea::new(
            "Financial Management",
            "Understand financial analysis, planning, and strategic decision-making processes in organizations",
            Category::Finance,
            &["Financial Analysis", "Budgeting", "CFO Advisory", "Strategy"],
            "/experiences/financial-management",
        ),
        ExperienceArea::new(
            "Corporate Finance & Valuations",
            "Explore valuation techniques, mergers & acquisitions, and corporate restructuring",
            Category::Finance,
            &["M&A", "Valuations", "Due Diligence", "Restructuring"],
            "/experiences/corporate-finance",
        ),
        ExperienceArea::new(
            "Transfer Pricing",
            "Gain insights into transfer pricing regulations, documentation, and dispute resolution",
            Category::Taxation,
            &["International Tax", "Documentation", "APA", "Litigation"],
            "/experiences/transfer-pricing",
        ),
    ]
}

pub(super) fn testimonials() -> Vec<Testimonial> {
    let quote = |quote: &str, name: &str, position: &str| Testimonial {
        quote: quote.to_string(),
        name: name.to_string(),
        position: position.to_string(),
    };

    vec![
        quote(
            "The GST compliance section was incredibly helpful during my articleship. It gave me practical insights that textbooks simply don't cover.",
            "Priya Sharma",
            "CA Final Student",
        ),
        quote(
            "Bank audit is one of the most challenging areas during articleship. The resources here helped me understand the methodology and key checkpoints.",
            "Rahul Verma",
            "Newly Qualified CA",
        ),
        quote(
            "The detailed breakdown of industry audit experiences prepared me for what to expect when I was assigned manufacturing clients.",
            "Ananya Patel",
            "Second Year Article Assistant",
        ),
    ]
}

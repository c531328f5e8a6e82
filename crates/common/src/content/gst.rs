//! Long-form guide for GST compliance work.

use super::{Challenge, DayTask, ExperienceDetail, GuideResource, Insight, MenuLink, ResourceKind};

fn task(time: &str, description: &str, note: Option<&str>) -> DayTask {
    DayTask {
        time: time.to_string(),
        description: description.to_string(),
        note: note.map(str::to_string),
    }
}

fn insight(title: &str, description: &str) -> Insight {
    Insight {
        title: title.to_string(),
        description: description.to_string(),
    }
}

fn challenge(title: &str, description: &str, solution: &str) -> Challenge {
    Challenge {
        title: title.to_string(),
        description: description.to_string(),
        solution: solution.to_string(),
    }
}

fn resource(title: &str, description: &str, href: &str, kind: ResourceKind) -> GuideResource {
    GuideResource {
        title: title.to_string(),
        description: description.to_string(),
        href: href.to_string(),
        kind,
    }
}

pub(super) fn detail() -> ExperienceDetail {
    ExperienceDetail {
        slug: "gst".to_string(),
        heading: "GST Compliance & Filing Experience".to_string(),
        lead: "Gain insights into the practical aspects of GST compliance, return filing, and reconciliation processes that you'll encounter during your articleship.".to_string(),
        overview: vec![
            "Goods and Services Tax (GST) is a comprehensive indirect tax levied on the supply of goods and services across India. As a CA article, you'll likely spend significant time working on GST-related matters, from monthly return filing to complex reconciliations and departmental assessments.".to_string(),
            "During your articleship, you may be responsible for:".to_string(),
        ],
        responsibilities: [
            "Preparing and filing monthly/quarterly GSTR-1 and GSTR-3B returns",
            "Reconciling input tax credits with GSTR-2A/2B",
            "Managing e-way bills for transportation of goods",
            "Handling GST assessments and departmental notices",
            "Advising clients on GST implications of business transactions",
            "Conducting GST audits and preparing annual returns (GSTR-9/9C)",
            "Assisting with GST registrations and amendments",
        ]
        .iter()
        .map(|r| r.to_string())
        .collect(),
        day_in_life_title: "A Day in the Life: GST Compliance Work".to_string(),
        day_in_life: vec![
            task(
                "9:30 AM - Data Collection",
                "Begin the day by collecting sales and purchase data from the client's accounting system. Export reports for the previous month to prepare for GST return filing.",
                Some("Pro Tip: Always verify the data with the client before proceeding. This saves a lot of back-and-forth later."),
            ),
            task(
                "11:00 AM - Input Tax Credit Reconciliation",
                "Download GSTR-2A/2B from the GST portal and reconcile it with the purchase register to identify missing invoices or discrepancies in input tax credit.",
                None,
            ),
            task(
                "1:00 PM - Review Client Queries",
                "Address any client questions regarding GST implications on recent transactions or clarify notices received from the department.",
                None,
            ),
            task(
                "2:30 PM - Return Preparation",
                "Prepare GSTR-1 for outward supplies, ensuring all invoices, credit/debit notes, and amendments are correctly captured in the appropriate tables.",
                Some("Watch out for: B2B vs B2C classifications, export transactions, and correct tax rates. These are common areas for errors."),
            ),
            task(
                "4:00 PM - Review and Filing",
                "Perform a final review of the return data, share summary with the client for approval, and proceed with filing once approved.",
                None,
            ),
        ],
        insights: vec![
            insight(
                "Reconciliation is Key",
                "Regular reconciliation between books, e-way bills, and GST returns helps identify discrepancies early. Set up a monthly process to compare these records systematically.",
            ),
            insight(
                "Documentation Matters",
                "Maintain proper documentation for all transactions, especially for exempt supplies, zero-rated supplies, and RCM cases. This becomes critical during departmental audits.",
            ),
            insight(
                "Understanding Classifications",
                "Invest time in understanding the correct HSN codes and tax rates for different products and services. This knowledge significantly reduces errors in compliance.",
            ),
            insight(
                "Tracking Legal Updates",
                "GST laws and notifications change frequently. Subscribe to updates from CBIC and set aside time every week to review recent changes that may impact your clients.",
            ),
        ],
        challenges: vec![
            challenge(
                "Input Tax Credit Mismatch",
                "Suppliers often fail to upload their invoices, leading to missing ITC in GSTR-2A/2B, which causes reconciliation challenges and potential ITC loss.",
                "Create a regular follow-up system with suppliers for non-reported invoices. Maintain a tracker and escalate cases where vendors repeatedly fail to comply.",
            ),
            challenge(
                "Complex Rate Structures",
                "Multiple tax rates and special provisions for different industries can make classification confusing, especially for businesses with diverse product lines.",
                "Create a comprehensive rate master for clients based on their specific products/services. Periodically review advance rulings and clarifications for similar businesses.",
            ),
            challenge(
                "E-Commerce Compliance",
                "E-commerce operators and sellers face unique challenges with TCS collection, marketplace vs. inventory model distinctions, and multi-state operations.",
                "Implement automated systems to track state-wise sales and TCS collections. Create a compliance calendar specifically designed for e-commerce operations.",
            ),
        ],
        resources: vec![
            resource(
                "GST Portal User Manual",
                "Official guide for navigating and using the GST portal",
                "https://tutorial.gst.gov.in/",
                ResourceKind::Document,
            ),
            resource(
                "GST Returns Reconciliation Tool",
                "Excel-based tool for reconciling GSTR-2A with purchase register",
                "#",
                ResourceKind::Download,
            ),
            resource(
                "Common Errors in GST Filing",
                "ICAI guidance note on avoiding common mistakes",
                "https://www.icai.org",
                ResourceKind::Document,
            ),
            resource(
                "HSN Code Finder",
                "Searchable database of HSN codes for goods and services",
                "#",
                ResourceKind::Download,
            ),
        ],
        related: vec![
            MenuLink::new("Direct Tax", "/experiences/tax"),
            MenuLink::new("Statutory Compliance", "/experiences/statutory-compliance"),
        ],
    }
}

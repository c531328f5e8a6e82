//! About page: mission, values, team, FAQ and contact details.

use super::{ContactDetails, CoreValue, Faq, Icon, SocialLink, TeamMember};

pub(super) fn contact_details() -> ContactDetails {
    ContactDetails {
        address: "123 CA Street, New Delhi, India 110001".to_string(),
        email: "info@cajourney.com".to_string(),
        phone: "+91 98765 43210".to_string(),
    }
}

pub(super) fn mission() -> Vec<String> {
    vec![
        "The journey to becoming a Chartered Accountant is filled with challenges, learning opportunities, and professional growth. We understand this journey first-hand and created this platform to guide aspiring CAs through their path.".to_string(),
        "Our mission is to provide comprehensive, practical, and authentic information about the CA journey, with special focus on the articleship experience. We aim to bridge the gap between theoretical knowledge and practical application, helping you navigate your professional development with confidence.".to_string(),
    ]
}

pub(super) fn values() -> Vec<CoreValue> {
    let value = |title: &str, description: &str, icon: Icon| CoreValue {
        title: title.to_string(),
        description: description.to_string(),
        icon,
    };

    vec![
        value(
            "Authenticity",
            "Real experiences shared by practicing CAs and article assistants",
            Icon::Users,
        ),
        value(
            "Practicality",
            "Focus on practical knowledge that textbooks don't cover",
            Icon::BookOpen,
        ),
        value(
            "Excellence",
            "Promoting professional excellence and best practices",
            Icon::Award,
        ),
        value(
            "Community",
            "Building a supportive community of CA professionals",
            Icon::Heart,
        ),
    ]
}

fn member(name: &str, role: &str, bio: &str) -> TeamMember {
    TeamMember {
        name: name.to_string(),
        role: role.to_string(),
        bio: bio.to_string(),
        links: ["mail", "phone"]
            .into_iter()
            .map(|network| SocialLink {
                network: network.to_string(),
                href: "#".to_string(),
            })
            .collect(),
    }
}

pub(super) fn team() -> Vec<TeamMember> {
    vec![
        member(
            "Rajat Sharma",
            "Founder & Senior CA",
            "With 15+ years of experience in audit and taxation, Rajat founded CA Journey to help aspiring CAs navigate their professional path.",
        ),
        member(
            "Priya Patel",
            "Content Director",
            "A CA with expertise in GST and corporate finance, Priya ensures all content is accurate, relevant, and helpful for CA aspirants.",
        ),
        member(
            "Vikram Singh",
            "Technology Lead",
            "Combining his CA qualification with tech expertise, Vikram manages the platform's technical aspects to deliver seamless user experience.",
        ),
    ]
}

pub(super) fn faqs() -> Vec<Faq> {
    let faq = |question: &str, answer: &str| Faq {
        question: question.to_string(),
        answer: answer.to_string(),
    };

    vec![
        faq(
            "Is the content on CA Journey created by real chartered accountants?",
            "Yes, all our content is created and verified by practicing chartered accountants with experience in various domains of the profession. We ensure authenticity and practicality in everything we publish.",
        ),
        faq(
            "How can I contribute my own experience to the platform?",
            "We welcome contributions from CAs and article assistants. Please use our contact form and select 'Experience Sharing' as the subject. Our content team will review your submission and get in touch with you.",
        ),
        faq(
            "Do you offer personalized guidance for CA students?",
            "Currently, we focus on providing general guidance through our content. However, we're working on a mentorship program that will offer more personalized support. Stay tuned for updates!",
        ),
        faq(
            "How often is the content updated to reflect changes in laws and regulations?",
            "We monitor regulatory changes closely and update our content as soon as significant changes occur. All pages display the last update date so you know how current the information is.",
        ),
        faq(
            "Can I use the resources on this website for my CA firm's training program?",
            "Yes, our content can be used for educational purposes with proper attribution. For extensive use in commercial training programs, please contact us to discuss licensing arrangements.",
        ),
    ]
}

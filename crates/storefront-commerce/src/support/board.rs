//! Customer center notices, FAQ and the 1:1 inquiry form.

use serde::Serialize;

use crate::CommerceError;

/// A customer center announcement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub id: u32,
    pub title: &'static str,
    /// Publication date, `YYYY-MM-DD`.
    pub date: &'static str,
    pub content: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Faq {
    pub id: u32,
    pub question: &'static str,
    pub answer: &'static str,
}

const NOTICES: &[Notice] = &[
    Notice {
        id: 1,
        title: "Service update notice",
        date: "2024-01-15",
        content: "The storefront has been updated with faster search and a new checkout flow.",
    },
    Notice {
        id: 2,
        title: "Privacy policy changes",
        date: "2024-01-10",
        content: "Our privacy policy has changed. Please review the updated terms.",
    },
];

const FAQS: &[Faq] = &[
    Faq {
        id: 1,
        question: "How long does delivery take?",
        answer: "Delivery usually takes 2-3 days.",
    },
    Faq {
        id: 2,
        question: "How do I return or exchange an item?",
        answer: "Please contact the customer center.",
    },
];

/// Notices, newest first.
pub fn notices() -> Vec<&'static Notice> {
    let mut notices: Vec<&Notice> = NOTICES.iter().collect();
    // ISO dates order correctly as strings
    notices.sort_by(|a, b| b.date.cmp(a.date));
    notices
}

pub fn faqs() -> &'static [Faq] {
    FAQS
}

/// A submitted 1:1 inquiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inquiry {
    pub title: String,
    pub content: String,
}

impl Inquiry {
    /// Build an inquiry from the form. Title and content are trimmed and required.
    pub fn new(title: &str, content: &str) -> Result<Self, CommerceError> {
        let title = title.trim();
        let content = content.trim();

        let missing: Vec<&str> = [("title", title), ("content", content)]
            .into_iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(field, _)| field)
            .collect();
        if !missing.is_empty() {
            return Err(CommerceError::MissingFields(missing.join(", ")));
        }

        tracing::info!(title, "Inquiry submitted");
        Ok(Self {
            title: title.to_string(),
            content: content.to_string(),
        })
    }
}

// Response envelope types
//
// Every routing path converges to a ResponsePayload; the caller never sees a
// raw error. Fixed-message constructors live here so the router branches
// stay declarative.

use serde::{Deserialize, Serialize};

/// Payload discriminator, serialized UPPERCASE to match the wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PayloadKind {
    Order,
    Price,
    Product,
    Text,
}

/// The sole externally observable output of the routing engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponsePayload {
    #[serde(rename = "type")]
    pub kind: PayloadKind,
    pub message: String,
    pub link: Option<String>,
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_answer: Option<bool>,
}

impl ResponsePayload {
    /// Plain TEXT payload with no link or image.
    pub fn text(message: impl Into<String>) -> Self {
        Self {
            kind: PayloadKind::Text,
            message: message.into(),
            link: None,
            image: None,
            has_answer: None,
        }
    }

    /// Fixed greeting, also used as the unrecognized-label recovery payload.
    pub fn greeting() -> Self {
        Self::text("Hello! How can I assist you today?")
    }

    /// FAQ hit: the collaborator's answer with an intentionally empty link.
    pub fn faq_answer(message: impl Into<String>) -> Self {
        Self {
            kind: PayloadKind::Text,
            message: message.into(),
            link: Some(String::new()),
            image: None,
            has_answer: Some(true),
        }
    }

    /// FAQ miss: canned apology pointing into the FAQ anchor section.
    pub fn faq_missing(domain_fe: &str) -> Self {
        Self {
            kind: PayloadKind::Text,
            message: "I'm sorry, I don’t have that info right now.".to_string(),
            link: Some(format!("{}#faqSection", domain_fe.trim_end_matches('/'))),
            image: None,
            has_answer: Some(false),
        }
    }

    /// Product-path fallback pointing at the catalog root.
    pub fn product_missing(domain_fe: &str) -> Self {
        Self {
            kind: PayloadKind::Product,
            message: "Sorry! couldn't find the product you're looking for, please checkout our product page from below link.".to_string(),
            link: Some(format!("{domain_fe}/collections/no-sidebar")),
            image: None,
            has_answer: Some(false),
        }
    }
}

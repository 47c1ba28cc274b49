// FAQ semantic-search collaborator interface
//
// The embedding-based nearest-neighbor lookup lives outside this crate; the
// router only needs the answer envelope. NoFaq is the stand-in used when no
// search backend is wired up, so the FAQ path degrades to the canned
// "no info" payload instead of failing.

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Result of one FAQ lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqAnswer {
    pub message: String,
    pub has_answer: bool,
    pub link: Option<String>,
    pub image: Option<String>,
}

impl FaqAnswer {
    /// The collaborator's canonical miss.
    pub fn no_answer() -> Self {
        Self {
            message: "No relevant answer found.".to_string(),
            has_answer: false,
            link: None,
            image: None,
        }
    }
}

/// Semantic FAQ search collaborator.
#[async_trait]
pub trait FaqSearch: Send + Sync {
    async fn lookup(&self, message: &str) -> Result<FaqAnswer>;
}

/// Always reports a miss. Used in tests and when no backend is configured.
pub struct NoFaq;

#[async_trait]
impl FaqSearch for NoFaq {
    async fn lookup(&self, _message: &str) -> Result<FaqAnswer> {
        Ok(FaqAnswer::no_answer())
    }
}

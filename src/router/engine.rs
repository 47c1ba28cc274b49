// Engine: top-level message dispatch
//
// One entry point per user turn. Greeting short-circuit first, then the
// classifier oracle splits FAQ from Product. Every branch resolves to a
// ResponsePayload; callers never see an Err.

use std::sync::Arc;

use crate::db::QueryExecutor;
use crate::faq::FaqSearch;
use crate::oracle::CompletionOracle;
use crate::payload::ResponsePayload;
use crate::prompts;

use super::product::handle_product;

/// Greeting tokens checked by containment against the normalized message.
pub const GREETING_WORDS: &[&str] = &["hi", "hello", "hey", "greetings", "what's up", "howdy"];

/// Knobs the engine needs beyond its collaborators.
#[derive(Debug, Clone)]
pub struct EngineSettings {
    /// Storefront base URL used to build outbound links.
    pub domain_fe: String,
    /// Fuzzy-match cutoff for the phrase catalogs, 0..=100.
    pub similarity_threshold: u8,
}

/// The routing engine. Cheap to clone; collaborators are shared.
#[derive(Clone)]
pub struct Engine {
    oracle: Arc<dyn CompletionOracle>,
    executor: Arc<dyn QueryExecutor>,
    faq: Arc<dyn FaqSearch>,
    settings: EngineSettings,
}

impl Engine {
    pub fn new(
        oracle: Arc<dyn CompletionOracle>,
        executor: Arc<dyn QueryExecutor>,
        faq: Arc<dyn FaqSearch>,
        settings: EngineSettings,
    ) -> Self {
        tracing::debug!(oracle = oracle.name(), "engine constructed");
        Self {
            oracle,
            executor,
            faq,
            settings,
        }
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Route one user turn to its payload.
    pub async fn answer(&self, message: &str, customer_id: Option<&str>) -> ResponsePayload {
        let normalized = message.trim().to_lowercase();

        if GREETING_WORDS.iter().any(|w| normalized.contains(w)) {
            tracing::debug!("greeting short-circuit");
            return ResponsePayload::greeting();
        }

        let label = match self
            .oracle
            .complete(prompts::CLASSIFY_MESSAGE, &normalized)
            .await
        {
            Ok(raw) => raw.trim().to_string(),
            Err(err) => {
                tracing::warn!(error = %err, "classifier call failed, answering with greeting");
                return ResponsePayload::greeting();
            }
        };

        tracing::info!(%label, "message classified");

        match label.as_str() {
            "FAQ" => self.answer_faq(&normalized).await,
            "Product" => {
                let customer_id = customer_id.unwrap_or_default();
                match handle_product(
                    self.oracle.as_ref(),
                    self.executor.as_ref(),
                    &self.settings,
                    &normalized,
                    customer_id,
                )
                .await
                {
                    Ok(payload) => payload,
                    Err(err) => {
                        tracing::warn!(error = %err, "product pipeline failed");
                        err.to_payload(&self.settings.domain_fe)
                    }
                }
            }
            other => {
                tracing::warn!(label = other, "unrecognized classifier label");
                ResponsePayload::greeting()
            }
        }
    }

    async fn answer_faq(&self, message: &str) -> ResponsePayload {
        match self.faq.lookup(message).await {
            Ok(answer) if answer.has_answer => ResponsePayload::faq_answer(answer.message),
            Ok(_) => ResponsePayload::faq_missing(&self.settings.domain_fe),
            Err(err) => {
                tracing::warn!(error = %err, "faq lookup failed");
                ResponsePayload::faq_missing(&self.settings.domain_fe)
            }
        }
    }
}

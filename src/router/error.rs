// Routing failure taxonomy
//
// Every failure in the product pipeline maps to a user-facing payload here.
// Nothing escapes the router as a raw error.

use thiserror::Error;

use super::select::QueryKind;
use crate::payload::ResponsePayload;

#[derive(Debug, Error)]
pub enum RouteError {
    /// An oracle call (SQL generation or response shaping) failed or timed out.
    #[error("completion oracle call failed: {0}")]
    Oracle(#[source] anyhow::Error),

    /// The generated SQL was empty after stripping code fences.
    #[error("generated query was empty")]
    EmptyQuery,

    /// The store raised while executing the generated SQL.
    #[error("query execution failed: {0}")]
    Execution(#[source] anyhow::Error),

    /// The query ran but returned zero rows.
    #[error("query returned no rows")]
    NoResults { kind: QueryKind },

    /// A template-contract column was absent (or null) in the first row.
    #[error("row missing expected column `{column}`")]
    MissingColumn { column: &'static str },

    /// The matched product carries an empty price chart.
    #[error("price chart for the matched product is empty")]
    EmptyPriceChart,
}

impl RouteError {
    /// Convert a pipeline failure into the payload the caller sees.
    pub fn to_payload(&self, domain_fe: &str) -> ResponsePayload {
        match self {
            RouteError::EmptyQuery => {
                ResponsePayload::text("Generated query was empty or invalid.")
            }
            RouteError::Execution(_) => {
                ResponsePayload::text("Sorry, there was an error processing your query.")
            }
            RouteError::NoResults {
                kind: QueryKind::OrderLookup,
            } => ResponsePayload::text("Sorry, no recent orders found."),
            RouteError::NoResults { .. } | RouteError::EmptyPriceChart => {
                ResponsePayload::text("Sorry, no results found based on your query.")
            }
            RouteError::Oracle(_) | RouteError::MissingColumn { .. } => {
                ResponsePayload::product_missing(domain_fe)
            }
        }
    }
}

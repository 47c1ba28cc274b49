// Intent signal computation
//
// Three independent boolean signals are derived from the raw message text.
// They are not mutually exclusive; the router resolves overlaps by a fixed
// priority order (see router::select).

use once_cell::sync::Lazy;
use regex::Regex;

use super::phrases::{ORDER_PHRASES, PRICE_PHRASES};
use super::similarity;

/// Independently-computed intent booleans for one message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IntentSignal {
    pub is_recent_order: bool,
    pub is_price_calculation: bool,
    pub is_price_and_quantity: bool,
}

/// Compute all intent signals for a message.
///
/// `threshold` is the 0-100 similarity cutoff for the fuzzy phrase catalogs
/// (80 in production; exposed so tests can sweep it). Input is lower-cased
/// and trimmed before matching; deterministic, no side effects.
pub fn classify(message: &str, threshold: u8) -> IntentSignal {
    let normalized = message.trim().to_lowercase();

    let is_recent_order = matches_catalog(&normalized, ORDER_PHRASES, threshold);
    let is_price_calculation = matches_catalog(&normalized, PRICE_PHRASES, threshold);
    let is_price_and_quantity = has_price_quantity_details(&normalized);

    tracing::debug!(
        recent_order = is_recent_order,
        price_calculation = is_price_calculation,
        price_and_quantity = is_price_and_quantity,
        "intent signals"
    );

    IntentSignal {
        is_recent_order,
        is_price_calculation,
        is_price_and_quantity,
    }
}

fn matches_catalog(message: &str, catalog: &[&str], threshold: u8) -> bool {
    catalog
        .iter()
        .any(|phrase| similarity::ratio(message, phrase) > threshold)
}

static PRODUCT_NOUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:product|item|pone)\b").unwrap());
static SIZE_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(?:width)\b").unwrap());
static ATTACHMENT_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:attachment|style|clip)\b").unwrap());
static QUANTITY_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:quantity|amount|number|of\s+\d+)\b").unwrap());
static BARE_INTEGER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d+\b").unwrap());

/// True iff the message names a product, a width, an attachment style, and a
/// quantity, and carries at least one bare integer. All five conditions must
/// hold; missing any one disqualifies the message.
pub fn has_price_quantity_details(message: &str) -> bool {
    let normalized = message.to_lowercase();

    PRODUCT_NOUN.is_match(&normalized)
        && SIZE_TOKEN.is_match(&normalized)
        && ATTACHMENT_TOKEN.is_match(&normalized)
        && QUANTITY_TOKEN.is_match(&normalized)
        && BARE_INTEGER.is_match(&normalized)
}

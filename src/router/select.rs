// Template selection
//
// Overlapping intent signals are resolved here into a single QueryKind by a
// fixed priority order, before any handler runs. Branch order is load-bearing:
// a message can match both the price and order catalogs, and the price paths
// win by product decision.

use crate::intent::IntentSignal;
use crate::prompts;

/// The resolved query category for one message. Exactly one per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    PriceLookup,
    PriceWithQuantity,
    OrderLookup,
    ProductFilter,
}

impl QueryKind {
    /// Collapse intent signals by priority: price calculation, then
    /// price-with-quantity, then recent order, else the generic filter.
    pub fn resolve(signal: IntentSignal) -> Self {
        if signal.is_price_calculation {
            QueryKind::PriceLookup
        } else if signal.is_price_and_quantity {
            QueryKind::PriceWithQuantity
        } else if signal.is_recent_order {
            QueryKind::OrderLookup
        } else {
            QueryKind::ProductFilter
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            QueryKind::PriceLookup => "price_lookup",
            QueryKind::PriceWithQuantity => "price_with_quantity",
            QueryKind::OrderLookup => "order_lookup",
            QueryKind::ProductFilter => "product_filter",
        }
    }
}

/// A SQL-generation instruction body with its bound human turn.
#[derive(Debug, Clone)]
pub struct BoundPrompt {
    pub kind: QueryKind,
    pub system: &'static str,
    pub human: String,
}

/// Bind the user message (and customer id, for order lookups) to the
/// selected template. Template bodies are static; only the trailing human
/// turn varies.
pub fn select_template(kind: QueryKind, message: &str, customer_id: &str) -> BoundPrompt {
    let (system, human) = match kind {
        QueryKind::PriceLookup => (prompts::SQL_PRICE, message.to_string()),
        QueryKind::PriceWithQuantity => (prompts::SQL_PRICE_QUANTITY, message.to_string()),
        QueryKind::OrderLookup => (prompts::SQL_ORDER, format!("{message} | {customer_id}")),
        QueryKind::ProductFilter => (prompts::SQL_PRODUCT, message.to_string()),
    };

    BoundPrompt {
        kind,
        system,
        human,
    }
}

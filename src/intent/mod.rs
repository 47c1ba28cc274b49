// Intent detection module
// Fuzzy phrase matching and keyword checks over raw customer messages

mod phrases;
mod signals;
pub mod similarity;

pub use phrases::{ORDER_PHRASES, PRICE_PHRASES};
pub use signals::{classify, has_price_quantity_details, IntentSignal};

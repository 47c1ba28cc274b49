// Routing engine
// Public interface for message routing decisions

mod engine;
mod error;
mod product;
mod select;
mod shape;

pub use engine::{Engine, EngineSettings, GREETING_WORDS};
pub use error::RouteError;
pub use select::{select_template, BoundPrompt, QueryKind};
pub use shape::{OrderRow, PriceQuantityRow, PriceRow, ProductRow};

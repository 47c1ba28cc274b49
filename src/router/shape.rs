// Typed row shapes per query kind
//
// Each SQL template's worked examples imply specific output column names.
// These views make that contract explicit: a template edit that renames a
// column fails here with a named error instead of at ad-hoc row access.

use serde_json::Value;

use super::error::RouteError;
use crate::db::Row;

/// Columns the order-lookup template promises.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRow {
    pub title: String,
    pub order_id: String,
    pub product_id: String,
    pub status: String,
    pub total_price: String,
    pub image_url: String,
}

impl OrderRow {
    pub fn from_row(row: &Row) -> Result<Self, RouteError> {
        Ok(Self {
            title: require(row, "title")?,
            order_id: require(row, "id")?,
            product_id: require(row, "product_id")?,
            status: require(row, "status")?,
            total_price: require(row, "total_price")?,
            image_url: require(row, "product_image_url")?,
        })
    }
}

/// Columns the price-lookup template promises; price and quantity come from
/// the first entry of the jsonb `price_chart` array.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceRow {
    pub title: String,
    pub product_id: String,
    pub image_url: String,
    pub price: String,
    pub quantity: String,
}

impl PriceRow {
    pub fn from_row(row: &Row) -> Result<Self, RouteError> {
        let chart = row
            .get("price_chart")
            .ok_or(RouteError::MissingColumn {
                column: "price_chart",
            })?;

        let entries = chart.as_array().ok_or(RouteError::MissingColumn {
            column: "price_chart",
        })?;

        let first = entries.first().ok_or(RouteError::EmptyPriceChart)?;

        Ok(Self {
            title: require(row, "title")?,
            product_id: require(row, "id")?,
            image_url: require(row, "url")?,
            price: require_entry(first, "price")?,
            quantity: require_entry(first, "quantity")?,
        })
    }
}

/// The price-with-nearest-quantity template returns the price directly.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceQuantityRow {
    pub price: String,
}

impl PriceQuantityRow {
    pub fn from_row(row: &Row) -> Result<Self, RouteError> {
        Ok(Self {
            price: require(row, "price")?,
        })
    }
}

/// Columns the generic product-filter template promises.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRow {
    pub title: String,
    pub product_id: String,
    pub image_url: String,
}

impl ProductRow {
    pub fn from_row(row: &Row) -> Result<Self, RouteError> {
        Ok(Self {
            title: require(row, "title")?,
            product_id: require(row, "id")?,
            image_url: require(row, "url")?,
        })
    }
}

/// Fetch a required column as display text. Null counts as missing: the
/// shapers have no sensible rendering for an absent title or id.
fn require(row: &Row, column: &'static str) -> Result<String, RouteError> {
    row.get(column)
        .and_then(display)
        .ok_or(RouteError::MissingColumn { column })
}

fn require_entry(entry: &Value, column: &'static str) -> Result<String, RouteError> {
    entry
        .get(column)
        .and_then(display)
        .ok_or(RouteError::MissingColumn { column })
}

/// Render a JSON scalar the way it reads in a sentence: strings unquoted,
/// numbers verbatim.
fn display(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

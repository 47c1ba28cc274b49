// Query execution abstraction
//
// The router hands generated SQL text to a QueryExecutor and gets back rows
// as ordered column -> value mappings. Tests substitute scripted executors;
// production uses the PostgreSQL implementation in postgres.rs.

use anyhow::Result;
use async_trait::async_trait;
use indexmap::IndexMap;

mod postgres;

pub use postgres::PgExecutor;

/// One result row: column name -> JSON value, in select-list order.
/// Temporal columns arrive already serialized to ISO-8601 text.
pub type Row = IndexMap<String, serde_json::Value>;

/// Executes one SQL statement per call.
///
/// Outcome contract:
/// - `Ok(None)` — the statement produced no result set (no columns);
/// - `Ok(Some(vec![]))` — a result set with zero rows;
/// - `Ok(Some(rows))` — data;
/// - `Err(_)` — malformed SQL, connection failure, or timeout.
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    async fn execute(&self, sql: &str) -> Result<Option<Vec<Row>>>;
}

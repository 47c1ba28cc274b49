// PostgreSQL query executor
//
// One pooled connection per call, bounded by a statement timeout. The
// generated SQL is trusted only as far as read access goes; anything the
// database rejects surfaces as an execution error for the router to recover.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;
use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};
use sqlx::{Column, Executor, Row as _, Statement, TypeInfo};

use super::{QueryExecutor, Row};

/// sqlx-backed executor for the storefront PostgreSQL database.
pub struct PgExecutor {
    pool: PgPool,
    statement_timeout: Duration,
}

impl PgExecutor {
    /// Create an executor with a lazily-connected pool.
    pub fn connect_lazy(database_url: &str, statement_timeout: Duration) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect_lazy(database_url)
            .context("Invalid database URL")?;

        Ok(Self {
            pool,
            statement_timeout,
        })
    }

    async fn execute_inner(&self, sql: &str) -> Result<Option<Vec<Row>>> {
        let mut conn = self
            .pool
            .acquire()
            .await
            .context("Failed to acquire database connection")?;

        let statement = (&mut *conn)
            .prepare(sql)
            .await
            .context("Failed to prepare query")?;

        // No column description means no result set (mirrors a driver
        // cursor with an empty description).
        if statement.columns().is_empty() {
            (&mut *conn)
                .execute(sql)
                .await
                .context("Failed to execute statement")?;
            return Ok(None);
        }

        let rows: Vec<PgRow> = statement
            .query()
            .fetch_all(&mut *conn)
            .await
            .context("Failed to execute query")?;

        let mapped = rows
            .iter()
            .map(row_to_map)
            .collect::<Result<Vec<Row>>>()?;

        Ok(Some(mapped))
    }
}

#[async_trait]
impl QueryExecutor for PgExecutor {
    async fn execute(&self, sql: &str) -> Result<Option<Vec<Row>>> {
        tracing::debug!(sql, "executing generated query");

        tokio::time::timeout(self.statement_timeout, self.execute_inner(sql))
            .await
            .context("Query timed out")?
    }
}

/// Decode one row into an ordered column -> JSON value mapping.
///
/// Timestamps become ISO-8601 strings, numerics keep exact decimal text,
/// jsonb passes through untouched (the price path reads `price_chart`
/// directly as a JSON array).
fn row_to_map(row: &PgRow) -> Result<Row> {
    let mut map = Row::new();

    for (index, column) in row.columns().iter().enumerate() {
        let value = decode_column(row, index, column.type_info().name())
            .with_context(|| format!("Failed to decode column `{}`", column.name()))?;
        map.insert(column.name().to_string(), value);
    }

    Ok(map)
}

fn decode_column(row: &PgRow, index: usize, type_name: &str) -> Result<Value> {
    let value = match type_name {
        "INT2" => row
            .try_get::<Option<i16>, _>(index)?
            .map_or(Value::Null, Value::from),
        "INT4" => row
            .try_get::<Option<i32>, _>(index)?
            .map_or(Value::Null, Value::from),
        "INT8" => row
            .try_get::<Option<i64>, _>(index)?
            .map_or(Value::Null, Value::from),
        "FLOAT4" => row
            .try_get::<Option<f32>, _>(index)?
            .map_or(Value::Null, |v| Value::from(v as f64)),
        "FLOAT8" => row
            .try_get::<Option<f64>, _>(index)?
            .map_or(Value::Null, Value::from),
        "NUMERIC" => row
            .try_get::<Option<BigDecimal>, _>(index)?
            .map_or(Value::Null, |v| Value::String(v.normalized().to_string())),
        "BOOL" => row
            .try_get::<Option<bool>, _>(index)?
            .map_or(Value::Null, Value::from),
        "TIMESTAMP" => row
            .try_get::<Option<NaiveDateTime>, _>(index)?
            .map_or(Value::Null, |v| {
                Value::String(v.format("%Y-%m-%dT%H:%M:%S%.f").to_string())
            }),
        "TIMESTAMPTZ" => row
            .try_get::<Option<DateTime<Utc>>, _>(index)?
            .map_or(Value::Null, |v| Value::String(v.to_rfc3339())),
        "DATE" => row
            .try_get::<Option<NaiveDate>, _>(index)?
            .map_or(Value::Null, |v| Value::String(v.format("%Y-%m-%d").to_string())),
        "JSON" | "JSONB" => row
            .try_get::<Option<Value>, _>(index)?
            .unwrap_or(Value::Null),
        "TEXT" | "VARCHAR" | "BPCHAR" | "CHAR" | "NAME" => row
            .try_get::<Option<String>, _>(index)?
            .map_or(Value::Null, Value::String),
        other => {
            // Unknown types: best-effort text decode, null if that fails
            match row.try_get::<Option<String>, _>(index) {
                Ok(v) => v.map_or(Value::Null, Value::String),
                Err(_) => {
                    tracing::warn!(type_name = other, "undecodable column type, returning null");
                    Value::Null
                }
            }
        }
    };

    Ok(value)
}

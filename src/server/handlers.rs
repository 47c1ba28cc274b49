// HTTP handlers

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};

use super::wire::{QueryEnvelope, QueryRequest, QueryResult, ResponseShape};
use crate::router::Engine;

pub fn create_router(engine: Engine) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/query", post(handle_query))
        .with_state(engine)
}

pub async fn health_check() -> &'static str {
    "OK"
}

/// One user turn. The engine resolves every failure to a payload, so this
/// handler always answers 200 on well-formed input.
pub async fn handle_query(
    State(engine): State<Engine>,
    Json(request): Json<QueryRequest>,
) -> Json<QueryEnvelope> {
    tracing::info!(message = %request.message, "query received");

    let payload = engine
        .answer(&request.message, request.customer_id.as_deref())
        .await;

    Json(QueryEnvelope {
        result: QueryResult {
            message: request.message,
            response: ResponseShape::from_payload(payload),
            customer_id: request.customer_id,
        },
    })
}

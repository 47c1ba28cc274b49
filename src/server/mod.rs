// HTTP server
// Thin axum shell over Engine::answer

mod handlers;
mod wire;

pub use handlers::{create_router, handle_query, health_check};
pub use wire::{QueryEnvelope, QueryRequest, QueryResult, ResponseShape};

use anyhow::{Context, Result};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::router::Engine;

/// Bind and serve until the process is stopped.
pub async fn serve(engine: Engine, bind_address: &str) -> Result<()> {
    let app = create_router(engine)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(bind_address)
        .await
        .with_context(|| format!("failed to bind {bind_address}"))?;

    tracing::info!(%bind_address, "server listening");
    axum::serve(listener, app).await?;
    Ok(())
}

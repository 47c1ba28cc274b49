// Strapline - storefront support chatbot routing engine
// Main entry point

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use strapline::config::load_settings;
use strapline::db::PgExecutor;
use strapline::faq::NoFaq;
use strapline::oracle::GeminiOracle;
use strapline::router::{Engine, EngineSettings};
use strapline::server;

#[derive(Parser, Debug)]
#[command(name = "strapline", about = "Storefront support chatbot routing engine")]
struct Args {
    /// Path to the TOML config file (defaults to ~/.strapline/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured bind address
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut settings = load_settings(args.config.as_deref())?;
    if let Some(bind) = args.bind {
        settings.server.bind_address = bind;
    }

    let oracle_timeout = Duration::from_secs(settings.gemini.timeout_secs);
    let mut oracle = GeminiOracle::new(settings.gemini.api_key.clone(), oracle_timeout)?;
    if let Some(model) = &settings.gemini.model {
        oracle = oracle.with_model(model.clone());
    }

    let statement_timeout = Duration::from_secs(settings.database_timeout_secs);
    let executor = PgExecutor::connect_lazy(&settings.database_url, statement_timeout)?;

    let engine = Engine::new(
        Arc::new(oracle),
        Arc::new(executor),
        Arc::new(NoFaq),
        EngineSettings {
            domain_fe: settings.domain_fe.clone(),
            similarity_threshold: settings.similarity_threshold,
        },
    );

    server::serve(engine, &settings.server.bind_address).await
}

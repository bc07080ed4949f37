mod config;
mod errors;
mod extraction;
mod followups;
mod llm_client;
mod routes;
mod scoring;
mod state;
mod text;

#[cfg(test)]
mod test_support;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting tracker API v{}", env!("CARGO_PKG_VERSION"));

    if config.llm.is_some() {
        info!("LLM client enabled (model: {})", llm_client::MODEL);
    } else {
        warn!("ANTHROPIC_API_KEY not set: AI fit scoring uses keywords, extraction is disabled");
    }
    info!(
        "Page fetcher: timeout {:?}, up to {} redirects, prefilter {}",
        config.fetch.timeout, config.fetch.max_redirects, config.extract.prefilter
    );

    let port = config.port;
    let state = AppState::from_config(config)?;

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{port}").parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

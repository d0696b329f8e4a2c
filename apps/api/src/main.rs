use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use leadscore_api::config::Config;
use leadscore_api::llm_client::LlmClient;
use leadscore_api::outreach::OutreachWriter;
use leadscore_api::routes::{build_router, cors_layer};
use leadscore_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "leadscore_api={0},{1}={0}",
                &config.rust_log,
                env!("CARGO_CRATE_NAME")
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting {} v{} ({})",
        config.app_name,
        env!("CARGO_PKG_VERSION"),
        config.app_env
    );

    // AI outreach is optional; without a key every lead keeps its template.
    let writer = match &config.openai_api_key {
        Some(key) => {
            let llm = LlmClient::new(key.clone())?;
            info!("LLM client initialized (model: {})", config.openai_model);
            Some(OutreachWriter::new(Arc::new(llm), config.openai_model.clone()))
        }
        None => {
            warn!("OPENAI_API_KEY not set; AI outreach disabled");
            None
        }
    };

    let state = AppState {
        config: config.clone(),
        writer,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.cors_origins));

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use health_assistant_backend::analysis::{GeminiClient, SymptomAnalyzer};
use health_assistant_backend::api::{start_api_server, ApiContext};
use health_assistant_backend::config::{self, AppConfig};
use health_assistant_backend::places::PlacesClient;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    let config = AppConfig::from_env();
    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    if config.gemini_api_key.is_empty() {
        tracing::warn!("GEMINI_API_KEY is not set; analysis requests will fail");
    }
    if config.places_api_key.is_empty() {
        tracing::warn!(
            "GOOGLE_MAPS_API_KEY is not set; facility lookups will use the static fallback"
        );
    }

    let llm = GeminiClient::new(
        &config.gemini_base_url,
        &config.gemini_api_key,
        config.request_timeout_secs,
    );
    let analyzer = Arc::new(SymptomAnalyzer::new(Box::new(llm), &config.gemini_model));
    let places = Arc::new(PlacesClient::new(
        &config.places_base_url,
        &config.places_api_key,
        config.request_timeout_secs,
    ));
    let ctx = ApiContext::new(analyzer, places);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let mut server = match start_api_server(ctx, addr).await {
        Ok(server) => server,
        Err(e) => {
            tracing::error!("Failed to start API server: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(
        addr = %server.session.server_addr,
        "Analyze endpoint: POST /analyze-symptoms, health check: GET /health"
    );

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
    }
    server.shutdown();
    // Give the background task a moment to finish the graceful shutdown
    tokio::time::sleep(std::time::Duration::from_millis(100)).await;
}

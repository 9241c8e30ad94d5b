//! Vocabulary coach HTTP server
//!
//! Main entry point for the transcription proxy.

use std::time::Duration;

use axum::{
    Router,
    http::{HeaderValue, Method},
};
use infrastructure::{AppConfig, EnvSecretStore, ServerConfig, init_logging};
use presentation_http::{AppState, RequestIdLayer, routes};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Fall back to defaults so a broken file still lets us log why
    let (mut config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    init_logging(&config.server)?;
    if let Some(e) = load_error {
        warn!(error = %e, "Failed to load config, using defaults");
    }

    info!("Vocab coach v{} starting...", env!("CARGO_PKG_VERSION"));

    config.resolve_secrets(&EnvSecretStore::new()).await;

    info!(
        host = %config.server.host,
        port = config.server.port,
        transcription = config.transcription.has_credentials(),
        completion = config.completion.is_configured(),
        "Configuration loaded"
    );

    let state = AppState::from_config(&config);
    let app = with_middleware(routes::create_router(state), &config.server);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs.unwrap_or(30));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_timeout))
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Add tracing, request id and CORS layers (last added = outermost)
fn with_middleware(app: Router, server: &ServerConfig) -> Router {
    let app = app.layer(TraceLayer::new_for_http()).layer(RequestIdLayer::new());

    if !server.cors_enabled {
        return app;
    }

    let cors = if server.allowed_origins.is_empty() {
        // Development mode: allow all origins
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = server
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any)
    };

    app.layer(cors)
}

/// Wait for SIGINT or SIGTERM
async fn shutdown_signal(timeout: Duration) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, initiating graceful shutdown..."),
        () = terminate => info!("Received SIGTERM, initiating graceful shutdown..."),
    }

    // Hard stop if draining connections takes too long
    tokio::spawn(async move {
        tokio::time::sleep(timeout).await;
        warn!(?timeout, "Graceful shutdown timed out, exiting");
        std::process::exit(1);
    });
}

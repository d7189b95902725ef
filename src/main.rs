//! Whop Webhooks - Main Entry Point
//!
//! Loads configuration, wires the verifier and dispatcher, and serves the
//! webhook endpoint until interrupted.

use std::sync::Arc;

use tokio::signal;
use tracing::info;
use tracing_subscriber::EnvFilter;

use whop_webhooks::adapters::default_registry;
use whop_webhooks::adapters::http::{app_router, WebhookAppState};
use whop_webhooks::application::{EventDispatcher, HandleWebhookHandler};
use whop_webhooks::config::AppConfig;
use whop_webhooks::domain::webhook::SignatureVerifier;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config);

    if let Err(err) = config.validate() {
        tracing::error!(error = %err, "Invalid configuration");
        return Err(err.into());
    }

    info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = ?config.server.environment,
        "Starting Whop webhook receiver"
    );

    let verifier = Arc::new(SignatureVerifier::new(config.webhook.webhook_secret()));
    let registry = default_registry();
    info!(kinds = ?registry.kinds(), "Handlers registered");

    let dispatcher = Arc::new(
        EventDispatcher::new(Arc::new(registry))
            .with_handler_timeout(config.webhook.handler_timeout())
            .with_mode(config.webhook.dispatch_mode),
    );

    let state = WebhookAppState::new(
        HandleWebhookHandler::new(verifier, dispatcher),
        config.webhook.signature_header_name()?,
    );
    let app = app_router(state, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(address = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// JSON logs in production, human-readable otherwise. `RUST_LOG` wins over
/// the configured filter.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C signal, starting graceful shutdown"),
        _ = terminate => info!("Received terminate signal, starting graceful shutdown"),
    }
}

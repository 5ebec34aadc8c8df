//! WhatsApp Gateway - Entry point.

use message_log::MessageLogStore;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use wa_gateway::{
    api::{create_router, AppState},
    config::{Config, LogStoreKind},
};
use wa_session::{SessionClient, SessionState, SessionWatcher};

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config.log_level);

    info!("Starting WhatsApp Gateway");

    // Provision the message log before anything can send
    let log_store = match config.log_store {
        LogStoreKind::Mysql => match MessageLogStore::mysql(&config.db_settings()).await {
            Ok(s) => s,
            Err(e) => {
                error!("Failed to initialize message log: {}", e);
                std::process::exit(1);
            }
        },
        LogStoreKind::Memory => MessageLogStore::memory(),
    };

    // Connect to the session bridge
    let session = match SessionClient::new(&config.session_url, SessionState::new()) {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to create session client: {}", e);
            std::process::exit(1);
        }
    };

    if !session.health_check().await {
        error!("Session bridge not reachable at {}", config.session_url);
        std::process::exit(1);
    }
    info!("Session bridge healthy");

    // Track pairing lifecycle in the background
    let watcher = SessionWatcher::new(session.clone(), config.session_poll_interval);
    tokio::spawn(watcher.run());

    let state = AppState::new(
        config.auth_key.clone(),
        config.sender_id(),
        session,
        log_store,
    );
    let app = create_router(state);

    // Bind to address
    let addr = match config.bind_addr() {
        Ok(addr) => addr,
        Err(e) => {
            error!("Invalid listen address: {:#}", e);
            std::process::exit(1);
        }
    };

    let listener = match TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            error!("Failed to bind to {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    info!("Server running on http://{}", addr);

    // Run server
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {}", e);
        std::process::exit(1);
    }

    info!("Shutting down...");
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

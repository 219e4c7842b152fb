//! billar-server binary
//!
//! Loads `.env`, configures logging, opens the database and serves HTTP.

use billar_server::{AppState, BoxError, Config, api, logger};

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    let config = Config::from_env()?;

    // Held until shutdown so buffered file logs are flushed
    let _log_guard = logger::init_logger_with_file(&config.log_level, config.log_dir.as_deref());

    tracing::info!(
        "Starting billar-server {} (env: {})",
        env!("CARGO_PKG_VERSION"),
        config.environment
    );

    let state = AppState::new(&config).await?;
    let app = api::build_app(state);

    let addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("billar-server HTTP listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("billar-server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

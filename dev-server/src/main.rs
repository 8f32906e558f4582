//! Development server for UI work
//!
//! Runs the mock JSON API (including the session endpoint) on a fixed port
//! so the UI can be served against it.
//!
//! Environment variables, read directly or from a .env file:
//! - IP_ADDRESS: bind address (default 127.0.0.1)
//! - PORT: port (default 8000)
//! - ALLOWED_ORIGINS: CORS origins, "*" or a comma-separated list
//! - SIGNED_IN: whether the session starts signed in (default true)
//!
//! Usage: cargo run -p dev-server

use anyhow::Result;
use test_helpers::mock::{self, Config};
use test_helpers::telemetry::{get_subscriber, init_subscriber, log_error};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Silently ignored if the file doesn't exist
    let _ = dotenvy::dotenv();

    let subscriber = get_subscriber("info".into());
    init_subscriber(subscriber)?;

    let mut config = Config::from_env()?;
    info!("🚀 Starting mock API");

    let (server, state) = mock::build(&mut config)?;
    let handle = server.handle();
    let server = tokio::spawn(server);

    info!("✅ API server running on http://{}:{}", config.ip, config.port);
    info!(
        "   UI:  cd ui && API_BASE_URL=http://{}:{} trunk serve",
        config.ip, config.port
    );
    info!(
        "   Session user: {} ({})",
        state.user().primary_email().unwrap_or("no email"),
        if config.signed_in { "signed in" } else { "signed out" }
    );
    info!("👋 Press Ctrl+C to shutdown");

    tokio::signal::ctrl_c().await?;
    info!("🛑 Shutting down development server");
    handle.stop(true).await;
    if let Err(e) = server.await? {
        log_error(e);
    }
    Ok(())
}

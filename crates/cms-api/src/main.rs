//! CMS API server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p cms-api
//! ```
//!
//! Configuration is loaded from environment variables (or a .env file).

use cms_common::{try_init_tracing, AppConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Initialize tracing
    if let Err(e) = try_init_tracing() {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    // Run the server
    if let Err(e) = run().await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting CMS API server...");

    // Load configuration
    let config = AppConfig::from_env().map_err(|e| {
        error!(error = %e, "Failed to load configuration");
        e
    })?;

    info!(
        env = ?config.app.env,
        port = config.server.port,
        "Configuration loaded"
    );

    // Run the server
    cms_api::run(config).await?;

    Ok(())
}

use anyhow::{anyhow, Result};
use std::env;
use tokio::net::TcpListener;
use tracing::info;

use janus::api::{create_router, AppState};
use janus::logging::configure_logging;

#[tokio::main]
async fn main() -> Result<()> {
    configure_logging();

    let api_key = env::var("ANTHROPIC_API_KEY")
        .map_err(|_| anyhow!("ANTHROPIC_API_KEY environment variable required"))?;

    // Determine the port to listen on
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(3000);

    let state = AppState {
        client: reqwest::Client::new(),
        api_key,
    };
    let app = create_router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running at http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

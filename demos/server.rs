//! Example server: loads settings from the environment (or `.env`), builds the
//! invoice service against SERVER_BASE_PATH and serves the invoice pages.

use invoice_portal::{app, load_from_env, AppState};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("invoice_portal=info,tower_http=info")),
        )
        .init();

    let config = load_from_env()?;
    tracing::info!(
        backend = %config.client.server_base_path,
        max_retries = config.client.max_retries,
        "invoice backend"
    );
    let state = AppState::from_config(&config.client)?;
    let router = app(state, config.server.max_body_bytes);

    let listener = TcpListener::bind(config.server.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}

mod config;
mod error;
mod routes;

use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    // A missing .env is normal outside local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env()?;
    let app = routes::app(&config)?;
    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .map_err(ServerError::Bind)?;

    tracing::info!(port = config.port, "bankabc portal listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}

#![recursion_limit = "256"]

mod config;
mod error;
mod routes;

use error::StartupError;

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    // A missing .env is normal outside local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::HostConfig::from_env()?;
    let app = routes::app()?;
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr).await.map_err(StartupError::Bind)?;

    tracing::info!(%addr, "taskdeck listening");
    axum::serve(listener, app).await.map_err(StartupError::Serve)
}

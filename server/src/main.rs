//! SSR host for the pawchat Leptos client.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders the client routes on the server and serves the hydrate bundle.
//! The chat backend (`/auth`, `/users/*`) is a separate service the browser
//! calls directly; nothing here proxies or implements it.

mod config;
mod error;
mod routes;

use std::process::ExitCode;

use crate::config::ServerConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "pawchat host stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ServerError> {
    let config = ServerConfig::from_env()?;
    let app = routes::app()?;

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind { addr: addr.clone(), source })?;

    tracing::info!(%addr, "pawchat listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}

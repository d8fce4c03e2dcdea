//! # portfolio
//!
//! Axum host for the portfolio page: server-renders the Leptos client,
//! serves the hydration bundle and answers health checks. It never receives
//! form submissions.

mod config;
mod error;
mod routes;

use leptos::prelude::get_configuration;

use crate::config::HostConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    tracing_subscriber::fmt::init();
    dotenvy::dotenv().ok();

    let config = HostConfig::from_env();
    let conf = get_configuration(None).map_err(|e| ServerError::Config(e.to_string()))?;
    let mut leptos_options = conf.leptos_options;
    if let Some(site_root) = &config.site_root {
        leptos_options.site_root = site_root.to_string_lossy().as_ref().into();
    }
    tracing::info!(site_root = %leptos_options.site_root, "leptos options loaded");

    let app = routes::app(leptos_options);
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!(%addr, "portfolio listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}

use anyhow::{Context, Result};
use axum::{extract::FromRef, Router};
use std::{net::SocketAddr, path::Path, sync::Arc};
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, fmt};

use crate::catalog::Catalog;
use crate::config::Settings;

// Declare modules
mod catalog;
mod config;
mod contact;
mod error;
mod filter;
mod models;
mod pagination;
mod render;
mod routes;
mod view;

// Shared application state: settings and the immutable catalog.
#[derive(Clone, FromRef)]
struct AppState {
    settings: Arc<Settings>,
    catalog: Arc<Catalog>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file first. Ignore errors (e.g., file not found)
    dotenv::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "mawater=info,tower_http=info".into()))
        .with(fmt::layer())
        .init();

    tracing::info!("Initializing Mawater listing server...");

    // Load configuration
    let settings = match Settings::new() {
        Ok(s) => {
            tracing::info!("Configuration loaded successfully.");
            s
        }
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e);
        }
    };
    let shared_settings = Arc::new(settings);

    // Load the catalog: a configured JSON file, or the built-in samples
    let catalog = match shared_settings.catalog_path.as_deref() {
        Some(path) => Catalog::from_json_file(Path::new(path))
            .context("Failed to load configured catalog")?,
        None => Catalog::builtin(),
    };
    if catalog.is_empty() {
        tracing::warn!("Catalog is empty; the listing page will have nothing to show.");
    }
    tracing::info!("Catalog ready with {} listings.", catalog.len());

    let app_state = AppState {
        settings: shared_settings.clone(),
        catalog: Arc::new(catalog),
    };

    let router: Router = routes::create_router(app_state.clone());

    // Combine the router with static file serving
    let app = router.nest_service("/static", ServeDir::new("static"));

    // Parse the server address from settings
    let addr: SocketAddr = app_state
        .settings
        .server_address
        .parse()
        .with_context(|| {
            format!(
                "Invalid server address format in configuration ('{}')",
                shared_settings.server_address
            )
        })?;

    // Create a TCP listener
    let listener = match TcpListener::bind(&addr).await {
        Ok(l) => {
            tracing::info!("Server listening on {}", addr);
            l
        }
        Err(e) => {
            tracing::error!("Failed to bind to address {}: {}", addr, e);
            return Err(e.into());
        }
    };

    // Run the server
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

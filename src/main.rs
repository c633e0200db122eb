mod config;
mod demo;
mod error;
mod llm;
mod routes;
mod state;
mod translate;

use anyhow::Result;
use axum::Router;
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "llm_translator=debug,tower_http=debug".into()),
        )
        .init();

    // Load configuration - CONFIG_PATH takes priority over the default file
    let config_paths: Vec<String> = vec![
        std::env::var("CONFIG_PATH").ok(),
        Some("conf.yaml".to_string()),
    ]
    .into_iter()
    .flatten()
    .collect();

    let config_paths_clone = config_paths.clone();
    let mut config = None;
    let mut loaded_path = String::new();

    for path in config_paths {
        match Config::load(&path) {
            Ok(cfg) => {
                config = Some(cfg);
                loaded_path = path;
                break;
            }
            Err(e) => {
                tracing::debug!("Failed to load config from {}: {}", path, e);
                continue;
            }
        }
    }

    let config = config.ok_or_else(|| {
        anyhow::anyhow!("Could not find config file. Tried: {:?}", config_paths_clone)
    })?;

    info!("Loaded configuration from: {}", loaded_path);

    // Credentials and endpoint must be usable before we accept traffic
    config.validate()?;

    let app_state = AppState::new(config.clone())?;

    let app = Router::new()
        .merge(routes::create_routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state);

    let addr = SocketAddr::new(config.system.host.parse()?, config.system.port);
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

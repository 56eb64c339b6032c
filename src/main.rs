mod chat_service;
mod config;
mod events;
mod preferences;
mod routes;
mod state;
mod translate;

use anyhow::Result;
use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("autotranslate_backend=debug,tower_http=debug")
        .init();

    // Load configuration - CONFIG_PATH wins, then the conventional names
    let config_paths: Vec<String> = vec![
        std::env::var("CONFIG_PATH").ok(),
        Some("conf.yaml".to_string()),
        Some("conf.json".to_string()),
        Some("config/conf.yaml".to_string()),
    ]
    .into_iter()
    .flatten()
    .collect();

    let mut config = None;
    let mut loaded_path = String::new();

    for path in &config_paths {
        match Config::load(path) {
            Ok(cfg) => {
                config = Some(cfg);
                loaded_path = path.clone();
                break;
            }
            Err(e) => {
                tracing::debug!("Failed to load config from {}: {}", path, e);
                continue;
            }
        }
    }

    let config = config.ok_or_else(|| {
        anyhow::anyhow!("Could not find config file. Tried: {:?}", config_paths)
    })?;

    info!("Loaded configuration from: {}", loaded_path);

    // Fails fast when the translation provider is missing or incomplete
    let app_state = AppState::new(config.clone())?;
    if let Some(provider) = &app_state.translator {
        info!("Active translation provider: {}", provider.kind());
    }

    // Build application
    let app = Router::new()
        .merge(routes::create_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server
    let addr = format!(
        "{}:{}",
        config.system_config.host, config.system_config.port
    );
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

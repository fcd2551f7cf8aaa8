use std::sync::Arc;

use moodtable_api::api::{create_router, AppState};
use moodtable_api::config::Config;
use moodtable_api::services::providers::GeminiProvider;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "moodtable_api=debug,tower_http=debug".into()),
        )
        .init();

    let config = Config::from_env()?;
    let provider = Arc::new(GeminiProvider::from_config(&config)?);

    let addr = format!("{}:{}", config.host, config.port);
    let state = AppState::new(config, provider);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}

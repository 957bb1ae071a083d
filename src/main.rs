mod app;
mod auth;
mod config;
mod db;
mod error;
#[cfg(test)]
mod memory;
mod products;
mod state;

use crate::{config::AppConfig, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "catalog=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    // Fails fast without DATABASE_URL or JWT_SECRET.
    let config = AppConfig::from_env()?;
    tracing::info!(
        token_ttl_minutes = ?config.jwt.ttl_minutes,
        cors_origin = ?config.cors_origin,
        "configuration loaded"
    );

    let state = AppState::init(config).await?;
    tracing::info!(bcrypt_cost = state.hasher.cost(), "database connected");

    let app = app::build_app(state.clone())?;
    app::serve(app, &state.config).await
}

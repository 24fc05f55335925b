use std::sync::Arc;

use binbuddy::{
    config::AppConfig,
    diagnostics::Diagnostics,
    engine::ChatEngine,
    http::{self, AppState},
};
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    if config.database_url.is_none() {
        warn!("DATABASE_URL is not set; /test will report the database as unavailable");
    }

    let diagnostics = Arc::new(Diagnostics::from_config(&config).await);
    let engine = Arc::new(ChatEngine::default());

    let app = http::router(AppState {
        engine,
        diagnostics,
    });
    let listener = TcpListener::bind(config.http_bind).await?;
    info!("BinBuddy HTTP API listening on {}", config.http_bind);

    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .compact()
        .init();
}

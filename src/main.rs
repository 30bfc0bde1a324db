mod adapter;
mod application;
mod domain;
mod infra;
#[cfg(test)]
mod tests;

use crate::infra::{
    app::create_app,
    config::{AppConfig, DEFAULT_SECRET_KEY},
    init_app_state,
    setup::init_tracing
};
use dotenv::dotenv;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let config = AppConfig::load()?;
    let _guards = init_tracing(&config)?;
    if config.session.production && config.session.secret_key == DEFAULT_SECRET_KEY {
        warn!("SECRET_KEY is not set; sessions are signed with the default key");
    }
    let state = init_app_state(&config).await?;
    info!("Start server...");
    let app = create_app(&config, state);
    let listener = tokio::net::TcpListener::bind(&config.application.address).await?;
    info!("Backend listening at {}", &listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

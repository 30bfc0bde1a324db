use std::sync::Arc;

use crate::adapter::crypto::signer::HmacSessionSigner;
use crate::infra::config::AppConfig;
use crate::infra::db::init_db;
use crate::infra::state::AppState;

pub mod app;
pub mod config;
pub mod db;
pub mod setup;
pub mod state;

pub async fn init_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let pool = init_db(config).await?;
    let signer = HmacSessionSigner::new(&config.session.secret_key);

    Ok(AppState {
        pool,
        signer: Arc::new(signer),
        config: Arc::new(config.clone()),
    })
}

#![cfg(test)]

use std::fs;
use std::sync::Arc;

use rstest::fixture;
use tempfile::TempDir;

use crate::adapter::crypto::signer::HmacSessionSigner;
use crate::infra::config::{AppConfig, ApplicationConfig, DatabaseConfig, LoggerConfig, SessionConfig};
use crate::infra::db::init_db;
use crate::infra::state::AppState;

pub const TEST_SECRET_KEY: &str = "test_secret_key";
pub const INDEX_HTML: &str = "<!doctype html><title>account</title>";

/// App state backed by its own SQLite file; the directory is removed on drop.
pub struct TestContext {
    pub state: AppState,
    _dir: TempDir,
}

pub fn test_config(dir: &TempDir) -> AppConfig {
    AppConfig {
        db: DatabaseConfig {
            path: dir.path().join("users.db").to_string_lossy().into_owned(),
            max_connections: 5,
        },
        logger: LoggerConfig {
            log_path: dir.path().join("logs").to_string_lossy().into_owned(),
        },
        application: ApplicationConfig {
            allow_origins: vec!["*".to_string()],
            address: "127.0.0.1:5000".to_string(),
            public_dir: dir.path().join("public").to_string_lossy().into_owned(),
        },
        session: SessionConfig {
            cookie_name: "session".to_string(),
            secret_key: TEST_SECRET_KEY.to_string(),
            production: false,
        },
    }
}

#[fixture]
pub async fn init_test_app_state() -> anyhow::Result<TestContext> {
    let dir = tempfile::tempdir()?;
    let config = test_config(&dir);

    let public_dir = dir.path().join("public");
    fs::create_dir_all(&public_dir)?;
    fs::write(public_dir.join("index.html"), INDEX_HTML)?;

    let pool = init_db(&config).await?;
    let signer = HmacSessionSigner::new(&config.session.secret_key);

    Ok(TestContext {
        state: AppState {
            pool,
            signer: Arc::new(signer),
            config: Arc::new(config),
        },
        _dir: dir,
    })
}

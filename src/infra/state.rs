use std::sync::Arc;

use async_trait::async_trait;
use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use sqlx::SqlitePool;

use crate::adapter::db::gateway::user::UserGateway;
use crate::adapter::db::session::SqlxSession;
use crate::application::app_error::{AppError, AppResult};
use crate::application::interactors::auth::LoginInteractor;
use crate::application::interactors::session::ValidateSessionInteractor;
use crate::application::interactors::users::{CreateUserInteractor, GetProfileInteractor, UpdateProfileInteractor};
use crate::application::interface::crypto::SessionSigner;
use crate::infra::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub signer: Arc<dyn SessionSigner>,
    pub config: Arc<AppConfig>,
}

impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

#[async_trait]
pub trait FromAppState: Sized {
    async fn from_app_state(state: &AppState) -> AppResult<Self>;
}

macro_rules! impl_from_request_parts {
    ($interactor:ty) => {
        impl<S> FromRequestParts<S> for $interactor
        where
            S: Send + Sync,
            AppState: FromRef<S>,
        {
            type Rejection = AppError;

            async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
                let app_state = AppState::from_ref(state);
                <$interactor>::from_app_state(&app_state).await
            }
        }
    };
}

// CreateUserInteractor
#[async_trait]
impl FromAppState for CreateUserInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy_write(state.pool.clone());
        let user_gateway = UserGateway::new(session.clone());

        Ok(CreateUserInteractor::new(
            Arc::new(session),
            Arc::new(user_gateway.clone()),
            Arc::new(user_gateway),
            state.signer.clone(),
        ))
    }
}

impl_from_request_parts!(CreateUserInteractor);

// LoginInteractor
#[async_trait]
impl FromAppState for LoginInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let user_gateway = Arc::new(UserGateway::new(session));

        Ok(LoginInteractor::new(user_gateway, state.signer.clone()))
    }
}

impl_from_request_parts!(LoginInteractor);

// GetProfileInteractor
#[async_trait]
impl FromAppState for GetProfileInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let user_gateway = Arc::new(UserGateway::new(session));

        Ok(GetProfileInteractor::new(user_gateway))
    }
}

impl_from_request_parts!(GetProfileInteractor);

// UpdateProfileInteractor
#[async_trait]
impl FromAppState for UpdateProfileInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy_write(state.pool.clone());
        let user_gateway = Arc::new(UserGateway::new(session.clone()));

        Ok(UpdateProfileInteractor::new(Arc::new(session), user_gateway))
    }
}

impl_from_request_parts!(UpdateProfileInteractor);

// ValidateSessionInteractor
#[async_trait]
impl FromAppState for ValidateSessionInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        Ok(ValidateSessionInteractor::new(state.signer.clone()))
    }
}

impl_from_request_parts!(ValidateSessionInteractor);

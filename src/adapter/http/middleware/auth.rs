use crate::{
    adapter::http::middleware::extractor::AuthUser,
    application::{
        app_error::AppResult,
        dto::session::SessionDTO,
        interactors::session::ValidateSessionInteractor,
    },
    infra::config::{AppConfig, SessionConfig},
};
use axum::{
    extract::{Request, State},
    http::header::COOKIE,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

pub async fn auth_middleware(
    State(config): State<Arc<AppConfig>>,
    interactor: ValidateSessionInteractor,
    mut request: Request,
    next: Next,
) -> AppResult<Response> {
    let token = extract_session_token(&request, &config.session.cookie_name);
    let user_id = interactor.execute(SessionDTO { token })?;
    request.extensions_mut().insert(AuthUser {
        user_id: user_id.value,
    });

    Ok(next.run(request).await)
}

fn extract_session_token(request: &Request, cookie_name: &str) -> Option<String> {
    let cookie_header = request
        .headers()
        .get(COOKIE)
        .and_then(|v| v.to_str().ok())?;

    cookie_header
        .split(';')
        .filter_map(|cookie| cookie.trim().split_once('='))
        .find(|(name, _)| *name == cookie_name)
        .map(|(_, value)| value.to_string())
}

fn same_site(config: &SessionConfig) -> &'static str {
    if config.production {
        "SameSite=None; Secure"
    } else {
        "SameSite=Lax"
    }
}

pub fn build_session_cookie(token: &str, config: &SessionConfig) -> String {
    format!(
        "{}={}; Path=/; HttpOnly; {}",
        config.cookie_name,
        token,
        same_site(config)
    )
}

pub fn build_logout_cookie(config: &SessionConfig) -> String {
    format!(
        "{}=; Path=/; Max-Age=0; HttpOnly; {}",
        config.cookie_name,
        same_site(config)
    )
}

use axum::http::header::{ACCEPT, CONTENT_TYPE};
use axum::http::{self};
use axum::routing::{get, post};
use axum::{Router, middleware};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use uuid::Uuid;

use crate::adapter::http::docs::{docs_ui, openapi_json};
use crate::adapter::http::middleware::auth::auth_middleware;
use crate::adapter::http::routes::auth::{login, logout};
use crate::adapter::http::routes::user::{get_profile, register, update_profile};
use crate::infra::config::AppConfig;
use crate::infra::state::AppState;

/// Credentialed CORS. An empty list or `*` reflects the caller's origin.
fn build_cors(config: &AppConfig) -> CorsLayer {
    let origins = &config.application.allow_origins;
    let has_wildcard = origins.is_empty() || origins.iter().any(|s| s == "*");

    let allow_origin = if has_wildcard {
        AllowOrigin::mirror_request()
    } else {
        let origins: Vec<http::HeaderValue> = origins
            .iter()
            .filter_map(|s| {
                s.parse::<http::HeaderValue>()
                    .map_err(|e| {
                        tracing::warn!("Failed to parse origin '{}': {}", s, e);
                    })
                    .ok()
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([http::Method::POST, http::Method::GET, http::Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, ACCEPT])
        .allow_credentials(true)
}

pub fn api_router(state: AppState) -> Router<AppState> {
    let public_routes = Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", post(logout));

    let protected_routes = Router::new()
        .route("/profile", get(get_profile).post(update_profile))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    Router::new().merge(public_routes).merge(protected_routes)
}

pub fn router(state: AppState) -> Router<AppState> {
    Router::new()
        .nest("/api", api_router(state.clone()))
        .route("/openapi.json", get(openapi_json))
        .route("/docs", get(docs_ui))
}

pub fn create_app(config: &AppConfig, state: AppState) -> Router {
    let cors = build_cors(config);
    let static_files = ServeDir::new(&config.application.public_dir);
    Router::new()
        .merge(router(state.clone()))
        .fallback_service(static_files)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &http::Request<_>| {
                    let request_id = Uuid::now_v7();
                    tracing::info_span!(
                        "http-request",
                        method = %request.method(),
                        uri = %request.uri(),
                        version = ?request.version(),
                        request_id = %request_id
                    )
                })
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

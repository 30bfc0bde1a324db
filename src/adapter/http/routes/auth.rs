use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::IntoResponse;

use crate::adapter::http::app_error_impl::ErrorResponse;
use crate::adapter::http::middleware::auth::{build_logout_cookie, build_session_cookie};
use crate::adapter::http::schema::auth::{LoginRequest, OkResponse, UserIdResponse};
use crate::adapter::http::validation::ValidPayload;
use crate::application::app_error::AppResult;
use crate::application::dto::auth::LoginDTO;
use crate::application::interactors::auth::LoginInteractor;
use crate::infra::config::AppConfig;

#[utoipa::path(
    post,
    path = "/api/login",
    tag = "Account",
    request_body(
        content = LoginRequest,
        example = json!(
            {
                "fio": "Ann Lee",
                "phone": "+1000"
            }
        )
    ),
    responses(
        (
            status = 200,
            description = "Login successful",
            body = UserIdResponse,
            example = json!(
                {
                    "ok": true,
                    "user_id": 1
                }
            )
        ),
        (
            status = 400,
            description = "Missing fio or phone",
            body = ErrorResponse,
            example = json!(
                {
                    "error": "fio and phone are required"
                }
            )
        ),
        (
            status = 401,
            description = "No user with this fio and phone",
            body = ErrorResponse,
            example = json!(
                {
                    "error": "invalid credentials or user not found"
                }
            )
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse
        )
    )
)]
pub async fn login(
    interactor: LoginInteractor,
    State(config): State<Arc<AppConfig>>,
    ValidPayload(payload): ValidPayload<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    let dto = LoginDTO::new(payload.fio.unwrap_or_default(), payload.phone.unwrap_or_default())?;
    let result = interactor.execute(dto).await?;
    let cookie = build_session_cookie(&result.session_token, &config.session);
    let mut headers = HeaderMap::new();
    headers.insert(SET_COOKIE, HeaderValue::from_str(&cookie)?);
    Ok((
        StatusCode::OK,
        headers,
        Json(UserIdResponse {
            ok: true,
            user_id: result.user_id,
        }),
    ))
}

#[utoipa::path(
    post,
    path = "/api/logout",
    tag = "Account",
    responses(
        (
            status = 200,
            description = "Session cleared; succeeds without a session too",
            body = OkResponse,
            example = json!(
                {
                    "ok": true
                }
            )
        )
    )
)]
pub async fn logout(State(config): State<Arc<AppConfig>>) -> AppResult<impl IntoResponse> {
    let cookie = build_logout_cookie(&config.session);
    let mut headers = HeaderMap::new();
    headers.insert(SET_COOKIE, HeaderValue::from_str(&cookie)?);
    Ok((StatusCode::OK, headers, Json(OkResponse { ok: true })))
}

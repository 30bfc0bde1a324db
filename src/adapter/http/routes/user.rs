use std::sync::Arc;

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::IntoResponse;
use axum::Json;

use crate::adapter::http::app_error_impl::ErrorResponse;
use crate::adapter::http::middleware::auth::build_session_cookie;
use crate::adapter::http::middleware::extractor::AuthUser;
use crate::adapter::http::schema::auth::UserIdResponse;
use crate::adapter::http::schema::user::{ProfileResponse, RegisterRequest, UpdateProfileRequest};
use crate::adapter::http::validation::{Payload, ValidPayload};
use crate::application::app_error::AppResult;
use crate::application::dto::id::IdDTO;
use crate::application::dto::user::{CreateUserDTO, UpdateProfileDTO};
use crate::application::interactors::users::{CreateUserInteractor, GetProfileInteractor, UpdateProfileInteractor};
use crate::infra::config::AppConfig;

#[utoipa::path(
    post,
    path = "/api/register",
    tag = "Account",
    request_body(
        content = RegisterRequest,
        example = json!(
            {
                "fio": "Ann Lee",
                "phone": "+1000",
                "email": "ann@example.com",
                "cardNumber": "4111 1111 1111 1111",
                "dob": "1990-01-01",
                "gender": "f"
            }
        )
    ),
    responses(
        (
            status = 200,
            description = "User registered and logged in",
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
            description = "Missing fio/phone or phone already registered",
            body = ErrorResponse,
            example = json!(
                {
                    "error": "phone already registered"
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
pub async fn register(
    interactor: CreateUserInteractor,
    State(config): State<Arc<AppConfig>>,
    ValidPayload(payload): ValidPayload<RegisterRequest>,
) -> AppResult<impl IntoResponse> {
    let dto = CreateUserDTO {
        fio: payload.fio.unwrap_or_default(),
        phone: payload.phone.unwrap_or_default(),
        email: payload.email,
        card_number: payload.card_number,
        dob: payload.dob,
        gender: payload.gender,
    };
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
    get,
    path = "/api/profile",
    tag = "Account",
    responses(
        (
            status = 200,
            description = "Profile of the logged-in user",
            body = ProfileResponse
        ),
        (
            status = 401,
            description = "Missing or invalid session",
            body = ErrorResponse,
            example = json!(
                {
                    "error": "not authenticated"
                }
            )
        ),
        (
            status = 404,
            description = "Session user no longer exists",
            body = ErrorResponse,
            example = json!(
                {
                    "error": "user not found"
                }
            )
        )
    ),
    security(("cookieAuth" = []))
)]
pub async fn get_profile(
    auth_user: AuthUser,
    interactor: GetProfileInteractor,
) -> AppResult<impl IntoResponse> {
    let profile = interactor.execute(IdDTO { id: auth_user.user_id }).await?;
    Ok((
        StatusCode::OK,
        Json(ProfileResponse {
            ok: true,
            profile: profile.into(),
        }),
    ))
}

#[utoipa::path(
    post,
    path = "/api/profile",
    tag = "Account",
    request_body(
        content = UpdateProfileRequest,
        example = json!(
            {
                "avatar": "avatars/ann.png"
            }
        )
    ),
    responses(
        (
            status = 200,
            description = "Profile updated",
            body = ProfileResponse
        ),
        (
            status = 400,
            description = "No recognized fields or invalid value",
            body = ErrorResponse,
            example = json!(
                {
                    "error": "nothing to update"
                }
            )
        ),
        (
            status = 401,
            description = "Missing or invalid session",
            body = ErrorResponse
        ),
        (
            status = 404,
            description = "Session user no longer exists",
            body = ErrorResponse
        )
    ),
    security(("cookieAuth" = []))
)]
pub async fn update_profile(
    auth_user: AuthUser,
    interactor: UpdateProfileInteractor,
    Payload(payload): Payload<UpdateProfileRequest>,
) -> AppResult<impl IntoResponse> {
    let dto = UpdateProfileDTO {
        id: auth_user.user_id,
        patch: payload.into_patch()?,
    };
    let profile = interactor.execute(dto).await?;
    Ok((
        StatusCode::OK,
        Json(ProfileResponse {
            ok: true,
            profile: profile.into(),
        }),
    ))
}

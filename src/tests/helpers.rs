#![cfg(test)]

use axum::body::{Body, Bytes};
use axum::http::header::SET_COOKIE;
use axum::http::{Request, Response};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::SqlitePool;

use crate::domain::entities::id::Id;
use crate::domain::entities::session::Session;
use crate::infra::state::AppState;

pub async fn insert_user(pool: &SqlitePool, fio: &str, phone: &str) -> i64 {
    sqlx::query_scalar::<_, i64>("INSERT INTO users (fio, phone) VALUES (?, ?) RETURNING id")
        .bind(fio)
        .bind(phone)
        .fetch_one(pool)
        .await
        .expect("insert user")
}

pub async fn delete_user(pool: &SqlitePool, user_id: i64) {
    sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(user_id)
        .execute(pool)
        .await
        .expect("delete user");
}

pub async fn count_users(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await
        .expect("count users")
}

pub fn session_cookie(state: &AppState, user_id: i64) -> String {
    let token = state
        .signer
        .sign(&Session::new(Id::new(user_id)))
        .expect("sign session");
    format!("{}={}", state.config.session.cookie_name, token)
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

pub fn form_request(uri: &str, body: &'static str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

pub fn with_cookie(mut request: Request<Body>, cookie: &str) -> Request<Body> {
    request
        .headers_mut()
        .insert("cookie", cookie.parse().expect("cookie header"));
    request
}

/// `name=value` part of the response's Set-Cookie header.
pub fn set_cookie_pair(response: &Response<Body>) -> Option<String> {
    let header = response.headers().get(SET_COOKIE)?.to_str().ok()?;
    header.split(';').next().map(|pair| pair.trim().to_string())
}

pub async fn body_bytes(response: Response<Body>) -> Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

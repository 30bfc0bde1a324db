use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(
        required(message = "fio and phone are required"),
        length(min = 1, message = "fio and phone are required")
    )]
    pub fio: Option<String>,
    #[validate(
        required(message = "fio and phone are required"),
        length(min = 1, message = "fio and phone are required")
    )]
    pub phone: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OkResponse {
    pub ok: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UserIdResponse {
    pub ok: bool,
    pub user_id: i64,
}

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::openapi::schema::{ObjectBuilder, Schema, SchemaType, Type};
use utoipa::openapi::RefOr;
use utoipa::{PartialSchema, ToSchema};
use validator::Validate;

use crate::application::app_error::{AppError, AppResult};
use crate::application::dto::user::ProfileDTO;
use crate::domain::entities::profile::{ProfileField, UserPatch};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
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
    pub email: Option<String>,
    #[serde(rename = "cardNumber", alias = "card")]
    pub card_number: Option<String>,
    pub dob: Option<String>,
    pub gender: Option<String>,
}

/// Sparse profile update. Only `fio`, `phone`, `email`, `cardNumber`, `dob`,
/// `gender` and `avatar` are applied; other keys are ignored. `null` clears a field.
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct UpdateProfileRequest(pub Map<String, Value>);

impl PartialSchema for UpdateProfileRequest {
    fn schema() -> RefOr<Schema> {
        ProfileField::ALL
            .into_iter()
            .fold(ObjectBuilder::new(), |object, field| {
                object.property(
                    field.key(),
                    ObjectBuilder::new().schema_type(SchemaType::from_iter([Type::String, Type::Null])),
                )
            })
            .description(Some("Any subset of the profile fields; unknown keys are ignored"))
            .into()
    }
}

impl ToSchema for UpdateProfileRequest {
    fn name() -> Cow<'static, str> {
        Cow::Borrowed("UpdateProfileRequest")
    }
}

impl UpdateProfileRequest {
    pub fn into_patch(self) -> AppResult<UserPatch> {
        let mut patch = UserPatch::new();
        for (key, value) in self.0 {
            let Some(field) = ProfileField::from_key(&key) else {
                continue;
            };
            let value = match value {
                Value::Null => None,
                Value::String(value) => Some(value),
                Value::Number(value) => Some(value.to_string()),
                Value::Bool(value) => Some(value.to_string()),
                Value::Array(_) | Value::Object(_) => {
                    return Err(AppError::Validation(format!("{} must be a plain value", key)));
                }
            };
            patch.set(field, value)?;
        }
        Ok(patch)
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct Profile {
    pub id: i64,
    pub fio: String,
    pub phone: String,
    pub email: Option<String>,
    #[serde(rename = "cardNumber")]
    pub card_number: Option<String>,
    pub dob: Option<String>,
    pub gender: Option<String>,
    pub avatar: Option<String>,
}

impl From<ProfileDTO> for Profile {
    fn from(dto: ProfileDTO) -> Self {
        Self {
            id: dto.id,
            fio: dto.fio,
            phone: dto.phone,
            email: dto.email,
            card_number: dto.card_number,
            dob: dto.dob,
            gender: dto.gender,
            avatar: dto.avatar,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileResponse {
    pub ok: bool,
    pub profile: Profile,
}

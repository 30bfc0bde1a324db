use crate::application::app_error::{AppError, AppResult};
use crate::domain::entities::id::Id;

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Id<User>,
    pub fio: String,
    pub phone: String,
    pub email: Option<String>,
    pub card_number: Option<String>,
    pub dob: Option<String>,
    pub gender: Option<String>,
    pub avatar: Option<String>,
}

/// A user that has not been persisted yet, so it has no id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub fio: String,
    pub phone: String,
    pub email: Option<String>,
    pub card_number: Option<String>,
    pub dob: Option<String>,
    pub gender: Option<String>,
}

impl NewUser {
    pub fn new(
        fio: String,
        phone: String,
        email: Option<String>,
        card_number: Option<String>,
        dob: Option<String>,
        gender: Option<String>,
    ) -> AppResult<Self> {
        if fio.is_empty() || phone.is_empty() {
            return Err(AppError::Validation("fio and phone are required".to_string()));
        }
        Ok(Self {
            fio,
            phone,
            email,
            card_number,
            dob,
            gender,
        })
    }
}

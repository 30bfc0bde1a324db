use crate::application::app_error::{AppError, AppResult};
use crate::domain::entities::user::User;

/// Profile attributes a logged-in user may change. Anything else is not updatable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Fio,
    Phone,
    Email,
    CardNumber,
    Dob,
    Gender,
    Avatar,
}

impl ProfileField {
    pub const ALL: [ProfileField; 7] = [
        ProfileField::Fio,
        ProfileField::Phone,
        ProfileField::Email,
        ProfileField::CardNumber,
        ProfileField::Dob,
        ProfileField::Gender,
        ProfileField::Avatar,
    ];

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }

    /// Wire name; also the column name in `users`.
    pub fn key(self) -> &'static str {
        match self {
            ProfileField::Fio => "fio",
            ProfileField::Phone => "phone",
            ProfileField::Email => "email",
            ProfileField::CardNumber => "cardNumber",
            ProfileField::Dob => "dob",
            ProfileField::Gender => "gender",
            ProfileField::Avatar => "avatar",
        }
    }

    fn is_required(self) -> bool {
        matches!(self, ProfileField::Fio | ProfileField::Phone)
    }
}

/// Sparse set of profile changes. Each field appears at most once; the last value wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserPatch {
    changes: Vec<(ProfileField, Option<String>)>,
}

impl UserPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: ProfileField, value: Option<String>) -> AppResult<()> {
        if field.is_required() && value.as_deref().is_none_or(str::is_empty) {
            return Err(AppError::Validation(format!("{} cannot be empty", field.key())));
        }
        match self.changes.iter_mut().find(|(f, _)| *f == field) {
            Some(change) => change.1 = value,
            None => self.changes.push((field, value)),
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn changes(&self) -> &[(ProfileField, Option<String>)] {
        &self.changes
    }

    pub fn apply_to(&self, user: &mut User) {
        for (field, value) in &self.changes {
            let value = value.clone();
            match field {
                ProfileField::Fio => user.fio = value.unwrap_or_default(),
                ProfileField::Phone => user.phone = value.unwrap_or_default(),
                ProfileField::Email => user.email = value,
                ProfileField::CardNumber => user.card_number = value,
                ProfileField::Dob => user.dob = value,
                ProfileField::Gender => user.gender = value,
                ProfileField::Avatar => user.avatar = value,
            }
        }
    }
}

use crate::{
    application::app_error::AppResult,
    domain::entities::{
        id::Id,
        profile::UserPatch,
        user::{NewUser, User}
    }
};
use async_trait::async_trait;

#[async_trait]
pub trait UserWriter: Send + Sync {
    async fn insert(&self, user: NewUser) -> AppResult<Id<User>>;
    /// Returns the updated row, or `None` when no user has this id.
    async fn update(&self, user_id: &Id<User>, patch: UserPatch) -> AppResult<Option<User>>;
}

#[async_trait]
pub trait UserReader: Send + Sync {
    async fn find_by_id(&self, user_id: &Id<User>) -> AppResult<Option<User>>;
    async fn find_by_credentials(&self, fio: &str, phone: &str) -> AppResult<Option<User>>;
    async fn is_phone_taken(&self, phone: &str) -> AppResult<bool>;
}

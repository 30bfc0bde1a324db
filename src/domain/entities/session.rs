use crate::domain::entities::{
    id::Id,
    user::User
};

/// Caller-side login state. Lives only inside the signed cookie.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub user_id: Id<User>,
}

impl Session {
    pub fn new(user_id: Id<User>) -> Self {
        Self { user_id }
    }
}

use crate::domain::entities::profile::UserPatch;
use crate::domain::entities::user::User;

#[derive(Debug)]
pub struct CreateUserDTO {
    pub fio: String,
    pub phone: String,
    pub email: Option<String>,
    pub card_number: Option<String>,
    pub dob: Option<String>,
    pub gender: Option<String>,
}

#[derive(Debug)]
pub struct UpdateProfileDTO {
    pub id: i64,
    pub patch: UserPatch,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileDTO {
    pub id: i64,
    pub fio: String,
    pub phone: String,
    pub email: Option<String>,
    pub card_number: Option<String>,
    pub dob: Option<String>,
    pub gender: Option<String>,
    pub avatar: Option<String>,
}

impl From<User> for ProfileDTO {
    fn from(user: User) -> Self {
        Self {
            id: user.id.value,
            fio: user.fio,
            phone: user.phone,
            email: user.email,
            card_number: user.card_number,
            dob: user.dob,
            gender: user.gender,
            avatar: user.avatar,
        }
    }
}

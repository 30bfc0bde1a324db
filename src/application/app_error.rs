use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),
    #[error("nothing to update")]
    NothingToUpdate,
    #[error("phone already registered")]
    PhoneAlreadyRegistered,
    #[error("invalid credentials or user not found")]
    InvalidCredentials,
    #[error("not authenticated")]
    Unauthenticated,
    #[error("user not found")]
    UserNotFound,
    #[error("{0}")]
    InvalidId(String),
    #[error("database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
    #[error("internal error: {0}")]
    Internal(String),
}

pub type AppResult<T> = Result<T, AppError>;

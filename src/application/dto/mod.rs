pub mod auth;
pub mod id;
pub mod session;
pub mod user;

use crate::application::app_error::AppResult;
use crate::domain::entities::session::Session;

/// Turns a session into a tamper-evident token and back.
pub trait SessionSigner: Send + Sync {
    fn sign(&self, session: &Session) -> AppResult<String>;
    /// `None` for anything malformed, forged or signed with another key.
    fn verify(&self, token: &str) -> Option<Session>;
}

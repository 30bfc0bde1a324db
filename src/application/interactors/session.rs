use crate::{
    application::{
        app_error::{AppError, AppResult},
        dto::session::SessionDTO,
        interface::crypto::SessionSigner,
    },
    domain::entities::{id::Id, user::User},
};
use std::sync::Arc;
use tracing::debug;

#[derive(Clone)]
pub struct ValidateSessionInteractor {
    signer: Arc<dyn SessionSigner>,
}

impl ValidateSessionInteractor {
    pub fn new(signer: Arc<dyn SessionSigner>) -> Self {
        Self { signer }
    }

    pub fn execute(&self, dto: SessionDTO) -> AppResult<Id<User>> {
        let token = dto.token.ok_or(AppError::Unauthenticated)?;
        match self.signer.verify(&token) {
            Some(session) => Ok(session.user_id),
            None => {
                debug!("Rejected session cookie with invalid signature");
                Err(AppError::Unauthenticated)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        application::{
            app_error::{AppError, AppResult},
            dto::session::SessionDTO,
            interactors::session::ValidateSessionInteractor,
            interface::crypto::SessionSigner,
        },
        domain::entities::{id::Id, session::Session},
    };
    use mockall::mock;
    use rstest::rstest;
    use std::sync::Arc;

    mock! {
        pub SignerMock {}

        impl SessionSigner for SignerMock {
            fn sign(&self, session: &Session) -> AppResult<String>;
            fn verify(&self, token: &str) -> Option<Session>;
        }
    }

    #[rstest]
    fn test_validate_session_valid() {
        let mut signer = MockSignerMock::new();
        signer
            .expect_verify()
            .withf(|token| token == "5.signature")
            .returning(|_| Some(Session::new(Id::new(5))));

        let interactor = ValidateSessionInteractor::new(Arc::new(signer));
        let user_id = interactor
            .execute(SessionDTO {
                token: Some("5.signature".to_string()),
            })
            .unwrap();

        assert_eq!(user_id.value, 5);
    }

    #[rstest]
    fn test_validate_session_missing_cookie() {
        let mut signer = MockSignerMock::new();
        signer.expect_verify().never();

        let interactor = ValidateSessionInteractor::new(Arc::new(signer));
        let result = interactor.execute(SessionDTO { token: None });

        assert!(matches!(result.unwrap_err(), AppError::Unauthenticated));
    }

    #[rstest]
    fn test_validate_session_forged_cookie() {
        let mut signer = MockSignerMock::new();
        signer.expect_verify().returning(|_| None);

        let interactor = ValidateSessionInteractor::new(Arc::new(signer));
        let result = interactor.execute(SessionDTO {
            token: Some("1.forged".to_string()),
        });

        assert!(matches!(result.unwrap_err(), AppError::Unauthenticated));
    }
}

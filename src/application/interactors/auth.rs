use std::sync::Arc;

use tracing::{info, warn};

use crate::application::app_error::{AppError, AppResult};
use crate::application::dto::auth::{AuthenticatedDTO, LoginDTO};
use crate::application::interface::crypto::SessionSigner;
use crate::application::interface::gateway::user::UserReader;
use crate::domain::entities::session::Session;

#[derive(Clone)]
pub struct LoginInteractor {
    user_reader: Arc<dyn UserReader>,
    signer: Arc<dyn SessionSigner>,
}

impl LoginInteractor {
    pub fn new(user_reader: Arc<dyn UserReader>, signer: Arc<dyn SessionSigner>) -> Self {
        Self { user_reader, signer }
    }

    pub async fn execute(&self, dto: LoginDTO) -> AppResult<AuthenticatedDTO> {
        let user = self
            .user_reader
            .find_by_credentials(&dto.fio, &dto.phone)
            .await?
            .ok_or_else(|| {
                warn!("Login attempt with unknown credentials: {} ({})", dto.fio, dto.phone);
                AppError::InvalidCredentials
            })?;
        let session_token = self.signer.sign(&Session::new(user.id.clone()))?;
        info!("User {} ({}) logged in", user.fio, user.phone);
        Ok(AuthenticatedDTO {
            user_id: user.id.value,
            session_token,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use mockall::mock;
    use rstest::{fixture, rstest};

    use crate::application::app_error::{AppError, AppResult};
    use crate::application::dto::auth::LoginDTO;
    use crate::application::interactors::auth::LoginInteractor;
    use crate::application::interface::crypto::SessionSigner;
    use crate::application::interface::gateway::user::UserReader;
    use crate::domain::entities::id::Id;
    use crate::domain::entities::session::Session;
    use crate::domain::entities::user::User;

    // Mocks
    mock! {
        pub UserReaderMock {}

        #[async_trait]
        impl UserReader for UserReaderMock {
            async fn find_by_id(&self, user_id: &Id<User>) -> AppResult<Option<User>>;
            async fn find_by_credentials(&self, fio: &str, phone: &str) -> AppResult<Option<User>>;
            async fn is_phone_taken(&self, phone: &str) -> AppResult<bool>;
        }
    }

    mock! {
        pub SignerMock {}

        impl SessionSigner for SignerMock {
            fn sign(&self, session: &Session) -> AppResult<String>;
            fn verify(&self, token: &str) -> Option<Session>;
        }
    }

    // Constants
    const USER_ID: i64 = 1;
    const FIO: &str = "Ann Lee";
    const PHONE: &str = "+1000";
    const TOKEN: &str = "1.cafebabe";

    // Fixtures
    #[fixture]
    fn valid_login_dto() -> LoginDTO {
        LoginDTO::new(FIO.to_string(), PHONE.to_string()).unwrap()
    }

    fn build_user() -> User {
        User {
            id: Id::new(USER_ID),
            fio: FIO.to_string(),
            phone: PHONE.to_string(),
            email: None,
            card_number: None,
            dob: None,
            gender: None,
            avatar: None,
        }
    }

    // LoginInteractor tests
    #[rstest]
    #[tokio::test]
    async fn test_login_success(valid_login_dto: LoginDTO) {
        let mut user_reader = MockUserReaderMock::new();
        let mut signer = MockSignerMock::new();

        user_reader
            .expect_find_by_credentials()
            .withf(|fio, phone| fio == FIO && phone == PHONE)
            .returning(|_, _| Ok(Some(build_user())));
        signer
            .expect_sign()
            .withf(|session| session.user_id.value == USER_ID)
            .returning(|_| Ok(TOKEN.to_string()));

        let interactor = LoginInteractor::new(Arc::new(user_reader), Arc::new(signer));
        let result = interactor.execute(valid_login_dto).await.unwrap();

        assert_eq!(result.user_id, USER_ID);
        assert_eq!(result.session_token, TOKEN);
    }

    #[rstest]
    #[tokio::test]
    async fn test_login_no_match(valid_login_dto: LoginDTO) {
        let mut user_reader = MockUserReaderMock::new();
        let mut signer = MockSignerMock::new();

        user_reader.expect_find_by_credentials().returning(|_, _| Ok(None));
        signer.expect_sign().never();

        let interactor = LoginInteractor::new(Arc::new(user_reader), Arc::new(signer));
        let result = interactor.execute(valid_login_dto).await;

        assert!(matches!(result.unwrap_err(), AppError::InvalidCredentials));
    }
}

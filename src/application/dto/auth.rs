use crate::application::app_error::{AppError, AppResult};

#[derive(Debug)]
pub struct LoginDTO {
    pub fio: String,
    pub phone: String,
}

impl LoginDTO {
    pub fn new(fio: String, phone: String) -> AppResult<Self> {
        if fio.is_empty() || phone.is_empty() {
            return Err(AppError::Validation("fio and phone are required".to_string()));
        }
        Ok(Self { fio, phone })
    }
}

/// Result of a successful register or login: the user and a freshly signed session token.
#[derive(Debug, Clone)]
pub struct AuthenticatedDTO {
    pub user_id: i64,
    pub session_token: String,
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use crate::application::app_error::AppError;
    use crate::application::dto::auth::LoginDTO;

    #[rstest]
    #[case("", "+1000")]
    #[case("Ann Lee", "")]
    #[case("", "")]
    fn test_login_dto_requires_fio_and_phone(#[case] fio: &str, #[case] phone: &str) {
        let result = LoginDTO::new(fio.to_string(), phone.to_string());
        assert!(matches!(result.unwrap_err(), AppError::Validation(_)));
    }

    #[rstest]
    fn test_login_dto_keeps_values_verbatim() {
        let dto = LoginDTO::new("Ann Lee".to_string(), "+1000".to_string()).unwrap();
        assert_eq!(dto.fio, "Ann Lee");
        assert_eq!(dto.phone, "+1000");
    }
}

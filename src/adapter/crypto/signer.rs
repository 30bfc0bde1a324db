use crate::application::{
    app_error::{AppError, AppResult},
    interface::crypto::SessionSigner,
};
use crate::domain::entities::{id::Id, session::Session};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Signs sessions as `<user_id>.<hex hmac-sha256>`.
#[derive(Clone)]
pub struct HmacSessionSigner {
    key: Vec<u8>,
}

impl HmacSessionSigner {
    pub fn new(secret_key: &str) -> Self {
        Self {
            key: secret_key.as_bytes().to_vec(),
        }
    }

    fn mac(&self, payload: &str) -> Option<HmacSha256> {
        let mut mac = HmacSha256::new_from_slice(&self.key).ok()?;
        mac.update(payload.as_bytes());
        Some(mac)
    }
}

impl SessionSigner for HmacSessionSigner {
    fn sign(&self, session: &Session) -> AppResult<String> {
        let payload = session.user_id.to_string();
        let mac = self
            .mac(&payload)
            .ok_or_else(|| AppError::Internal("invalid session key".to_string()))?;
        let signature = hex::encode(mac.finalize().into_bytes());
        Ok(format!("{}.{}", payload, signature))
    }

    fn verify(&self, token: &str) -> Option<Session> {
        let (payload, signature) = token.split_once('.')?;
        let signature = hex::decode(signature).ok()?;
        self.mac(payload)?.verify_slice(&signature).ok()?;
        let user_id = Id::try_from(payload).ok()?;
        Some(Session::new(user_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const SECRET: &str = "test-secret";

    #[test]
    fn test_sign_and_verify() {
        let signer = HmacSessionSigner::new(SECRET);
        let token = signer.sign(&Session::new(Id::new(42))).unwrap();

        assert!(token.starts_with("42."), "token should carry the user id, got {token}");
        let session = signer.verify(&token).expect("token should verify");
        assert_eq!(session.user_id.value, 42);
    }

    #[test]
    fn test_verify_rejects_token_from_other_key() {
        let token = HmacSessionSigner::new("other-secret")
            .sign(&Session::new(Id::new(1)))
            .unwrap();

        assert!(HmacSessionSigner::new(SECRET).verify(&token).is_none());
    }

    #[test]
    fn test_verify_rejects_swapped_user_id() {
        let signer = HmacSessionSigner::new(SECRET);
        let token = signer.sign(&Session::new(Id::new(1))).unwrap();
        let (_, signature) = token.split_once('.').unwrap();
        let forged = format!("2.{}", signature);

        assert!(signer.verify(&forged).is_none());
    }

    #[rstest]
    #[case("")]
    #[case("42")]
    #[case("42.")]
    #[case("42.not-hex")]
    #[case(".abcdef")]
    fn test_verify_rejects_malformed(#[case] token: &str) {
        let signer = HmacSessionSigner::new(SECRET);
        assert!(signer.verify(token).is_none(), "`{}` must not verify", token);
    }
}

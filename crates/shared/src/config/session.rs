use crate::{abstract_trait::SessionTokenTrait, errors::ServiceError};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{Duration, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::fmt;

type HmacSha256 = Hmac<Sha256>;

/// Lifetime of an issued admin session token.
pub const SESSION_TTL_HOURS: i64 = 12;

#[derive(Clone)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

// The password must never reach a log line through `{:?}`.
impl fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Signed admin session tokens.
///
/// Token format: `base64url(username:expiry_unix) . hex(HMAC-SHA256(secret, payload))`.
/// The same secret also keys the constant-time credential comparison, so a
/// timing probe on the login form learns nothing about the configured values.
#[derive(Clone)]
pub struct SessionTokenConfig {
    secret: String,
    credentials: AdminCredentials,
}

impl fmt::Debug for SessionTokenConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionTokenConfig")
            .field("secret", &"<redacted>")
            .field("credentials", &self.credentials)
            .finish()
    }
}

impl SessionTokenConfig {
    pub fn new(secret: &str, credentials: AdminCredentials) -> Self {
        SessionTokenConfig {
            secret: secret.to_string(),
            credentials,
        }
    }

    fn sign(&self, payload: &str) -> String {
        let mut mac = <HmacSha256 as Mac>::new_from_slice(self.secret.as_bytes())
            .expect("HMAC-SHA256 accepts any key length");
        mac.update(payload.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    fn verify_signature(&self, payload: &str, signature_hex: &str) -> bool {
        let Ok(signature) = hex::decode(signature_hex) else {
            return false;
        };

        let mut mac = <HmacSha256 as Mac>::new_from_slice(self.secret.as_bytes())
            .expect("HMAC-SHA256 accepts any key length");
        mac.update(payload.as_bytes());
        mac.verify_slice(&signature).is_ok()
    }

    fn constant_time_eq(&self, submitted: &str, expected: &str) -> bool {
        let mut expected_mac = <HmacSha256 as Mac>::new_from_slice(self.secret.as_bytes())
            .expect("HMAC-SHA256 accepts any key length");
        expected_mac.update(expected.as_bytes());
        let expected_tag = expected_mac.finalize().into_bytes();

        let mut submitted_mac = <HmacSha256 as Mac>::new_from_slice(self.secret.as_bytes())
            .expect("HMAC-SHA256 accepts any key length");
        submitted_mac.update(submitted.as_bytes());
        submitted_mac.verify_slice(&expected_tag).is_ok()
    }

    fn generate_with_expiry(&self, username: &str, expires_at: i64) -> String {
        let payload = format!("{username}:{expires_at}");
        let signature = self.sign(&payload);
        format!("{}.{}", URL_SAFE_NO_PAD.encode(&payload), signature)
    }
}

impl SessionTokenTrait for SessionTokenConfig {
    fn verify_credentials(&self, username: &str, password: &str) -> Result<(), ServiceError> {
        let username_ok = self.constant_time_eq(username, &self.credentials.username);
        let password_ok = self.constant_time_eq(password, &self.credentials.password);

        if username_ok && password_ok {
            Ok(())
        } else {
            Err(ServiceError::InvalidCredentials)
        }
    }

    fn generate_token(&self, username: &str) -> Result<String, ServiceError> {
        let expires_at = (Utc::now() + Duration::hours(SESSION_TTL_HOURS)).timestamp();
        Ok(self.generate_with_expiry(username, expires_at))
    }

    fn verify_token(&self, token: &str) -> Result<String, ServiceError> {
        let (encoded_payload, signature) =
            token.split_once('.').ok_or(ServiceError::InvalidToken)?;

        let payload_bytes = URL_SAFE_NO_PAD
            .decode(encoded_payload)
            .map_err(|_| ServiceError::InvalidToken)?;
        let payload = String::from_utf8(payload_bytes).map_err(|_| ServiceError::InvalidToken)?;

        if !self.verify_signature(&payload, signature) {
            return Err(ServiceError::InvalidToken);
        }

        let (username, expires_at) = payload.rsplit_once(':').ok_or(ServiceError::InvalidToken)?;
        let expires_at: i64 = expires_at.parse().map_err(|_| ServiceError::InvalidToken)?;

        if expires_at < Utc::now().timestamp() {
            return Err(ServiceError::TokenExpired);
        }

        Ok(username.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SessionTokenConfig {
        SessionTokenConfig::new(
            "test-secret",
            AdminCredentials {
                username: "admin".into(),
                password: "hunter2".into(),
            },
        )
    }

    #[test]
    fn token_round_trip() {
        let cfg = config();
        let token = cfg.generate_token("admin").unwrap();
        assert_eq!(cfg.verify_token(&token).unwrap(), "admin");
    }

    #[test]
    fn expired_token_rejected_even_with_valid_signature() {
        let cfg = config();
        let expired = (Utc::now() - Duration::hours(1)).timestamp();
        let token = cfg.generate_with_expiry("admin", expired);

        // The signature itself is valid for this payload.
        let (encoded, signature) = token.split_once('.').unwrap();
        let payload = String::from_utf8(URL_SAFE_NO_PAD.decode(encoded).unwrap()).unwrap();
        assert!(cfg.verify_signature(&payload, signature));

        assert!(matches!(
            cfg.verify_token(&token),
            Err(ServiceError::TokenExpired)
        ));
    }

    #[test]
    fn tampered_payload_rejected() {
        let cfg = config();
        let token = cfg.generate_token("admin").unwrap();
        let (_, signature) = token.split_once('.').unwrap();

        let forged_payload = format!(
            "root:{}",
            (Utc::now() + Duration::hours(1)).timestamp()
        );
        let forged = format!("{}.{}", URL_SAFE_NO_PAD.encode(&forged_payload), signature);

        assert!(matches!(
            cfg.verify_token(&forged),
            Err(ServiceError::InvalidToken)
        ));
    }

    #[test]
    fn token_signed_with_other_secret_rejected() {
        let other = SessionTokenConfig::new(
            "another-secret",
            AdminCredentials {
                username: "admin".into(),
                password: "hunter2".into(),
            },
        );
        let token = other.generate_token("admin").unwrap();
        assert!(config().verify_token(&token).is_err());
    }

    #[test]
    fn malformed_tokens_rejected() {
        let cfg = config();
        for garbage in ["", "no-dot", "a.b", "!!!.zzz", "YWRtaW4.deadbeef"] {
            assert!(cfg.verify_token(garbage).is_err(), "accepted {garbage:?}");
        }
    }

    #[test]
    fn debug_output_redacts_secrets() {
        let dbg = format!("{:?}", config());
        assert!(!dbg.contains("test-secret"), "secret leaked: {dbg}");
        assert!(!dbg.contains("hunter2"), "password leaked: {dbg}");
        assert!(dbg.contains("admin"));
    }

    #[test]
    fn credential_check() {
        let cfg = config();
        assert!(cfg.verify_credentials("admin", "hunter2").is_ok());
        assert!(matches!(
            cfg.verify_credentials("admin", "wrong"),
            Err(ServiceError::InvalidCredentials)
        ));
        assert!(cfg.verify_credentials("root", "hunter2").is_err());
    }
}

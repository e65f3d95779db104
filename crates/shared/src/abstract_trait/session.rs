use crate::errors::ServiceError;
use std::sync::Arc;

pub type DynSessionToken = Arc<dyn SessionTokenTrait + Send + Sync>;

/// The single shared administrator identity: credential check plus the
/// signed-session-token lifecycle.
pub trait SessionTokenTrait: Send + Sync + std::fmt::Debug {
    fn verify_credentials(&self, username: &str, password: &str) -> Result<(), ServiceError>;
    fn generate_token(&self, username: &str) -> Result<String, ServiceError>;
    /// Returns the username embedded in a valid, unexpired token.
    fn verify_token(&self, token: &str) -> Result<String, ServiceError>;
}

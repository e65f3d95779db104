mod admin;
mod validate;

pub use self::admin::{SESSION_COOKIE, admin_auth_middleware};
pub use self::validate::SimpleValidatedJson;

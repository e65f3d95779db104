mod database;
mod myconfig;
mod session;

pub use self::database::{ConnectionManager, ConnectionPool};
pub use self::myconfig::Config;
pub use self::session::{AdminCredentials, SessionTokenConfig};

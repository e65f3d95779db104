use crate::di::DependenciesInject;
use anyhow::Result;
use shared::{
    abstract_trait::DynSessionToken,
    config::{AdminCredentials, Config, ConnectionPool, SessionTokenConfig},
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub session_token: DynSessionToken,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(pool: ConnectionPool, config: Config) -> Result<Self> {
        let session_token = Arc::new(SessionTokenConfig::new(
            &config.session_secret,
            AdminCredentials {
                username: config.admin_username.clone(),
                password: config.admin_password.clone(),
            },
        )) as DynSessionToken;

        let di_container = DependenciesInject::new(pool, &config);

        Ok(Self {
            di_container,
            session_token,
            config: Arc::new(config),
        })
    }
}

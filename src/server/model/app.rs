use sea_orm::DatabaseConnection;

use crate::server::{config::Config, model::auth::AuthKeys};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub auth: AuthKeys,
}

impl AppState {
    pub fn new(db: DatabaseConnection, config: &Config) -> Self {
        Self {
            db,
            auth: AuthKeys::from_secret(config.jwt_secret.as_bytes()),
        }
    }
}

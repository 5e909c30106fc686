use crate::server::error::Error;

pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        Ok(Self {
            database_url: require_var("DATABASE_URL")?,
            jwt_secret: require_var("JWT_SECRET")?,
            port: match std::env::var("PORT") {
                Ok(port) => port.parse().map_err(|_| Error::InvalidEnvValue {
                    var: "PORT".to_string(),
                    reason: "expected a port number".to_string(),
                })?,
                Err(_) => 3000,
            },
        })
    }
}

fn require_var(name: &str) -> Result<String, Error> {
    std::env::var(name).map_err(|_| Error::MissingEnvVar(name.to_string()))
}

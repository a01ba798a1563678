//! Environment-backed configuration, loaded once at startup.

use anyhow::Context;

use crate::auth::AuthConfig;

pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub jwt_secret: Option<String>,
    pub auth_dev_bypass: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL is not set")?;
        let port = std::env::var("PORT")
            .ok()
            .map(|v| v.parse::<u16>())
            .transpose()
            .context("PORT must be a valid port number")?
            .unwrap_or(8084);
        let jwt_secret = std::env::var("JWT_SECRET").ok().filter(|v| !v.is_empty());
        let auth_dev_bypass = std::env::var("AUTH_DEV_BYPASS")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Ok(Self {
            database_url,
            port,
            jwt_secret,
            auth_dev_bypass,
        })
    }

    pub fn auth(&self) -> AuthConfig {
        AuthConfig {
            jwt_secret: self.jwt_secret.clone(),
            dev_bypass: self.auth_dev_bypass,
        }
    }
}

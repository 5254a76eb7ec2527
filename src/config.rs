use anyhow::Context;
use serde::Deserialize;
use sqlx::postgres::{PgConnectOptions, PgSslMode};

#[derive(Debug, Clone, Deserialize)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
}

impl DbConfig {
    /// Connection options for the pool. TLS is off, the store is expected on a private network.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.username)
            .password(&self.password)
            .database(&self.database)
            .ssl_mode(PgSslMode::Disable)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub db: DbConfig,
    pub app_host: String,
    pub app_port: u16,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| lookup(key).with_context(|| format!("{key} is not set"));
        let port = |key: &str, default: u16| -> anyhow::Result<u16> {
            match lookup(key) {
                Some(v) => v
                    .parse::<u16>()
                    .with_context(|| format!("{key} must be a port number, got {v:?}")),
                None => Ok(default),
            }
        };

        let db = DbConfig {
            host: lookup("DB_HOST").unwrap_or_else(|| "localhost".into()),
            port: port("DB_PORT", 5432)?,
            username: required("DB_USERNAME")?,
            password: lookup("DB_PASSWORD").unwrap_or_default(),
            database: required("DB_DATABASE")?,
        };

        Ok(Self {
            db,
            app_host: lookup("APP_HOST").unwrap_or_else(|| "0.0.0.0".into()),
            app_port: port("APP_PORT", 8080)?,
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.app_host, self.app_port)
    }
}

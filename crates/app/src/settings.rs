//! Handles settings for the application. Configuration is read from an
//! optional `settings.toml` and from `EXPENSES__*` environment variables
//! (e.g. `EXPENSES__AUTH__SECRET`), the latter taking precedence.
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct App {
    pub level: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Database {
    Memory,
    Sqlite(String),
}

#[derive(Debug, Deserialize)]
pub struct Server {
    pub database: Database,
    pub bind: String,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct Auth {
    /// HMAC secret used to sign bearer tokens.
    pub secret: String,
    pub token_ttl_minutes: i64,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub app: App,
    pub server: Server,
    pub auth: Auth,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("app.level", "info")?
            .set_default("server.database", "memory")?
            .set_default("server.bind", "127.0.0.1")?
            .set_default("server.port", 8000)?
            .set_default("auth.token_ttl_minutes", server::DEFAULT_TOKEN_TTL_MINUTES)?
            .add_source(File::with_name("settings").required(false))
            .add_source(Environment::with_prefix("EXPENSES").separator("__"))
            .build()?;

        settings.try_deserialize()
    }
}

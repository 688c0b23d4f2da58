//! Configuration management for Bookshelf server

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Serve Swagger UI and the OpenAPI document (unauthenticated)
    pub enable_docs: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub jwt_expiration_hours: u64,
    /// Login accepted by the built-in credential verifier
    pub admin_email: String,
    pub admin_password: String,
    /// Argon2 PHC string; takes precedence over `admin_password` when set
    pub admin_password_hash: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UploadConfig {
    pub directory: PathBuf,
    pub max_bytes: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    /// Start with the two sample books
    pub seed: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
    pub upload: UploadConfig,
    pub store: StoreConfig,
}

impl AppConfig {
    /// Load configuration from defaults, files and environment variables.
    ///
    /// `auth.jwt_secret` and `server.port` have no default, so loading fails
    /// when neither a file nor the environment provides them.
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.enable_docs", false)?
            .set_default("auth.jwt_expiration_hours", 72)?
            .set_default("auth.admin_email", "user@example.com")?
            .set_default("auth.admin_password", "password123")?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "pretty")?
            .set_default("upload.directory", "./uploads")?
            .set_default("upload.max_bytes", 10 * 1024 * 1024)?
            .set_default("store.seed", true)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // BOOKSHELF_AUTH__JWT_SECRET, BOOKSHELF_SERVER__PORT, ...
            .add_source(
                Environment::with_prefix("BOOKSHELF")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("auth.jwt_secret", env::var("SECRET_KEY").ok())?
            .set_override_option("server.port", env::var("PORT").ok())?
            .build()?;

        config.try_deserialize()
    }
}

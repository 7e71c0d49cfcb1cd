//! Frontend configuration

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Authentication configuration
pub struct AuthConfig;

impl AuthConfig {
    /// Storage key holding the raw bearer token
    pub const TOKEN_KEY: &'static str = "token";

    /// Storage key holding the JSON-serialized user profile
    pub const USER_KEY: &'static str = "user";

    /// Public route unauthenticated navigation is sent to
    pub const LOGIN_PATH: &'static str = "/login";

    /// Where an authenticated visit to the login page lands
    pub const HOME_PATH: &'static str = "/";
}

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Backend API configuration
    pub api: ApiConfig,

    /// Session persistence configuration
    pub storage: StorageConfig,
}

/// Backend API configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Server origin; the `/api` prefix is added by the client
    pub base_url: String,

    /// Request timeout in milliseconds
    pub timeout_ms: u64,
}

/// Session persistence configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// File holding the persisted token and profile
    pub path: PathBuf,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            timeout_ms: 10_000,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        let path = ProjectDirs::from("com", "petcare", "petcare-admin").map_or_else(
            || PathBuf::from("./session.json"),
            |dirs| dirs.data_dir().join("session.json"),
        );
        Self { path }
    }
}

impl ApiConfig {
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl AppConfig {
    /// Load configuration from defaults, an optional file and the environment
    ///
    /// Environment variables use the `PETCARE` prefix with `__` between
    /// sections, e.g. `PETCARE__API__BASE_URL`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or a value cannot be parsed
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let defaults = Self::default();

        let mut builder = config::Config::builder()
            .set_default("api.base_url", defaults.api.base_url)?
            .set_default("api.timeout_ms", defaults.api.timeout_ms)?
            .set_default(
                "storage.path",
                defaults.storage.path.to_string_lossy().to_string(),
            )?;

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        }

        let settings = builder
            .add_source(
                config::Environment::with_prefix("PETCARE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

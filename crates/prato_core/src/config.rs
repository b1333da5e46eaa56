//! Provider identifiers, read from the process environment at startup.

use std::env;
use thiserror::Error;

pub const ENV_USER_ID: &str = "PRATO_API_USER_ID";
pub const ENV_APP_ID: &str = "PRATO_API_APP_ID";
pub const ENV_MODEL_ID: &str = "PRATO_API_MODEL_ID";
pub const ENV_MODEL_VERSION_ID: &str = "PRATO_API_MODEL_VERSION_ID";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("variável de ambiente ausente: {0}")]
    Missing(&'static str),
    #[error("variável de ambiente vazia: {0}")]
    Empty(&'static str),
}

/// Identifiers for the hosted recognition model. All four are required;
/// a request built from a partial config would be malformed, so
/// validation happens here instead of at call time.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub user_id: String,
    pub app_id: String,
    pub model_id: String,
    pub model_version_id: String,
    pub base_url: String,
}

impl ApiConfig {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.clarifai.com";

    /// Read and validate every identifier from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`ApiConfig::from_env`] with an injected lookup, so
    /// validation can be tested without mutating process globals.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &'static str| -> Result<String, ConfigError> {
            let value = lookup(name).ok_or(ConfigError::Missing(name))?;
            if value.trim().is_empty() {
                return Err(ConfigError::Empty(name));
            }
            Ok(value)
        };

        Ok(Self {
            user_id: get(ENV_USER_ID)?,
            app_id: get(ENV_APP_ID)?,
            model_id: get(ENV_MODEL_ID)?,
            model_version_id: get(ENV_MODEL_VERSION_ID)?,
            base_url: Self::DEFAULT_BASE_URL.to_string(),
        })
    }
}

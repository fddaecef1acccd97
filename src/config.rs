use std::env;

use reqwest::Url;
use serde::Deserialize;
use thiserror::Error;

pub const LMS_BASE_URL_VAR: &str = "LMS_BASE_URL";
pub const COOKIE_NAME_VAR: &str = "LANGUAGE_PREFERENCE_COOKIE_NAME";

/// The two values this crate reads from the host configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub lms_base_url: Url,
    pub language_preference_cookie_name: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    MissingVar(&'static str),
    #[error("invalid LMS_BASE_URL {value:?}: {reason}")]
    InvalidBaseUrl { value: String, reason: String },
}

impl Config {
    pub fn new(lms_base_url: Url, language_preference_cookie_name: impl Into<String>) -> Self {
        Self {
            lms_base_url,
            language_preference_cookie_name: language_preference_cookie_name.into(),
        }
    }

    /// Reads `LMS_BASE_URL` and `LANGUAGE_PREFERENCE_COOKIE_NAME` from the
    /// environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            env::var(LMS_BASE_URL_VAR).ok(),
            env::var(COOKIE_NAME_VAR).ok(),
        )
    }

    fn from_vars(
        base: Option<String>,
        cookie_name: Option<String>,
    ) -> Result<Self, ConfigError> {
        let base = base.ok_or(ConfigError::MissingVar(LMS_BASE_URL_VAR))?;
        let cookie_name = cookie_name.ok_or(ConfigError::MissingVar(COOKIE_NAME_VAR))?;

        let lms_base_url = Url::parse(&base).map_err(|e| ConfigError::InvalidBaseUrl {
            value: base,
            reason: e.to_string(),
        })?;

        Ok(Self::new(lms_base_url, cookie_name))
    }

    /// Builds an LMS endpoint URL from an absolute path, ignoring any path
    /// or trailing slash on the configured base URL.
    pub(crate) fn endpoint(&self, path: &str) -> Url {
        let mut url = self.lms_base_url.clone();
        url.set_path(path);
        url
    }
}

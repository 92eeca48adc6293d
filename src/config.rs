//! Runtime configuration resolved from the environment.

use std::{env, path::PathBuf};

use crate::error::{Error, Result};

/// Default inference endpoint, overridable through `BRIEFLY_API_URL`.
pub const DEFAULT_API_URL: &str =
    "https://api-inference.huggingface.co/models/facebook/bart-large-cnn";

/// Name of the environment variable holding the bearer token.
pub const TOKEN_VAR: &str = "HUGGINGFACE_TOKEN";

/// Application configuration resolved from `.env` and defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Inference endpoint URL.
    pub api_url: String,
    /// Bearer token for the inference service, when present.
    token: Option<String>,
    /// Directory holding the append-only run log.
    pub log_dir: PathBuf,
}

impl Settings {
    /// Load configuration from `.env` and the process environment.
    ///
    /// Loading never fails: the token is checked by [`Self::bearer_token`] so
    /// logging can be set up first and record the failure.
    pub fn load() -> Self {
        dotenvy::dotenv().ok();

        let token = env::var(TOKEN_VAR).ok().filter(|t| !t.trim().is_empty());

        let api_url =
            env::var("BRIEFLY_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let log_dir = env::var("BRIEFLY_LOG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("logs"));

        Self {
            api_url,
            token,
            log_dir,
        }
    }

    /// The required bearer token; the token must come from the environment,
    /// never from source or flags. Checked before any network activity.
    pub fn bearer_token(&self) -> Result<&str> {
        self.token
            .as_deref()
            .ok_or(Error::MissingToken { var: TOKEN_VAR })
    }

    /// Path of the append-only log file inside the log directory.
    pub fn log_path(&self) -> PathBuf {
        self.log_dir.join("app.log")
    }
}

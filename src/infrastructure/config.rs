//! Publisher configuration

use crate::error::{QiitaError, Result};
use std::path::PathBuf;

/// Environment variable holding the Qiita access token
pub const TOKEN_ENV_VAR: &str = "QIITA_ACCESS_TOKEN";

/// Environment variable overriding the article-creation endpoint
pub const API_URL_ENV_VAR: &str = "QIITA_API_URL";

/// Qiita article-creation endpoint
pub const DEFAULT_API_URL: &str = "https://qiita.com/api/v2/items";

/// Directory scanned for articles, relative to the working directory
pub const DEFAULT_ARTICLES_DIR: &str = "articles";

/// Everything a publishing run needs, resolved once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublisherConfig {
    pub access_token: String,
    pub api_url: String,
    pub articles_dir: PathBuf,
    pub private: bool,
    pub tweet: bool,
}

impl PublisherConfig {
    /// Create a config with default endpoint, directory and visibility
    pub fn new(access_token: impl Into<String>) -> Self {
        PublisherConfig {
            access_token: access_token.into(),
            api_url: DEFAULT_API_URL.to_string(),
            articles_dir: PathBuf::from(DEFAULT_ARTICLES_DIR),
            private: false,
            tweet: false,
        }
    }

    /// Read the access token from `QIITA_ACCESS_TOKEN`.
    ///
    /// An empty value is treated the same as an unset one. Whitespace is kept
    /// as-is and sent to the API.
    pub fn access_token_from_env() -> Result<String> {
        token_from_value(std::env::var(TOKEN_ENV_VAR).ok())
    }
}

fn token_from_value(value: Option<String>) -> Result<String> {
    match value {
        Some(token) if !token.is_empty() => Ok(token),
        _ => Err(QiitaError::MissingToken(TOKEN_ENV_VAR.to_string())),
    }
}

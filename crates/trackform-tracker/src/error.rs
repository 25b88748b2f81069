//! Tracker client error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Tracker API error ({status}) {code}: {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
    },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Config error: {0}")]
    Config(#[from] trackform_config::ConfigError),
}

impl TrackerError {
    /// HTTP status reported by the API, if the request reached it
    pub fn status(&self) -> Option<u16> {
        match self {
            TrackerError::Api { status, .. } => Some(*status),
            TrackerError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;

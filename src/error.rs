//! Library error types. Flow handlers use `anyhow` on top of these.
use thiserror::Error;

/// Failure reported by the scanning API or the transport used to reach it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShodanError {
    /// The API answered with an `{"error": ...}` body.
    #[error("{0}")]
    Api(String),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ShodanError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ShodanError::Decode(e.to_string())
        } else {
            ShodanError::Transport(e.to_string())
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required environment variable `{0}`")]
    Missing(&'static str),
    #[error("invalid value for `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

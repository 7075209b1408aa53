//! Runtime configuration read from the environment (optionally seeded by `.env`).
use crate::error::ConfigError;
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};

/// Outcome of seeding the environment from a `.env` file. Loading happens before
/// the log subscriber exists, so `main` reports it afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvSource {
    DotenvFile(PathBuf),
    ProcessOnly(String),
}

impl fmt::Display for EnvSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DotenvFile(path) => write!(f, "{} and process environment", path.display()),
            Self::ProcessOnly(reason) => write!(f, "process environment only ({reason})"),
        }
    }
}

/// Seed the process environment from the nearest `.env`, if any.
pub fn load_dotenv() -> EnvSource {
    match dotenv::dotenv() {
        Ok(path) => EnvSource::DotenvFile(path),
        Err(e) => EnvSource::ProcessOnly(e.to_string()),
    }
}

pub fn load_dotenv_from(path: impl AsRef<Path>) -> EnvSource {
    let path = path.as_ref();
    match dotenv::from_path(path) {
        Ok(()) => EnvSource::DotenvFile(path.to_path_buf()),
        Err(e) => EnvSource::ProcessOnly(e.to_string()),
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    pub shodan_api_key: String,
    /// Empty means every user is allowed.
    pub authorized_users: Vec<u64>,
    pub prefix: String,
    pub guild_id: Option<u64>,
    pub log_level: String,
    pub account_info_ttl_secs: u64,
    pub shodan_timeout_secs: u64,
}

impl Config {
    /// Read every setting from the process environment. Call `load_dotenv` first.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (tests pass a map).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(key))
        };
        let number = |key: &'static str, default: u64| -> Result<u64, ConfigError> {
            match lookup(key).filter(|v| !v.trim().is_empty()) {
                None => Ok(default),
                Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
                    key,
                    reason: format!("`{raw}` is not a non-negative integer"),
                }),
            }
        };

        let guild_id = match lookup("GUILD_ID").filter(|v| !v.trim().is_empty()) {
            None => None,
            Some(raw) => Some(raw.trim().parse().map_err(|_| ConfigError::Invalid {
                key: "GUILD_ID",
                reason: format!("`{raw}` is not a valid guild id"),
            })?),
        };

        Ok(Self {
            discord_token: required("DISCORD_TOKEN")?,
            shodan_api_key: required("SHODAN_API_KEY")?,
            authorized_users: parse_user_list(&lookup("AUTHORIZED_USERS").unwrap_or_default()),
            prefix: lookup("COMMAND_PREFIX")
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty())
                .unwrap_or_else(|| "!".to_string()),
            guild_id,
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            account_info_ttl_secs: number("ACCOUNT_INFO_TTL_SECS", 0)?,
            shodan_timeout_secs: number("SHODAN_TIMEOUT_SECS", 30)?,
        })
    }
}

/// Parse a comma separated id list, skipping entries that are not plain digits.
pub fn parse_user_list(raw: &str) -> Vec<u64> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit()))
        .filter_map(|s| s.parse().ok())
        .collect()
}

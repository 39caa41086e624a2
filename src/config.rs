//! Service configuration, read from the environment.
//!
//! | Variable | Default |
//! |---|---|
//! | `STUDENTS_DATA_FILE` | `data/students.json` |
//! | `STUDENTS_BIND_ADDR` | `127.0.0.1:3000` |
//! | `STUDENTS_LOG_JSON` | `false` |

use std::env;
use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DATA_FILE_VAR: &str = "STUDENTS_DATA_FILE";
pub const BIND_ADDR_VAR: &str = "STUDENTS_BIND_ADDR";
pub const LOG_JSON_VAR: &str = "STUDENTS_LOG_JSON";

pub const DEFAULT_DATA_FILE: &str = "data/students.json";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidValue {
        name: &'static str,
        value: String,
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidValue {
                name,
                value,
                reason,
            } => write!(f, "invalid {}={:?}: {}", name, value, reason),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Backing JSON file of the record store.
    pub data_file: PathBuf,
    pub bind_addr: SocketAddr,
    /// Emit logs as JSON lines instead of human-readable text.
    pub log_json: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build a config from an arbitrary variable lookup. Blank values count
    /// as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let data_file =
            PathBuf::from(get(DATA_FILE_VAR).unwrap_or_else(|| DEFAULT_DATA_FILE.into()));

        let raw_addr = get(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let bind_addr = raw_addr
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidValue {
                name: BIND_ADDR_VAR,
                value: raw_addr.clone(),
                reason: e.to_string(),
            })?;

        let log_json = get(LOG_JSON_VAR)
            .and_then(|v| parse_bool(&v))
            .unwrap_or(false);

        Ok(Self {
            data_file,
            bind_addr,
            log_json,
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim() {
        "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
        "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
        _ => None,
    }
}

use std::str::FromStr;

use crate::server::{
    error::{config::ConfigError, AppError},
    model::drone::TransitionPolicy,
    util::qgc::ParseMode,
};

const DEFAULT_MISSION_FILE_DIR: &str = "qgc_waypoints";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,

    /// Root directory of the mission-file store.
    pub mission_file_dir: String,
    pub bind_addr: String,

    pub parse_mode: ParseMode,
    pub transition_policy: TransitionPolicy,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            mission_file_dir: std::env::var("MISSION_FILE_DIR")
                .unwrap_or_else(|_| DEFAULT_MISSION_FILE_DIR.to_string()),
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            parse_mode: parse_optional("WAYPOINT_PARSE_MODE")?,
            transition_policy: parse_optional("STATUS_TRANSITIONS")?,
        })
    }
}

/// Reads an optional setting, falling back to the type's default when unset.
fn parse_optional<T>(name: &str) -> Result<T, ConfigError>
where
    T: FromStr + Default,
{
    match std::env::var(name) {
        Ok(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
            name: name.to_string(),
            value,
        }),
        Err(_) => Ok(T::default()),
    }
}

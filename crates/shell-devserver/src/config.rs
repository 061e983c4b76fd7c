//! Runtime configuration.

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 8000;

/// Environment variable overriding the listening port.
pub const PORT_ENV: &str = "PORT";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid {PORT_ENV} '{0}'")]
    InvalidPort(String),
}

/// Listening port: the `PORT` variable, then the command-line argument,
/// then [`DEFAULT_PORT`]. A blank variable counts as unset.
pub fn port(env: Option<&str>, arg: Option<u16>) -> Result<u16, ConfigError> {
    match env.map(str::trim).filter(|v| !v.is_empty()) {
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidPort(value.to_string())),
        None => Ok(arg.unwrap_or(DEFAULT_PORT)),
    }
}

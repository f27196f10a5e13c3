use std::path::Path;

use thiserror::Error;

use crate::services::presence::PresenceError;
use crate::services::winamp::WinampError;

/// Top-level error type used by the binary.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration is structurally invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Filesystem failure while loading or writing configuration.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A TOML file could not be parsed.
    #[error("{0}")]
    TomlParse(String),

    /// Player protocol failure.
    #[error(transparent)]
    Winamp(#[from] WinampError),

    /// Presence endpoint failure.
    #[error(transparent)]
    Presence(#[from] PresenceError),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Build a TOML parse error with the offending path when known.
    pub fn toml_parse(error: impl std::fmt::Display, path: Option<&Path>) -> Self {
        match path {
            Some(p) => {
                let clean_path = p.canonicalize().unwrap_or_else(|_| p.to_path_buf());
                Error::TomlParse(format!("failed to parse TOML at {clean_path:?}: {error}"))
            }
            None => Error::TomlParse(format!("failed to parse TOML: {error}")),
        }
    }
}

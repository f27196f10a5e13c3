use std::{
    env,
    io::{Error, ErrorKind},
    path::PathBuf,
};

/// Utility struct for locating configuration and data files.
///
/// The configuration directory follows the XDG Base Directory layout, with
/// `APPDATA` as the Windows equivalent.
pub struct ConfigPaths;

impl ConfigPaths {
    /// Returns the configuration directory for the application.
    ///
    /// Checks `XDG_CONFIG_HOME`, then `APPDATA`, then falls back to
    /// `$HOME/.config`, appending `winamp-presence`.
    ///
    /// # Errors
    /// Returns an error if none of the relevant environment variables are
    /// set.
    pub fn config_dir() -> Result<PathBuf, Error> {
        let config_home = env::var("XDG_CONFIG_HOME")
            .or_else(|_| env::var("APPDATA"))
            .or_else(|_| env::var("HOME").map(|home| format!("{home}/.config")))
            .map_err(|_| {
                Error::new(
                    ErrorKind::NotFound,
                    "none of XDG_CONFIG_HOME, APPDATA or HOME environment variables found",
                )
            })?;

        Ok(PathBuf::from(config_home).join("winamp-presence"))
    }

    /// Path of the main settings file.
    ///
    /// # Errors
    /// Propagates [`ConfigPaths::config_dir`] failures.
    pub fn settings_file() -> Result<PathBuf, Error> {
        Ok(Self::config_dir()?.join("settings.toml"))
    }

    /// Path of the album cover index (album lookup key to asset key).
    ///
    /// # Errors
    /// Propagates [`ConfigPaths::config_dir`] failures.
    pub fn album_covers_file() -> Result<PathBuf, Error> {
        Ok(Self::config_dir()?.join("album_covers.json"))
    }

    /// Path of the album name exceptions list, one album per line.
    ///
    /// # Errors
    /// Propagates [`ConfigPaths::config_dir`] failures.
    pub fn album_exceptions_file() -> Result<PathBuf, Error> {
        Ok(Self::config_dir()?.join("album_name_exceptions.txt"))
    }

    /// Path the player dumps its playlist to.
    ///
    /// The player always writes into its own application-data directory;
    /// the `.m3u8` variant is used for UTF-8 support.
    ///
    /// # Errors
    /// Returns an error if `APPDATA` is not set (non-Windows hosts without
    /// an override).
    pub fn playlist_dump_file() -> Result<PathBuf, Error> {
        let appdata = env::var("APPDATA").map_err(|_| {
            Error::new(ErrorKind::NotFound, "APPDATA environment variable not found")
        })?;

        Ok(PathBuf::from(appdata).join("Winamp").join("winamp.m3u8"))
    }
}

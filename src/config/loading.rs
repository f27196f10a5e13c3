use std::{fs, path::Path};

use tracing::info;

use crate::{Error, Result};

use super::Config;

impl Config {
    /// Load the settings file, creating it with defaults when absent.
    ///
    /// A missing file is not an error: the defaults are serialized back to
    /// disk so users have a template to edit, and the engine proceeds with
    /// them.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed, or
    /// if the defaults cannot be written out.
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            let config =
                toml::from_str(&content).map_err(|e| Error::toml_parse(e, Some(path)))?;
            return Ok(config);
        }

        let config = Config::default();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let serialized =
            toml::to_string_pretty(&config).map_err(|e| Error::Config(e.to_string()))?;
        fs::write(path, serialized)?;
        info!(path = %path.display(), "settings file not found, wrote defaults");

        Ok(config)
    }
}

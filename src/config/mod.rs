//! Configuration schema.
//!
//! The whole configuration lives in one `settings.toml` with sensible
//! defaults for every field; a missing file is written out with the defaults
//! so users have something to edit. Two optional sidecar files (the album
//! cover index and the album name exceptions list) are loaded separately by
//! the asset resolver.

mod loading;
mod paths;
#[cfg(test)]
mod tests;

pub use paths::ConfigPaths;

use serde::{Deserialize, Serialize};

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// General runtime settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Presence endpoint settings.
    #[serde(default)]
    pub presence: PresenceConfig,

    /// Display asset settings.
    #[serde(default)]
    pub assets: AssetsConfig,
}

/// General runtime settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Seconds between player polls.
    pub poll_interval_secs: u64,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: 1,
        }
    }
}

/// Presence endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PresenceConfig {
    /// Application id registered with the presence service; `"default"`
    /// selects the id published with this bridge.
    pub client_id: String,

    /// Asset key for the small corner image.
    pub small_asset_key: String,

    /// Hover caption for the small corner image.
    pub small_asset_text: String,
}

impl Default for PresenceConfig {
    fn default() -> Self {
        Self {
            client_id: "default".to_owned(),
            small_asset_key: "playbutton".to_owned(),
            small_asset_text: "Playing".to_owned(),
        }
    }
}

/// Display asset settings for the large image.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Whether to resolve per-album assets through the cover index.
    pub custom_assets: bool,

    /// Asset key used when no per-album asset resolves.
    pub default_key: String,

    /// Caption mode for the default asset: `"winamp version"` shows the
    /// player version, `"album name"` the current album, anything else is
    /// used verbatim.
    pub default_text: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            custom_assets: false,
            default_key: "logo".to_owned(),
            default_text: "winamp version".to_owned(),
        }
    }
}

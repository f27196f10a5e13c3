//! Album-art asset resolution.
//!
//! The remote presence API can only show images that were uploaded ahead of
//! time under symbolic asset keys. A local index file maps album names to
//! those keys; an exceptions list disambiguates same-named albums by
//! different artists. Both files are optional and their absence degrades to
//! the default asset rather than failing the engine.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::services::winamp::{PlayerConnection, WinampClient, WinampError};

use super::title::MIN_FIELD_LEN;
use super::types::AssetResolution;

/// Source of the directory a playlist entry lives in.
///
/// Implemented by the player client (dump the playlist, read the dump back);
/// tests substitute fixed directories.
pub trait AlbumLocator {
    /// Directory containing the track at `index` in the live playlist.
    ///
    /// # Errors
    /// Returns [`WinampError::NoTrackSelected`] for out-of-range indices and
    /// [`WinampError::Playlist`] when the dump cannot be read.
    fn locate_album_dir(&self, index: u32) -> Result<PathBuf, WinampError>;
}

impl<C: PlayerConnection> AlbumLocator for WinampClient<C> {
    fn locate_album_dir(&self, index: u32) -> Result<PathBuf, WinampError> {
        self.resolve_track_directory(index)
    }
}

/// Caption used when an album has no dedicated asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultCaption {
    /// Show the player version, e.g. `Winamp v5.72`.
    WinampVersion,

    /// Show the album name that failed to resolve.
    AlbumName,

    /// Show a fixed literal from the configuration.
    Literal(String),
}

impl DefaultCaption {
    /// Parse the configuration string: the two documented modes by name,
    /// anything else taken as a verbatim literal.
    pub fn from_config(value: &str) -> Self {
        match value {
            "winamp version" => Self::WinampVersion,
            "album name" => Self::AlbumName,
            literal => Self::Literal(literal.to_owned()),
        }
    }
}

/// Maps the current track to a large-image asset key and caption.
#[derive(Debug)]
pub struct AssetResolver {
    custom_enabled: bool,
    album_index: HashMap<String, String>,
    exceptions: HashSet<String>,
    default_key: String,
    default_caption: DefaultCaption,
}

impl AssetResolver {
    /// Resolver that always answers with the default asset; no directory or
    /// lookup work occurs.
    pub fn disabled(default_key: String) -> Self {
        Self {
            custom_enabled: false,
            album_index: HashMap::new(),
            exceptions: HashSet::new(),
            default_key,
            default_caption: DefaultCaption::WinampVersion,
        }
    }

    /// Resolver with a loaded album index and exceptions set.
    pub fn new(
        album_index: HashMap<String, String>,
        exceptions: HashSet<String>,
        default_key: String,
        default_caption: DefaultCaption,
    ) -> Self {
        Self {
            custom_enabled: true,
            album_index,
            exceptions,
            default_key,
            default_caption,
        }
    }

    /// Load the album index and exceptions list from their sidecar files.
    ///
    /// A missing exceptions file leaves the set empty; a missing or
    /// malformed index file disables custom assets entirely. Neither case
    /// fails the engine.
    pub fn load(
        custom_assets: bool,
        covers_path: &Path,
        exceptions_path: &Path,
        default_key: String,
        default_caption: DefaultCaption,
    ) -> Self {
        if !custom_assets {
            return Self::disabled(default_key);
        }

        let exceptions: HashSet<String> = match fs::read_to_string(exceptions_path) {
            Ok(content) => content
                .lines()
                .filter(|line| !line.is_empty())
                .map(str::to_owned)
                .collect(),
            Err(error) => {
                warn!(
                    path = %exceptions_path.display(),
                    %error,
                    "could not read album name exceptions, duplicate album names may \
                     resolve to the wrong asset"
                );
                HashSet::new()
            }
        };

        let album_index: HashMap<String, String> = match fs::read_to_string(covers_path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(index) => index,
                Err(error) => {
                    warn!(
                        path = %covers_path.display(),
                        %error,
                        "album cover index is not valid JSON, custom assets disabled"
                    );
                    return Self::disabled(default_key);
                }
            },
            Err(error) => {
                warn!(
                    path = %covers_path.display(),
                    %error,
                    "could not read album cover index, custom assets disabled"
                );
                return Self::disabled(default_key);
            }
        };

        Self::new(album_index, exceptions, default_key, default_caption)
    }

    /// Whether per-album lookups are active.
    pub fn custom_enabled(&self) -> bool {
        self.custom_enabled
    }

    /// Resolve the display asset for the track at `track_position`.
    ///
    /// With custom assets enabled this resolves the track's directory, takes
    /// its last segment as the album name, disambiguates via the exceptions
    /// set and looks the key up in the index, falling back to the default
    /// asset on any miss or locator failure. Resolutions are recomputed per
    /// track change and never cached, since files may move between plays.
    pub fn resolve(
        &self,
        locator: &dyn AlbumLocator,
        track_position: u32,
        artist: &str,
        version: &str,
    ) -> AssetResolution {
        if !self.custom_enabled {
            return AssetResolution {
                asset_key: self.default_key.clone(),
                caption: version_caption(version),
            };
        }

        let album_name = match locator.locate_album_dir(track_position) {
            Ok(directory) => directory
                .file_name()
                .map(|name| name.to_string_lossy().into_owned()),
            Err(error) => {
                debug!(%error, track_position, "album directory lookup failed");
                None
            }
        };

        let Some(album_name) = album_name else {
            // Nothing to name the album by; the version caption is the only
            // meaningful fallback even in album-name mode.
            return AssetResolution {
                asset_key: self.default_key.clone(),
                caption: pad_caption(match &self.default_caption {
                    DefaultCaption::Literal(text) => text.clone(),
                    _ => version_caption(version),
                }),
            };
        };

        let lookup_key = if self.exceptions.contains(&album_name) {
            format!("{artist} - {album_name}")
        } else {
            album_name.clone()
        };

        let (asset_key, caption) = match self.album_index.get(&lookup_key) {
            Some(asset_key) => (asset_key.clone(), album_name),
            None => (
                self.default_key.clone(),
                match &self.default_caption {
                    DefaultCaption::WinampVersion => version_caption(version),
                    DefaultCaption::AlbumName => album_name,
                    DefaultCaption::Literal(text) => text.clone(),
                },
            ),
        };

        AssetResolution {
            asset_key,
            caption: pad_caption(caption),
        }
    }
}

fn version_caption(version: &str) -> String {
    format!("Winamp v{version}")
}

fn pad_caption(caption: String) -> String {
    if caption.chars().count() < MIN_FIELD_LEN {
        format!("Album: {caption}")
    } else {
        caption
    }
}

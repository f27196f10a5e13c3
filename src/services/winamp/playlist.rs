//! Playlist dump parsing.
//!
//! The player writes its playlist as line-oriented UTF-8 with a leading byte
//! order mark (the `.m3u8` variant; the `.m3u` sibling is not UTF-8 safe).
//! Lines starting with `#` are metadata, every other non-blank line is an
//! absolute path to a track, in playlist order.

use std::fs;
use std::path::Path;

use super::error::WinampError;

/// Read a playlist file and return the track paths it lists, in file order.
///
/// # Errors
/// Returns [`WinampError::Playlist`] if the file cannot be read.
pub fn read_playlist(path: &Path) -> Result<Vec<String>, WinampError> {
    let raw = fs::read_to_string(path).map_err(|source| WinampError::Playlist {
        path: path.to_path_buf(),
        source,
    })?;

    let text = raw.strip_prefix('\u{feff}').unwrap_or(&raw);

    Ok(text
        .lines()
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_owned)
        .collect())
}

//! Typed control surface over the player's window-message API.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::connection::{PlayerConnection, WindowHandle};
use super::error::WinampError;
use super::playlist;
use super::types::{
    CurrentTrack, GuiCommand, NO_TRACK_SELECTED, PlayingStatus, QueryCommand, Track, WM_COMMAND,
    WM_USER,
};

/// Controller for a running Winamp instance.
///
/// [`WinampClient::connect`] must succeed before any command or query can be
/// sent. The client owns the window handle exclusively; there is exactly one
/// caller by design, so calls are plain synchronous request/response.
pub struct WinampClient<C: PlayerConnection> {
    connection: C,
    window: Option<WindowHandle>,
    version: Option<String>,
    playlist_dump_path: PathBuf,
}

impl<C: PlayerConnection> WinampClient<C> {
    /// Create a client over the given transport.
    ///
    /// `playlist_dump_path` is where the player writes its playlist on a
    /// [`QueryCommand::DumpPlaylist`] request, normally
    /// `%APPDATA%/Winamp/winamp.m3u8`.
    pub fn new(connection: C, playlist_dump_path: PathBuf) -> Self {
        Self {
            connection,
            window: None,
            version: None,
            playlist_dump_path,
        }
    }

    /// Locate the player window and fetch its version.
    ///
    /// A connected client always has a resolved version string. Can be called
    /// again to re-acquire the handle after the player restarts.
    ///
    /// # Errors
    /// Returns [`WinampError::NotConnected`] if no player window exists.
    pub fn connect(&mut self) -> Result<(), WinampError> {
        let window = self
            .connection
            .find_player_window()
            .filter(|window| window.is_valid())
            .ok_or(WinampError::NotConnected)?;
        self.window = Some(window);

        let version = self.fetch_version()?;
        debug!(version, "connected to Winamp window");
        self.version = Some(version);
        Ok(())
    }

    fn ensure_connected(&self) -> Result<WindowHandle, WinampError> {
        self.window.ok_or(WinampError::NotConnected)
    }

    /// Send a GUI command, equivalent to pressing a button in the player.
    ///
    /// # Errors
    /// Returns [`WinampError::NotConnected`] without a live connection.
    pub fn send_command(&self, command: GuiCommand) -> Result<isize, WinampError> {
        let window = self.ensure_connected()?;
        Ok(self
            .connection
            .send_message(window, WM_COMMAND, command.code() as usize, 0))
    }

    /// Send a GUI command by raw wire code.
    ///
    /// The command set is closed: codes outside the known table are rejected
    /// instead of being forwarded to the player.
    ///
    /// # Errors
    /// Returns [`WinampError::InvalidArgument`] for unknown codes and
    /// [`WinampError::NotConnected`] without a live connection.
    pub fn send_command_code(&self, code: u32) -> Result<isize, WinampError> {
        let command = GuiCommand::from_code(code)
            .ok_or_else(|| WinampError::InvalidArgument(format!("unknown GUI command {code}")))?;
        self.send_command(command)
    }

    /// Send a data query. The meaning of `data` is query-specific.
    ///
    /// # Errors
    /// Returns [`WinampError::NotConnected`] without a live connection.
    pub fn send_query(&self, query: QueryCommand, data: u32) -> Result<isize, WinampError> {
        let window = self.ensure_connected()?;
        Ok(self
            .connection
            .send_message(window, WM_USER, data as usize, query.code() as isize))
    }

    fn fetch_version(&self) -> Result<String, WinampError> {
        let raw = self.send_query(QueryCommand::Version, 0)?;
        Ok(decode_version(raw))
    }

    /// The player version resolved at connect time.
    ///
    /// # Errors
    /// Returns [`WinampError::NotConnected`] if the client never connected.
    pub fn version(&self) -> Result<&str, WinampError> {
        self.ensure_connected()?;
        self.version.as_deref().ok_or(WinampError::NotConnected)
    }

    /// Current playing status. Unknown raw values normalize to stopped.
    ///
    /// # Errors
    /// Returns [`WinampError::NotConnected`] without a live connection.
    pub fn playing_status(&self) -> Result<PlayingStatus, WinampError> {
        let raw = self.send_query(QueryCommand::PlayingStatus, 0)?;
        Ok(PlayingStatus::from_raw(raw))
    }

    /// Current track length and position, both in milliseconds.
    ///
    /// The player reports the length in whole seconds; it is converted here
    /// so both values share a unit.
    ///
    /// # Errors
    /// Returns [`WinampError::NoTrackSelected`] when the player reports its
    /// "no track" sentinel for the length.
    pub fn track_status(&self) -> Result<(u64, u64), WinampError> {
        let position_ms = self.send_query(QueryCommand::TrackStatus, 0)?;
        let length_secs = self.send_query(QueryCommand::TrackStatus, 1)?;

        if length_secs == NO_TRACK_SELECTED {
            return Err(WinampError::NoTrackSelected);
        }

        Ok((length_secs as u64 * 1000, position_ms.max(0) as u64))
    }

    /// Sample rate, bitrate and channel count of the current track.
    ///
    /// # Errors
    /// Returns [`WinampError::NoTrackSelected`] when all three come back
    /// zero, which is how the player answers with an empty playlist.
    pub fn track_info(&self) -> Result<(u32, u32, u32), WinampError> {
        let sample_rate = self.send_query(QueryCommand::TrackInfo, 0)?;
        let bitrate = self.send_query(QueryCommand::TrackInfo, 1)?;
        let channels = self.send_query(QueryCommand::TrackInfo, 2)?;

        if sample_rate == 0 && bitrate == 0 && channels == 0 {
            return Err(WinampError::NoTrackSelected);
        }

        Ok((sample_rate as u32, bitrate as u32, channels as u32))
    }

    /// Zero-based position of the current track in the playlist, or `None`
    /// when no track is selected.
    ///
    /// # Errors
    /// Returns [`WinampError::NotConnected`] without a live connection.
    pub fn playlist_position(&self) -> Result<Option<u32>, WinampError> {
        let raw = self.send_query(QueryCommand::PlaylistPosition, 0)?;
        if raw == NO_TRACK_SELECTED {
            return Ok(None);
        }
        Ok(Some(raw as u32))
    }

    /// Number of tracks in the current playlist.
    ///
    /// # Errors
    /// Returns [`WinampError::NotConnected`] without a live connection.
    pub fn playlist_length(&self) -> Result<u32, WinampError> {
        let raw = self.send_query(QueryCommand::PlaylistLength, 0)?;
        Ok(raw as u32)
    }

    /// Raw window caption, usually `{n}. {artist} - {track} - Winamp`.
    ///
    /// # Errors
    /// Returns [`WinampError::NotConnected`] without a live connection.
    pub fn title(&self) -> Result<String, WinampError> {
        let window = self.ensure_connected()?;
        Ok(self.connection.window_text(window))
    }

    /// Full read of the currently selected track, or `None` when the
    /// playlist has no selection. A fresh value is built on every call.
    ///
    /// # Errors
    /// Propagates [`WinampError::NoTrackSelected`] from the status and info
    /// queries if the selection disappears mid-read.
    pub fn current_track(&self) -> Result<Option<CurrentTrack>, WinampError> {
        let Some(playlist_index) = self.playlist_position()? else {
            return Ok(None);
        };

        let title = self.title()?;
        let (length_ms, position_ms) = self.track_status()?;
        let (sample_rate, bitrate, channels) = self.track_info()?;

        Ok(Some(CurrentTrack {
            track: Track {
                title,
                sample_rate,
                bitrate,
                channels,
                length_ms,
            },
            position_ms,
            playlist_index,
        }))
    }

    /// Jump to a playlist index. Out-of-range indices select the first or
    /// last track; an empty playlist makes this a no-op.
    ///
    /// # Errors
    /// Returns [`WinampError::NotConnected`] without a live connection.
    pub fn change_track(&self, index: u32) -> Result<isize, WinampError> {
        self.send_query(QueryCommand::ChangeTrack, index)
    }

    /// Seek the current track to a millisecond position.
    ///
    /// # Errors
    /// Returns [`WinampError::NoTrackSelected`] when nothing is selected.
    pub fn seek_track(&self, position_ms: u32) -> Result<isize, WinampError> {
        let ret = self.send_query(QueryCommand::SeekTrack, position_ms)?;
        if ret == NO_TRACK_SELECTED {
            return Err(WinampError::NoTrackSelected);
        }
        Ok(ret)
    }

    /// Set the playback volume.
    ///
    /// # Errors
    /// Returns [`WinampError::InvalidArgument`] when `level` is outside
    /// `0..=255`.
    pub fn set_volume(&self, level: i32) -> Result<isize, WinampError> {
        if !(0..=255).contains(&level) {
            return Err(WinampError::InvalidArgument(format!(
                "volume level must be in range [0, 255], got {level}"
            )));
        }
        self.send_query(QueryCommand::SetVolume, level as u32)
    }

    /// Ask the player to persist its playlist to the dump file and return
    /// the current playlist position.
    ///
    /// # Errors
    /// Returns [`WinampError::NotConnected`] without a live connection.
    pub fn dump_playlist(&self) -> Result<isize, WinampError> {
        self.send_query(QueryCommand::DumpPlaylist, 0)
    }

    /// Read a playlist file and return the track paths it lists.
    ///
    /// # Errors
    /// Returns [`WinampError::Playlist`] if the file cannot be read.
    pub fn get_playlist(&self, path: &Path) -> Result<Vec<String>, WinampError> {
        playlist::read_playlist(path)
    }

    /// Resolve the directory containing the track at `index`.
    ///
    /// Persists the live playlist first, then reads the dump back. With the
    /// usual artist/album/track library layout, the directory's last segment
    /// is the album name.
    ///
    /// # Errors
    /// Returns [`WinampError::NoTrackSelected`] when `index` is out of range
    /// and [`WinampError::Playlist`] when the dump file cannot be read.
    pub fn resolve_track_directory(&self, index: u32) -> Result<PathBuf, WinampError> {
        self.dump_playlist()?;
        let tracks = playlist::read_playlist(&self.playlist_dump_path)?;
        let entry = tracks
            .get(index as usize)
            .ok_or(WinampError::NoTrackSelected)?;
        let directory = Path::new(entry)
            .parent()
            .ok_or(WinampError::NoTrackSelected)?;
        Ok(directory.to_path_buf())
    }
}

/// Format a raw version word the way the player community writes versions.
///
/// The player encodes version 5.x as `0x50yz`. This keeps the original
/// formatting rule: first hex digit is the major, one digit is skipped, the
/// remainder is the minor (`0x5072` becomes `"5.72"`). Known-lossy for some
/// two-digit minor ranges; preserved rather than fixed because the output is
/// display-only.
fn decode_version(raw: isize) -> String {
    let hex = format!("{:x}", raw as u32);
    let mut digits = hex.chars();
    let Some(major) = digits.next() else {
        return hex;
    };
    let _skipped = digits.next();
    let minor: String = digits.collect();
    format!("{major}.{minor}")
}

//! Wire-level protocol definitions for the Winamp window-message API.
//!
//! Commands are addressed to the player window with two message families:
//! `WM_COMMAND` carries fire-and-forget GUI actions (equivalent to pressing a
//! button in the player), `WM_USER` carries data-returning queries. The
//! numeric codes are a fixed wire contract with the live player and must not
//! be renumbered.

/// First slot for menu control messages in the Windows message range.
pub const WM_COMMAND: u32 = 0x0111;

/// First slot for user-defined messages in the Windows message range.
pub const WM_USER: u32 = 0x400;

/// Value the player returns from several queries when the playlist is empty
/// or no track is selected.
pub const NO_TRACK_SELECTED: isize = 0xFFFF_FFFF;

/// Window class name the player registers its main window under.
pub const PLAYER_WINDOW_CLASS: &str = "Winamp v1.x";

/// GUI commands sent as `WM_COMMAND` messages.
///
/// These are identical to pressing menus and buttons in the player GUI. No
/// return data is expected beyond an acknowledgement code (zero on success).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuiCommand {
    /// Toggle track repeating.
    ToggleRepeat,
    /// Toggle track shuffling.
    ToggleShuffle,
    /// Go to previous track.
    PreviousTrack,
    /// Play current track, or start it over if already playing.
    Play,
    /// Toggle pause.
    TogglePause,
    /// Stop the current track and seek its position to zero.
    Stop,
    /// Go to next track.
    NextTrack,
    /// Raise volume by 1%.
    RaiseVolume,
    /// Lower volume by 1%.
    LowerVolume,
    /// Rewind the current track by 5 seconds.
    FastRewind,
    /// Fade out and stop after the track.
    FadeOutAndStop,
    /// Fast forward the current track by 5 seconds.
    FastForward,
    /// Stop after the current track.
    StopAfterTrack,
}

impl GuiCommand {
    /// The wire code for this command.
    pub fn code(self) -> u32 {
        match self {
            Self::ToggleRepeat => 40022,
            Self::ToggleShuffle => 40023,
            Self::PreviousTrack => 40044,
            Self::Play => 40045,
            Self::TogglePause => 40046,
            Self::Stop => 40047,
            Self::NextTrack => 40048,
            Self::RaiseVolume => 40058,
            Self::LowerVolume => 40059,
            Self::FastRewind => 40144,
            Self::FadeOutAndStop => 40147,
            Self::FastForward => 40148,
            Self::StopAfterTrack => 40157,
        }
    }

    /// Look up the command for a raw wire code.
    ///
    /// The command set is closed; unknown codes return `None` and callers
    /// reject them rather than forwarding arbitrary codes to the player.
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            40022 => Some(Self::ToggleRepeat),
            40023 => Some(Self::ToggleShuffle),
            40044 => Some(Self::PreviousTrack),
            40045 => Some(Self::Play),
            40046 => Some(Self::TogglePause),
            40047 => Some(Self::Stop),
            40048 => Some(Self::NextTrack),
            40058 => Some(Self::RaiseVolume),
            40059 => Some(Self::LowerVolume),
            40144 => Some(Self::FastRewind),
            40147 => Some(Self::FadeOutAndStop),
            40148 => Some(Self::FastForward),
            40157 => Some(Self::StopAfterTrack),
            _ => None,
        }
    }
}

/// Data-returning queries sent as `WM_USER` messages.
///
/// The auxiliary `data` word accompanying each query is query-specific; its
/// meaning is documented per variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryCommand {
    /// Player version as a hexadecimal number.
    Version,
    /// Playing status: 1 playing, 3 paused, anything else stopped.
    PlayingStatus,
    /// Track status: position in milliseconds when `data` is 0, total length
    /// in seconds when `data` is 1.
    TrackStatus,
    /// Seek the current track to the millisecond position given in `data`.
    SeekTrack,
    /// Dump the current playlist to the player's playlist file and return the
    /// current playlist position.
    DumpPlaylist,
    /// Set the playlist position to the index given in `data`.
    ChangeTrack,
    /// Set playback volume to the level given in `data` (0 to 255).
    SetVolume,
    /// Number of tracks in the current playlist.
    PlaylistLength,
    /// Current playlist position, zero-based.
    PlaylistPosition,
    /// Technical track info: `data` 0 sample rate, 1 bitrate, 2 channels.
    TrackInfo,
}

impl QueryCommand {
    /// The wire code for this query.
    pub fn code(self) -> u32 {
        match self {
            Self::Version => 0,
            Self::PlayingStatus => 104,
            Self::TrackStatus => 105,
            Self::SeekTrack => 106,
            Self::DumpPlaylist => 120,
            Self::ChangeTrack => 121,
            Self::SetVolume => 122,
            Self::PlaylistLength => 124,
            Self::PlaylistPosition => 125,
            Self::TrackInfo => 126,
        }
    }
}

/// Current playback state of the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayingStatus {
    /// Player is stopped or not running.
    Stopped,

    /// A track is currently playing.
    Playing,

    /// The current track is paused.
    Paused,
}

impl PlayingStatus {
    /// Normalize a raw status word. The player reports 1 for playing and 3
    /// for paused; every other value counts as stopped.
    pub fn from_raw(raw: isize) -> Self {
        match raw {
            1 => Self::Playing,
            3 => Self::Paused,
            _ => Self::Stopped,
        }
    }
}

/// Properties of a track as reported by the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    /// Raw window title, usually `{n}. {artist} - {track} - Winamp`.
    pub title: String,

    /// Sample rate in kHz.
    pub sample_rate: u32,

    /// Bitrate in kbps.
    pub bitrate: u32,

    /// Number of audio channels.
    pub channels: u32,

    /// Track length in milliseconds.
    pub length_ms: u64,
}

/// The currently selected track, with its live playback position.
///
/// Constructed fresh on every full read; never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentTrack {
    /// Static track properties.
    pub track: Track,

    /// Playback position in milliseconds.
    pub position_ms: u64,

    /// Zero-based position in the playlist.
    pub playlist_index: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_normalizes_unknown_values_to_stopped() {
        assert_eq!(PlayingStatus::from_raw(0), PlayingStatus::Stopped);
        assert_eq!(PlayingStatus::from_raw(2), PlayingStatus::Stopped);
        assert_eq!(PlayingStatus::from_raw(-1), PlayingStatus::Stopped);
        assert_eq!(PlayingStatus::from_raw(1), PlayingStatus::Playing);
        assert_eq!(PlayingStatus::from_raw(3), PlayingStatus::Paused);
    }

    #[test]
    fn gui_command_codes_round_trip() {
        for command in [
            GuiCommand::ToggleRepeat,
            GuiCommand::ToggleShuffle,
            GuiCommand::PreviousTrack,
            GuiCommand::Play,
            GuiCommand::TogglePause,
            GuiCommand::Stop,
            GuiCommand::NextTrack,
            GuiCommand::RaiseVolume,
            GuiCommand::LowerVolume,
            GuiCommand::FastRewind,
            GuiCommand::FadeOutAndStop,
            GuiCommand::FastForward,
            GuiCommand::StopAfterTrack,
        ] {
            assert_eq!(GuiCommand::from_code(command.code()), Some(command));
        }
    }

    #[test]
    fn unknown_gui_command_code_is_rejected() {
        assert_eq!(GuiCommand::from_code(1), None);
        assert_eq!(GuiCommand::from_code(40000), None);
    }
}

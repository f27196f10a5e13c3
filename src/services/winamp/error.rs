use std::path::PathBuf;

/// Errors that can occur while talking to the player.
#[derive(thiserror::Error, Debug)]
pub enum WinampError {
    /// No player window is connected. Fatal to any protocol call until a
    /// reconnect succeeds.
    #[error("no Winamp client connected")]
    NotConnected,

    /// The queried state is meaningless because the playlist is empty or the
    /// position is invalid. Recoverable; callers treat it as "nothing to
    /// show".
    #[error("no track selected in Winamp")]
    NoTrackSelected,

    /// Caller passed an out-of-range or unknown value.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The playlist dump file could not be read.
    #[error("failed to read playlist {path:?}: {source}")]
    Playlist {
        /// Path of the playlist file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

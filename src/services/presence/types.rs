/// The structured fields pushed to the remote status display.
///
/// The remote side rejects `details`, `state` and caption strings shorter
/// than 2 characters; producers pad them before building a payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresencePayload {
    /// First display line, the track name.
    pub details: String,

    /// Second display line, `by {artist}`.
    pub state: String,

    /// Epoch seconds at which playback of this track effectively started,
    /// used by the remote side to render an elapsed timer.
    pub start_epoch_seconds: i64,

    /// Asset key for the large image.
    pub large_asset_key: String,

    /// Asset key for the small corner image.
    pub small_asset_key: String,

    /// Hover caption for the large image.
    pub large_caption: String,

    /// Hover caption for the small image.
    pub small_caption: String,
}

/// Mutable state the sync engine carries between poll ticks.
///
/// Invariant: `presence_cleared` is true iff the last observed status was
/// stopped or paused and no update has been pushed since.
#[derive(Debug)]
pub struct EngineState {
    /// Raw window title seen on the last pushed update; empty after a clear.
    pub last_seen_title: String,

    /// Whether the remote presence is currently cleared.
    pub presence_cleared: bool,
}

impl Default for EngineState {
    fn default() -> Self {
        Self {
            last_seen_title: String::new(),
            presence_cleared: true,
        }
    }
}

/// Artist and track name recovered from the player's window title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTitle {
    /// Artist segment; empty when the title had no delimiter to split on.
    pub artist: String,

    /// Track name, padded to the remote side's 2-character minimum.
    pub track_name: String,
}

/// A resolved display asset: key plus hover caption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetResolution {
    /// Symbolic key the remote side maps to an image.
    pub asset_key: String,

    /// Hover caption, padded to the 2-character minimum.
    pub caption: String,
}

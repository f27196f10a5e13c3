/// Presence synchronization engine.
pub mod presence;
/// Winamp window-message protocol client.
pub mod winamp;

pub use presence::{AssetResolver, DiscordIpc, PresenceClient, PresenceError, SyncEngine};
pub use winamp::{PlayerConnection, PlayingStatus, WinampClient, WinampError};

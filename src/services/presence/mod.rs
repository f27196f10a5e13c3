//! Presence synchronization engine.
//!
//! Polls the player client on a fixed interval, detects track changes,
//! parses the window title into artist and track name, resolves a display
//! asset for the current album and keeps the remote "now playing" display in
//! sync, clearing it when playback stops.

mod assets;
mod client;
mod engine;
mod error;
mod title;
mod transport;
mod types;

pub use assets::{AlbumLocator, AssetResolver, DefaultCaption};
pub use client::PresenceClient;
pub use engine::SyncEngine;
pub use error::PresenceError;
pub use title::parse_title;
pub use transport::{DEFAULT_CLIENT_ID, DiscordIpc};
pub use types::{AssetResolution, EngineState, ParsedTitle, PresencePayload};

//! Native player protocol client.
//!
//! Winamp exposes its control API through window messages: GUI commands are
//! `WM_COMMAND` posts, data queries are `WM_USER` posts answered with a
//! numeric reply word. This service owns the connection handle, hides the
//! protocol's numeric quirks (hex-encoded versions, second/millisecond unit
//! mismatches, sentinel "no track" values) and exposes typed accessors.

mod client;
mod connection;
mod error;
#[cfg(windows)]
mod native;
mod playlist;
mod types;

pub use client::WinampClient;
pub use connection::{PlayerConnection, WindowHandle};
pub use error::WinampError;
#[cfg(windows)]
pub use native::Win32Connection;
pub use playlist::read_playlist;
pub use types::{
    CurrentTrack, GuiCommand, NO_TRACK_SELECTED, PLAYER_WINDOW_CLASS, PlayingStatus, QueryCommand,
    Track, WM_COMMAND, WM_USER,
};

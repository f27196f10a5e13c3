//! winamp-presence - Winamp to Discord Rich Presence bridge.
//!
//! Discovers a running Winamp instance, polls its playback state through the
//! player's window-message API and mirrors the current track to Discord Rich
//! Presence. The main pieces:
//!
//! - A typed protocol client over the `WM_COMMAND`/`WM_USER` message families
//! - A polling sync engine with track-change debouncing
//! - Album-art asset resolution through a local cover index
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use winamp_presence::config::{Config, ConfigPaths};
//!
//! // Load the settings file, writing defaults if it does not exist yet.
//! let config = Config::load_or_create(&ConfigPaths::settings_file()?)?;
//! println!("polling every {}s", config.general.poll_interval_secs);
//! # Ok::<(), winamp_presence::Error>(())
//! ```

/// Configuration schema and file handling.
pub mod config;

/// Core error types and result alias.
pub mod core;

/// Player protocol client and presence engine.
pub mod services;

/// Tracing subscriber setup.
pub mod tracing_config;

pub use crate::core::{Error, Result};

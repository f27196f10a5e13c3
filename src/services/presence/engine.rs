//! The polling state machine.
//!
//! Once per tick the engine reads the player's status and decides whether
//! the remote display needs anything: a fresh update on a track change, a
//! clear on entering stopped or paused, or nothing at all. Transient player
//! errors (not yet launched, empty playlist) make the tick a no-op rather
//! than a crash; presence transport errors propagate, there is no supervisor.

use std::time::Duration;

use chrono::Utc;
use tracing::{debug, info};

use crate::services::winamp::{PlayerConnection, PlayingStatus, WinampClient};

use super::assets::AssetResolver;
use super::client::PresenceClient;
use super::error::PresenceError;
use super::title::parse_title;
use super::types::{EngineState, PresencePayload};

/// Positions at or above this many seconds are a known player glitch (values
/// in the millions right as a new track starts) and are clamped to zero.
const IMPLAUSIBLE_POSITION_SECS: i64 = 100_000;

/// Synchronizes the player's playback state to the remote presence display.
pub struct SyncEngine<C: PlayerConnection, P: PresenceClient> {
    client: WinampClient<C>,
    presence: P,
    resolver: AssetResolver,
    state: EngineState,
    small_asset_key: String,
    small_asset_text: String,
}

impl<C: PlayerConnection, P: PresenceClient> SyncEngine<C, P> {
    /// Build an engine over a connected client and presence endpoint.
    ///
    /// The small asset key and caption are fixed for the process lifetime
    /// and attached to every update unchanged.
    pub fn new(
        client: WinampClient<C>,
        presence: P,
        resolver: AssetResolver,
        small_asset_key: String,
        small_asset_text: String,
    ) -> Self {
        Self {
            client,
            presence,
            resolver,
            state: EngineState::default(),
            small_asset_key,
            small_asset_text,
        }
    }

    /// Poll forever at the given interval.
    ///
    /// # Errors
    /// Returns [`PresenceError`] when the presence endpoint fails; player
    /// errors never escape a tick.
    pub async fn run(&mut self, poll_interval: Duration) -> Result<(), PresenceError> {
        let mut ticker = tokio::time::interval(poll_interval);
        loop {
            ticker.tick().await;
            self.tick().await?;
        }
    }

    /// One poll of the state machine.
    ///
    /// # Errors
    /// Returns [`PresenceError`] when the presence endpoint fails.
    pub async fn tick(&mut self) -> Result<(), PresenceError> {
        let status = match self.client.playing_status() {
            Ok(status) => status,
            Err(error) => {
                debug!(%error, "player unavailable, skipping tick");
                return Ok(());
            }
        };

        match status {
            // Clear once on entering stopped-or-paused; later ticks in the
            // same state are no-ops.
            PlayingStatus::Stopped | PlayingStatus::Paused => {
                if !self.state.presence_cleared {
                    self.presence.clear().await?;
                    self.state.last_seen_title.clear();
                    self.state.presence_cleared = true;
                    info!(?status, "playback inactive, presence cleared");
                }
                Ok(())
            }
            PlayingStatus::Playing => self.sync_playing().await,
        }
    }

    async fn sync_playing(&mut self) -> Result<(), PresenceError> {
        let title = match self.client.title() {
            Ok(title) => title,
            Err(error) => {
                debug!(%error, "could not read window title, skipping tick");
                return Ok(());
            }
        };

        // Debounce: the same track keeps the same caption tick after tick.
        if title == self.state.last_seen_title {
            return Ok(());
        }
        self.state.last_seen_title.clone_from(&title);

        let playlist_index = match self.client.playlist_position() {
            Ok(Some(index)) => index,
            Ok(None) => {
                debug!("no track selected, skipping tick");
                return Ok(());
            }
            Err(error) => {
                debug!(%error, "playlist position unavailable, skipping tick");
                return Ok(());
            }
        };

        let position_ms = match self.client.track_status() {
            Ok((_length_ms, position_ms)) => position_ms,
            Err(error) => {
                debug!(%error, "track status unavailable, skipping tick");
                return Ok(());
            }
        };

        let Ok(version) = self.client.version() else {
            return Ok(());
        };

        let parsed = parse_title(&title, playlist_index);

        let mut position_secs = (position_ms / 1000) as i64;
        if position_secs >= IMPLAUSIBLE_POSITION_SECS {
            position_secs = 0;
        }
        let start_epoch_seconds = Utc::now().timestamp() - position_secs;

        let resolution =
            self.resolver
                .resolve(&self.client, playlist_index, &parsed.artist, version);

        let payload = PresencePayload {
            details: parsed.track_name,
            state: format!("by {}", parsed.artist),
            start_epoch_seconds,
            large_asset_key: resolution.asset_key,
            small_asset_key: self.small_asset_key.clone(),
            large_caption: resolution.caption,
            small_caption: self.small_asset_text.clone(),
        };

        info!(
            details = %payload.details,
            state = %payload.state,
            "track changed, presence updated"
        );
        self.presence.update(&payload).await?;
        self.state.presence_cleared = false;
        Ok(())
    }
}

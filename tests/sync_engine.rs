//! End-to-end tick scenarios for the presence sync engine.
//!
//! The player is a scripted in-memory connection the tests mutate between
//! ticks; the presence endpoint records every call it receives.

#![allow(clippy::unwrap_used)]

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use winamp_presence::services::presence::{
    AssetResolver, DefaultCaption, PresenceClient, PresenceError, PresencePayload, SyncEngine,
};
use winamp_presence::services::winamp::{
    NO_TRACK_SELECTED, PlayerConnection, WinampClient, WindowHandle, WM_USER,
};

/// Mutable player state shared between the test and the connection.
#[derive(Debug)]
struct PlayerState {
    present: bool,
    status: isize,
    title: String,
    playlist_position: isize,
    position_ms: isize,
    length_secs: isize,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            present: true,
            status: 0,
            title: String::new(),
            playlist_position: 0,
            position_ms: 0,
            length_secs: 180,
        }
    }
}

#[derive(Clone)]
struct ScriptedConnection(Arc<Mutex<PlayerState>>);

impl PlayerConnection for ScriptedConnection {
    fn find_player_window(&self) -> Option<WindowHandle> {
        if self.0.lock().unwrap().present {
            Some(WindowHandle(42))
        } else {
            None
        }
    }

    fn send_message(
        &self,
        _window: WindowHandle,
        message: u32,
        wparam: usize,
        lparam: isize,
    ) -> isize {
        if message != WM_USER {
            return 0;
        }
        let state = self.0.lock().unwrap();
        match (lparam, wparam) {
            (0, _) => 0x5072, // version
            (104, _) => state.status,
            (105, 0) => state.position_ms,
            (105, 1) => state.length_secs,
            (125, _) => state.playlist_position,
            _ => 0,
        }
    }

    fn window_text(&self, _window: WindowHandle) -> String {
        self.0.lock().unwrap().title.clone()
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Update(PresencePayload),
    Clear,
}

#[derive(Clone, Default)]
struct RecordingPresence(Arc<Mutex<Vec<Call>>>);

#[async_trait]
impl PresenceClient for RecordingPresence {
    async fn update(&mut self, payload: &PresencePayload) -> Result<(), PresenceError> {
        self.0.lock().unwrap().push(Call::Update(payload.clone()));
        Ok(())
    }

    async fn clear(&mut self) -> Result<(), PresenceError> {
        self.0.lock().unwrap().push(Call::Clear);
        Ok(())
    }
}

struct Fixture {
    engine: SyncEngine<ScriptedConnection, RecordingPresence>,
    player: Arc<Mutex<PlayerState>>,
    calls: Arc<Mutex<Vec<Call>>>,
}

fn fixture_with_resolver(resolver: AssetResolver, dump_path: PathBuf) -> Fixture {
    let player = Arc::new(Mutex::new(PlayerState::default()));
    let mut client = WinampClient::new(ScriptedConnection(player.clone()), dump_path);
    client.connect().unwrap();

    let presence = RecordingPresence::default();
    let calls = presence.0.clone();

    let engine = SyncEngine::new(
        client,
        presence,
        resolver,
        "playbutton".to_owned(),
        "Playing".to_owned(),
    );

    Fixture {
        engine,
        player,
        calls,
    }
}

fn fixture() -> Fixture {
    fixture_with_resolver(
        AssetResolver::disabled("logo".to_owned()),
        PathBuf::from("unused.m3u8"),
    )
}

fn set_playing(player: &Arc<Mutex<PlayerState>>, title: &str, index: isize, position_ms: isize) {
    let mut state = player.lock().unwrap();
    state.status = 1;
    state.title = title.to_owned();
    state.playlist_position = index;
    state.position_ms = position_ms;
}

mod scenarios {
    use super::*;

    #[tokio::test]
    async fn update_then_debounce_then_clear() {
        let mut fx = fixture();

        set_playing(&fx.player, "1. A - B", 0, 30_000);
        fx.engine.tick().await.unwrap();
        fx.engine.tick().await.unwrap();
        fx.player.lock().unwrap().status = 3;
        fx.engine.tick().await.unwrap();

        let calls = fx.calls.lock().unwrap();
        assert_eq!(calls.len(), 2, "expected exactly update then clear: {calls:?}");
        let Call::Update(payload) = &calls[0] else {
            panic!("first call should be an update: {calls:?}");
        };
        // "B" is below the remote 2-character minimum and gets padded.
        assert_eq!(payload.details, "Track: B");
        assert_eq!(payload.state, "by A");
        assert_eq!(calls[1], Call::Clear);
    }

    #[tokio::test]
    async fn track_change_pushes_a_second_update() {
        let mut fx = fixture();

        set_playing(&fx.player, "1. Queen - Bohemian Rhapsody - Winamp", 0, 0);
        fx.engine.tick().await.unwrap();
        set_playing(&fx.player, "2. Queen - Somebody to Love - Winamp", 1, 0);
        fx.engine.tick().await.unwrap();

        let calls = fx.calls.lock().unwrap();
        assert_eq!(calls.len(), 2);
        let Call::Update(second) = &calls[1] else {
            panic!("expected an update: {calls:?}");
        };
        assert_eq!(second.details, "Somebody to Love");
        assert_eq!(second.state, "by Queen");
    }

    #[tokio::test]
    async fn paused_after_clear_does_not_clear_again() {
        let mut fx = fixture();

        set_playing(&fx.player, "1. A - Bc", 0, 0);
        fx.engine.tick().await.unwrap();
        fx.player.lock().unwrap().status = 3;
        fx.engine.tick().await.unwrap();
        fx.engine.tick().await.unwrap();
        fx.engine.tick().await.unwrap();

        let calls = fx.calls.lock().unwrap();
        let clears = calls.iter().filter(|call| **call == Call::Clear).count();
        assert_eq!(clears, 1, "paused state must clear exactly once: {calls:?}");
    }

    #[tokio::test]
    async fn stopped_at_startup_stays_silent() {
        let mut fx = fixture();

        fx.engine.tick().await.unwrap();
        fx.engine.tick().await.unwrap();

        assert!(fx.calls.lock().unwrap().is_empty());
    }
}

mod edge_cases {
    use super::*;

    #[tokio::test]
    async fn implausible_positions_are_clamped_to_track_start() {
        let mut fx = fixture();

        // The player sometimes reports positions in the millions of seconds
        // right as a new track starts.
        set_playing(&fx.player, "1. A - Bc", 0, 4_000_000_000);
        let before = chrono::Utc::now().timestamp();
        fx.engine.tick().await.unwrap();
        let after = chrono::Utc::now().timestamp();

        let calls = fx.calls.lock().unwrap();
        let Call::Update(payload) = &calls[0] else {
            panic!("expected an update: {calls:?}");
        };
        assert!(
            payload.start_epoch_seconds >= before && payload.start_epoch_seconds <= after,
            "clamped position should put the start at roughly now"
        );
    }

    #[tokio::test]
    async fn honest_positions_shift_the_start_back() {
        let mut fx = fixture();

        set_playing(&fx.player, "1. A - Bc", 0, 90_000);
        let before = chrono::Utc::now().timestamp();
        fx.engine.tick().await.unwrap();

        let calls = fx.calls.lock().unwrap();
        let Call::Update(payload) = &calls[0] else {
            panic!("expected an update: {calls:?}");
        };
        assert!(payload.start_epoch_seconds <= before - 90 + 1);
    }

    #[tokio::test]
    async fn empty_playlist_is_a_noop_tick() {
        let mut fx = fixture();

        set_playing(&fx.player, "Winamp", NO_TRACK_SELECTED, 0);
        fx.player.lock().unwrap().playlist_position = NO_TRACK_SELECTED;
        fx.engine.tick().await.unwrap();

        assert!(fx.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn disconnected_player_is_a_noop_tick() {
        let player = Arc::new(Mutex::new(PlayerState {
            present: false,
            ..PlayerState::default()
        }));
        let client = WinampClient::new(
            ScriptedConnection(player.clone()),
            PathBuf::from("unused.m3u8"),
        );
        let presence = RecordingPresence::default();
        let calls = presence.0.clone();
        let mut engine = SyncEngine::new(
            client,
            presence,
            AssetResolver::disabled("logo".to_owned()),
            "playbutton".to_owned(),
            "Playing".to_owned(),
        );

        engine.tick().await.unwrap();

        assert!(calls.lock().unwrap().is_empty());
    }
}

mod asset_resolution {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[tokio::test]
    async fn custom_assets_resolve_through_the_playlist_dump() {
        let dir = TempDir::new().unwrap();
        let dump = dir.path().join("winamp.m3u8");
        fs::write(
            &dump,
            "\u{feff}#EXTM3U\n/music/Queen/Greatest Hits/01 Bohemian Rhapsody.flac\n",
        )
        .unwrap();

        let resolver = AssetResolver::new(
            HashMap::from([("Queen - Greatest Hits".to_owned(), "queen_gh".to_owned())]),
            ["Greatest Hits".to_owned()].into_iter().collect(),
            "logo".to_owned(),
            DefaultCaption::WinampVersion,
        );
        let mut fx = fixture_with_resolver(resolver, dump);

        set_playing(&fx.player, "1. Queen - Bohemian Rhapsody - Winamp", 0, 0);
        fx.engine.tick().await.unwrap();

        let calls = fx.calls.lock().unwrap();
        let Call::Update(payload) = &calls[0] else {
            panic!("expected an update: {calls:?}");
        };
        assert_eq!(payload.large_asset_key, "queen_gh");
        assert_eq!(payload.large_caption, "Greatest Hits");
        assert_eq!(payload.small_asset_key, "playbutton");
        assert_eq!(payload.small_caption, "Playing");
    }

    #[tokio::test]
    async fn disabled_assets_use_the_version_caption() {
        let mut fx = fixture();

        set_playing(&fx.player, "1. A - Bc", 0, 0);
        fx.engine.tick().await.unwrap();

        let calls = fx.calls.lock().unwrap();
        let Call::Update(payload) = &calls[0] else {
            panic!("expected an update: {calls:?}");
        };
        assert_eq!(payload.large_asset_key, "logo");
        assert_eq!(payload.large_caption, "Winamp v5.72");
    }
}

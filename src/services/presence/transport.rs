//! Discord IPC transport.
//!
//! Discord listens on a local socket (`$XDG_RUNTIME_DIR/discord-ipc-N` on
//! unix, `\\.\pipe\discord-ipc-N` on Windows) speaking a simple framed
//! protocol: a little-endian opcode and payload length, followed by a JSON
//! body. Opcode 0 carries the handshake, opcode 1 carries commands. Blocking
//! I/O is fine here: frames are tiny and there is exactly one caller, the
//! once-per-second poll loop.

use std::io::{Read, Write};

use serde_json::{Value, json};
use tracing::{debug, warn};

use super::client::PresenceClient;
use super::error::PresenceError;
use super::types::PresencePayload;

/// Application id registered for this bridge, used when the configuration
/// leaves `client_id` at `"default"`.
pub const DEFAULT_CLIENT_ID: &str = "507484022675603456";

const OP_HANDSHAKE: u32 = 0;
const OP_FRAME: u32 = 1;

/// How many `discord-ipc-N` endpoints to probe.
const MAX_IPC_SLOTS: u32 = 10;

#[cfg(unix)]
type IpcStream = std::os::unix::net::UnixStream;
#[cfg(windows)]
type IpcStream = std::fs::File;

/// Connected rich-presence session over the local Discord socket.
pub struct DiscordIpc {
    stream: IpcStream,
    nonce: u64,
}

impl DiscordIpc {
    /// Connect to the first responding IPC slot and perform the handshake.
    ///
    /// A `client_id` of `"default"` selects [`DEFAULT_CLIENT_ID`].
    ///
    /// # Errors
    /// Returns [`PresenceError::Transport`] when no socket accepts the
    /// connection and [`PresenceError::Handshake`] when Discord rejects the
    /// client id.
    pub fn connect(client_id: &str) -> Result<Self, PresenceError> {
        let client_id = if client_id == "default" {
            DEFAULT_CLIENT_ID
        } else {
            client_id
        };

        let stream = open_ipc_stream()?;
        let mut ipc = Self { stream, nonce: 0 };

        let reply = ipc.send(OP_HANDSHAKE, &json!({ "v": 1, "client_id": client_id }))?;
        if reply.get("evt").and_then(Value::as_str) != Some("READY") {
            return Err(PresenceError::Handshake(format!(
                "unexpected handshake reply: {reply}"
            )));
        }

        debug!(client_id, "presence handshake complete");
        Ok(ipc)
    }

    fn send(&mut self, opcode: u32, payload: &Value) -> Result<Value, PresenceError> {
        let body = serde_json::to_vec(payload)?;
        let mut frame = Vec::with_capacity(8 + body.len());
        frame.extend_from_slice(&opcode.to_le_bytes());
        frame.extend_from_slice(&(body.len() as u32).to_le_bytes());
        frame.extend_from_slice(&body);
        self.stream.write_all(&frame)?;
        self.recv()
    }

    fn recv(&mut self) -> Result<Value, PresenceError> {
        let mut header = [0u8; 8];
        self.stream.read_exact(&mut header)?;
        let length = u32::from_le_bytes([header[4], header[5], header[6], header[7]]);
        let mut body = vec![0u8; length as usize];
        self.stream.read_exact(&mut body)?;
        Ok(serde_json::from_slice(&body)?)
    }

    fn set_activity(&mut self, activity: Value) -> Result<(), PresenceError> {
        self.nonce += 1;
        let reply = self.send(
            OP_FRAME,
            &json!({
                "cmd": "SET_ACTIVITY",
                "args": {
                    "pid": std::process::id(),
                    "activity": activity,
                },
                "nonce": self.nonce.to_string(),
            }),
        )?;

        if reply.get("evt").and_then(Value::as_str) == Some("ERROR") {
            warn!(%reply, "presence endpoint rejected the activity");
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl PresenceClient for DiscordIpc {
    async fn update(&mut self, payload: &PresencePayload) -> Result<(), PresenceError> {
        self.set_activity(json!({
            "details": payload.details,
            "state": payload.state,
            "timestamps": { "start": payload.start_epoch_seconds },
            "assets": {
                "large_image": payload.large_asset_key,
                "large_text": payload.large_caption,
                "small_image": payload.small_asset_key,
                "small_text": payload.small_caption,
            },
        }))
    }

    async fn clear(&mut self) -> Result<(), PresenceError> {
        self.set_activity(Value::Null)
    }
}

#[cfg(unix)]
fn open_ipc_stream() -> Result<IpcStream, PresenceError> {
    use std::env;

    let base = env::var("XDG_RUNTIME_DIR")
        .or_else(|_| env::var("TMPDIR"))
        .unwrap_or_else(|_| "/tmp".to_owned());

    for slot in 0..MAX_IPC_SLOTS {
        let path = format!("{base}/discord-ipc-{slot}");
        if let Ok(stream) = IpcStream::connect(&path) {
            debug!(path, "connected to presence socket");
            return Ok(stream);
        }
    }

    Err(no_socket_error())
}

#[cfg(windows)]
fn open_ipc_stream() -> Result<IpcStream, PresenceError> {
    for slot in 0..MAX_IPC_SLOTS {
        let path = format!(r"\\.\pipe\discord-ipc-{slot}");
        if let Ok(stream) = std::fs::OpenOptions::new().read(true).write(true).open(&path) {
            debug!(path, "connected to presence pipe");
            return Ok(stream);
        }
    }

    Err(no_socket_error())
}

fn no_socket_error() -> PresenceError {
    PresenceError::Transport(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        "no discord-ipc endpoint is listening; is Discord running?",
    ))
}

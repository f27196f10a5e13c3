/// Errors that can occur while talking to the presence endpoint.
#[derive(thiserror::Error, Debug)]
pub enum PresenceError {
    /// Socket-level failure on the local IPC connection.
    #[error("presence transport failed: {0}")]
    Transport(#[from] std::io::Error),

    /// The endpoint rejected or garbled the handshake.
    #[error("presence handshake failed: {0}")]
    Handshake(String),

    /// A payload could not be encoded or a reply could not be decoded.
    #[error("presence payload error: {0}")]
    Payload(#[from] serde_json::Error),
}

use async_trait::async_trait;

use super::error::PresenceError;
use super::types::PresencePayload;

/// Remote status-display endpoint.
///
/// The engine only needs two operations: push the assembled payload, or
/// clear whatever is currently shown. The production implementation is the
/// local Discord IPC socket in [`super::transport`]; tests record calls.
#[async_trait]
pub trait PresenceClient {
    /// Replace the displayed activity with `payload`.
    ///
    /// # Errors
    /// Returns [`PresenceError`] if the endpoint cannot be reached or
    /// rejects the payload.
    async fn update(&mut self, payload: &PresencePayload) -> Result<(), PresenceError>;

    /// Clear the displayed activity.
    ///
    /// # Errors
    /// Returns [`PresenceError`] if the endpoint cannot be reached.
    async fn clear(&mut self) -> Result<(), PresenceError>;
}

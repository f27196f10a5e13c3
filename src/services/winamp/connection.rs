//! The window-discovery and messaging seam.
//!
//! Everything the client needs from the OS is behind [`PlayerConnection`]:
//! locating the player window by class name, synchronous request/response
//! message delivery, and reading the window caption. The production backend
//! lives in [`super::native`]; tests script their own implementations.

/// Opaque OS-level reference used to address the player window.
///
/// Zero is the invalid sentinel the OS returns when no window matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowHandle(pub isize);

impl WindowHandle {
    /// Whether this handle refers to an actual window.
    pub fn is_valid(self) -> bool {
        self.0 != 0
    }
}

/// Transport for addressing the player process through its window.
///
/// All calls are synchronous request/response against a single handle; the
/// client is the only caller by design, so no synchronization is needed.
pub trait PlayerConnection {
    /// Locate the player's main window by its fixed class name.
    fn find_player_window(&self) -> Option<WindowHandle>;

    /// Deliver a message to the window and return the player's reply word.
    fn send_message(&self, window: WindowHandle, message: u32, wparam: usize, lparam: isize)
    -> isize;

    /// Read the window caption text.
    fn window_text(&self, window: WindowHandle) -> String;
}

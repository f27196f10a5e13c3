//! Win32 backend for [`PlayerConnection`].
//!
//! Only compiled on Windows; the rest of the crate talks to the trait.

#![allow(unsafe_code)]

use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, WPARAM};
use windows::Win32::UI::WindowsAndMessaging::{FindWindowW, GetWindowTextW, SendMessageW};
use windows::core::{HSTRING, PCWSTR};

use super::connection::{PlayerConnection, WindowHandle};
use super::types::PLAYER_WINDOW_CLASS;

/// Window caption length limit, including the terminating NUL.
const MAX_TITLE_LEN: usize = 512;

/// Live Win32 message transport.
#[derive(Debug, Default)]
pub struct Win32Connection;

impl Win32Connection {
    /// Create a transport. Stateless; the handle is owned by the client.
    pub fn new() -> Self {
        Self
    }
}

impl PlayerConnection for Win32Connection {
    fn find_player_window(&self) -> Option<WindowHandle> {
        let class = HSTRING::from(PLAYER_WINDOW_CLASS);
        let hwnd = unsafe { FindWindowW(&class, PCWSTR::null()) }.ok()?;
        if hwnd.is_invalid() {
            return None;
        }
        Some(WindowHandle(hwnd.0 as isize))
    }

    fn send_message(
        &self,
        window: WindowHandle,
        message: u32,
        wparam: usize,
        lparam: isize,
    ) -> isize {
        let hwnd = HWND(window.0 as *mut std::ffi::c_void);
        let result: LRESULT =
            unsafe { SendMessageW(hwnd, message, Some(WPARAM(wparam)), Some(LPARAM(lparam))) };
        result.0
    }

    fn window_text(&self, window: WindowHandle) -> String {
        let hwnd = HWND(window.0 as *mut std::ffi::c_void);
        let mut buffer = [0u16; MAX_TITLE_LEN];
        let len = unsafe { GetWindowTextW(hwnd, &mut buffer) };
        if len <= 0 {
            return String::new();
        }
        String::from_utf16_lossy(&buffer[..len as usize])
    }
}

//! Inter-window messaging. The notes window and the file-editor window
//! never share mutable state; they talk through fire-and-forget
//! notifications carried by a `WindowBus`.

use std::path::PathBuf;

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::warn;

use crate::file_tabs::{FileTabs, WindowClose};
use crate::services::{DialogService, FileIo};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowMessage {
    /// Ask the editor window to open this path (menu or drag-and-drop).
    OpenInEditor(PathBuf),
    /// The shell wants the editor window gone; the close protocol runs first.
    CloseRequested,
    /// Every modified tab was handled; the window may be destroyed.
    CloseConfirmed,
    /// The user cancelled; the window stays, tabs untouched.
    CloseCancelled,
    /// The editor's title changed (active tab or modified marker).
    TitleChanged(String),
}

/// Sending half of a window's notification channel.
#[derive(Clone)]
pub struct WindowBus {
    tx: mpsc::UnboundedSender<WindowMessage>,
}

impl WindowBus {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<WindowMessage>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Fire and forget. A gone receiver means the peer window is already
    /// destroyed; that is not the sender's problem.
    pub fn send(&self, message: WindowMessage) {
        if self.tx.send(message).is_err() {
            warn!("window message dropped, peer window is gone");
        }
    }
}

/// Answer a close request from the shell: run the unsaved-changes protocol
/// over the open tabs and report the verdict back on the bus. A failed save
/// also keeps the window open, with the error propagated for the shell to
/// surface.
pub fn run_close_request<D: DialogService, F: FileIo>(
    tabs: &mut FileTabs<D, F>,
    bus: &WindowBus,
) -> Result<WindowClose> {
    let verdict = match tabs.close_all_for_window() {
        Ok(verdict) => verdict,
        Err(e) => {
            bus.send(WindowMessage::CloseCancelled);
            return Err(e);
        }
    };

    bus.send(match verdict {
        WindowClose::Confirmed => WindowMessage::CloseConfirmed,
        WindowClose::Aborted => WindowMessage::CloseCancelled,
    });
    Ok(verdict)
}

/// Push the current window title to the shell.
pub fn notify_title<D: DialogService, F: FileIo>(tabs: &FileTabs<D, F>, bus: &WindowBus) {
    bus.send(WindowMessage::TitleChanged(tabs.window_title()));
}

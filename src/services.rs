//! Collaborator contracts the core consumes, abstracted from the UI and the
//! platform. Dialogs block until the user answers; there are no timeouts.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// The user's answer to the unsaved-changes prompt. Cancel is a first-class
/// outcome, not an error: it aborts the close in progress and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseConfirm {
    Save,
    Discard,
    Cancel,
}

/// Native dialogs, supplied by the window shell. `None` from either picker
/// means the user dismissed it.
pub trait DialogService {
    fn pick_open_path(&self) -> Option<PathBuf>;
    fn pick_save_path(&self, suggested_name: &str) -> Option<PathBuf>;
    fn confirm_close(&self, file_name: &str) -> CloseConfirm;
}

/// Plain text file access for the editor window.
pub trait FileIo {
    fn read_text(&self, path: &Path) -> Result<String>;
    fn write_text(&self, path: &Path, content: &str) -> Result<()>;
}

impl<T: DialogService + ?Sized> DialogService for &T {
    fn pick_open_path(&self) -> Option<PathBuf> {
        (**self).pick_open_path()
    }

    fn pick_save_path(&self, suggested_name: &str) -> Option<PathBuf> {
        (**self).pick_save_path(suggested_name)
    }

    fn confirm_close(&self, file_name: &str) -> CloseConfirm {
        (**self).confirm_close(file_name)
    }
}

impl<T: FileIo + ?Sized> FileIo for &T {
    fn read_text(&self, path: &Path) -> Result<String> {
        (**self).read_text(path)
    }

    fn write_text(&self, path: &Path, content: &str) -> Result<()> {
        (**self).write_text(path, content)
    }
}

/// Real filesystem access.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeFileIo;

impl FileIo for NativeFileIo {
    fn read_text(&self, path: &Path) -> Result<String> {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))
    }

    fn write_text(&self, path: &Path, content: &str) -> Result<()> {
        std::fs::write(path, content)
            .with_context(|| format!("failed to write {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn native_file_io_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hello.txt");

        NativeFileIo.write_text(&path, "hi there").unwrap();
        assert_eq!(NativeFileIo.read_text(&path).unwrap(), "hi there");
    }

    #[test]
    fn native_file_io_surfaces_read_failures() {
        let dir = TempDir::new().unwrap();
        assert!(NativeFileIo.read_text(&dir.path().join("missing.txt")).is_err());
    }
}

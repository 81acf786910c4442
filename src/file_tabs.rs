//! Tab state for the file-editor window, including the unsaved-changes
//! close protocol. Each tab moves Clean -> Modified -> Clean as its buffer
//! diverges from and returns to the last saved content; closing a modified
//! tab walks the save/discard/cancel confirmation.

use std::path::Path;

use anyhow::Result;
use tracing::{debug, info};

use crate::models::{FileInfo, FileTab};
use crate::services::{CloseConfirm, DialogService, FileIo};

/// Outcome of a save attempt. Cancelled covers a dismissed save picker and
/// an unknown tab id; write failures are errors, not outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    Cancelled,
}

/// Outcome of closing one tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseOutcome {
    Closed,
    Cancelled,
}

/// Outcome of the window-close walk: either every modified tab was dealt
/// with and the window may close, or the user cancelled and it stays open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowClose {
    Confirmed,
    Aborted,
}

pub struct FileTabs<D: DialogService, F: FileIo> {
    dialogs: D,
    fs: F,
    tabs: Vec<FileTab>,
    active_tab_id: Option<String>,
}

impl<D: DialogService, F: FileIo> FileTabs<D, F> {
    pub fn new(dialogs: D, fs: F) -> Self {
        Self {
            dialogs,
            fs,
            tabs: Vec::new(),
            active_tab_id: None,
        }
    }

    pub fn tabs(&self) -> &[FileTab] {
        &self.tabs
    }

    pub fn active_tab(&self) -> Option<&FileTab> {
        let active_id = self.active_tab_id.as_deref()?;
        self.tabs.iter().find(|tab| tab.id == active_id)
    }

    pub fn set_active(&mut self, tab_id: &str) {
        if self.tabs.iter().any(|tab| tab.id == tab_id) {
            self.active_tab_id = Some(tab_id.to_string());
        }
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.tabs.iter().any(|tab| tab.is_modified)
    }

    /// Open a file from disk. Opening an already-open path is not an error:
    /// the existing tab is focused instead. Returns the tab id.
    pub fn open_file(&mut self, path: &Path) -> Result<String> {
        if let Some(existing) = self
            .tabs
            .iter()
            .find(|tab| tab.file_path.as_deref() == Some(path))
        {
            let id = existing.id.clone();
            self.active_tab_id = Some(id.clone());
            return Ok(id);
        }

        let content = self.fs.read_text(path)?;
        let tab = FileTab::opened(FileInfo {
            file_path: path.to_path_buf(),
            file_name: display_name(path),
            content,
        });
        let id = tab.id.clone();
        debug!(file = %tab.file_name, "opened file tab");
        self.tabs.push(tab);
        self.active_tab_id = Some(id.clone());
        Ok(id)
    }

    /// Open through the file picker. A dismissed picker is a clean no-op.
    pub fn open_via_picker(&mut self) -> Result<Option<String>> {
        match self.dialogs.pick_open_path() {
            Some(path) => self.open_file(&path).map(Some),
            None => Ok(None),
        }
    }

    /// Create an empty unsaved buffer named `Untitled-<n>`, where n is one
    /// past the highest number among currently open untitled tabs.
    pub fn new_file(&mut self) -> &FileTab {
        let max = self
            .tabs
            .iter()
            .filter_map(|tab| tab.file_name.strip_prefix("Untitled-"))
            .filter_map(|n| n.parse::<u32>().ok())
            .max()
            .unwrap_or(0);

        let tab = FileTab::untitled(format!("Untitled-{}", max + 1));
        self.active_tab_id = Some(tab.id.clone());
        self.tabs.push(tab);
        self.tabs.last().expect("tab just pushed")
    }

    /// Replace a tab's buffer. Modified state is recomputed from the buffer
    /// itself, so editing back to the saved content returns the tab to
    /// clean. Unknown ids are ignored.
    pub fn edit(&mut self, tab_id: &str, content: String) {
        if let Some(tab) = self.tabs.iter_mut().find(|tab| tab.id == tab_id) {
            tab.is_modified = content != tab.original_content;
            tab.content = content;
        }
    }

    /// Save a tab, prompting for a destination first if it has never been
    /// saved. A dismissed picker cancels; a write failure propagates and
    /// leaves the tab untouched.
    pub fn save(&mut self, tab_id: &str) -> Result<SaveOutcome> {
        self.save_with_picker(tab_id, false)
    }

    /// Save under a new path, always prompting.
    pub fn save_as(&mut self, tab_id: &str) -> Result<SaveOutcome> {
        self.save_with_picker(tab_id, true)
    }

    fn save_with_picker(&mut self, tab_id: &str, always_prompt: bool) -> Result<SaveOutcome> {
        let Some(index) = self.tabs.iter().position(|tab| tab.id == tab_id) else {
            return Ok(SaveOutcome::Cancelled);
        };

        let path = match (&self.tabs[index].file_path, always_prompt) {
            (Some(path), false) => path.clone(),
            _ => match self.dialogs.pick_save_path(&self.tabs[index].file_name) {
                Some(path) => path,
                None => return Ok(SaveOutcome::Cancelled),
            },
        };

        self.fs.write_text(&path, &self.tabs[index].content)?;

        let tab = &mut self.tabs[index];
        tab.file_name = display_name(&path);
        tab.file_path = Some(path);
        tab.original_content = tab.content.clone();
        tab.is_modified = false;
        info!(file = %tab.file_name, "saved file");
        Ok(SaveOutcome::Saved)
    }

    /// Close one tab. A modified tab asks save/discard/cancel first; cancel
    /// (including a cancelled save picker) aborts and the tab stays. When
    /// the active tab closes, the most-recently-remaining tab takes over.
    pub fn close_tab(&mut self, tab_id: &str) -> Result<CloseOutcome> {
        let Some(index) = self.tabs.iter().position(|tab| tab.id == tab_id) else {
            return Ok(CloseOutcome::Closed);
        };

        if self.tabs[index].is_modified {
            let file_name = self.tabs[index].file_name.clone();
            match self.dialogs.confirm_close(&file_name) {
                CloseConfirm::Cancel => return Ok(CloseOutcome::Cancelled),
                CloseConfirm::Save => {
                    if self.save(tab_id)? == SaveOutcome::Cancelled {
                        return Ok(CloseOutcome::Cancelled);
                    }
                }
                CloseConfirm::Discard => {}
            }
        }

        let index = self
            .tabs
            .iter()
            .position(|tab| tab.id == tab_id)
            .expect("tab survives its own confirmation");
        let removed = self.tabs.remove(index);
        if self.active_tab_id.as_deref() == Some(removed.id.as_str()) {
            self.active_tab_id = self.tabs.last().map(|tab| tab.id.clone());
        }
        Ok(CloseOutcome::Closed)
    }

    /// The window-close walk: every modified tab is asked about once, in tab
    /// order, and the first cancel aborts the whole sequence with all tabs
    /// intact. No partial close: only after every tab is handled may the
    /// window go away. Tabs saved along the way stay clean even if a later
    /// tab cancels, since their content already reached disk.
    pub fn close_all_for_window(&mut self) -> Result<WindowClose> {
        let ids: Vec<String> = self.tabs.iter().map(|tab| tab.id.clone()).collect();

        for tab_id in ids {
            let file_name = match self.tabs.iter().find(|tab| tab.id == tab_id) {
                Some(tab) if tab.is_modified => tab.file_name.clone(),
                _ => continue,
            };

            match self.dialogs.confirm_close(&file_name) {
                CloseConfirm::Cancel => {
                    info!("window close cancelled by user");
                    return Ok(WindowClose::Aborted);
                }
                CloseConfirm::Save => {
                    if self.save(&tab_id)? == SaveOutcome::Cancelled {
                        info!("window close cancelled at save picker");
                        return Ok(WindowClose::Aborted);
                    }
                }
                CloseConfirm::Discard => {}
            }
        }

        Ok(WindowClose::Confirmed)
    }

    /// Window title reflecting the active tab and its modified marker.
    pub fn window_title(&self) -> String {
        match self.active_tab() {
            Some(tab) => {
                let mark = if tab.is_modified { " *" } else { "" };
                format!("{}{} - File Editor - Leavepad", tab.file_name, mark)
            }
            None => "File Editor - Leavepad".to_string(),
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

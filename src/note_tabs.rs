//! Tab state for the notes window: the ordered list of open note tabs and
//! which one is active. Purely in-memory; notes themselves live in the
//! repository.

use crate::models::{Note, NoteTab};

#[derive(Debug, Default)]
pub struct NoteTabs {
    tabs: Vec<NoteTab>,
    active_tab_id: Option<String>,
}

impl NoteTabs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tabs(&self) -> &[NoteTab] {
        &self.tabs
    }

    pub fn active_tab_id(&self) -> Option<&str> {
        self.active_tab_id.as_deref()
    }

    /// Focus the existing tab for this note, or append a new one. Never
    /// creates duplicate tabs for the same note.
    pub fn open_or_focus(&mut self, note: &Note) {
        if !self.tabs.iter().any(|tab| tab.id == note.id) {
            self.tabs.push(NoteTab {
                id: note.id.clone(),
                name: note.name.clone(),
            });
        }
        self.active_tab_id = Some(note.id.clone());
    }

    /// The tab the editor should show: the active one, falling back to the
    /// most-recently-added tab when nothing is active but tabs exist.
    pub fn selected_tab(&self) -> Option<&NoteTab> {
        if let Some(active_id) = &self.active_tab_id {
            if let Some(tab) = self.tabs.iter().find(|tab| &tab.id == active_id) {
                return Some(tab);
            }
        }
        self.tabs.last()
    }

    pub fn set_active(&mut self, tab_id: &str) {
        if self.tabs.iter().any(|tab| tab.id == tab_id) {
            self.active_tab_id = Some(tab_id.to_string());
        }
    }

    /// Remove one tab. If it was the active one, the selection clears and
    /// the caller decides what to show next.
    pub fn close(&mut self, tab_id: &str) {
        self.tabs.retain(|tab| tab.id != tab_id);
        if self.active_tab_id.as_deref() == Some(tab_id) {
            self.active_tab_id = None;
        }
    }

    /// Keep only the given tab.
    pub fn close_others(&mut self, keep_id: &str) {
        self.tabs.retain(|tab| tab.id == keep_id);
        if self.active_tab_id.as_deref() != Some(keep_id) {
            self.active_tab_id = None;
        }
    }

    /// Keep tabs at or before the position of `tab_id`, drop everything
    /// after it. Unknown ids leave the list untouched.
    pub fn close_to_the_right(&mut self, tab_id: &str) {
        if let Some(index) = self.tabs.iter().position(|tab| tab.id == tab_id) {
            self.tabs.truncate(index + 1);
            if let Some(active_id) = &self.active_tab_id {
                if !self.tabs.iter().any(|tab| &tab.id == active_id) {
                    self.active_tab_id = None;
                }
            }
        }
    }

    pub fn close_all(&mut self) {
        self.tabs.clear();
        self.active_tab_id = None;
    }

    /// Rename propagation: a note rename must reach any open tab for it.
    pub fn sync_note_name(&mut self, note_id: &str, name: &str) {
        for tab in &mut self.tabs {
            if tab.id == note_id {
                tab.name = name.to_string();
            }
        }
    }
}

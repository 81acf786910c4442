//! Core state and persistence for Leavepad, an offline note-taking app with
//! an auxiliary plain-text file editor.
//!
//! The crate is the headless half of a two-window desktop app: the note
//! repository and settings live behind JSON stores on disk, tab state for
//! both windows is managed in memory, and the unsaved-changes close protocol
//! decides whether a window may actually go away. Everything the platform
//! shell owns (windows, menus, native dialogs, the editor widget) is reached
//! through the traits in [`services`] and the notifications in [`windows`].

use anyhow::Result;

pub mod file_tabs;
pub mod language;
pub mod models;
pub mod note_tabs;
pub mod notes;
pub mod services;
pub mod settings;
pub mod store;
pub mod windows;

pub use file_tabs::{CloseOutcome, FileTabs, SaveOutcome, WindowClose};
pub use models::{AppState, FileTab, Note, NoteEditorSettings, NoteTab};
pub use note_tabs::NoteTabs;
pub use notes::NoteRepository;
pub use services::{CloseConfirm, DialogService, FileIo, NativeFileIo};
pub use settings::SettingsRepository;
pub use store::{JsonStore, StorePaths};
pub use windows::{WindowBus, WindowMessage};

/// The persistent half of the app: one repository per store, explicitly
/// constructed and passed by reference to whoever needs it. One instance per
/// process; no hidden globals.
pub struct Repositories {
    pub notes: NoteRepository,
    pub settings: SettingsRepository,
}

/// Open all three stores and wrap them in their repositories.
pub fn open_repositories(paths: StorePaths) -> Result<Repositories> {
    Ok(Repositories {
        notes: NoteRepository::new(JsonStore::open(paths.notes, Vec::new())?),
        settings: SettingsRepository::new(
            JsonStore::open(paths.settings, NoteEditorSettings::default())?,
            JsonStore::open(paths.app_state, AppState::default())?,
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    }

    #[tokio::test]
    async fn repositories_share_a_data_dir_and_reload_from_it() {
        init_tracing();
        let dir = TempDir::new().unwrap();

        {
            let repos = open_repositories(StorePaths::in_dir(dir.path())).unwrap();
            repos.notes.create().await.unwrap();

            let mut settings = repos.settings.get_settings();
            settings.language = "japanese".to_string();
            repos.settings.update_settings(settings).await.unwrap();
        }

        let repos = open_repositories(StorePaths::in_dir(dir.path())).unwrap();
        assert_eq!(repos.notes.list().len(), 1);
        assert_eq!(repos.settings.get_settings().language, "japanese");
    }

    #[tokio::test]
    async fn note_rename_flows_into_open_tabs() {
        let dir = TempDir::new().unwrap();
        let repos = open_repositories(StorePaths::in_dir(dir.path())).unwrap();
        let mut tabs = NoteTabs::new();

        let mut note = repos.notes.create().await.unwrap();
        tabs.open_or_focus(&note);

        note.name = "renamed".to_string();
        note.updated_at = chrono::Utc::now().timestamp_millis();
        let updated = repos.notes.update(note).await.unwrap().unwrap();
        tabs.sync_note_name(&updated.id, &updated.name);

        assert_eq!(tabs.tabs()[0].name, "renamed");
    }
}

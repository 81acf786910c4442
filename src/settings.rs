//! Settings and app-state repository: two singleton records with plain
//! get/replace semantics. Callers always supply a full replacement value;
//! there is no merge logic here.

use anyhow::Result;
use tracing::debug;

use crate::models::{AppState, NoteEditorSettings};
use crate::store::JsonStore;

pub struct SettingsRepository {
    settings: JsonStore<NoteEditorSettings>,
    app_state: JsonStore<AppState>,
}

impl SettingsRepository {
    pub fn new(settings: JsonStore<NoteEditorSettings>, app_state: JsonStore<AppState>) -> Self {
        Self {
            settings,
            app_state,
        }
    }

    pub fn get_settings(&self) -> NoteEditorSettings {
        self.settings.data()
    }

    pub async fn update_settings(&self, value: NoteEditorSettings) -> Result<()> {
        debug!("replacing editor settings");
        self.settings.update(|settings| *settings = value).await
    }

    pub fn get_app_state(&self) -> AppState {
        self.app_state.data()
    }

    /// Written on every window move/resize, so geometry survives restarts.
    pub async fn update_app_state(&self, value: AppState) -> Result<()> {
        self.app_state.update(|state| *state = value).await
    }
}

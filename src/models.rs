use std::path::PathBuf;

use serde::{Deserialize, Serialize};

// A user-authored text document, persisted until deleted.
// Ids are uuidv7 strings: opaque, unique, sortable by creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub name: String,
    pub body: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Note {
    pub fn new(name: String) -> Self {
        let now = chrono::Utc::now().timestamp_millis();
        Self {
            id: uuid::Uuid::now_v7().to_string(),
            name,
            body: String::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

// Lightweight projection of an open note; `id` is the owning note's id.
// A tab left dangling by a deleted note is tolerated by the tab manager.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteTab {
    pub id: String,
    pub name: String,
}

// One open file in the editor window.
#[derive(Debug, Clone, PartialEq)]
pub struct FileTab {
    pub id: String,
    /// `None` until the tab has been saved somewhere.
    pub file_path: Option<PathBuf>,
    pub file_name: String,
    pub content: String,
    /// Content at the last successful open/save.
    pub original_content: String,
    pub is_modified: bool,
}

impl FileTab {
    /// Tab for a file read from disk, in the clean state.
    pub fn opened(info: FileInfo) -> Self {
        Self {
            id: uuid::Uuid::now_v7().to_string(),
            file_path: Some(info.file_path),
            file_name: info.file_name,
            original_content: info.content.clone(),
            content: info.content,
            is_modified: false,
        }
    }

    /// Tab for a brand-new unsaved buffer.
    pub fn untitled(file_name: String) -> Self {
        Self {
            id: uuid::Uuid::now_v7().to_string(),
            file_path: None,
            file_name,
            content: String::new(),
            original_content: String::new(),
            is_modified: false,
        }
    }
}

// Payload produced when a file is opened from disk.
#[derive(Debug, Clone, PartialEq)]
pub struct FileInfo {
    pub file_path: PathBuf,
    pub file_name: String,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    Light,
    Dark,
}

// Which note field the sidebar sorts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    CreatedAt,
    UpdatedAt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinimapOptions {
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaddingOptions {
    pub top: u32,
    pub bottom: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StickyScrollOptions {
    pub enabled: bool,
}

// Embedded editor widget configuration, stored as written by the settings
// dialog. Field names match the widget's option names on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EditorOptions {
    pub automatic_layout: bool,
    pub language: String,
    pub insert_spaces: bool,
    pub minimap: MinimapOptions,
    pub padding: PaddingOptions,
    pub quick_suggestions: bool,
    pub render_whitespace: String,
    pub sticky_scroll: StickyScrollOptions,
    pub tab_size: u32,
    pub use_tab_stops: bool,
    pub word_wrap: String,
    pub font_family: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            automatic_layout: true,
            language: "plaintext".to_string(),
            insert_spaces: true,
            minimap: MinimapOptions { enabled: false },
            padding: PaddingOptions { top: 5, bottom: 5 },
            quick_suggestions: false,
            render_whitespace: "all".to_string(),
            sticky_scroll: StickyScrollOptions { enabled: false },
            tab_size: 2,
            use_tab_stops: false,
            word_wrap: "off".to_string(),
            font_family: "Consolas, Menlo, Monaco, 'Courier New', 'Droid Sans Mono', \
                          'monospace', monospace, 'Noto Sans JP', 'Noto Color Emoji'"
                .to_string(),
            font_size: None,
        }
    }
}

// Singleton editor preferences, shared by all windows and replaced whole on
// every settings-dialog save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NoteEditorSettings {
    pub language: String,
    pub theme_name: ThemeName,
    pub sort_by: SortKey,
    pub sort_order: SortOrder,
    pub editor_options: EditorOptions,
}

impl Default for NoteEditorSettings {
    fn default() -> Self {
        Self {
            language: "english".to_string(),
            theme_name: ThemeName::Light,
            sort_by: SortKey::CreatedAt,
            sort_order: SortOrder::Desc,
            editor_options: EditorOptions::default(),
        }
    }
}

// Singleton window geometry + sidebar visibility, updated as a side effect
// of move/resize events so the layout survives restarts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppState {
    pub width: u32,
    pub height: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<i32>,
    pub sidebar_visible: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            width: 900,
            height: 670,
            x: None,
            y: None,
            sidebar_visible: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_notes_get_unique_ids_and_matching_timestamps() {
        let a = Note::new("a".to_string());
        let b = Note::new("b".to_string());
        assert_ne!(a.id, b.id);
        assert_eq!(a.created_at, a.updated_at);
        assert!(b.created_at >= a.created_at);
    }

    #[test]
    fn settings_round_trip_uses_camel_case() {
        let settings = NoteEditorSettings::default();
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("\"themeName\":\"light\""));
        assert!(json.contains("\"sortBy\":\"createdAt\""));
        assert!(json.contains("\"sortOrder\":\"desc\""));
        assert!(json.contains("\"tabSize\":2"));

        let back: NoteEditorSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }

    #[test]
    fn settings_tolerate_missing_fields() {
        let back: NoteEditorSettings = serde_json::from_str("{\"themeName\":\"dark\"}").unwrap();
        assert_eq!(back.theme_name, ThemeName::Dark);
        assert_eq!(back.sort_by, SortKey::CreatedAt);
    }

    #[test]
    fn app_state_defaults() {
        let state = AppState::default();
        assert_eq!((state.width, state.height), (900, 670));
        assert!(state.sidebar_visible);
        assert!(state.x.is_none());
    }
}

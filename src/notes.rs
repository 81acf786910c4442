//! Note repository: CRUD over the notes store, plus the sort/filter helpers
//! the note list applies on top (sort order is a presentation concern, so the
//! repository itself always returns notes unsorted).

use anyhow::Result;
use regex::Regex;
use tracing::{debug, info};

use crate::models::{Note, SortKey, SortOrder};
use crate::store::JsonStore;

pub struct NoteRepository {
    store: JsonStore<Vec<Note>>,
}

impl NoteRepository {
    pub fn new(store: JsonStore<Vec<Note>>) -> Self {
        Self { store }
    }

    /// All notes, unsorted.
    pub fn list(&self) -> Vec<Note> {
        self.store.data()
    }

    /// Linear scan by id.
    pub fn get(&self, note_id: &str) -> Option<Note> {
        self.store.data().into_iter().find(|note| note.id == note_id)
    }

    /// Create an empty note named `No Name {n+1}` where n is the current
    /// count. Names can repeat once notes have been deleted and recreated;
    /// only ids are unique. Persisted before returning.
    pub async fn create(&self) -> Result<Note> {
        let note = self
            .store
            .update(|notes| {
                let note = Note::new(format!("No Name {}", notes.len() + 1));
                notes.push(note.clone());
                note
            })
            .await?;

        info!(id = %note.id, "created note");
        Ok(note)
    }

    /// Merge `name`, `body` and `updated_at` into the stored record matching
    /// `note.id`. An absent id is a no-op: nothing is written and `None`
    /// comes back.
    pub async fn update(&self, note: Note) -> Result<Option<Note>> {
        if !self.store.data().iter().any(|n| n.id == note.id) {
            debug!(id = %note.id, "update for unknown note ignored");
            return Ok(None);
        }

        let updated = self
            .store
            .update(move |notes| {
                notes.iter_mut().find(|n| n.id == note.id).map(|existing| {
                    existing.name = note.name;
                    existing.body = note.body;
                    existing.updated_at = note.updated_at;
                    existing.clone()
                })
            })
            .await?;

        Ok(updated)
    }

    /// Remove and return the note matching `note_id`; `None` (and no write)
    /// if the id is absent.
    pub async fn delete(&self, note_id: &str) -> Result<Option<Note>> {
        if !self.store.data().iter().any(|n| n.id == note_id) {
            return Ok(None);
        }

        let removed = self
            .store
            .update(|notes| {
                let index = notes.iter().position(|n| n.id == note_id)?;
                Some(notes.remove(index))
            })
            .await?;

        if let Some(note) = &removed {
            info!(id = %note.id, "deleted note");
        }
        Ok(removed)
    }
}

/// Sort notes in place by the configured timestamp field and direction.
pub fn sort_notes(notes: &mut [Note], sort_by: SortKey, sort_order: SortOrder) {
    notes.sort_by_key(|note| match sort_by {
        SortKey::CreatedAt => note.created_at,
        SortKey::UpdatedAt => note.updated_at,
    });
    if sort_order == SortOrder::Desc {
        notes.reverse();
    }
}

/// Filter notes whose name matches the search pattern (a regular
/// expression, as typed into the sidebar search box). An empty pattern
/// matches everything; an invalid pattern is an error for the caller to
/// surface.
pub fn filter_by_name(notes: &[Note], pattern: &str) -> Result<Vec<Note>> {
    if pattern.is_empty() {
        return Ok(notes.to_vec());
    }

    let regex = Regex::new(pattern)?;
    Ok(notes
        .iter()
        .filter(|note| regex.is_match(&note.name))
        .cloned()
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn repo_in(dir: &TempDir) -> NoteRepository {
        let store = JsonStore::open(dir.path().join("notes.json"), Vec::new()).unwrap();
        NoteRepository::new(store)
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let dir = TempDir::new().unwrap();
        let repo = repo_in(&dir);

        let created = repo.create().await.unwrap();
        assert_eq!(created.name, "No Name 1");
        assert_eq!(created.body, "");
        assert_eq!(repo.get(&created.id), Some(created));
    }

    #[tokio::test]
    async fn list_length_tracks_creates_minus_deletes() {
        let dir = TempDir::new().unwrap();
        let repo = repo_in(&dir);

        let a = repo.create().await.unwrap();
        let b = repo.create().await.unwrap();
        repo.create().await.unwrap();
        assert_eq!(repo.list().len(), 3);

        assert_eq!(repo.delete(&a.id).await.unwrap().unwrap().id, a.id);
        assert_eq!(repo.list().len(), 2);

        // ids stay unique throughout
        let notes = repo.list();
        assert_ne!(notes[0].id, notes[1].id);
        assert!(notes.iter().any(|n| n.id == b.id));
    }

    #[tokio::test]
    async fn default_names_may_repeat_after_delete() {
        let dir = TempDir::new().unwrap();
        let repo = repo_in(&dir);

        let a = repo.create().await.unwrap();
        let b = repo.create().await.unwrap();
        repo.delete(&a.id).await.unwrap();

        // count is back to 1, so the next note reuses "No Name 2"
        let c = repo.create().await.unwrap();
        assert_eq!(c.name, b.name);
        assert_ne!(c.id, b.id);
    }

    #[tokio::test]
    async fn update_merges_fields_and_persists() {
        let dir = TempDir::new().unwrap();
        let repo = repo_in(&dir);

        let mut note = repo.create().await.unwrap();
        note.name = "groceries".to_string();
        note.body = "milk".to_string();
        note.updated_at += 1000;

        let updated = repo.update(note.clone()).await.unwrap().unwrap();
        assert_eq!(updated, note);
        assert_eq!(repo.get(&note.id), Some(note.clone()));

        // created_at is repository-assigned and survives updates untouched
        assert_eq!(updated.created_at, repo.get(&note.id).unwrap().created_at);
    }

    #[tokio::test]
    async fn update_unknown_id_is_a_no_op() {
        let dir = TempDir::new().unwrap();
        let repo = repo_in(&dir);

        let existing = repo.create().await.unwrap();

        let mut ghost = Note::new("ghost".to_string());
        ghost.body = "boo".to_string();
        assert!(repo.update(ghost).await.unwrap().is_none());

        assert_eq!(repo.list(), vec![existing]);
    }

    #[tokio::test]
    async fn delete_unknown_id_is_a_no_op() {
        let dir = TempDir::new().unwrap();
        let repo = repo_in(&dir);

        repo.create().await.unwrap();
        assert!(repo.delete("nope").await.unwrap().is_none());
        assert_eq!(repo.list().len(), 1);
    }

    #[tokio::test]
    async fn sort_and_filter_helpers() {
        let dir = TempDir::new().unwrap();
        let repo = repo_in(&dir);

        let mut a = repo.create().await.unwrap();
        let b = repo.create().await.unwrap();

        a.name = "shopping list".to_string();
        a.updated_at = b.updated_at + 5000;
        repo.update(a.clone()).await.unwrap();

        let mut notes = repo.list();
        sort_notes(&mut notes, SortKey::UpdatedAt, SortOrder::Desc);
        assert_eq!(notes[0].id, a.id);
        sort_notes(&mut notes, SortKey::CreatedAt, SortOrder::Asc);
        assert_eq!(notes[0].id, a.id);

        let hits = filter_by_name(&notes, "shop").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, a.id);
        assert_eq!(filter_by_name(&notes, "").unwrap().len(), 2);
        assert!(filter_by_name(&notes, "(").is_err());
    }
}

//! On-disk JSON stores. One `JsonStore` per logical collection (notes,
//! settings, app state), each a single JSON document loaded once at startup
//! and flushed whole on every change, last write wins.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::debug;

// Where the stores live: one file per collection under the user data dir.
pub struct StorePaths {
    pub notes: PathBuf,
    pub settings: PathBuf,
    pub app_state: PathBuf,
}

impl StorePaths {
    /// Store files under the per-user data directory.
    pub fn new() -> Result<Self> {
        let base = dirs::data_dir().context("no user data directory")?;
        Ok(Self::in_dir(&base.join("leavepad")))
    }

    /// Store files under an explicit directory (used by tests).
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            notes: dir.join("notes.json"),
            settings: dir.join("settings.json"),
            app_state: dir.join("app-state.json"),
        }
    }
}

/// A single JSON document on disk plus its in-memory snapshot.
///
/// All mutation goes through [`JsonStore::update`], which holds a write gate
/// across the whole read-modify-write span so concurrent callers cannot drop
/// each other's changes, and which commits to memory only after the flush
/// succeeds, so a failed write leaves the prior snapshot intact.
pub struct JsonStore<T> {
    path: PathBuf,
    data: RwLock<T>,
    write_gate: Mutex<()>,
}

impl<T> JsonStore<T>
where
    T: Serialize + DeserializeOwned + Clone,
{
    /// Load the latest snapshot from disk. A missing file yields `default`;
    /// a file that exists but does not parse is an error, not silently
    /// replaced.
    pub fn open(path: PathBuf, default: T) -> Result<Self> {
        let data = match std::fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content)
                .with_context(|| format!("corrupt store file {}", path.display()))?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "store file missing, starting from default");
                default
            }
            Err(e) => {
                return Err(e).with_context(|| format!("failed to read {}", path.display()))
            }
        };

        Ok(Self {
            path,
            data: RwLock::new(data),
            write_gate: Mutex::new(()),
        })
    }

    /// Clone of the current in-memory snapshot.
    pub fn data(&self) -> T {
        self.data.read().clone()
    }

    /// Mutate the snapshot and flush it to disk. The returned value is
    /// whatever `mutate` produced, letting callers hand back the record they
    /// touched in the same serialized span.
    pub async fn update<R>(&self, mutate: impl FnOnce(&mut T) -> R) -> Result<R> {
        let _gate = self.write_gate.lock().await;

        let mut next = self.data.read().clone();
        let out = mutate(&mut next);

        self.flush(&next).await?;
        *self.data.write() = next;

        Ok(out)
    }

    async fn flush(&self, next: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(next).context("failed to serialize store")?;

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        // Write a sibling temp file, then rename over the store, so an
        // interrupted flush never truncates the previous snapshot.
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json)
            .await
            .with_context(|| format!("failed to write {}", tmp.display()))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .with_context(|| format!("failed to replace {}", self.path.display()))?;

        debug!(path = %self.path.display(), "store flushed");
        Ok(())
    }
}

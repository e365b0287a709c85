/// Bookmark store adapter: the only code that reads or writes persisted bookmarks

use crate::bookmark::Bookmark;
use crate::domain::Category;
use crate::error::{PopupError, Result};
use crate::storage::{plan_delete, plan_save, PendingWrite, Snapshot};
use async_trait::async_trait;
use log::{debug, warn};
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};

/// Asynchronous string-keyed storage holding one bookmark list per key.
///
/// `get` returns `Ok(None)` for a key that was never written.
#[async_trait(?Send)]
pub trait KeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<Bookmark>>>;

    async fn set(&self, key: &str, bookmarks: &[Bookmark]) -> Result<()>;
}

/// Best-effort adapter over a [`KeyValueStore`].
///
/// Storage failures are logged and reported as `None`; callers only update
/// their state when they get a list back.
pub struct BookmarkStore<S> {
    backend: S,
}

impl<S: KeyValueStore> BookmarkStore<S> {
    pub fn new(backend: S) -> Self {
        BookmarkStore { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Read all four categories. A category that fails to load comes back empty
    /// without affecting the others.
    pub async fn load_all(&self) -> Snapshot {
        let mut snapshot = Snapshot::new();

        for category in Category::ALL {
            let key = category.storage_key();
            match self.backend.get(key).await {
                Ok(Some(bookmarks)) => {
                    debug!("Loaded {} bookmarks from {}", bookmarks.len(), key);
                    snapshot.set_bookmarks(category, bookmarks);
                }
                Ok(None) => {
                    debug!("No bookmarks stored under {}", key);
                }
                Err(e) => {
                    warn!("Treating {} as empty: {}", key, e);
                }
            }
        }

        snapshot
    }

    /// Save `url` under `category` unless it is already there.
    ///
    /// Returns the category's new list once it has been persisted, or `None`
    /// for a duplicate or a failed write.
    pub async fn save(
        &self,
        snapshot: &Snapshot,
        category: Category,
        url: &str,
        description: &str,
    ) -> Option<Vec<Bookmark>> {
        match plan_save(snapshot, category, url, description) {
            Some(write) => self.persist(write).await,
            None => {
                debug!("{} already saved in {}", url, category.storage_key());
                None
            }
        }
    }

    /// Remove `url` from `category` and persist the remaining list
    pub async fn delete(
        &self,
        snapshot: &Snapshot,
        category: Category,
        url: &str,
    ) -> Option<Vec<Bookmark>> {
        self.persist(plan_delete(snapshot, category, url)).await
    }

    async fn persist(&self, write: PendingWrite) -> Option<Vec<Bookmark>> {
        let key = write.storage_key();
        match self.backend.set(key, &write.bookmarks).await {
            Ok(()) => {
                debug!("Wrote {} bookmarks to {}", write.bookmarks.len(), key);
                Some(write.bookmarks)
            }
            Err(e) => {
                warn!("Bookmark change dropped: {}", e);
                None
            }
        }
    }
}

/// In-process [`KeyValueStore`] that keeps values as JSON, so every write
/// goes through the same serialization a real backend would apply.
#[derive(Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, serde_json::Value>>,
    broken_keys: RefCell<HashSet<String>>,
    fail_writes: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a raw value, bypassing bookmark encoding
    pub fn insert_raw(&self, key: &str, value: serde_json::Value) {
        self.values.borrow_mut().insert(key.to_string(), value);
    }

    pub fn raw(&self, key: &str) -> Option<serde_json::Value> {
        self.values.borrow().get(key).cloned()
    }

    /// Make every read and write of `key` fail
    pub fn break_key(&self, key: &str) {
        self.broken_keys.borrow_mut().insert(key.to_string());
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    fn is_broken(&self, key: &str) -> bool {
        self.broken_keys.borrow().contains(key)
    }
}

#[async_trait(?Send)]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<Bookmark>>> {
        if self.is_broken(key) {
            return Err(PopupError::StorageRead {
                key: key.to_string(),
                reason: "key unavailable".to_string(),
            });
        }

        match self.values.borrow().get(key) {
            None => Ok(None),
            Some(value) => serde_json::from_value(value.clone())
                .map(Some)
                .map_err(|e| PopupError::Decode {
                    key: key.to_string(),
                    reason: e.to_string(),
                }),
        }
    }

    async fn set(&self, key: &str, bookmarks: &[Bookmark]) -> Result<()> {
        if self.fail_writes.get() || self.is_broken(key) {
            return Err(PopupError::StorageWrite {
                key: key.to_string(),
                reason: "write rejected".to_string(),
            });
        }

        let value = serde_json::to_value(bookmarks).map_err(|e| PopupError::Encode {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
        self.values.borrow_mut().insert(key.to_string(), value);
        Ok(())
    }
}

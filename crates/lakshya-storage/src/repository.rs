use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::{Serialize, de::DeserializeOwned};

use lakshya_core::store_keys;

use crate::error::StorageError;
use crate::state;
use crate::store::DurableStore;

/// Owns the three persisted collections: diary entries, custom meals, and
/// the user profile.
///
/// Every read deserializes the whole document from the store and every
/// write replaces it. Writers to the same key are serialized by a per-key
/// lock held across the read-modify-write cycle; different keys never
/// share a lock.
pub struct Repository<S> {
    store: S,
    diary_lock: Mutex<()>,
    meals_lock: Mutex<()>,
    profile_lock: Mutex<()>,
}

impl<S: DurableStore> Repository<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            diary_lock: Mutex::new(()),
            meals_lock: Mutex::new(()),
            profile_lock: Mutex::new(()),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub(crate) fn write_lock(&self, key: &str) -> MutexGuard<'_, ()> {
        let lock = match key {
            store_keys::DIARY => &self.diary_lock,
            store_keys::MEALS => &self.meals_lock,
            _ => &self.profile_lock,
        };
        // The guarded value is `()`, so a poisoned lock carries no broken state.
        lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Full list under `key`, or empty if nothing was ever stored.
    pub(crate) fn load_list<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, StorageError> {
        let items: Option<Vec<T>> = state::load_state(&self.store, key)?;
        Ok(items.unwrap_or_default())
    }

    pub(crate) fn save_list<T: Serialize>(&self, key: &str, items: &[T]) -> Result<(), StorageError> {
        state::save_state(&self.store, key, &items)
    }

    pub(crate) fn load_document<T: DeserializeOwned>(
        &self,
        key: &str,
    ) -> Result<Option<T>, StorageError> {
        state::load_state(&self.store, key)
    }

    pub(crate) fn save_document<T: Serialize>(
        &self,
        key: &str,
        value: &T,
    ) -> Result<(), StorageError> {
        state::save_state(&self.store, key, value)
    }

    /// Append `item` to the list under `key`.
    pub(crate) fn append<T>(&self, key: &str, item: T) -> Result<(), StorageError>
    where
        T: Serialize + DeserializeOwned,
    {
        let _guard = self.write_lock(key);
        let mut items: Vec<T> = self.load_list(key)?;
        items.push(item);
        self.save_list(key, &items)
    }

    /// Drop every item matching `is_target`. Returns `false`, and leaves the
    /// stored document untouched, when nothing matched.
    pub(crate) fn remove_where<T>(
        &self,
        key: &str,
        is_target: impl Fn(&T) -> bool,
    ) -> Result<bool, StorageError>
    where
        T: Serialize + DeserializeOwned,
    {
        let _guard = self.write_lock(key);
        let mut items: Vec<T> = self.load_list(key)?;
        let before = items.len();
        items.retain(|item| !is_target(item));
        if items.len() == before {
            return Ok(false);
        }
        self.save_list(key, &items)?;
        Ok(true)
    }

    /// Replace the first item matching `is_target` in place, keeping list
    /// order. Returns `false` without writing when nothing matched.
    pub(crate) fn replace_where<T>(
        &self,
        key: &str,
        is_target: impl Fn(&T) -> bool,
        replacement: T,
    ) -> Result<bool, StorageError>
    where
        T: Serialize + DeserializeOwned,
    {
        let _guard = self.write_lock(key);
        let mut items: Vec<T> = self.load_list(key)?;
        let Some(slot) = items.iter_mut().find(|item| is_target(item)) else {
            return Ok(false);
        };
        *slot = replacement;
        self.save_list(key, &items)?;
        Ok(true)
    }
}

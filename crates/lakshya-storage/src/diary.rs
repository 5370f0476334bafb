use std::collections::BTreeSet;

use jiff::civil::Date;
use uuid::Uuid;

use lakshya_core::models::DiaryEntry;
use lakshya_core::store_keys;

use crate::error::StorageError;
use crate::repository::Repository;
use crate::store::DurableStore;

impl<S: DurableStore> Repository<S> {
    /// Append `entry`. No uniqueness check: callers mint a fresh id. The
    /// embedded meal must validate, or nothing is written.
    pub fn save_diary_entry(&self, entry: DiaryEntry) -> Result<(), StorageError> {
        entry.meal.validate()?;
        tracing::debug!(entry_id = %entry.id, date = %entry.date, "saving diary entry");
        self.append(store_keys::DIARY, entry)
    }

    /// Every entry in insertion order; empty when nothing was ever logged.
    pub fn diary_entries(&self) -> Result<Vec<DiaryEntry>, StorageError> {
        self.load_list(store_keys::DIARY)
    }

    /// Entries whose stored `date` equals `date`, in insertion order.
    pub fn diary_entries_by_date(&self, date: Date) -> Result<Vec<DiaryEntry>, StorageError> {
        let mut entries = self.diary_entries()?;
        entries.retain(|entry| entry.date == date);
        Ok(entries)
    }

    /// Distinct dates that have at least one entry, ascending.
    pub fn diary_dates(&self) -> Result<Vec<Date>, StorageError> {
        let dates: BTreeSet<Date> = self.diary_entries()?.iter().map(|e| e.date).collect();
        Ok(dates.into_iter().collect())
    }

    /// Returns `false` (and writes nothing) for an unknown id.
    pub fn delete_diary_entry(&self, id: Uuid) -> Result<bool, StorageError> {
        let removed = self.remove_where(store_keys::DIARY, |entry: &DiaryEntry| entry.id == id)?;
        if !removed {
            tracing::warn!(entry_id = %id, "delete of unknown diary entry ignored");
        }
        Ok(removed)
    }

    /// Replace the entry with `id` in place. Returns `false` (and writes
    /// nothing) for an unknown id.
    pub fn update_diary_entry(&self, id: Uuid, updated: DiaryEntry) -> Result<bool, StorageError> {
        updated.meal.validate()?;
        let replaced =
            self.replace_where(store_keys::DIARY, |entry: &DiaryEntry| entry.id == id, updated)?;
        if !replaced {
            tracing::warn!(entry_id = %id, "update of unknown diary entry ignored");
        }
        Ok(replaced)
    }
}

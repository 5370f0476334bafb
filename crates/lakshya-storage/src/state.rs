use serde::{Serialize, de::DeserializeOwned};

use crate::error::StorageError;
use crate::store::DurableStore;

/// Load a JSON document. `Ok(None)` when nothing has been stored under `key`.
pub fn load_state<T: DeserializeOwned>(
    store: &dyn DurableStore,
    key: &str,
) -> Result<Option<T>, StorageError> {
    let Some(body) = store.get(key)? else {
        return Ok(None);
    };
    let value = serde_json::from_slice(&body).map_err(|source| StorageError::Malformed {
        key: key.to_string(),
        source,
    })?;
    Ok(Some(value))
}

/// Save a JSON document, replacing whatever was stored under `key`.
pub fn save_state<T: Serialize>(
    store: &dyn DurableStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let body = serde_json::to_vec_pretty(value).map_err(|source| StorageError::Encode {
        key: key.to_string(),
        source,
    })?;
    store.set(key, body)
}

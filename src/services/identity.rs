// Anonymous per-device identity used to scope favorites.
use uuid::Uuid;

use crate::config::storage_keys;
use crate::error::StorageError;

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`.
pub struct LocalStore {
    storage: web_sys::Storage,
}

impl LocalStore {
    pub fn open() -> Result<Self, StorageError> {
        let win = web_sys::window().ok_or(StorageError::Unavailable)?;
        match win.local_storage() {
            Ok(Some(storage)) => Ok(Self { storage }),
            _ => Err(StorageError::Unavailable),
        }
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage.get_item(key).map_err(|e| StorageError::Access(format!("{e:?}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage.set_item(key, value).map_err(|e| StorageError::Access(format!("{e:?}")))
    }
}

/// Stored id, or a fresh v4 UUID that is persisted before being returned.
pub fn anonymous_id(store: &impl KeyValueStore) -> Result<String, StorageError> {
    if let Some(id) = store.get(storage_keys::ANONYMOUS_ID)?.filter(|id| !id.trim().is_empty()) {
        return Ok(id);
    }
    let id = Uuid::new_v4().to_string();
    store.set(storage_keys::ANONYMOUS_ID, &id)?;
    log::info!("identity: generated new anonymous id");
    Ok(id)
}

/// Browser entry point. Private browsing modes can refuse storage; the app
/// then runs with an id that lasts for this page load only.
pub fn resolve_anonymous_id() -> String {
    match LocalStore::open().and_then(|store| anonymous_id(&store)) {
        Ok(id) => id,
        Err(err) => {
            log::warn!("identity: {err}; using a session-only id");
            Uuid::new_v4().to_string()
        }
    }
}

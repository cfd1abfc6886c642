//! `localStorage` behind the storage trait the domain crates use.

use bistro_storage::{KeyValueStore, StorageError};
use wasm_bindgen::JsValue;

/// Browser `localStorage`, looked up on every call so a page where storage
/// is blocked degrades to errors instead of failing at start-up.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStore;

fn storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

fn backend(err: JsValue) -> StorageError {
    StorageError::Backend(format!("{err:?}"))
}

impl KeyValueStore for BrowserStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        storage()?.get_item(key).map_err(backend)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        storage()?.set_item(key, value).map_err(backend)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        storage()?.remove_item(key).map_err(backend)
    }
}

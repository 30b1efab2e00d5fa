//! `window.localStorage` as a [`KeyValueStore`].

use fb_core::storage::{KeyValueStore, StorageError};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{DomException, Storage};

pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    /// Open the origin's local storage. Fails when there is no window (e.g.
    /// inside a worker) or the browser has storage disabled.
    pub fn open() -> Result<Self, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        let storage = window
            .local_storage()
            .map_err(js_error)?
            .ok_or(StorageError::Unavailable)?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage.get_item(key).map_err(js_error)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage.set_item(key, value).map_err(js_error)
    }
}

fn js_error(err: JsValue) -> StorageError {
    if let Ok(exception) = err.clone().dyn_into::<DomException>() {
        if exception.name() == "QuotaExceededError" {
            return StorageError::QuotaExceeded;
        }
        return StorageError::Backend(exception.message());
    }
    StorageError::Backend(format!("{err:?}"))
}

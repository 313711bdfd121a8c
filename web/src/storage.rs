//! `localStorage` adapter for the engine's key-value store.

use coursedeck_app::{KeyValueStore, MemoryStore};
use coursedeck_core::{Error, Result};
use leptos::prelude::window;
use wasm_bindgen::JsValue;
use web_sys::Storage;

/// Store backed by `window.localStorage`.
pub struct BrowserStore {
    storage: Storage,
}

impl BrowserStore {
    pub fn open() -> Result<Self> {
        let storage = window()
            .local_storage()
            .map_err(|err| Error::storage(js_message(&err)))?
            .ok_or(Error::StorageUnavailable)?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.storage
            .set_item(key, value)
            .map_err(|err| Error::storage(js_message(&err)))
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.storage
            .remove_item(key)
            .map_err(|err| Error::storage(js_message(&err)))
    }
}

/// `localStorage` when the browser allows it, otherwise an in-memory store
/// that lasts until the tab closes.
pub fn open_store() -> Box<dyn KeyValueStore> {
    match BrowserStore::open() {
        Ok(store) => Box::new(store),
        Err(err) => {
            log::warn!("Falling back to in-memory storage: {err}");
            Box::new(MemoryStore::new())
        }
    }
}

fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

//! Persistent key-value store adapter.
//!
//! Models the browser's `localStorage`: string keys, string values, JSON
//! encoding for structured data. Every component owns a disjoint set of keys
//! and writes are last-write-wins, so no coordination is needed.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use coursedeck_core::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Store key for the last active lesson id.
pub const ACTIVE_PAGE_KEY: &str = "activePageId";
/// Store key for the JSON progress map.
pub const COURSE_PROGRESS_KEY: &str = "courseProgress";
/// Store key for the thumbnail dock side (`"left"` / `"right"`).
pub const DOCK_SIDE_KEY: &str = "dockSide";
/// Store key for the thumbnail dock vertical offset (numeric string).
pub const DOCK_Y_KEY: &str = "dockY";
/// Store key for optional settings overrides.
pub const SETTINGS_KEY: &str = "viewerSettings";

/// String-keyed, string-valued persistent storage.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore {
    /// Value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Missing keys are not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

/// In-memory store.
///
/// Clones share the same entries, so a test can keep a handle while the
/// engine owns another. Also used when the browser refuses `localStorage`.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `pairs`.
    pub fn with_entries<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let store = Self::new();
        {
            let mut entries = store.entries.borrow_mut();
            for (key, value) in pairs {
                entries.insert(key.to_string(), value.to_string());
            }
        }
        store
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Decode the JSON value under `key`.
///
/// Missing keys yield `None` silently; malformed values yield `None` with a
/// warning so callers fall back to their defaults.
pub fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = store.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Failed to parse saved '{}': {}", key, e);
            None
        }
    }
}

/// Encode `value` as JSON and store it under `key`.
pub fn save_json<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<()> {
    let json = serde_json::to_string(value)?;
    store.set(key, &json)
}

/// Store `value` and log instead of failing.
///
/// Persistence is best effort: a full or denied store must never interrupt
/// a state transition.
pub fn persist_raw(store: &dyn KeyValueStore, key: &str, value: &str) {
    let _ = store
        .set(key, value)
        .with_context(|| format!("Failed to persist '{key}'"));
}

/// JSON variant of [`persist_raw`].
pub fn persist_json<T: Serialize + ?Sized>(store: &dyn KeyValueStore, key: &str, value: &T) {
    let _ = save_json(store, key, value).with_context(|| format!("Failed to persist '{key}'"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use coursedeck_core::{Point, Size};
    use mockall::predicate::eq;

    #[test]
    fn test_memory_store_set_get_remove() {
        let store = MemoryStore::new();
        assert_eq!(store.get("k"), None);

        store.set("k", "v").unwrap();
        assert_eq!(store.get("k"), Some("v".to_string()));

        store.remove("k").unwrap();
        assert_eq!(store.get("k"), None);
        store.remove("k").unwrap();
    }

    #[test]
    fn test_memory_store_clones_share_entries() {
        let store = MemoryStore::new();
        let handle = store.clone();
        store.set("dockSide", "right").unwrap();
        assert_eq!(handle.get("dockSide"), Some("right".to_string()));
        assert_eq!(handle.len(), 1);
    }

    #[test]
    fn test_load_json_missing_key() {
        let store = MemoryStore::new();
        assert_eq!(load_json::<Point>(&store, "slideFrame-position"), None);
    }

    #[test]
    fn test_load_json_corrupted_value_falls_back() {
        let store = MemoryStore::with_entries([("slideFrame-size", "{not json")]);
        assert_eq!(load_json::<Size>(&store, "slideFrame-size"), None);
    }

    #[test]
    fn test_load_json_wrong_shape_falls_back() {
        let store = MemoryStore::with_entries([("slideFrame-size", r#"{"w":1}"#)]);
        assert_eq!(load_json::<Size>(&store, "slideFrame-size"), None);
    }

    #[test]
    fn test_save_then_load_json() {
        let store = MemoryStore::new();
        save_json(&store, "slideFrame-position", &Point::new(12.0, -4.0)).unwrap();
        assert_eq!(
            load_json::<Point>(&store, "slideFrame-position"),
            Some(Point::new(12.0, -4.0))
        );
    }

    #[test]
    fn test_persist_raw_swallows_write_errors() {
        let mut store = MockKeyValueStore::new();
        store
            .expect_set()
            .with(eq("dockY"), eq("12"))
            .times(1)
            .returning(|_, _| Err(Error::storage("quota exceeded")));

        persist_raw(&store, "dockY", "12");
    }

    #[test]
    fn test_persist_json_writes_encoded_value() {
        let mut store = MockKeyValueStore::new();
        store
            .expect_set()
            .with(eq("slideFrame-size"), eq(r#"{"width":800.0,"height":500.0}"#))
            .times(1)
            .returning(|_, _| Ok(()));

        persist_json(&store, "slideFrame-size", &Size::new(800.0, 500.0));
    }
}

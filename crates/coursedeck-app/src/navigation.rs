//! Root navigation: the single source of truth for the active lesson.

use coursedeck_core::prelude::*;
use coursedeck_core::{step, BoundaryPolicy, Direction};

use crate::store::{persist_raw, KeyValueStore, ACTIVE_PAGE_KEY};

/// Where the initial lesson came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitialSource {
    Fragment,
    Stored,
    Default,
}

#[derive(Debug, Clone)]
pub struct Navigation {
    lesson_ids: Vec<String>,
    active: usize,
    hydrated: bool,
    dirty: bool,
}

impl Navigation {
    /// `lesson_ids` must be non-empty (guaranteed by `Registry`).
    pub fn new(lesson_ids: Vec<String>) -> Self {
        Self {
            lesson_ids,
            active: 0,
            hydrated: false,
            dirty: false,
        }
    }

    pub fn lesson_ids(&self) -> &[String] {
        &self.lesson_ids
    }

    pub fn len(&self) -> usize {
        self.lesson_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lesson_ids.is_empty()
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_id(&self) -> &str {
        self.lesson_ids
            .get(self.active)
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.lesson_ids.iter().position(|known| known == id)
    }

    /// Pick the initial lesson: fragment, then stored id, then the first.
    ///
    /// Enables persistence; the resolved id is written on the next flush.
    pub fn restore(&mut self, fragment: Option<&str>, store: &dyn KeyValueStore) -> InitialSource {
        let from_fragment = fragment.and_then(|id| self.index_of(id));
        let (index, source) = match from_fragment {
            Some(index) => (index, InitialSource::Fragment),
            None => match store.get(ACTIVE_PAGE_KEY).and_then(|id| self.index_of(&id)) {
                Some(index) => (index, InitialSource::Stored),
                None => (0, InitialSource::Default),
            },
        };
        self.active = index;
        self.hydrated = true;
        self.dirty = true;
        info!(lesson = %self.active_id(), ?source, "Initial lesson resolved");
        source
    }

    /// Make `index` active. Out-of-range indices fall back to the first lesson.
    pub fn select_index(&mut self, index: usize) -> bool {
        let index = if index < self.len() { index } else { 0 };
        if index == self.active {
            return false;
        }
        self.active = index;
        self.dirty = true;
        true
    }

    /// Make `id` active. Unknown ids fall back to the first lesson.
    pub fn select_id(&mut self, id: &str) -> bool {
        let index = self.index_of(id).unwrap_or_else(|| {
            warn!("Unknown lesson '{}', falling back to the first", id);
            0
        });
        self.select_index(index)
    }

    /// Index one step away from the active lesson, if allowed.
    pub fn neighbor(&self, direction: Direction, policy: BoundaryPolicy) -> Option<usize> {
        step(self.active, self.len(), direction, policy)
    }

    pub fn flush(&mut self, store: &dyn KeyValueStore) {
        if !self.hydrated || !self.dirty {
            return;
        }
        persist_raw(store, ACTIVE_PAGE_KEY, self.active_id());
        self.dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn nav() -> Navigation {
        Navigation::new(vec!["a".into(), "b".into(), "c".into(), "d".into()])
    }

    #[test]
    fn test_fragment_wins_over_stored() {
        let store = MemoryStore::with_entries([(ACTIVE_PAGE_KEY, "b")]);
        let mut n = nav();
        assert_eq!(n.restore(Some("c"), &store), InitialSource::Fragment);
        assert_eq!(n.active_id(), "c");
    }

    #[test]
    fn test_unknown_fragment_uses_stored() {
        let store = MemoryStore::with_entries([(ACTIVE_PAGE_KEY, "b")]);
        let mut n = nav();
        assert_eq!(n.restore(Some("nope"), &store), InitialSource::Stored);
        assert_eq!(n.active_id(), "b");
    }

    #[test]
    fn test_stale_stored_id_uses_first() {
        let store = MemoryStore::with_entries([(ACTIVE_PAGE_KEY, "deleted-lesson")]);
        let mut n = nav();
        assert_eq!(n.restore(None, &store), InitialSource::Default);
        assert_eq!(n.active_id(), "a");
    }

    #[test]
    fn test_select_unknown_id_falls_back_to_first() {
        let mut n = nav();
        n.select_index(2);
        assert!(n.select_id("ghost"));
        assert_eq!(n.active_index(), 0);
    }

    #[test]
    fn test_neighbor_policies() {
        let mut n = nav();
        n.select_index(3);
        assert_eq!(n.neighbor(Direction::Next, BoundaryPolicy::Wrap), Some(0));
        assert_eq!(n.neighbor(Direction::Next, BoundaryPolicy::Clamp), None);
    }

    #[test]
    fn test_flush_persists_after_restore() {
        let store = MemoryStore::new();
        let mut n = nav();
        n.select_index(1);
        n.flush(&store);
        assert_eq!(store.get(ACTIVE_PAGE_KEY), None);

        n.restore(None, &store);
        n.flush(&store);
        assert_eq!(store.get(ACTIVE_PAGE_KEY), Some("a".to_string()));

        n.select_id("d");
        n.flush(&store);
        assert_eq!(store.get(ACTIVE_PAGE_KEY), Some("d".to_string()));
    }
}

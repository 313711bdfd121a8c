//! Engine - owns state, store and clock and runs the TEA loop
//!
//! The browser shell creates one engine per page. Startup is two-phase:
//! [`Engine::new`] builds default state (what the first render shows), then
//! [`Engine::hydrate`] reads every persisted slice and resolves the active
//! lesson. Only after that does any change reach the store.

use coursedeck_core::prelude::*;
use coursedeck_core::Registry;

use crate::clock::Clock;
use crate::config::{load_settings, ViewerSettings};
use crate::deep_link::fragment_of;
use crate::handler::{self, UpdateAction};
use crate::input_key::KeyInput;
use crate::message::Message;
use crate::state::{AppState, Phase};
use crate::store::KeyValueStore;

/// Upper bound on follow-up messages per dispatch; a longer chain is a bug.
const MAX_FOLLOW_UPS: usize = 16;

pub struct Engine {
    state: AppState,
    store: Box<dyn KeyValueStore>,
    clock: Box<dyn Clock>,
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl Engine {
    /// Create an engine for `lesson_ids` in registry order.
    ///
    /// Settings overrides are read here since they shape the default
    /// geometry; everything else waits for [`Engine::hydrate`].
    pub fn new(
        lesson_ids: Vec<String>,
        store: Box<dyn KeyValueStore>,
        clock: Box<dyn Clock>,
    ) -> Result<Self> {
        if lesson_ids.is_empty() {
            return Err(Error::EmptyRegistry);
        }
        let settings = load_settings(store.as_ref());
        Ok(Self {
            state: AppState::new(lesson_ids, settings),
            store,
            clock,
        })
    }

    /// Create an engine for every lesson of `registry`.
    pub fn for_registry<R>(
        registry: &Registry<R>,
        store: Box<dyn KeyValueStore>,
        clock: Box<dyn Clock>,
    ) -> Result<Self> {
        Self::new(registry.ids(), store, clock)
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn settings(&self) -> &ViewerSettings {
        &self.state.settings
    }

    pub fn is_hydrated(&self) -> bool {
        self.state.is_ready()
    }

    /// Restore persisted state and pick the initial lesson from the URL
    /// fragment of `href`, the stored id, or the first lesson.
    ///
    /// Runs once; later calls return no actions.
    pub fn hydrate(&mut self, href: Option<&str>) -> Vec<UpdateAction> {
        if self.state.is_ready() {
            return Vec::new();
        }
        let store = self.store.as_ref();
        let fragment = href.and_then(fragment_of);
        self.state.nav.restore(fragment.as_deref(), store);
        self.state.frame.restore(store);
        self.state.dock.restore(store);
        self.state.course.restore(store);
        self.state.phase = Phase::Ready;
        self.state.flush(store);
        info!(lesson = %self.state.active_id(), "Hydrated");

        vec![UpdateAction::SyncFragment {
            lesson_id: self.state.active_id().to_string(),
        }]
    }

    /// Map a key press for the mounted layout.
    pub fn key_message(&self, key: &KeyInput) -> Option<Message> {
        handler::handle_key(&self.state, key)
    }

    /// Run `message` and its follow-ups through `update`, persist dirty
    /// slices and return the host actions in order.
    pub fn dispatch(&mut self, message: Message) -> Vec<UpdateAction> {
        let before = self.state.nav.active_index();
        let mut actions = Vec::new();

        let mut msg = Some(message);
        let mut steps = 0;
        while let Some(m) = msg {
            if steps == MAX_FOLLOW_UPS {
                error!("Follow-up chain exceeded {} messages, dropping {:?}", MAX_FOLLOW_UPS, m);
                break;
            }
            steps += 1;
            let now_ms = self.clock.now_ms();
            let result = handler::update(&mut self.state, m, now_ms);
            actions.extend(result.action);
            msg = result.message;
        }

        self.state.flush(self.store.as_ref());

        if self.state.is_ready() && self.state.nav.active_index() != before {
            actions.push(UpdateAction::SyncFragment {
                lesson_id: self.state.active_id().to_string(),
            });
        }
        actions
    }

    /// Page teardown. Saves the final watch interval exactly once.
    pub fn teardown(&mut self) -> Vec<UpdateAction> {
        self.dispatch(Message::Teardown)
    }

    /// Page restored from the back/forward cache after [`Engine::teardown`].
    pub fn resume(&mut self) -> Vec<UpdateAction> {
        self.dispatch(Message::Resume)
    }
}

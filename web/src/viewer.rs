//! Shared handle to the engine, provided through context.

use coursedeck_app::{AppState, Engine, KeyInput, Message, UpdateAction};
use coursedeck_core::{LessonDescriptor, Registry};
use leptos::prelude::*;

use crate::data::Slide;
use crate::host::Host;

/// Copyable handle used by every component.
///
/// `state` is a snapshot of the engine state taken after each dispatch;
/// views read it, never the engine directly.
#[derive(Clone, Copy)]
pub struct Viewer {
    engine: StoredValue<Engine, LocalStorage>,
    host: StoredValue<Host, LocalStorage>,
    registry: StoredValue<Registry<Slide>>,
    state: RwSignal<AppState>,
    active: Memo<String>,
}

impl Viewer {
    pub fn new(engine: Engine, registry: Registry<Slide>) -> Self {
        let state = RwSignal::new(engine.state().clone());
        let active = Memo::new(move |_| state.with(|s| s.active_id().to_string()));
        Self {
            engine: StoredValue::new_local(engine),
            host: StoredValue::new_local(Host::default()),
            registry: StoredValue::new(registry),
            state,
            active,
        }
    }

    /// Read the current state snapshot (tracked).
    pub fn with<T>(&self, f: impl FnOnce(&AppState) -> T) -> T {
        self.state.with(f)
    }

    pub fn is_ready(&self) -> bool {
        self.state.with(AppState::is_ready)
    }

    /// Active lesson id; only notifies when the lesson changes.
    pub fn active_id(&self) -> Memo<String> {
        self.active
    }

    pub fn lessons(&self) -> Vec<LessonDescriptor<Slide>> {
        self.registry.with_value(|registry| registry.lessons().to_vec())
    }

    pub fn lesson(&self, id: &str) -> LessonDescriptor<Slide> {
        self.registry.with_value(|registry| registry.resolve(id).clone())
    }

    pub fn lesson_count(&self) -> usize {
        self.registry.with_value(Registry::len)
    }

    /// Render the content of lesson `id`.
    pub fn render(&self, id: &str) -> AnyView {
        (self.lesson(id).render)()
    }

    /// Second startup phase: restore persisted state and resolve the
    /// initial lesson from the current URL.
    pub fn hydrate(self) {
        let href = window().location().href().ok();
        if let Some(actions) = self.engine.try_update_value(|engine| engine.hydrate(href.as_deref())) {
            self.commit(actions);
        }
    }

    pub fn key_message(self, key: &KeyInput) -> Option<Message> {
        self.engine
            .try_with_value(|engine| engine.key_message(key))
            .flatten()
    }

    pub fn dispatch(self, message: Message) {
        if let Some(actions) = self.engine.try_update_value(|engine| engine.dispatch(message)) {
            self.commit(actions);
        }
    }

    /// Page is going away; saves the final watch interval.
    pub fn teardown(self) {
        if let Some(actions) = self.engine.try_update_value(Engine::teardown) {
            self.commit(actions);
        }
    }

    /// Page restored from the back/forward cache.
    pub fn resume(self) {
        if let Some(actions) = self.engine.try_update_value(Engine::resume) {
            self.commit(actions);
        }
    }

    fn commit(self, actions: Vec<UpdateAction>) {
        if let Some(snapshot) = self.engine.try_with_value(|engine| engine.state().clone()) {
            self.state.set(snapshot);
        }
        for action in actions {
            log::trace!("Host action: {action:?}");
            self.host.try_update_value(|host| host.perform(self, action));
        }
    }
}

pub fn use_viewer() -> Viewer {
    expect_context::<Viewer>()
}

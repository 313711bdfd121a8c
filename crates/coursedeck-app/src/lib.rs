//! coursedeck-app - Application state and orchestration for Coursedeck
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the lesson
//! viewer: root navigation with hydration gating, the slide frame and dock
//! surfaces, the course interface and its progress tracker, plus the store,
//! clock and settings seams. It has no browser dependency; the web front end
//! converts DOM events into [`Message`]s and performs the returned
//! [`UpdateAction`]s.

pub mod clock;
pub mod config;
pub mod course;
pub mod deep_link;
pub mod dock;
pub mod engine;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod navigation;
pub mod state;
pub mod store;
pub mod surface;

// Re-export primary types
pub use clock::{Clock, SystemClock};
pub use config::ViewerSettings;
pub use engine::Engine;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::{InputKey, KeyInput};
pub use message::Message;
pub use state::{AppState, Layout, Phase};
pub use store::{KeyValueStore, MemoryStore};
pub use surface::Cursor;

#[cfg(any(test, feature = "test-helpers"))]
pub use clock::ManualClock;

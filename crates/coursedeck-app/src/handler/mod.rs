//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key bindings for each layout
//! - `gesture`: Pointer gesture handlers (frame, dock, list pane)
//! - `course`: Course interface handlers (progress, auto-advance, view)

pub(crate) mod course;
pub(crate) mod gesture;
pub(crate) mod keys;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use crate::message::Message;
use crate::surface::Cursor;

// Re-export main entry point
pub use keys::handle_key;
pub use update::update;

/// Actions that the host (browser shell) should perform after update
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// (Re)start the one-second auto-advance interval.
    ///
    /// Any interval already armed is cancelled first, so at most one is live.
    ArmTimer { period_ms: u32 },

    /// Cancel the auto-advance interval if one is armed
    CancelTimer,

    /// Install document pointer listeners and set the document cursor
    CapturePointer { cursor: Cursor },

    /// Remove document pointer listeners and restore the cursor
    ReleasePointer,

    /// Replace the URL fragment with the active lesson id (no history entry)
    SyncFragment { lesson_id: String },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the host to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }

    pub fn with_message(mut self, msg: Message) -> Self {
        self.message = Some(msg);
        self
    }
}

/// Interval period of the auto-advance countdown
pub const TICK_PERIOD_MS: u32 = 1_000;

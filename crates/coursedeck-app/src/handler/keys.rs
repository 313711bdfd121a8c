//! Key event handlers for each navigation layout

use coursedeck_core::{BoundaryPolicy, Direction};

use crate::input_key::{InputKey, KeyInput};
use crate::message::Message;
use crate::state::{AppState, Layout};

/// Convert key events to messages based on the mounted layout
pub fn handle_key(state: &AppState, key: &KeyInput) -> Option<Message> {
    if !state.is_ready() {
        return None;
    }
    match state.layout? {
        Layout::Canvas => handle_key_canvas(key),
        Layout::Course => handle_key_course(state, key),
    }
}

/// Page canvas: vertical arrows step through lessons, wrapping.
///
/// Modified presses stay with the browser.
fn handle_key_canvas(key: &KeyInput) -> Option<Message> {
    if key.has_modifier() {
        return None;
    }
    match key.key {
        InputKey::Up => Some(Message::PreviousLesson),
        InputKey::Down => Some(Message::NextLesson),
        _ => None,
    }
}

/// Course interface shortcuts. Ignored while typing in a text field, and
/// for Ctrl/Cmd chords (copy must not mark a lesson complete).
fn handle_key_course(state: &AppState, key: &KeyInput) -> Option<Message> {
    if key.in_text_field || key.ctrl || key.meta {
        return None;
    }
    let wrap = |direction| Message::CourseStep {
        direction,
        policy: BoundaryPolicy::Wrap,
    };
    match key.key {
        InputKey::Space => Some(Message::ToggleAutoPlay),
        InputKey::Right | InputKey::Down => Some(wrap(Direction::Next)),
        InputKey::Left | InputKey::Up => Some(wrap(Direction::Previous)),
        InputKey::Char('f' | 'F') => Some(Message::ToggleFullscreen),
        InputKey::Char('c' | 'C') => Some(Message::MarkCompleted {
            id: state.active_id().to_string(),
        }),
        InputKey::Char('b' | 'B') => Some(Message::ToggleBookmark {
            id: state.active_id().to_string(),
        }),
        InputKey::Char('n' | 'N') => Some(Message::ToggleNotesPanel),
        InputKey::Esc => Some(Message::ExitImmersive),
        _ => None,
    }
}

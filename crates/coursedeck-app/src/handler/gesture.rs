//! Pointer gesture handlers
//!
//! At most one gesture holds the pointer at a time. Starting a new gesture
//! ends whatever was in flight; the host keeps its listeners installed.

use coursedeck_core::prelude::*;
use coursedeck_core::Point;

use crate::state::AppState;
use crate::surface::Cursor;

use super::{UpdateAction, UpdateResult};

fn capture(cursor: Cursor) -> UpdateResult {
    UpdateResult::action(UpdateAction::CapturePointer { cursor })
}

pub fn handle_frame_drag_start(state: &mut AppState, pointer: Point) -> UpdateResult {
    state.end_gestures();
    state.frame.begin_drag(pointer);
    trace!(?pointer, "Frame drag started");
    capture(Cursor::Grabbing)
}

pub fn handle_frame_resize_start(state: &mut AppState, pointer: Point) -> UpdateResult {
    state.end_gestures();
    state.frame.begin_resize(pointer);
    trace!(?pointer, "Frame resize started");
    capture(Cursor::NwResize)
}

pub fn handle_frame_reset(state: &mut AppState) -> UpdateResult {
    let was_active = state.frame.is_active();
    state.frame.reset();
    if was_active && state.pointer_cursor().is_none() {
        UpdateResult::action(UpdateAction::ReleasePointer)
    } else {
        UpdateResult::none()
    }
}

pub fn handle_dock_drag_start(state: &mut AppState, y: f64) -> UpdateResult {
    state.end_gestures();
    state.dock.begin_drag(y);
    capture(Cursor::Grabbing)
}

pub fn handle_list_resize_start(state: &mut AppState, x: f64) -> UpdateResult {
    if !state.course.list_pane.is_open() {
        return UpdateResult::none();
    }
    state.end_gestures();
    state.course.list_pane.begin_resize(x);
    capture(Cursor::ColResize)
}

/// Feed a document pointer move to whichever gesture is active.
pub fn handle_pointer_moved(state: &mut AppState, pointer: Point) -> UpdateResult {
    // Idle gestures ignore the move.
    state.frame.pointer_moved(pointer);
    state.dock.pointer_moved(pointer.y);
    state.course.list_pane.pointer_moved(pointer.x);
    UpdateResult::none()
}

pub fn handle_pointer_released(state: &mut AppState) -> UpdateResult {
    if state.end_gestures() {
        trace!("Gesture ended");
        UpdateResult::action(UpdateAction::ReleasePointer)
    } else {
        UpdateResult::none()
    }
}

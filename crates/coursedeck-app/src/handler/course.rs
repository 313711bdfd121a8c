//! Course interface handlers: lifecycle, navigation steps, progress and
//! auto-advance.

use coursedeck_core::prelude::*;
use coursedeck_core::{BoundaryPolicy, Direction};

use crate::course::Tick;
use crate::message::Message;
use crate::state::{AppState, Layout};

use super::{UpdateAction, UpdateResult, TICK_PERIOD_MS};

// ─────────────────────────────────────────────────────────
// Layout lifecycle
// ─────────────────────────────────────────────────────────

pub fn handle_layout_mounted(state: &mut AppState, layout: Layout, now_ms: u64) -> UpdateResult {
    if state.layout == Some(Layout::Course) && layout != Layout::Course {
        // Route swap without an unmount notification
        state.course.unmount(now_ms);
    }
    state.layout = Some(layout);
    info!(?layout, "Layout mounted");
    if layout == Layout::Course && !state.course.is_mounted() {
        let id = state.active_id().to_string();
        state.course.mount(&id, now_ms);
    }
    UpdateResult::none()
}

pub fn handle_layout_unmounted(state: &mut AppState, layout: Layout, now_ms: u64) -> UpdateResult {
    if state.layout == Some(layout) {
        state.layout = None;
    }
    if layout != Layout::Course || !state.course.is_mounted() {
        return UpdateResult::none();
    }
    state.course.unmount(now_ms);
    debug!("Course interface unmounted");
    UpdateResult::action(UpdateAction::CancelTimer)
}

/// Page is going away: close the watch session, cancel timers and release
/// any gesture.
pub fn handle_teardown(state: &mut AppState, now_ms: u64) -> UpdateResult {
    info!("Tearing down");
    state.course.unmount(now_ms);
    UpdateResult::action(UpdateAction::CancelTimer).with_message(Message::PointerReleased)
}

/// A torn-down page is visible again. Reopens the watch session when the
/// course interface is still the mounted layout.
pub fn handle_resume(state: &mut AppState, now_ms: u64) -> UpdateResult {
    if state.layout == Some(Layout::Course) && !state.course.is_mounted() {
        let id = state.active_id().to_string();
        state.course.mount(&id, now_ms);
        info!(lesson = %id, "Course interface resumed");
    }
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────
// Navigation
// ─────────────────────────────────────────────────────────

/// Wrapping root navigation (canvas arrows).
pub fn handle_wrap_step(state: &mut AppState, direction: Direction, now_ms: u64) -> UpdateResult {
    if let Some(index) = state.nav.neighbor(direction, BoundaryPolicy::Wrap) {
        state.select_index(index, now_ms);
    }
    UpdateResult::none()
}

/// A manual step from the course interface. Stepping forward while
/// auto-advance is on restarts the countdown.
pub fn handle_course_step(
    state: &mut AppState,
    direction: Direction,
    policy: BoundaryPolicy,
    now_ms: u64,
) -> UpdateResult {
    let Some(index) = state.nav.neighbor(direction, policy) else {
        return UpdateResult::none();
    };
    state.select_index(index, now_ms);
    if direction == Direction::Next && state.course.auto_advance.is_enabled() {
        return restart_countdown(state);
    }
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────
// Progress
// ─────────────────────────────────────────────────────────

/// Progress is only recorded for lessons in the registry.
fn registered(state: &AppState, id: &str) -> Result<()> {
    match state.nav.index_of(id) {
        Some(_) => Ok(()),
        None => Err(Error::unknown_lesson(id)),
    }
}

pub fn handle_mark_completed(state: &mut AppState, id: &str) -> UpdateResult {
    if registered(state, id).context("Ignoring completion").is_ok() {
        state.course.mark_completed(id);
    }
    UpdateResult::none()
}

pub fn handle_toggle_bookmark(state: &mut AppState, id: &str) -> UpdateResult {
    if registered(state, id).context("Ignoring bookmark").is_ok() {
        state.course.toggle_bookmark(id);
    }
    UpdateResult::none()
}

pub fn handle_set_notes(state: &mut AppState, text: &str) -> UpdateResult {
    let id = state.active_id().to_string();
    state.course.set_notes(&id, text);
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────
// Auto-advance
// ─────────────────────────────────────────────────────────

fn restart_countdown(state: &mut AppState) -> UpdateResult {
    let delay = state.course.settings().auto_advance_secs;
    state.course.auto_advance.start(delay);
    UpdateResult::action(UpdateAction::ArmTimer {
        period_ms: TICK_PERIOD_MS,
    })
}

fn stop_countdown(state: &mut AppState) -> UpdateResult {
    state.course.auto_advance.stop();
    UpdateResult::action(UpdateAction::CancelTimer)
}

/// Toolbar switch. Turning it off cancels any countdown.
pub fn handle_set_auto_advance(state: &mut AppState, enabled: bool) -> UpdateResult {
    state.course.auto_advance.set_enabled(enabled);
    debug!(enabled, "Auto-advance set");
    if enabled {
        UpdateResult::none()
    } else {
        UpdateResult::action(UpdateAction::CancelTimer)
    }
}

/// Toolbar play/pause: starts a countdown, enabling auto-advance if needed.
pub fn handle_play_pause(state: &mut AppState) -> UpdateResult {
    if state.course.auto_advance.is_playing() {
        return stop_countdown(state);
    }
    state.course.auto_advance.set_enabled(true);
    restart_countdown(state)
}

/// Space: pause or resume the countdown. Does nothing while auto-advance
/// is disabled.
pub fn handle_toggle_auto_play(state: &mut AppState) -> UpdateResult {
    if !state.course.auto_advance.is_enabled() {
        return UpdateResult::none();
    }
    if state.course.auto_advance.is_playing() {
        stop_countdown(state)
    } else {
        restart_countdown(state)
    }
}

pub fn handle_auto_advance_tick(state: &mut AppState, now_ms: u64) -> UpdateResult {
    if !state.course.is_mounted() {
        return stop_countdown(state);
    }
    match state.course.auto_advance.tick() {
        Tick::Counting(remaining) => {
            trace!(remaining, "Auto-advance countdown");
            UpdateResult::none()
        }
        Tick::Idle => UpdateResult::action(UpdateAction::CancelTimer),
        Tick::Elapsed => {
            if let Some(index) = state.nav.neighbor(Direction::Next, BoundaryPolicy::Wrap) {
                state.select_index(index, now_ms);
            }
            if state.course.auto_advance.is_enabled() {
                restart_countdown(state)
            } else {
                UpdateResult::action(UpdateAction::CancelTimer)
            }
        }
    }
}

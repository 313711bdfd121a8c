//! Main update function - handles state transitions (TEA pattern)
//!
//! Handler implementations live in:
//! - `gesture`: slide frame, dock and list-pane pointer gestures
//! - `course`: layout lifecycle, stepping, progress and auto-advance

use coursedeck_core::prelude::*;
use coursedeck_core::Direction;

use crate::message::Message;
use crate::state::AppState;

use super::{course, gesture, keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
///
/// Messages arriving before hydration are dropped: nothing may read or
/// write persisted state until the stored values are known.
pub fn update(state: &mut AppState, message: Message, now_ms: u64) -> UpdateResult {
    if !state.is_ready() {
        trace!(?message, "Dropped before hydration");
        return UpdateResult::none();
    }

    match message {
        Message::Key(key) => {
            if let Some(msg) = handle_key(state, &key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::LayoutMounted(layout) => course::handle_layout_mounted(state, layout, now_ms),
        Message::LayoutUnmounted(layout) => {
            course::handle_layout_unmounted(state, layout, now_ms)
        }
        Message::Teardown => course::handle_teardown(state, now_ms),
        Message::Resume => course::handle_resume(state, now_ms),

        // ─────────────────────────────────────────────────────────
        // Navigation Messages
        // ─────────────────────────────────────────────────────────
        Message::SelectLesson { id } => {
            state.select_id(&id, now_ms);
            UpdateResult::none()
        }
        Message::NextLesson => course::handle_wrap_step(state, Direction::Next, now_ms),
        Message::PreviousLesson => course::handle_wrap_step(state, Direction::Previous, now_ms),
        Message::CourseStep { direction, policy } => {
            course::handle_course_step(state, direction, policy, now_ms)
        }

        // ─────────────────────────────────────────────────────────
        // Pointer Gesture Messages
        // ─────────────────────────────────────────────────────────
        Message::FrameDragStart(pointer) => gesture::handle_frame_drag_start(state, pointer),
        Message::FrameResizeStart(pointer) => gesture::handle_frame_resize_start(state, pointer),
        Message::FrameReset => gesture::handle_frame_reset(state),
        Message::DockDragStart { y } => gesture::handle_dock_drag_start(state, y),
        Message::ToggleDockSide => {
            state.dock.toggle_side();
            UpdateResult::none()
        }
        Message::ListResizeStart { x } => gesture::handle_list_resize_start(state, x),
        Message::PointerMoved(pointer) => gesture::handle_pointer_moved(state, pointer),
        Message::PointerReleased => gesture::handle_pointer_released(state),

        // ─────────────────────────────────────────────────────────
        // Progress Messages
        // ─────────────────────────────────────────────────────────
        Message::MarkCompleted { id } => course::handle_mark_completed(state, &id),
        Message::ToggleBookmark { id } => course::handle_toggle_bookmark(state, &id),
        Message::SetNotes { text } => course::handle_set_notes(state, &text),

        // ─────────────────────────────────────────────────────────
        // Course View Messages
        // ─────────────────────────────────────────────────────────
        Message::ZoomIn => {
            state.course.zoom.zoom_in();
            UpdateResult::none()
        }
        Message::ZoomOut => {
            state.course.zoom.zoom_out();
            UpdateResult::none()
        }
        Message::ZoomReset => {
            state.course.zoom.reset();
            UpdateResult::none()
        }
        Message::ToggleFullscreen => {
            state.course.fullscreen = !state.course.fullscreen;
            UpdateResult::none()
        }
        Message::ToggleStudyMode => {
            state.course.study_mode = !state.course.study_mode;
            UpdateResult::none()
        }
        Message::ToggleNotesPanel => {
            state.course.notes_open = !state.course.notes_open;
            UpdateResult::none()
        }
        Message::ExitImmersive => {
            state.course.exit_immersive();
            UpdateResult::none()
        }
        Message::SetLessonListOpen(open) => {
            let was_resizing = state.course.list_pane.is_resizing();
            state.course.list_pane.set_open(open);
            if was_resizing && !open {
                UpdateResult::action(UpdateAction::ReleasePointer)
            } else {
                UpdateResult::none()
            }
        }
        Message::SetViewMode(mode) => {
            state.course.view_mode = mode;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Auto-Advance Messages
        // ─────────────────────────────────────────────────────────
        Message::SetAutoAdvance(enabled) => course::handle_set_auto_advance(state, enabled),
        Message::PlayPause => course::handle_play_pause(state),
        Message::ToggleAutoPlay => course::handle_toggle_auto_play(state),
        Message::AutoAdvanceTick => course::handle_auto_advance_tick(state, now_ms),
    }
}

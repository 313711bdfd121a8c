//! Tests for handler module

use super::*;
use crate::config::ViewerSettings;
use crate::input_key::{InputKey, KeyInput};
use crate::message::Message;
use crate::state::{AppState, Layout, Phase};
use crate::surface::Cursor;
use coursedeck_core::{BoundaryPolicy, Direction, Point, Size};

const LESSONS: [&str; 4] = [
    "wireframe-overview",
    "project-goals",
    "information-architecture",
    "sketching-concepts",
];

/// Hydrated state with the given layout mounted at t=0
fn ready_state(layout: Layout) -> AppState {
    let mut state = AppState::new(
        LESSONS.iter().map(|id| id.to_string()).collect(),
        ViewerSettings::default(),
    );
    state.phase = Phase::Ready;
    update(&mut state, Message::LayoutMounted(layout), 0);
    state
}

fn key(k: InputKey) -> Message {
    Message::Key(KeyInput::plain(k))
}

/// Run a message and its follow-ups, collecting actions
fn run(state: &mut AppState, msg: Message, now_ms: u64) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    let mut next = Some(msg);
    while let Some(m) = next {
        let result = update(state, m, now_ms);
        actions.extend(result.action);
        next = result.message;
    }
    actions
}

// ─────────────────────────────────────────────────────────
// Hydration gating
// ─────────────────────────────────────────────────────────

#[test]
fn test_messages_before_hydration_are_dropped() {
    let mut state = AppState::new(vec!["a".into(), "b".into()], ViewerSettings::default());

    let result = update(&mut state, Message::NextLesson, 0);

    assert!(result.message.is_none());
    assert!(result.action.is_none());
    assert_eq!(state.active_id(), "a");
}

#[test]
fn test_keys_unmapped_without_layout() {
    let mut state = AppState::new(vec!["a".into()], ViewerSettings::default());
    state.phase = Phase::Ready;
    assert_eq!(handle_key(&state, &KeyInput::plain(InputKey::Down)), None);
}

// ─────────────────────────────────────────────────────────
// Canvas keys
// ─────────────────────────────────────────────────────────

#[test]
fn test_canvas_arrow_down_wraps_past_last() {
    let mut state = ready_state(Layout::Canvas);
    state.select_index(3, 0);

    run(&mut state, key(InputKey::Down), 0);

    assert_eq!(state.active_id(), "wireframe-overview");
}

#[test]
fn test_canvas_arrow_up_wraps_before_first() {
    let mut state = ready_state(Layout::Canvas);

    run(&mut state, key(InputKey::Up), 0);

    assert_eq!(state.active_id(), "sketching-concepts");
}

#[test]
fn test_canvas_ignores_modified_arrows() {
    let state = ready_state(Layout::Canvas);
    let mut input = KeyInput::plain(InputKey::Down);
    input.alt = true;
    assert_eq!(handle_key(&state, &input), None);
}

#[test]
fn test_canvas_ignores_course_shortcuts() {
    let state = ready_state(Layout::Canvas);
    assert_eq!(handle_key(&state, &KeyInput::plain(InputKey::Char('f'))), None);
    assert_eq!(handle_key(&state, &KeyInput::plain(InputKey::Right)), None);
}

// ─────────────────────────────────────────────────────────
// Course keys
// ─────────────────────────────────────────────────────────

#[test]
fn test_course_shortcut_table() {
    let state = ready_state(Layout::Course);
    let map = |k| handle_key(&state, &KeyInput::plain(k));

    assert_eq!(map(InputKey::Space), Some(Message::ToggleAutoPlay));
    assert_eq!(
        map(InputKey::Right),
        Some(Message::CourseStep {
            direction: Direction::Next,
            policy: BoundaryPolicy::Wrap,
        })
    );
    assert_eq!(
        map(InputKey::Up),
        Some(Message::CourseStep {
            direction: Direction::Previous,
            policy: BoundaryPolicy::Wrap,
        })
    );
    assert_eq!(map(InputKey::Char('F')), Some(Message::ToggleFullscreen));
    assert_eq!(
        map(InputKey::Char('c')),
        Some(Message::MarkCompleted {
            id: "wireframe-overview".to_string()
        })
    );
    assert_eq!(
        map(InputKey::Char('b')),
        Some(Message::ToggleBookmark {
            id: "wireframe-overview".to_string()
        })
    );
    assert_eq!(map(InputKey::Char('n')), Some(Message::ToggleNotesPanel));
    assert_eq!(map(InputKey::Esc), Some(Message::ExitImmersive));
    assert_eq!(map(InputKey::Char('x')), None);
}

#[test]
fn test_course_keys_suppressed_in_text_field() {
    let state = ready_state(Layout::Course);
    let mut input = KeyInput::plain(InputKey::Char('c'));
    input.in_text_field = true;
    assert_eq!(handle_key(&state, &input), None);
}

#[test]
fn test_course_ctrl_c_is_not_complete() {
    let state = ready_state(Layout::Course);
    let mut input = KeyInput::plain(InputKey::Char('c'));
    input.ctrl = true;
    assert_eq!(handle_key(&state, &input), None);
}

#[test]
fn test_course_c_key_marks_active_lesson_complete() {
    let mut state = ready_state(Layout::Course);
    state.select_index(2, 0);

    run(&mut state, key(InputKey::Char('c')), 0);

    assert!(state.course.progress("information-architecture").completed);
    assert!(!state.course.progress("wireframe-overview").completed);
}

#[test]
fn test_escape_exits_fullscreen_and_study_mode() {
    let mut state = ready_state(Layout::Course);
    run(&mut state, Message::ToggleFullscreen, 0);
    run(&mut state, Message::ToggleStudyMode, 0);

    run(&mut state, key(InputKey::Esc), 0);

    assert!(!state.course.fullscreen);
    assert!(!state.course.study_mode);
}

// ─────────────────────────────────────────────────────────
// Course stepping
// ─────────────────────────────────────────────────────────

#[test]
fn test_toolbar_next_clamps_at_last() {
    let mut state = ready_state(Layout::Course);
    state.select_index(3, 0);

    run(
        &mut state,
        Message::CourseStep {
            direction: Direction::Next,
            policy: BoundaryPolicy::Clamp,
        },
        0,
    );

    assert_eq!(state.active_id(), "sketching-concepts");
}

#[test]
fn test_manual_next_rearms_countdown() {
    let mut state = ready_state(Layout::Course);
    run(&mut state, Message::PlayPause, 0);
    run(&mut state, Message::AutoAdvanceTick, 1_000);
    run(&mut state, Message::AutoAdvanceTick, 2_000);
    assert_eq!(state.course.auto_advance.remaining_secs(), 3);

    let actions = run(&mut state, key(InputKey::Right), 2_500);

    assert_eq!(state.active_id(), "project-goals");
    assert_eq!(state.course.auto_advance.remaining_secs(), 5);
    assert_eq!(
        actions,
        vec![UpdateAction::ArmTimer {
            period_ms: TICK_PERIOD_MS
        }]
    );
}

#[test]
fn test_select_unknown_lesson_falls_back_to_first() {
    let mut state = ready_state(Layout::Canvas);
    state.select_index(2, 0);

    run(
        &mut state,
        Message::SelectLesson {
            id: "removed-lesson".to_string(),
        },
        0,
    );

    assert_eq!(state.active_id(), "wireframe-overview");
}

// ─────────────────────────────────────────────────────────
// Auto-advance
// ─────────────────────────────────────────────────────────

fn tick_through(state: &mut AppState, seconds: u32, start_ms: u64) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    for i in 1..=seconds {
        actions.extend(run(state, Message::AutoAdvanceTick, start_ms + u64::from(i) * 1_000));
    }
    actions
}

#[test]
fn test_auto_advance_one_cycle_moves_one_lesson() {
    let mut state = ready_state(Layout::Course);

    let armed = run(&mut state, Message::PlayPause, 0);
    assert_eq!(
        armed,
        vec![UpdateAction::ArmTimer {
            period_ms: TICK_PERIOD_MS
        }]
    );

    tick_through(&mut state, 4, 0);
    assert_eq!(state.active_id(), "wireframe-overview");
    tick_through(&mut state, 1, 4_000);
    assert_eq!(state.active_id(), "project-goals");

    // Still enabled: a fresh countdown is running
    assert!(state.course.auto_advance.is_playing());
    assert_eq!(state.course.auto_advance.remaining_secs(), 5);
}

#[test]
fn test_auto_advance_wraps_from_last_to_first() {
    let mut state = ready_state(Layout::Course);
    state.select_index(3, 0);

    run(&mut state, Message::PlayPause, 0);
    tick_through(&mut state, 5, 0);

    assert_eq!(state.active_id(), "wireframe-overview");
}

#[test]
fn test_disable_cancels_countdown() {
    let mut state = ready_state(Layout::Course);
    run(&mut state, Message::PlayPause, 0);
    tick_through(&mut state, 2, 0);

    let actions = run(&mut state, Message::SetAutoAdvance(false), 2_500);

    assert_eq!(actions, vec![UpdateAction::CancelTimer]);
    assert!(!state.course.auto_advance.is_playing());
    assert_eq!(state.course.auto_advance.remaining_secs(), 0);

    // A stale tick after cancellation changes nothing
    let stale = run(&mut state, Message::AutoAdvanceTick, 3_000);
    assert_eq!(stale, vec![UpdateAction::CancelTimer]);
    assert_eq!(state.active_id(), "wireframe-overview");
}

#[test]
fn test_space_does_nothing_while_disabled() {
    let mut state = ready_state(Layout::Course);

    let actions = run(&mut state, key(InputKey::Space), 0);

    assert!(actions.is_empty());
    assert!(!state.course.auto_advance.is_playing());
}

#[test]
fn test_space_pauses_and_resumes_when_enabled() {
    let mut state = ready_state(Layout::Course);
    run(&mut state, Message::PlayPause, 0);

    let paused = run(&mut state, key(InputKey::Space), 100);
    assert_eq!(paused, vec![UpdateAction::CancelTimer]);
    assert!(state.course.auto_advance.is_enabled());
    assert!(!state.course.auto_advance.is_playing());

    let resumed = run(&mut state, key(InputKey::Space), 200);
    assert_eq!(
        resumed,
        vec![UpdateAction::ArmTimer {
            period_ms: TICK_PERIOD_MS
        }]
    );
}

#[test]
fn test_unmount_cancels_timer_and_saves_watch_time() {
    let mut state = ready_state(Layout::Course);
    run(&mut state, Message::PlayPause, 0);

    let actions = run(&mut state, Message::LayoutUnmounted(Layout::Course), 1_200);

    assert_eq!(actions, vec![UpdateAction::CancelTimer]);
    assert!(!state.course.auto_advance.is_playing());
    assert_eq!(state.course.progress("wireframe-overview").watch_time, 1_200);
    assert_eq!(state.layout, None);
}

#[test]
fn test_tick_after_unmount_does_not_advance() {
    let mut state = ready_state(Layout::Course);
    run(&mut state, Message::PlayPause, 0);
    run(&mut state, Message::LayoutUnmounted(Layout::Course), 500);

    tick_through(&mut state, 5, 500);

    assert_eq!(state.active_id(), "wireframe-overview");
}

// ─────────────────────────────────────────────────────────
// Watch time
// ─────────────────────────────────────────────────────────

#[test]
fn test_watch_time_follows_lesson_switches() {
    let mut state = ready_state(Layout::Course);

    run(
        &mut state,
        Message::SelectLesson {
            id: "project-goals".to_string(),
        },
        4_000,
    );
    run(&mut state, Message::Teardown, 10_000);

    assert_eq!(state.course.progress("wireframe-overview").watch_time, 4_000);
    assert_eq!(state.course.progress("project-goals").watch_time, 6_000);
}

#[test]
fn test_canvas_navigation_does_not_accrue_watch_time() {
    let mut state = ready_state(Layout::Canvas);
    run(&mut state, Message::NextLesson, 5_000);
    run(&mut state, Message::Teardown, 9_000);
    assert!(state.course.all_progress().is_empty());
}

#[test]
fn test_switching_layout_closes_watch_session() {
    let mut state = ready_state(Layout::Course);
    run(&mut state, Message::LayoutMounted(Layout::Canvas), 3_000);
    run(&mut state, Message::Teardown, 8_000);

    assert_eq!(state.course.progress("wireframe-overview").watch_time, 3_000);
    assert!(!state.course.is_mounted());
}

#[test]
fn test_resume_after_teardown_reopens_watch_session() {
    let mut state = ready_state(Layout::Course);
    run(&mut state, Message::Teardown, 1_000);
    run(&mut state, Message::Resume, 5_000);
    assert!(state.course.is_mounted());

    run(&mut state, key(InputKey::Right), 15_000);
    run(&mut state, key(InputKey::Right), 35_000);
    run(&mut state, Message::Teardown, 40_000);

    assert_eq!(state.active_id(), "information-architecture");
    assert_eq!(state.course.progress("wireframe-overview").watch_time, 11_000);
    assert_eq!(state.course.progress("project-goals").watch_time, 20_000);
    assert_eq!(state.course.progress("information-architecture").watch_time, 5_000);
}

#[test]
fn test_resume_keeps_auto_advance_alive() {
    let mut state = ready_state(Layout::Course);
    run(&mut state, Message::Teardown, 1_000);
    run(&mut state, Message::Resume, 2_000);

    let armed = run(&mut state, Message::PlayPause, 2_000);
    assert_eq!(armed, vec![UpdateAction::ArmTimer { period_ms: TICK_PERIOD_MS }]);

    let ticked = run(&mut state, Message::AutoAdvanceTick, 3_000);
    assert!(ticked.is_empty());
    assert!(state.course.auto_advance.is_playing());
}

#[test]
fn test_resume_outside_course_layout_does_nothing() {
    let mut state = ready_state(Layout::Canvas);
    run(&mut state, Message::Teardown, 1_000);
    run(&mut state, Message::Resume, 2_000);
    assert!(!state.course.is_mounted());

    let mut twice = ready_state(Layout::Course);
    run(&mut twice, Message::Resume, 4_000);
    run(&mut twice, Message::Teardown, 6_000);
    assert_eq!(twice.course.progress("wireframe-overview").watch_time, 6_000);
}

// ─────────────────────────────────────────────────────────
// Progress
// ─────────────────────────────────────────────────────────

#[test]
fn test_notes_saved_for_active_lesson() {
    let mut state = ready_state(Layout::Course);
    state.select_index(1, 0);

    run(
        &mut state,
        Message::SetNotes {
            text: "line1\n\nline2".to_string(),
        },
        0,
    );

    assert_eq!(
        state.course.progress("project-goals").notes,
        vec!["line1", "line2"]
    );
}

#[test]
fn test_unknown_lesson_progress_ignored() {
    let mut state = ready_state(Layout::Course);
    run(
        &mut state,
        Message::MarkCompleted {
            id: "ghost".to_string(),
        },
        0,
    );
    assert!(!state.course.all_progress().contains("ghost"));
}

// ─────────────────────────────────────────────────────────
// Gestures
// ─────────────────────────────────────────────────────────

#[test]
fn test_frame_drag_captures_and_releases_pointer() {
    let mut state = ready_state(Layout::Canvas);

    let start = run(&mut state, Message::FrameDragStart(Point::new(10.0, 10.0)), 0);
    assert_eq!(
        start,
        vec![UpdateAction::CapturePointer {
            cursor: Cursor::Grabbing
        }]
    );

    run(&mut state, Message::PointerMoved(Point::new(60.0, 40.0)), 0);
    assert_eq!(state.frame.position(), Point::new(50.0, 30.0));

    let end = run(&mut state, Message::PointerReleased, 0);
    assert_eq!(end, vec![UpdateAction::ReleasePointer]);

    // Moves after release are ignored
    run(&mut state, Message::PointerMoved(Point::new(500.0, 500.0)), 0);
    assert_eq!(state.frame.position(), Point::new(50.0, 30.0));
}

#[test]
fn test_frame_resize_respects_minimum() {
    let mut state = ready_state(Layout::Canvas);

    run(&mut state, Message::FrameResizeStart(Point::new(800.0, 500.0)), 0);
    run(&mut state, Message::PointerMoved(Point::new(0.0, 0.0)), 0);

    assert_eq!(state.frame.size(), Size::new(300.0, 200.0));
}

#[test]
fn test_release_without_gesture_is_silent() {
    let mut state = ready_state(Layout::Canvas);
    assert!(run(&mut state, Message::PointerReleased, 0).is_empty());
}

#[test]
fn test_dock_drag_clamps_offset() {
    let mut state = ready_state(Layout::Canvas);

    run(&mut state, Message::DockDragStart { y: 100.0 }, 0);
    run(&mut state, Message::PointerMoved(Point::new(0.0, 900.0)), 0);

    assert_eq!(state.dock.offset(), 200.0);
}

#[test]
fn test_new_gesture_replaces_previous() {
    let mut state = ready_state(Layout::Canvas);
    run(&mut state, Message::DockDragStart { y: 0.0 }, 0);

    run(&mut state, Message::FrameDragStart(Point::ORIGIN), 0);
    run(&mut state, Message::PointerMoved(Point::new(0.0, 50.0)), 0);

    assert_eq!(state.dock.offset(), 0.0);
    assert_eq!(state.frame.position(), Point::new(0.0, 50.0));
}

#[test]
fn test_list_resize_uses_col_resize_cursor() {
    let mut state = ready_state(Layout::Course);

    let actions = run(&mut state, Message::ListResizeStart { x: 320.0 }, 0);
    assert_eq!(
        actions,
        vec![UpdateAction::CapturePointer {
            cursor: Cursor::ColResize
        }]
    );

    run(&mut state, Message::PointerMoved(Point::new(1_000.0, 0.0)), 0);
    assert_eq!(state.course.list_pane.width(), 600.0);
}

#[test]
fn test_closing_list_mid_resize_releases_pointer() {
    let mut state = ready_state(Layout::Course);
    run(&mut state, Message::ListResizeStart { x: 320.0 }, 0);

    let actions = run(&mut state, Message::SetLessonListOpen(false), 0);

    assert_eq!(actions, vec![UpdateAction::ReleasePointer]);
}

#[test]
fn test_teardown_releases_active_gesture() {
    let mut state = ready_state(Layout::Canvas);
    run(&mut state, Message::FrameResizeStart(Point::ORIGIN), 0);

    let actions = run(&mut state, Message::Teardown, 0);

    assert_eq!(
        actions,
        vec![UpdateAction::CancelTimer, UpdateAction::ReleasePointer]
    );
    assert!(!state.frame.is_active());
}

// ─────────────────────────────────────────────────────────
// Zoom
// ─────────────────────────────────────────────────────────

#[test]
fn test_zoom_messages() {
    let mut state = ready_state(Layout::Course);
    run(&mut state, Message::ZoomIn, 0);
    run(&mut state, Message::ZoomIn, 0);
    assert_eq!(state.course.zoom.percent(), 150);
    run(&mut state, Message::ZoomReset, 0);
    assert_eq!(state.course.zoom.value(), 1.0);
}

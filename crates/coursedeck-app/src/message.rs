//! Message types for the application (TEA pattern)

use coursedeck_core::{BoundaryPolicy, Direction, Point};

use crate::course::ListViewMode;
use crate::input_key::KeyInput;
use crate::state::Layout;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Keyboard event from the document
    Key(KeyInput),

    /// A navigation layout appeared on screen
    LayoutMounted(Layout),

    /// A navigation layout left the screen
    LayoutUnmounted(Layout),

    /// The page is going away (pagehide)
    Teardown,

    /// The page came back from the back/forward cache after a teardown
    Resume,

    // ─────────────────────────────────────────────────────────
    // Navigation Messages
    // ─────────────────────────────────────────────────────────
    /// Make a lesson active by id (thumbnail click, list click)
    SelectLesson { id: String },

    /// Next lesson, wrapping past the last
    NextLesson,

    /// Previous lesson, wrapping before the first
    PreviousLesson,

    /// One step from the course interface. Toolbar buttons clamp at the
    /// ends, keyboard shortcuts wrap.
    CourseStep {
        direction: Direction,
        policy: BoundaryPolicy,
    },

    // ─────────────────────────────────────────────────────────
    // Pointer Gesture Messages
    // ─────────────────────────────────────────────────────────
    /// Pointer down on the slide frame title bar
    FrameDragStart(Point),

    /// Pointer down on the slide frame resize handle
    FrameResizeStart(Point),

    /// Put the slide frame back at its default geometry
    FrameReset,

    /// Pointer down on the thumbnail dock handle
    DockDragStart { y: f64 },

    /// Move the thumbnail dock to the other edge
    ToggleDockSide,

    /// Pointer down on the lesson-list divider
    ListResizeStart { x: f64 },

    /// Document-level pointer move while a gesture is active
    PointerMoved(Point),

    /// Document-level pointer release
    PointerReleased,

    // ─────────────────────────────────────────────────────────
    // Progress Messages
    // ─────────────────────────────────────────────────────────
    MarkCompleted { id: String },
    ToggleBookmark { id: String },

    /// Replace the active lesson's notes with the lines of `text`
    SetNotes { text: String },

    // ─────────────────────────────────────────────────────────
    // Course View Messages
    // ─────────────────────────────────────────────────────────
    ZoomIn,
    ZoomOut,
    ZoomReset,
    ToggleFullscreen,
    ToggleStudyMode,
    ToggleNotesPanel,

    /// Escape: leave fullscreen and study mode
    ExitImmersive,

    SetLessonListOpen(bool),
    SetViewMode(ListViewMode),

    // ─────────────────────────────────────────────────────────
    // Auto-Advance Messages
    // ─────────────────────────────────────────────────────────
    /// Toolbar switch: enable or disable auto-advance
    SetAutoAdvance(bool),

    /// Toolbar play/pause: start or cancel the countdown
    PlayPause,

    /// Space: pause or resume the countdown while auto-advance is enabled
    ToggleAutoPlay,

    /// One second of countdown elapsed
    AutoAdvanceTick,
}

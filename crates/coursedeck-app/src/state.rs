//! Application state (Model in TEA pattern)

use coursedeck_core::prelude::*;

use crate::config::ViewerSettings;
use crate::course::CourseState;
use crate::dock::DockState;
use crate::navigation::Navigation;
use crate::store::KeyValueStore;
use crate::surface::{Cursor, SurfaceState, SLIDE_FRAME_SCOPE};

/// Startup phase
///
/// Until hydration completes the UI shows a neutral placeholder and no
/// state is read from or written to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Hydrating,
    Ready,
}

/// Which navigation surface is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Thumbnail sidebar and draggable slide frame
    Canvas,
    /// Lesson list, toolbar and progress tracking
    Course,
}

/// Complete application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub phase: Phase,
    pub layout: Option<Layout>,
    pub settings: ViewerSettings,
    pub nav: Navigation,
    pub frame: SurfaceState,
    pub dock: DockState,
    pub course: CourseState,
}

impl AppState {
    pub fn new(lesson_ids: Vec<String>, settings: ViewerSettings) -> Self {
        Self {
            phase: Phase::Hydrating,
            layout: None,
            nav: Navigation::new(lesson_ids),
            frame: SurfaceState::new(SLIDE_FRAME_SCOPE, settings.surface.clone()),
            dock: DockState::new(settings.dock.clone()),
            course: CourseState::new(settings.course.clone()),
            settings,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.phase == Phase::Ready
    }

    pub fn active_id(&self) -> &str {
        self.nav.active_id()
    }

    /// Change the active lesson and attribute watch time. Returns true if
    /// the lesson actually changed.
    pub fn select_index(&mut self, index: usize, now_ms: u64) -> bool {
        if !self.nav.select_index(index) {
            return false;
        }
        debug!(lesson = %self.nav.active_id(), "Active lesson changed");
        let id = self.nav.active_id().to_string();
        self.course.lesson_changed(&id, now_ms);
        true
    }

    /// Like [`Self::select_index`], by id. Unknown ids select the first lesson.
    pub fn select_id(&mut self, id: &str, now_ms: u64) -> bool {
        let index = self.nav.index_of(id).unwrap_or_else(|| {
            warn!("Unknown lesson '{}', falling back to the first", id);
            0
        });
        self.select_index(index, now_ms)
    }

    /// Cursor the document should show, if any gesture holds the pointer.
    pub fn pointer_cursor(&self) -> Option<Cursor> {
        if let Some(cursor) = self.frame.cursor() {
            return Some(cursor);
        }
        if self.dock.is_dragging() {
            return Some(Cursor::Grabbing);
        }
        if self.course.list_pane.is_resizing() {
            return Some(Cursor::ColResize);
        }
        None
    }

    /// End every gesture in flight. Returns true if any was active.
    pub fn end_gestures(&mut self) -> bool {
        let frame = self.frame.end_gesture();
        let dock = self.dock.end_drag();
        let pane = self.course.list_pane.end_resize();
        frame || dock || pane
    }

    /// Persist every dirty slice under its own keys.
    pub fn flush(&mut self, store: &dyn KeyValueStore) {
        self.nav.flush(store);
        self.frame.flush(store);
        self.dock.flush(store);
        self.course.flush(store);
    }
}

//! Course interface state: progress tracker, auto-advance, zoom and panes.
//!
//! Sub-modules:
//! - `watch`: watch-time attribution across lesson switches
//! - `auto_advance`: one-second countdown to the next lesson
//! - `zoom`: content zoom factor
//! - `list_pane`: resizable lesson-list pane

pub mod auto_advance;
pub mod list_pane;
pub mod watch;
pub mod zoom;

use coursedeck_core::prelude::*;
use coursedeck_core::{parse_notes, CourseProgress, LessonProgress};

use crate::config::CourseSettings;
use crate::store::{load_json, persist_json, KeyValueStore, COURSE_PROGRESS_KEY};

pub use auto_advance::{AutoAdvance, Tick};
pub use list_pane::ListPane;
pub use watch::{WatchSpan, WatchTimer};
pub use zoom::Zoom;

/// Lesson list presentation (display only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListViewMode {
    #[default]
    Lessons,
    Modules,
}

/// State owned by the course interface while it exists.
#[derive(Debug, Clone)]
pub struct CourseState {
    settings: CourseSettings,
    progress: CourseProgress,
    watch: WatchTimer,
    pub auto_advance: AutoAdvance,
    pub zoom: Zoom,
    pub list_pane: ListPane,
    pub view_mode: ListViewMode,
    pub fullscreen: bool,
    pub study_mode: bool,
    pub notes_open: bool,
    mounted: bool,
    hydrated: bool,
    dirty: bool,
}

impl CourseState {
    pub fn new(settings: CourseSettings) -> Self {
        Self {
            zoom: Zoom::new(settings.zoom_min, settings.zoom_max, settings.zoom_step),
            list_pane: ListPane::new(
                settings.list_width,
                settings.list_min_width,
                settings.list_max_width,
            ),
            settings,
            progress: CourseProgress::new(),
            watch: WatchTimer::new(),
            auto_advance: AutoAdvance::new(),
            view_mode: ListViewMode::Lessons,
            fullscreen: false,
            study_mode: false,
            notes_open: false,
            mounted: false,
            hydrated: false,
            dirty: false,
        }
    }

    pub fn settings(&self) -> &CourseSettings {
        &self.settings
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Load saved progress and enable persistence.
    pub fn restore(&mut self, store: &dyn KeyValueStore) {
        if let Some(progress) = load_json::<CourseProgress>(store, COURSE_PROGRESS_KEY) {
            debug!("Restored progress for {} lessons", progress.len());
            self.progress = progress;
        }
        self.hydrated = true;
    }

    // ─────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────

    /// The interface appeared showing `lesson_id`.
    pub fn mount(&mut self, lesson_id: &str, now_ms: u64) {
        self.mounted = true;
        if let Some(span) = self.watch.switch_to(lesson_id, now_ms) {
            self.accrue(span);
        }
    }

    /// The interface is going away: close the open watch session and drop
    /// the ephemeral countdown. Safe to call more than once.
    pub fn unmount(&mut self, now_ms: u64) {
        if let Some(span) = self.watch.stop(now_ms) {
            self.accrue(span);
        }
        self.auto_advance.stop();
        self.mounted = false;
    }

    /// The active lesson changed while the interface is visible.
    pub fn lesson_changed(&mut self, lesson_id: &str, now_ms: u64) {
        if !self.mounted {
            return;
        }
        if let Some(span) = self.watch.switch_to(lesson_id, now_ms) {
            self.accrue(span);
        }
    }

    fn accrue(&mut self, span: WatchSpan) {
        if span.elapsed_ms == 0 {
            return;
        }
        let entry = self
            .progress
            .entry_mut(&span.lesson_id, self.settings.default_lesson_ms);
        entry.watch_time = entry.watch_time.saturating_add(span.elapsed_ms);
        self.dirty = true;
        debug!(lesson = %span.lesson_id, elapsed_ms = span.elapsed_ms, "Watch time accrued");
    }

    // ─────────────────────────────────────────────────────────
    // Progress
    // ─────────────────────────────────────────────────────────

    pub fn progress(&self, lesson_id: &str) -> LessonProgress {
        self.progress.get(lesson_id, self.settings.default_lesson_ms)
    }

    pub fn all_progress(&self) -> &CourseProgress {
        &self.progress
    }

    /// Idempotent.
    pub fn mark_completed(&mut self, lesson_id: &str) {
        let entry = self
            .progress
            .entry_mut(lesson_id, self.settings.default_lesson_ms);
        if !entry.completed {
            entry.completed = true;
            debug!(lesson = %lesson_id, "Lesson completed");
        }
        self.dirty = true;
    }

    pub fn toggle_bookmark(&mut self, lesson_id: &str) {
        let entry = self
            .progress
            .entry_mut(lesson_id, self.settings.default_lesson_ms);
        entry.bookmarked = !entry.bookmarked;
        self.dirty = true;
    }

    /// Replace the notes of `lesson_id` with the non-blank lines of `text`.
    pub fn set_notes(&mut self, lesson_id: &str, text: &str) {
        let entry = self
            .progress
            .entry_mut(lesson_id, self.settings.default_lesson_ms);
        entry.notes = parse_notes(text);
        self.dirty = true;
    }

    /// Completed lessons among `ids` and the rounded completion percent.
    pub fn completion<'a>(&self, ids: impl IntoIterator<Item = &'a str>) -> (usize, usize, u32) {
        let ids: Vec<&str> = ids.into_iter().collect();
        let total = ids.len();
        let completed = self.progress.completed_count(ids);
        let percent = if total == 0 {
            0
        } else {
            (completed as f64 / total as f64 * 100.0).round() as u32
        };
        (completed, total, percent)
    }

    // ─────────────────────────────────────────────────────────
    // View flags
    // ─────────────────────────────────────────────────────────

    /// Escape: leave fullscreen and study mode.
    pub fn exit_immersive(&mut self) {
        self.fullscreen = false;
        self.study_mode = false;
    }

    /// Write pending progress. No-op before hydration.
    pub fn flush(&mut self, store: &dyn KeyValueStore) {
        if !self.hydrated || !self.dirty {
            return;
        }
        persist_json(store, COURSE_PROGRESS_KEY, &self.progress);
        self.dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn course() -> CourseState {
        CourseState::new(CourseSettings::default())
    }

    #[test]
    fn test_watch_time_attributed_per_interval() {
        let mut c = course();
        c.mount("a", 0);
        c.lesson_changed("b", 1_000); // t1 on a
        c.lesson_changed("a", 3_500); // t2 on b

        assert_eq!(c.progress("a").watch_time, 1_000);
        assert_eq!(c.progress("b").watch_time, 2_500);

        c.unmount(4_000);
        assert_eq!(c.progress("a").watch_time, 1_500);
    }

    #[test]
    fn test_unmount_counts_final_lesson_once() {
        let mut c = course();
        c.mount("a", 0);
        c.unmount(700);
        c.unmount(9_000);
        assert_eq!(c.progress("a").watch_time, 700);
    }

    #[test]
    fn test_switches_while_unmounted_are_not_tracked() {
        let mut c = course();
        c.lesson_changed("a", 0);
        c.lesson_changed("b", 5_000);
        assert!(c.all_progress().is_empty());
    }

    #[test]
    fn test_mark_completed_idempotent() {
        let mut c = course();
        c.mark_completed("a");
        c.mark_completed("a");
        assert!(c.progress("a").completed);
        assert_eq!(c.completion(["a", "b", "c", "d"]), (1, 4, 25));
    }

    #[test]
    fn test_toggle_bookmark_flips() {
        let mut c = course();
        c.toggle_bookmark("a");
        assert!(c.progress("a").bookmarked);
        c.toggle_bookmark("a");
        assert!(!c.progress("a").bookmarked);
    }

    #[test]
    fn test_set_notes_drops_blank_lines() {
        let mut c = course();
        c.set_notes("a", "line1\n\nline2");
        assert_eq!(c.progress("a").notes, vec!["line1", "line2"]);
    }

    #[test]
    fn test_unmount_stops_countdown() {
        let mut c = course();
        c.mount("a", 0);
        c.auto_advance.set_enabled(true);
        c.auto_advance.start(5);
        c.unmount(10);
        assert!(!c.auto_advance.is_playing());
        assert!(c.auto_advance.is_enabled());
    }

    #[test]
    fn test_exit_immersive() {
        let mut c = course();
        c.fullscreen = true;
        c.study_mode = true;
        c.exit_immersive();
        assert!(!c.fullscreen && !c.study_mode);
    }

    #[test]
    fn test_restore_and_flush() {
        let store = MemoryStore::with_entries([(
            COURSE_PROGRESS_KEY,
            r#"{"a":{"completed":true,"watchTime":10,"totalTime":300000,"bookmarked":false,"notes":[]}}"#,
        )]);
        let mut c = course();
        c.restore(&store);
        assert!(c.progress("a").completed);

        c.toggle_bookmark("b");
        c.flush(&store);
        let saved: CourseProgress = load_json(&store, COURSE_PROGRESS_KEY).unwrap();
        assert!(saved.get("b", 0).bookmarked);
        assert!(saved.get("a", 0).completed);
    }

    #[test]
    fn test_restore_corrupted_progress_starts_empty() {
        let store = MemoryStore::with_entries([(COURSE_PROGRESS_KEY, "{{{")]);
        let mut c = course();
        c.restore(&store);
        assert!(c.all_progress().is_empty());
    }

    #[test]
    fn test_no_flush_before_restore() {
        let store = MemoryStore::new();
        let mut c = course();
        c.mark_completed("a");
        c.flush(&store);
        assert!(store.is_empty());
    }
}

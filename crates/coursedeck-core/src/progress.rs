//! Per-lesson learner progress and the notes text codec.
//!
//! The JSON shape matches what is stored under `courseProgress`:
//!
//! ```json
//! { "intro": { "completed": true, "watchTime": 1200, "totalTime": 300000,
//!              "bookmarked": false, "notes": ["first"] } }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Expected lesson length when nothing else is known (5 minutes).
pub const DEFAULT_LESSON_MS: u64 = 300_000;

/// Progress record for a single lesson.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonProgress {
    #[serde(default)]
    pub completed: bool,

    /// Accumulated viewing time in milliseconds
    #[serde(default)]
    pub watch_time: u64,

    /// Expected viewing time in milliseconds
    #[serde(default = "default_total_time")]
    pub total_time: u64,

    #[serde(default)]
    pub bookmarked: bool,

    #[serde(default)]
    pub notes: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

fn default_total_time() -> u64 {
    DEFAULT_LESSON_MS
}

impl Default for LessonProgress {
    fn default() -> Self {
        Self::with_total_time(DEFAULT_LESSON_MS)
    }
}

impl LessonProgress {
    pub fn with_total_time(total_time: u64) -> Self {
        Self {
            completed: false,
            watch_time: 0,
            total_time,
            bookmarked: false,
            notes: Vec::new(),
            rating: None,
        }
    }

    /// Watched share of the expected time, capped at 100.
    pub fn watch_percent(&self) -> f64 {
        if self.total_time == 0 {
            return 0.0;
        }
        (self.watch_time as f64 / self.total_time as f64 * 100.0).min(100.0)
    }

    /// Expected duration rounded up to whole minutes.
    pub fn duration_minutes(&self) -> u64 {
        self.total_time.div_ceil(60_000)
    }
}

/// Split free text into notes, one per line, dropping blank lines.
pub fn parse_notes(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

/// Join notes back into editable text.
pub fn format_notes(notes: &[String]) -> String {
    notes.join("\n")
}

/// Progress for every visited lesson, keyed by lesson id.
///
/// Entries are created on first mutation and never removed; entries for
/// lessons that left the registry are carried along untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseProgress {
    lessons: BTreeMap<String, LessonProgress>,
}

impl CourseProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored progress for `id`, or a fresh default without recording it.
    pub fn get(&self, id: &str, default_total_time: u64) -> LessonProgress {
        self.lessons
            .get(id)
            .cloned()
            .unwrap_or_else(|| LessonProgress::with_total_time(default_total_time))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.lessons.contains_key(id)
    }

    /// Mutable entry for `id`, created with defaults on first access.
    pub fn entry_mut(&mut self, id: &str, default_total_time: u64) -> &mut LessonProgress {
        self.lessons
            .entry(id.to_string())
            .or_insert_with(|| LessonProgress::with_total_time(default_total_time))
    }

    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }

    /// Number of completed lessons among `ids`.
    pub fn completed_count<'a>(&self, ids: impl IntoIterator<Item = &'a str>) -> usize {
        ids.into_iter()
            .filter(|id| self.lessons.get(*id).is_some_and(|p| p.completed))
            .count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &LessonProgress)> {
        self.lessons.iter()
    }
}

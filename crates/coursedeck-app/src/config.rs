//! Viewer settings
//!
//! Defines `ViewerSettings` and its sections. Every field has a default, so
//! an absent or partial override under [`SETTINGS_KEY`] is always usable.

use coursedeck_core::prelude::*;
use coursedeck_core::{Point, Size, DEFAULT_LESSON_MS};
use serde::{Deserialize, Serialize};

use crate::store::{load_json, KeyValueStore, SETTINGS_KEY};

/// Tunable constants for all viewer surfaces
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ViewerSettings {
    #[serde(default)]
    pub surface: SurfaceSettings,

    #[serde(default)]
    pub thumbnail: ThumbnailSettings,

    #[serde(default)]
    pub dock: DockSettings,

    #[serde(default)]
    pub course: CourseSettings,
}

/// Slide frame surface settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SurfaceSettings {
    /// Position restored by reset
    #[serde(default)]
    pub default_position: Point,

    /// Size restored by reset
    #[serde(default = "default_surface_size")]
    pub default_size: Size,

    /// Smallest size a resize gesture can produce
    #[serde(default = "default_min_size")]
    pub min_size: Size,
}

impl Default for SurfaceSettings {
    fn default() -> Self {
        Self {
            default_position: Point::ORIGIN,
            default_size: default_surface_size(),
            min_size: default_min_size(),
        }
    }
}

fn default_surface_size() -> Size {
    Size::new(800.0, 500.0)
}

fn default_min_size() -> Size {
    Size::new(300.0, 200.0)
}

/// Thumbnail frame settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ThumbnailSettings {
    #[serde(default = "default_thumb_width")]
    pub width: f64,

    #[serde(default = "default_thumb_height")]
    pub height: f64,
}

impl Default for ThumbnailSettings {
    fn default() -> Self {
        Self {
            width: default_thumb_width(),
            height: default_thumb_height(),
        }
    }
}

impl ThumbnailSettings {
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

fn default_thumb_width() -> f64 {
    200.0
}

fn default_thumb_height() -> f64 {
    125.0
}

/// Thumbnail dock settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DockSettings {
    /// Vertical offset is clamped to `[-offset_limit, offset_limit]`
    #[serde(default = "default_offset_limit")]
    pub offset_limit: f64,
}

impl Default for DockSettings {
    fn default() -> Self {
        Self {
            offset_limit: default_offset_limit(),
        }
    }
}

fn default_offset_limit() -> f64 {
    200.0
}

/// Course interface settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CourseSettings {
    /// Countdown length before auto-advancing, in seconds
    #[serde(default = "default_auto_advance_secs")]
    pub auto_advance_secs: u32,

    /// Expected lesson length for new progress entries
    #[serde(default = "default_lesson_ms")]
    pub default_lesson_ms: u64,

    #[serde(default = "default_list_width")]
    pub list_width: f64,

    #[serde(default = "default_list_min_width")]
    pub list_min_width: f64,

    #[serde(default = "default_list_max_width")]
    pub list_max_width: f64,

    #[serde(default = "default_zoom_min")]
    pub zoom_min: f64,

    #[serde(default = "default_zoom_max")]
    pub zoom_max: f64,

    #[serde(default = "default_zoom_step")]
    pub zoom_step: f64,
}

impl Default for CourseSettings {
    fn default() -> Self {
        Self {
            auto_advance_secs: default_auto_advance_secs(),
            default_lesson_ms: default_lesson_ms(),
            list_width: default_list_width(),
            list_min_width: default_list_min_width(),
            list_max_width: default_list_max_width(),
            zoom_min: default_zoom_min(),
            zoom_max: default_zoom_max(),
            zoom_step: default_zoom_step(),
        }
    }
}

fn default_auto_advance_secs() -> u32 {
    5
}

fn default_lesson_ms() -> u64 {
    DEFAULT_LESSON_MS
}

fn default_list_width() -> f64 {
    320.0
}

fn default_list_min_width() -> f64 {
    280.0
}

fn default_list_max_width() -> f64 {
    600.0
}

fn default_zoom_min() -> f64 {
    0.25
}

fn default_zoom_max() -> f64 {
    3.0
}

fn default_zoom_step() -> f64 {
    0.25
}

impl ViewerSettings {
    /// Replace values that would break an invariant with their defaults.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        let min = self.surface.min_size;
        if !min.is_finite() || min.width <= 0.0 || min.height <= 0.0 {
            warn!("Ignoring invalid surface.min_size {:?}", min);
            self.surface.min_size = defaults.surface.min_size;
        }
        let min = self.surface.min_size;
        let size = self.surface.default_size;
        if !size.is_finite() || size.width < min.width || size.height < min.height {
            warn!("Ignoring invalid surface.default_size {:?}", size);
            self.surface.default_size = defaults.surface.default_size.grown_by(Point::ORIGIN, min);
        }

        if !(self.dock.offset_limit.is_finite() && self.dock.offset_limit >= 0.0) {
            warn!("Ignoring invalid dock.offset_limit {}", self.dock.offset_limit);
            self.dock = defaults.dock;
        }

        let course = &mut self.course;
        if course.auto_advance_secs == 0 {
            warn!("Ignoring zero course.auto_advance_secs");
            course.auto_advance_secs = defaults.course.auto_advance_secs;
        }
        if !(course.list_min_width > 0.0 && course.list_min_width <= course.list_max_width) {
            warn!("Ignoring invalid lesson list width bounds");
            course.list_min_width = defaults.course.list_min_width;
            course.list_max_width = defaults.course.list_max_width;
        }
        course.list_width = course
            .list_width
            .clamp(course.list_min_width, course.list_max_width);
        if !(course.zoom_min > 0.0 && course.zoom_min <= 1.0 && course.zoom_max >= 1.0)
            || !(course.zoom_step > 0.0)
        {
            warn!("Ignoring invalid zoom bounds");
            course.zoom_min = defaults.course.zoom_min;
            course.zoom_max = defaults.course.zoom_max;
            course.zoom_step = defaults.course.zoom_step;
        }

        self
    }
}

/// Load settings overrides from the store, falling back to defaults.
pub fn load_settings(store: &dyn KeyValueStore) -> ViewerSettings {
    match load_json::<ViewerSettings>(store, SETTINGS_KEY) {
        Some(settings) => {
            debug!("Loaded viewer settings overrides");
            settings.sanitized()
        }
        None => ViewerSettings::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_defaults() {
        let settings = ViewerSettings::default();
        assert_eq!(settings.surface.default_size, Size::new(800.0, 500.0));
        assert_eq!(settings.surface.min_size, Size::new(300.0, 200.0));
        assert_eq!(settings.thumbnail.size(), Size::new(200.0, 125.0));
        assert_eq!(settings.dock.offset_limit, 200.0);
        assert_eq!(settings.course.auto_advance_secs, 5);
        assert_eq!(settings.course.default_lesson_ms, 300_000);
        assert_eq!(settings.course.list_width, 320.0);
        assert_eq!(settings.course.zoom_step, 0.25);
    }

    #[test]
    fn test_load_settings_missing_uses_defaults() {
        let store = MemoryStore::new();
        assert_eq!(load_settings(&store), ViewerSettings::default());
    }

    #[test]
    fn test_load_settings_corrupted_uses_defaults() {
        let store = MemoryStore::with_entries([(SETTINGS_KEY, "]]]")]);
        assert_eq!(load_settings(&store), ViewerSettings::default());
    }

    #[test]
    fn test_partial_override() {
        let store = MemoryStore::with_entries([(SETTINGS_KEY, r#"{"course":{"auto_advance_secs":3}}"#)]);
        let settings = load_settings(&store);
        assert_eq!(settings.course.auto_advance_secs, 3);
        assert_eq!(settings.course.zoom_max, 3.0);
        assert_eq!(settings.surface, SurfaceSettings::default());
    }

    #[test]
    fn test_sanitize_rejects_inverted_bounds() {
        let mut settings = ViewerSettings::default();
        settings.course.list_min_width = 700.0;
        settings.course.list_max_width = 100.0;
        settings.course.zoom_step = 0.0;
        settings.course.auto_advance_secs = 0;

        let settings = settings.sanitized();
        assert_eq!(settings.course.list_min_width, 280.0);
        assert_eq!(settings.course.list_max_width, 600.0);
        assert_eq!(settings.course.zoom_step, 0.25);
        assert_eq!(settings.course.auto_advance_secs, 5);
    }

    #[test]
    fn test_sanitize_default_size_below_minimum() {
        let mut settings = ViewerSettings::default();
        settings.surface.default_size = Size::new(10.0, 10.0);
        let settings = settings.sanitized();
        assert_eq!(settings.surface.default_size, Size::new(800.0, 500.0));
    }
}

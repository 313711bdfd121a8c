//! # coursedeck-core - Core Domain Types
//!
//! Foundation crate for Coursedeck. Provides geometry, the lesson registry,
//! learner progress records and error handling.
//!
//! This crate has **zero internal dependencies** and no UI dependency -- it
//! only depends on external crates (serde, serde_json, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Geometry (`geometry`)
//! - [`Point`], [`Size`], [`SurfaceGeometry`] - Pixel geometry of surfaces
//! - [`slide_scale()`] - Uniform scale for 1280x800 content
//! - [`viewport_content_scale()`] - Course content scale for a viewport
//!
//! ### Lessons (`lesson`)
//! - [`LessonDescriptor`] - Id, title, subtitle and a content producer
//! - [`Registry`] - Ordered, non-empty lesson list
//! - [`step()`] - One navigation step under a [`BoundaryPolicy`]
//!
//! ### Progress (`progress`)
//! - [`LessonProgress`], [`CourseProgress`] - Watch time, completion, bookmarks, notes
//! - [`parse_notes()`], [`format_notes()`] - Notes text codec
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context

pub mod error;
pub mod geometry;
pub mod lesson;
pub mod progress;

/// Prelude for common imports used throughout all Coursedeck crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, trace, warn};
}

pub use error::{Error, Result, ResultExt};
pub use geometry::{
    fit_scale, slide_scale, viewport_content_scale, Point, Size, SurfaceGeometry,
    NATIVE_SLIDE_SIZE,
};
pub use lesson::{step, BoundaryPolicy, Direction, LessonDescriptor, Registry};
pub use progress::{
    format_notes, parse_notes, CourseProgress, LessonProgress, DEFAULT_LESSON_MS,
};

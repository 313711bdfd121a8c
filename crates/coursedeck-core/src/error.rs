//! Application error types with rich context

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Storage Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Persistent storage is not available")]
    StorageUnavailable,

    #[error("Invalid value stored under '{key}': {message}")]
    InvalidValue { key: String, message: String },

    // ─────────────────────────────────────────────────────────────
    // Lesson Registry Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Unknown lesson: {id}")]
    UnknownLesson { id: String },

    #[error("Lesson registry is empty")]
    EmptyRegistry,

    #[error("Lesson id registered twice: {id}")]
    DuplicateLesson { id: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    pub fn invalid_value(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            key: key.into(),
            message: message.into(),
        }
    }

    pub fn unknown_lesson(id: impl Into<String>) -> Self {
        Self::UnknownLesson { id: id.into() }
    }

    pub fn duplicate_lesson(id: impl Into<String>) -> Self {
        Self::DuplicateLesson { id: id.into() }
    }

    /// Check if this is a recoverable error
    ///
    /// Every runtime failure degrades to a default state; only a broken
    /// static registry is unrecoverable.
    pub fn is_recoverable(&self) -> bool {
        !self.is_fatal()
    }

    /// Check if this error should abort startup
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::EmptyRegistry | Error::DuplicateLesson { .. })
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::warn!("{}: {}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::warn!("{}: {}", f(), err);
            err
        })
    }
}

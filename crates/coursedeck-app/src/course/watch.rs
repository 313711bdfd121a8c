//! Watch-time attribution.
//!
//! At most one viewing session is open at a time. Closing it (lesson switch
//! or teardown) yields the elapsed time for the lesson that was on screen;
//! a closed session cannot be closed again, so time is never counted twice.

/// The lesson currently being watched and since when.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Viewing {
    lesson_id: String,
    since_ms: u64,
}

/// Time that belongs to one lesson.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchSpan {
    pub lesson_id: String,
    pub elapsed_ms: u64,
}

#[derive(Debug, Clone, Default)]
pub struct WatchTimer {
    current: Option<Viewing>,
}

impl WatchTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.current.is_some()
    }

    pub fn watching(&self) -> Option<&str> {
        self.current.as_ref().map(|v| v.lesson_id.as_str())
    }

    /// Start watching `lesson_id`, closing any open session first.
    pub fn switch_to(&mut self, lesson_id: &str, now_ms: u64) -> Option<WatchSpan> {
        let closed = self.stop(now_ms);
        self.current = Some(Viewing {
            lesson_id: lesson_id.to_string(),
            since_ms: now_ms,
        });
        closed
    }

    /// Close the open session, if any.
    pub fn stop(&mut self, now_ms: u64) -> Option<WatchSpan> {
        self.current.take().map(|viewing| WatchSpan {
            elapsed_ms: now_ms.saturating_sub(viewing.since_ms),
            lesson_id: viewing.lesson_id,
        })
    }
}

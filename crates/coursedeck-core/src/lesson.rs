//! Lesson descriptors, the ordered registry, and index stepping.

use crate::error::{Error, Result};

/// One navigable unit of course content.
///
/// `R` is whatever produces the lesson's content in the frontend (a render
/// function for the web UI, `()` in tests). The registry never calls it.
#[derive(Debug, Clone)]
pub struct LessonDescriptor<R = ()> {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    pub render: R,
}

impl<R> LessonDescriptor<R> {
    /// Tooltip text: title and subtitle separated by a dash, or just the title.
    pub fn tooltip(&self) -> String {
        match self.subtitle {
            Some(subtitle) => format!("{} \u{2014} {}", self.title, subtitle),
            None => self.title.to_string(),
        }
    }
}

/// Direction of a single navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// What happens when a step would leave the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryPolicy {
    /// Past the last lesson is the first, before the first is the last.
    Wrap,
    /// Steps off either end are refused.
    Clamp,
}

/// Step `index` one position in `direction` over a registry of `len` lessons.
///
/// Returns `None` when the step is refused (`Clamp` at a boundary, or an
/// empty registry).
pub fn step(index: usize, len: usize, direction: Direction, policy: BoundaryPolicy) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let index = index.min(len - 1);
    match (direction, policy) {
        (Direction::Next, BoundaryPolicy::Wrap) => Some((index + 1) % len),
        (Direction::Previous, BoundaryPolicy::Wrap) => Some((index + len - 1) % len),
        (Direction::Next, BoundaryPolicy::Clamp) => (index + 1 < len).then_some(index + 1),
        (Direction::Previous, BoundaryPolicy::Clamp) => index.checked_sub(1),
    }
}

/// Fixed, ordered, non-empty list of lessons.
///
/// Order defines navigation sequence and the 1-based lesson numbers.
#[derive(Debug, Clone)]
pub struct Registry<R = ()> {
    lessons: Vec<LessonDescriptor<R>>,
}

impl<R> Registry<R> {
    /// Build a registry, rejecting empty lists and duplicate ids.
    pub fn new(lessons: Vec<LessonDescriptor<R>>) -> Result<Self> {
        if lessons.is_empty() {
            return Err(Error::EmptyRegistry);
        }
        for (i, lesson) in lessons.iter().enumerate() {
            if lessons[..i].iter().any(|other| other.id == lesson.id) {
                return Err(Error::duplicate_lesson(lesson.id));
            }
        }
        Ok(Self { lessons })
    }

    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }

    pub fn lessons(&self) -> &[LessonDescriptor<R>] {
        &self.lessons
    }

    pub fn get(&self, index: usize) -> Option<&LessonDescriptor<R>> {
        self.lessons.get(index)
    }

    pub fn first(&self) -> &LessonDescriptor<R> {
        &self.lessons[0]
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.lessons.iter().position(|lesson| lesson.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index_of(id).is_some()
    }

    /// Lesson for `id`, falling back to the first lesson for unknown ids.
    pub fn resolve(&self, id: &str) -> &LessonDescriptor<R> {
        self.index_of(id)
            .and_then(|index| self.lessons.get(index))
            .unwrap_or_else(|| self.first())
    }

    /// Ids in registry order.
    pub fn ids(&self) -> Vec<String> {
        self.lessons.iter().map(|lesson| lesson.id.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lesson(id: &'static str) -> LessonDescriptor {
        LessonDescriptor {
            id,
            title: id,
            subtitle: None,
            render: (),
        }
    }

    fn registry() -> Registry {
        Registry::new(vec![lesson("a"), lesson("b"), lesson("c"), lesson("d")]).unwrap()
    }

    #[test]
    fn test_wrap_next_past_last() {
        assert_eq!(step(3, 4, Direction::Next, BoundaryPolicy::Wrap), Some(0));
        assert_eq!(step(1, 4, Direction::Next, BoundaryPolicy::Wrap), Some(2));
    }

    #[test]
    fn test_wrap_previous_before_first() {
        assert_eq!(step(0, 4, Direction::Previous, BoundaryPolicy::Wrap), Some(3));
        assert_eq!(step(2, 4, Direction::Previous, BoundaryPolicy::Wrap), Some(1));
    }

    #[test]
    fn test_clamp_refuses_at_boundaries() {
        assert_eq!(step(3, 4, Direction::Next, BoundaryPolicy::Clamp), None);
        assert_eq!(step(0, 4, Direction::Previous, BoundaryPolicy::Clamp), None);
        assert_eq!(step(1, 4, Direction::Next, BoundaryPolicy::Clamp), Some(2));
        assert_eq!(step(1, 4, Direction::Previous, BoundaryPolicy::Clamp), Some(0));
    }

    #[test]
    fn test_single_lesson_wraps_to_itself() {
        assert_eq!(step(0, 1, Direction::Next, BoundaryPolicy::Wrap), Some(0));
        assert_eq!(step(0, 1, Direction::Previous, BoundaryPolicy::Wrap), Some(0));
    }

    #[test]
    fn test_empty_registry_rejected() {
        let result = Registry::<()>::new(vec![]);
        assert!(matches!(result, Err(Error::EmptyRegistry)));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = Registry::new(vec![lesson("a"), lesson("b"), lesson("a")]);
        assert!(matches!(result, Err(Error::DuplicateLesson { id }) if id == "a"));
    }

    #[test]
    fn test_resolve_falls_back_to_first() {
        let registry = registry();
        assert_eq!(registry.resolve("c").id, "c");
        assert_eq!(registry.resolve("stale-id").id, "a");
        assert_eq!(registry.resolve("").id, "a");
    }

    #[test]
    fn test_ids_keep_order() {
        assert_eq!(registry().ids(), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_tooltip() {
        let mut l = lesson("intro");
        assert_eq!(l.tooltip(), "intro");
        l.subtitle = Some("Basics");
        assert_eq!(l.tooltip(), "intro \u{2014} Basics");
    }
}

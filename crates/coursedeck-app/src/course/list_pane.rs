//! Resizable lesson-list pane (horizontal axis only).

#[derive(Debug, Clone, Copy, PartialEq)]
struct PaneDrag {
    pointer_x: f64,
    origin: f64,
}

#[derive(Debug, Clone)]
pub struct ListPane {
    open: bool,
    width: f64,
    min: f64,
    max: f64,
    drag: Option<PaneDrag>,
}

impl ListPane {
    pub fn new(width: f64, min: f64, max: f64) -> Self {
        Self {
            open: true,
            width: width.clamp(min, max),
            min,
            max,
            drag: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn set_open(&mut self, open: bool) {
        self.open = open;
        if !open {
            self.drag = None;
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn is_resizing(&self) -> bool {
        self.drag.is_some()
    }

    /// Preview scale for 1280px-wide content inside a list entry.
    pub fn preview_scale(&self) -> f64 {
        ((self.width - 32.0) / 1280.0).max(0.0)
    }

    pub fn begin_resize(&mut self, pointer_x: f64) {
        self.drag = Some(PaneDrag {
            pointer_x,
            origin: self.width,
        });
    }

    pub fn pointer_moved(&mut self, pointer_x: f64) -> bool {
        let Some(drag) = self.drag else {
            return false;
        };
        let next = (drag.origin + pointer_x - drag.pointer_x).clamp(self.min, self.max);
        if next == self.width {
            return false;
        }
        self.width = next;
        true
    }

    pub fn end_resize(&mut self) -> bool {
        self.drag.take().is_some()
    }
}

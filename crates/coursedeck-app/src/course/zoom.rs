//! Content zoom for the course viewport.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Zoom {
    value: f64,
    min: f64,
    max: f64,
    step: f64,
}

impl Zoom {
    pub const RESET: f64 = 1.0;

    pub fn new(min: f64, max: f64, step: f64) -> Self {
        Self {
            value: Self::RESET,
            min,
            max,
            step,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Whole percent for display, e.g. `125`.
    pub fn percent(&self) -> u32 {
        (self.value * 100.0).round() as u32
    }

    pub fn zoom_in(&mut self) {
        self.value = (self.value + self.step).min(self.max);
    }

    pub fn zoom_out(&mut self) {
        self.value = (self.value - self.step).max(self.min);
    }

    pub fn reset(&mut self) {
        self.value = Self::RESET;
    }
}

impl Default for Zoom {
    fn default() -> Self {
        Self::new(0.25, 3.0, 0.25)
    }
}

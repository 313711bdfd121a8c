//! Thumbnail dock: edge side and vertical offset.

use coursedeck_core::prelude::*;

use crate::config::DockSettings;
use crate::store::{persist_raw, KeyValueStore, DOCK_SIDE_KEY, DOCK_Y_KEY};

/// Viewport edge the dock is anchored to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DockSide {
    #[default]
    Left,
    Right,
}

impl DockSide {
    pub fn as_str(self) -> &'static str {
        match self {
            DockSide::Left => "left",
            DockSide::Right => "right",
        }
    }

    /// Parse a stored side. Anything but `"right"` is the left edge.
    pub fn from_stored(value: &str) -> Self {
        if value == "right" {
            DockSide::Right
        } else {
            DockSide::Left
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            DockSide::Left => DockSide::Right,
            DockSide::Right => DockSide::Left,
        }
    }
}

impl std::fmt::Display for DockSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct DockDrag {
    pointer_y: f64,
    origin: f64,
}

/// Side, offset and drag state of the thumbnail dock.
#[derive(Debug, Clone)]
pub struct DockState {
    settings: DockSettings,
    side: DockSide,
    offset: f64,
    drag: Option<DockDrag>,
    hydrated: bool,
    dirty: bool,
}

impl DockState {
    pub fn new(settings: DockSettings) -> Self {
        Self {
            settings,
            side: DockSide::Left,
            offset: 0.0,
            drag: None,
            hydrated: false,
            dirty: false,
        }
    }

    pub fn side(&self) -> DockSide {
        self.side
    }

    /// Vertical offset from the viewport's vertical center
    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    fn clamp(&self, offset: f64) -> f64 {
        let limit = self.settings.offset_limit;
        offset.clamp(-limit, limit)
    }

    /// Restore the saved side and offset, then enable persistence.
    pub fn restore(&mut self, store: &dyn KeyValueStore) {
        if let Some(side) = store.get(DOCK_SIDE_KEY) {
            self.side = DockSide::from_stored(&side);
        }
        if let Some(raw) = store.get(DOCK_Y_KEY) {
            self.offset = parse_offset(&raw)
                .context("Failed to restore dock offset")
                .map(|y| self.clamp(y))
                .unwrap_or(0.0);
        }
        self.hydrated = true;
        debug!(side = %self.side, offset = self.offset, "Dock restored");
    }

    pub fn toggle_side(&mut self) {
        self.side = self.side.flipped();
        self.dirty = true;
        debug!(side = %self.side, "Dock side toggled");
    }

    pub fn begin_drag(&mut self, pointer_y: f64) {
        self.drag = Some(DockDrag {
            pointer_y,
            origin: self.offset,
        });
    }

    /// Apply a vertical pointer move. Returns true when the offset changed.
    pub fn pointer_moved(&mut self, pointer_y: f64) -> bool {
        let Some(drag) = self.drag else {
            return false;
        };
        let next = self.clamp(drag.origin + (pointer_y - drag.pointer_y));
        if next == self.offset {
            return false;
        }
        self.offset = next;
        self.dirty = true;
        true
    }

    pub fn end_drag(&mut self) -> bool {
        self.drag.take().is_some()
    }

    /// Write pending changes. No-op before hydration.
    pub fn flush(&mut self, store: &dyn KeyValueStore) {
        if !self.hydrated || !self.dirty {
            return;
        }
        persist_raw(store, DOCK_SIDE_KEY, self.side.as_str());
        persist_raw(store, DOCK_Y_KEY, &self.offset.to_string());
        self.dirty = false;
    }
}

fn parse_offset(raw: &str) -> Result<f64> {
    match raw.trim().parse::<f64>() {
        Ok(y) if y.is_finite() => Ok(y),
        _ => Err(Error::invalid_value(DOCK_Y_KEY, format!("not a finite number: {raw:?}"))),
    }
}

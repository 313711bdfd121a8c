//! Draggable/resizable surface state.
//!
//! Position and size follow an anchor-delta rule: a gesture records the
//! pointer and the current geometry at its start, and every pointer move
//! recomputes geometry from that anchor. Position is unconstrained; size
//! never drops below the configured minimum.
//!
//! Geometry is stored under `<scope>-position` and `<scope>-size`, only after
//! [`SurfaceState::restore`] has run (hydration).

use coursedeck_core::prelude::*;
use coursedeck_core::{Point, Size, SurfaceGeometry};

use crate::config::SurfaceSettings;
use crate::store::{load_json, persist_json, KeyValueStore};

/// Key scope of the main slide frame.
pub const SLIDE_FRAME_SCOPE: &str = "slideFrame";

/// Document cursor to show while a gesture holds the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    Grabbing,
    NwResize,
    ColResize,
}

impl Cursor {
    pub fn css(self) -> &'static str {
        match self {
            Cursor::Grabbing => "grabbing",
            Cursor::NwResize => "nw-resize",
            Cursor::ColResize => "col-resize",
        }
    }
}

/// The single gesture a surface may have in flight.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Gesture {
    Drag { pointer: Point, origin: Point },
    Resize { pointer: Point, origin: Size },
}

/// Position, size and gesture state of one surface instance.
#[derive(Debug, Clone)]
pub struct SurfaceState {
    scope: String,
    settings: SurfaceSettings,
    geometry: SurfaceGeometry,
    gesture: Option<Gesture>,
    hydrated: bool,
    dirty: bool,
}

impl SurfaceState {
    pub fn new(scope: impl Into<String>, settings: SurfaceSettings) -> Self {
        let geometry = SurfaceGeometry {
            position: settings.default_position,
            size: settings.default_size,
        };
        Self {
            scope: scope.into(),
            settings,
            geometry,
            gesture: None,
            hydrated: false,
            dirty: false,
        }
    }

    pub fn geometry(&self) -> SurfaceGeometry {
        self.geometry
    }

    pub fn position(&self) -> Point {
        self.geometry.position
    }

    pub fn size(&self) -> Size {
        self.geometry.size
    }

    pub fn position_key(&self) -> String {
        format!("{}-position", self.scope)
    }

    pub fn size_key(&self) -> String {
        format!("{}-size", self.scope)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.gesture, Some(Gesture::Drag { .. }))
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self.gesture, Some(Gesture::Resize { .. }))
    }

    pub fn is_active(&self) -> bool {
        self.gesture.is_some()
    }

    /// Cursor to impose on the document while a gesture is active.
    pub fn cursor(&self) -> Option<Cursor> {
        match self.gesture? {
            Gesture::Drag { .. } => Some(Cursor::Grabbing),
            Gesture::Resize { .. } => Some(Cursor::NwResize),
        }
    }

    /// Restore geometry saved by a previous visit and enable persistence.
    ///
    /// Missing or malformed values keep the defaults; a stored size below
    /// the minimum is raised to it.
    pub fn restore(&mut self, store: &dyn KeyValueStore) {
        if let Some(position) = load_json::<Point>(store, &self.position_key()) {
            if position.x.is_finite() && position.y.is_finite() {
                self.geometry.position = position;
            }
        }
        if let Some(size) = load_json::<Size>(store, &self.size_key()) {
            if size.is_finite() {
                self.geometry.size = size.grown_by(Point::ORIGIN, self.settings.min_size);
            }
        }
        self.hydrated = true;
        debug!(scope = %self.scope, geometry = ?self.geometry, "Surface restored");
    }

    /// Start moving the surface. Replaces any gesture in flight.
    pub fn begin_drag(&mut self, pointer: Point) {
        self.gesture = Some(Gesture::Drag {
            pointer,
            origin: self.geometry.position,
        });
        debug!(scope = %self.scope, "Surface drag started");
    }

    /// Start resizing the surface. Replaces any gesture in flight.
    pub fn begin_resize(&mut self, pointer: Point) {
        self.gesture = Some(Gesture::Resize {
            pointer,
            origin: self.geometry.size,
        });
        debug!(scope = %self.scope, "Surface resize started");
    }

    /// Apply a pointer move. Returns true when geometry changed.
    pub fn pointer_moved(&mut self, pointer: Point) -> bool {
        let next = match self.gesture {
            Some(Gesture::Drag {
                pointer: anchor,
                origin,
            }) => SurfaceGeometry {
                position: origin.offset_by(pointer.delta_from(anchor)),
                ..self.geometry
            },
            Some(Gesture::Resize {
                pointer: anchor,
                origin,
            }) => SurfaceGeometry {
                size: origin.grown_by(pointer.delta_from(anchor), self.settings.min_size),
                ..self.geometry
            },
            None => return false,
        };
        self.set_geometry(next)
    }

    /// End whichever gesture is active. Returns true if one was.
    pub fn end_gesture(&mut self) -> bool {
        let was_active = self.gesture.take().is_some();
        if was_active {
            debug!(scope = %self.scope, geometry = ?self.geometry, "Surface gesture ended");
        }
        was_active
    }

    /// Back to the configured default position and size.
    pub fn reset(&mut self) -> bool {
        self.gesture = None;
        self.set_geometry(SurfaceGeometry {
            position: self.settings.default_position,
            size: self.settings.default_size,
        })
    }

    fn set_geometry(&mut self, geometry: SurfaceGeometry) -> bool {
        if geometry == self.geometry {
            return false;
        }
        self.geometry = geometry;
        self.dirty = true;
        true
    }

    /// Write pending geometry changes. No-op before hydration.
    pub fn flush(&mut self, store: &dyn KeyValueStore) {
        if !self.hydrated || !self.dirty {
            return;
        }
        persist_json(store, &self.position_key(), &self.geometry.position);
        persist_json(store, &self.size_key(), &self.geometry.size);
        self.dirty = false;
    }
}

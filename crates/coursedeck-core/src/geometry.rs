//! Pixel geometry shared by frames, surfaces and docks.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Logical resolution every lesson renders at before scaling (16:10).
pub const NATIVE_SLIDE_SIZE: Size = Size {
    width: 1280.0,
    height: 800.0,
};

/// A point or offset in CSS pixels.
///
/// Stored form is the object `{"x":..,"y":..}`; arrays are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "Fields")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise `self - other`.
    pub fn delta_from(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }

    pub fn offset_by(self, delta: Point) -> Point {
        Point::new(self.x + delta.x, self.y + delta.y)
    }
}

/// A width/height pair in CSS pixels.
///
/// Stored form is the object `{"width":..,"height":..}`; arrays are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "Fields")]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Grow by a pointer delta, never shrinking below `min` on either axis.
    pub fn grown_by(self, delta: Point, min: Size) -> Size {
        Size::new(
            (self.width + delta.x).max(min.width),
            (self.height + delta.y).max(min.height),
        )
    }

    /// Both dimensions are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.width.is_finite() && self.height.is_finite()
    }
}

/// Position and size of a movable, resizable surface.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SurfaceGeometry {
    pub position: Point,
    pub size: Size,
}

/// Uniform scale that fits `native` inside `frame` without cropping.
///
/// The smaller axis ratio wins, so content may letterbox.
pub fn fit_scale(frame: Size, native: Size) -> f64 {
    (frame.width / native.width).min(frame.height / native.height)
}

/// Scale for a frame showing content authored at [`NATIVE_SLIDE_SIZE`].
pub fn slide_scale(frame: Size) -> f64 {
    fit_scale(frame, NATIVE_SLIDE_SIZE)
}

/// Scale of course content inside a viewport of `viewport` pixels.
///
/// The content box takes 85% x 80% of the width and 80% x 60% of the height.
/// Without a known viewport the content renders at half size.
pub fn viewport_content_scale(viewport: Option<Size>) -> f64 {
    match viewport {
        Some(view) if view.is_finite() => fit_scale(
            Size::new(view.width * 0.85 * 0.8, view.height * 0.8 * 0.6),
            NATIVE_SLIDE_SIZE,
        ),
        _ => 0.5,
    }
}

/// Named numeric fields of a stored geometry object.
type Fields = BTreeMap<String, f64>;

fn field(fields: &Fields, name: &str) -> std::result::Result<f64, String> {
    fields
        .get(name)
        .copied()
        .ok_or_else(|| format!("missing field `{name}`"))
}

impl TryFrom<Fields> for Point {
    type Error = String;

    fn try_from(fields: Fields) -> std::result::Result<Self, Self::Error> {
        Ok(Point::new(field(&fields, "x")?, field(&fields, "y")?))
    }
}

impl TryFrom<Fields> for Size {
    type Error = String;

    fn try_from(fields: Fields) -> std::result::Result<Self, Self::Error> {
        Ok(Size::new(field(&fields, "width")?, field(&fields, "height")?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_reads_object_form() {
        let point: Point = serde_json::from_str(r#"{"x":12.5,"y":-4}"#).unwrap();
        assert_eq!(point, Point::new(12.5, -4.0));
        let size: Size = serde_json::from_str(r#"{"width":640,"height":400}"#).unwrap();
        assert_eq!(size, Size::new(640.0, 400.0));
    }

    #[test]
    fn test_geometry_rejects_arrays_and_partial_objects() {
        assert!(serde_json::from_str::<Point>("[5000,-4000]").is_err());
        assert!(serde_json::from_str::<Size>("[1,2]").is_err());
        assert!(serde_json::from_str::<Point>(r#"{"x":1}"#).is_err());
        assert!(serde_json::from_str::<Size>("{}").is_err());
        assert!(serde_json::from_str::<Size>("42").is_err());
    }

    #[test]
    fn test_geometry_serializes_as_object() {
        let json = serde_json::to_string(&Size::new(800.0, 500.0)).unwrap();
        assert_eq!(json, r#"{"width":800.0,"height":500.0}"#);
    }

    #[test]
    fn test_thumb_scale() {
        let scale = slide_scale(Size::new(200.0, 125.0));
        assert!((scale - 0.15625).abs() < f64::EPSILON);
    }

    #[test]
    fn test_fit_scale_letterboxes_on_narrow_axis() {
        // Wide frame: height is the limiting axis
        let scale = slide_scale(Size::new(1600.0, 400.0));
        assert_eq!(scale, 0.5);

        // Tall frame: width is the limiting axis
        let scale = slide_scale(Size::new(640.0, 2000.0));
        assert_eq!(scale, 0.5);
    }

    #[test]
    fn test_viewport_content_scale() {
        assert_eq!(viewport_content_scale(None), 0.5);
        // 1920x1080: width gives 1.02, height gives 0.648
        let scale = viewport_content_scale(Some(Size::new(1920.0, 1080.0)));
        assert!((scale - 0.648).abs() < 1e-9);
    }

    #[test]
    fn test_grown_by_respects_minimum() {
        let min = Size::new(300.0, 200.0);
        let size = Size::new(800.0, 500.0).grown_by(Point::new(-10_000.0, -10_000.0), min);
        assert_eq!(size, min);

        let size = Size::new(800.0, 500.0).grown_by(Point::new(20.0, -50.0), min);
        assert_eq!(size, Size::new(820.0, 450.0));
    }

    #[test]
    fn test_point_delta() {
        let anchor = Point::new(10.0, 20.0);
        let current = Point::new(15.0, 5.0);
        assert_eq!(current.delta_from(anchor), Point::new(5.0, -15.0));
        assert_eq!(anchor.offset_by(Point::new(5.0, -15.0)), current);
    }

    #[test]
    fn test_geometry_json_shape() {
        let json = serde_json::to_string(&Point::new(1.0, 2.0)).unwrap();
        assert_eq!(json, r#"{"x":1.0,"y":2.0}"#);

        let size: Size = serde_json::from_str(r#"{"width":800,"height":500}"#).unwrap();
        assert_eq!(size, Size::new(800.0, 500.0));
    }
}

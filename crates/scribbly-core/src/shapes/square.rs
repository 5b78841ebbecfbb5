use kurbo::{BezPath, Point, Rect, Shape};

/// Axis-aligned square of side `2 * size` centered on the point.
pub fn square(center: Point, size: f64) -> BezPath {
    Rect::from_center_size(center, (size * 2.0, size * 2.0)).to_path(0.1)
}

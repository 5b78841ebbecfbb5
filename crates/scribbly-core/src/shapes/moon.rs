use std::f64::consts::PI;

use kurbo::{BezPath, Point, Vec2};

use super::arc_to;

/// Crescent moon opening to the right.
///
/// The outer edge is the left half of a circle of radius `size`. The inner edge
/// is swept back along a smaller circle shifted right by `0.4 * size`.
pub fn moon(center: Point, size: f64) -> BezPath {
    let mut path = BezPath::new();
    arc_to(&mut path, center, size, PI / 2.0, PI * 1.5, false);
    arc_to(
        &mut path,
        center + Vec2::new(size * 0.4, 0.0),
        size * 0.8,
        PI * 1.5,
        PI / 2.0,
        true,
    );
    path.close_path();
    path
}

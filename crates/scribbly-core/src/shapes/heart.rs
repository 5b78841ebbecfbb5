use kurbo::{BezPath, Point};

/// Heart of width and height `2 * size`, vertically centered on the point.
///
/// Built from four cubic Béziers: two top lobes meeting in a notch at
/// `0.3 * height` below the top edge, and two lower curves meeting at the tip.
pub fn heart(center: Point, size: f64) -> BezPath {
    let width = size * 2.0;
    let height = size * 2.0;
    let x = center.x;
    let top = center.y - height / 2.0;
    let top_curve = height * 0.3;
    let half = width / 2.0;
    let mid = top + (height + top_curve) / 2.0;

    let mut path = BezPath::new();
    path.move_to((x, top + top_curve));
    path.curve_to((x, top), (x - half, top), (x - half, top + top_curve));
    path.curve_to((x - half, mid), (x, mid), (x, top + height));
    path.curve_to((x, mid), (x + half, mid), (x + half, top + top_curve));
    path.curve_to((x + half, top), (x, top), (x, top + top_curve));
    path.close_path();
    path
}

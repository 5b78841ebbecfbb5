use std::f64::consts::PI;

use kurbo::{BezPath, Point, Vec2};

/// Number of star points.
const POINTS: usize = 5;

/// Five-point star with outer radius `size` and inner radius `size / 2`.
///
/// Vertices alternate outer and inner, `π/5` apart, starting straight up.
pub fn star(center: Point, size: f64) -> BezPath {
    let outer = size;
    let inner = size / 2.0;
    let step = PI / POINTS as f64;
    let mut angle = -PI / 2.0;

    let mut path = BezPath::new();
    for i in 0..POINTS * 2 {
        let radius = if i % 2 == 0 { outer } else { inner };
        let vertex = center + Vec2::from_angle(angle) * radius;
        if i == 0 {
            path.move_to(vertex);
        } else {
            path.line_to(vertex);
        }
        angle += step;
    }
    path.close_path();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::PathEl;

    fn vertices(path: &BezPath) -> Vec<Point> {
        path.elements()
            .iter()
            .filter_map(|el| match el {
                PathEl::MoveTo(p) | PathEl::LineTo(p) => Some(*p),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_star_apex_points_up() {
        let pts = vertices(&star(Point::new(50.0, 50.0), 20.0));
        assert_eq!(pts.len(), 10);
        assert!((pts[0].x - 50.0).abs() < 1e-9);
        assert!((pts[0].y - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_star_radii_alternate() {
        let center = Point::new(0.0, 0.0);
        for (i, p) in vertices(&star(center, 10.0)).iter().enumerate() {
            let expected = if i % 2 == 0 { 10.0 } else { 5.0 };
            assert!((p.distance(center) - expected).abs() < 1e-9);
        }
    }
}

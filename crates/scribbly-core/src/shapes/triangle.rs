use kurbo::{BezPath, Point};

/// Equilateral triangle, apex up, side `2 * size`, vertically centered.
pub fn triangle(center: Point, size: f64) -> BezPath {
    let side = size * 2.0;
    let height = side * 3f64.sqrt() / 2.0;
    let half = height / 2.0;

    let mut path = BezPath::new();
    path.move_to((center.x, center.y - half));
    path.line_to((center.x + size, center.y + half));
    path.line_to((center.x - size, center.y + half));
    path.close_path();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Shape;

    #[test]
    fn test_triangle_dimensions() {
        let bbox = triangle(Point::new(0.0, 0.0), 10.0).bounding_box();
        assert!((bbox.width() - 20.0).abs() < 1e-9);
        assert!((bbox.height() - 10.0 * 3f64.sqrt()).abs() < 1e-9);
        assert!((bbox.center().y).abs() < 1e-9);
    }

    #[test]
    fn test_triangle_apex_up() {
        let path = triangle(Point::new(0.0, 0.0), 10.0);
        let apex = path.elements()[0].end_point().unwrap();
        assert!(apex.y < 0.0);
        assert!(apex.x.abs() < 1e-9);
    }
}

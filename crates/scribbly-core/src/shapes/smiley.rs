use std::f64::consts::PI;

use kurbo::{BezPath, Circle, Point, Shape, Vec2};

use super::{ARC_TOLERANCE, arc_to};

/// Two eyes and a crescent smile, without a face outline.
pub fn smiley(center: Point, size: f64) -> BezPath {
    let radius = size;
    let eye_radius = radius * 0.15;
    let eye_dx = radius * 0.4;
    let eye_dy = -radius * 0.2;

    let mut path = BezPath::new();
    for side in [-1.0, 1.0] {
        let eye = Circle::new(center + Vec2::new(side * eye_dx, eye_dy), eye_radius);
        path.extend(eye.path_elements(ARC_TOLERANCE));
    }

    let outer = radius * 0.6;
    let inner = outer - radius * 0.15;
    let mut mouth = BezPath::new();
    arc_to(&mut mouth, center, outer, 0.0, PI, false);
    arc_to(&mut mouth, center, inner, PI, 0.0, true);
    mouth.close_path();
    path.extend(mouth.elements().iter().copied());
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smiley_regions() {
        let path = smiley(Point::new(0.0, 0.0), 20.0);
        // Eyes.
        assert!(path.winding(Point::new(-8.0, -4.0)) != 0);
        assert!(path.winding(Point::new(8.0, -4.0)) != 0);
        // Center of the face is empty.
        assert_eq!(path.winding(Point::new(0.0, 0.0)), 0);
        // Mouth band below the center, between radii 9 and 12.
        assert!(path.winding(Point::new(0.0, 10.5)) != 0);
        assert_eq!(path.winding(Point::new(0.0, 6.0)), 0);
    }
}

use std::f64::consts::TAU;

use kurbo::{Arc, BezPath, PathEl, Point, Vec2};

/// Flattening tolerance for arc approximation, in pixels.
pub const ARC_TOLERANCE: f64 = 0.05;

/// Append a circular arc the way a 2D canvas context does.
///
/// Angles are in radians on a y-down surface, so increasing angles turn
/// clockwise on screen. When the path already has a current point a straight
/// line joins it to the arc start, otherwise a new subpath begins there.
pub fn arc_to(
    path: &mut BezPath,
    center: Point,
    radius: f64,
    start_angle: f64,
    end_angle: f64,
    anticlockwise: bool,
) {
    let start = center + Vec2::from_angle(start_angle) * radius;
    match path.elements().last() {
        None => path.move_to(start),
        Some(_) => path.line_to(start),
    }

    let sweep = arc_sweep(start_angle, end_angle, anticlockwise);
    if sweep == 0.0 || radius <= 0.0 {
        return;
    }
    let arc = Arc {
        center,
        radii: Vec2::new(radius, radius),
        start_angle,
        sweep_angle: sweep,
        x_rotation: 0.0,
    };
    for el in arc.append_iter(ARC_TOLERANCE) {
        if !matches!(el, PathEl::MoveTo(_)) {
            path.push(el);
        }
    }
}

/// Signed sweep between two angles, following canvas `arc()` rules.
fn arc_sweep(start: f64, end: f64, anticlockwise: bool) -> f64 {
    if anticlockwise {
        let delta = start - end;
        if delta >= TAU {
            -TAU
        } else {
            -delta.rem_euclid(TAU)
        }
    } else {
        let delta = end - start;
        if delta >= TAU {
            TAU
        } else {
            delta.rem_euclid(TAU)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_sweep_directions() {
        assert!((arc_sweep(0.0, PI, false) - PI).abs() < 1e-12);
        assert!((arc_sweep(PI, 0.0, true) + PI).abs() < 1e-12);
        assert!((arc_sweep(0.0, TAU, false) - TAU).abs() < 1e-12);
        // Clockwise from 270 to 90 goes the long way round through 0.
        assert!((arc_sweep(1.5 * PI, 0.5 * PI, false) - PI).abs() < 1e-12);
    }

    #[test]
    fn test_arc_starts_subpath_or_joins() {
        let mut path = BezPath::new();
        arc_to(&mut path, Point::new(10.0, 10.0), 5.0, 0.0, PI, false);
        assert!(matches!(path.elements()[0], PathEl::MoveTo(p) if (p.x - 15.0).abs() < 1e-9));

        let len = path.elements().len();
        arc_to(&mut path, Point::new(10.0, 10.0), 2.0, PI, 0.0, true);
        assert!(matches!(path.elements()[len], PathEl::LineTo(p) if (p.x - 8.0).abs() < 1e-9));
    }

    #[test]
    fn test_clockwise_half_arc_passes_below_center() {
        use kurbo::Shape;
        let mut path = BezPath::new();
        arc_to(&mut path, Point::new(0.0, 0.0), 10.0, 0.0, PI, false);
        let bbox = path.bounding_box();
        assert!((bbox.y1 - 10.0).abs() < 0.01);
        assert!(bbox.y0 > -0.01);
    }
}

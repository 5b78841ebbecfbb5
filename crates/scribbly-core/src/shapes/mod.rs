//! Stamp shapes painted by the brush.
//!
//! Every stamp is a pure function of a center point and a size that returns a
//! closed path. The brush fills that path with the surface's current fill color.

mod arc;
mod heart;
mod moon;
mod smiley;
mod square;
mod star;
mod triangle;

pub use arc::{ARC_TOLERANCE, arc_to};
pub use heart::heart;
pub use moon::moon;
pub use smiley::smiley;
pub use square::square;
pub use star::star;
pub use triangle::triangle;

use kurbo::{BezPath, Point};
use serde::{Deserialize, Serialize};

/// A stamp routine: center and size in, fillable path out.
pub type StampFn = fn(Point, f64) -> BezPath;

/// What the brush paints along a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeMode {
    /// Continuous stroked line.
    #[default]
    Line,
    Star,
    Moon,
    Heart,
    Smiley,
    Square,
    Triangle,
}

/// Stamp routines keyed by shape. `Line` has no stamp.
const STAMPS: [(ShapeMode, StampFn); 6] = [
    (ShapeMode::Star, star),
    (ShapeMode::Moon, moon),
    (ShapeMode::Heart, heart),
    (ShapeMode::Smiley, smiley),
    (ShapeMode::Square, square),
    (ShapeMode::Triangle, triangle),
];

impl ShapeMode {
    /// Every mode in toolbar order.
    pub const ALL: [ShapeMode; 7] = [
        ShapeMode::Line,
        ShapeMode::Star,
        ShapeMode::Moon,
        ShapeMode::Heart,
        ShapeMode::Smiley,
        ShapeMode::Square,
        ShapeMode::Triangle,
    ];

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            ShapeMode::Line => "Line",
            ShapeMode::Star => "Star",
            ShapeMode::Moon => "Moon",
            ShapeMode::Heart => "Heart",
            ShapeMode::Smiley => "Smiley",
            ShapeMode::Square => "Square",
            ShapeMode::Triangle => "Triangle",
        }
    }

    /// Stamp routine for this mode, or `None` for line mode.
    pub fn stamp_fn(self) -> Option<StampFn> {
        STAMPS
            .iter()
            .find(|(mode, _)| *mode == self)
            .map(|(_, f)| *f)
    }

    /// Whether this mode stamps shapes instead of stroking.
    pub fn is_stamp(self) -> bool {
        self.stamp_fn().is_some()
    }

    /// Build the stamp path at `center`.
    pub fn stamp(self, center: Point, size: f64) -> Option<BezPath> {
        self.stamp_fn().map(|f| f(center, size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Shape;

    #[test]
    fn test_every_stamp_mode_has_a_routine() {
        for mode in ShapeMode::ALL {
            assert_eq!(mode.is_stamp(), mode != ShapeMode::Line, "{mode:?}");
        }
    }

    #[test]
    fn test_line_has_no_stamp() {
        assert!(ShapeMode::Line.stamp(Point::ZERO, 10.0).is_none());
    }

    #[test]
    fn test_stamps_stay_near_center() {
        let center = Point::new(100.0, 80.0);
        for mode in ShapeMode::ALL.into_iter().filter(|m| m.is_stamp()) {
            let bbox = mode.stamp(center, 10.0).unwrap().bounding_box();
            assert!(bbox.width() > 0.0 && bbox.height() > 0.0, "{mode:?}");
            assert!(bbox.x0 >= 89.9 && bbox.x1 <= 110.1, "{mode:?} {bbox:?}");
            assert!(bbox.y0 >= 69.9 && bbox.y1 <= 90.1, "{mode:?} {bbox:?}");
        }
    }

    #[test]
    fn test_shape_mode_serde_names() {
        let json = serde_json::to_string(&ShapeMode::Smiley).unwrap();
        assert_eq!(json, "\"smiley\"");
    }
}

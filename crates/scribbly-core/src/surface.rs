//! Raster drawing surface abstraction.
//!
//! A [`Surface`] mirrors the small slice of a 2D canvas context the brush needs:
//! a mutable style block, path stroking and filling, rectangle clearing and a
//! resize that wipes both pixels and style.

use kurbo::{BezPath, Cap, Join, Rect};
use peniko::{Color, Fill};

/// Default line width of a freshly created surface.
pub const DEFAULT_LINE_WIDTH: f64 = 1.0;

/// Mutable paint state applied to subsequent stroke and fill calls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceStyle {
    /// Color used by [`Surface::stroke_path`].
    pub stroke_color: Color,
    /// Color used by [`Surface::fill_path`].
    pub fill_color: Color,
    /// Stroke width in canvas pixels.
    pub line_width: f64,
    /// Cap drawn at open path ends.
    pub line_cap: Cap,
    /// Join drawn between path segments.
    pub line_join: Join,
}

impl Default for SurfaceStyle {
    fn default() -> Self {
        Self {
            stroke_color: Color::BLACK,
            fill_color: Color::BLACK,
            line_width: DEFAULT_LINE_WIDTH,
            line_cap: Cap::Butt,
            line_join: Join::Miter,
        }
    }
}

impl SurfaceStyle {
    /// Builder: set both stroke and fill color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.stroke_color = color;
        self.fill_color = color;
        self
    }

    /// Builder: set line width.
    pub fn with_line_width(mut self, width: f64) -> Self {
        self.line_width = width;
        self
    }

    /// Builder: round caps and joins.
    pub fn rounded(mut self) -> Self {
        self.line_cap = Cap::Round;
        self.line_join = Join::Round;
        self
    }

    /// Build the kurbo stroke description for this style.
    pub fn stroke(&self) -> kurbo::Stroke {
        kurbo::Stroke::new(self.line_width)
            .with_caps(self.line_cap)
            .with_join(self.line_join)
    }
}

/// A pixel surface that can be painted with paths.
pub trait Surface {
    /// Size in pixels as `(width, height)`.
    fn size(&self) -> (u32, u32);

    /// Reallocate the surface. Content is cleared and the style resets to defaults.
    fn resize(&mut self, width: u32, height: u32);

    /// Current paint state.
    fn style(&self) -> &SurfaceStyle;

    /// Mutable paint state.
    fn style_mut(&mut self) -> &mut SurfaceStyle;

    /// Stroke a path with the current stroke color, width, cap and join.
    fn stroke_path(&mut self, path: &BezPath);

    /// Fill a path with the current fill color.
    fn fill_path(&mut self, path: &BezPath, rule: Fill);

    /// Reset every pixel inside `rect` to transparent.
    fn clear_rect(&mut self, rect: Rect);

    /// Reset the whole surface to transparent.
    fn clear(&mut self) {
        let (width, height) = self.size();
        self.clear_rect(Rect::new(0.0, 0.0, width as f64, height as f64));
    }

    /// Size as a floating point rectangle anchored at the origin.
    fn bounds(&self) -> Rect {
        let (width, height) = self.size();
        Rect::new(0.0, 0.0, width as f64, height as f64)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Recording surface used by unit tests across the crate.

    use super::*;

    /// One recorded draw call.
    #[derive(Debug, Clone)]
    pub enum Op {
        Stroke { path: BezPath, style: SurfaceStyle },
        Fill { path: BezPath, color: Color },
        Clear(Rect),
        Resize(u32, u32),
    }

    /// Surface that records operations instead of rasterizing them.
    #[derive(Debug, Default)]
    pub struct RecordingSurface {
        pub width: u32,
        pub height: u32,
        pub style: SurfaceStyle,
        pub ops: Vec<Op>,
    }

    impl RecordingSurface {
        pub fn new(width: u32, height: u32) -> Self {
            Self {
                width,
                height,
                ..Default::default()
            }
        }

        /// Bounding-box centers of every filled path, in call order.
        pub fn fill_centers(&self) -> Vec<kurbo::Point> {
            use kurbo::Shape;
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Fill { path, .. } => Some(path.bounding_box().center()),
                    _ => None,
                })
                .collect()
        }

        pub fn fill_colors(&self) -> Vec<Color> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Fill { color, .. } => Some(*color),
                    _ => None,
                })
                .collect()
        }

        pub fn strokes(&self) -> Vec<(BezPath, SurfaceStyle)> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Stroke { path, style } => Some((path.clone(), *style)),
                    _ => None,
                })
                .collect()
        }
    }

    impl Surface for RecordingSurface {
        fn size(&self) -> (u32, u32) {
            (self.width, self.height)
        }

        fn resize(&mut self, width: u32, height: u32) {
            self.width = width;
            self.height = height;
            self.style = SurfaceStyle::default();
            self.ops.push(Op::Resize(width, height));
        }

        fn style(&self) -> &SurfaceStyle {
            &self.style
        }

        fn style_mut(&mut self) -> &mut SurfaceStyle {
            &mut self.style
        }

        fn stroke_path(&mut self, path: &BezPath) {
            self.ops.push(Op::Stroke {
                path: path.clone(),
                style: self.style,
            });
        }

        fn fill_path(&mut self, path: &BezPath, _rule: Fill) {
            self.ops.push(Op::Fill {
                path: path.clone(),
                color: self.style.fill_color,
            });
        }

        fn clear_rect(&mut self, rect: Rect) {
            self.ops.push(Op::Clear(rect));
        }
    }
}

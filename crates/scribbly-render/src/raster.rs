//! CPU raster surface.
//!
//! Backed by a [`tiny_skia::Pixmap`]. Paths are converted from kurbo and drawn
//! anti-aliased. Pixel data is stored premultiplied.

use kurbo::{BezPath, Cap, Join, PathEl, Point, Rect};
use peniko::{Color, Fill};
use scribbly_core::surface::{Surface, SurfaceStyle};
use tiny_skia::{
    BlendMode, FillRule, LineCap, LineJoin, Paint, PathBuilder, Pixmap, Transform,
};

/// An RGBA8 pixel buffer implementing [`Surface`].
#[derive(Debug, Clone)]
pub struct RasterSurface {
    width: u32,
    height: u32,
    /// `None` while either dimension is zero.
    pixmap: Option<Pixmap>,
    style: SurfaceStyle,
    /// Bumped on every pixel mutation.
    generation: u64,
}

impl RasterSurface {
    /// Create a transparent surface.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixmap: Pixmap::new(width, height),
            style: SurfaceStyle::default(),
            generation: 0,
        }
    }

    /// Raw premultiplied pixel data, row-major, four bytes per pixel.
    pub fn rgba(&self) -> &[u8] {
        self.pixmap.as_ref().map_or(&[], |pixmap| pixmap.data())
    }

    /// Straight-alpha pixel at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let color = self.pixmap.as_ref()?.pixel(x, y)?.demultiply();
        Some([color.red(), color.green(), color.blue(), color.alpha()])
    }

    /// Mutation counter, used to skip redundant uploads.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Draw `path` with an explicit color.
    fn fill_with(&mut self, path: &BezPath, rule: Fill, color: Color) {
        let Some(path) = to_skia_path(path) else {
            return;
        };
        let Some(pixmap) = self.pixmap.as_mut() else {
            return;
        };
        let rule = match rule {
            Fill::NonZero => FillRule::Winding,
            Fill::EvenOdd => FillRule::EvenOdd,
        };
        pixmap.fill_path(&path, &paint(color), rule, Transform::identity(), None);
        self.generation += 1;
    }
}

impl Surface for RasterSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn resize(&mut self, width: u32, height: u32) {
        log::debug!("Raster resized to {width}x{height}");
        *self = Self {
            generation: self.generation + 1,
            ..Self::new(width, height)
        };
    }

    fn style(&self) -> &SurfaceStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut SurfaceStyle {
        &mut self.style
    }

    fn stroke_path(&mut self, path: &BezPath) {
        let style = self.style;
        if is_point(path) && style.line_cap == Cap::Round {
            // Zero-length segments still leave a round dot.
            let center = path.elements()[0].end_point().unwrap_or_default();
            let radius = (style.line_width / 2.0) as f32;
            let dot = PathBuilder::from_circle(center.x as f32, center.y as f32, radius);
            if let (Some(dot), Some(pixmap)) = (dot, self.pixmap.as_mut()) {
                pixmap.fill_path(
                    &dot,
                    &paint(style.stroke_color),
                    FillRule::Winding,
                    Transform::identity(),
                    None,
                );
                self.generation += 1;
            }
            return;
        }

        let Some(path) = to_skia_path(path) else {
            return;
        };
        let Some(pixmap) = self.pixmap.as_mut() else {
            return;
        };
        pixmap.stroke_path(
            &path,
            &paint(style.stroke_color),
            &to_skia_stroke(&style),
            Transform::identity(),
            None,
        );
        self.generation += 1;
    }

    fn fill_path(&mut self, path: &BezPath, rule: Fill) {
        self.fill_with(path, rule, self.style.fill_color);
    }

    fn clear_rect(&mut self, rect: Rect) {
        let rect = rect.abs();
        let x0 = pixel_edge(rect.x0, self.width);
        let x1 = pixel_edge(rect.x1, self.width);
        let y0 = pixel_edge(rect.y0, self.height);
        let y1 = pixel_edge(rect.y1, self.height);
        let Some(area) = tiny_skia::Rect::from_ltrb(x0, y0, x1, y1) else {
            return;
        };
        let Some(pixmap) = self.pixmap.as_mut() else {
            return;
        };
        let paint = Paint {
            blend_mode: BlendMode::Clear,
            ..Paint::default()
        };
        pixmap.fill_rect(area, &paint, Transform::identity(), None);
        self.generation += 1;
    }
}

/// Anti-aliased solid paint.
fn paint(color: Color) -> Paint<'static> {
    let rgba = color.to_rgba8();
    let mut paint = Paint {
        anti_alias: true,
        ..Paint::default()
    };
    paint.set_color_rgba8(rgba.r, rgba.g, rgba.b, rgba.a);
    paint
}

fn to_skia_stroke(style: &SurfaceStyle) -> tiny_skia::Stroke {
    let stroke = style.stroke();
    tiny_skia::Stroke {
        width: stroke.width as f32,
        miter_limit: stroke.miter_limit as f32,
        line_cap: match stroke.start_cap {
            Cap::Butt => LineCap::Butt,
            Cap::Square => LineCap::Square,
            Cap::Round => LineCap::Round,
        },
        line_join: match stroke.join {
            Join::Bevel => LineJoin::Bevel,
            Join::Miter => LineJoin::Miter,
            Join::Round => LineJoin::Round,
        },
        ..tiny_skia::Stroke::default()
    }
}

/// Convert a kurbo path. `None` for empty or degenerate paths.
fn to_skia_path(path: &BezPath) -> Option<tiny_skia::Path> {
    let mut builder = PathBuilder::new();
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => builder.move_to(p.x as f32, p.y as f32),
            PathEl::LineTo(p) => builder.line_to(p.x as f32, p.y as f32),
            PathEl::QuadTo(c, p) => {
                builder.quad_to(c.x as f32, c.y as f32, p.x as f32, p.y as f32)
            }
            PathEl::CurveTo(c0, c1, p) => builder.cubic_to(
                c0.x as f32,
                c0.y as f32,
                c1.x as f32,
                c1.y as f32,
                p.x as f32,
                p.y as f32,
            ),
            PathEl::ClosePath => builder.close(),
        }
    }
    builder.finish()
}

/// First pixel whose center lies at or right of `v`, clamped to `0..=limit`.
fn pixel_edge(v: f64, limit: u32) -> f32 {
    (v - 0.5).ceil().clamp(0.0, limit as f64) as f32
}

/// Whether every point of the path is the same point.
fn is_point(path: &BezPath) -> bool {
    let mut points = path.elements().iter().filter_map(|el| el.end_point());
    match points.next() {
        Some(first) => points.all(|p: Point| p == first),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Shape;
    use scribbly_core::shapes::ShapeMode;
    use scribbly_core::{Board, ColorMode, SliderGeometry};

    const RED: [u8; 4] = [255, 0, 0, 255];

    fn red_surface() -> RasterSurface {
        let mut surface = RasterSurface::new(40, 40);
        surface.style_mut().fill_color = Color::from_rgba8(255, 0, 0, 255);
        surface.style_mut().stroke_color = Color::from_rgba8(255, 0, 0, 255);
        surface
    }

    #[test]
    fn test_fill_covers_interior_only() {
        let mut surface = red_surface();
        let rect = Rect::new(10.0, 10.0, 20.0, 20.0).to_path(0.1);
        surface.fill_path(&rect, Fill::NonZero);

        assert_eq!(surface.pixel(10, 10), Some(RED));
        assert_eq!(surface.pixel(19, 19), Some(RED));
        assert_eq!(surface.pixel(9, 15), Some([0, 0, 0, 0]));
        assert_eq!(surface.pixel(20, 15), Some([0, 0, 0, 0]));
        assert_eq!(surface.pixel(15, 20), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_partial_coverage_blends() {
        let mut surface = red_surface();
        let rect = Rect::new(10.5, 10.0, 20.0, 20.0).to_path(0.1);
        surface.fill_path(&rect, Fill::NonZero);
        let edge = surface.pixel(10, 15).unwrap();
        assert!(edge[3] > 100 && edge[3] < 160, "{edge:?}");
        assert!(edge[0] >= 250, "{edge:?}");
    }

    #[test]
    fn test_even_odd_leaves_hole() {
        let mut surface = red_surface();
        let mut path = Rect::new(5.0, 5.0, 35.0, 35.0).to_path(0.1);
        path.extend(Rect::new(15.0, 15.0, 25.0, 25.0).path_elements(0.1));

        surface.fill_path(&path, Fill::EvenOdd);
        assert_eq!(surface.pixel(20, 20), Some([0, 0, 0, 0]));
        assert_eq!(surface.pixel(8, 8), Some(RED));

        surface.fill_path(&path, Fill::NonZero);
        assert_eq!(surface.pixel(20, 20), Some(RED));
    }

    #[test]
    fn test_stroke_line() {
        let mut surface = red_surface();
        surface.style_mut().line_width = 4.0;
        let mut path = BezPath::new();
        path.move_to((5.0, 20.0));
        path.line_to((35.0, 20.0));
        surface.stroke_path(&path);

        assert_eq!(surface.pixel(20, 19), Some(RED));
        assert_eq!(surface.pixel(20, 20), Some(RED));
        assert_eq!(surface.pixel(20, 25).unwrap()[3], 0);
        // Butt caps stop at the endpoint.
        assert_eq!(surface.pixel(2, 20).unwrap()[3], 0);
    }

    #[test]
    fn test_zero_length_round_stroke_leaves_dot() {
        let mut surface = red_surface();
        let style = surface.style().with_line_width(10.0).rounded();
        *surface.style_mut() = style;
        let mut path = BezPath::new();
        path.move_to((20.0, 20.0));
        path.line_to((20.0, 20.0));
        surface.stroke_path(&path);
        assert_eq!(surface.pixel(20, 20), Some(RED));
        assert_eq!(surface.pixel(20, 30).unwrap()[3], 0);
    }

    #[test]
    fn test_clear_rect_only_touches_rect() {
        let mut surface = red_surface();
        surface.fill_path(&Rect::new(0.0, 0.0, 40.0, 40.0).to_path(0.1), Fill::NonZero);
        let before = surface.generation();
        surface.clear_rect(Rect::new(0.0, 0.0, 8.0, 40.0));

        assert_eq!(surface.pixel(0, 0).unwrap()[3], 0);
        assert_eq!(surface.pixel(7, 39).unwrap()[3], 0);
        assert_eq!(surface.pixel(8, 0), Some(RED));
        assert!(surface.generation() > before);
    }

    #[test]
    fn test_resize_clears_and_resets_style() {
        let mut surface = red_surface();
        surface.fill_path(&Rect::new(0.0, 0.0, 40.0, 40.0).to_path(0.1), Fill::NonZero);
        surface.resize(10, 5);
        assert_eq!(surface.size(), (10, 5));
        assert_eq!(surface.rgba().len(), 10 * 5 * 4);
        assert!(surface.rgba().iter().all(|b| *b == 0));
        assert_eq!(*surface.style(), SurfaceStyle::default());
    }

    #[test]
    fn test_empty_surface_ignores_drawing() {
        let mut surface = RasterSurface::new(0, 0);
        surface.style_mut().fill_color = Color::from_rgba8(255, 0, 0, 255);
        surface.fill_path(&Rect::new(0.0, 0.0, 10.0, 10.0).to_path(0.1), Fill::NonZero);
        surface.clear_rect(Rect::new(0.0, 0.0, 10.0, 10.0));
        assert!(surface.rgba().is_empty());
        assert_eq!(surface.pixel(0, 0), None);
        assert_eq!(surface.generation(), 0);

        surface.resize(4, 4);
        assert_eq!(surface.rgba().len(), 4 * 4 * 4);
    }

    #[test]
    fn test_board_resize_restores_style_on_raster() {
        let mut board = Board::new(RasterSurface::new(20, 20));
        let green = Color::from_rgba8(0, 255, 0, 255);
        board.select_color(ColorMode::Solid(green));
        board.set_brush_size(6.0);
        board.resize(30, 30);

        let style = board.surface().style();
        assert_eq!(style.stroke_color, green);
        assert!((style.line_width - 6.0).abs() < f64::EPSILON);
        assert_eq!(style.line_cap, Cap::Round);
    }

    #[test]
    fn test_slider_band_at_extremes() {
        let geometry = SliderGeometry::new(0.0, 100.0, 20.0);
        for (offset, cleared, kept) in [(0.0, 0..8, 8..40), (80.0, 32..40, 0..32)] {
            let mut board = Board::new(red_surface());
            board.select_shape(ShapeMode::Square);
            board.set_brush_size(20.0);
            board.begin(Point::new(20.0, 20.0));
            board.move_to(Point::new(20.0, 20.0));

            let band = geometry.band(offset, 40.0, 40.0).unwrap();
            board.erase_band(band);
            let surface = board.surface();
            for x in cleared.clone() {
                assert_eq!(surface.pixel(x, 20).unwrap()[3], 0, "x={x}");
            }
            for x in kept.clone() {
                assert_eq!(surface.pixel(x, 20).unwrap()[3], 255, "x={x}");
            }
        }
    }
}

//! Stroke rendering: paints one tracked segment as a line or as stamps.

use kurbo::{BezPath, Line, Point};
use peniko::Fill;
use serde::{Deserialize, Serialize};

use crate::color::{ColorMode, Hue, LINE_HUE_STEP, STAMP_HUE_STEP};
use crate::shapes::ShapeMode;
use crate::surface::Surface;

/// Default brush size (line width and stamp size).
pub const DEFAULT_BRUSH_SIZE: f64 = 10.0;

/// Smallest usable brush size.
pub const MIN_BRUSH_SIZE: f64 = 1.0;

/// User-selected brush settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrushSettings {
    pub shape: ShapeMode,
    pub color: ColorMode,
    pub size: f64,
}

impl Default for BrushSettings {
    fn default() -> Self {
        Self {
            shape: ShapeMode::Line,
            color: ColorMode::default(),
            size: DEFAULT_BRUSH_SIZE,
        }
    }
}

/// Paints segments onto a surface and owns the rainbow hue.
#[derive(Debug, Clone, Default)]
pub struct Brush {
    pub settings: BrushSettings,
    hue: Hue,
}

impl Brush {
    pub fn new(settings: BrushSettings) -> Self {
        Self {
            settings,
            hue: Hue::default(),
        }
    }

    /// Current rainbow hue.
    pub fn hue(&self) -> Hue {
        self.hue
    }

    /// Paint `segment` with the current settings.
    pub fn paint<S: Surface + ?Sized>(&mut self, surface: &mut S, segment: Line) {
        match self.settings.shape.stamp_fn() {
            None => self.paint_line(surface, segment),
            Some(stamp) => {
                for center in stamp_positions(segment, self.settings.size) {
                    if self.settings.color.is_rainbow() {
                        surface.style_mut().fill_color = self.hue.advance(STAMP_HUE_STEP).color();
                    }
                    surface.fill_path(&stamp(center, self.settings.size), Fill::NonZero);
                }
            }
        }
    }

    fn paint_line<S: Surface + ?Sized>(&mut self, surface: &mut S, segment: Line) {
        if self.settings.color.is_rainbow() {
            surface.style_mut().stroke_color = self.hue.advance(LINE_HUE_STEP).color();
        }
        let mut path = BezPath::new();
        path.move_to(segment.p0);
        path.line_to(segment.p1);
        surface.stroke_path(&path);
    }
}

/// Stamp centers along a segment.
///
/// Walks from `p0` in increments of `step` while the travelled distance stays
/// within the segment, then always ends with `p1` itself.
pub fn stamp_positions(segment: Line, step: f64) -> impl Iterator<Item = Point> {
    let dist = segment.p0.distance(segment.p1);
    let count = if step > 0.0 && dist > step {
        (dist / step).floor() as usize
    } else {
        0
    };
    (1..=count)
        .map(move |i| segment.p0.lerp(segment.p1, (i as f64 * step) / dist))
        .chain(std::iter::once(segment.p1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::testing::RecordingSurface;
    use peniko::Color;

    fn stamping(shape: ShapeMode, color: ColorMode) -> Brush {
        Brush::new(BrushSettings {
            shape,
            color,
            size: 10.0,
        })
    }

    #[test]
    fn test_square_stamps_along_vertical_segment() {
        for dist in [0.0, 5.0, 10.0, 35.0, 40.0] {
            let mut surface = RecordingSurface::new(100, 100);
            let mut brush = stamping(ShapeMode::Square, ColorMode::default());
            brush.paint(
                &mut surface,
                Line::new((10.0, 10.0), (10.0, 10.0 + dist)),
            );

            let ys: Vec<f64> = surface.fill_centers().iter().map(|p| p.y).collect();
            let mut expected: Vec<f64> = Vec::new();
            if dist > 10.0 {
                let mut y = 20.0;
                while y <= 10.0 + dist + 1e-9 {
                    expected.push(y);
                    y += 10.0;
                }
            }
            expected.push(10.0 + dist);

            assert_eq!(ys.len(), expected.len(), "dist {dist}");
            for (got, want) in ys.iter().zip(&expected) {
                assert!((got - want).abs() < 1e-9, "dist {dist}: {got} vs {want}");
            }
        }
    }

    #[test]
    fn test_stamp_gaps_never_exceed_step() {
        let segment = Line::new((3.0, 7.0), (95.0, 61.0));
        let mut previous = segment.p0;
        for p in stamp_positions(segment, 10.0) {
            assert!(previous.distance(p) <= 10.0 + 1e-9);
            previous = p;
        }
        assert_eq!(previous, segment.p1);
    }

    #[test]
    fn test_solid_line_never_touches_hue() {
        let mut surface = RecordingSurface::new(100, 100);
        let mut brush = stamping(ShapeMode::Line, ColorMode::Solid(Color::BLACK));
        for i in 0..10 {
            let x = i as f64;
            brush.paint(&mut surface, Line::new((x, 0.0), (x + 1.0, 1.0)));
        }
        assert_eq!(brush.hue().degrees(), 0);
        assert_eq!(surface.strokes().len(), 10);
    }

    #[test]
    fn test_rainbow_line_advances_five_per_move() {
        let mut surface = RecordingSurface::new(100, 100);
        let mut brush = stamping(ShapeMode::Line, ColorMode::Rainbow);
        brush.paint(&mut surface, Line::new((0.0, 0.0), (5.0, 5.0)));
        brush.paint(&mut surface, Line::new((5.0, 5.0), (9.0, 5.0)));
        assert_eq!(brush.hue().degrees(), 10);

        let strokes = surface.strokes();
        assert_eq!(strokes[1].1.stroke_color, Hue::new(10).color());
    }

    #[test]
    fn test_rainbow_stamps_advance_twenty_per_stamp() {
        let mut surface = RecordingSurface::new(100, 100);
        let mut brush = stamping(ShapeMode::Star, ColorMode::Rainbow);
        // 30px at step 10: stamps at 10, 20, 30 and the endpoint again.
        brush.paint(&mut surface, Line::new((0.0, 0.0), (30.0, 0.0)));
        assert_eq!(brush.hue().degrees(), 80);

        let colors = surface.fill_colors();
        let expected: Vec<Color> = [20, 40, 60, 80].map(|h| Hue::new(h).color()).to_vec();
        assert_eq!(colors, expected);
    }

    #[test]
    fn test_rainbow_hue_is_monotonic_within_stroke() {
        let mut surface = RecordingSurface::new(100, 100);
        let mut brush = stamping(ShapeMode::Line, ColorMode::Rainbow);
        let mut previous = brush.hue().degrees();
        let mut unwrapped = 0u32;
        for i in 0..100 {
            let x = i as f64;
            brush.paint(&mut surface, Line::new((x, 0.0), (x + 1.0, 0.0)));
            let current = brush.hue().degrees();
            let delta = (current + 360 - previous) % 360;
            assert_eq!(delta, LINE_HUE_STEP);
            unwrapped += delta as u32;
            previous = current;
        }
        assert_eq!(unwrapped, 500);
    }

    #[test]
    fn test_solid_stamps_use_surface_fill_color() {
        let red = Color::from_rgba8(255, 0, 0, 255);
        let mut surface = RecordingSurface::new(100, 100);
        surface.style.fill_color = red;
        let mut brush = stamping(ShapeMode::Heart, ColorMode::Solid(red));
        brush.paint(&mut surface, Line::new((0.0, 0.0), (0.0, 0.0)));
        assert_eq!(surface.fill_colors(), vec![red]);
        assert_eq!(brush.hue().degrees(), 0);
    }
}

//! Drawing board: ties input tracking, the brush and a surface together.

use kurbo::{Point, Rect};

use crate::brush::{Brush, BrushSettings, MIN_BRUSH_SIZE};
use crate::color::ColorMode;
use crate::input::{InputTracker, PointerSample};
use crate::shapes::ShapeMode;
use crate::surface::{Surface, SurfaceStyle};

/// Mutable drawing state driven by input events and toolbar selections.
#[derive(Debug, Clone, Default)]
pub struct DrawingState {
    pub tracker: InputTracker,
    pub brush: Brush,
}

/// The drawing board.
///
/// Owns the surface and every piece of mutable drawing state. All operations run
/// synchronously inside the event callback that triggers them.
#[derive(Debug)]
pub struct Board<S: Surface> {
    surface: S,
    state: DrawingState,
}

impl<S: Surface> Board<S> {
    /// Create a board with default settings.
    pub fn new(surface: S) -> Self {
        Self::with_settings(surface, BrushSettings::default())
    }

    /// Create a board with the given brush settings.
    pub fn with_settings(mut surface: S, settings: BrushSettings) -> Self {
        let color = match settings.color {
            ColorMode::Solid(color) => color,
            ColorMode::Rainbow => surface.style().stroke_color,
        };
        *surface.style_mut() = SurfaceStyle::default()
            .with_color(color)
            .with_line_width(settings.size)
            .rounded();
        Self {
            surface,
            state: DrawingState {
                tracker: InputTracker::new(),
                brush: Brush::new(settings),
            },
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn state(&self) -> &DrawingState {
        &self.state
    }

    pub fn settings(&self) -> &BrushSettings {
        &self.state.brush.settings
    }

    /// Whether a stroke is in progress.
    pub fn is_drawing(&self) -> bool {
        self.state.tracker.is_active()
    }

    /// Pointer-down or touch-start.
    pub fn pointer_down(&mut self, sample: &PointerSample) {
        if let Some(point) = sample.canvas_point() {
            self.begin(point);
        }
    }

    /// Pointer or touch move. Paints when a stroke is active.
    pub fn pointer_move(&mut self, sample: &PointerSample) {
        if let Some(point) = sample.canvas_point() {
            self.move_to(point);
        }
    }

    /// Pointer-up, pointer-leave, touch-end or touch-cancel.
    pub fn pointer_up(&mut self) {
        self.state.tracker.end();
    }

    /// Start a stroke at a canvas point.
    pub fn begin(&mut self, point: Point) {
        self.state.tracker.begin(point);
    }

    /// Continue the stroke to a canvas point.
    pub fn move_to(&mut self, point: Point) {
        if let Some(segment) = self.state.tracker.move_to(point) {
            self.state.brush.paint(&mut self.surface, segment);
        }
    }

    /// Select a solid color or rainbow mode.
    pub fn select_color(&mut self, mode: ColorMode) {
        if let ColorMode::Solid(color) = mode {
            let style = self.surface.style_mut();
            style.stroke_color = color;
            style.fill_color = color;
        }
        log::debug!("Color mode: {mode:?}");
        self.state.brush.settings.color = mode;
    }

    /// Select what the brush paints.
    pub fn select_shape(&mut self, shape: ShapeMode) {
        log::debug!("Shape mode: {}", shape.name());
        self.state.brush.settings.shape = shape;
    }

    /// Set the brush size, which is also the line width.
    pub fn set_brush_size(&mut self, size: f64) {
        let size = size.max(MIN_BRUSH_SIZE);
        self.state.brush.settings.size = size;
        self.surface.style_mut().line_width = size;
    }

    /// Erase everything.
    pub fn clear_all(&mut self) {
        self.surface.clear();
    }

    /// Erase a band produced by the clear slider.
    pub fn erase_band(&mut self, band: Rect) {
        self.surface.clear_rect(band);
    }

    /// Resize the surface, keeping colors, width and round caps.
    ///
    /// Resizing a raster surface wipes its content and resets its style.
    pub fn resize(&mut self, width: u32, height: u32) {
        if self.surface.size() == (width, height) {
            return;
        }
        let saved = *self.surface.style();
        self.surface.resize(width, height);
        let style = self.surface.style_mut();
        style.stroke_color = saved.stroke_color;
        style.fill_color = saved.fill_color;
        style.line_width = saved.line_width;
        *style = style.rounded();
        log::info!("Canvas resized to {width}x{height}");
    }
}

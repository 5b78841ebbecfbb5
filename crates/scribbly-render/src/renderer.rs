//! Renderer trait abstraction.

use kurbo::Size;
use peniko::Color;
use thiserror::Error;

use crate::raster::RasterSurface;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Initialization failed: {0}")]
    InitFailed(String),
    #[error("Render failed: {0}")]
    RenderFailed(String),
    #[error("Surface error: {0}")]
    Surface(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Context for a single render frame.
pub struct RenderContext<'a> {
    /// The painted canvas.
    pub raster: &'a RasterSurface,
    /// Viewport size in physical pixels.
    pub viewport_size: Size,
    /// Page color shown under transparent canvas pixels.
    pub background_color: Color,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context.
    pub fn new(raster: &'a RasterSurface, viewport_size: Size) -> Self {
        Self {
            raster,
            viewport_size,
            background_color: Color::WHITE,
        }
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }
}

/// Trait for rendering backends.
pub trait Renderer: Send + Sync {
    /// Build the scene for a frame.
    fn build_scene(&mut self, ctx: &RenderContext);

    /// Get the background color (for clearing).
    fn background_color(&self, ctx: &RenderContext) -> Color {
        ctx.background_color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_builder() {
        let raster = RasterSurface::new(4, 4);
        let ctx = RenderContext::new(&raster, Size::new(4.0, 4.0));
        assert_eq!(ctx.background_color, Color::WHITE);

        let black = RenderContext::new(&raster, Size::new(4.0, 4.0)).with_background(Color::BLACK);
        assert_eq!(black.background_color, Color::BLACK);
    }

    #[test]
    fn test_error_display() {
        let err = RendererError::Surface("lost".into());
        assert_eq!(err.to_string(), "Surface error: lost");
    }
}

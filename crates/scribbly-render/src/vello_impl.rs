//! Vello-based presenter for the raster canvas.

use std::sync::Arc;

use kurbo::{Affine, Rect};
use peniko::{Blob, Fill, ImageAlphaType, ImageData, ImageFormat};
use scribbly_core::Surface;
use vello::Scene;

use crate::raster::RasterSurface;
use crate::renderer::{RenderContext, Renderer};

/// Draws the page background and the painted raster into a Vello scene.
pub struct CanvasRenderer {
    /// The Vello scene being built.
    scene: Scene,
    /// Uploaded raster, keyed by the raster generation it was built from.
    image_cache: Option<(u64, ImageData)>,
}

impl Default for CanvasRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl CanvasRenderer {
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            image_cache: None,
        }
    }

    /// Get the built scene for rendering.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Take ownership of the scene (resets internal scene).
    pub fn take_scene(&mut self) -> Scene {
        std::mem::take(&mut self.scene)
    }

    /// Image data for the raster, rebuilt only when its pixels changed.
    fn raster_image(&mut self, raster: &RasterSurface) -> Option<ImageData> {
        let (width, height) = raster.size();
        if width == 0 || height == 0 {
            return None;
        }
        match &self.image_cache {
            Some((generation, image))
                if *generation == raster.generation()
                    && image.width == width
                    && image.height == height =>
            {
                Some(image.clone())
            }
            _ => {
                log::trace!("Uploading raster generation {}", raster.generation());
                let image = ImageData {
                    data: Blob::new(Arc::new(raster.rgba().to_vec())),
                    format: ImageFormat::Rgba8,
                    width,
                    height,
                    alpha_type: ImageAlphaType::AlphaPremultiplied,
                };
                self.image_cache = Some((raster.generation(), image.clone()));
                Some(image)
            }
        }
    }
}

impl Renderer for CanvasRenderer {
    fn build_scene(&mut self, ctx: &RenderContext) {
        self.scene.reset();

        let viewport = Rect::new(0.0, 0.0, ctx.viewport_size.width, ctx.viewport_size.height);
        self.scene.fill(
            Fill::NonZero,
            Affine::IDENTITY,
            ctx.background_color,
            None,
            &viewport,
        );

        if let Some(image) = self.raster_image(ctx.raster) {
            self.scene.draw_image(&peniko::ImageBrush::from(image), Affine::IDENTITY);
        }
    }
}

//! Scribbly Render Library
//!
//! The CPU raster surface the brush paints into, plus the presentation
//! renderer. The default presenter uses Vello for GPU compositing.

mod raster;
mod renderer;

#[cfg(feature = "vello-renderer")]
mod vello_impl;

pub use raster::RasterSurface;
pub use renderer::{RenderContext, RenderResult, Renderer, RendererError};

#[cfg(feature = "vello-renderer")]
pub use vello_impl::CanvasRenderer;

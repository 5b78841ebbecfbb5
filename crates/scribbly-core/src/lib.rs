//! Scribbly Core Library
//!
//! Platform-agnostic drawing state, brush logic and stamp geometry for the
//! Scribbly drawing surface.

pub mod brush;
pub mod canvas;
pub mod color;
pub mod fullscreen;
pub mod input;
pub mod shapes;
pub mod slider;
pub mod surface;

pub use brush::{Brush, BrushSettings, DEFAULT_BRUSH_SIZE};
pub use canvas::{Board, DrawingState};
pub use color::{ColorMode, Hue, parse_css_color, rainbow_color};
pub use fullscreen::{FullscreenError, FullscreenHost, toggle_fullscreen};
pub use input::{InputTracker, PointerSample, TouchTracker};
pub use shapes::ShapeMode;
pub use slider::{ClearSlider, SliderGeometry, SliderSample};
pub use surface::{Surface, SurfaceStyle};

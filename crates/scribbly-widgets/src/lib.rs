//! Toolbar widget components with Tailwind-inspired styling.
//!
//! - **Buttons**: toggle buttons, shape buttons, brush width buttons
//! - **Colors**: color swatches and the rainbow swatch
//! - **Slider**: the swipe-to-erase track and handle
//! - **Menu** and **Layout**: panel frames, separators, section labels

pub mod buttons;
pub mod colors;
pub mod layout;
pub mod menu;
pub mod slider;

pub use buttons::{ShapeButton, StrokeWidthButton, ToggleButton};
pub use colors::{hue_to_rgb, ColorSwatch, ColorSwatchStyle, RainbowSwatch, SelectionStyle};
pub use layout::{section_label, vertical_separator};
pub use menu::{panel_frame, toolbar_frame};
pub use slider::{SliderTrack, SliderTrackResponse};

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Small button size (color swatches)
    pub const SMALL: f32 = 20.0;
    /// Medium button size (toolbar buttons)
    pub const MEDIUM: f32 = 28.0;
    /// Large button size
    pub const LARGE: f32 = 36.0;
    /// Standard corner radius
    pub const CORNER_RADIUS: u8 = 4;
    /// Panel corner radius
    pub const PANEL_RADIUS: u8 = 8;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Text color (dark gray)
    pub const TEXT: Color32 = Color32::from_rgb(60, 60, 60);
    /// Muted text color
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 120, 120);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(220, 220, 220);
    /// Selection/active color (blue)
    pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
    /// Hover background
    pub const HOVER_BG: Color32 = Color32::from_rgb(245, 245, 245);
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(250, 250, 252, 250);
}

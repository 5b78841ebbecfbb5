//! Brush color modes and the rainbow hue wheel.

use peniko::Color;
use peniko::color::{AlphaColor, Hsl, Srgb, parse_color};
use serde::{Deserialize, Serialize};

/// Hue advance per line-mode move in rainbow mode, in degrees.
pub const LINE_HUE_STEP: u16 = 5;
/// Hue advance per stamped shape in rainbow mode, in degrees.
pub const STAMP_HUE_STEP: u16 = 20;

/// Default palette, as CSS color strings.
pub const DEFAULT_PALETTE: [&str; 7] = [
    "#000000", "#ef4444", "#f97316", "#eab308", "#22c55e", "#3b82f6", "#a855f7",
];

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// How the brush picks its color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "ColorModeRepr", into = "ColorModeRepr")]
pub enum ColorMode {
    /// A fixed color for strokes and stamps.
    Solid(Color),
    /// Color cycles around the hue wheel as drawing progresses.
    Rainbow,
}

impl Default for ColorMode {
    fn default() -> Self {
        Self::Solid(Color::BLACK)
    }
}

impl ColorMode {
    pub fn is_rainbow(&self) -> bool {
        matches!(self, Self::Rainbow)
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
enum ColorModeRepr {
    Solid(SerializableColor),
    Rainbow,
}

impl From<ColorModeRepr> for ColorMode {
    fn from(repr: ColorModeRepr) -> Self {
        match repr {
            ColorModeRepr::Solid(c) => Self::Solid(c.into()),
            ColorModeRepr::Rainbow => Self::Rainbow,
        }
    }
}

impl From<ColorMode> for ColorModeRepr {
    fn from(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Solid(c) => Self::Solid(c.into()),
            ColorMode::Rainbow => Self::Rainbow,
        }
    }
}

/// Position on the hue wheel, always in `0..360` degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u16", into = "u16")]
pub struct Hue(u16);

impl From<u16> for Hue {
    fn from(degrees: u16) -> Self {
        Self::new(degrees)
    }
}

impl From<Hue> for u16 {
    fn from(hue: Hue) -> Self {
        hue.0
    }
}

impl Hue {
    pub fn new(degrees: u16) -> Self {
        Self(degrees % 360)
    }

    pub fn degrees(self) -> u16 {
        self.0
    }

    /// Advance by `step` degrees, wrapping at 360.
    pub fn advance(&mut self, step: u16) -> Self {
        self.0 = (self.0 + step % 360) % 360;
        *self
    }

    /// Fully saturated, half-lightness color at this hue.
    pub fn color(self) -> Color {
        rainbow_color(self.0 as f32)
    }
}

/// `hsl(hue, 100%, 50%)` as an sRGB color.
pub fn rainbow_color(hue: f32) -> Color {
    AlphaColor::<Hsl>::new([hue, 100.0, 50.0, 1.0]).convert::<Srgb>()
}

/// Parse a CSS color string (hex, `rgb()`, named colors).
pub fn parse_css_color(color: &str) -> Option<Color> {
    parse_color(color)
        .ok()
        .map(|c| c.to_alpha_color::<Srgb>())
}

/// Parse a palette, skipping entries that are not valid CSS colors.
pub fn parse_palette<S: AsRef<str>>(entries: &[S]) -> Vec<Color> {
    entries
        .iter()
        .filter_map(|entry| {
            let entry = entry.as_ref();
            let parsed = parse_css_color(entry);
            if parsed.is_none() {
                log::warn!("Ignoring invalid palette color {entry:?}");
            }
            parsed
        })
        .collect()
}

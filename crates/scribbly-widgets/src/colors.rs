//! Color swatch components for the palette row.

use egui::{vec2, Color32, CornerRadius, CursorIcon, Pos2, Rect, Sense, Stroke, StrokeKind, Ui, Vec2};

use crate::{sizing, theme};

/// Style configuration for color swatches.
#[derive(Clone, Copy)]
pub struct ColorSwatchStyle {
    /// Swatch size
    pub size: Vec2,
    /// Whether the swatch is circular (vs rounded rect)
    pub circular: bool,
    /// Selection indicator style
    pub selection_style: SelectionStyle,
}

/// How to indicate selection on a color swatch.
#[derive(Clone, Copy, PartialEq)]
pub enum SelectionStyle {
    /// Inner offset ring
    InnerRing,
    /// Outer border
    OuterBorder,
}

impl Default for ColorSwatchStyle {
    fn default() -> Self {
        Self {
            size: vec2(sizing::SMALL, sizing::SMALL),
            circular: true,
            selection_style: SelectionStyle::InnerRing,
        }
    }
}

impl ColorSwatchStyle {
    /// Large swatch, sized for touch.
    pub fn large() -> Self {
        Self {
            size: vec2(sizing::MEDIUM, sizing::MEDIUM),
            ..Self::default()
        }
    }
}

/// A clickable color swatch.
pub struct ColorSwatch<'a> {
    color: Color32,
    tooltip: &'a str,
    selected: bool,
    style: ColorSwatchStyle,
}

impl<'a> ColorSwatch<'a> {
    /// Create a new color swatch.
    pub fn new(color: Color32, tooltip: &'a str) -> Self {
        Self {
            color,
            tooltip,
            selected: false,
            style: ColorSwatchStyle::default(),
        }
    }

    /// Set whether this swatch is selected.
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Set the style.
    pub fn style(mut self, style: ColorSwatchStyle) -> Self {
        self.style = style;
        self
    }

    /// Show the swatch and return (clicked, rect).
    pub fn show(self, ui: &mut Ui) -> (bool, Rect) {
        let (rect, response) = ui.allocate_exact_size(self.style.size, Sense::click());

        if ui.is_rect_visible(rect) {
            let center = rect.center();
            let radius = rect.width().min(rect.height()) / 2.0;
            // Light colors need an outline against the panel.
            let outline = Stroke::new(1.0, theme::BORDER);

            if self.style.circular {
                ui.painter().circle(center, radius, self.color, outline);
                if self.selected {
                    match self.style.selection_style {
                        SelectionStyle::InnerRing => ui.painter().circle_stroke(
                            center,
                            radius - 3.0,
                            Stroke::new(2.0, ring_color(self.color)),
                        ),
                        SelectionStyle::OuterBorder => ui.painter().circle_stroke(
                            center,
                            radius,
                            Stroke::new(2.0, theme::ACCENT),
                        ),
                    };
                }
            } else {
                let corner = CornerRadius::same(sizing::CORNER_RADIUS);
                ui.painter().rect_filled(rect, corner, self.color);
                let stroke = if self.selected {
                    Stroke::new(2.0, Color32::from_gray(30))
                } else {
                    outline
                };
                ui.painter().rect_stroke(rect, corner, stroke, StrokeKind::Inside);
            }
        }

        let clicked = response.clicked();
        response.on_hover_text(self.tooltip).on_hover_cursor(CursorIcon::PointingHand);
        (clicked, rect)
    }
}

/// Selection ring color that stays visible on dark swatches.
fn ring_color(fill: Color32) -> Color32 {
    let luma = 0.299 * fill.r() as f32 + 0.587 * fill.g() as f32 + 0.114 * fill.b() as f32;
    if luma < 80.0 {
        Color32::WHITE
    } else {
        Color32::from_gray(30)
    }
}

/// Swatch for rainbow mode: a hue wheel ring around the current color.
pub struct RainbowSwatch<'a> {
    color: Color32,
    tooltip: &'a str,
    selected: bool,
    size: Vec2,
}

impl<'a> RainbowSwatch<'a> {
    /// Create a new rainbow swatch showing `color` in its center.
    pub fn new(color: Color32, tooltip: &'a str) -> Self {
        Self {
            color,
            tooltip,
            selected: false,
            size: vec2(sizing::SMALL, sizing::SMALL),
        }
    }

    /// Set whether rainbow mode is active.
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Set the size.
    pub fn size(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }

    /// Show the swatch and return (clicked, rect).
    pub fn show(self, ui: &mut Ui) -> (bool, Rect) {
        let (rect, response) = ui.allocate_exact_size(self.size, Sense::click());

        if ui.is_rect_visible(rect) {
            let center = rect.center();
            let outer_radius = rect.width().min(rect.height()) / 2.0;
            let ring_width = if self.selected { 5.0 } else { 3.0 };
            let inner_radius = outer_radius - ring_width;

            let num_segments = 32;
            for i in 0..num_segments {
                let angle1 = (i as f32 / num_segments as f32) * std::f32::consts::TAU;
                let angle2 = ((i + 1) as f32 / num_segments as f32) * std::f32::consts::TAU;
                let hue_color = hue_to_rgb(i as f32 / num_segments as f32);

                let at = |radius: f32, angle: f32| {
                    Pos2::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
                };
                ui.painter().add(egui::Shape::convex_polygon(
                    vec![
                        at(outer_radius, angle1),
                        at(outer_radius, angle2),
                        at(inner_radius, angle2),
                        at(inner_radius, angle1),
                    ],
                    hue_color,
                    Stroke::NONE,
                ));
            }

            ui.painter()
                .circle_filled(center, inner_radius, Color32::from_gray(30));
            ui.painter()
                .circle_filled(center, inner_radius - 2.0, self.color);
        }

        let clicked = response.clicked();
        response.on_hover_text(self.tooltip).on_hover_cursor(CursorIcon::PointingHand);
        (clicked, rect)
    }
}

/// Convert a hue in `0.0..1.0` to a fully saturated color.
pub fn hue_to_rgb(hue: f32) -> Color32 {
    let h = hue.rem_euclid(1.0) * 6.0;
    let c = 1.0_f32;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());

    let (r, g, b) = match h as i32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Color32::from_rgb((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
}

//! Button components: toggle buttons, shape buttons, brush width buttons.

use egui::{
    vec2, Align2, Color32, CornerRadius, CursorIcon, Pos2, Rect, Sense, Stroke, StrokeKind, Ui,
    Vec2,
};

use crate::{sizing, theme};

/// Background and foreground for a toolbar button state.
fn button_colors(selected: bool, hovered: bool) -> (Color32, Color32) {
    if selected {
        (theme::ACCENT, Color32::WHITE)
    } else if hovered {
        (Color32::from_gray(235), theme::TEXT)
    } else {
        (theme::HOVER_BG, Color32::from_gray(80))
    }
}

/// A text button that shows a selected state.
pub struct ToggleButton<'a> {
    label: &'a str,
    selected: bool,
    min_width: Option<f32>,
    height: f32,
    font_size: f32,
    tooltip: Option<&'a str>,
}

impl<'a> ToggleButton<'a> {
    /// Create a new toggle button.
    pub fn new(label: &'a str, selected: bool) -> Self {
        Self {
            label,
            selected,
            min_width: None,
            height: sizing::MEDIUM,
            font_size: 12.0,
            tooltip: None,
        }
    }

    /// Set minimum width.
    pub fn min_width(mut self, width: f32) -> Self {
        self.min_width = Some(width);
        self
    }

    /// Set the button height.
    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    /// Set the hover tooltip.
    pub fn tooltip(mut self, tooltip: &'a str) -> Self {
        self.tooltip = Some(tooltip);
        self
    }

    /// Show the button and return true if clicked.
    pub fn show(self, ui: &mut Ui) -> bool {
        let font_id = egui::FontId::proportional(self.font_size);
        let galley = ui.painter().layout_no_wrap(
            self.label.to_string(),
            font_id.clone(),
            Color32::PLACEHOLDER,
        );
        let text_width = galley.size().x;
        let width = self.min_width.unwrap_or(0.0).max(text_width + 16.0);

        let (rect, response) = ui.allocate_exact_size(vec2(width, self.height), Sense::click());

        if ui.is_rect_visible(rect) {
            let (bg_color, text_color) = button_colors(self.selected, response.hovered());
            ui.painter()
                .rect_filled(rect, CornerRadius::same(sizing::CORNER_RADIUS), bg_color);
            ui.painter().text(
                rect.center(),
                Align2::CENTER_CENTER,
                self.label,
                font_id,
                text_color,
            );
        }

        let clicked = response.clicked();
        let response = response.on_hover_cursor(CursorIcon::PointingHand);
        if let Some(tooltip) = self.tooltip {
            response.on_hover_text(tooltip);
        }
        clicked
    }
}

/// A square button with a vector glyph drawn from outlines.
///
/// Outlines are polylines in unit space, where `(-1, -1)` and `(1, 1)` map to
/// the corners of the icon area.
pub struct ShapeButton<'a> {
    outlines: &'a [Vec<Vec2>],
    tooltip: &'a str,
    selected: bool,
    size: Vec2,
    filled: bool,
}

impl<'a> ShapeButton<'a> {
    /// Create a new shape button.
    pub fn new(outlines: &'a [Vec<Vec2>], tooltip: &'a str, selected: bool) -> Self {
        Self {
            outlines,
            tooltip,
            selected,
            size: vec2(sizing::LARGE, sizing::LARGE),
            filled: true,
        }
    }

    /// Draw outlines as open strokes instead of closed shapes.
    pub fn stroked(mut self) -> Self {
        self.filled = false;
        self
    }

    /// Set the button size.
    pub fn size(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }

    /// Show the button and return true if clicked.
    pub fn show(self, ui: &mut Ui) -> bool {
        let (rect, response) = ui.allocate_exact_size(self.size, Sense::click());

        if ui.is_rect_visible(rect) {
            let (bg_color, fg_color) = button_colors(self.selected, response.hovered());
            ui.painter()
                .rect_filled(rect, CornerRadius::same(sizing::CORNER_RADIUS), bg_color);

            let icon = icon_rect(rect);
            let stroke = Stroke::new(1.8, fg_color);
            for outline in self.outlines {
                let points: Vec<Pos2> = outline.iter().map(|p| to_icon(icon, *p)).collect();
                if points.len() < 2 {
                    continue;
                }
                let shape = if self.filled {
                    egui::epaint::PathShape::closed_line(points, stroke)
                } else {
                    egui::epaint::PathShape::line(points, stroke)
                };
                ui.painter().add(shape);
            }
        }

        let clicked = response.clicked();
        response.on_hover_text(self.tooltip).on_hover_cursor(CursorIcon::PointingHand);
        clicked
    }
}

/// Square icon area inset from the button rect.
fn icon_rect(rect: Rect) -> Rect {
    let side = rect.width().min(rect.height()) * 0.6;
    Rect::from_center_size(rect.center(), vec2(side, side))
}

/// Map a unit-space point into the icon area.
fn to_icon(icon: Rect, p: Vec2) -> Pos2 {
    icon.center() + vec2(p.x * icon.width() / 2.0, p.y * icon.height() / 2.0)
}

/// A button previewing a brush width as a dot.
pub struct StrokeWidthButton<'a> {
    width: f32,
    tooltip: &'a str,
    selected: bool,
}

impl<'a> StrokeWidthButton<'a> {
    /// Create a new brush width button.
    pub fn new(width: f32, tooltip: &'a str, selected: bool) -> Self {
        Self {
            width,
            tooltip,
            selected,
        }
    }

    /// Show the button and return true if clicked.
    pub fn show(self, ui: &mut Ui) -> bool {
        let size = vec2(sizing::MEDIUM, sizing::MEDIUM);
        let (rect, response) = ui.allocate_exact_size(size, Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if self.selected {
                theme::ACCENT
            } else if response.hovered() {
                Color32::from_gray(235)
            } else {
                Color32::from_gray(250)
            };
            let dot_color = if self.selected {
                Color32::WHITE
            } else {
                Color32::from_gray(60)
            };

            ui.painter()
                .rect_filled(rect, CornerRadius::same(sizing::CORNER_RADIUS), bg_color);
            if !self.selected {
                ui.painter().rect_stroke(
                    rect,
                    CornerRadius::same(sizing::CORNER_RADIUS),
                    Stroke::new(1.0, Color32::from_gray(200)),
                    StrokeKind::Inside,
                );
            }

            // Dot diameter tracks the width, capped to the button.
            let radius = (self.width / 2.0).clamp(1.5, rect.width() / 2.0 - 4.0);
            ui.painter().circle_filled(rect.center(), radius, dot_color);
        }

        let clicked = response.clicked();
        response.on_hover_text(self.tooltip).on_hover_cursor(CursorIcon::PointingHand);
        clicked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_mapping_corners() {
        let rect = Rect::from_min_size(Pos2::new(0.0, 0.0), vec2(50.0, 50.0));
        let icon = icon_rect(rect);
        assert_eq!(to_icon(icon, vec2(-1.0, -1.0)), icon.min);
        assert_eq!(to_icon(icon, vec2(1.0, 1.0)), icon.max);
        assert_eq!(to_icon(icon, Vec2::ZERO), rect.center());
    }
}

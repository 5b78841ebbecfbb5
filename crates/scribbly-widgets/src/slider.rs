//! Swipe-to-erase track with a draggable handle.
//!
//! The widget only draws and reports presses on the handle. Drag tracking after
//! the press happens globally in the application so a drag survives the
//! pointer leaving the handle.

use egui::{vec2, Color32, CornerRadius, CursorIcon, Id, Rect, Sense, Stroke, StrokeKind, Ui};

use crate::{sizing, theme};

/// Result of showing a [`SliderTrack`].
#[derive(Debug, Clone, Copy)]
pub struct SliderTrackResponse {
    /// Track rect in screen points.
    pub track: Rect,
    /// Handle rect in screen points.
    pub handle: Rect,
    /// The handle was pressed this frame.
    pub pressed: bool,
}

/// A horizontal track with a handle at a given offset.
pub struct SliderTrack<'a> {
    handle_offset: f32,
    handle_width: f32,
    width: f32,
    height: f32,
    active: bool,
    label: &'a str,
}

impl<'a> SliderTrack<'a> {
    /// Create a track with the handle `handle_offset` points from its left edge.
    pub fn new(handle_offset: f32, handle_width: f32, width: f32) -> Self {
        Self {
            handle_offset,
            handle_width,
            width,
            height: sizing::MEDIUM,
            active: false,
            label: "",
        }
    }

    /// Highlight the handle while it is being dragged.
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Text drawn faintly along the track.
    pub fn label(mut self, label: &'a str) -> Self {
        self.label = label;
        self
    }

    /// Show the track and handle.
    pub fn show(self, ui: &mut Ui) -> SliderTrackResponse {
        let (track, _) = ui.allocate_exact_size(vec2(self.width, self.height), Sense::hover());
        let handle = handle_rect(track, self.handle_offset, self.handle_width);
        let response = ui
            .interact(handle, Id::new("scribbly_slider_handle"), Sense::drag())
            .on_hover_cursor(CursorIcon::Grab);

        if ui.is_rect_visible(track) {
            let corner = CornerRadius::same(sizing::PANEL_RADIUS);
            ui.painter().rect_filled(track, corner, Color32::from_gray(238));
            ui.painter().rect_stroke(
                track,
                corner,
                Stroke::new(1.0, theme::BORDER),
                StrokeKind::Inside,
            );
            if !self.label.is_empty() {
                ui.painter().text(
                    track.center(),
                    egui::Align2::CENTER_CENTER,
                    self.label,
                    egui::FontId::proportional(11.0),
                    theme::TEXT_MUTED,
                );
            }

            let fill = if self.active || response.hovered() {
                theme::ACCENT
            } else {
                Color32::from_gray(120)
            };
            ui.painter().rect_filled(handle.shrink(2.0), corner, fill);
        }

        SliderTrackResponse {
            track,
            handle,
            pressed: response.drag_started(),
        }
    }
}

/// Handle rect for an offset, clamped inside the track.
fn handle_rect(track: Rect, offset: f32, handle_width: f32) -> Rect {
    let handle_width = handle_width.min(track.width());
    let max_offset = track.width() - handle_width;
    let left = track.left() + offset.clamp(0.0, max_offset);
    Rect::from_min_max(
        egui::pos2(left, track.top()),
        egui::pos2(left + handle_width, track.bottom()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_rect_clamps() {
        let track = Rect::from_min_size(egui::pos2(10.0, 0.0), vec2(200.0, 20.0));
        assert_eq!(handle_rect(track, -50.0, 40.0).left(), 10.0);
        assert_eq!(handle_rect(track, 500.0, 40.0).right(), 210.0);
        assert_eq!(handle_rect(track, 30.0, 40.0).left(), 40.0);
    }
}

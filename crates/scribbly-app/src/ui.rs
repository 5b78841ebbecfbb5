//! UI components using egui.

use egui::{vec2, Align2, Color32, Context, Vec2};
use kurbo::{PathEl, Point, Shape};
use peniko::Color;
use scribbly_core::brush::DEFAULT_BRUSH_SIZE;
use scribbly_core::color::DEFAULT_PALETTE;
use scribbly_core::{ColorMode, ShapeMode, color::parse_palette};
use scribbly_widgets::{
    ColorSwatch, ColorSwatchStyle, RainbowSwatch, ShapeButton, SliderTrack, SliderTrackResponse,
    StrokeWidthButton, ToggleButton, panel_frame, section_label, sizing, toolbar_frame,
    vertical_separator,
};

/// Default brush width choices.
pub const DEFAULT_BRUSH_SIZES: [f64; 4] = [5.0, DEFAULT_BRUSH_SIZE, 20.0, 40.0];

/// Handle width of the clear slider in points.
const SLIDER_HANDLE_WIDTH: f32 = 48.0;
/// Preferred clear slider track width in points.
const SLIDER_TRACK_WIDTH: f32 = 360.0;
/// Gap between floating panels and the window edge.
const EDGE_MARGIN: f32 = 12.0;

/// Actions that can be triggered by UI.
#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    SetColor(ColorMode),
    SetShape(ShapeMode),
    SetBrushSize(f64),
    ClearAll,
    ToggleFullscreen,
    /// The clear slider handle was pressed.
    StartSlider,
}

/// UI state that persists between frames.
pub struct UiState {
    pub palette: Vec<Color>,
    pub color_mode: ColorMode,
    /// Color the next rainbow segment will use.
    pub rainbow_color: Color,
    pub shape: ShapeMode,
    pub brush_sizes: Vec<f64>,
    pub brush_size: f64,
    /// Slider handle offset from the track's left edge, in points.
    pub slider_offset: f32,
    pub slider_active: bool,
    pub is_fullscreen: bool,
    /// Slider layout from the last frame.
    pub slider_layout: Option<SliderTrackResponse>,
    shape_icons: Vec<(ShapeMode, Vec<Vec<Vec2>>)>,
}

impl Default for UiState {
    fn default() -> Self {
        Self::new(parse_palette(&DEFAULT_PALETTE), DEFAULT_BRUSH_SIZES.to_vec())
    }
}

impl UiState {
    pub fn new(palette: Vec<Color>, brush_sizes: Vec<f64>) -> Self {
        let color_mode = palette
            .first()
            .copied()
            .map(ColorMode::Solid)
            .unwrap_or_default();
        let brush_size = brush_sizes
            .iter()
            .copied()
            .find(|s| *s == DEFAULT_BRUSH_SIZE)
            .or_else(|| brush_sizes.first().copied())
            .unwrap_or(DEFAULT_BRUSH_SIZE);
        Self {
            palette,
            color_mode,
            rainbow_color: scribbly_core::rainbow_color(0.0),
            shape: ShapeMode::Line,
            brush_sizes,
            brush_size,
            slider_offset: 0.0,
            slider_active: false,
            is_fullscreen: false,
            slider_layout: None,
            shape_icons: ShapeMode::ALL
                .iter()
                .map(|shape| (*shape, shape_outlines(*shape)))
                .collect(),
        }
    }
}

/// Convert a peniko color for egui.
fn to_color32(color: Color) -> Color32 {
    let rgba = color.to_rgba8();
    Color32::from_rgba_unmultiplied(rgba.r, rgba.g, rgba.b, rgba.a)
}

fn hex(color: Color) -> String {
    let rgba = color.to_rgba8();
    format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
}

/// Toolbar glyph for a brush mode, as polylines in unit space.
fn shape_outlines(shape: ShapeMode) -> Vec<Vec<Vec2>> {
    let Some(path) = shape.stamp(Point::ZERO, 1.0) else {
        // A squiggle for line mode.
        let wave = (0..=16)
            .map(|i| {
                let t = i as f32 / 16.0;
                vec2(t * 2.0 - 1.0, -(t * std::f32::consts::TAU).sin() * 0.5)
            })
            .collect();
        return vec![wave];
    };

    let bounds = path.bounding_box();
    let center = bounds.center();
    let extent = bounds.width().max(bounds.height()).max(f64::EPSILON) / 2.0;
    let to_unit = |p: Point| {
        vec2(
            ((p.x - center.x) / extent) as f32,
            ((p.y - center.y) / extent) as f32,
        )
    };

    let mut outlines: Vec<Vec<Vec2>> = Vec::new();
    kurbo::flatten(path.iter(), 0.01, |el| match el {
        PathEl::MoveTo(p) => outlines.push(vec![to_unit(p)]),
        PathEl::LineTo(p) => {
            if let Some(outline) = outlines.last_mut() {
                outline.push(to_unit(p));
            }
        }
        _ => {}
    });
    outlines.retain(|outline| outline.len() > 1);
    outlines
}

/// Render the UI and return any action triggered this frame.
pub fn render_ui(ctx: &Context, ui_state: &mut UiState) -> Option<UiAction> {
    let toolbar_action = render_toolbar(ctx, ui_state);
    let slider_action = render_clear_slider(ctx, ui_state);
    toolbar_action.or(slider_action)
}

/// Render the top toolbar: palette, brush modes, brush sizes and commands.
fn render_toolbar(ctx: &Context, ui_state: &UiState) -> Option<UiAction> {
    let mut action = None;

    egui::Area::new(egui::Id::new("toolbar"))
        .anchor(Align2::CENTER_TOP, Vec2::new(0.0, EDGE_MARGIN))
        .show(ctx, |ui| {
            toolbar_frame().show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    ui.spacing_mut().item_spacing = Vec2::new(4.0, 4.0);

                    for color in &ui_state.palette {
                        let tooltip = hex(*color);
                        let selected = ui_state.color_mode == ColorMode::Solid(*color);
                        let (clicked, _) = ColorSwatch::new(to_color32(*color), &tooltip)
                            .selected(selected)
                            .style(ColorSwatchStyle::large())
                            .show(ui);
                        if clicked {
                            action = Some(UiAction::SetColor(ColorMode::Solid(*color)));
                        }
                    }
                    let (clicked, _) =
                        RainbowSwatch::new(to_color32(ui_state.rainbow_color), "Rainbow (R)")
                            .selected(ui_state.color_mode.is_rainbow())
                            .size(vec2(sizing::MEDIUM, sizing::MEDIUM))
                            .show(ui);
                    if clicked {
                        action = Some(UiAction::SetColor(ColorMode::Rainbow));
                    }

                    vertical_separator(ui);

                    for (i, (shape, outlines)) in ui_state.shape_icons.iter().enumerate() {
                        let tooltip = format!("{} ({})", shape.name(), i + 1);
                        let mut button =
                            ShapeButton::new(outlines, &tooltip, ui_state.shape == *shape);
                        if !shape.is_stamp() {
                            button = button.stroked();
                        }
                        if button.show(ui) {
                            action = Some(UiAction::SetShape(*shape));
                        }
                    }

                    vertical_separator(ui);

                    for size in &ui_state.brush_sizes {
                        let tooltip = format!("{size}px");
                        if StrokeWidthButton::new(*size as f32, &tooltip, ui_state.brush_size == *size)
                            .show(ui)
                        {
                            action = Some(UiAction::SetBrushSize(*size));
                        }
                    }

                    vertical_separator(ui);

                    if ToggleButton::new("Clear", false).tooltip("Clear the canvas (Delete)").show(ui) {
                        action = Some(UiAction::ClearAll);
                    }
                    let label = if ui_state.is_fullscreen { "Exit fullscreen" } else { "Fullscreen" };
                    if ToggleButton::new(label, ui_state.is_fullscreen)
                        .tooltip("Toggle fullscreen (F)")
                        .show(ui)
                    {
                        action = Some(UiAction::ToggleFullscreen);
                    }
                });
            });
        });

    action
}

/// Render the bottom swipe-to-erase slider.
fn render_clear_slider(ctx: &Context, ui_state: &mut UiState) -> Option<UiAction> {
    #[allow(deprecated)]
    let screen_rect = ctx.input(|i| i.content_rect());
    let width = SLIDER_TRACK_WIDTH.min(screen_rect.width() - 4.0 * EDGE_MARGIN).max(SLIDER_HANDLE_WIDTH);

    let mut layout = None;
    egui::Area::new(egui::Id::new("clear_slider"))
        .anchor(Align2::CENTER_BOTTOM, Vec2::new(0.0, -EDGE_MARGIN))
        .show(ctx, |ui| {
            panel_frame().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    section_label(ui, "Swipe to erase");
                    layout = Some(
                        SliderTrack::new(ui_state.slider_offset, SLIDER_HANDLE_WIDTH, width)
                            .active(ui_state.slider_active)
                            .label("erase")
                            .show(ui),
                    );
                });
            });
        });

    ui_state.slider_layout = layout;
    layout
        .filter(|layout| layout.pressed)
        .map(|_| UiAction::StartSlider)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_selects_first_swatch() {
        let state = UiState::default();
        assert_eq!(state.palette.len(), DEFAULT_PALETTE.len());
        assert_eq!(state.color_mode, ColorMode::Solid(Color::BLACK));
        assert_eq!(state.brush_size, DEFAULT_BRUSH_SIZE);
        assert_eq!(state.shape, ShapeMode::Line);
    }

    #[test]
    fn test_empty_palette_falls_back() {
        let state = UiState::new(Vec::new(), Vec::new());
        assert_eq!(state.color_mode, ColorMode::default());
        assert_eq!(state.brush_size, DEFAULT_BRUSH_SIZE);
    }

    #[test]
    fn test_shape_outlines_fit_unit_square() {
        for shape in ShapeMode::ALL {
            let outlines = shape_outlines(shape);
            assert!(!outlines.is_empty(), "{shape:?} has no outline");
            for p in outlines.iter().flatten() {
                assert!(p.x.abs() <= 1.001 && p.y.abs() <= 1.001, "{shape:?} {p:?}");
            }
        }
    }

    #[test]
    fn test_smiley_icon_has_eyes_and_mouth() {
        assert!(shape_outlines(ShapeMode::Smiley).len() >= 3);
    }

    #[test]
    fn test_hex_tooltip() {
        assert_eq!(hex(Color::from_rgb8(255, 0, 128)), "#ff0080");
    }

    #[test]
    fn test_render_ui_lays_out_slider() {
        let ctx = Context::default();
        let mut state = UiState::default();
        let mut action = None;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            action = render_ui(ctx, &mut state);
        });
        assert_eq!(action, None);
        let layout = state.slider_layout.expect("slider laid out");
        assert_eq!(layout.handle.width(), SLIDER_HANDLE_WIDTH);
        assert!(!layout.pressed);
    }
}

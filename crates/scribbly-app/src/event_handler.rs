//! Routes window input to the board and the clear slider.
//!
//! Positions are physical pixels relative to the window's client area, which is
//! also canvas space since the canvas fills the window.

use kurbo::{Point, Rect};
use scribbly_core::input::TouchId;
use scribbly_core::slider::PRIMARY_BUTTON;
use scribbly_core::{Board, ClearSlider, PointerSample, SliderGeometry, SliderSample, Surface, TouchTracker};
use winit::event::{MouseButton, TouchPhase};

/// Bit for a mouse button in a DOM-style `buttons` mask.
fn button_bit(button: MouseButton) -> u16 {
    match button {
        MouseButton::Left => 1,
        MouseButton::Right => 2,
        MouseButton::Middle => 4,
        MouseButton::Back => 8,
        MouseButton::Forward => 16,
        MouseButton::Other(_) => 0,
    }
}

/// Input routing state kept across window events.
#[derive(Debug, Default)]
pub struct EventHandler {
    /// Last known cursor position.
    cursor: Point,
    /// Held mouse buttons.
    buttons: u16,
    /// Live touch contacts.
    touches: TouchTracker,
    /// Swipe-to-erase drag state.
    pub slider: ClearSlider,
    /// Slider layout in physical pixels, refreshed every frame.
    pub slider_geometry: Option<SliderGeometry>,
}

impl EventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a slider drag after a press on the handle.
    pub fn start_slider(&mut self) {
        if self.slider_geometry.is_some() {
            self.slider.start();
        }
    }

    /// Canvas rect in client coordinates.
    fn canvas_rect<S: Surface>(board: &Board<S>) -> Rect {
        board.surface().bounds()
    }

    /// Feed a slider drag sample and erase the resulting band.
    fn drag_slider<S: Surface>(&mut self, board: &mut Board<S>, sample: SliderSample) {
        let Some(geometry) = self.slider_geometry else {
            return;
        };
        let (width, height) = board.surface().size();
        if let Some(band) = self.slider.drag(sample, &geometry, width as f64, height as f64) {
            board.erase_band(band);
        }
    }

    /// Cursor moved. `blocked` is set when the UI owns the pointer.
    pub fn cursor_moved<S: Surface>(&mut self, board: &mut Board<S>, position: Point, blocked: bool) {
        self.cursor = position;
        if self.slider.is_sliding() {
            let sample = SliderSample::Mouse {
                client_x: position.x,
                buttons: self.buttons,
            };
            self.drag_slider(board, sample);
            return;
        }
        if blocked {
            // The UI took the pointer mid-stroke.
            if board.is_drawing() {
                board.pointer_up();
            }
            return;
        }
        board.pointer_move(&PointerSample::Mouse { offset: position });
    }

    /// Mouse button pressed or released.
    pub fn mouse_input<S: Surface>(
        &mut self,
        board: &mut Board<S>,
        button: MouseButton,
        pressed: bool,
        blocked: bool,
    ) {
        let bit = button_bit(button);
        if pressed {
            self.buttons |= bit;
            if bit == PRIMARY_BUTTON && !blocked && !self.slider.is_sliding() {
                board.pointer_down(&PointerSample::Mouse {
                    offset: self.cursor,
                });
            }
        } else {
            self.buttons &= !bit;
            board.pointer_up();
            self.slider.stop();
        }
    }

    /// Cursor left the window.
    pub fn cursor_left<S: Surface>(&mut self, board: &mut Board<S>) {
        board.pointer_up();
    }

    /// A touch contact changed.
    pub fn touch<S: Surface>(
        &mut self,
        board: &mut Board<S>,
        id: TouchId,
        phase: TouchPhase,
        position: Point,
        blocked: bool,
    ) {
        let rect = Self::canvas_rect(board);
        match phase {
            TouchPhase::Started => {
                self.touches.start(id, position);
                if !blocked && !self.slider.is_sliding() {
                    board.pointer_down(&self.touches.sample(rect));
                }
            }
            TouchPhase::Moved => {
                self.touches.update(id, position);
                let sample = self.touches.sample(rect);
                if self.slider.is_sliding() {
                    if let Some(first) = sample.canvas_point() {
                        self.drag_slider(board, SliderSample::Touch { client_x: first.x + rect.x0 });
                    }
                } else if blocked {
                    if board.is_drawing() {
                        board.pointer_up();
                    }
                } else {
                    board.pointer_move(&sample);
                }
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                self.touches.remove(id);
                board.pointer_up();
                self.slider.stop();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scribbly_core::ShapeMode;
    use scribbly_render::RasterSurface;

    fn board() -> Board<RasterSurface> {
        Board::new(RasterSurface::new(100, 100))
    }

    fn painted(board: &Board<RasterSurface>) -> usize {
        board.surface().rgba().chunks(4).filter(|p| p[3] > 0).count()
    }

    #[test]
    fn test_mouse_stroke_paints() {
        let mut board = board();
        let mut handler = EventHandler::new();
        handler.cursor_moved(&mut board, Point::new(10.0, 50.0), false);
        handler.mouse_input(&mut board, MouseButton::Left, true, false);
        handler.cursor_moved(&mut board, Point::new(90.0, 50.0), false);
        handler.mouse_input(&mut board, MouseButton::Left, false, false);

        assert!(!board.is_drawing());
        assert_eq!(board.surface().pixel(50, 50).map(|p| p[3]), Some(255));
    }

    #[test]
    fn test_blocked_press_does_not_draw() {
        let mut board = board();
        let mut handler = EventHandler::new();
        handler.mouse_input(&mut board, MouseButton::Left, true, true);
        handler.cursor_moved(&mut board, Point::new(90.0, 50.0), false);
        assert_eq!(painted(&board), 0);
    }

    #[test]
    fn test_secondary_button_does_not_draw() {
        let mut board = board();
        let mut handler = EventHandler::new();
        handler.mouse_input(&mut board, MouseButton::Right, true, false);
        assert!(!board.is_drawing());
    }

    #[test]
    fn test_cursor_left_ends_stroke() {
        let mut board = board();
        let mut handler = EventHandler::new();
        handler.mouse_input(&mut board, MouseButton::Left, true, false);
        handler.cursor_left(&mut board);
        handler.cursor_moved(&mut board, Point::new(90.0, 90.0), false);
        handler.cursor_moved(&mut board, Point::new(10.0, 90.0), false);
        assert!(!board.is_drawing());
        assert_eq!(painted(&board), 0);
    }

    #[test]
    fn test_hover_without_press_does_not_draw() {
        let mut board = board();
        let mut handler = EventHandler::new();
        handler.cursor_moved(&mut board, Point::new(10.0, 50.0), false);
        handler.cursor_moved(&mut board, Point::new(90.0, 50.0), false);
        assert!(!board.is_drawing());
        assert_eq!(painted(&board), 0);
    }

    #[test]
    fn test_blocked_move_ends_stroke() {
        let mut board = board();
        let mut handler = EventHandler::new();
        handler.cursor_moved(&mut board, Point::new(10.0, 10.0), false);
        handler.mouse_input(&mut board, MouseButton::Left, true, false);
        handler.cursor_moved(&mut board, Point::new(30.0, 10.0), false);
        let first_segment = painted(&board);
        assert!(first_segment > 0);

        handler.cursor_moved(&mut board, Point::new(50.0, 50.0), true);
        assert!(!board.is_drawing());
        handler.cursor_moved(&mut board, Point::new(90.0, 90.0), false);
        assert_eq!(painted(&board), first_segment);
        assert_eq!(board.surface().pixel(70, 70).map(|p| p[3]), Some(0));
    }

    #[test]
    fn test_slider_drag_erases_band_and_stops_on_release() {
        let mut board = board();
        board.select_shape(ShapeMode::Square);
        board.set_brush_size(50.0);
        board.begin(Point::new(50.0, 50.0));
        board.move_to(Point::new(50.0, 50.0));
        let before = painted(&board);
        assert_eq!(before, 100 * 100);

        let mut handler = EventHandler::new();
        handler.slider_geometry = Some(SliderGeometry::new(0.0, 100.0, 20.0));
        handler.mouse_input(&mut board, MouseButton::Left, true, true);
        handler.start_slider();
        handler.cursor_moved(&mut board, Point::new(0.0, 0.0), true);
        assert_eq!(painted(&board), before - 20 * 100);

        handler.mouse_input(&mut board, MouseButton::Left, false, true);
        assert!(!handler.slider.is_sliding());
    }

    #[test]
    fn test_slider_stops_when_button_mask_changes() {
        let mut board = board();
        let mut handler = EventHandler::new();
        handler.slider_geometry = Some(SliderGeometry::new(0.0, 100.0, 20.0));
        handler.start_slider();
        // No button held: the release happened elsewhere.
        handler.cursor_moved(&mut board, Point::new(40.0, 0.0), true);
        assert!(!handler.slider.is_sliding());
    }

    #[test]
    fn test_touch_stroke_uses_first_contact() {
        let mut board = board();
        let mut handler = EventHandler::new();
        handler.touch(&mut board, 1, TouchPhase::Started, Point::new(10.0, 10.0), false);
        handler.touch(&mut board, 2, TouchPhase::Started, Point::new(80.0, 80.0), false);
        handler.touch(&mut board, 1, TouchPhase::Moved, Point::new(10.0, 60.0), false);
        assert_eq!(board.state().tracker.last_point(), Some(Point::new(10.0, 60.0)));

        handler.touch(&mut board, 1, TouchPhase::Ended, Point::new(10.0, 60.0), false);
        assert!(!board.is_drawing());
    }
}

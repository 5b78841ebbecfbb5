//! Swipe-to-erase slider.
//!
//! A handle slides along a horizontal track. Its position along the track maps
//! to a vertical band of the canvas that is erased on every drag update.

use kurbo::Rect;
use serde::{Deserialize, Serialize};

/// Mouse button mask with only the primary button held.
pub const PRIMARY_BUTTON: u16 = 1;

/// Track and handle layout in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderGeometry {
    /// Left edge of the track.
    pub track_left: f64,
    /// Track width.
    pub track_width: f64,
    /// Handle width.
    pub handle_width: f64,
}

impl SliderGeometry {
    pub fn new(track_left: f64, track_width: f64, handle_width: f64) -> Self {
        Self {
            track_left,
            track_width,
            handle_width,
        }
    }

    /// Largest handle offset from the track's left edge.
    pub fn max_offset(&self) -> f64 {
        (self.track_width - self.handle_width).max(0.0)
    }

    /// Handle offset for a pointer at `client_x`, centered and clamped.
    pub fn handle_offset(&self, client_x: f64) -> f64 {
        let x = client_x - self.track_left - self.handle_width / 2.0;
        x.clamp(0.0, self.max_offset())
    }

    /// Band of the canvas under a handle at `offset`.
    pub fn band(&self, offset: f64, canvas_width: f64, canvas_height: f64) -> Option<Rect> {
        if self.track_width <= 0.0 {
            return None;
        }
        let f = offset / self.track_width;
        let clear_x = f * canvas_width;
        let clear_width = self.handle_width / self.track_width * canvas_width;
        Some(Rect::new(clear_x, 0.0, clear_x + clear_width, canvas_height))
    }
}

/// One drag update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SliderSample {
    /// Mouse move with the currently held button mask.
    Mouse { client_x: f64, buttons: u16 },
    /// Touch move of the first contact.
    Touch { client_x: f64 },
}

/// Drag state of the clear slider.
#[derive(Debug, Clone, Default)]
pub struct ClearSlider {
    /// Handle offset from the track's left edge.
    handle_offset: f64,
    sliding: bool,
}

impl ClearSlider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle offset from the track's left edge.
    pub fn handle_offset(&self) -> f64 {
        self.handle_offset
    }

    pub fn is_sliding(&self) -> bool {
        self.sliding
    }

    /// Begin a drag. Only called for presses on the handle itself.
    pub fn start(&mut self) {
        self.sliding = true;
    }

    /// End the drag.
    pub fn stop(&mut self) {
        self.sliding = false;
    }

    /// Apply a global drag update.
    ///
    /// Moves the handle and returns the band to erase. A mouse sample with any
    /// button mask other than primary-only ends the drag instead, which covers
    /// a release that happened outside the window.
    pub fn drag(
        &mut self,
        sample: SliderSample,
        geometry: &SliderGeometry,
        canvas_width: f64,
        canvas_height: f64,
    ) -> Option<Rect> {
        if !self.sliding {
            return None;
        }
        let client_x = match sample {
            SliderSample::Mouse { buttons, .. } if buttons != PRIMARY_BUTTON => {
                self.stop();
                return None;
            }
            SliderSample::Mouse { client_x, .. } | SliderSample::Touch { client_x } => client_x,
        };
        self.handle_offset = geometry.handle_offset(client_x);
        geometry.band(self.handle_offset, canvas_width, canvas_height)
    }
}

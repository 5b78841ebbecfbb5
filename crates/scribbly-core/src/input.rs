//! Pointer and touch input normalization and stroke tracking.

use kurbo::{Line, Point, Rect};
use serde::{Deserialize, Serialize};

/// Identifier the host assigns to a touch contact.
pub type TouchId = u64;

/// A raw pointer sample as delivered by the host.
///
/// Mouse samples already carry canvas-local offsets. Touch samples carry client
/// coordinates plus the canvas bounding rectangle in the same client space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PointerSample {
    /// Mouse or pen position relative to the canvas origin.
    Mouse { offset: Point },
    /// Active touch contacts in start order, in client coordinates.
    Touch { touches: Vec<Point>, canvas_rect: Rect },
}

impl PointerSample {
    /// Mouse sample at a canvas-local position.
    pub fn mouse(x: f64, y: f64) -> Self {
        Self::Mouse {
            offset: Point::new(x, y),
        }
    }

    /// Translate the sample into canvas space.
    ///
    /// Touch samples use the first contact only. Returns `None` when no contact
    /// is down.
    pub fn canvas_point(&self) -> Option<Point> {
        match self {
            Self::Mouse { offset } => Some(*offset),
            Self::Touch {
                touches,
                canvas_rect,
            } => touches
                .first()
                .map(|t| Point::new(t.x - canvas_rect.x0, t.y - canvas_rect.y0)),
        }
    }
}

/// Turns down/move/up events into connected segments.
#[derive(Debug, Clone, Default)]
pub struct InputTracker {
    /// Last recorded point while a stroke is active.
    last_point: Option<Point>,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a stroke at `point`.
    pub fn begin(&mut self, point: Point) {
        self.last_point = Some(point);
    }

    /// Advance the stroke to `point`.
    ///
    /// Returns the segment from the previous point, or `None` when no stroke is
    /// active.
    pub fn move_to(&mut self, point: Point) -> Option<Line> {
        let previous = self.last_point?;
        self.last_point = Some(point);
        Some(Line::new(previous, point))
    }

    /// Finish the current stroke, if any.
    pub fn end(&mut self) {
        self.last_point = None;
    }

    /// Whether a stroke is in progress.
    pub fn is_active(&self) -> bool {
        self.last_point.is_some()
    }

    /// Last recorded point of the active stroke.
    pub fn last_point(&self) -> Option<Point> {
        self.last_point
    }
}

/// Ordered set of live touch contacts.
///
/// Hosts report touches one contact at a time. This keeps them in the order
/// they went down so the first contact is stable for the whole gesture.
#[derive(Debug, Clone, Default)]
pub struct TouchTracker {
    contacts: Vec<(TouchId, Point)>,
}

impl TouchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new contact, or move it if the id is already known.
    pub fn start(&mut self, id: TouchId, position: Point) {
        match self.contacts.iter_mut().find(|(i, _)| *i == id) {
            Some(contact) => contact.1 = position,
            None => self.contacts.push((id, position)),
        }
    }

    /// Update a known contact's position. Unknown ids are ignored.
    pub fn update(&mut self, id: TouchId, position: Point) {
        if let Some(contact) = self.contacts.iter_mut().find(|(i, _)| *i == id) {
            contact.1 = position;
        }
    }

    /// Drop a contact on end or cancel.
    pub fn remove(&mut self, id: TouchId) {
        self.contacts.retain(|(i, _)| *i != id);
    }

    /// Number of live contacts.
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Snapshot the live contacts as a pointer sample.
    pub fn sample(&self, canvas_rect: Rect) -> PointerSample {
        PointerSample::Touch {
            touches: self.contacts.iter().map(|(_, p)| *p).collect(),
            canvas_rect,
        }
    }
}

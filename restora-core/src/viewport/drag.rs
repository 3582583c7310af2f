//! Grab-to-pan drag session

use super::Point;

/// Pointer button that produced a press event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
    Other,
}

/// State captured when a drag begins; lives for exactly one gesture
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    start_pointer: Point,
    start_scroll: Point,
}

impl DragSession {
    pub fn new(start_pointer: Point, start_scroll: Point) -> Self {
        Self {
            start_pointer,
            start_scroll,
        }
    }

    pub fn start_pointer(&self) -> Point {
        self.start_pointer
    }

    pub fn start_scroll(&self) -> Point {
        self.start_scroll
    }

    /// Scroll offset that keeps the content under the pointer.
    ///
    /// Moving the pointer right/down decreases the scroll offset by the same
    /// amount, so the content follows the pointer 1:1.
    pub fn scroll_for(&self, pointer: Point) -> Point {
        Point {
            x: self.start_scroll.x - (pointer.x - self.start_pointer.x),
            y: self.start_scroll.y - (pointer.y - self.start_pointer.y),
        }
    }
}

//! Rubber-band selection rectangle.
//!
//! During a background drag the controller maintains a [`SelectionRect`]:
//! the press point is the fixed origin, the current pointer position the
//! moving corner. The signed extent is normalized on read so the rendering
//! layer and [`Diagram::apply_selection_rect`](crate::graph::Diagram::apply_selection_rect)
//! always see a rectangle whose `(x, y)` is its top-left corner, regardless
//! of drag direction.

use crate::geometry::{Point, Rect};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionRect {
    origin: Point,
    current: Point,
}

impl SelectionRect {
    /// Start a rubber band at the press point.
    pub fn new(origin: Point) -> Self {
        Self { origin, current: origin }
    }

    /// Advance the moving corner by an incremental pointer delta.
    pub fn move_by(&mut self, dx: f32, dy: f32) {
        self.current.x += dx;
        self.current.y += dy;
    }

    /// The current pointer corner.
    pub fn current(&self) -> Point {
        self.current
    }

    /// Normalized bounds of the rubber band.
    pub fn bounds(&self) -> Rect {
        Rect::from_corners(self.origin, self.current)
    }
}

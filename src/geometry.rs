//! Layout constants and geometric primitives shared across the crate.
//!
//! Block and connector layout is fully derived: a block's height and the
//! position of every connector follow from these constants and the block's
//! stored position/width. The rendering layer reads the same numbers, so the
//! hit-testable surface and the painted surface always agree.

/// Width assigned to a block whose payload omits the width or carries a
/// non-positive value.
pub const DEFAULT_BLOCK_WIDTH: f32 = 250.0;

/// Vertical space reserved at the top of a block for its name.
pub const BLOCK_NAME_HEIGHT: f32 = 40.0;

/// Height of one connector row within a block.
pub const CONNECTOR_ROW_HEIGHT: f32 = 35.0;

/// Y offset of the connector at `index`, relative to the block's top edge.
pub fn connector_y(index: usize) -> f32 {
    BLOCK_NAME_HEIGHT + index as f32 * CONNECTOR_ROW_HEIGHT
}

/// A point in diagram coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Linear interpolation between `self` and `other` at parameter `t`.
    pub fn lerp(self, other: Point, t: f32) -> Point {
        Point {
            x: self.x * (1.0 - t) + other.x * t,
            y: self.y * (1.0 - t) + other.y * t,
        }
    }
}

/// An axis-aligned rectangle with its origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Build a normalized rectangle from two opposite corners.
    ///
    /// The corners may be given in any order; the result always has
    /// non-negative width and height with `(x, y)` at the top-left.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            width: (b.x - a.x).abs(),
            height: (b.y - a.y).abs(),
        }
    }

    pub fn contains_point(&self, p: Point) -> bool {
        p.x >= self.x
            && p.x <= self.x + self.width
            && p.y >= self.y
            && p.y <= self.y + self.height
    }

    /// True if `other` lies entirely inside `self` (edges may touch).
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.x + other.width <= self.x + self.width
            && other.y + other.height <= self.y + self.height
    }
}

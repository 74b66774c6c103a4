//! Geometry primitives.
//!
//! Axis-aligned rectangles in wall coordinates (origin top-left, y down).

use curator_core::FramePosition;

/// Axis-aligned rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a rectangle from position and size.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// The footprint of a computed frame position.
    pub fn of_position(p: &FramePosition) -> Self {
        Self::new(p.x, p.y, p.width, p.height)
    }

    /// Get the right edge (x + width).
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Get the bottom edge (y + height).
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Get the center X coordinate.
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    /// Get the center Y coordinate.
    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    /// Check if the rectangle lies entirely within `container`.
    pub fn within(&self, container: &Rect) -> bool {
        self.x >= container.x
            && self.y >= container.y
            && self.right() <= container.right()
            && self.bottom() <= container.bottom()
    }

    /// Whether two rectangles overlap once each pair of facing edges must
    /// keep at least `gap` between them. Touching at exactly `gap` does
    /// not count as overlap.
    pub fn overlaps_with_gap(&self, other: &Rect, gap: f64) -> bool {
        let separated = self.right() + gap <= other.x
            || other.right() + gap <= self.x
            || self.bottom() + gap <= other.y
            || other.bottom() + gap <= self.y;
        !separated
    }

    /// Compute union (bounding box) with another rectangle.
    pub fn union(&self, other: &Rect) -> Rect {
        let x1 = self.x.min(other.x);
        let y1 = self.y.min(other.y);
        let x2 = self.right().max(other.right());
        let y2 = self.bottom().max(other.bottom());
        Rect::new(x1, y1, x2 - x1, y2 - y1)
    }
}

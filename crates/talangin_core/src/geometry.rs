//! Geometry primitives in CSS pixels

use serde::{Deserialize, Serialize};

/// A 2D point
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A 2D size
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle
///
/// Hosts report element bounds as viewport-relative rectangles, matching
/// `getBoundingClientRect()`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn x(&self) -> f32 {
        self.origin.x
    }

    pub fn y(&self) -> f32 {
        self.origin.y
    }

    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }

    /// Top edge
    pub fn top(&self) -> f32 {
        self.origin.y
    }

    /// Bottom edge
    pub fn bottom(&self) -> f32 {
        self.origin.y + self.size.height
    }

    pub fn left(&self) -> f32 {
        self.origin.x
    }

    pub fn right(&self) -> f32 {
        self.origin.x + self.size.width
    }

    /// Shift the rectangle vertically
    ///
    /// Used to convert between viewport-relative and document-absolute
    /// coordinates (`offset_y(scroll_y)` turns a client rect into a
    /// document rect).
    pub fn offset_y(&self, dy: f32) -> Rect {
        Rect::new(self.origin.x, self.origin.y + dy, self.size.width, self.size.height)
    }

    /// Whether a horizontal line at `y` passes through this rectangle
    pub fn spans_y(&self, y: f32) -> bool {
        self.top() <= y && y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(rect.top(), 20.0);
        assert_eq!(rect.bottom(), 70.0);
        assert_eq!(rect.left(), 10.0);
        assert_eq!(rect.right(), 110.0);
    }

    #[test]
    fn test_offset_y_keeps_size() {
        let rect = Rect::new(0.0, 100.0, 320.0, 40.0).offset_y(-60.0);
        assert_eq!(rect.top(), 40.0);
        assert_eq!(rect.height(), 40.0);
    }

    #[test]
    fn test_spans_y_is_half_open() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(rect.spans_y(0.0));
        assert!(rect.spans_y(9.9));
        assert!(!rect.spans_y(10.0));
    }
}

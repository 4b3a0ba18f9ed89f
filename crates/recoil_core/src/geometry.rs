//! Core geometry types shared by the scroll host and the refresh control.
//!
//! Coordinates follow the scroll-view convention: the pull axis is `y`,
//! offsets grow downward into the content, and a negative offset means the
//! content has been pulled down past its top edge.

use serde::{Deserialize, Serialize};

/// 2D point
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// 2D size
#[derive(Clone, Copy, Debug, Default, PartialEq)]
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

/// 2D rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }

    /// Bottom edge along the pull axis
    pub fn max_y(&self) -> f32 {
        self.origin.y + self.size.height
    }
}

/// Four-sided inset, used for content insets and safe areas
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeInsets {
    pub top: f32,
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
}

impl EdgeInsets {
    pub const ZERO: EdgeInsets = EdgeInsets {
        top: 0.0,
        left: 0.0,
        bottom: 0.0,
        right: 0.0,
    };

    pub const fn new(top: f32, left: f32, bottom: f32, right: f32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Insets with only the top edge set
    pub const fn top(top: f32) -> Self {
        Self::new(top, 0.0, 0.0, 0.0)
    }

    /// Copy of these insets with `delta` added to the top edge
    pub fn adding_top(&self, delta: f32) -> Self {
        Self {
            top: self.top + delta,
            ..*self
        }
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.top, self.left, self.bottom, self.right]
    }
}

impl From<[f32; 4]> for EdgeInsets {
    /// `[top, left, bottom, right]`
    fn from(values: [f32; 4]) -> Self {
        Self::new(values[0], values[1], values[2], values[3])
    }
}

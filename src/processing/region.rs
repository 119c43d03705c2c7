//! Pixel rectangles
//!
//! Coordinates follow the usual image convention: (0,0) is the top-left
//! corner, x grows to the right and y grows downwards.

use std::fmt;

/// Rectangular area of an image in pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// X-coordinate of the top-left corner
    pub x: u32,

    /// Y-coordinate of the top-left corner
    pub y: u32,

    /// Width of the region in pixels
    pub width: u32,

    /// Height of the region in pixels
    pub height: u32,
}

impl Region {
    /// Create a new region
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Region { x, y, width, height }
    }

    /// Build a region from inclusive-exclusive corner coordinates
    ///
    /// # Arguments
    /// * `left`, `top` - First column and row inside the region
    /// * `right`, `bottom` - First column and row past the region
    pub fn from_corners(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Region {
            x: left,
            y: top,
            width: right.saturating_sub(left),
            height: bottom.saturating_sub(top),
        }
    }

    /// X-coordinate immediately right of the region (exclusive)
    pub fn end_x(&self) -> u32 {
        self.x + self.width
    }

    /// Y-coordinate immediately below the region (exclusive)
    pub fn end_y(&self) -> u32 {
        self.y + self.height
    }

    /// True when the region covers no pixels
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Check whether a pixel lies inside the region
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.end_x() && y >= self.y && y < self.end_y()
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{} at ({}, {})", self.width, self.height, self.x, self.y)
    }
}

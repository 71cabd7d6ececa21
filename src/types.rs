// this_file: src/types.rs

//! Value types shared across the crate.

use serde::{Deserialize, Serialize};

/// Pixel-unit measurements of a single glyph.
///
/// All fields are whole device pixels at the face's current size, truncated
/// from the engine's 26.6 fixed-point values (arithmetic shift, so negative
/// bearings truncate toward negative infinity). Every call to
/// [`Face::metrics`](crate::Face::metrics) produces a fresh snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metrics {
    /// Width of the glyph's ink box.
    pub width: i32,
    /// Height of the glyph's ink box.
    pub height: i32,
    /// Horizontal distance from the pen position to the left edge of the ink.
    pub hori_bearing_x: i32,
    /// Vertical distance from the baseline up to the top edge of the ink.
    pub hori_bearing_y: i32,
    /// Pen advance for horizontal layout.
    pub advance_width: i32,
    /// Horizontal bearing for vertical layout.
    pub vert_bearing_x: i32,
    /// Vertical bearing for vertical layout.
    pub vert_bearing_y: i32,
    /// Pen advance for vertical layout.
    pub advance_height: i32,
}

/// Axis-aligned rectangle in pixel coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x_min: i32,
    pub y_min: i32,
    pub x_max: i32,
    pub y_max: i32,
}

impl Rect {
    /// Horizontal extent.
    pub fn width(&self) -> i32 {
        self.x_max - self.x_min
    }

    /// Vertical extent.
    pub fn height(&self) -> i32 {
        self.y_max - self.y_min
    }
}

/// Pixel offset into a destination canvas, measured from its top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

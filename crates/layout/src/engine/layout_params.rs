// SPDX-License-Identifier: MIT

//!
//! Layout params
//!

use crate::{BarGeometry, Position};
use serde::Serialize;
use std::fmt::Debug;

/// A box that specifies the location and size of something (e.g. the location
/// and size of a bar)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PositionAndSize {
    /// The smallest x/y values (boxes grow down and to the right from here)
    pub position: Position,

    /// The width of the box (from which the largest x value can be derived)
    pub width: f64,

    /// The height of the box (from which the largest y value can be derived)
    pub height: f64,
}

impl PositionAndSize {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        PositionAndSize {
            position: Position { x, y },
            width,
            height,
        }
    }

    /// Place a bar at the top of a lane with the given height
    pub fn from_bar(bar: BarGeometry, y: f64, height: f64) -> Self {
        PositionAndSize::new(bar.left_offset, y, bar.width, height)
    }

    pub fn add_offset(&mut self, x_offset: f64, y_offset: f64) {
        self.position.x += x_offset;
        self.position.y += y_offset;
    }

    /// Calculate the largest x value of the box
    pub fn max_x(&self) -> f64 {
        self.position.x + self.width
    }

    /// Calculate the largest y value of the box (i.e. how far the box grows
    /// downwards)
    pub fn max_y(&self) -> f64 {
        self.position.y + self.height
    }
}

// SPDX-License-Identifier: MIT

//!
//! Colours used when drawing the Gantt grid
//!

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The colours given to groups, in order (wrapping round when there are more
/// groups than colours)
pub const GROUP_PALETTE: [&str; 12] = [
    "#3B82F6", "#EF4444", "#10B981", "#F59E0B", "#8B5CF6", "#EC4899", "#06B6D4", "#6366F1",
    "#D97706", "#059669", "#7C3AED", "#DC2626",
];

/// Errors that can arise in relation to a [`Colour`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColourError {
    #[error("`{0}` is not a hex colour (e.g. `#3b82f6`)")]
    InvalidHex(String),
}

/// The `Colour` type.  (De)serialised as a hex string (e.g. `#3b82f6`).
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Colour {
    r: u8,
    g: u8,
    b: u8,
}

impl From<Colour> for [u8; 3] {
    fn from(value: Colour) -> Self {
        [value.r, value.g, value.b]
    }
}

impl From<[u8; 3]> for Colour {
    fn from(value: [u8; 3]) -> Self {
        Colour::from_rgb(value[0], value[1], value[2])
    }
}

impl From<Colour> for String {
    fn from(value: Colour) -> Self {
        value.to_hex()
    }
}

impl TryFrom<String> for Colour {
    type Error = ColourError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Colour::from_hex(value)
    }
}

impl Colour {
    /// Create a colour from RGB values
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Colour { r, g, b }
    }

    /// Create a colour from a hex colour (e.g. `#ab66ef`, `ab66ef`, `#ab66efff`).
    /// If the hex value has an alpha component, it is removed.
    pub fn from_hex<S: Into<String>>(hex_colour: S) -> Result<Self, ColourError> {
        let hex_colour = hex_colour.into();
        let invalid = || ColourError::InvalidHex(hex_colour.clone());

        let digits = hex_colour.strip_prefix('#').unwrap_or(&hex_colour);
        let digits = match digits.len() {
            6 => digits,
            8 => &digits[0..6],
            _ => return Err(invalid()),
        };
        if !digits.is_ascii() {
            return Err(invalid());
        }

        let component = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| invalid())
        };
        Ok(Colour::from_rgb(
            component(0..2)?,
            component(2..4)?,
            component(4..6)?,
        ))
    }

    /// Get the colour as a lowercase hex string (e.g. `#3b82f6`)
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Get a colour as RGB values
    pub fn as_rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Get a lighter shade of the specified colour
    pub fn lightened_colour(colour: Colour) -> Colour {
        let old_r: f64 = colour.r.into();
        let old_g: f64 = colour.g.into();
        let old_b: f64 = colour.b.into();
        let new_r: f64 = (old_r + (0.5 * (255.0 - old_r))).round();
        let new_g: f64 = (old_g + (0.5 * (255.0 - old_g))).round();
        let new_b: f64 = (old_b + (0.5 * (255.0 - old_b))).round();
        Colour::from_rgb(new_r as u8, new_g as u8, new_b as u8)
    }

    /// The palette colour for the group at `index` (in display order)
    pub fn for_group(index: usize) -> Colour {
        let hex = GROUP_PALETTE[index % GROUP_PALETTE.len()];
        // The palette is fixed, so this can only fail if it is edited badly
        Colour::from_hex(hex).unwrap_or_default()
    }
}

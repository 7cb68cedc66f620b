//! Notification accent color

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use super::error::ColorParseError;

/// A 32-bit ARGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(u32);

impl Color {
    pub const BLACK: Color = Color(0xFF00_0000);
    pub const DKGRAY: Color = Color(0xFF44_4444);
    pub const GRAY: Color = Color(0xFF88_8888);
    pub const LTGRAY: Color = Color(0xFFCC_CCCC);
    pub const WHITE: Color = Color(0xFFFF_FFFF);
    pub const RED: Color = Color(0xFFFF_0000);
    pub const GREEN: Color = Color(0xFF00_FF00);
    pub const BLUE: Color = Color(0xFF00_00FF);
    pub const YELLOW: Color = Color(0xFFFF_FF00);
    pub const CYAN: Color = Color(0xFF00_FFFF);
    pub const MAGENTA: Color = Color(0xFFFF_00FF);

    /// Create from a packed ARGB value
    pub const fn from_argb(argb: u32) -> Self {
        Self(argb)
    }

    /// Create an opaque color from RGB components
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(0xFF00_0000 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    /// Packed ARGB value
    pub const fn argb(&self) -> u32 {
        self.0
    }

    pub const fn alpha(&self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(&self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(&self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(&self) -> u8 {
        self.0 as u8
    }

    /// Look up one of the platform's named colors (case-insensitive)
    fn named(name: &str) -> Option<Self> {
        let color = match name.to_ascii_lowercase().as_str() {
            "black" => Self::BLACK,
            "darkgray" | "darkgrey" => Self::DKGRAY,
            "gray" | "grey" => Self::GRAY,
            "lightgray" | "lightgrey" => Self::LTGRAY,
            "white" => Self::WHITE,
            "red" => Self::RED,
            "green" => Self::GREEN,
            "blue" => Self::BLUE,
            "yellow" => Self::YELLOW,
            "cyan" | "aqua" => Self::CYAN,
            "magenta" | "fuchsia" => Self::MAGENTA,
            "lime" => Self::from_rgb(0x00, 0xFF, 0x00),
            "maroon" => Self::from_rgb(0x80, 0x00, 0x00),
            "navy" => Self::from_rgb(0x00, 0x00, 0x80),
            "olive" => Self::from_rgb(0x80, 0x80, 0x00),
            "purple" => Self::from_rgb(0x80, 0x00, 0x80),
            "silver" => Self::from_rgb(0xC0, 0xC0, 0xC0),
            "teal" => Self::from_rgb(0x00, 0x80, 0x80),
            _ => return None,
        };
        Some(color)
    }
}

/// Parses the platform color literal syntax: `#RRGGBB`, `#AARRGGBB`, or a
/// color name such as `red` or `lightgray`.
impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ColorParseError {
            input: s.to_string(),
        };

        let Some(hex) = s.strip_prefix('#') else {
            return Self::named(s).ok_or_else(err);
        };

        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(err());
        }

        let value = u32::from_str_radix(hex, 16).map_err(|_| err())?;
        match hex.len() {
            6 => Ok(Self(0xFF00_0000 | value)),
            8 => Ok(Self(value)),
            _ => Err(err()),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

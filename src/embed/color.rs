use std::fmt;

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An RGB color, sent to Discord as a single packed integer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const RED: Self = Self::new(255, 0, 0);
    pub const GREEN: Self = Self::new(0, 255, 0);
    pub const BLUE: Self = Self::new(0, 0, 255);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    #[must_use]
    pub fn to_discord(self) -> u32 {
        let r = u32::from(self.r);
        let g = u32::from(self.g);
        let b = u32::from(self.b);
        (r << 16) | (g << 8) | b
    }

    /// Unpacks a Discord color integer.
    /// Only the low 24 bits are meaningful; anything above is discarded.
    #[must_use]
    pub const fn from_discord(number: i64) -> Self {
        Self {
            r: ((number >> 16) & 0xFF) as u8,
            g: ((number >> 8) & 0xFF) as u8,
            b: (number & 0xFF) as u8,
        }
    }

    /// Parses `rrggbb`, optionally prefixed with `#`.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        ensure!(
            digits.len() == 6 && digits.bytes().all(|b| b.is_ascii_hexdigit()),
            "Expected a color in the form #rrggbb, got {hex:?}"
        );
        let number = u32::from_str_radix(digits, 16)
            .with_context(|| format!("Could not parse hex color {hex:?}"))?;
        Ok(Self::from_discord(i64::from(number)))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.to_discord())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let number = i64::deserialize(deserializer)?;
        Ok(Self::from_discord(number))
    }
}

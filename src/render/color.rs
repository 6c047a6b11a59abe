use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{Result, VoicegridError};

/// RGBA colour written and parsed as `rrggbb` or `rrggbbaa` hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !matches!(digits.len(), 6 | 8) || !digits.is_ascii() {
            return Err(VoicegridError::Color(hex.to_string()));
        }
        let channel = |idx: usize| {
            u8::from_str_radix(&digits[idx..idx + 2], 16)
                .map_err(|_| VoicegridError::Color(hex.to_string()))
        };
        let alpha = if digits.len() == 8 { channel(6)? } else { 0xff };
        Ok(Self::rgba(channel(0)?, channel(2)?, channel(4)?, alpha))
    }
}

impl FromStr for Color {
    type Err = VoicegridError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = VoicegridError;

    fn try_from(value: String) -> Result<Self> {
        Self::from_hex(&value)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if self.a != 0xff {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

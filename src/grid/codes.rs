//! Tile code alphabet: the bijection between grid indices and spoken codes.
//!
//! Codes are two letters followed by an optional colour suffix. Index order is
//! colour-major, then first letter, then second letter, so index 0 is `aa`,
//! index 1 is `ab`, and the first green code follows the last uncoloured one.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, VoicegridError};
use crate::render::Color;

/// Colour suffix appended to a tile code once the plain codes run out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSuffix {
    None,
    Green,
    Red,
    Blue,
    Purple,
    Yellow,
}

impl ColorSuffix {
    /// Generation order of the suffixes.
    pub const ALL: [ColorSuffix; 6] = [
        ColorSuffix::None,
        ColorSuffix::Green,
        ColorSuffix::Red,
        ColorSuffix::Blue,
        ColorSuffix::Purple,
        ColorSuffix::Yellow,
    ];

    pub fn letter(self) -> Option<char> {
        match self {
            ColorSuffix::None => None,
            ColorSuffix::Green => Some('g'),
            ColorSuffix::Red => Some('r'),
            ColorSuffix::Blue => Some('b'),
            ColorSuffix::Purple => Some('p'),
            ColorSuffix::Yellow => Some('y'),
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|suffix| suffix.letter() == Some(letter))
    }

    /// Label colour used when drawing a tile with this suffix.
    pub fn label_color(self) -> Color {
        match self {
            ColorSuffix::None => Color::WHITE,
            ColorSuffix::Green => Color::rgb(0x00, 0xff, 0x00),
            ColorSuffix::Red => Color::rgb(0xff, 0x00, 0x00),
            ColorSuffix::Blue => Color::rgb(0x00, 0x00, 0xff),
            ColorSuffix::Purple => Color::rgb(0xff, 0x00, 0xff),
            ColorSuffix::Yellow => Color::rgb(0xff, 0xff, 0x00),
        }
    }

    fn position(self) -> usize {
        Self::ALL
            .iter()
            .position(|suffix| *suffix == self)
            .unwrap_or_default()
    }
}

/// Parsed tile code such as `aa`, `qz` or `fkg`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileCode {
    first: u8,
    second: u8,
    suffix: ColorSuffix,
}

impl TileCode {
    pub fn new(first: char, second: char, suffix: ColorSuffix) -> Result<Self> {
        if !first.is_ascii_lowercase() || !second.is_ascii_lowercase() {
            return Err(VoicegridError::MalformedCode(format!("{first}{second}")));
        }
        Ok(Self {
            first: first as u8,
            second: second as u8,
            suffix,
        })
    }

    pub fn first(&self) -> char {
        self.first as char
    }

    pub fn second(&self) -> char {
        self.second as char
    }

    pub fn suffix(&self) -> ColorSuffix {
        self.suffix
    }

    /// The two letters drawn on the tile; the suffix is shown as label colour.
    pub fn label(&self) -> String {
        let mut label = String::with_capacity(2);
        label.push(self.first());
        label.push(self.second());
        label
    }
}

impl FromStr for TileCode {
    type Err = VoicegridError;

    fn from_str(s: &str) -> Result<Self> {
        let malformed = || VoicegridError::MalformedCode(s.to_string());
        let lowered = s.trim().to_ascii_lowercase();
        let mut chars = lowered.chars();
        let (Some(first), Some(second)) = (chars.next(), chars.next()) else {
            return Err(malformed());
        };
        let suffix = match chars.next() {
            None => ColorSuffix::None,
            Some(letter) => ColorSuffix::from_letter(letter).ok_or_else(malformed)?,
        };
        if chars.next().is_some() {
            return Err(malformed());
        }
        Self::new(first, second, suffix).map_err(|_| malformed())
    }
}

impl fmt::Display for TileCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.first(), self.second())?;
        if let Some(letter) = self.suffix.letter() {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

/// The letters available for codes: `a..z` minus an exclusion set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CodeAlphabet {
    letters: Vec<u8>,
}

impl Default for CodeAlphabet {
    fn default() -> Self {
        Self::new("")
    }
}

impl CodeAlphabet {
    /// Build an alphabet excluding every letter found in `excluded`.
    /// Non-letters are ignored and matching is case-insensitive.
    pub fn new(excluded: &str) -> Self {
        let excluded = excluded.to_ascii_lowercase();
        let letters = (b'a'..=b'z')
            .filter(|letter| !excluded.as_bytes().contains(letter))
            .collect();
        Self { letters }
    }

    pub fn letters(&self) -> &[u8] {
        &self.letters
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Number of distinct codes: one square of letter pairs per suffix.
    pub fn capacity(&self) -> usize {
        ColorSuffix::ALL.len() * self.len() * self.len()
    }

    pub fn index_to_code(&self, index: usize) -> Option<TileCode> {
        if index >= self.capacity() {
            return None;
        }
        let per_suffix = self.len() * self.len();
        let suffix = ColorSuffix::ALL[index / per_suffix];
        let within = index % per_suffix;
        Some(TileCode {
            first: self.letters[within / self.len()],
            second: self.letters[within % self.len()],
            suffix,
        })
    }

    /// Inverse of [`index_to_code`](Self::index_to_code). `None` when the code
    /// uses a letter outside this alphabet.
    pub fn code_to_index(&self, code: &TileCode) -> Option<usize> {
        let first = self.letters.iter().position(|l| *l == code.first)?;
        let second = self.letters.iter().position(|l| *l == code.second)?;
        let per_suffix = self.len() * self.len();
        Some(code.suffix.position() * per_suffix + first * self.len() + second)
    }

    /// Fresh code sequence starting at index 0.
    pub fn codes(&self) -> Codes<'_> {
        Codes {
            alphabet: self,
            next: 0,
        }
    }
}

/// Lazy code sequence; call [`CodeAlphabet::codes`] again to restart.
#[derive(Debug, Clone)]
pub struct Codes<'a> {
    alphabet: &'a CodeAlphabet,
    next: usize,
}

impl Iterator for Codes<'_> {
    type Item = TileCode;

    fn next(&mut self) -> Option<TileCode> {
        let code = self.alphabet.index_to_code(self.next)?;
        self.next += 1;
        Some(code)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.alphabet.capacity().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Codes<'_> {}

//! Display width helpers for monospace text measurement.

/// Number of monospace cells `text` occupies.
pub fn display_width(text: &str) -> usize {
    unicode_width::UnicodeWidthStr::width(text)
}

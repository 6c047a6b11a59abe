//! Paint-context seam between the engines and the host canvas.

mod color;
mod core;

pub use color::Color;
pub use core::{DrawCommand, DrawList, MonospaceMetrics, PaintContext, TextMetrics};

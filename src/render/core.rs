use crate::display_width;
use crate::geometry::{Point, Rect};

use super::Color;

/// Text measurement half of a paint context. The layout measure pass only
/// needs this.
pub trait TextMetrics {
    fn set_text_size(&mut self, size: f32);

    fn set_bold(&mut self, _bold: bool) {}

    /// Bounding box of `text` relative to its baseline origin, so `y` is
    /// negative for glyphs above the baseline.
    fn measure_text(&mut self, text: &str) -> Rect;
}

/// Drawing primitives exposed by the host canvas during a draw callback.
pub trait PaintContext: TextMetrics {
    fn set_color(&mut self, color: Color);
    fn draw_circle(&mut self, center: Point, radius: f32);
    fn draw_rect(&mut self, rect: Rect);
    fn draw_round_rect(&mut self, rect: Rect, radius: f32);
    /// Draw `text` with its baseline starting at `(x, y)`.
    fn draw_text(&mut self, text: &str, x: f32, y: f32);
}

/// Fixed-advance glyph metrics, expressed as ratios of the text size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMetrics {
    pub advance: f32,
    pub cap_height: f32,
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        Self {
            advance: 0.6,
            cap_height: 0.75,
        }
    }
}

impl MonospaceMetrics {
    pub fn measure(&self, text: &str, size: f32) -> Rect {
        let height = (size * self.cap_height).round();
        let width = display_width(text) as f32 * (size * self.advance).round();
        Rect::new(0.0, -height, width, height)
    }
}

/// Recorded drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Color(Color),
    Circle { center: Point, radius: f32 },
    Rect(Rect),
    RoundRect { rect: Rect, radius: f32 },
    Text { text: String, x: f32, y: f32, size: f32, bold: bool },
}

/// Paint context that records every operation instead of rasterising it.
///
/// Hosts without a native canvas can replay the list; tests and benchmarks
/// use it to inspect what a draw callback produced.
#[derive(Debug, Clone)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
    metrics: MonospaceMetrics,
    text_size: f32,
    bold: bool,
}

impl Default for DrawList {
    fn default() -> Self {
        Self::new(MonospaceMetrics::default())
    }
}

impl DrawList {
    pub fn new(metrics: MonospaceMetrics) -> Self {
        Self {
            commands: Vec::new(),
            metrics,
            text_size: 16.0,
            bold: false,
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl TextMetrics for DrawList {
    fn set_text_size(&mut self, size: f32) {
        self.text_size = size;
    }

    fn set_bold(&mut self, bold: bool) {
        self.bold = bold;
    }

    fn measure_text(&mut self, text: &str) -> Rect {
        self.metrics.measure(text, self.text_size)
    }
}

impl PaintContext for DrawList {
    fn set_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::Color(color));
    }

    fn draw_circle(&mut self, center: Point, radius: f32) {
        self.commands.push(DrawCommand::Circle { center, radius });
    }

    fn draw_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::Rect(rect));
    }

    fn draw_round_rect(&mut self, rect: Rect, radius: f32) {
        self.commands.push(DrawCommand::RoundRect { rect, radius });
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            size: self.text_size,
            bold: self.bold,
        });
    }
}

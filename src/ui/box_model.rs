use crate::geometry::{Point, Rect};

use super::BoxSpacing;

/// Margin, padding and content rects of one laid-out node.
///
/// The origin is fixed at construction; the content rect then grows to fit
/// what is placed in it and the outer rects follow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxModelLayout {
    pub margin_spacing: BoxSpacing,
    pub padding_spacing: BoxSpacing,
    pub margin_rect: Rect,
    pub padding_rect: Rect,
    pub content_rect: Rect,
}

impl BoxModelLayout {
    pub fn new(origin: Point, margin: BoxSpacing, padding: BoxSpacing) -> Self {
        let padding_origin = Point::new(origin.x + margin.left, origin.y + margin.top);
        Self {
            margin_spacing: margin,
            padding_spacing: padding,
            margin_rect: Rect::new(origin.x, origin.y, 0.0, 0.0),
            padding_rect: Rect::new(padding_origin.x, padding_origin.y, 0.0, 0.0),
            content_rect: Rect::new(
                padding_origin.x + padding.left,
                padding_origin.y + padding.top,
                0.0,
                0.0,
            ),
        }
        .with_outer_sizes()
    }

    pub fn content_origin(&self) -> Point {
        Point::new(self.content_rect.x, self.content_rect.y)
    }

    pub fn grow_content(&mut self, rect: &Rect) {
        self.content_rect.grow_to_include(rect);
        *self = self.with_outer_sizes();
    }

    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.margin_rect.translate(dx, dy);
        self.padding_rect.translate(dx, dy);
        self.content_rect.translate(dx, dy);
    }

    fn with_outer_sizes(mut self) -> Self {
        self.padding_rect.width = self.content_rect.width + self.padding_spacing.horizontal();
        self.padding_rect.height = self.content_rect.height + self.padding_spacing.vertical();
        self.margin_rect.width = self.padding_rect.width + self.margin_spacing.horizontal();
        self.margin_rect.height = self.padding_rect.height + self.margin_spacing.vertical();
        self
    }
}

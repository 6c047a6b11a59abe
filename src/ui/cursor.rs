use crate::geometry::{Point, Rect};

use super::FlexDirection;

/// Running stack position inside a container's content rect.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Cursor {
    pub x: f32,
    pub y: f32,
}

impl Cursor {
    pub fn new(origin: Point) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
        }
    }

    pub fn move_to(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Step past a child's margin box plus `gap` along the stacking axis.
    pub fn advance(&mut self, direction: FlexDirection, extent: &Rect, gap: f32) {
        match direction {
            FlexDirection::Column => self.move_to(self.x, self.y + extent.height + gap),
            FlexDirection::Row => self.move_to(self.x + extent.width + gap, self.y),
        }
    }
}

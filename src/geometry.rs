/// Point in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in screen coordinates.
///
/// Containment is half-open: the left and top edges are inside, the right
/// and bottom edges are not.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Smallest rect covering both corner points, extended by one pixel so
    /// that both corners are contained.
    pub fn from_corners(a: Point, b: Point) -> Self {
        let x = a.x.min(b.x);
        let y = a.y.min(b.y);
        Self::new(x, y, (a.x - b.x).abs() + 1.0, (a.y - b.y).abs() + 1.0)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Grow this rect (keeping its origin) until it covers `other`.
    pub fn grow_to_include(&mut self, other: &Rect) {
        self.width = self.width.max(other.right() - self.x);
        self.height = self.height.max(other.bottom() - self.y);
    }

    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.x += dx;
        self.y += dy;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_half_open() {
        let rect = Rect::new(10.0, 10.0, 5.0, 5.0);
        assert!(rect.contains(Point::new(10.0, 10.0)));
        assert!(rect.contains(Point::new(14.5, 14.5)));
        assert!(!rect.contains(Point::new(15.0, 12.0)));
        assert!(!rect.contains(Point::new(12.0, 15.0)));
    }

    #[test]
    fn corners_cover_both_points_in_any_order() {
        let a = Point::new(90.0, 150.0);
        let b = Point::new(30.0, 30.0);
        let rect = Rect::from_corners(a, b);
        assert_eq!(rect, Rect::new(30.0, 30.0, 61.0, 121.0));
        assert!(rect.contains(a));
        assert!(rect.contains(b));
    }

    #[test]
    fn grow_keeps_origin() {
        let mut rect = Rect::new(5.0, 5.0, 0.0, 0.0);
        rect.grow_to_include(&Rect::new(5.0, 5.0, 40.0, 10.0));
        rect.grow_to_include(&Rect::new(5.0, 31.0, 20.0, 10.0));
        assert_eq!(rect, Rect::new(5.0, 5.0, 40.0, 36.0));
    }
}

use serde::Deserialize;

/// Resolved per-side spacing for a margin or padding box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoxSpacing {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl BoxSpacing {
    pub const fn uniform(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

/// Spacing as written by the caller: an optional value for all sides, one
/// per axis, and one per side.
///
/// [`resolve`](Self::resolve) applies them coarse to fine, so `top` beats
/// `y`, which beats `all`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct SpacingSpec {
    pub all: Option<f32>,
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub top: Option<f32>,
    pub right: Option<f32>,
    pub bottom: Option<f32>,
    pub left: Option<f32>,
}

impl SpacingSpec {
    pub fn all(value: f32) -> Self {
        Self {
            all: Some(value),
            ..Self::default()
        }
    }

    pub fn with_x(mut self, value: f32) -> Self {
        self.x = Some(value);
        self
    }

    pub fn with_y(mut self, value: f32) -> Self {
        self.y = Some(value);
        self
    }

    pub fn with_top(mut self, value: f32) -> Self {
        self.top = Some(value);
        self
    }

    pub fn with_right(mut self, value: f32) -> Self {
        self.right = Some(value);
        self
    }

    pub fn with_bottom(mut self, value: f32) -> Self {
        self.bottom = Some(value);
        self
    }

    pub fn with_left(mut self, value: f32) -> Self {
        self.left = Some(value);
        self
    }

    pub fn resolve(&self) -> BoxSpacing {
        let mut spacing = self.all.map(BoxSpacing::uniform).unwrap_or_default();

        if let Some(x) = self.x {
            spacing.left = x;
            spacing.right = x;
        }
        if let Some(y) = self.y {
            spacing.top = y;
            spacing.bottom = y;
        }

        spacing.top = self.top.unwrap_or(spacing.top);
        spacing.right = self.right.unwrap_or(spacing.right);
        spacing.bottom = self.bottom.unwrap_or(spacing.bottom);
        spacing.left = self.left.unwrap_or(spacing.left);
        spacing
    }
}

impl From<f32> for SpacingSpec {
    fn from(value: f32) -> Self {
        Self::all(value)
    }
}

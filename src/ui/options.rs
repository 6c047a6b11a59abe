use serde::Deserialize;

use crate::error::Result;
use crate::render::Color;

use super::{BoxSpacing, SpacingSpec};

/// Stacking axis for a container's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlexDirection {
    Row,
    #[default]
    Column,
}

/// Placement of content along an axis. Only the builder root uses it, to
/// anchor the measured content inside the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    #[default]
    #[serde(alias = "flex_start")]
    Start,
    Center,
    #[serde(alias = "flex_end")]
    End,
}

impl Alignment {
    pub(crate) fn share(self) -> f32 {
        match self {
            Alignment::Start => 0.0,
            Alignment::Center => 0.5,
            Alignment::End => 1.0,
        }
    }
}

/// Typed display options for containers and text nodes.
///
/// `color`, `size` and `bold` only affect text nodes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UiOptions {
    pub background_color: Option<Color>,
    pub border_radius: f32,
    pub color: Color,
    pub flex_direction: FlexDirection,
    pub gap: f32,
    pub justify_content: Alignment,
    pub align_items: Alignment,
    pub margin: BoxSpacing,
    pub padding: BoxSpacing,
    pub size: f32,
    pub bold: bool,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            background_color: None,
            border_radius: 0.0,
            color: Color::WHITE,
            flex_direction: FlexDirection::Column,
            gap: 16.0,
            justify_content: Alignment::Start,
            align_items: Alignment::Start,
            margin: BoxSpacing::default(),
            padding: BoxSpacing::default(),
            size: 16.0,
            bold: false,
        }
    }
}

impl UiOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options from a flat style map such as
    /// `{"padding": 16, "margin_right": 32, "background_color": "222222"}`.
    /// Keys the engine does not know are ignored.
    pub fn from_style(style: serde_json::Value) -> Result<Self> {
        let map: StyleMap = serde_json::from_value(style)?;
        Ok(map.into())
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    pub fn with_border_radius(mut self, radius: f32) -> Self {
        self.border_radius = radius;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_direction(mut self, direction: FlexDirection) -> Self {
        self.flex_direction = direction;
        self
    }

    pub fn with_gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }

    pub fn with_justify(mut self, alignment: Alignment) -> Self {
        self.justify_content = alignment;
        self
    }

    pub fn with_align(mut self, alignment: Alignment) -> Self {
        self.align_items = alignment;
        self
    }

    pub fn with_margin(mut self, spec: impl Into<SpacingSpec>) -> Self {
        self.margin = spec.into().resolve();
        self
    }

    pub fn with_padding(mut self, spec: impl Into<SpacingSpec>) -> Self {
        self.padding = spec.into().resolve();
        self
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct StyleMap {
    background_color: Option<Color>,
    border_radius: Option<f32>,
    color: Option<Color>,
    flex_direction: Option<FlexDirection>,
    gap: Option<f32>,
    justify_content: Option<Alignment>,
    align_items: Option<Alignment>,
    size: Option<f32>,
    bold: Option<bool>,
    font_weight: Option<String>,
    margin: Option<f32>,
    margin_x: Option<f32>,
    margin_y: Option<f32>,
    margin_top: Option<f32>,
    margin_right: Option<f32>,
    margin_bottom: Option<f32>,
    margin_left: Option<f32>,
    padding: Option<f32>,
    padding_x: Option<f32>,
    padding_y: Option<f32>,
    padding_top: Option<f32>,
    padding_right: Option<f32>,
    padding_bottom: Option<f32>,
    padding_left: Option<f32>,
}

impl From<StyleMap> for UiOptions {
    fn from(map: StyleMap) -> Self {
        let defaults = UiOptions::default();
        let margin = SpacingSpec {
            all: map.margin,
            x: map.margin_x,
            y: map.margin_y,
            top: map.margin_top,
            right: map.margin_right,
            bottom: map.margin_bottom,
            left: map.margin_left,
        };
        let padding = SpacingSpec {
            all: map.padding,
            x: map.padding_x,
            y: map.padding_y,
            top: map.padding_top,
            right: map.padding_right,
            bottom: map.padding_bottom,
            left: map.padding_left,
        };
        let bold = map.bold.unwrap_or(false) || map.font_weight.as_deref() == Some("bold");

        Self {
            background_color: map.background_color,
            border_radius: map.border_radius.unwrap_or(defaults.border_radius),
            color: map.color.unwrap_or(defaults.color),
            flex_direction: map.flex_direction.unwrap_or(defaults.flex_direction),
            gap: map.gap.unwrap_or(defaults.gap),
            justify_content: map.justify_content.unwrap_or(defaults.justify_content),
            align_items: map.align_items.unwrap_or(defaults.align_items),
            margin: margin.resolve(),
            padding: padding.resolve(),
            size: map.size.unwrap_or(defaults.size),
            bold,
        }
    }
}

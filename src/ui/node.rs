use crate::geometry::{Point, Rect};
use crate::render::{PaintContext, TextMetrics};

use super::{BoxModelLayout, Cursor, UiOptions};

/// Reference glyph for text line height; every line is as tall as this
/// glyph, whatever the string contains.
const LINE_HEIGHT_GLYPH: &str = "E";

/// Node of a layout tree.
#[derive(Debug, Clone, PartialEq)]
pub enum UiNode {
    Container(UiContainer),
    Text(UiText),
}

/// Measured geometry for one node, with its children in tree order.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutBox {
    pub box_model: BoxModelLayout,
    /// Line height used to place a text node's baseline.
    pub text_height: Option<f32>,
    pub children: Vec<LayoutBox>,
}

impl LayoutBox {
    pub fn margin_rect(&self) -> Rect {
        self.box_model.margin_rect
    }

    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.box_model.translate(dx, dy);
        for child in &mut self.children {
            child.translate(dx, dy);
        }
    }
}

impl UiNode {
    pub fn measure<M>(&self, origin: Point, metrics: &mut M) -> LayoutBox
    where
        M: TextMetrics + ?Sized,
    {
        match self {
            UiNode::Container(container) => container.measure(origin, metrics),
            UiNode::Text(text) => text.measure(origin, metrics),
        }
    }

    /// Paint this node using geometry from [`measure`](Self::measure).
    pub fn paint<P>(&self, layout: &LayoutBox, ctx: &mut P)
    where
        P: PaintContext + ?Sized,
    {
        match self {
            UiNode::Container(container) => container.paint(layout, ctx),
            UiNode::Text(text) => text.paint(layout, ctx),
        }
    }

    pub fn options(&self) -> &UiOptions {
        match self {
            UiNode::Container(container) => &container.options,
            UiNode::Text(text) => &text.options,
        }
    }
}

impl From<UiContainer> for UiNode {
    fn from(container: UiContainer) -> Self {
        UiNode::Container(container)
    }
}

impl From<UiText> for UiNode {
    fn from(text: UiText) -> Self {
        UiNode::Text(text)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct UiContainer {
    pub options: UiOptions,
    pub children: Vec<UiNode>,
}

impl UiContainer {
    pub fn new(options: UiOptions) -> Self {
        Self {
            options,
            children: Vec::new(),
        }
    }

    pub fn with_child(mut self, child: impl Into<UiNode>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<UiNode>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Append an empty container and return it for filling in.
    pub fn add_container(&mut self, options: UiOptions) -> &mut UiContainer {
        self.children.push(UiNode::Container(UiContainer::new(options)));
        match self.children.last_mut() {
            Some(UiNode::Container(container)) => container,
            _ => unreachable!("container was just pushed"),
        }
    }

    pub fn add_text(&mut self, text: impl Into<String>, options: UiOptions) -> &mut UiText {
        self.children.push(UiNode::Text(UiText::new(text, options)));
        match self.children.last_mut() {
            Some(UiNode::Text(text)) => text,
            _ => unreachable!("text was just pushed"),
        }
    }

    pub fn measure<M>(&self, origin: Point, metrics: &mut M) -> LayoutBox
    where
        M: TextMetrics + ?Sized,
    {
        let mut box_model = BoxModelLayout::new(origin, self.options.margin, self.options.padding);
        let mut cursor = Cursor::new(box_model.content_origin());
        let mut children = Vec::with_capacity(self.children.len());

        for child in &self.children {
            let layout = child.measure(cursor.position(), metrics);
            let extent = layout.margin_rect();
            box_model.grow_content(&extent);
            cursor.advance(self.options.flex_direction, &extent, self.options.gap);
            children.push(layout);
        }

        LayoutBox {
            box_model,
            text_height: None,
            children,
        }
    }

    pub fn paint<P>(&self, layout: &LayoutBox, ctx: &mut P)
    where
        P: PaintContext + ?Sized,
    {
        paint_background(&self.options, &layout.box_model, ctx);
        for (child, child_layout) in self.children.iter().zip(&layout.children) {
            child.paint(child_layout, ctx);
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UiText {
    pub text: String,
    pub options: UiOptions,
}

impl UiText {
    pub fn new(text: impl Into<String>, options: UiOptions) -> Self {
        Self {
            text: text.into(),
            options,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, UiOptions::default())
    }

    pub fn measure<M>(&self, origin: Point, metrics: &mut M) -> LayoutBox
    where
        M: TextMetrics + ?Sized,
    {
        let mut box_model = BoxModelLayout::new(origin, self.options.margin, self.options.padding);
        metrics.set_text_size(self.options.size);
        metrics.set_bold(self.options.bold);
        let width = metrics.measure_text(&self.text).width;
        let height = metrics.measure_text(LINE_HEIGHT_GLYPH).height;
        let content = box_model.content_origin();
        box_model.grow_content(&Rect::new(content.x, content.y, width, height));

        LayoutBox {
            box_model,
            text_height: Some(height),
            children: Vec::new(),
        }
    }

    pub fn paint<P>(&self, layout: &LayoutBox, ctx: &mut P)
    where
        P: PaintContext + ?Sized,
    {
        paint_background(&self.options, &layout.box_model, ctx);
        let content = layout.box_model.content_rect;
        ctx.set_color(self.options.color);
        ctx.set_text_size(self.options.size);
        ctx.set_bold(self.options.bold);
        ctx.draw_text(
            &self.text,
            content.x,
            content.y + layout.text_height.unwrap_or_default(),
        );
    }
}

fn paint_background<P>(options: &UiOptions, box_model: &BoxModelLayout, ctx: &mut P)
where
    P: PaintContext + ?Sized,
{
    let Some(color) = options.background_color else {
        return;
    };
    ctx.set_color(color);
    if options.border_radius > 0.0 {
        ctx.draw_round_rect(box_model.padding_rect, options.border_radius);
    } else {
        ctx.draw_rect(box_model.padding_rect);
    }
}

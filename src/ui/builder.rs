use crate::geometry::{Point, Rect};
use crate::host::{OverlayHost, OverlayId, OverlayKind, ScreenSource};
use crate::render::{PaintContext, TextMetrics};

use super::{FlexDirection, LayoutBox, UiContainer, UiNode, UiOptions};

/// Root of a screen-sized layout tree bound to a panel overlay.
///
/// The root's `justify_content` and `align_items` place the measured root
/// box, background included, inside the screen; everything below the root
/// stacks from the top-left of its parent.
#[derive(Debug, Clone, PartialEq)]
pub struct UiBuilder {
    root: UiContainer,
    overlay: Option<OverlayId>,
}

impl UiBuilder {
    pub fn new(options: UiOptions) -> Self {
        Self {
            root: UiContainer::new(options),
            overlay: None,
        }
    }

    pub fn with_child(mut self, child: impl Into<UiNode>) -> Self {
        self.root.children.push(child.into());
        self
    }

    pub fn root(&self) -> &UiContainer {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut UiContainer {
        &mut self.root
    }

    /// Measure the tree against `screen` and anchor it.
    pub fn layout<M>(&self, screen: Rect, metrics: &mut M) -> LayoutBox
    where
        M: TextMetrics + ?Sized,
    {
        let mut layout = self.root.measure(Point::new(screen.x, screen.y), metrics);
        let options = &self.root.options;
        let content = layout.box_model.content_rect;
        let free_width =
            (screen.width - options.margin.horizontal() - options.padding.horizontal() - content.width)
                .max(0.0);
        let free_height =
            (screen.height - options.margin.vertical() - options.padding.vertical() - content.height)
                .max(0.0);

        let (dx, dy) = match options.flex_direction {
            FlexDirection::Column => (
                free_width * options.align_items.share(),
                free_height * options.justify_content.share(),
            ),
            FlexDirection::Row => (
                free_width * options.justify_content.share(),
                free_height * options.align_items.share(),
            ),
        };

        if dx != 0.0 || dy != 0.0 {
            layout.translate(dx, dy);
        }
        layout
    }

    /// Draw callback body: one measure pass, then one paint pass over it.
    pub fn on_draw<P>(&self, screen: Rect, ctx: &mut P)
    where
        P: PaintContext + ?Sized,
    {
        let layout = self.layout(screen, ctx);
        self.root.paint(&layout, ctx);
    }

    /// Open the panel overlay unless it is already open.
    pub fn show<H>(&mut self, host: &mut H)
    where
        H: OverlayHost + ScreenSource + ?Sized,
    {
        if self.overlay.is_some() {
            return;
        }
        let screen = host.main_screen();
        let overlay = host.open_overlay(OverlayKind::Panel, screen);
        host.freeze(overlay);
        self.overlay = Some(overlay);
    }

    pub fn hide<H>(&mut self, host: &mut H)
    where
        H: OverlayHost + ?Sized,
    {
        if let Some(overlay) = self.overlay.take() {
            host.close_overlay(overlay);
        }
    }

    pub fn overlay(&self) -> Option<OverlayId> {
        self.overlay
    }

    pub fn is_visible(&self) -> bool {
        self.overlay.is_some()
    }
}

//! Traits for the platform services the engines call into.
//!
//! Screen capture, canvases, input injection and mode bookkeeping all live
//! in the host. The session only issues requests through these seams and
//! never blocks on them.

use std::time::Duration;

use crate::geometry::{Point, Rect};
use crate::session::DragVariant;

/// Handle for a host overlay canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OverlayId(pub u64);

/// What an overlay displays; the host routes its draw callback accordingly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlayKind {
    Grid,
    Panel,
}

/// Read-only screen geometry and pointer state.
pub trait ScreenSource {
    fn main_screen(&self) -> Rect;

    fn active_window(&self) -> Rect {
        self.main_screen()
    }

    fn pointer_position(&self) -> Point;
}

/// Overlay canvases. The host calls back into the session to paint them.
pub trait OverlayHost {
    fn open_overlay(&mut self, kind: OverlayKind, screen: Rect) -> OverlayId;
    /// Request a redraw of `overlay`.
    fn freeze(&mut self, overlay: OverlayId);
    fn close_overlay(&mut self, overlay: OverlayId);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl MouseButton {
    /// Platform button index.
    pub fn index(self) -> u8 {
        match self {
            MouseButton::Left => 0,
            MouseButton::Right => 1,
            MouseButton::Middle => 2,
        }
    }
}

/// Work the host performs once a motion stops.
#[derive(Debug, Clone, PartialEq)]
pub enum StopAction {
    Press(MouseButton),
    Release(MouseButton),
    Then(Box<Motion>),
}

/// Smooth pointer motion request.
#[derive(Debug, Clone, PartialEq)]
pub struct Motion {
    /// Start point; `None` starts wherever the pointer is.
    pub from: Option<Point>,
    pub to: Point,
    pub duration: Option<Duration>,
    pub on_stop: Vec<StopAction>,
}

impl Motion {
    pub fn to(target: Point) -> Self {
        Self {
            from: None,
            to: target,
            duration: None,
            on_stop: Vec::new(),
        }
    }

    pub fn between(from: Point, to: Point) -> Self {
        Self {
            from: Some(from),
            ..Self::to(to)
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    pub fn then(mut self, action: StopAction) -> Self {
        self.on_stop.push(action);
        self
    }
}

/// Pointer input injection.
pub trait PointerDriver {
    /// Move instantly.
    fn jump(&mut self, to: Point);
    /// Start a motion now, replacing any motion in flight.
    fn start_motion(&mut self, motion: Motion);
    /// Run a motion after every previously queued motion has stopped.
    fn enqueue_motion(&mut self, motion: Motion);
    /// Continuous motion towards a point until stopped.
    fn fly_towards(&mut self, to: Point);
    fn stop(&mut self);
    fn press(&mut self, button: MouseButton);
    fn release(&mut self, button: MouseButton);
}

/// Mode bookkeeping owned by the platform.
pub trait ModeHost {
    fn enable_mode(&mut self, variant: DragVariant);
    fn disable_mode(&mut self);
    /// Bind or unbind the noise-triggered stop action.
    fn set_noise_stop(&mut self, enabled: bool);
}

/// Everything a [`DragSession`](crate::DragSession) needs from its host.
pub trait Host: ScreenSource + OverlayHost + PointerDriver + ModeHost {}

impl<T> Host for T where T: ScreenSource + OverlayHost + PointerDriver + ModeHost {}

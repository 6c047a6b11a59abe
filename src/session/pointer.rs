use std::time::Duration;

use crate::error::Result;
use crate::geometry::Point;
use crate::grid::TileCode;
use crate::host::{Motion, PointerDriver, ScreenSource, StopAction};

use super::DragSession;

/// Duration of each leg of a drag.
const DRAG_LEG: Duration = Duration::from_millis(200);

impl DragSession {
    /// Warp the pointer onto a tile and halt any continuous motion.
    pub fn jump_to<H>(&mut self, target: &TileCode, host: &mut H) -> Result<()>
    where
        H: PointerDriver + ?Sized,
    {
        let point = self.resolve(target)?;
        host.jump(point);
        host.stop();
        self.record_motions(1);
        Ok(())
    }

    pub fn move_to<H>(&mut self, target: &TileCode, host: &mut H) -> Result<()>
    where
        H: PointerDriver + ?Sized,
    {
        let point = self.resolve(target)?;
        host.start_motion(Motion::to(point));
        self.record_motions(1);
        Ok(())
    }

    pub fn fly_towards<H>(&mut self, target: &TileCode, host: &mut H) -> Result<()>
    where
        H: PointerDriver + ?Sized,
    {
        let point = self.resolve(target)?;
        host.fly_towards(point);
        Ok(())
    }

    /// Move through `targets` in order: the first motion starts now, the
    /// rest wait in the host's queue.
    ///
    /// Every code is resolved before the first motion is issued, so a grid
    /// rebuilt mid-path does not move the remaining waypoints.
    pub fn move_along<H>(&mut self, targets: &[TileCode], host: &mut H) -> Result<()>
    where
        H: PointerDriver + ?Sized,
    {
        let points = targets
            .iter()
            .map(|target| self.resolve(target))
            .collect::<Result<Vec<Point>>>()?;

        let mut points = points.into_iter();
        let Some(first) = points.next() else {
            return Ok(());
        };
        host.start_motion(Motion::to(first));
        for point in points {
            host.enqueue_motion(Motion::to(point));
        }
        self.record_motions(targets.len());
        Ok(())
    }

    /// Press on `from`, drag to `to`, release.
    pub fn drag_and_drop<H>(&mut self, from: &TileCode, to: &TileCode, host: &mut H) -> Result<()>
    where
        H: PointerDriver + ?Sized,
    {
        let start = self.resolve(from)?;
        let end = self.resolve(to)?;
        self.drag_between(start, end, host);
        Ok(())
    }

    /// Drag the item on `target` to the centre of the active window.
    pub fn bring_to_center<H>(&mut self, target: &TileCode, host: &mut H) -> Result<()>
    where
        H: PointerDriver + ScreenSource + ?Sized,
    {
        let start = self.resolve(target)?;
        let end = host.active_window().center();
        self.drag_between(start, end, host);
        Ok(())
    }

    /// Drag the item on `target` to where the pointer is now.
    pub fn bring<H>(&mut self, target: &TileCode, host: &mut H) -> Result<()>
    where
        H: PointerDriver + ScreenSource + ?Sized,
    {
        let start = self.resolve(target)?;
        let end = host.pointer_position();
        self.drag_between(start, end, host);
        Ok(())
    }

    /// Drag whatever is under the pointer onto `target`.
    pub fn bring_to<H>(&mut self, target: &TileCode, host: &mut H) -> Result<()>
    where
        H: PointerDriver + ScreenSource + ?Sized,
    {
        let end = self.resolve(target)?;
        let start = host.pointer_position();
        let button = self.variant.button();
        host.press(button);
        host.start_motion(Motion::between(start, end).then(StopAction::Release(button)));
        self.record_motions(1);
        Ok(())
    }

    pub fn stop<H>(&mut self, host: &mut H)
    where
        H: PointerDriver + ?Sized,
    {
        host.stop();
    }

    fn drag_between<H>(&mut self, start: Point, end: Point, host: &mut H)
    where
        H: PointerDriver + ?Sized,
    {
        let button = self.variant.button();
        let carry = Motion::between(start, end)
            .with_duration(DRAG_LEG)
            .then(StopAction::Release(button));
        host.start_motion(
            Motion::to(start)
                .with_duration(DRAG_LEG)
                .then(StopAction::Press(button))
                .then(StopAction::Then(Box::new(carry))),
        );
        self.record_motions(2);
    }

    fn record_motions(&self, count: usize) {
        self.with_metrics(|metrics| metrics.record_motions(count));
    }
}

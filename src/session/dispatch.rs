use crate::command::{DragCommand, parse_command};
use crate::error::Result;
use crate::host::Host;
use crate::logging::{LogLevel, json_kv};

use super::DragSession;

impl DragSession {
    /// Carry out a parsed phrase against `host`.
    pub fn execute<H: Host + ?Sized>(&mut self, command: &DragCommand, host: &mut H) -> Result<()> {
        self.log(
            LogLevel::Trace,
            "command",
            [json_kv("command", format!("{command:?}"))],
        );
        match command {
            DragCommand::Show(variant) => self.show(*variant, host)?,
            DragCommand::Hide => self.hide(host),
            DragCommand::MoveAlong(path) => self.move_along(path, host)?,
            DragCommand::Jump(target) => self.jump_to(target, host)?,
            DragCommand::Fly(target) => self.fly_towards(target, host)?,
            DragCommand::Stop => self.stop(host),
            DragCommand::Bring(target) => self.bring(target, host)?,
            DragCommand::BringTo(target) => self.bring_to(target, host)?,
            DragCommand::Center(target) => self.bring_to_center(target, host)?,
            DragCommand::DragAndDrop(from, to) => self.drag_and_drop(from, to, host)?,
            DragCommand::ClearArea(first, second) => self.exclude_between(first, second, host)?,
            DragCommand::ClearLine(first, second) => {
                self.exclude_rows(first, second.as_ref(), host)?
            }
            DragCommand::TakeArea(first, second) => self.isolate_between(first, second, host)?,
            DragCommand::MoreSquares => self.more_squares(host),
            DragCommand::LessSquares => self.less_squares(host),
            DragCommand::Reset => self.reset(host)?,
        }
        Ok(())
    }

    /// Parse `phrase` and execute it.
    pub fn execute_phrase<H: Host + ?Sized>(&mut self, phrase: &str, host: &mut H) -> Result<()> {
        let command = parse_command(phrase)?;
        self.execute(&command, host)
    }
}

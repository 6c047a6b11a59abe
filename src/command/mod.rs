//! Spoken phrase parsing for drag mode.
//!
//! A recognised phrase such as `"drag a b to c d"` becomes a [`DragCommand`]
//! that [`DragSession::execute`](crate::DragSession::execute) carries out.

mod core;

pub use core::{DragCommand, parse_command, parse_target};

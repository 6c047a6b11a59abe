//! Box-model layout engine for on-screen panels.
//!
//! A tree of [`UiNode`]s is measured once into an immutable [`LayoutBox`]
//! tree, then painted from it. Containers stack children along their flex
//! axis with a fixed gap; text leaves size themselves from font metrics.

mod box_model;
mod builder;
mod cursor;
mod node;
mod options;
mod spacing;

pub use box_model::BoxModelLayout;
pub use builder::UiBuilder;
pub use cursor::Cursor;
pub use node::{LayoutBox, UiContainer, UiNode, UiText};
pub use options::{Alignment, FlexDirection, UiOptions};
pub use spacing::{BoxSpacing, SpacingSpec};

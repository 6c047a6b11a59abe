//! Voice-driven pointer targeting.
//!
//! Two engines share this crate. The grid engine tiles the screen, labels
//! each tile with a short spoken code and resolves codes back to screen
//! points that drive pointer motions. The box-model UI engine measures and
//! paints small panels such as the grid's command cheat-sheet. Everything
//! platform-specific sits behind the traits in [`host`] and [`render`].

pub mod command;
pub mod config;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod host;
pub mod logging;
pub mod metrics;
pub mod render;
pub mod session;
pub mod ui;
pub mod width;

pub use command::{DragCommand, parse_command, parse_target};
pub use config::{DragModeSettings, JsonFileSettings, SettingsSource};
pub use error::{Result, VoicegridError};
pub use geometry::{Point, Rect};
pub use grid::{
    CodeAlphabet, ColorSuffix, GridError, GridGeometry, Offset, RegionKind, RegionSet, Tile,
    TileCode, TileGrid, TileStyle,
};
pub use host::{
    Host, ModeHost, Motion, MouseButton, OverlayHost, OverlayId, OverlayKind, PointerDriver,
    ScreenSource, StopAction,
};
pub use logging::{LogEvent, LogFields, LogLevel, Logger, LoggingError, LoggingResult};
pub use metrics::{GridMetrics, MetricSnapshot};
pub use render::{Color, DrawCommand, DrawList, MonospaceMetrics, PaintContext, TextMetrics};
pub use session::{DragSession, DragVariant, SessionConfig, commands_panel};
pub use ui::{
    Alignment, BoxModelLayout, BoxSpacing, FlexDirection, LayoutBox, SpacingSpec, UiBuilder,
    UiContainer, UiNode, UiOptions, UiText,
};
pub use width::display_width;

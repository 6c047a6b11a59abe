//! Drag-mode session: the grid's state and lifecycle.
//!
//! One `DragSession` replaces the process-wide tile size, region lists and
//! code map. The command dispatcher owns it and passes the host in on every
//! call; all mutation happens on that single thread.

use std::sync::{Arc, Mutex};

use serde_json::{Value, json};

use crate::config::{DragModeSettings, SettingsSource};
use crate::error::{Result, VoicegridError};
use crate::geometry::{Point, Rect};
use crate::grid::{CodeAlphabet, GridGeometry, Offset, RegionKind, RegionSet, TileCode, TileGrid, TileStyle};
use crate::host::{Host, MouseButton, OverlayHost, OverlayId, OverlayKind, ScreenSource};
use crate::logging::{LogLevel, Logger, event_with_fields, json_kv};
use crate::metrics::GridMetrics;
use crate::render::{Color, PaintContext};
use crate::ui::UiBuilder;

mod dispatch;
mod panel;
mod pointer;

pub use panel::commands_panel;

const LOG_TARGET: &str = "voicegrid::drag";

/// Which button drags default to, and how the grid is tinted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DragVariant {
    #[default]
    Drag,
    Pan,
    Roll,
}

impl DragVariant {
    pub fn button(self) -> MouseButton {
        match self {
            DragVariant::Drag => MouseButton::Left,
            DragVariant::Pan => MouseButton::Middle,
            DragVariant::Roll => MouseButton::Right,
        }
    }

    /// Fill behind each tile label.
    pub fn tile_background(self) -> Color {
        match self {
            DragVariant::Drag => Color::rgba(0x00, 0x00, 0x00, 0x99),
            DragVariant::Pan => Color::rgba(0x00, 0x47, 0xab, 0x55),
            DragVariant::Roll => Color::rgba(0xde, 0x31, 0x63, 0x55),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DragVariant::Drag => "drag",
            DragVariant::Pan => "pan",
            DragVariant::Roll => "roll",
        }
    }
}

/// Observability knobs for a session.
#[derive(Clone, Default)]
pub struct SessionConfig {
    pub logger: Option<Logger>,
    pub metrics: Option<Arc<Mutex<GridMetrics>>>,
}

impl SessionConfig {
    pub fn enable_metrics(&mut self) {
        if self.metrics.is_none() {
            self.metrics = Some(Arc::new(Mutex::new(GridMetrics::new())));
        }
    }

    pub fn metrics_handle(&self) -> Option<Arc<Mutex<GridMetrics>>> {
        self.metrics.as_ref().map(Arc::clone)
    }
}

pub struct DragSession {
    source: Box<dyn SettingsSource>,
    settings: DragModeSettings,
    alphabet: CodeAlphabet,
    offset: Offset,
    tile_size: u32,
    regions: RegionSet,
    variant: DragVariant,
    enabled: bool,
    grid_overlay: Option<OverlayId>,
    grid: Option<TileGrid>,
    fingerprint: Option<blake3::Hash>,
    panel: UiBuilder,
    config: SessionConfig,
}

impl DragSession {
    pub fn new<S>(source: S) -> Result<Self>
    where
        S: SettingsSource + 'static,
    {
        let settings = source.load()?;
        let alphabet = settings.alphabet();
        let offset = settings.offset()?;
        Ok(Self {
            source: Box::new(source),
            tile_size: settings.default_tile_size,
            settings,
            alphabet,
            offset,
            regions: RegionSet::new(),
            variant: DragVariant::Drag,
            enabled: false,
            grid_overlay: None,
            grid: None,
            fingerprint: None,
            panel: commands_panel(),
            config: SessionConfig::default(),
        })
    }

    pub fn config_mut(&mut self) -> &mut SessionConfig {
        &mut self.config
    }

    pub fn settings(&self) -> &DragModeSettings {
        &self.settings
    }

    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    pub fn regions(&self) -> &RegionSet {
        &self.regions
    }

    pub fn variant(&self) -> DragVariant {
        self.variant
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether a grid overlay is currently registered.
    pub fn is_active(&self) -> bool {
        self.grid_overlay.is_some()
    }

    pub fn grid_overlay(&self) -> Option<OverlayId> {
        self.grid_overlay
    }

    pub fn panel(&self) -> &UiBuilder {
        &self.panel
    }

    /// The tiles from the most recent grid draw, if the grid is shown.
    pub fn grid(&self) -> Option<&TileGrid> {
        self.grid.as_ref()
    }

    /// Show the grid in `variant`, enabling the mode on first show.
    pub fn show<H: Host + ?Sized>(&mut self, variant: DragVariant, host: &mut H) -> Result<()> {
        self.variant = variant;
        self.show_grid(host)?;
        if !self.enabled {
            self.enabled = true;
            self.panel.show(host);
            if self.settings.dynamic_actions_enabled {
                host.set_noise_stop(true);
            }
        }
        host.enable_mode(variant);
        Ok(())
    }

    pub fn hide<H: Host + ?Sized>(&mut self, host: &mut H) {
        self.hide_grid(host);
        if !self.enabled {
            return;
        }
        self.enabled = false;
        if self.settings.dynamic_actions_enabled
            && self.settings.disable_dynamic_actions_on_grid_hide
        {
            host.set_noise_stop(false);
        }
        host.stop();
        self.panel.hide(host);
        host.disable_mode();
    }

    /// Open a fresh grid overlay, closing any previous one first.
    pub fn show_grid<H>(&mut self, host: &mut H) -> Result<()>
    where
        H: OverlayHost + ScreenSource + ?Sized,
    {
        self.hide_grid(host);
        self.reload_settings()?;
        self.tile_size = self.settings.default_tile_size;
        let screen = host.main_screen();
        let overlay = host.open_overlay(OverlayKind::Grid, screen);
        host.freeze(overlay);
        self.grid_overlay = Some(overlay);
        self.log(
            LogLevel::Info,
            "grid_shown",
            [
                json_kv("variant", self.variant.name()),
                json_kv("tile_size", self.tile_size),
            ],
        );
        Ok(())
    }

    /// Close the grid overlay and forget the code mapping.
    pub fn hide_grid<H>(&mut self, host: &mut H)
    where
        H: OverlayHost + ?Sized,
    {
        if let Some(overlay) = self.grid_overlay.take() {
            host.close_overlay(overlay);
            self.grid = None;
            self.fingerprint = None;
            self.log(LogLevel::Info, "grid_hidden", std::iter::empty());
        }
    }

    /// Draw callback for any overlay this session opened.
    pub fn paint<S, P>(&mut self, overlay: OverlayId, screens: &S, ctx: &mut P) -> Result<()>
    where
        S: ScreenSource + ?Sized,
        P: PaintContext + ?Sized,
    {
        let screen = screens.main_screen();
        if self.grid_overlay == Some(overlay) {
            let style = TileStyle {
                background: self.variant.tile_background(),
                ..TileStyle::default()
            };
            self.rebuild_grid(screen)?.paint(&style, ctx);
        } else if self.panel.overlay() == Some(overlay) {
            self.panel.on_draw(screen, ctx);
        }
        Ok(())
    }

    /// Rebuild the tile grid for `screen` unless nothing it depends on changed.
    pub fn rebuild_grid(&mut self, screen: Rect) -> Result<&TileGrid> {
        let geometry = GridGeometry::new(screen, self.tile_size, self.offset)?;
        let fingerprint = self.fingerprint_for(&geometry);
        let cached = if self.fingerprint == Some(fingerprint) {
            self.grid.take()
        } else {
            None
        };

        let grid = match cached {
            Some(grid) => grid,
            None => match TileGrid::build(geometry, &self.alphabet, &self.regions) {
                Ok(grid) => {
                    self.log(
                        LogLevel::Debug,
                        "grid_built",
                        [
                            json_kv("columns", geometry.columns),
                            json_kv("rows", geometry.rows),
                            json_kv("tiles", grid.len()),
                            json_kv("suppressed", grid.suppressed()),
                        ],
                    );
                    self.fingerprint = Some(fingerprint);
                    grid
                }
                Err(err) => {
                    self.grid = None;
                    self.fingerprint = None;
                    self.log(
                        LogLevel::Warn,
                        "grid_build_failed",
                        [json_kv("error", err.to_string())],
                    );
                    return Err(err.into());
                }
            },
        };

        self.with_metrics(|metrics| metrics.record_draw(grid.len(), grid.suppressed()));
        Ok(&*self.grid.insert(grid))
    }

    /// Look up the centre of the tile drawn with `code`.
    pub fn resolve(&self, code: &TileCode) -> Result<Point> {
        let found = self.grid.as_ref().and_then(|grid| grid.resolve(code));
        self.with_metrics(|metrics| metrics.record_lookup(found.is_some()));
        found.ok_or_else(|| {
            self.log(LogLevel::Warn, "lookup_failed", [json_kv("code", code.to_string())]);
            VoicegridError::UnknownTarget(code.to_string())
        })
    }

    pub fn resolve_str(&self, code: &str) -> Result<Point> {
        self.resolve(&code.parse()?)
    }

    /// Smaller tiles, so more of them. Never shrinks below one increment.
    ///
    /// The phrase reads as "more tiles on screen"; the older scripts grew the
    /// tiles here instead, and that inversion is not kept.
    pub fn more_squares<H>(&mut self, host: &mut H)
    where
        H: OverlayHost + ?Sized,
    {
        let next = self
            .tile_size
            .saturating_sub(self.settings.tile_increment_size);
        if next < self.settings.tile_increment_size.max(1) {
            return;
        }
        self.set_tile_size(next, host);
    }

    /// Larger tiles, so fewer of them.
    pub fn less_squares<H>(&mut self, host: &mut H)
    where
        H: OverlayHost + ?Sized,
    {
        let next = self
            .tile_size
            .saturating_add(self.settings.tile_increment_size);
        self.set_tile_size(next, host);
    }

    fn set_tile_size<H>(&mut self, tile_size: u32, host: &mut H)
    where
        H: OverlayHost + ?Sized,
    {
        if tile_size == self.tile_size {
            return;
        }
        self.log(
            LogLevel::Debug,
            "tile_size_changed",
            [json_kv("from", self.tile_size), json_kv("to", tile_size)],
        );
        self.tile_size = tile_size;
        self.request_redraw(host);
    }

    /// Suppress the tiles in the rectangle spanned by two tile centres.
    pub fn exclude_between<H>(&mut self, first: &TileCode, second: &TileCode, host: &mut H) -> Result<()>
    where
        H: OverlayHost + ?Sized,
    {
        self.add_region_between(RegionKind::Exclude, first, second, host)
    }

    /// Keep only the tiles in the rectangle spanned by two tile centres.
    pub fn isolate_between<H>(&mut self, first: &TileCode, second: &TileCode, host: &mut H) -> Result<()>
    where
        H: OverlayHost + ?Sized,
    {
        self.add_region_between(RegionKind::Include, first, second, host)
    }

    /// Suppress whole grid rows from `first` down to `second` (or just the
    /// row of `first`).
    pub fn exclude_rows<H>(&mut self, first: &TileCode, second: Option<&TileCode>, host: &mut H) -> Result<()>
    where
        H: OverlayHost + ?Sized,
    {
        if !self.is_active() {
            return Ok(());
        }
        let top = self.resolve(first)?;
        let bottom = match second {
            Some(code) => self.resolve(code)?,
            None => top,
        };
        let Some(geometry) = self.grid.as_ref().map(|grid| *grid.geometry()) else {
            return Ok(());
        };
        // Span tile centres, which carry the offset but not the screen origin.
        let left = geometry.center_of(0, 0).x;
        let right = geometry.center_of(geometry.columns.saturating_sub(1), 0).x;
        let band = Rect::new(
            left,
            top.y.min(bottom.y),
            right - left + 1.0,
            (bottom.y - top.y).abs() + 1.0,
        );
        self.add_region(RegionKind::Exclude, band, host);
        Ok(())
    }

    /// Exclude an explicit rectangle. Recorded even while the grid is hidden.
    pub fn exclude_rect<H>(&mut self, rect: Rect, host: &mut H)
    where
        H: OverlayHost + ?Sized,
    {
        self.add_region(RegionKind::Exclude, rect, host);
    }

    fn add_region_between<H>(
        &mut self,
        kind: RegionKind,
        first: &TileCode,
        second: &TileCode,
        host: &mut H,
    ) -> Result<()>
    where
        H: OverlayHost + ?Sized,
    {
        if !self.is_active() {
            return Ok(());
        }
        let rect = Rect::from_corners(self.resolve(first)?, self.resolve(second)?);
        self.add_region(kind, rect, host);
        Ok(())
    }

    fn add_region<H>(&mut self, kind: RegionKind, rect: Rect, host: &mut H)
    where
        H: OverlayHost + ?Sized,
    {
        self.regions.add(kind, rect);
        self.log(
            LogLevel::Debug,
            "region_added",
            [
                json_kv("kind", format!("{kind:?}").to_lowercase()),
                json_kv("rect", json!([rect.x, rect.y, rect.width, rect.height])),
            ],
        );
        self.request_redraw(host);
    }

    /// Back to the configured tile size with no regions; stops any motion.
    pub fn reset<H: Host + ?Sized>(&mut self, host: &mut H) -> Result<()> {
        self.reload_settings()?;
        self.tile_size = self.settings.default_tile_size;
        self.regions.clear();
        host.stop();
        self.log(LogLevel::Info, "grid_reset", std::iter::empty());
        self.request_redraw(host);
        Ok(())
    }

    pub fn request_redraw<H>(&self, host: &mut H)
    where
        H: OverlayHost + ?Sized,
    {
        if let Some(overlay) = self.grid_overlay {
            host.freeze(overlay);
        }
    }

    fn reload_settings(&mut self) -> Result<()> {
        let settings = self.source.load()?;
        settings.validate()?;
        self.offset = settings.offset()?;
        self.alphabet = settings.alphabet();
        self.settings = settings;
        Ok(())
    }

    fn fingerprint_for(&self, geometry: &GridGeometry) -> blake3::Hash {
        let mut hasher = blake3::Hasher::new();
        for value in [geometry.columns, geometry.rows, geometry.tile_size] {
            hasher.update(&value.to_le_bytes());
        }
        hasher.update(&geometry.offset.x.to_le_bytes());
        hasher.update(&geometry.offset.y.to_le_bytes());
        hasher.update(self.alphabet.letters());
        self.regions.hash_into(&mut hasher);
        hasher.finalize()
    }

    fn log<I>(&self, level: LogLevel, message: &str, fields: I)
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        if let Some(logger) = self.config.logger.as_ref() {
            let _ = logger.log_event(event_with_fields(level, LOG_TARGET, message, fields));
        }
    }

    fn with_metrics(&self, record: impl FnOnce(&mut GridMetrics)) {
        if let Some(metrics) = self.config.metrics.as_ref() {
            if let Ok(mut guard) = metrics.lock() {
                record(&mut guard);
            }
        }
    }
}

#[cfg(test)]
mod tests;

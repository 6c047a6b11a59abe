//! User-tunable settings for the drag grid.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, VoicegridError};
use crate::grid::{CodeAlphabet, Offset};

/// Settings read when the grid is shown and when it is reset.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DragModeSettings {
    /// Letters never used in tile codes.
    pub exclude_chars: String,
    pub default_tile_size: u32,
    pub tile_increment_size: u32,
    /// Pixel offset applied to tile centres, written as `"x y"`.
    pub offset_x_y: String,
    pub dynamic_actions_enabled: bool,
    pub disable_dynamic_actions_on_grid_hide: bool,
}

impl Default for DragModeSettings {
    fn default() -> Self {
        Self {
            exclude_chars: String::new(),
            default_tile_size: 60,
            tile_increment_size: 10,
            offset_x_y: "0 0".to_string(),
            dynamic_actions_enabled: false,
            disable_dynamic_actions_on_grid_hide: true,
        }
    }
}

impl DragModeSettings {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<()> {
        if self.default_tile_size == 0 {
            return Err(VoicegridError::Settings(
                "default_tile_size must be positive".to_string(),
            ));
        }
        self.offset()?;
        Ok(())
    }

    pub fn alphabet(&self) -> CodeAlphabet {
        CodeAlphabet::new(&self.exclude_chars)
    }

    pub fn offset(&self) -> Result<Offset> {
        let invalid = || VoicegridError::Settings(format!("bad offset_x_y `{}`", self.offset_x_y));
        let mut parts = self.offset_x_y.split_whitespace();
        let (Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(invalid());
        };
        let x = x.parse().map_err(|_| invalid())?;
        let y = y.parse().map_err(|_| invalid())?;
        Ok(Offset::new(x, y))
    }
}

/// Read-only settings provider.
pub trait SettingsSource {
    fn load(&self) -> Result<DragModeSettings>;
}

impl SettingsSource for DragModeSettings {
    fn load(&self) -> Result<DragModeSettings> {
        Ok(self.clone())
    }
}

/// Settings re-read from a JSON file on every load.
#[derive(Debug, Clone)]
pub struct JsonFileSettings {
    path: PathBuf,
}

impl JsonFileSettings {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SettingsSource for JsonFileSettings {
    fn load(&self) -> Result<DragModeSettings> {
        DragModeSettings::from_path(&self.path)
    }
}

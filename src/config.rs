use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::error::{SheetError, SheetResult};

/// Environment variable naming an optional JSON config file (native only).
pub const CONFIG_ENV_VAR: &str = "PIXEL_SHEET_CONFIG";

/// Static settings of the drawing sheet.
///
/// Missing fields in a config file fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetConfig {
    /// Edge length of the square drawing surface, in points
    pub surface_size: f32,
    /// Lower bound of the resolution slider
    pub min_resolution: u32,
    /// Upper bound of the resolution slider
    pub max_resolution: u32,
    /// Resolution used on startup
    pub default_resolution: u32,
    /// Fill of fresh cells and of erased cells
    pub blank_color: Rgb,
    /// Active color on first launch
    pub initial_color: Rgb,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            surface_size: 640.0,
            min_resolution: 1,
            max_resolution: 64,
            default_resolution: 16,
            blank_color: Rgb::WHITE,
            initial_color: Rgb::BLACK,
        }
    }
}

impl SheetConfig {
    pub fn from_json_str(json: &str) -> SheetResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> SheetResult<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Loads the file named by [`CONFIG_ENV_VAR`], or the defaults when the
    /// variable is unset or the file is unusable.
    pub fn from_env() -> Self {
        let Ok(path) = std::env::var(CONFIG_ENV_VAR) else {
            return Self::default();
        };
        match Self::load(&path) {
            Ok(config) => {
                log::info!("Loaded sheet config from {}", path);
                config
            }
            Err(err) => {
                log::warn!("Ignoring config {}: {}", path, err);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> SheetResult<()> {
        if !(self.surface_size.is_finite() && self.surface_size > 0.0) {
            return Err(SheetError::InvalidConfig(format!(
                "surface_size must be positive, got {}",
                self.surface_size
            )));
        }
        if self.min_resolution == 0 || self.min_resolution > self.max_resolution {
            return Err(SheetError::InvalidConfig(format!(
                "resolution bounds {}..={} are empty or start at zero",
                self.min_resolution, self.max_resolution
            )));
        }
        if !(self.min_resolution..=self.max_resolution).contains(&self.default_resolution) {
            return Err(SheetError::InvalidConfig(format!(
                "default_resolution {} outside {}..={}",
                self.default_resolution, self.min_resolution, self.max_resolution
            )));
        }
        Ok(())
    }

    pub fn default_resolution(&self) -> Resolution {
        Resolution::new(self.default_resolution, self)
    }
}

/// Number of cells along each side of the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Resolution(u32);

impl Resolution {
    /// Clamps `value` into the configured bounds. Slider input is already in
    /// range, so clamping only matters for stale preferences.
    pub fn new(value: u32, config: &SheetConfig) -> Self {
        let min = config.min_resolution.max(1);
        let max = config.max_resolution.max(min);
        Self(value.clamp(min, max))
    }

    pub fn try_new(value: u32, config: &SheetConfig) -> SheetResult<Self> {
        if (config.min_resolution..=config.max_resolution).contains(&value) && value > 0 {
            Ok(Self(value))
        } else {
            Err(SheetError::ResolutionOutOfRange {
                value,
                min: config.min_resolution,
                max: config.max_resolution,
            })
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn cell_count(self) -> usize {
        (self.0 as usize) * (self.0 as usize)
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

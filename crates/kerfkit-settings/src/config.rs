//! Configuration model and file I/O

use crate::error::{SettingsError, SettingsResult};
use kerfkit_camtools::{ArcOptions, CircleOptions, RectangleOptions, ToothOptions, WaveOptions};
use kerfkit_core::DEFAULT_RESOLUTION;
use kerfkit_designer::ExportOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Highest number of decimals written per coordinate
pub const MAX_PRECISION: usize = 10;

/// Defaults applied when building generator options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorDefaults {
    /// Samples per curved element
    pub resolution: usize,
    /// Kerf in millimetres
    pub kerf: f64,
    /// Tooth edges protrude (tabs) rather than notch
    pub protrude: bool,
}

impl Default for GeneratorDefaults {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            kerf: 0.0,
            protrude: true,
        }
    }
}

impl GeneratorDefaults {
    pub fn tooth_options(&self, steps: Option<usize>) -> ToothOptions {
        ToothOptions {
            steps,
            protrude: self.protrude,
        }
    }

    pub fn wave_options(&self) -> WaveOptions {
        WaveOptions {
            resolution: self.resolution,
        }
    }

    pub fn arc_options(&self) -> ArcOptions {
        ArcOptions {
            resolution: self.resolution,
        }
    }

    pub fn rectangle_options(&self, radius: f64) -> RectangleOptions {
        RectangleOptions {
            radius,
            resolution: self.resolution,
        }
    }

    pub fn circle_options(&self) -> CircleOptions {
        CircleOptions {
            resolution: self.resolution,
            ..CircleOptions::default()
        }
    }
}

/// Complete configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub generators: GeneratorDefaults,
    pub export: ExportOptions,
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> SettingsResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(SettingsError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// `<config dir>/kerfkit/config.toml`, if the platform has a config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("kerfkit").join("config.toml"))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)?;
        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };
        config.validate()?;
        debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Load from `path` when it exists, defaults otherwise.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            debug!("no config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        debug!("saved config to {}", path.display());
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        if self.generators.resolution == 0 {
            return Err(SettingsError::invalid(
                "generators.resolution",
                "must be > 0",
            ));
        }
        if !self.generators.kerf.is_finite() {
            return Err(SettingsError::invalid("generators.kerf", "must be finite"));
        }
        if self.export.precision > MAX_PRECISION {
            return Err(SettingsError::invalid(
                "export.precision",
                format!("must be at most {}", MAX_PRECISION),
            ));
        }
        if self.export.stroke_width.is_nan() || self.export.stroke_width <= 0.0 {
            return Err(SettingsError::invalid(
                "export.stroke_width",
                "must be > 0",
            ));
        }
        if self.export.stroke_color.trim().is_empty() {
            return Err(SettingsError::invalid(
                "export.stroke_color",
                "must not be empty",
            ));
        }
        if let Some((w, h)) = self.export.container {
            if w.is_nan() || h.is_nan() || w <= 0.0 || h <= 0.0 {
                return Err(SettingsError::invalid(
                    "export.container",
                    format!("dimensions must be > 0, got {} x {}", w, h),
                ));
            }
        }
        Ok(())
    }
}

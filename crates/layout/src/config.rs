// SPDX-License-Identifier: MIT

//!
//! Layout config
//!

use crate::{DEFAULT_PROCESS_FIELD, GroupOrder, MAX_SPAN, MIN_SPAN, ZoomLevel};
use crop_calendar_core::DayConvention;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can arise when loading/saving/validating the layout config
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Everything that controls how the Gantt grid is laid out.  Every field has a
/// default, so a config file need only contain the values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Width of a single month column
    pub column_width: f64,

    /// Height of a single lane (one record)
    pub row_height: f64,

    /// Height of a bar (centred vertically in its lane)
    pub bar_height: f64,

    /// Space left between adjacent bars
    pub bar_gutter: f64,

    /// Width of the group label column to the left of the grid
    pub label_width: f64,

    /// Height of the column headings
    pub header_height: f64,

    pub zoom: ZoomLevel,

    pub group_order: GroupOrder,

    /// The grouping field holding the crop process (used when ordering groups
    /// by process priority)
    pub process_field: String,

    pub day_convention: DayConvention,

    /// Fewest month columns the grid may have
    pub min_span: u8,

    /// Most month columns `min_span` may pad the grid to.  A grid is always
    /// wide enough for its longest wrapped range.
    pub max_span: u8,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            column_width: 60.0,
            row_height: 60.0,
            bar_height: 32.0,
            bar_gutter: 8.0,
            label_width: 192.0,
            header_height: 40.0,
            zoom: ZoomLevel::Month,
            group_order: GroupOrder::Alphabetical,
            process_field: DEFAULT_PROCESS_FIELD.to_string(),
            day_convention: DayConvention::default(),
            min_span: MIN_SPAN,
            max_span: MAX_SPAN,
        }
    }
}

impl LayoutConfig {
    /// Load (and validate) the config from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        info!("Loading layout config from {}", path.display());
        let data = fs::read_to_string(path)?;
        let config: LayoutConfig = serde_json::from_str(&data)?;
        config.validate()?;
        debug!("Layout config loaded = {config:?}");
        Ok(config)
    }

    /// Load the config from the path if given and the file exists, otherwise
    /// use the defaults
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Self, ConfigError> {
        match path {
            Some(path) if path.as_ref().exists() => Self::load(path),
            Some(path) => {
                info!(
                    "No layout config at {}, using defaults",
                    path.as_ref().display()
                );
                Ok(Self::default())
            }
            None => {
                info!("No layout config given, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Save the config as pretty JSON (creating parent directories as needed)
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        self.validate()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        info!("Saving layout config to {}", path.display());
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Check the values are usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.column_width > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "column_width must be greater than 0 (got {})",
                self.column_width
            )));
        }
        if !(self.row_height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "row_height must be greater than 0 (got {})",
                self.row_height
            )));
        }
        if !(self.bar_gutter > 0.0) || !self.bar_gutter.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "bar_gutter must be greater than 0 (got {})",
                self.bar_gutter
            )));
        }
        if self.min_span < MIN_SPAN || self.max_span > MAX_SPAN || self.min_span > self.max_span {
            return Err(ConfigError::Invalid(format!(
                "spans must satisfy {MIN_SPAN} <= min_span ({}) <= max_span ({}) <= {MAX_SPAN}",
                self.min_span, self.max_span
            )));
        }
        Ok(())
    }
}

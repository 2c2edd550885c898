// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! *Part of the wider crop calendar project*
//!
//! Setup shared by the crop calendar binaries (logging and finding the layout
//! config)
//!

use crop_calendar_layout::{ConfigError, LayoutConfig};
use directories_next::ProjectDirs;
use log::info;
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, TermLogger, TerminalMode,
};
use std::path::{Path, PathBuf};

const PROJECT_QUALIFIER: &str = "org";
const ORG_NAME: &str = "CropCalendar";
const APPLICATION_NAME: &str = "CropCalendar";
const CONFIG_FILE_NAME: &str = "config.json";

/// Log to the terminal (debug level if verbose, otherwise info level)
pub fn setup_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config_log = ConfigBuilder::new()
        .add_filter_allow_str("crop_calendar")
        .build();

    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    CombinedLogger::init(vec![TermLogger::new(
        level,
        config_log,
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )])?;
    Ok(())
}

/// Get the path to the config in the platform's config directory (if there is
/// a home directory)
pub fn default_config_file_path() -> Option<PathBuf> {
    info!("Getting config file path");
    ProjectDirs::from(PROJECT_QUALIFIER, ORG_NAME, APPLICATION_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Load the layout config from `path` if given (which must exist), otherwise
/// from the platform's config directory if there is one there, otherwise use
/// the defaults
pub fn load_config(path: Option<&Path>) -> Result<LayoutConfig, ConfigError> {
    match path {
        Some(path) => LayoutConfig::load(path),
        None => LayoutConfig::load_or_default(default_config_file_path()),
    }
}

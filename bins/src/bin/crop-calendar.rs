// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! *Part of the wider crop calendar project*
//!
//! The crop calendar command line tool.  Everything is printed as JSON.
//!

use clap::{Parser, Subcommand, ValueEnum};
use crop_calendar_bins::{load_config, setup_logging};
use crop_calendar_core::{MonthMask, Record, groupable_fields, parse_season, toggle};
use crop_calendar_layout::{ExportTable, GroupOrder, JsonExport, TimelineLayout, ZoomLevel};
use log::{debug, info};
use serde::Serialize;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};

/// Crop calendar entry point
///
/// One of:
/// - Decode a month mask
/// - Toggle a month of a month mask
/// - Parse season text into a month mask
/// - List the fields records can be grouped by
/// - Lay out records as a Gantt grid
/// - Export records
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();

    // Setup logging
    setup_logging(args.verbose)?;

    match args.command {
        Command::Decode { mask } => {
            let mask = MonthMask::try_from(mask)?;
            let ranges: Vec<_> = mask
                .decode()
                .into_iter()
                .map(|range| json!({"range": range, "label": range.label()}))
                .collect();
            print_json(&json!({
                "mask": mask,
                "binary": mask.as_binary_string(),
                "months": mask.months(),
                "ranges": ranges,
            }))?;
        }
        Command::Toggle { mask, month } => {
            let mask = toggle(MonthMask::try_from(mask)?, month)?;
            print_json(&json!({"mask": mask, "binary": mask.as_binary_string()}))?;
        }
        Command::Season { text } => {
            let mask = parse_season(&text);
            print_json(&json!({
                "mask": mask,
                "binary": mask.as_binary_string(),
                "months": mask.months(),
            }))?;
        }
        Command::Fields { records } => {
            let records = load_records(&records)?;
            print_json(&groupable_fields(&records))?;
        }
        Command::Timeline {
            records,
            group_by,
            order,
            zoom,
        } => {
            let mut config = load_config(args.config.as_deref())?;
            if let Some(order) = order {
                config.group_order = order;
            }
            if let Some(zoom) = zoom {
                config.zoom = zoom;
            }
            let records = load_records(&records)?;
            let grid = TimelineLayout::new(config).build(&records, &group_by)?;
            info!(
                "{} records in {} groups over {} months",
                grid.record_count, grid.group_count, grid.span
            );
            print_json(&grid)?;
        }
        Command::Export {
            records,
            group_by,
            format,
            out,
        } => {
            let records = load_records(&records)?;
            let json = match format {
                ExportFormat::Json => {
                    serde_json::to_string_pretty(&JsonExport::new(&records, &group_by))?
                }
                ExportFormat::Table => {
                    serde_json::to_string_pretty(&ExportTable::new(&records, &group_by, None))?
                }
            };
            match out {
                Some(path) => {
                    fs::write(&path, json)?;
                    info!("Exported {} records to {}", records.len(), path.display());
                }
                None => println!("{json}"),
            }
        }
    }

    Ok(())
}

/// Read records from a JSON file holding an array of records
fn load_records(path: &Path) -> Result<Vec<Record>, Box<dyn std::error::Error>> {
    debug!("Loading records from {}", path.display());
    let data = fs::read_to_string(path)?;
    let records: Vec<Record> = serde_json::from_str(&data)?;
    info!("Loaded {} records", records.len());
    Ok(records)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Crop calendar CLI args using [clap]
#[derive(Parser, Debug)]
#[command(version, about = "Crop calendar month masks and timeline layout")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the layout config (JSON).  Defaults to the config in the
    /// platform's config directory, if there is one
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log debug messages
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decode a month mask (0 to 4095) into month ranges
    Decode {
        #[arg(allow_negative_numbers = true)]
        mask: i64,
    },

    /// Toggle one month (0 is January) of a month mask
    Toggle {
        #[arg(allow_negative_numbers = true)]
        mask: i64,
        #[arg(allow_negative_numbers = true)]
        month: i64,
    },

    /// Parse season text (e.g. "Nov - Feb") into a month mask
    Season { text: String },

    /// List the fields records can be grouped by
    Fields {
        /// Path to a JSON array of records
        #[arg(long)]
        records: PathBuf,
    },

    /// Lay out records as a Gantt grid
    Timeline {
        /// Path to a JSON array of records
        #[arg(long)]
        records: PathBuf,

        /// The fields to group records by (comma separated)
        #[arg(long, value_delimiter = ',', required = true)]
        group_by: Vec<String>,

        /// `alphabetical` or `by_process_priority`
        #[arg(long)]
        order: Option<GroupOrder>,

        /// `month` or `quarter`
        #[arg(long)]
        zoom: Option<ZoomLevel>,
    },

    /// Export records as JSON or as a table
    Export {
        /// Path to a JSON array of records
        #[arg(long)]
        records: PathBuf,

        /// The fields records are grouped by (comma separated)
        #[arg(long, value_delimiter = ',', required = true)]
        group_by: Vec<String>,

        #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,

        /// Where to write the export (stdout if not given)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Table,
}

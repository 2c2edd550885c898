// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! The crop calendar www API
//!

use clap::Parser;
use crop_calendar_bins::{load_config, setup_logging};
use crop_calendar_www_api::prepare_api_router;
use log::info;
use std::path::PathBuf;

/// Crop calendar www API entry point (serve the www JSON API)
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();

    // Setup logging
    setup_logging(args.verbose)?;

    // Get the layout config used when requests don't bring their own
    let config = load_config(args.config.as_deref())?;

    // Get the router
    let api_router = prepare_api_router(config);

    // Bind the listener for new connections
    let listener = tokio::net::TcpListener::bind(&args.addr).await?;

    // Print the address
    info!("Serving on http://{}", args.addr);
    println!("http://{}", args.addr);

    // Serve the server
    axum::serve(listener, api_router).await?;

    Ok(())
}

/// Crop calendar www API args using [clap]
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Crop calendar www API server",
    after_help = "This is intended for use when deploying to a server and in CI"
)]
pub struct Cli {
    /// The IP address and port to listen on
    #[arg(long, default_value = "0.0.0.0:2408")]
    pub addr: String,

    /// Path to the layout config (JSON)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log debug messages
    #[arg(long, short)]
    pub verbose: bool,
}

// SPDX-License-Identifier: MIT

//!
//! *Part of the wider crop calendar project*
//!
//! This crate lays out crop calendar records as a Gantt-style month grid.  It
//! can be compiled for native use as well as to WASM for use in the browser.
//!
//! The core of the crate is a platform independent engine responsible for:
//!
//! - Grouping records into rows by the values of one or more fields
//! - Ordering the rows (alphabetically or by crop process)
//! - Working out how many month columns the grid needs (more than 12 when a
//!   season wraps from December into January)
//! - Calculating the position and size of every bar
//!
//! Alongside the engine are record filtering, the layout config, the editing
//! state behind an interactive calendar, and the data model handed to
//! exporters.  Actually drawing the grid (and writing export files) is left to
//! frontends.
//!
//! ## Usage
//!
//! To use natively the crate can simply be included like any other crate.
//!
//! To use in a browser one can use the following to compile to WASM:
//!
//! ```sh
//! wasm-pack build --target web
//! ```
//!

extern crate console_error_panic_hook;

pub mod colour;
pub mod config;
pub mod editor;
pub mod engine;
pub mod export;
pub mod frontends;

pub use colour::*;
pub use config::*;
pub use editor::*;
pub use engine::*;
pub use export::*;
pub use frontends::wasm::CropCalendarLayoutWasm;

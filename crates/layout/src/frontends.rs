// SPDX-License-Identifier: MIT

//!
//! Frontends to the layout engine
//!

pub mod wasm;

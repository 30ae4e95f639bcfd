//! C FFI layer for non-Rust hosts.
//!
//! This module exports C ABI functions so a renderer written in another
//! language can drive the engine. All functions are marked with
//! `#[no_mangle]` and use `extern "C"`.
//!
//! The actual logic is in the `automaton` module. These functions are thin wrappers
//! that handle null checks, bounds checks, and C-to-Rust conversions, so no
//! panic ever crosses the boundary.

pub mod grid;
pub mod lifecycle;
pub mod region;
pub mod stamp;

pub use grid::{
    lg_adjust_grid_size, lg_clear, lg_cols, lg_copy_cells, lg_get_cell, lg_population,
    lg_randomize, lg_rows, lg_set_cells, lg_step, lg_toggle_trace, lg_toggle_wrap,
    lg_total_cells, lg_trace, lg_wrap,
};
pub use lifecycle::{lg_create, lg_destroy, lg_get_generation};
pub use region::{lg_extract_region, lg_import_region};
pub use stamp::lg_stamp;

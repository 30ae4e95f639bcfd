//! Core automaton logic and grid operations.
//!
//! This module contains the actual logic for manipulating grid state,
//! stepping the automaton, resizing, and extracting/importing regions.
//! The `Grid` methods and the FFI layer in `ffi/` call these functions.

pub mod edit;
pub mod grid;
pub mod region;
pub mod resize;
pub mod stamp;
pub mod stepping;

pub use edit::{clear, randomize, set_cells_state, toggle_trace};
pub use grid::{assert_in_bounds, count_live_neighbors, in_bounds, index_of, resolve_axis};
pub use region::{extract_region, import_region};
pub use resize::adjust_grid_size;
pub use stamp::{place_pattern, Pattern};
pub use stepping::{next_state, step_generation};

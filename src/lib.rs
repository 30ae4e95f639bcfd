//! Trace Life - Game of Life engine with trace fading
//!
//! A two-dimensional B3/S23 cellular automaton with optional toroidal
//! wrapping, multi-level fading of recently dead cells, in-place resizing,
//! and direct point/region edits. The engine has no notion of time or
//! rendering: a host calls [`Grid::step`] when it wants the next generation
//! and reads the cells back.
//!
//! ```
//! use trace_life::{Grid, Pattern};
//!
//! let mut grid = Grid::new(20, 20, 16, true, true).unwrap();
//! grid.stamp(Pattern::Glider, 0, 0, true);
//! grid.step();
//! assert_eq!(grid.population(), 5);
//! ```
//!
//! The `ffi` module exposes the same operations through a C ABI.

pub mod automaton;
pub mod config;
pub mod error;
pub mod ffi;
pub mod state;


pub use automaton::Pattern;
pub use config::GridConfig;
pub use error::GridError;
pub use state::Grid;

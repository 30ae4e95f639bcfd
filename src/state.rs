//! Core grid structure and its public call surface.
//!
//! The actual logic lives in the `automaton` module; the methods here are
//! thin wrappers that keep the population bookkeeping behind one type.

use rand::Rng;

use crate::automaton;
use crate::automaton::stamp::Pattern;
use crate::config::GridConfig;
use crate::error::GridError;

/// The state of a Game of Life grid with trace fading.
///
/// Cells are stored row-major in a single buffer. A value of 0 is dead,
/// `live_state` is alive, and anything in between is a fading trace.
#[derive(Debug)]
pub struct Grid {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) live_state: u8,
    pub(crate) cells: Vec<u8>,
    /// Output buffer for `step()`, swapped with `cells` every generation.
    pub(crate) next: Vec<u8>,
    pub(crate) population: usize,
    pub(crate) wrap: bool,
    pub(crate) trace: bool,
    pub(crate) generation: u64,
    pub(crate) thread_pool: Option<rayon::ThreadPool>,
}

impl Grid {
    /// Create an all-dead grid.
    pub fn new(
        rows: usize,
        cols: usize,
        live_state: u8,
        wrap: bool,
        trace: bool,
    ) -> Result<Self, GridError> {
        let config = GridConfig {
            rows,
            cols,
            live_state,
            wrap,
            trace,
            threads: 0,
        };
        Self::from_config(&config)
    }

    /// Create an all-dead grid from a full configuration.
    pub fn from_config(config: &GridConfig) -> Result<Self, GridError> {
        config.validate()?;
        let size = config.cell_count()?;

        let thread_pool = if config.threads > 0 {
            Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(config.threads)
                    .build()?,
            )
        } else {
            None
        };

        tracing::debug!(
            rows = config.rows,
            cols = config.cols,
            live_state = config.live_state,
            wrap = config.wrap,
            trace = config.trace,
            threads = config.threads,
            "created grid"
        );

        Ok(Grid {
            rows: config.rows,
            cols: config.cols,
            live_state: config.live_state,
            cells: vec![0; size],
            next: vec![0; size],
            population: 0,
            wrap: config.wrap,
            trace: config.trace,
            generation: 0,
            thread_pool,
        })
    }

    /// Advance the grid by one generation.
    pub fn step(&mut self) {
        automaton::step_generation(self);
    }

    /// Set every cell alive or dead with equal probability.
    pub fn randomize(&mut self) {
        automaton::randomize(self, &mut rand::rng());
    }

    /// Like [`Grid::randomize`] but draws from the given generator.
    pub fn randomize_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        automaton::randomize(self, rng);
    }

    /// Kill every cell, trace values included.
    pub fn clear(&mut self) {
        automaton::clear(self);
    }

    /// Set the given cells alive or dead.
    ///
    /// # Panics
    /// If any coordinate lies outside the grid.
    pub fn set_cells_state<I>(&mut self, cells: I, alive: bool)
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        automaton::set_cells_state(self, cells, alive);
    }

    /// Place a drawing pattern anchored at `(row, col)`.
    ///
    /// Returns the cells that were affected after clipping or wrapping.
    ///
    /// # Panics
    /// If the anchor lies outside the grid.
    pub fn stamp(
        &mut self,
        pattern: Pattern,
        row: usize,
        col: usize,
        alive: bool,
    ) -> Vec<(usize, usize)> {
        automaton::stamp::stamp(self, pattern, row, col, alive)
    }

    pub fn toggle_wrap(&mut self) {
        self.wrap = !self.wrap;
        tracing::debug!(wrap = self.wrap, "toggled wrap");
    }

    /// Flip trace mode. Turning it off collapses every fading cell to dead.
    pub fn toggle_trace(&mut self) {
        automaton::toggle_trace(self);
    }

    /// Resize in place, keeping every cell whose coordinates survive.
    ///
    /// # Panics
    /// If the new cell count does not fit in `usize`.
    pub fn adjust_grid_size(&mut self, new_rows: usize, new_cols: usize) {
        automaton::adjust_grid_size(self, new_rows, new_cols);
    }

    /// Copy a rectangle of cells into `out`. See [`automaton::extract_region`].
    pub fn extract_region(
        &self,
        out: &mut [u8],
        min_row: usize,
        min_col: usize,
        max_row: usize,
        max_col: usize,
    ) -> usize {
        automaton::extract_region(self, out, min_row, min_col, max_row, max_col)
    }

    /// Write a rectangle of cells from `input`. See [`automaton::import_region`].
    pub fn import_region(
        &mut self,
        input: &[u8],
        min_row: usize,
        min_col: usize,
        max_row: usize,
        max_col: usize,
    ) -> usize {
        automaton::import_region(self, input, min_row, min_col, max_row, max_col)
    }

    /// Read-only view of every cell, row-major.
    pub fn get_cell_states(&self) -> &[u8] {
        &self.cells
    }

    /// Read-only view of one row.
    pub fn row(&self, row: usize) -> &[u8] {
        assert!(row < self.rows, "row {row} out of bounds for {} rows", self.rows);
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// State of a single cell.
    pub fn get(&self, row: usize, col: usize) -> u8 {
        automaton::assert_in_bounds(self, row, col);
        self.cells[automaton::index_of(self, row, col)]
    }

    /// Number of fully alive Moore neighbors of `(row, col)`.
    pub fn live_neighbor_count(&self, row: usize, col: usize) -> u8 {
        automaton::assert_in_bounds(self, row, col);
        automaton::count_live_neighbors(self, row, col)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn total_cells(&self) -> usize {
        self.rows * self.cols
    }

    pub fn population(&self) -> usize {
        self.population
    }

    /// Share of cells alive, in percent. 0 for an empty grid.
    pub fn population_percentage(&self) -> f64 {
        let total = self.total_cells();
        if total == 0 {
            0.0
        } else {
            self.population as f64 / total as f64 * 100.0
        }
    }

    pub fn live_state(&self) -> u8 {
        self.live_state
    }

    pub fn wrap(&self) -> bool {
        self.wrap
    }

    pub fn trace(&self) -> bool {
        self.trace
    }

    /// Generations stepped since construction or the last clear/randomize.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

//! Stepping, cell access, and grid-wide mutators.

use crate::automaton;
use crate::state::Grid;

/// Advances the grid by one generation.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Grid, or null
#[no_mangle]
pub unsafe extern "C" fn lg_step(ptr: *mut Grid) {
    if ptr.is_null() {
        return;
    }
    (*ptr).step();
}

/// Sets every cell alive or dead with equal probability.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Grid, or null
#[no_mangle]
pub unsafe extern "C" fn lg_randomize(ptr: *mut Grid) {
    if ptr.is_null() {
        return;
    }
    (*ptr).randomize();
}

/// Kills every cell.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Grid, or null
#[no_mangle]
pub unsafe extern "C" fn lg_clear(ptr: *mut Grid) {
    if ptr.is_null() {
        return;
    }
    (*ptr).clear();
}

/// Flips edge wrapping.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Grid, or null
#[no_mangle]
pub unsafe extern "C" fn lg_toggle_wrap(ptr: *mut Grid) {
    if ptr.is_null() {
        return;
    }
    (*ptr).toggle_wrap();
}

/// Flips trace mode. Turning it off kills every fading cell.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Grid, or null
#[no_mangle]
pub unsafe extern "C" fn lg_toggle_trace(ptr: *mut Grid) {
    if ptr.is_null() {
        return;
    }
    (*ptr).toggle_trace();
}

/// Resizes the grid, keeping every cell whose coordinates survive.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Grid, or null
#[no_mangle]
pub unsafe extern "C" fn lg_adjust_grid_size(ptr: *mut Grid, rows: u32, cols: u32) {
    if ptr.is_null() {
        return;
    }
    (*ptr).adjust_grid_size(rows as usize, cols as usize);
}

/// Gets the state of a cell (0 = dead, `live_state` = alive, in between = trace).
///
/// # Safety
/// - `ptr` must be a valid pointer to a Grid, or null
///
/// # Returns
/// 0 if out of bounds or null pointer.
#[no_mangle]
pub unsafe extern "C" fn lg_get_cell(ptr: *const Grid, row: u32, col: u32) -> u8 {
    if ptr.is_null() {
        return 0;
    }

    let grid = &*ptr;
    let (row, col) = (row as usize, col as usize);
    if !automaton::in_bounds(grid, row, col) {
        return 0;
    }
    grid.get(row, col)
}

/// Sets a batch of cells alive (`alive != 0`) or dead.
///
/// # Layout
/// `coords` holds `count` pairs laid out as `[row0, col0, row1, col1, ...]`.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Grid, or null
/// - `coords` must point to at least `2 * count` u32 values, or be null
///
/// Out-of-bounds pairs are skipped.
///
/// # Returns
/// Number of pairs applied.
#[no_mangle]
pub unsafe extern "C" fn lg_set_cells(
    ptr: *mut Grid,
    coords: *const u32,
    count: usize,
    alive: u8,
) -> usize {
    if ptr.is_null() || coords.is_null() {
        return 0;
    }

    let grid = &mut *ptr;
    let (rows, cols) = (grid.rows(), grid.cols());
    let pairs = std::slice::from_raw_parts(coords, count * 2);
    let valid: Vec<(usize, usize)> = pairs
        .chunks_exact(2)
        .map(|pair| (pair[0] as usize, pair[1] as usize))
        .filter(|&(row, col)| row < rows && col < cols)
        .collect();

    let applied = valid.len();
    grid.set_cells_state(valid, alive != 0);
    applied
}

/// Copies every cell, row-major, into `out_buf`.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Grid, or null
/// - `out_buf` must point to a buffer of at least `len` bytes, or be null
///
/// # Returns
/// Number of bytes written, or 0 if the buffer is smaller than the grid.
#[no_mangle]
pub unsafe extern "C" fn lg_copy_cells(ptr: *const Grid, out_buf: *mut u8, len: usize) -> usize {
    if ptr.is_null() || out_buf.is_null() {
        return 0;
    }

    let cells = (*ptr).get_cell_states();
    if len < cells.len() {
        return 0;
    }

    let out = std::slice::from_raw_parts_mut(out_buf, cells.len());
    out.copy_from_slice(cells);
    cells.len()
}

/// Number of fully alive cells, or 0 if ptr is null.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Grid, or null
#[no_mangle]
pub unsafe extern "C" fn lg_population(ptr: *const Grid) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).population() as u64
}

/// Number of cells (`rows * cols`), or 0 if ptr is null.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Grid, or null
#[no_mangle]
pub unsafe extern "C" fn lg_total_cells(ptr: *const Grid) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).total_cells() as u64
}

/// # Safety
/// - `ptr` must be a valid pointer to a Grid, or null
#[no_mangle]
pub unsafe extern "C" fn lg_rows(ptr: *const Grid) -> u32 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).rows() as u32
}

/// # Safety
/// - `ptr` must be a valid pointer to a Grid, or null
#[no_mangle]
pub unsafe extern "C" fn lg_cols(ptr: *const Grid) -> u32 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).cols() as u32
}

/// 1 if wrapping is on, 0 if off or ptr is null.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Grid, or null
#[no_mangle]
pub unsafe extern "C" fn lg_wrap(ptr: *const Grid) -> u8 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).wrap() as u8
}

/// 1 if trace is on, 0 if off or ptr is null.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Grid, or null
#[no_mangle]
pub unsafe extern "C" fn lg_trace(ptr: *const Grid) -> u8 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).trace() as u8
}

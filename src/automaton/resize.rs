//! In-place grid resizing.
//!
//! Rows are adjusted before columns. Population is only corrected for the
//! cells being dropped; the rest of the grid is never rescanned.

use super::grid::index_of;
use crate::state::Grid;

/// Count fully alive cells in `cells`.
#[inline]
fn live_in(cells: &[u8], live_state: u8) -> usize {
    cells.iter().filter(|&&c| c == live_state).count()
}

/// Grow or shrink the row count, keeping the old column width.
fn adjust_rows(grid: &mut Grid, new_rows: usize) {
    let width = grid.cols;
    let new_len = new_rows * width;

    if new_rows < grid.rows {
        let dropped = live_in(&grid.cells[new_len..], grid.live_state);
        grid.population -= dropped;
    }

    grid.cells.resize(new_len, 0);
    grid.rows = new_rows;
}

/// Grow or shrink every row to `new_cols`.
///
/// The buffer is row-major, so rows are moved to their new offsets:
/// front to back when shrinking, back to front when growing, so that no
/// row is overwritten before it has been moved.
fn adjust_cols(grid: &mut Grid, new_cols: usize) {
    let old_cols = grid.cols;
    let rows = grid.rows;

    if new_cols < old_cols {
        for row in 0..rows {
            let start = row * old_cols;
            let dropped = &grid.cells[start + new_cols..start + old_cols];
            grid.population -= live_in(dropped, grid.live_state);
        }

        for row in 1..rows {
            let start = row * old_cols;
            grid.cells.copy_within(start..start + new_cols, row * new_cols);
        }
        grid.cells.truncate(rows * new_cols);
    } else if new_cols > old_cols {
        grid.cells.resize(rows * new_cols, 0);

        for row in (0..rows).rev() {
            let src = row * old_cols;
            let dst = row * new_cols;
            grid.cells.copy_within(src..src + old_cols, dst);
            grid.cells[dst + old_cols..dst + new_cols].fill(0);
        }
    }

    grid.cols = new_cols;
}

/// Resize the grid to `new_rows` x `new_cols`.
///
/// Every cell whose coordinates remain valid keeps its state; new cells
/// start dead. Dropped state is not restored by growing again.
///
/// # Panics
/// If the new cell count does not fit in `usize`.
pub fn adjust_grid_size(grid: &mut Grid, new_rows: usize, new_cols: usize) {
    let (old_rows, old_cols) = (grid.rows, grid.cols);

    // Rows are resized at the old width first, so both widths must fit.
    assert!(
        new_rows.checked_mul(old_cols.max(new_cols)).is_some(),
        "resizing to {new_rows}x{new_cols} overflows the cell buffer"
    );

    adjust_rows(grid, new_rows);
    adjust_cols(grid, new_cols);

    // Contents of the step buffer are overwritten every generation.
    grid.next.resize(grid.cells.len(), 0);

    tracing::debug!(
        old_rows,
        old_cols,
        new_rows,
        new_cols,
        population = grid.population,
        "resized grid"
    );
}

//! Cell addressing helpers and the neighbor counter.

use crate::state::Grid;

/// Calculate the linear index for a 2D coordinate.
#[inline]
pub fn index_of(grid: &Grid, row: usize, col: usize) -> usize {
    row * grid.cols + col
}

/// Check if coordinates are within grid bounds.
#[inline]
pub fn in_bounds(grid: &Grid, row: usize, col: usize) -> bool {
    row < grid.rows && col < grid.cols
}

/// Fail fast on a coordinate outside the grid.
#[inline]
#[track_caller]
pub fn assert_in_bounds(grid: &Grid, row: usize, col: usize) {
    assert!(
        in_bounds(grid, row, col),
        "cell ({row}, {col}) out of bounds for {}x{} grid",
        grid.rows,
        grid.cols
    );
}

/// Resolve one axis of a neighbor position.
///
/// Positions inside `[0, len)` pass through. Outside, they wrap around
/// (Euclidean) when `wrap` is set and are absent otherwise.
#[inline]
pub fn resolve_axis(pos: isize, len: usize, wrap: bool) -> Option<usize> {
    if pos >= 0 && (pos as usize) < len {
        Some(pos as usize)
    } else if wrap && len > 0 {
        Some(pos.rem_euclid(len as isize) as usize)
    } else {
        None
    }
}

/// Count fully alive cells in the Moore neighborhood (8 neighbors).
///
/// Rows and columns are resolved independently, so a corner cell can wrap
/// on one axis while staying in bounds on the other. Trace values never
/// count as alive.
pub fn count_live_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    let mut count = 0;

    for dr in -1isize..=1 {
        for dc in -1isize..=1 {
            if dr == 0 && dc == 0 {
                continue;
            }

            let Some(nr) = resolve_axis(row as isize + dr, grid.rows, grid.wrap) else {
                continue;
            };
            let Some(nc) = resolve_axis(col as isize + dc, grid.cols, grid.wrap) else {
                continue;
            };

            if grid.cells[index_of(grid, nr, nc)] == grid.live_state {
                count += 1;
            }
        }
    }

    count
}

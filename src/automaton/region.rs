//! Region extraction and import operations.

use super::edit::set_cell_at;
use super::grid::index_of;
use crate::state::Grid;

/// Clamp the end bounds of a half-open rectangle to the grid.
///
/// Returns `(end_row, end_col)`, or None if the clamped rectangle is empty.
fn clamp_region(
    grid: &Grid,
    min_row: usize,
    min_col: usize,
    max_row: usize,
    max_col: usize,
) -> Option<(usize, usize)> {
    let end_row = max_row.min(grid.rows);
    let end_col = max_col.min(grid.cols);

    if min_row >= end_row || min_col >= end_col {
        return None;
    }

    Some((end_row, end_col))
}

/// Extract the rectangle `[min_row, max_row) x [min_col, max_col)` into a flat buffer.
///
/// # Layout
/// The buffer covers the requested rectangle row by row, with a stride of
/// `max_col - min_col`, so cell `(r, c)` lands at
/// `(r - min_row) * stride + (c - min_col)`. Slots outside the grid are
/// written as dead. Trace values are copied as-is.
///
/// # Returns
/// Number of grid cells copied, or 0 if the clamped region is empty or the
/// buffer is smaller than the requested rectangle.
pub fn extract_region(
    grid: &Grid,
    out_buf: &mut [u8],
    min_row: usize,
    min_col: usize,
    max_row: usize,
    max_col: usize,
) -> usize {
    let Some((end_row, end_col)) = clamp_region(grid, min_row, min_col, max_row, max_col) else {
        return 0;
    };

    let stride = max_col - min_col;
    let Some(total_size) = (max_row - min_row).checked_mul(stride) else {
        return 0;
    };
    if out_buf.len() < total_size {
        return 0;
    }

    let out = &mut out_buf[..total_size];
    out.fill(0);

    let visible = end_col - min_col;
    for (row, chunk) in (min_row..end_row).zip(out.chunks_mut(stride)) {
        let start = index_of(grid, row, min_col);
        chunk[..visible].copy_from_slice(&grid.cells[start..start + visible]);
    }

    (end_row - min_row) * visible
}

/// Import the rectangle `[min_row, max_row) x [min_col, max_col)` from a flat buffer.
///
/// # Layout
/// The buffer is expected in the layout `extract_region` writes. Slots
/// that fall outside the grid are skipped.
/// Input values are normalized: 0 = dead, any non-zero = alive.
///
/// # Returns
/// Number of grid cells written, or 0 if the clamped region is empty or
/// the buffer is shorter than the requested rectangle.
pub fn import_region(
    grid: &mut Grid,
    in_buf: &[u8],
    min_row: usize,
    min_col: usize,
    max_row: usize,
    max_col: usize,
) -> usize {
    let Some((end_row, end_col)) = clamp_region(grid, min_row, min_col, max_row, max_col) else {
        return 0;
    };

    let stride = max_col - min_col;
    let Some(total_size) = (max_row - min_row).checked_mul(stride) else {
        return 0;
    };
    if in_buf.len() < total_size {
        return 0;
    }

    for (row, chunk) in (min_row..end_row).zip(in_buf[..total_size].chunks(stride)) {
        for (col, &value) in (min_col..end_col).zip(chunk) {
            let idx = index_of(grid, row, col);
            set_cell_at(grid, idx, value != 0);
        }
    }

    (end_row - min_row) * (end_col - min_col)
}

//! Region extraction and import FFI functions.

use crate::state::Grid;

/// Number of cells in the half-open rectangle, before clamping.
fn region_len(min_row: u32, min_col: u32, max_row: u32, max_col: u32) -> Option<usize> {
    let height = max_row.saturating_sub(min_row) as usize;
    let width = max_col.saturating_sub(min_col) as usize;
    height.checked_mul(width)
}

/// Extracts a rectangular region of cells into a flat output buffer.
///
/// # Layout
/// The buffer is filled row by row (row changes slowest, column fastest).
/// Cell `(r, c)` lands at `(r - min_row) * (max_col - min_col) + (c - min_col)`,
/// and slots outside the grid are written as 0. This matches the layout
/// expected by `lg_import_region`.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Grid, or null
/// - `out_buf` must point to a buffer with at least
///   `(max_row - min_row) * (max_col - min_col)` bytes
///
/// # Returns
/// Number of grid cells copied, or 0 on error.
#[no_mangle]
pub unsafe extern "C" fn lg_extract_region(
    ptr: *const Grid,
    out_buf: *mut u8,
    min_row: u32,
    min_col: u32,
    max_row: u32,
    max_col: u32,
) -> u64 {
    if ptr.is_null() || out_buf.is_null() {
        return 0;
    }

    let grid = &*ptr;
    let Some(len) = region_len(min_row, min_col, max_row, max_col) else {
        return 0;
    };
    let buf_slice = std::slice::from_raw_parts_mut(out_buf, len);
    grid.extract_region(
        buf_slice,
        min_row as usize,
        min_col as usize,
        max_row as usize,
        max_col as usize,
    ) as u64
}

/// Imports a rectangular region of cells from a flat buffer.
///
/// # Layout
/// The buffer is expected row by row (matching `lg_extract_region`).
/// Slots outside the grid are skipped.
/// Input values are normalized: 0 = dead, non-zero = alive.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Grid, or null
/// - `in_buf` must point to a buffer with at least
///   `(max_row - min_row) * (max_col - min_col)` bytes
///
/// # Returns
/// Number of grid cells written, or 0 on error.
#[no_mangle]
pub unsafe extern "C" fn lg_import_region(
    ptr: *mut Grid,
    in_buf: *const u8,
    min_row: u32,
    min_col: u32,
    max_row: u32,
    max_col: u32,
) -> u64 {
    if ptr.is_null() || in_buf.is_null() {
        return 0;
    }

    let grid = &mut *ptr;
    let Some(len) = region_len(min_row, min_col, max_row, max_col) else {
        return 0;
    };
    let buf_slice = std::slice::from_raw_parts(in_buf, len);
    grid.import_region(
        buf_slice,
        min_row as usize,
        min_col as usize,
        max_row as usize,
        max_col as usize,
    ) as u64
}

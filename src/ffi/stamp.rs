//! Pattern stamping FFI function.

use crate::automaton::{self, Pattern};
use crate::state::Grid;

/// Draws a built-in pattern anchored at `(row, col)`.
///
/// `pattern` indexes the catalogue: 0 = Cell, 1 = Glider, 2 = Glider gun,
/// 3 = Heart. Cells outside the grid wrap around when wrapping is on and
/// are dropped otherwise.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Grid, or null
///
/// # Returns
/// Number of cells affected, or 0 for a null pointer, unknown pattern,
/// or out-of-bounds anchor.
#[no_mangle]
pub unsafe extern "C" fn lg_stamp(
    ptr: *mut Grid,
    pattern: u32,
    row: u32,
    col: u32,
    alive: u8,
) -> u32 {
    if ptr.is_null() {
        return 0;
    }

    let Some(pattern) = Pattern::from_index(pattern as usize) else {
        return 0;
    };

    let grid = &mut *ptr;
    let (row, col) = (row as usize, col as usize);
    if !automaton::in_bounds(grid, row, col) {
        return 0;
    }

    grid.stamp(pattern, row, col, alive != 0).len() as u32
}

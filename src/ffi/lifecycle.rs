//! Grid creation, destruction, and generation queries.

use crate::state::Grid;

/// Creates a new all-dead grid and returns an opaque pointer.
///
/// `wrap` and `trace` are booleans: 0 = off, non-zero = on.
/// Steps run on the global rayon pool.
///
/// # Returns
/// A pointer to a new Grid, or null if `live_state <= 1`.
///
/// # Safety
/// The returned pointer must eventually be freed with `lg_destroy()`.
#[no_mangle]
pub extern "C" fn lg_create(
    rows: u32,
    cols: u32,
    live_state: u8,
    wrap: u8,
    trace: u8,
) -> *mut Grid {
    match Grid::new(rows as usize, cols as usize, live_state, wrap != 0, trace != 0) {
        Ok(grid) => Box::into_raw(Box::new(grid)),
        Err(err) => {
            tracing::warn!(%err, rows, cols, live_state, "lg_create failed");
            std::ptr::null_mut()
        }
    }
}

/// Destroys a grid and frees its memory.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by `lg_create()`, or null
/// - `ptr` must not be used after this call
#[no_mangle]
pub unsafe extern "C" fn lg_destroy(ptr: *mut Grid) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

/// Gets the generation counter of a grid.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Grid, or null
///
/// # Returns
/// The generation counter, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn lg_get_generation(ptr: *const Grid) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).generation()
}

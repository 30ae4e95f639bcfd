//! Direct cell edits, bulk resets, and trace toggling.

use rand::Rng;

use super::grid::{assert_in_bounds, index_of};
use crate::state::Grid;

/// Set the cell at `idx` alive or dead, keeping `population` in step.
///
/// Returns true if the cell changed.
#[inline]
pub(crate) fn set_cell_at(grid: &mut Grid, idx: usize, alive: bool) -> bool {
    let current = grid.cells[idx];

    if alive && current != grid.live_state {
        grid.cells[idx] = grid.live_state;
        grid.population += 1;
        true
    } else if !alive && current != 0 {
        if current == grid.live_state {
            grid.population -= 1;
        }
        grid.cells[idx] = 0;
        true
    } else {
        false
    }
}

/// Set each listed cell alive or dead.
///
/// Repeating a call with the same `alive` value has no further effect.
///
/// # Panics
/// If any coordinate lies outside the grid. Callers clip or wrap first.
pub fn set_cells_state<I>(grid: &mut Grid, cells: I, alive: bool)
where
    I: IntoIterator<Item = (usize, usize)>,
{
    for (row, col) in cells {
        assert_in_bounds(grid, row, col);
        let idx = index_of(grid, row, col);
        set_cell_at(grid, idx, alive);
    }
}

/// Kill every cell and reset the generation counter.
pub fn clear(grid: &mut Grid) {
    grid.cells.fill(0);
    grid.population = 0;
    grid.generation = 0;
    tracing::debug!(rows = grid.rows, cols = grid.cols, "cleared grid");
}

/// Set each cell alive with probability 1/2, independently.
///
/// Produces no trace values. Resets the generation counter.
pub fn randomize<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) {
    let live_state = grid.live_state;
    let mut population = 0;

    for cell in grid.cells.iter_mut() {
        if rng.random::<bool>() {
            *cell = live_state;
            population += 1;
        } else {
            *cell = 0;
        }
    }

    grid.population = population;
    grid.generation = 0;
    tracing::debug!(population, "randomized grid");
}

/// Flip trace mode. When it turns off, all fading cells become dead.
///
/// Trace values are never part of the population, so it is unchanged.
pub fn toggle_trace(grid: &mut Grid) {
    grid.trace = !grid.trace;

    if !grid.trace {
        let live_state = grid.live_state;
        for cell in grid.cells.iter_mut().filter(|c| **c < live_state) {
            *cell = 0;
        }
    }

    tracing::debug!(trace = grid.trace, "toggled trace");
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn live_count(grid: &Grid) -> usize {
        grid.cells.iter().filter(|&&c| c == grid.live_state).count()
    }

    #[test]
    fn test_set_cells_alive_and_dead() {
        let mut grid = Grid::new(4, 4, 5, false, true).unwrap();

        set_cells_state(&mut grid, [(0, 0), (1, 1), (3, 3)], true);
        assert_eq!(grid.population, 3);
        assert_eq!(grid.get(1, 1), 5);

        set_cells_state(&mut grid, [(1, 1), (2, 2)], false);
        assert_eq!(grid.population, 2);
        assert_eq!(grid.get(1, 1), 0);
        assert_eq!(grid.get(2, 2), 0);
    }

    #[test]
    fn test_set_cells_idempotent() {
        let mut grid = Grid::new(4, 4, 5, false, false).unwrap();

        set_cells_state(&mut grid, [(2, 3)], true);
        set_cells_state(&mut grid, [(2, 3)], true);
        assert_eq!(grid.population, 1);

        set_cells_state(&mut grid, [(2, 3)], false);
        set_cells_state(&mut grid, [(2, 3)], false);
        assert_eq!(grid.population, 0);
    }

    #[test]
    fn test_set_cells_duplicate_coordinates() {
        let mut grid = Grid::new(4, 4, 5, false, false).unwrap();
        set_cells_state(&mut grid, [(1, 1), (1, 1), (1, 1)], true);
        assert_eq!(grid.population, 1);
    }

    #[test]
    fn test_kill_trace_cell_keeps_population() {
        let mut grid = Grid::new(3, 3, 5, false, true).unwrap();
        set_cells_state(&mut grid, [(0, 0), (2, 2)], true);
        let idx = index_of(&grid, 1, 1);
        grid.cells[idx] = 2;

        set_cells_state(&mut grid, [(1, 1)], false);
        assert_eq!(grid.get(1, 1), 0);
        assert_eq!(grid.population, 2);

        // Reviving a trace cell counts it again
        grid.cells[idx] = 3;
        set_cells_state(&mut grid, [(1, 1)], true);
        assert_eq!(grid.get(1, 1), 5);
        assert_eq!(grid.population, 3);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_set_cells_out_of_bounds_panics() {
        let mut grid = Grid::new(4, 4, 5, false, false).unwrap();
        set_cells_state(&mut grid, [(0, 4)], true);
    }

    #[test]
    fn test_clear() {
        let mut grid = Grid::new(4, 4, 5, false, true).unwrap();
        set_cells_state(&mut grid, [(0, 0), (1, 1)], true);
        grid.step();
        assert!(grid.cells.iter().any(|&c| c != 0));

        clear(&mut grid);

        assert!(grid.cells.iter().all(|&c| c == 0));
        assert_eq!(grid.population, 0);
        assert_eq!(grid.generation, 0);
    }

    #[test]
    fn test_randomize_population_is_exact() {
        let mut grid = Grid::new(32, 32, 7, true, true).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        randomize(&mut grid, &mut rng);

        assert_eq!(grid.population, live_count(&grid));
        assert!(grid.cells.iter().all(|&c| c == 0 || c == 7));
        // 1024 fair coin flips land well inside this band
        assert!(grid.population > 400 && grid.population < 624);
        assert_eq!(grid.generation, 0);
    }

    #[test]
    fn test_randomize_is_deterministic_for_seed() {
        let mut a = Grid::new(16, 16, 4, true, false).unwrap();
        let mut b = Grid::new(16, 16, 4, true, false).unwrap();

        randomize(&mut a, &mut StdRng::seed_from_u64(7));
        randomize(&mut b, &mut StdRng::seed_from_u64(7));

        assert_eq!(a.cells, b.cells);
    }

    #[test]
    fn test_toggle_trace_collapses_fading_cells() {
        let mut grid = Grid::new(3, 3, 4, false, true).unwrap();
        set_cells_state(&mut grid, [(0, 0)], true);
        let idx = index_of(&grid, 1, 1);
        grid.cells[idx] = 1;
        let idx = index_of(&grid, 2, 2);
        grid.cells[idx] = 3;

        toggle_trace(&mut grid);

        assert!(!grid.trace);
        assert_eq!(grid.get(0, 0), 4);
        assert_eq!(grid.get(1, 1), 0);
        assert_eq!(grid.get(2, 2), 0);
        assert_eq!(grid.population, 1);
    }

    #[test]
    fn test_toggle_trace_on_keeps_cells() {
        let mut grid = Grid::new(3, 3, 4, false, false).unwrap();
        set_cells_state(&mut grid, [(0, 0)], true);

        toggle_trace(&mut grid);

        assert!(grid.trace);
        assert_eq!(grid.get(0, 0), 4);
        assert_eq!(grid.population, 1);
    }
}

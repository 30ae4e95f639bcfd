//! Game of Life stepping with trace fading.

use rayon::prelude::*;

use super::grid::{count_live_neighbors, index_of};
use crate::state::Grid;

/// Compute the next value of one cell from its current value and live neighbor count.
///
/// B3/S23 rules:
/// - Survival: a live cell with 2 or 3 neighbors stays alive
/// - Birth: any other cell (dead or fading) with exactly 3 neighbors becomes alive
///
/// With trace on, a non-zero cell that is not alive next generation decays
/// by one but never below 1.
#[inline]
pub fn next_state(current: u8, neighbors: u8, live_state: u8, trace: bool) -> u8 {
    let survives = current == live_state && (neighbors == 2 || neighbors == 3);
    let born = current < live_state && neighbors == 3;

    if survives || born {
        live_state
    } else if trace && current != 0 {
        (current - 1).max(1)
    } else {
        0
    }
}

/// Evolve one row into `out`, returning how many of its cells are alive.
fn evolve_row(grid: &Grid, row: usize, out: &mut [u8]) -> usize {
    let mut alive = 0;

    for (col, next) in out.iter_mut().enumerate() {
        let current = grid.cells[index_of(grid, row, col)];
        let neighbors = count_live_neighbors(grid, row, col);

        *next = next_state(current, neighbors, grid.live_state, grid.trace);
        if *next == grid.live_state {
            alive += 1;
        }
    }

    alive
}

/// Evolve every row in parallel, returning the new population.
fn evolve_all(grid: &Grid, next: &mut [u8]) -> usize {
    next.par_chunks_mut(grid.cols)
        .enumerate()
        .map(|(row, out)| evolve_row(grid, row, out))
        .sum()
}

/// Step the grid forward by one generation.
///
/// Every cell reads from the generation-N buffer and writes to a separate
/// generation-N+1 buffer, so rows can be evaluated in any order (and in
/// parallel). The buffers are swapped at the end.
pub fn step_generation(grid: &mut Grid) {
    let mut next = std::mem::take(&mut grid.next);
    next.resize(grid.cells.len(), 0);

    let population = if grid.cells.is_empty() {
        0
    } else {
        let current = &*grid;
        match &current.thread_pool {
            Some(pool) => pool.install(|| evolve_all(current, &mut next)),
            None => evolve_all(current, &mut next),
        }
    };

    std::mem::swap(&mut grid.cells, &mut next);
    grid.next = next;
    grid.population = population;
    grid.generation += 1;

    tracing::trace!(
        generation = grid.generation,
        population = grid.population,
        "stepped grid"
    );
}

//! Drawing patterns and their placement on the grid.

use super::edit::set_cells_state;
use super::grid::{assert_in_bounds, resolve_axis};
use crate::state::Grid;

/// A shape the host can draw with, described as `(d_row, d_col)` offsets
/// from the anchor cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pattern {
    Cell,
    Glider,
    /// Gosper glider gun.
    GliderGun,
    Heart,
}

const CELL: &[(usize, usize)] = &[(0, 0)];

const GLIDER: &[(usize, usize)] = &[(2, 0), (2, 1), (2, 2), (1, 2), (0, 1)];

#[rustfmt::skip]
const GLIDER_GUN: &[(usize, usize)] = &[
    (4, 0), (5, 0), (4, 1), (5, 1),
    (4, 10), (5, 10), (6, 10), (3, 11), (7, 11), (2, 12), (8, 12),
    (2, 13), (8, 13), (5, 14), (3, 15), (7, 15), (4, 16), (5, 16),
    (6, 16), (5, 17),
    (2, 20), (3, 20), (4, 20), (2, 21), (3, 21), (4, 21), (1, 22),
    (5, 22), (0, 24), (1, 24), (5, 24), (6, 24),
    (2, 34), (3, 34), (2, 35), (3, 35),
];

#[rustfmt::skip]
const HEART: &[(usize, usize)] = &[
    (0, 2), (0, 3), (1, 4), (0, 5), (0, 6), (1, 7), (2, 8), (3, 8),
    (4, 8), (5, 7), (6, 6), (7, 5), (8, 4), (7, 3), (6, 2), (5, 1),
    (4, 0), (3, 0), (2, 0), (1, 1),
];

impl Pattern {
    /// Every pattern, in cycling order.
    pub const ALL: [Pattern; 4] = [
        Pattern::Cell,
        Pattern::Glider,
        Pattern::GliderGun,
        Pattern::Heart,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Pattern::Cell => "Cell",
            Pattern::Glider => "Glider",
            Pattern::GliderGun => "Glider gun",
            Pattern::Heart => "Heart",
        }
    }

    /// Look a pattern up by its display name.
    pub fn from_name(name: &str) -> Option<Pattern> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    /// Pattern at `index` in [`Pattern::ALL`].
    pub fn from_index(index: usize) -> Option<Pattern> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn offsets(self) -> &'static [(usize, usize)] {
        match self {
            Pattern::Cell => CELL,
            Pattern::Glider => GLIDER,
            Pattern::GliderGun => GLIDER_GUN,
            Pattern::Heart => HEART,
        }
    }

    /// The following pattern, wrapping to the first.
    pub fn next(self) -> Pattern {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// The preceding pattern, wrapping to the last.
    pub fn prev(self) -> Pattern {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Cells covered by `offsets` anchored at `(row, col)` on a `rows` x `cols` grid.
///
/// Offsets landing inside the grid are kept. Outside, they wrap around when
/// `wrap` is set and are dropped otherwise.
pub fn place_pattern(
    offsets: &[(usize, usize)],
    row: usize,
    col: usize,
    rows: usize,
    cols: usize,
    wrap: bool,
) -> Vec<(usize, usize)> {
    offsets
        .iter()
        .filter_map(|&(dr, dc)| {
            let r = resolve_axis((row + dr) as isize, rows, false);
            let c = resolve_axis((col + dc) as isize, cols, false);

            match (r, c) {
                (Some(r), Some(c)) => Some((r, c)),
                _ if wrap => Some((
                    resolve_axis((row + dr) as isize, rows, true)?,
                    resolve_axis((col + dc) as isize, cols, true)?,
                )),
                _ => None,
            }
        })
        .collect()
}

/// Draw `pattern` anchored at `(row, col)` and return the affected cells.
///
/// # Panics
/// If the anchor lies outside the grid.
pub fn stamp(
    grid: &mut Grid,
    pattern: Pattern,
    row: usize,
    col: usize,
    alive: bool,
) -> Vec<(usize, usize)> {
    assert_in_bounds(grid, row, col);

    let cells = place_pattern(pattern.offsets(), row, col, grid.rows, grid.cols, grid.wrap);
    set_cells_state(grid, cells.iter().copied(), alive);

    tracing::debug!(
        pattern = pattern.name(),
        row,
        col,
        alive,
        affected = cells.len(),
        "stamped pattern"
    );
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_catalogue() {
        assert_eq!(Pattern::Cell.offsets().len(), 1);
        assert_eq!(Pattern::Glider.offsets().len(), 5);
        assert_eq!(Pattern::GliderGun.offsets().len(), 36);
        assert_eq!(Pattern::Heart.offsets().len(), 20);

        for pattern in Pattern::ALL {
            assert_eq!(Pattern::from_name(pattern.name()), Some(pattern));
            assert_eq!(Pattern::from_index(pattern.index()), Some(pattern));
        }
        assert_eq!(Pattern::from_name("Pulsar"), None);
        assert_eq!(Pattern::from_index(4), None);
    }

    #[test]
    fn test_pattern_cycling() {
        assert_eq!(Pattern::Cell.next(), Pattern::Glider);
        assert_eq!(Pattern::Heart.next(), Pattern::Cell);
        assert_eq!(Pattern::Cell.prev(), Pattern::Heart);
        assert_eq!(Pattern::GliderGun.prev(), Pattern::Glider);

        let mut pattern = Pattern::Glider;
        for _ in 0..Pattern::ALL.len() {
            pattern = pattern.next();
        }
        assert_eq!(pattern, Pattern::Glider);
    }

    #[test]
    fn test_place_pattern_in_bounds() {
        let cells = place_pattern(Pattern::Glider.offsets(), 1, 1, 10, 10, false);
        assert_eq!(cells, vec![(3, 1), (3, 2), (3, 3), (2, 3), (1, 2)]);
    }

    #[test]
    fn test_place_pattern_clips_without_wrap() {
        let cells = place_pattern(Pattern::Glider.offsets(), 3, 3, 5, 5, false);
        assert_eq!(cells, vec![(3, 4)]);
    }

    #[test]
    fn test_place_pattern_wraps() {
        let cells = place_pattern(Pattern::Glider.offsets(), 3, 3, 5, 5, true);
        assert_eq!(cells, vec![(0, 3), (0, 4), (0, 0), (4, 0), (3, 4)]);
    }

    #[test]
    fn test_stamp_sets_and_clears() {
        let mut grid = Grid::new(10, 10, 4, false, false).unwrap();

        let affected = stamp(&mut grid, Pattern::Glider, 0, 0, true);
        assert_eq!(affected.len(), 5);
        assert_eq!(grid.population, 5);
        for &(r, c) in &affected {
            assert_eq!(grid.get(r, c), 4);
        }

        stamp(&mut grid, Pattern::Glider, 0, 0, false);
        assert_eq!(grid.population, 0);
    }

    #[test]
    fn test_stamp_glider_gun_wraps_on_small_grid() {
        let mut grid = Grid::new(20, 20, 4, true, false).unwrap();
        let affected = stamp(&mut grid, Pattern::GliderGun, 0, 0, true);

        assert_eq!(affected.len(), 36);
        // Wrapped offsets can collide with in-bounds ones.
        assert_eq!(
            grid.population,
            grid.cells.iter().filter(|&&c| c == 4).count()
        );
        assert!(grid.population <= 36);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_stamp_anchor_out_of_bounds_panics() {
        let mut grid = Grid::new(5, 5, 4, true, false).unwrap();
        stamp(&mut grid, Pattern::Cell, 5, 0, true);
    }
}

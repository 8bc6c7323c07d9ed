//! Optimal meeting point on a grid.
//!
//! Given a rectangular grid of markers (`0` empty land, `1` house, anything
//! else an obstacle), find the empty cell reachable from every house that
//! minimises the total shortest-path distance to all houses.
//!
//! Two engines compute the same quantity:
//!
//! - [`separable`]: prefix sums over row and column house counts. Only valid
//!   without obstacles, where shortest paths are Manhattan distances. Time
//!   O(rows · cols), independent of the number of houses.
//! - [`traversal`]: one breadth-first search per house, accumulating distance
//!   sums and reach counts. Handles obstacles. Time O(houses · rows · cols).
//!
//! [`Solver`] classifies the grid and dispatches. The engines are public so
//! they can be run and timed on the same input directly.
//!
//! ```
//! let rows = [[1, 0, 0, 0, 1], [0, 0, 0, 0, 0], [0, 0, 1, 0, 0]];
//! assert_eq!(meetpoint::min_total_distance(&rows), Ok(6));
//! ```

mod classify;
mod engine;
mod houses;
pub mod separable;
mod solver;
pub mod traversal;

pub use classify::{GridClass, classify};
pub use engine::{CostEngine, MeetingPoint, NOT_FOUND};
pub use houses::HouseSet;
pub use meetpoint_core::{Cell, Grid, GridError, Point};
pub use separable::SeparableEngine;
pub use solver::{Solver, SolverConfig, Strategy};
pub use traversal::{TerrainPather, TraversalEngine};

/// Minimum total distance for `grid` with the default configuration, or
/// [`NOT_FOUND`] (`-1`).
pub fn solve(grid: &Grid) -> i64 {
    Solver::default().solve(grid)
}

/// Minimum total distance for rows of raw markers, or `Ok(-1)` when no
/// meeting point exists.
///
/// No rows, or an empty first row, is `Ok(-1)`. Any other row whose length
/// differs from the first is rejected with [`GridError::Jagged`].
pub fn min_total_distance<R: AsRef<[i32]>>(rows: &[R]) -> Result<i64, GridError> {
    if rows.first().is_none_or(|r| r.as_ref().is_empty()) {
        return Ok(NOT_FOUND);
    }
    let grid = Grid::from_rows(rows)?;
    Ok(solve(&grid))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_rows_entry_point() {
        let rows = vec![vec![1, 0, 0, 0, 1], vec![0, 0, 0, 0, 0], vec![0, 0, 1, 0, 0]];
        assert_eq!(min_total_distance(&rows), Ok(6));
        assert_eq!(min_total_distance(&[[1, 2, 0], [2, 2, 0], [0, 0, 1]]), Ok(-1));
    }

    #[test]
    fn empty_inputs_are_not_found() {
        let none: Vec<Vec<i32>> = Vec::new();
        assert_eq!(min_total_distance(&none), Ok(NOT_FOUND));
        assert_eq!(min_total_distance(&[vec![], vec![1, 0]]), Ok(NOT_FOUND));
    }

    #[test]
    fn jagged_rows_are_rejected() {
        let err = min_total_distance(&[vec![1, 0, 0], vec![0, 0]]).unwrap_err();
        assert!(matches!(err, GridError::Jagged { row: 1, .. }));
    }

    #[test]
    fn engines_callable_directly() {
        let grid = Grid::from_rows(&[[1, 0, 1], [0, 0, 0]]).unwrap();
        let houses = HouseSet::from_grid(&grid);
        let fast = separable::min_total_cost(&grid, &houses);
        let slow = traversal::min_total_cost(&grid, &houses);
        assert_eq!(fast, slow);
        assert_eq!(fast.map(|m| m.cost), Some(2));
        assert_eq!(solve(&grid), 2);
    }
}

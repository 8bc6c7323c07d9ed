//! Prefix-sum engine for obstacle-free grids.
//!
//! Without obstacles the shortest path between two cells is their Manhattan
//! distance, which splits into a row term and a column term. The total cost
//! of cell `(r, c)` is therefore `cost_row[r] + cost_col[c]`, and each axis
//! array is built in linear time from per-row / per-column house counts.

use meetpoint_core::Grid;

use crate::engine::{CostEngine, MeetingPoint};
use crate::houses::HouseSet;

/// [`CostEngine`] for grids classified as
/// [`FastEligible`](crate::GridClass::FastEligible).
#[derive(Debug, Clone, Copy, Default)]
pub struct SeparableEngine;

impl CostEngine for SeparableEngine {
    fn min_total_cost(&self, grid: &Grid, houses: &HouseSet) -> Option<MeetingPoint> {
        min_total_cost(grid, houses)
    }
}

/// Distance cost along one axis for every coordinate.
///
/// `counts[i]` is the number of houses at coordinate `i`. Moving the target
/// from `i - 1` to `i` moves it one step away from the `prefix` houses
/// before `i` and one step closer to the `total - prefix` others.
pub fn axis_costs(counts: &[i64]) -> Vec<i64> {
    let total: i64 = counts.iter().sum();
    let mut costs = Vec::with_capacity(counts.len());
    if counts.is_empty() {
        return costs;
    }
    costs.push(counts.iter().zip(0i64..).map(|(&n, i)| n * i).sum());
    let mut prefix = 0;
    for i in 1..counts.len() {
        prefix += counts[i - 1];
        let prev = costs[i - 1];
        costs.push(prev + 2 * prefix - total);
    }
    costs
}

/// Minimum total Manhattan cost over the empty cells of `grid`.
///
/// The grid must not contain obstacles; they would be ignored and the
/// result would be the unobstructed distance. `None` when `houses` does
/// not fit `grid` (see [`HouseSet::fits`]).
pub fn min_total_cost(grid: &Grid, houses: &HouseSet) -> Option<MeetingPoint> {
    if !houses.fits(grid) {
        return None;
    }
    let rows = grid.height().max(0) as usize;
    let cols = grid.width().max(0) as usize;
    let mut row_count = vec![0i64; rows];
    let mut col_count = vec![0i64; cols];
    for h in houses {
        row_count[h.y as usize] += 1;
        col_count[h.x as usize] += 1;
    }

    let cost_row = axis_costs(&row_count);
    let cost_col = axis_costs(&col_count);

    let mut best: Option<MeetingPoint> = None;
    for (p, c) in grid.iter() {
        if !c.is_empty() {
            continue;
        }
        let cost = cost_row[p.y as usize] + cost_col[p.x as usize];
        if best.is_none_or(|b| cost < b.cost) {
            best = Some(MeetingPoint { pos: p, cost });
        }
    }
    best
}

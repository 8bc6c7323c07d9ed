//! Classification, dispatch and reduction to the public result.

use log::debug;
use meetpoint_core::Grid;

use crate::classify::{GridClass, classify};
use crate::engine::{CostEngine, MeetingPoint, NOT_FOUND};
use crate::houses::HouseSet;
use crate::separable::SeparableEngine;
use crate::traversal::TraversalEngine;

/// How the solver picks an engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Strategy {
    /// Prefix sums for obstacle-free grids, traversal otherwise.
    #[default]
    Auto,
    /// Always run the per-house traversal.
    Traversal,
}

/// Solver configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SolverConfig {
    pub strategy: Strategy,
    /// Skip the per-house searches when the houses are split across
    /// disconnected regions.
    pub component_precheck: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::Auto,
            component_precheck: true,
        }
    }
}

/// Finds the empty cell with the smallest total distance to every house.
///
/// Holds only configuration: each call builds and drops its own working
/// state, so a `Solver` can be shared freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Engine selection for `grid` under this configuration.
    pub fn grid_class(&self, grid: &Grid) -> GridClass {
        match self.config.strategy {
            Strategy::Auto => classify(grid),
            Strategy::Traversal => GridClass::NeedsTraversal,
        }
    }

    /// The best meeting point, or `None` if the grid is empty, has no
    /// houses, or has no empty cell reachable from every house.
    pub fn meeting_point(&self, grid: &Grid) -> Option<MeetingPoint> {
        if grid.is_empty() {
            debug!("empty grid {}", grid.bounds());
            return None;
        }
        let houses = HouseSet::from_grid(grid);
        if houses.is_empty() {
            debug!("no houses in {}x{} grid", grid.width(), grid.height());
            return None;
        }

        let class = self.grid_class(grid);
        debug!(
            "{}x{} grid, {} houses: {class:?}",
            grid.width(),
            grid.height(),
            houses.len()
        );
        let found = match class {
            GridClass::FastEligible => SeparableEngine.min_total_cost(grid, &houses),
            GridClass::NeedsTraversal => TraversalEngine {
                component_precheck: self.config.component_precheck,
            }
            .min_total_cost(grid, &houses),
        };
        if found.is_none() {
            debug!("no empty cell reachable from all {} houses", houses.len());
        }
        found
    }

    /// Minimum total distance, or [`NOT_FOUND`] (`-1`).
    pub fn solve(&self, grid: &Grid) -> i64 {
        self.meeting_point(grid).map_or(NOT_FOUND, |m| m.cost)
    }
}

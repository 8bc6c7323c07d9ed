use meetpoint_core::{Grid, Point};

use crate::houses::HouseSet;

/// Public sentinel for "no valid meeting point".
pub const NOT_FOUND: i64 = -1;

/// The winning empty cell and its total distance to every house.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeetingPoint {
    pub pos: Point,
    pub cost: i64,
}

/// Shared capability of the two distance engines.
///
/// Both return the cheapest empty cell, ties broken by row-major order, or
/// `None` when no empty cell qualifies. `houses` must be the house set of
/// `grid` and must not be empty.
pub trait CostEngine {
    fn min_total_cost(&self, grid: &Grid, houses: &HouseSet) -> Option<MeetingPoint>;
}

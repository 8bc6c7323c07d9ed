use meetpoint_core::Grid;

/// Which engine a grid can be handed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridClass {
    /// Only empty and house markers: Manhattan cost is separable by axis.
    FastEligible,
    /// At least one obstacle: shortest paths must be searched.
    NeedsTraversal,
}

/// Scan every cell once; any marker outside `{0, 1}` forces traversal.
///
/// Callers reject degenerate grids before classifying; an empty grid is
/// reported as [`GridClass::FastEligible`].
pub fn classify(grid: &Grid) -> GridClass {
    if grid.cells().iter().any(|c| c.is_obstacle()) {
        GridClass::NeedsTraversal
    } else {
        GridClass::FastEligible
    }
}

use meetpoint_core::Point;

/// Minimal search interface: neighbor enumeration.
pub trait Pather {
    /// Append neighbors of `p` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// Pather that also distinguishes target cells, the cells whose distance
/// from each source is accumulated by
/// [`SearchRange::accumulate_reach`](crate::SearchRange::accumulate_reach).
///
/// Non-target cells reached by the search are still expanded: they are
/// pass-through terrain.
pub trait TargetPather: Pather {
    /// Whether `p` collects distance and reach.
    fn is_target(&self, p: Point) -> bool;
}

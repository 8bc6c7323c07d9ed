//! Search algorithms on integer grids.
//!
//! - **Accumulating BFS**: one breadth-first search per source, folding the
//!   distances into per-cell sums and reach counters
//!   ([`SearchRange::accumulate_reach`], [`SearchRange::min_reached`]).
//! - **Connected Components** labelling ([`SearchRange::cc_map_all`]).
//!
//! All algorithms operate through [`SearchRange`], which owns the per-cell
//! arrays. Consecutive searches are told apart by a generation counter, so
//! the visit marks are never cleared between sources.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | connected components |
//! | [`TargetPather`] : [`Pather`] | accumulating BFS |

mod cc;
mod distance;
mod range;
mod reach;
mod traits;

pub use distance::{manhattan, manhattan_sum};
pub use range::{ReachNode, SearchRange};
pub use traits::{Pather, TargetPather};

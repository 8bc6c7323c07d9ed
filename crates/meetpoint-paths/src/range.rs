use std::collections::VecDeque;

use meetpoint_core::{Point, Range};

/// A reached target cell with its accumulated cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReachNode {
    pub pos: Point,
    /// Number of sources whose search touched this cell.
    pub reach: u32,
    /// Sum of the shortest-path distances from those sources.
    pub cost: i64,
}

// ---------------------------------------------------------------------------
// SearchRange
// ---------------------------------------------------------------------------

/// Central coordinator for searches on a grid rectangle.
///
/// `SearchRange` owns the per-cell arrays (distance sums, reach counters,
/// visit marks, component labels) and the scratch queues, so a sequence of
/// single-source searches reuses the same storage.
pub struct SearchRange {
    pub(crate) rng: Range,
    // Reach accumulation
    pub(crate) dist_sum: Vec<i64>,
    pub(crate) reach: Vec<u32>,
    pub(crate) marks: Vec<u32>,
    pub(crate) generation: u32,
    pub(crate) queue: VecDeque<(usize, i32)>,
    // CC caches
    pub(crate) cc_labels: Vec<i32>,
    pub(crate) cc_stack: Vec<usize>,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Point>,
}

impl SearchRange {
    /// Create a new `SearchRange` for the given grid rectangle.
    pub fn new(rng: Range) -> Self {
        let len = rng.len();
        Self {
            rng,
            dist_sum: vec![0; len],
            reach: vec![0; len],
            marks: vec![0; len],
            generation: 0,
            queue: VecDeque::new(),
            cc_labels: vec![-1; len],
            cc_stack: Vec::new(),
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Zero every distance sum and reach counter.
    ///
    /// Visit marks are not touched: each search runs under a fresh
    /// generation, so stale marks are simply ignored.
    pub fn reset_reach(&mut self) {
        self.dist_sum.fill(0);
        self.reach.fill(0);
    }

    /// Start a new search generation and return it.
    pub(crate) fn next_generation(&mut self) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Wrapped: old marks could collide with the new ids.
            self.marks.fill(0);
            self.generation = 1;
        }
        self.generation
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        self.rng.index_of(p)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        self.rng.point_at(idx)
    }
}

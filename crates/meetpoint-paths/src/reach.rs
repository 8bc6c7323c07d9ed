//! Accumulating breadth-first reachability.

use meetpoint_core::Point;

use crate::range::{ReachNode, SearchRange};
use crate::traits::TargetPather;

impl SearchRange {
    /// Run a breadth-first search from `source` and fold its distances into
    /// the running sums.
    ///
    /// Each step has cost 1. Every target cell first reached at distance `d`
    /// gets `d` added to its distance sum and its reach counter bumped by
    /// one. Returns the number of target cells reached. A source outside
    /// the range reaches nothing.
    pub fn accumulate_reach<P: TargetPather>(&mut self, pather: &P, source: Point) -> usize {
        let Some(si) = self.idx(source) else {
            return 0;
        };
        let generation = self.next_generation();
        self.queue.clear();
        self.marks[si] = generation;
        self.queue.push_back((si, 0));

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut reached = 0;

        while let Some((ci, d)) = self.queue.pop_front() {
            let cp = self.point(ci);

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if self.marks[ni] == generation {
                    continue;
                }
                self.marks[ni] = generation;
                let nd = d + 1;
                if pather.is_target(np) {
                    self.dist_sum[ni] += i64::from(nd);
                    self.reach[ni] += 1;
                    reached += 1;
                }
                self.queue.push_back((ni, nd));
            }
        }

        self.nbuf = nbuf;
        reached
    }

    /// Number of searches that reached `p` since the last
    /// [`reset_reach`](Self::reset_reach). Zero outside the range.
    pub fn reach_at(&self, p: Point) -> u32 {
        self.idx(p).map_or(0, |i| self.reach[i])
    }

    /// Accumulated distance sum at `p`, or `None` outside the range.
    pub fn distance_sum_at(&self, p: Point) -> Option<i64> {
        self.idx(p).map(|i| self.dist_sum[i])
    }

    /// The cheapest cell reached by exactly `required` searches.
    ///
    /// Ties go to the first cell in row-major order. `required == 0` never
    /// matches.
    pub fn min_reached(&self, required: u32) -> Option<ReachNode> {
        if required == 0 {
            return None;
        }
        let mut best: Option<ReachNode> = None;
        for (i, (&reach, &cost)) in self.reach.iter().zip(self.dist_sum.iter()).enumerate() {
            if reach != required {
                continue;
            }
            if best.is_none_or(|b| cost < b.cost) {
                best = Some(ReachNode {
                    pos: self.point(i),
                    reach,
                    cost,
                });
            }
        }
        best
    }
}

//! Connected-component labelling.

use meetpoint_core::Point;

use crate::SearchRange;
use crate::traits::Pather;

impl SearchRange {
    /// Label every cell in the range with a connected-component ID.
    ///
    /// Two cells belong to the same component if there is a path of
    /// neighbours (as defined by `pather`) between them. After this call
    /// use [`cc_at`](Self::cc_at) to query the label of a given point.
    pub fn cc_map_all<P: Pather>(&mut self, pather: &P) {
        let len = self.rng.len();
        self.cc_labels.fill(-1);

        let mut label: i32 = 0;
        let mut nbuf = std::mem::take(&mut self.nbuf);

        for start in 0..len {
            if self.cc_labels[start] >= 0 {
                continue;
            }

            // Iterative DFS from `start`.
            self.cc_stack.clear();
            self.cc_stack.push(start);
            self.cc_labels[start] = label;

            while let Some(ci) = self.cc_stack.pop() {
                let cp = self.point(ci);
                nbuf.clear();
                pather.neighbors(cp, &mut nbuf);

                for &np in nbuf.iter() {
                    if let Some(ni) = self.idx(np) {
                        if self.cc_labels[ni] < 0 {
                            self.cc_labels[ni] = label;
                            self.cc_stack.push(ni);
                        }
                    }
                }
            }

            label += 1;
        }

        self.nbuf = nbuf;
    }

    /// Query the connected-component label of a point.
    ///
    /// Returns `None` if the point is outside the range or
    /// [`cc_map_all`](Self::cc_map_all) has not been called yet.
    pub fn cc_at(&self, p: Point) -> Option<usize> {
        let i = self.idx(p)?;
        let label = self.cc_labels[i];
        if label < 0 { None } else { Some(label as usize) }
    }

    /// Whether all of `points` share one component. Vacuously true for zero
    /// or one point; false if any point is unlabelled.
    pub fn same_component(&self, points: &[Point]) -> bool {
        let mut labels = points.iter().map(|&p| self.cc_at(p));
        let Some(first) = labels.next() else {
            return true;
        };
        first.is_some() && labels.all(|l| l == first)
    }
}

use meetpoint_core::{Grid, Point};

/// The houses of a grid, in row-major order.
///
/// Extracted once per solve and shared by whichever engine runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HouseSet {
    points: Vec<Point>,
}

impl HouseSet {
    /// Collect every house cell of `grid`.
    pub fn from_grid(grid: &Grid) -> Self {
        let points = grid
            .iter()
            .filter(|(_, c)| c.is_house())
            .map(|(p, _)| p)
            .collect();
        Self { points }
    }

    /// Number of houses.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether the set is non-empty and every point is a house of `grid`.
    ///
    /// Engines refuse sets that fail this, e.g. one extracted from another
    /// grid.
    pub fn fits(&self, grid: &Grid) -> bool {
        !self.is_empty()
            && self
                .points
                .iter()
                .all(|&p| grid.at(p).is_some_and(|c| c.is_house()))
    }

    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }
}

impl<'a> IntoIterator for &'a HouseSet {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

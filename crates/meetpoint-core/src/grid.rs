//! An integer-marker grid.
//!
//! [`Cell`] is a newtype over `i32`. `0` is empty land, `1` is a house and
//! every other value is an obstacle. [`Grid`] is a rectangular, row-major
//! array of such cells; rectangularity is checked when it is built.

use std::fmt;

use crate::geom::{Point, Range};

/// A grid cell marker, wrapping an `i32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Cell(pub i32);

impl Cell {
    /// Empty land: the only kind of cell a meeting point may occupy.
    pub const EMPTY: Cell = Cell(0);
    /// A house. Passable, but never a meeting point.
    pub const HOUSE: Cell = Cell(1);
    /// The conventional obstacle marker. Any value other than `0` or `1`
    /// behaves the same way.
    pub const OBSTACLE: Cell = Cell(2);

    /// Create a new cell with the given value.
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Get the underlying integer value.
    pub const fn value(self) -> i32 {
        self.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == Self::EMPTY.0
    }

    #[inline]
    pub const fn is_house(self) -> bool {
        self.0 == Self::HOUSE.0
    }

    /// Whether the cell blocks movement: anything outside `{0, 1}`.
    #[inline]
    pub const fn is_obstacle(self) -> bool {
        !self.is_empty() && !self.is_house()
    }
}

impl From<i32> for Cell {
    fn from(v: i32) -> Self {
        Self(v)
    }
}

impl From<Cell> for i32 {
    fn from(c: Cell) -> Self {
        c.0
    }
}

/// A rectangular 2D grid of [`Cell`] markers, stored row-major.
///
/// A grid may have zero rows or zero columns; such a grid has an empty
/// [`bounds`](Self::bounds) and no cells.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Vec<i32>>", into = "Vec<Vec<i32>>")
)]
pub struct Grid {
    cells: Vec<Cell>,
    bounds: Range,
}

impl Grid {
    /// Create a `width` × `height` grid with every cell set to `cell`.
    pub fn filled(width: i32, height: i32, cell: Cell) -> Self {
        let bounds = Range::new(0, 0, width.max(0), height.max(0));
        Self {
            cells: vec![cell; bounds.len()],
            bounds,
        }
    }

    /// Build a grid from rows of raw markers.
    ///
    /// The width is taken from the first row. Every later row must have the
    /// same length, otherwise [`GridError::Jagged`] is returned.
    pub fn from_rows<R: AsRef<[i32]>>(rows: &[R]) -> Result<Self, GridError> {
        let expected = rows.first().map_or(0, |r| r.as_ref().len());
        let mut cells = Vec::with_capacity(expected * rows.len());
        for (row, r) in rows.iter().enumerate() {
            let r = r.as_ref();
            if r.len() != expected {
                return Err(GridError::Jagged {
                    row,
                    len: r.len(),
                    expected,
                });
            }
            cells.extend(r.iter().copied().map(Cell));
        }
        let bounds = if expected == 0 {
            Range::default()
        } else {
            grid_bounds(expected, rows.len())?
        };
        Ok(Self { cells, bounds })
    }

    /// Returns the bounding range of this grid.
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Returns the size as a Point (width = x, height = y).
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    /// Number of columns.
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Number of rows.
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether the grid has no cells at all.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Get the cell at a point, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Cell> {
        self.bounds.index_of(p).map(|i| self.cells[i])
    }

    /// Set the cell at a point. Does nothing if out of bounds.
    pub fn set(&mut self, p: Point, cell: Cell) {
        if let Some(i) = self.bounds.index_of(p) {
            self.cells[i] = cell;
        }
    }

    /// Row-major view of every cell.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate over `(Point, Cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Cell)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }

    /// Count how many cells equal the given cell.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Count how many cells satisfy a predicate.
    pub fn count_fn(&self, mut f: impl FnMut(Point, Cell) -> bool) -> usize {
        self.iter().filter(|&(p, c)| f(p, c)).count()
    }

    /// Copy the grid back out as rows of raw markers.
    pub fn to_rows(&self) -> Vec<Vec<i32>> {
        let w = self.width().max(0) as usize;
        if w == 0 {
            return Vec::new();
        }
        self.cells
            .chunks(w)
            .map(|row| row.iter().map(|c| c.0).collect())
            .collect()
    }
}

/// Bounds of a `cols` × `rows` grid, rejecting sizes past `i32::MAX`.
fn grid_bounds(cols: usize, rows: usize) -> Result<Range, GridError> {
    match (i32::try_from(cols), i32::try_from(rows)) {
        (Ok(w), Ok(h)) => Ok(Range::new(0, 0, w, h)),
        _ => Err(GridError::TooLarge { rows, cols }),
    }
}

impl TryFrom<Vec<Vec<i32>>> for Grid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<i32>>) -> Result<Self, GridError> {
        Grid::from_rows(&rows)
    }
}

impl From<Grid> for Vec<Vec<i32>> {
    fn from(g: Grid) -> Self {
        g.to_rows()
    }
}

/// Errors that can occur when building a [`Grid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A row's length differs from the first row's.
    Jagged {
        row: usize,
        len: usize,
        expected: usize,
    },
    /// Lines of a text layout have inconsistent widths.
    InconsistentSize(String),
    /// A text layout contains a character with no marker mapping.
    InvalidRune { ch: char, pos: Point },
    /// Row or column count does not fit the `i32` coordinates.
    TooLarge { rows: usize, cols: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Jagged { row, len, expected } => write!(
                f,
                "grid: row {row} has {len} cells, expected {expected}"
            ),
            Self::InconsistentSize(s) => write!(f, "layout: inconsistent size:\n{s}"),
            Self::InvalidRune { ch, pos } => write!(
                f,
                "layout contains invalid rune \u{201c}{ch}\u{201d} at ({}, {})",
                pos.x, pos.y
            ),
            Self::TooLarge { rows, cols } => {
                write!(f, "grid: {rows}x{cols} exceeds the coordinate range")
            }
        }
    }
}

impl std::error::Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_and_size() {
        let g = Grid::from_rows(&[vec![1, 0, 0], vec![0, 2, 1]]).unwrap();
        assert_eq!(g.size(), Point::new(3, 2));
        assert_eq!(g.at(Point::at(0, 0)), Some(Cell::HOUSE));
        assert_eq!(g.at(Point::at(1, 1)), Some(Cell::OBSTACLE));
        assert_eq!(g.at(Point::at(2, 0)), None);
        assert_eq!(g.count(Cell::HOUSE), 2);
    }

    #[test]
    fn from_rows_rejects_jagged() {
        let err = Grid::from_rows(&[vec![1, 0, 0], vec![0, 0]]).unwrap_err();
        assert_eq!(
            err,
            GridError::Jagged {
                row: 1,
                len: 2,
                expected: 3
            }
        );
        assert_eq!(err.to_string(), "grid: row 1 has 2 cells, expected 3");
    }

    #[test]
    fn degenerate_grids_are_empty() {
        let none: [Vec<i32>; 0] = [];
        assert!(Grid::from_rows(&none).unwrap().is_empty());
        let zero_width = Grid::from_rows(&[Vec::<i32>::new(), Vec::new()]).unwrap();
        assert!(zero_width.is_empty());
        assert!(zero_width.bounds().is_empty());
        assert_eq!(zero_width.iter().count(), 0);
    }

    #[test]
    fn oversized_dimensions_are_rejected() {
        let too_wide = i32::MAX as usize + 1;
        assert_eq!(
            grid_bounds(too_wide, 3),
            Err(GridError::TooLarge {
                rows: 3,
                cols: too_wide
            })
        );
        assert!(grid_bounds(4, usize::MAX).is_err());
        assert_eq!(grid_bounds(4, 2), Ok(Range::new(0, 0, 4, 2)));
        assert_eq!(
            GridError::TooLarge { rows: 1, cols: 2 }.to_string(),
            "grid: 1x2 exceeds the coordinate range"
        );
    }

    #[test]
    fn marker_classes() {
        assert!(Cell::EMPTY.is_empty());
        assert!(Cell::HOUSE.is_house());
        assert!(Cell::OBSTACLE.is_obstacle());
        assert!(Cell(-3).is_obstacle());
        assert!(Cell(7).is_obstacle());
        assert!(!Cell::HOUSE.is_obstacle());
    }

    #[test]
    fn set_and_to_rows() {
        let mut g = Grid::filled(3, 2, Cell::EMPTY);
        g.set(Point::at(1, 2), Cell::HOUSE);
        g.set(Point::at(5, 5), Cell::HOUSE);
        assert_eq!(g.to_rows(), vec![vec![0, 0, 0], vec![0, 0, 1]]);
        assert_eq!(g.count_fn(|p, c| c.is_empty() && p.y == 0), 3);
    }
}

//! Grids built from text.
//!
//! One character per cell, one line per row:
//!
//! | rune | cell |
//! |---|---|
//! | `.` or `0` | [`Cell::EMPTY`] |
//! | `H` or `1` | [`Cell::HOUSE`] |
//! | `#` | [`Cell::OBSTACLE`] |
//! | `2`..=`9` | `Cell(digit)` (obstacle) |
//!
//! Leading and trailing whitespace is trimmed from each line, so layouts can
//! be indented inside source code. Blank lines are skipped.

use crate::geom::Point;
use crate::grid::{Cell, Grid, GridError};

/// Map a layout rune to its cell marker.
pub fn rune_cell(ch: char) -> Option<Cell> {
    match ch {
        '.' => Some(Cell::EMPTY),
        'H' => Some(Cell::HOUSE),
        '#' => Some(Cell::OBSTACLE),
        _ => ch.to_digit(10).map(|d| Cell(d as i32)),
    }
}

/// Map a cell marker back to its canonical layout rune.
pub fn cell_rune(c: Cell) -> char {
    match c.0 {
        0 => '.',
        1 => 'H',
        2 => '#',
        v @ 3..=9 => char::from_digit(v as u32, 10).unwrap_or('#'),
        _ => '#',
    }
}

/// Parse a text layout into a [`Grid`].
///
/// Blank lines are skipped; every other line must have the same width.
/// [`GridError::InvalidRune`] positions count only the kept rows.
pub fn parse_layout(s: &str) -> Result<Grid, GridError> {
    let content = s.trim();
    let mut rows: Vec<Vec<i32>> = Vec::new();
    let mut w: Option<usize> = None;

    let lines = content.lines().map(str::trim).filter(|l| !l.is_empty());
    for (y, line) in lines.enumerate() {
        let mut row = Vec::with_capacity(w.unwrap_or(line.len()));
        for (x, ch) in line.chars().enumerate() {
            let Some(cell) = rune_cell(ch) else {
                return Err(GridError::InvalidRune {
                    ch,
                    pos: Point::new(x as i32, y as i32),
                });
            };
            row.push(cell.0);
        }
        match w {
            Some(w) if w != row.len() => {
                return Err(GridError::InconsistentSize(content.to_string()));
            }
            Some(_) => {}
            None => w = Some(row.len()),
        }
        rows.push(row);
    }
    Grid::from_rows(&rows)
}

/// Render a grid back into layout text, one line per row.
pub fn render_layout(grid: &Grid) -> String {
    let mut out = String::with_capacity(grid.cells().len() + grid.height().max(0) as usize);
    for (p, c) in grid.iter() {
        if p.x == 0 && p.y > 0 {
            out.push('\n');
        }
        out.push(cell_rune(c));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOWN: &str = "
        H...H
        .....
        ..H..
    ";

    #[test]
    fn parse_and_size() {
        let g = parse_layout(TOWN).unwrap();
        assert_eq!(g.size(), Point::new(5, 3));
        assert_eq!(g.count(Cell::HOUSE), 3);
        assert_eq!(g.at(Point::at(2, 2)), Some(Cell::HOUSE));
    }

    #[test]
    fn digits_and_symbols_agree() {
        let a = parse_layout("1#0\n0.H").unwrap();
        let b = Grid::from_rows(&[vec![1, 2, 0], vec![0, 0, 1]]).unwrap();
        assert_eq!(a, b);
        assert_eq!(parse_layout("7").unwrap().at(Point::ZERO), Some(Cell(7)));
    }

    #[test]
    fn render_uses_canonical_runes() {
        let g = parse_layout("10\n2H").unwrap();
        assert_eq!(render_layout(&g), "H.\n#H");
    }

    #[test]
    fn invalid_rune_error() {
        let err = parse_layout("H.\n.x").unwrap_err();
        assert_eq!(
            err,
            GridError::InvalidRune {
                ch: 'x',
                pos: Point::new(1, 1)
            }
        );
    }

    #[test]
    fn inconsistent_size_error() {
        assert!(matches!(
            parse_layout("H..\n.."),
            Err(GridError::InconsistentSize(_))
        ));
    }

    #[test]
    fn blank_lines_are_skipped() {
        let g = parse_layout("H.\n\n   \n..").unwrap();
        assert_eq!(g.size(), Point::new(2, 2));
        assert_eq!(g, parse_layout("H.\n..").unwrap());
        let err = parse_layout("H.\n\n.x").unwrap_err();
        assert!(matches!(err, GridError::InvalidRune { pos, .. } if pos == Point::new(1, 1)));
    }

    #[test]
    fn blank_layout_is_empty_grid() {
        assert!(parse_layout("   ").unwrap().is_empty());
    }
}

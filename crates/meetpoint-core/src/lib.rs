//! **meetpoint-core**: grid primitives for meeting-point search.
//!
//! This crate provides the foundational types shared by the search and
//! solver crates: geometry primitives, integer cell markers, a rectangular
//! grid, and a small text layout format for writing grids by hand.

pub mod geom;
pub mod grid;
pub mod layout;

pub use geom::{Point, Range};
pub use grid::{Cell, Grid, GridError};
pub use layout::{parse_layout, render_layout};

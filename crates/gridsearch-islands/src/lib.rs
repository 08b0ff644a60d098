//! **gridsearch-islands** — island counting on land/water grids.
//!
//! A [`Grid`] is a rectangular raster of [`Tile`]s; [`count_islands`]
//! counts its maximal 4-connected land components using either of two
//! traversal [`Strategy`] variants (depth-first with an explicit stack, or
//! breadth-first with a FIFO queue). The two strategies always agree on
//! the count for any valid grid.
//!
//! ```
//! use gridsearch_islands::{count_islands, Grid, Strategy};
//!
//! let grid = Grid::parse("1100\n1100\n0010\n0011").unwrap();
//! assert_eq!(count_islands(&grid, Strategy::DepthFirst), 3);
//! assert_eq!(count_islands(&grid, Strategy::BreadthFirst), 3);
//! ```

pub mod count;
pub mod grid;

pub use count::{count_islands, Strategy};
pub use grid::{Grid, GridError, Tile};

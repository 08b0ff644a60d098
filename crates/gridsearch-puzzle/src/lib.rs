//! **gridsearch-puzzle** — 8-puzzle solving via informed best-first search.
//!
//! A [`Board`] is a 3×3 sliding-tile configuration; [`Solver::solve`] finds
//! a minimum-length sequence of blank [`Move`]s from a start board to
//! [`Board::GOAL`] using A* with a pluggable [`Heuristic`]. The provided
//! [`ManhattanDistance`] heuristic is admissible and consistent, so the
//! first time the goal is popped from the frontier its path is optimal.
//!
//! ```
//! use gridsearch_puzzle::{Board, ManhattanDistance, Solver};
//!
//! let start = Board::new([1, 2, 3, 4, 0, 6, 7, 5, 8]).unwrap();
//! let mut solver = Solver::new();
//! let moves = solver.solve(start, &ManhattanDistance).unwrap();
//! assert_eq!(moves.len(), 2);
//! ```

pub mod board;
pub mod solver;

pub use board::{Board, BoardError, Move};
pub use solver::{Heuristic, ManhattanDistance, Solver};

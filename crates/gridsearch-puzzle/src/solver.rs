//! Best-first search over board configurations.

use std::collections::{BinaryHeap, HashMap};

use gridsearch_core::manhattan;

use crate::board::{Board, Move};

/// Heuristic estimate of the number of moves remaining to reach
/// [`Board::GOAL`].
///
/// Estimates must never overestimate the true remaining move count
/// (admissible); the solver then returns a minimum-length path the first
/// time it pops the goal.
pub trait Heuristic {
    /// Estimated moves from `b` to the goal.
    fn estimate(&self, b: &Board) -> i32;
}

/// Sum over all non-blank tiles of the L1 distance from the tile's current
/// position to its goal position.
///
/// Each unit of Manhattan distance costs at least one move, and a single
/// move changes the sum by at most one, so the heuristic is both
/// admissible and consistent.
pub struct ManhattanDistance;

impl Heuristic for ManhattanDistance {
    fn estimate(&self, b: &Board) -> i32 {
        let mut distance = 0;
        for (i, &v) in b.tiles().iter().enumerate() {
            if v == 0 {
                continue;
            }
            // Tile v rests at index v - 1 in the goal configuration.
            let goal = Board::point(v as usize - 1);
            distance += manhattan(Board::point(i), goal);
        }
        distance
    }
}

// ---------------------------------------------------------------------------
// Internal search bookkeeping
// ---------------------------------------------------------------------------

/// Per-board search record.
struct NodeRec {
    g: i32,
    parent: Option<(Board, Move)>,
    open: bool,
}

/// Frontier entry, ordered by `f` for use in `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq)]
struct OpenNode {
    f: i32,
    board: Board,
}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first; break
        // ties on board order for a deterministic pop sequence.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.board.tiles().cmp(self.board.tiles()))
    }
}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// Solver
// ---------------------------------------------------------------------------

/// Best-first search coordinator.
///
/// Owns the frontier heap and the per-board node map so that repeated
/// queries reuse their capacity; both are cleared at the start of every
/// [`solve`](Self::solve) call.
pub struct Solver {
    open: BinaryHeap<OpenNode>,
    nodes: HashMap<Board, NodeRec>,
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Create a new solver.
    pub fn new() -> Self {
        Self {
            open: BinaryHeap::new(),
            nodes: HashMap::new(),
        }
    }

    /// Find a minimum-length move sequence from `start` to [`Board::GOAL`].
    ///
    /// Returns the blank's moves in order, or `None` when the frontier is
    /// exhausted without reaching the goal (the board is unsolvable). The
    /// step count is the returned vector's length. Ties between equal-`f`
    /// frontier entries are broken arbitrarily but deterministically, so
    /// only path length is guaranteed, not a specific move sequence.
    pub fn solve<H: Heuristic>(&mut self, start: Board, heuristic: &H) -> Option<Vec<Move>> {
        if start.is_goal() {
            return Some(Vec::new());
        }

        self.open.clear();
        self.nodes.clear();

        self.nodes.insert(
            start,
            NodeRec {
                g: 0,
                parent: None,
                open: true,
            },
        );
        self.open.push(OpenNode {
            f: heuristic.estimate(&start),
            board: start,
        });

        let mut expanded: u64 = 0;

        let found = 'search: loop {
            let Some(current) = self.open.pop() else {
                break 'search None;
            };
            let board = current.board;

            // Skip stale frontier entries: the board was already expanded
            // via a cheaper duplicate.
            let Some(rec) = self.nodes.get_mut(&board) else {
                continue;
            };
            if !rec.open {
                continue;
            }

            if board.is_goal() {
                break 'search Some(board);
            }

            rec.open = false;
            let current_g = rec.g;
            expanded += 1;

            for mv in Move::ALL {
                let Some(next) = board.apply(mv) else {
                    continue;
                };
                let tentative_g = current_g + 1;

                match self.nodes.get_mut(&next) {
                    Some(n) => {
                        if tentative_g >= n.g {
                            continue;
                        }
                        n.g = tentative_g;
                        n.parent = Some((board, mv));
                        n.open = true;
                    }
                    None => {
                        self.nodes.insert(
                            next,
                            NodeRec {
                                g: tentative_g,
                                parent: Some((board, mv)),
                                open: true,
                            },
                        );
                    }
                }

                self.open.push(OpenNode {
                    f: tentative_g + heuristic.estimate(&next),
                    board: next,
                });
            }
        };

        log::debug!("search finished after expanding {expanded} boards");

        let goal = found?;

        // Reconstruct the move sequence by walking parent links.
        let mut moves = Vec::new();
        let mut cur = goal;
        while let Some((prev, mv)) = self.nodes[&cur].parent {
            moves.push(mv);
            cur = prev;
        }
        moves.reverse();
        Some(moves)
    }
}

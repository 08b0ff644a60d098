//! Island counting via flood fill.
//!
//! An island is a maximal set of land tiles connected through shared edges
//! (no diagonals). Counting scans the grid in row-major order and flood
//! fills from every unvisited land tile; both traversal strategies share
//! the same validity predicate and always agree on the count.

use std::collections::VecDeque;

use crate::grid::Grid;

/// Traversal strategy used to flood fill each island.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Explicit-stack depth-first traversal. Iterative, so stack depth
    /// never scales with island size.
    DepthFirst,
    /// FIFO-queue breadth-first traversal, marking tiles visited at
    /// enqueue time so no tile is enqueued twice.
    BreadthFirst,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Strategy::DepthFirst => "depth-first",
            Strategy::BreadthFirst => "breadth-first",
        })
    }
}

/// Count the maximal 4-connected land components of `grid`.
pub fn count_islands(grid: &Grid, strategy: Strategy) -> usize {
    let mut visited = vec![false; grid.bounds().len()];
    let mut count = 0;

    for start in 0..visited.len() {
        if visited[start] || !grid.is_land(grid.point(start)) {
            continue;
        }
        match strategy {
            Strategy::DepthFirst => flood_dfs(grid, start, &mut visited),
            Strategy::BreadthFirst => flood_bfs(grid, start, &mut visited),
        }
        count += 1;
    }

    log::debug!(
        "{strategy} scan of {}x{} grid found {count} islands",
        grid.width(),
        grid.height(),
    );
    count
}

/// Depth-first flood fill from `start`, marking every reachable land tile.
fn flood_dfs(grid: &Grid, start: usize, visited: &mut [bool]) {
    let mut stack = vec![start];
    visited[start] = true;

    while let Some(ci) = stack.pop() {
        let cp = grid.point(ci);
        for np in cp.neighbors_4() {
            let Some(ni) = grid.idx(np) else {
                continue;
            };
            if visited[ni] || !grid.is_land(np) {
                continue;
            }
            visited[ni] = true;
            stack.push(ni);
        }
    }
}

/// Breadth-first flood fill from `start`, marking every reachable land
/// tile. Tiles are marked when enqueued, not when dequeued.
fn flood_bfs(grid: &Grid, start: usize, visited: &mut [bool]) {
    let mut queue: VecDeque<usize> = VecDeque::new();
    queue.push_back(start);
    visited[start] = true;

    while let Some(ci) = queue.pop_front() {
        let cp = grid.point(ci);
        for np in cp.neighbors_4() {
            let Some(ni) = grid.idx(np) else {
                continue;
            };
            if visited[ni] || !grid.is_land(np) {
                continue;
            }
            visited[ni] = true;
            queue.push_back(ni);
        }
    }
}

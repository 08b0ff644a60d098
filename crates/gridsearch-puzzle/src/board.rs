//! The 8-puzzle board and its moves.
//!
//! A [`Board`] stores a 3×3 sliding-tile configuration as nine tile values
//! in row-major order, with 0 standing for the blank. Boards are immutable
//! values; [`Board::apply`] derives a new board rather than mutating.

use std::fmt;

use gridsearch_core::{Point, Range};
use rand::Rng;
use rand::RngExt;

/// Number of cells on the board.
const CELLS: usize = 9;

/// The board rectangle, used for move legality checks.
const BOUNDS: Range = Range {
    min: Point::ZERO,
    max: Point::new(3, 3),
};

// ---------------------------------------------------------------------------
// Move
// ---------------------------------------------------------------------------

/// A direction the blank slides, swapping with the neighbouring tile.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// All four moves, in expansion order.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// The blank's displacement for this move.
    #[inline]
    pub fn delta(self) -> Point {
        match self {
            Move::Up => Point::new(0, -1),
            Move::Down => Point::new(0, 1),
            Move::Left => Point::new(-1, 0),
            Move::Right => Point::new(1, 0),
        }
    }

    /// The move that undoes this one.
    #[inline]
    pub fn opposite(self) -> Move {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Move::Up => "Up",
            Move::Down => "Down",
            Move::Left => "Left",
            Move::Right => "Right",
        };
        f.write_str(s)
    }
}

// ---------------------------------------------------------------------------
// Board
// ---------------------------------------------------------------------------

/// A 3×3 sliding-tile configuration.
///
/// Tiles are stored row-major; each value 0–8 occurs exactly once, with 0
/// denoting the blank. The invariant is enforced at construction, so every
/// `Board` value in circulation is a valid permutation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board([u8; CELLS]);

impl Board {
    /// The solved configuration.
    pub const GOAL: Board = Board([1, 2, 3, 4, 5, 6, 7, 8, 0]);

    /// Create a board from row-major tile values.
    ///
    /// Returns [`BoardError::NotAPermutation`] unless every value 0–8
    /// occurs exactly once.
    pub fn new(tiles: [u8; CELLS]) -> Result<Self, BoardError> {
        let mut seen = [false; CELLS];
        for &v in &tiles {
            if v as usize >= CELLS || seen[v as usize] {
                return Err(BoardError::NotAPermutation(tiles));
            }
            seen[v as usize] = true;
        }
        Ok(Self(tiles))
    }

    /// The tile values in row-major order.
    #[inline]
    pub fn tiles(&self) -> &[u8; CELLS] {
        &self.0
    }

    /// The tile at `p`, or `None` if `p` is off the board.
    pub fn tile_at(&self, p: Point) -> Option<u8> {
        if !BOUNDS.contains(p) {
            return None;
        }
        Some(self.0[Self::index(p)])
    }

    /// Position of the blank.
    pub fn blank(&self) -> Point {
        // Constructor guarantees exactly one 0.
        let i = self.0.iter().position(|&v| v == 0).unwrap();
        Self::point(i)
    }

    /// Whether this board is the solved configuration.
    #[inline]
    pub fn is_goal(&self) -> bool {
        *self == Self::GOAL
    }

    /// Slide the blank in the given direction, returning the new board.
    ///
    /// Returns `None` when the blank would leave the board. Legality is
    /// checked on the blank's row/column position, so moves never wrap
    /// across row edges.
    pub fn apply(&self, mv: Move) -> Option<Board> {
        let blank = self.blank();
        let target = blank + mv.delta();
        if !BOUNDS.contains(target) {
            return None;
        }
        let mut tiles = self.0;
        tiles.swap(Self::index(blank), Self::index(target));
        Some(Self(tiles))
    }

    /// Permutation-parity solvability check.
    ///
    /// For a width-3 board a configuration can reach [`Board::GOAL`] iff
    /// the non-blank tiles have an even number of inversions. This is a
    /// fail-fast helper for callers; [`Solver::solve`] does not consult it
    /// and instead reports unsolvable boards by exhausting the frontier.
    ///
    /// [`Solver::solve`]: crate::Solver::solve
    pub fn is_solvable(&self) -> bool {
        let mut inversions = 0;
        for i in 0..CELLS {
            if self.0[i] == 0 {
                continue;
            }
            for j in (i + 1)..CELLS {
                if self.0[j] != 0 && self.0[j] < self.0[i] {
                    inversions += 1;
                }
            }
        }
        inversions % 2 == 0
    }

    /// Derive a board by applying `steps` random legal moves.
    ///
    /// Immediate backtracking is avoided so the walk does not trivially
    /// undo itself, though the result may still be solvable in fewer than
    /// `steps` moves.
    pub fn scrambled(self, rng: &mut impl Rng, steps: usize) -> Board {
        let mut board = self;
        let mut last: Option<Move> = None;
        for _ in 0..steps {
            let mv = Move::ALL[rng.random_range(0..4usize)];
            if last == Some(mv.opposite()) {
                continue;
            }
            if let Some(next) = board.apply(mv) {
                board = next;
                last = Some(mv);
            }
        }
        board
    }

    /// Row-major index of a board position.
    #[inline]
    pub(crate) fn index(p: Point) -> usize {
        (p.y * BOUNDS.width() + p.x) as usize
    }

    /// Board position of a row-major index.
    #[inline]
    pub(crate) fn point(i: usize) -> Point {
        let w = BOUNDS.width() as usize;
        Point::new((i % w) as i32, (i / w) as i32)
    }
}

impl TryFrom<&[u8]> for Board {
    type Error = BoardError;

    fn try_from(tiles: &[u8]) -> Result<Self, BoardError> {
        let arr: [u8; CELLS] = tiles
            .try_into()
            .map_err(|_| BoardError::WrongLength(tiles.len()))?;
        Self::new(arr)
    }
}

impl fmt::Display for Board {
    /// Render as three rows, the blank shown as `.`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for p in BOUNDS.iter() {
            if p.x > 0 {
                f.write_str(" ")?;
            }
            match self.0[Self::index(p)] {
                0 => f.write_str(".")?,
                v => write!(f, "{v}")?,
            }
            if p.x == BOUNDS.max.x - 1 && p.y < BOUNDS.max.y - 1 {
                f.write_str("\n")?;
            }
        }
        Ok(())
    }
}

/// Errors that can occur when constructing a board.
#[derive(Debug, Clone)]
pub enum BoardError {
    /// The input slice does not hold exactly nine tiles.
    WrongLength(usize),
    /// The nine tiles are not a permutation of 0–8.
    NotAPermutation([u8; CELLS]),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength(n) => {
                write!(f, "board needs exactly {CELLS} tiles, got {n}")
            }
            Self::NotAPermutation(tiles) => {
                write!(f, "board tiles {tiles:?} are not a permutation of 0-8")
            }
        }
    }
}

impl std::error::Error for BoardError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goal_board_is_goal() {
        assert!(Board::GOAL.is_goal());
        assert_eq!(Board::GOAL.blank(), Point::new(2, 2));
    }

    #[test]
    fn new_rejects_duplicates() {
        assert!(matches!(
            Board::new([1, 1, 3, 4, 5, 6, 7, 8, 0]),
            Err(BoardError::NotAPermutation(_))
        ));
    }

    #[test]
    fn new_rejects_out_of_range_values() {
        assert!(matches!(
            Board::new([1, 2, 3, 4, 5, 6, 7, 8, 9]),
            Err(BoardError::NotAPermutation(_))
        ));
    }

    #[test]
    fn try_from_rejects_wrong_length() {
        let short = [1u8, 2, 3];
        assert!(matches!(
            Board::try_from(&short[..]),
            Err(BoardError::WrongLength(3))
        ));
        let ok: Board = Board::try_from(&Board::GOAL.tiles()[..]).unwrap();
        assert!(ok.is_goal());
    }

    #[test]
    fn moves_at_bottom_right_corner() {
        // Blank at (2, 2): sliding further down or right leaves the board.
        let b = Board::GOAL;
        assert!(b.apply(Move::Down).is_none());
        assert!(b.apply(Move::Right).is_none());
        assert!(b.apply(Move::Up).is_some());
        assert!(b.apply(Move::Left).is_some());
    }

    #[test]
    fn moves_at_top_left_corner() {
        let b = Board::new([0, 1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        assert!(b.apply(Move::Up).is_none());
        assert!(b.apply(Move::Left).is_none());
        assert!(b.apply(Move::Down).is_some());
        assert!(b.apply(Move::Right).is_some());
    }

    #[test]
    fn moves_never_wrap_rows() {
        // Blank at the end of the middle row; Right must not wrap to the
        // start of the bottom row.
        let b = Board::new([1, 2, 3, 4, 5, 0, 6, 7, 8]).unwrap();
        assert_eq!(b.blank(), Point::new(2, 1));
        assert!(b.apply(Move::Right).is_none());
    }

    #[test]
    fn apply_then_opposite_round_trips() {
        let b = Board::new([1, 2, 3, 4, 0, 6, 7, 5, 8]).unwrap();
        for mv in Move::ALL {
            if let Some(next) = b.apply(mv) {
                assert_eq!(next.apply(mv.opposite()), Some(b));
            }
        }
    }

    #[test]
    fn apply_swaps_blank_with_neighbor() {
        let b = Board::new([1, 2, 3, 4, 0, 6, 7, 5, 8]).unwrap();
        let next = b.apply(Move::Down).unwrap();
        assert_eq!(next.blank(), Point::new(1, 2));
        assert_eq!(next.tile_at(Point::new(1, 1)), Some(5));
    }

    #[test]
    fn solvability_parity() {
        assert!(Board::GOAL.is_solvable());
        assert!(Board::new([1, 2, 3, 4, 0, 6, 7, 5, 8]).unwrap().is_solvable());
        // One transposition flips parity.
        assert!(!Board::new([2, 1, 3, 4, 5, 6, 7, 8, 0]).unwrap().is_solvable());
    }

    #[test]
    fn scrambled_preserves_solvability() {
        let mut rng = rand::rng();
        let b = Board::GOAL.scrambled(&mut rng, 50);
        assert!(Board::new(*b.tiles()).is_ok());
        assert!(b.is_solvable());
    }

    #[test]
    fn display_renders_blank_as_dot() {
        let b = Board::new([1, 2, 3, 4, 0, 6, 7, 5, 8]).unwrap();
        assert_eq!(b.to_string(), "1 2 3\n4 . 6\n7 5 8");
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn board_round_trip() {
        let b = Board::new([1, 2, 3, 4, 0, 6, 7, 5, 8]).unwrap();
        let json = serde_json::to_string(&b).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(b, back);
    }

    #[test]
    fn move_round_trip() {
        let json = serde_json::to_string(&Move::Left).unwrap();
        let back: Move = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Move::Left);
    }
}

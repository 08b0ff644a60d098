//! A rectangular land/water raster.
//!
//! [`Grid`] owns a flat tile buffer addressed by [`Point`]; count queries
//! only read it. [`Grid::parse`] builds one from an ASCII layout string.

use std::fmt;

use gridsearch_core::{Point, Range};

/// A single map cell: water or land.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    #[default]
    Water,
    Land,
}

impl Tile {
    /// Whether this tile is land.
    #[inline]
    pub fn is_land(self) -> bool {
        matches!(self, Tile::Land)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Tile::Water => ".",
            Tile::Land => "#",
        })
    }
}

/// A 2D grid of [`Tile`] values.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    tiles: Vec<Tile>,
    bounds: Range,
}

impl Grid {
    /// Create a new all-water grid. Negative dimensions are clamped to 0.
    pub fn new(width: i32, height: i32) -> Self {
        let w = width.max(0);
        let h = height.max(0);
        Self {
            tiles: vec![Tile::default(); (w * h) as usize],
            bounds: Range::new(0, 0, w, h),
        }
    }

    /// Parse an ASCII layout: `'1'` or `'#'` is land, `'0'` or `'.'` is
    /// water, rows separated by newlines.
    ///
    /// All rows must have the same width; ragged input is rejected with
    /// [`GridError::InconsistentSize`] and any other character with
    /// [`GridError::InvalidRune`]. Surrounding whitespace is trimmed, and
    /// empty input parses to an empty grid.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Self::new(0, 0));
        }

        let mut tiles = Vec::with_capacity(s.len());
        let mut width: i32 = -1;
        let mut height: i32 = 0;

        for (y, line) in s.lines().enumerate() {
            let mut x: i32 = 0;
            for ch in line.chars() {
                let tile = match ch {
                    '1' | '#' => Tile::Land,
                    '0' | '.' => Tile::Water,
                    _ => {
                        return Err(GridError::InvalidRune {
                            ch,
                            pos: Point::new(x, y as i32),
                        });
                    }
                };
                tiles.push(tile);
                x += 1;
            }
            if width >= 0 && x != width {
                return Err(GridError::InconsistentSize(s.to_string()));
            }
            width = x;
            height += 1;
        }

        Ok(Self {
            tiles,
            bounds: Range::new(0, 0, width.max(0), height),
        })
    }

    /// The bounding range of the grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Size as a Point (width = x, height = y).
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    /// Width of the grid.
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Height of the grid.
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether the grid contains the given point.
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// The tile at a point, or `None` if out of bounds.
    pub fn at(&self, p: Point) -> Option<Tile> {
        let i = self.idx(p)?;
        Some(self.tiles[i])
    }

    /// Set the tile at a point. Does nothing if out of bounds.
    pub fn set(&mut self, p: Point, tile: Tile) {
        if let Some(i) = self.idx(p) {
            self.tiles[i] = tile;
        }
    }

    /// Fill the entire grid with the given tile.
    pub fn fill(&mut self, tile: Tile) {
        self.tiles.fill(tile);
    }

    /// The traversability predicate: whether `p` is an in-bounds land cell.
    #[inline]
    pub fn is_land(&self, p: Point) -> bool {
        self.at(p).is_some_and(Tile::is_land)
    }

    /// Row-major iterator over all positions and their tiles.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Tile)> + '_ {
        self.tiles.iter().enumerate().map(|(i, &t)| (self.point(i), t))
    }

    /// Convert a `Point` to a flat index. Returns `None` if out of bounds.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some((p.y * self.bounds.width() + p.x) as usize)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, i: usize) -> Point {
        let w = self.bounds.width() as usize;
        Point::new((i % w) as i32, (i / w) as i32)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let w = self.width() as usize;
        for (i, t) in self.tiles.iter().enumerate() {
            if i > 0 && i % w == 0 {
                f.write_str("\n")?;
            }
            write!(f, "{t}")?;
        }
        Ok(())
    }
}

/// Errors that can occur when parsing a grid layout.
#[derive(Debug, Clone)]
pub enum GridError {
    /// Lines have inconsistent widths.
    InconsistentSize(String),
    /// A character not in the allowed set was found.
    InvalidRune { ch: char, pos: Point },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentSize(s) => {
                write!(f, "grid layout has inconsistent row widths:\n{s}")
            }
            Self::InvalidRune { ch, pos } => {
                write!(
                    f,
                    "grid layout contains invalid rune \u{201c}{ch}\u{201d} at ({}, {})",
                    pos.x, pos.y
                )
            }
        }
    }
}

impl std::error::Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_and_size() {
        let g = Grid::new(4, 3);
        assert_eq!(g.size(), Point::new(4, 3));
        assert_eq!(g.at(Point::new(0, 0)), Some(Tile::Water));
        assert_eq!(g.at(Point::new(4, 0)), None);
    }

    #[test]
    fn set_and_at() {
        let mut g = Grid::new(4, 4);
        let p = Point::new(2, 3);
        g.set(p, Tile::Land);
        assert_eq!(g.at(p), Some(Tile::Land));
        assert!(g.is_land(p));
        assert!(!g.is_land(Point::new(0, 0)));
        assert!(!g.is_land(Point::new(10, 10)));
    }

    #[test]
    fn parse_layout() {
        let g = Grid::parse("110\n011").unwrap();
        assert_eq!(g.size(), Point::new(3, 2));
        assert!(g.is_land(Point::new(0, 0)));
        assert!(!g.is_land(Point::new(2, 0)));
        assert!(g.is_land(Point::new(2, 1)));
    }

    #[test]
    fn parse_accepts_glyph_layout() {
        let g = Grid::parse("#.\n.#").unwrap();
        assert!(g.is_land(Point::new(0, 0)));
        assert!(!g.is_land(Point::new(1, 0)));
    }

    #[test]
    fn parse_empty_is_empty_grid() {
        let g = Grid::parse("").unwrap();
        assert_eq!(g.size(), Point::ZERO);
        assert_eq!(g.iter().count(), 0);
    }

    #[test]
    fn parse_rejects_ragged_rows() {
        assert!(matches!(
            Grid::parse("110\n01"),
            Err(GridError::InconsistentSize(_))
        ));
    }

    #[test]
    fn parse_rejects_invalid_rune() {
        match Grid::parse("10\n1x") {
            Err(GridError::InvalidRune { ch, pos }) => {
                assert_eq!(ch, 'x');
                assert_eq!(pos, Point::new(1, 1));
            }
            other => panic!("expected InvalidRune, got {other:?}"),
        }
    }

    #[test]
    fn display_round_trips_through_parse() {
        let g = Grid::parse("10\n01").unwrap();
        assert_eq!(g.to_string(), "#.\n.#");
        assert_eq!(Grid::parse(&g.to_string()).unwrap(), g);
    }

    #[test]
    fn fill_and_iter() {
        let mut g = Grid::new(3, 2);
        g.fill(Tile::Land);
        assert_eq!(g.iter().filter(|(_, t)| t.is_land()).count(), 6);
    }
}

//! Board coordinates and directions.
//!
//! A `Coord` is a (row, col) pair. Rows are labelled `A`-`E` and columns
//! `0`-`4`, so the Defender's AI starts on `A0` and the Attacker's on `E4`.
//!
//! Coordinates may hold values outside the board: they arrive from
//! external actors and are checked against the grid before use.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::str::FromStr;

use super::error::ParseCoordError;

/// Side length of the square board.
pub const BOARD_DIM: i8 = 5;

const ROW_LABELS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const COL_LABELS: &str = "0123456789abcdef";
const SEPARATORS: &[char] = &[' ', ',', '.', ':', ';', '-', '_'];

/// Orthogonal movement direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Towards row A.
    Up,
    /// Towards row E.
    Down,
    /// Towards column 0.
    Left,
    /// Towards column 4.
    Right,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Left,
        Direction::Down,
        Direction::Right,
    ];

    /// (row, col) offset of one step in this direction.
    #[must_use]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// A cell coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    /// Row index (0 = `A`).
    pub row: i8,
    /// Column index.
    pub col: i8,
}

impl Coord {
    /// Create a coordinate.
    #[must_use]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Check if the coordinate lies on the 5×5 board.
    #[must_use]
    pub const fn is_in_bounds(self) -> bool {
        self.row >= 0 && self.row < BOARD_DIM && self.col >= 0 && self.col < BOARD_DIM
    }

    /// Flat cell index. Panics if the coordinate is off the board.
    #[must_use]
    pub fn index(self) -> usize {
        assert!(self.is_in_bounds(), "Coordinate {self:?} is off the board");
        (self.row * BOARD_DIM + self.col) as usize
    }

    /// The neighbouring coordinate one step in `dir`. May be off the board.
    #[must_use]
    pub const fn step(self, dir: Direction) -> Self {
        let (dr, dc) = dir.delta();
        Self::new(self.row + dr, self.col + dc)
    }

    /// Direction from `self` to `other` if they are orthogonally adjacent.
    #[must_use]
    pub fn direction_to(self, other: Coord) -> Option<Direction> {
        Direction::ALL.into_iter().find(|&d| self.step(d) == other)
    }

    /// Orthogonal (4-directional) adjacency. A cell is not adjacent to itself.
    #[must_use]
    pub fn is_adjacent(self, other: Coord) -> bool {
        self.direction_to(other).is_some()
    }

    /// The up-to-4 orthogonal neighbours that lie on the board.
    pub fn iter_adjacent(self) -> impl Iterator<Item = Coord> {
        Direction::ALL
            .into_iter()
            .map(move |d| self.step(d))
            .filter(|c| c.is_in_bounds())
    }

    /// The up-to-8 surrounding cells (diagonals included), clipped to the board.
    #[must_use]
    pub fn neighbors_8(self) -> SmallVec<[Coord; 8]> {
        let mut out = SmallVec::new();
        for dr in -1..=1 {
            for dc in -1..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let c = Coord::new(self.row + dr, self.col + dc);
                if c.is_in_bounds() {
                    out.push(c);
                }
            }
        }
        out
    }

    /// Every coordinate on the board, row-major.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_DIM).flat_map(|row| (0..BOARD_DIM).map(move |col| Coord::new(row, col)))
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let row = usize::try_from(self.row)
            .ok()
            .and_then(|r| ROW_LABELS.chars().nth(r))
            .unwrap_or('?');
        let col = usize::try_from(self.col)
            .ok()
            .and_then(|c| COL_LABELS.chars().nth(c))
            .unwrap_or('?');
        write!(f, "{row}{col}")
    }
}

fn strip_separators(s: &str) -> String {
    s.trim().chars().filter(|c| !SEPARATORS.contains(c)).collect()
}

fn parse_label(row: char, col: char) -> Result<Coord, ParseCoordError> {
    let r = ROW_LABELS
        .find(row.to_ascii_uppercase())
        .ok_or(ParseCoordError::BadRow(row))?;
    let c = COL_LABELS
        .find(col.to_ascii_lowercase())
        .ok_or(ParseCoordError::BadColumn(col))?;
    // Both label tables are shorter than i8::MAX.
    Ok(Coord::new(r as i8, c as i8))
}

impl FromStr for Coord {
    type Err = ParseCoordError;

    /// Parse `"D2"`, `"d 2"`, `"D-2"`, ...
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = strip_separators(s).chars().collect();
        match chars.as_slice() {
            [row, col] => parse_label(*row, *col),
            _ => Err(ParseCoordError::BadLength(chars.len())),
        }
    }
}

/// A source/destination pair as typed by a player, e.g. `"E3 D3"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CoordPair {
    /// Acting unit's cell.
    pub src: Coord,
    /// Target cell. Equal to `src` for self-destruct.
    pub dst: Coord,
}

impl CoordPair {
    /// Create a pair.
    #[must_use]
    pub const fn new(src: Coord, dst: Coord) -> Self {
        Self { src, dst }
    }
}

impl std::fmt::Display for CoordPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.src, self.dst)
    }
}

impl FromStr for CoordPair {
    type Err = ParseCoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = strip_separators(s).chars().collect();
        match chars.as_slice() {
            [r0, c0, r1, c1] => Ok(Self::new(parse_label(*r0, *c0)?, parse_label(*r1, *c1)?)),
            _ => Err(ParseCoordError::BadLength(chars.len())),
        }
    }
}

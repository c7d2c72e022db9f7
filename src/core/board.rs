//! Square game board.
//!
//! The board is an N×N grid stored row-major in an `im::Vector`. Boards are
//! never mutated: `place` returns a new board that shares structure with the
//! old one, so holding on to a previous board is O(1) and it never changes
//! underfoot.
//!
//! ## Text form
//!
//! ```
//! use mnk_game::core::{Board, Cell, Position};
//!
//! let board: Board = "X.O/.X./..O".parse().unwrap();
//! assert_eq!(board.size(), 3);
//! assert_eq!(board.get(Position::new(0, 2)), Some(Cell::O));
//! assert_eq!(board.to_string(), "X . O\n. X .\n. . O");
//! ```

use im::Vector;
use serde::Serialize;
use std::str::FromStr;

use super::config::saturate_board_size;
use super::mark::{Cell, Mark};
use super::position::Position;
use crate::error::ParseBoardError;

/// Immutable N×N grid of cells.
///
/// Serializes for display hosts; it is built only through `new`, `place`
/// and `FromStr`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Board {
    size: usize,
    cells: Vector<Cell>,
    /// Kept in step with `cells` so fullness is O(1).
    empty: usize,
}

impl Board {
    /// Create an empty board of dimension `size`, saturated at
    /// [`MAX_BOARD_SIZE`](crate::core::MAX_BOARD_SIZE).
    #[must_use]
    pub fn new(size: usize) -> Self {
        let size = saturate_board_size(size);
        let area = size * size;
        Self {
            size,
            cells: std::iter::repeat(Cell::Empty).take(area).collect(),
            empty: area,
        }
    }

    /// Board dimension N.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check if a position lies on the board.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    fn index(&self, pos: Position) -> Option<usize> {
        self.contains(pos).then(|| pos.row * self.size + pos.col)
    }

    /// Get the cell at a position, or `None` if off the board.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.index(pos).and_then(|i| self.cells.get(i).copied())
    }

    /// Check if the cell at `pos` holds `mark`. Off-board positions never do.
    #[must_use]
    pub fn has_mark(&self, pos: Position, mark: Mark) -> bool {
        self.get(pos) == Some(mark.to_cell())
    }

    /// Return a new board with `cell` written at `pos`.
    ///
    /// Returns `None` if `pos` is off the board. `self` is left untouched.
    #[must_use]
    pub fn place(&self, pos: Position, cell: impl Into<Cell>) -> Option<Self> {
        let index = self.index(pos)?;
        let cell = cell.into();
        let old = self.cells.get(index).copied().unwrap_or_default();
        let empty = self.empty + usize::from(cell.is_empty()) - usize::from(old.is_empty());
        Some(Self {
            size: self.size,
            cells: self.cells.update(index, cell),
            empty,
        })
    }

    /// Iterate over the cells of one row. Empty if `row` is off the board.
    pub fn row(&self, row: usize) -> impl Iterator<Item = Cell> + '_ {
        let (skip, take) = if row < self.size {
            (row * self.size, self.size)
        } else {
            (0, 0)
        };
        self.cells.iter().skip(skip).take(take).copied()
    }

    /// Iterate over (Position, Cell) pairs in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (Position::new(i / size, i % size), cell))
    }

    /// Check if every cell holds a mark.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.empty == 0
    }

    /// Number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.empty
    }

    /// Number of cells holding `mark`.
    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        let target = mark.to_cell();
        self.cells.iter().filter(|&&cell| cell == target).count()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.size {
            if row > 0 {
                writeln!(f)?;
            }
            for (col, cell) in self.row(row).enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{cell}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parse rows separated by `/` or newlines. Whitespace within a row is
    /// ignored, so `Display` output parses back.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<Vec<char>> = s
            .split(['/', '\n'])
            .map(|row| row.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();

        if rows.is_empty() {
            return Err(ParseBoardError::Empty);
        }

        let size = rows.len();
        let mut cells = Vector::new();
        let mut empty = 0;
        for (row, chars) in rows.iter().enumerate() {
            if chars.len() != size {
                return Err(ParseBoardError::NotSquare {
                    row,
                    len: chars.len(),
                    expected: size,
                });
            }
            for (col, &ch) in chars.iter().enumerate() {
                let cell = Cell::from_char(ch).ok_or(ParseBoardError::InvalidCell { ch, row, col })?;
                empty += usize::from(cell.is_empty());
                cells.push_back(cell);
            }
        }

        Ok(Self { size, cells, empty })
    }
}

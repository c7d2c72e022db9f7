//! Board coordinates and line directions.

use serde::{Deserialize, Serialize};

/// Zero-based board coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Move `steps` cells along `direction`.
    ///
    /// Returns `None` if either coordinate would go below zero. The upper
    /// bound depends on the board and is checked there.
    #[must_use]
    pub fn offset(self, direction: Direction, steps: isize) -> Option<Self> {
        let row = self.row.checked_add_signed(direction.dr.checked_mul(steps)?)?;
        let col = self.col.checked_add_signed(direction.dc.checked_mul(steps)?)?;
        Some(Self { row, col })
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A unit step along one of the four line axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Direction {
    pub dr: isize,
    pub dc: isize,
}

impl Direction {
    pub const HORIZONTAL: Direction = Direction { dr: 0, dc: 1 };
    pub const VERTICAL: Direction = Direction { dr: 1, dc: 0 };
    pub const DIAGONAL: Direction = Direction { dr: 1, dc: 1 };
    pub const ANTI_DIAGONAL: Direction = Direction { dr: 1, dc: -1 };

    /// The four axes a run can lie on. Each is walked both ways.
    pub const AXES: [Direction; 4] = [
        Self::HORIZONTAL,
        Self::VERTICAL,
        Self::DIAGONAL,
        Self::ANTI_DIAGONAL,
    ];

    /// The same axis walked the other way.
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self {
            dr: -self.dr,
            dc: -self.dc,
        }
    }
}

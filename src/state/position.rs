use std::fmt;

use serde::{Deserialize, Serialize};

/// Grid coordinates of a rendered cell, 0-based.
///
/// Selector (row gutter) cells carry [`Position::SELECTOR`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: isize,
    pub column: isize,
}

impl Position {
    pub const SELECTOR: Position = Position {
        row: -1,
        column: -1,
    };

    pub fn at(row: usize, column: usize) -> Self {
        Self {
            row: row as isize,
            column: column as isize,
        }
    }

    pub fn is_selector(&self) -> bool {
        *self == Self::SELECTOR
    }

    /// Row and column as matrix indices; `None` for the selector sentinel.
    pub fn indices(&self) -> Option<(usize, usize)> {
        let row = usize::try_from(self.row).ok()?;
        let column = usize::try_from(self.column).ok()?;
        Some((row, column))
    }

    pub fn dom_id(&self) -> String {
        format!("cell-{}-{}", self.row, self.column)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

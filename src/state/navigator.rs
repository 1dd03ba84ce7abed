use crate::state::keys::Direction;
use crate::state::position::Position;

/// Something in the grid body that can hold keyboard focus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FocusTarget {
    Cell { row: usize, column: usize },
    /// The row-selector checkbox in the gutter column.
    Selector { row: usize },
}

impl FocusTarget {
    pub fn row(&self) -> usize {
        match self {
            FocusTarget::Cell { row, .. } | FocusTarget::Selector { row } => *row,
        }
    }

    pub fn position(&self) -> Option<Position> {
        match self {
            FocusTarget::Cell { row, column } => Some(Position::at(*row, *column)),
            FocusTarget::Selector { .. } => None,
        }
    }

    pub fn dom_id(&self) -> String {
        match self {
            FocusTarget::Cell { row, column } => Position::at(*row, *column).dom_id(),
            FocusTarget::Selector { row } => format!("selector-{row}"),
        }
    }
}

/// Moves focus across a `rows` x `columns` matrix of data cells, with an
/// optional selector column on the left.
///
/// Movement never wraps: stepping off any edge yields `None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridNavigator {
    pub rows: usize,
    pub columns: usize,
    pub has_selector: bool,
}

impl GridNavigator {
    pub fn new(rows: usize, columns: usize, has_selector: bool) -> Self {
        Self {
            rows,
            columns,
            has_selector,
        }
    }

    pub fn contains(&self, target: FocusTarget) -> bool {
        match target {
            FocusTarget::Cell { row, column } => row < self.rows && column < self.columns,
            FocusTarget::Selector { row } => self.has_selector && row < self.rows,
        }
    }

    pub fn step(&self, from: FocusTarget, direction: Direction) -> Option<FocusTarget> {
        if !self.contains(from) {
            return None;
        }

        let next = match (from, direction) {
            (FocusTarget::Cell { row, column }, Direction::Right) => FocusTarget::Cell {
                row,
                column: column + 1,
            },
            (FocusTarget::Cell { row, column: 0 }, Direction::Left) => FocusTarget::Selector { row },
            (FocusTarget::Cell { row, column }, Direction::Left) => FocusTarget::Cell {
                row,
                column: column - 1,
            },
            (FocusTarget::Cell { row, column }, Direction::Down) => FocusTarget::Cell {
                row: row + 1,
                column,
            },
            (FocusTarget::Cell { row, column }, Direction::Up) => FocusTarget::Cell {
                row: row.checked_sub(1)?,
                column,
            },
            (FocusTarget::Selector { row }, Direction::Right) => FocusTarget::Cell { row, column: 0 },
            (FocusTarget::Selector { .. }, Direction::Left) => return None,
            (FocusTarget::Selector { row }, Direction::Down) => FocusTarget::Selector { row: row + 1 },
            (FocusTarget::Selector { row }, Direction::Up) => FocusTarget::Selector {
                row: row.checked_sub(1)?,
            },
        };

        self.contains(next).then_some(next)
    }

    /// Same column, next row. Used when a plugin cell confirms with Enter.
    pub fn next_row(&self, from: FocusTarget) -> Option<FocusTarget> {
        self.step(from, Direction::Down)
    }
}

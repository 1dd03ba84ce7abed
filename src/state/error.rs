use thiserror::Error;

use crate::state::events::MenuId;
use crate::state::position::Position;

/// Precondition failures raised by grid interactions.
///
/// Returning one of these aborts the interaction; the grid stays in the state
/// it was in before the handler ran.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("menu item did not carry a selection value")]
    MissingSelectionValue,
    #[error("column at index {0} has no original name")]
    MissingOriginalValue(usize),
    #[error("attempting to uninstall a non-existent plugin on {0}")]
    PluginNotInstalled(String),
    #[error("missing column name")]
    MissingColumnName,
    #[error("no menu registered as {0:?}")]
    UnknownMenu(MenuId),
    #[error("no cell at {0}")]
    UnknownCell(Position),
    #[error("no column at index {0}")]
    UnknownColumn(usize),
    #[error("no row at index {0}")]
    UnknownRow(usize),
}

use serde::Serialize;

use crate::state::data_model::{CellValue, Row};
use crate::state::plugin::{ColumnPlugin, InstalledPlugin};
use crate::state::position::Position;

/// Identifies the owner of a menu. Used as the handle the registry closes by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MenuId {
    Cell(Position),
    Column(usize),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ColumnData {
    Empty {},
    Action { action: String },
    Rename { name: String },
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ColumnEvent {
    pub name: String,
    pub data: ColumnData,
}

impl ColumnEvent {
    pub fn bare(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data: ColumnData::Empty {},
        }
    }

    pub fn action(name: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data: ColumnData::Action {
                action: action.into(),
            },
        }
    }

    pub fn rename(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            name: from.into(),
            data: ColumnData::Rename { name: to.into() },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RowEvent {
    pub index: usize,
    pub row: Row,
}

/// Notifications the grid sends to its host.
///
/// Every event reaches the host regardless of which unit raised it; nothing
/// between a cell and the host can swallow one.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum GridEvent {
    CellUpdated {
        position: Position,
        value: CellValue,
    },
    ColumnAdded(ColumnEvent),
    ColumnRemoved(ColumnEvent),
    ColumnUpdated(ColumnEvent),
    ColumnRenamed(ColumnEvent),
    ColumnHidden(ColumnEvent),
    ColumnPluginActivated {
        name: String,
        plugin: ColumnPlugin,
    },
    ColumnPluginDeactivated {
        name: String,
        plugin: InstalledPlugin,
    },
    RowSelected {
        index: usize,
        row: Row,
        selected: bool,
    },
    RowAdded(RowEvent),
    RowRemoved(RowEvent),
    RowUpdated(RowEvent),
    MenuOpened {
        menu: MenuId,
    },
    MenuSelection {
        menu: MenuId,
        value: String,
    },
    ResizeStart {
        column: usize,
    },
    Resize {
        column: usize,
        delta: f64,
    },
    ResizeEnd {
        column: usize,
    },
}

impl GridEvent {
    pub fn name(&self) -> &'static str {
        match self {
            GridEvent::CellUpdated { .. } => "cell-updated",
            GridEvent::ColumnAdded(_) => "column-added",
            GridEvent::ColumnRemoved(_) => "column-removed",
            GridEvent::ColumnUpdated(_) => "column-updated",
            GridEvent::ColumnRenamed(_) => "column-renamed",
            GridEvent::ColumnHidden(_) => "column-hidden",
            GridEvent::ColumnPluginActivated { .. } => "column-plugin-activated",
            GridEvent::ColumnPluginDeactivated { .. } => "column-plugin-deactivated",
            GridEvent::RowSelected { .. } => "row-selected",
            GridEvent::RowAdded(_) => "row-added",
            GridEvent::RowRemoved(_) => "row-removed",
            GridEvent::RowUpdated(_) => "row-updated",
            GridEvent::MenuOpened { .. } => "menu-opened",
            GridEvent::MenuSelection { .. } => "menu-selection",
            GridEvent::ResizeStart { .. } => "resize-start",
            GridEvent::Resize { .. } => "resize",
            GridEvent::ResizeEnd { .. } => "resize-end",
        }
    }
}

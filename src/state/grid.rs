use std::cmp::Ordering;
use std::collections::BTreeSet;

use serde_json::Number;

use crate::config::GridConfig;
use crate::state::cell::Cell;
use crate::state::column::{ColumnHeader, HeaderClickTarget, SORT_ASCENDING, SORT_DESCENDING};
use crate::state::data_model::{CellValue, ColumnKind, Dataset, Row, Schema};
use crate::state::effects::{EditorId, Effect, Movement, Reaction};
use crate::state::error::GridError;
use crate::state::events::{ColumnEvent, GridEvent, MenuId, RowEvent};
use crate::state::keys::{Direction, KeyInput};
use crate::state::menu::{Menu, MenuSelect};
use crate::state::menu_registry::{InteractionId, MenuRegistry};
use crate::state::navigator::{FocusTarget, GridNavigator};
use crate::state::plugin::PluginAction;
use crate::state::position::Position;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Parses the column menu's sort action values.
    pub fn from_action(action: &str) -> Option<Self> {
        match action {
            SORT_ASCENDING => Some(SortOrder::Asc),
            SORT_DESCENDING => Some(SortOrder::Desc),
            _ => None,
        }
    }
}

/// What the DOM event that triggered an interaction should do next.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventControl {
    pub prevent_default: bool,
    pub stop_propagation: bool,
}

/// The grid controller: owns headers, cells, open menus, focus and the
/// outgoing event and effect queues.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct GridState {
    config: GridConfig,
    schema: Schema,
    columns: Vec<ColumnHeader>,
    rows: Vec<Vec<Cell>>,
    gutter: Cell,
    selected_rows: BTreeSet<usize>,
    focus: Option<FocusTarget>,
    menus: MenuRegistry,
    outbox: Vec<GridEvent>,
    effects: Vec<Effect>,
}

impl GridState {
    pub fn new(config: GridConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn from_dataset(dataset: Dataset, config: GridConfig) -> Self {
        let mut state = Self::new(config);
        state.replace_dataset(dataset);
        state
    }

    /// Swaps in new data. Every cell is rebuilt, so edits, open menus and
    /// focus are dropped.
    pub fn replace_dataset(&mut self, dataset: Dataset) {
        self.detach_all();
        self.schema = dataset.schema.clone();
        self.columns = dataset
            .columns
            .iter()
            .enumerate()
            .map(|(index, name)| self.build_header(index, name))
            .collect();
        self.rows = dataset
            .rows
            .into_iter()
            .enumerate()
            .map(|(row, values)| self.build_row(row, values))
            .collect();
        self.selected_rows.clear();
        self.focus = None;
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn columns(&self) -> &[ColumnHeader] {
        &self.columns
    }

    pub fn column(&self, index: usize) -> Option<&ColumnHeader> {
        self.columns.get(index)
    }

    /// Finds a column by the name events report it under.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns
            .iter()
            .position(|column| column.identity() == name || column.name() == name)
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// [`Position::SELECTOR`] resolves to the blank gutter cell while rows
    /// are selectable.
    pub fn cell(&self, position: Position) -> Option<&Cell> {
        if position.is_selector() {
            return self.config.removable_rows.then_some(&self.gutter);
        }
        let (row, column) = position.indices()?;
        self.rows.get(row)?.get(column)
    }

    pub fn row_values(&self, index: usize) -> Option<Row> {
        self.rows
            .get(index)
            .map(|cells| cells.iter().map(|cell| cell.value().clone()).collect())
    }

    pub fn is_row_selected(&self, index: usize) -> bool {
        self.selected_rows.contains(&index)
    }

    pub fn selected_rows(&self) -> Vec<usize> {
        self.selected_rows.iter().copied().collect()
    }

    pub fn focus(&self) -> Option<FocusTarget> {
        self.focus
    }

    pub fn navigator(&self) -> GridNavigator {
        GridNavigator::new(self.rows.len(), self.columns.len(), self.config.removable_rows)
    }

    pub fn menu_registry(&self) -> &MenuRegistry {
        &self.menus
    }

    pub fn menu(&self, id: MenuId) -> Option<&Menu> {
        match id {
            MenuId::Cell(position) => self.cell(position)?.menu(),
            MenuId::Column(index) => self.columns.get(index).map(ColumnHeader::menu),
        }
    }

    /// Events not yet handed to the host.
    pub fn events(&self) -> &[GridEvent] {
        &self.outbox
    }

    pub fn drain_events(&mut self) -> Vec<GridEvent> {
        std::mem::take(&mut self.outbox)
    }

    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    pub fn drain_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }

    // --- focus and cells -------------------------------------------------

    pub fn cell_click(&mut self, position: Position) -> Result<(), GridError> {
        let (row, column) = self.cell_indices(position)?;
        self.focus = Some(FocusTarget::Cell { row, column });
        Ok(())
    }

    pub fn cell_double_click(&mut self, position: Position, from_plugin: bool) -> Result<(), GridError> {
        let reaction = self.cell_mut(position)?.double_click(from_plugin);
        self.apply(reaction, None);
        Ok(())
    }

    pub fn cell_input(&mut self, position: Position, text: &str) -> Result<(), GridError> {
        let reaction = self.cell_mut(position)?.input(text);
        self.apply(reaction, None);
        Ok(())
    }

    pub fn cell_blur(&mut self, position: Position) -> Result<(), GridError> {
        self.cell_mut(position)?.blur();
        Ok(())
    }

    pub fn paste(&mut self, position: Position, text: &str) -> Result<(), GridError> {
        let reaction = self.cell_mut(position)?.paste(text);
        self.apply(reaction, None);
        Ok(())
    }

    pub fn plugin_action(
        &mut self,
        position: Position,
        action: PluginAction,
        value: CellValue,
    ) -> Result<(), GridError> {
        let reaction = self.cell_mut(position)?.plugin_action(action, value);
        self.apply(reaction, None);
        Ok(())
    }

    /// Right-click on a cell. Returns whether the menu opened.
    pub fn cell_context_menu(
        &mut self,
        position: Position,
        inside_plugin_editor: bool,
    ) -> Result<bool, GridError> {
        let cell = self.cell(position).ok_or(GridError::UnknownCell(position))?;
        if !cell.accepts_context_menu(inside_plugin_editor) {
            return Ok(false);
        }
        self.cell_click(position)?;
        self.open_menu(MenuId::Cell(position), None)?;
        Ok(true)
    }

    pub fn key_down(&mut self, target: FocusTarget, key: KeyInput) -> Result<EventControl, GridError> {
        match target {
            FocusTarget::Selector { row } => self.selector_key_down(row, key),
            FocusTarget::Cell { row, column } => {
                let position = Position::at(row, column);
                let id = MenuId::Cell(position);
                if self.menu(id).is_some_and(Menu::is_open) {
                    return self.menu_key_down(id, key);
                }
                let reaction = self.cell_mut(position)?.key_down(key);
                Ok(self.apply(reaction, Some(target)))
            }
        }
    }

    fn selector_key_down(&mut self, row: usize, key: KeyInput) -> Result<EventControl, GridError> {
        if key.is_activation() {
            self.toggle_row_selection(row)?;
            return Ok(EventControl {
                prevent_default: true,
                stop_propagation: false,
            });
        }
        match key.direction() {
            Some(direction @ (Direction::Up | Direction::Down | Direction::Right)) => {
                let reaction = Reaction::prevented().moving(Movement::Step(direction));
                Ok(self.apply(reaction, Some(FocusTarget::Selector { row })))
            }
            _ => Ok(EventControl::default()),
        }
    }

    // --- menus -----------------------------------------------------------

    /// Opens `id`, closing whatever else was open, and emits `menu-opened`.
    pub fn open_menu(&mut self, id: MenuId, activation: Option<InteractionId>) -> Result<(), GridError> {
        let (menu, registry) = self.menu_parts(id)?;
        if menu.is_open() {
            return Ok(());
        }
        let displaced = menu.open(registry, activation);
        self.close_menus(displaced);
        self.emit(GridEvent::MenuOpened { menu: id });
        Ok(())
    }

    /// Force-closes a menu. Also the handle used for displaced menus.
    pub fn close_menu(&mut self, id: MenuId) {
        if let Ok((menu, registry)) = self.menu_parts(id) {
            menu.close(registry);
            return;
        }
        self.menus.deregister(id);
    }

    /// Click on a menu's trigger; toggles it.
    pub fn menu_trigger(&mut self, id: MenuId) -> Result<(), GridError> {
        let interaction = self.menus.begin_interaction();
        let (menu, registry) = self.menu_parts(id)?;
        let was_open = menu.is_open();
        let displaced = menu.trigger(registry, interaction);
        self.close_menus(displaced);
        if !was_open {
            self.emit(GridEvent::MenuOpened { menu: id });
        }
        Ok(())
    }

    /// Click on a rendered menu item. `value` is what the item carried.
    pub fn menu_item_click(&mut self, id: MenuId, value: Option<&str>) -> Result<EventControl, GridError> {
        let value = value
            .filter(|value| !value.is_empty())
            .ok_or(GridError::MissingSelectionValue)?;
        let selected = self.menu_parts(id)?.0.select(value)?;
        self.finish_selection(id, selected)
    }

    /// Keys on an open menu, or on a focused trigger of a closed one.
    pub fn menu_key_down(&mut self, id: MenuId, key: KeyInput) -> Result<EventControl, GridError> {
        let before = self.menu(id).cloned().map(|menu| (menu, self.menus.clone()));
        let outcome = {
            let (menu, registry) = self.menu_parts(id)?;
            let was_open = menu.is_open();
            let outcome = menu.key_down(key, registry);
            (outcome, was_open, menu.is_open())
        };
        let (outcome, was_open, is_open) = outcome;

        self.close_menus(outcome.displaced);
        if !was_open && is_open {
            self.emit(GridEvent::MenuOpened { menu: id });
        }

        let mut control = EventControl {
            prevent_default: outcome.prevent_default,
            stop_propagation: outcome.handled,
        };
        if let Some(selected) = outcome.selected {
            match self.finish_selection(id, selected) {
                Ok(routed) => control.prevent_default |= routed.prevent_default,
                Err(err) => {
                    if let Some((menu, registry)) = before {
                        if let Ok((current, menus)) = self.menu_parts(id) {
                            *current = menu;
                            *menus = registry;
                        }
                    }
                    return Err(err);
                }
            }
        }
        Ok(control)
    }

    /// A click reached the root without being claimed by a trigger: dismiss
    /// every menu it did not open, and any plugin editor it landed outside of.
    pub fn outside_interaction(&mut self, inside_plugin_editor: bool) {
        let interaction = self.menus.finish_interaction();
        let dismissed = self.menus.outside_interaction(interaction);
        self.close_menus(dismissed);
        for cell in self.rows.iter_mut().flatten() {
            cell.dismiss_plugin_editor(inside_plugin_editor);
        }
    }

    fn finish_selection(&mut self, id: MenuId, selected: MenuSelect) -> Result<EventControl, GridError> {
        let value = match selected {
            MenuSelect::Submenu => {
                return Ok(EventControl {
                    prevent_default: true,
                    stop_propagation: true,
                })
            }
            MenuSelect::Leaf(value) => value,
        };

        let mut reaction = match id {
            MenuId::Cell(position) => self.cell_mut(position)?.menu_selection(&value),
            MenuId::Column(index) => {
                let reaction = self.column_mut(index)?.menu_selection(&value)?;
                self.sync_column_plugin(index);
                reaction
            }
        };
        self.menu_parts(id)?.0.record_selection(value.as_str());
        reaction
            .events
            .insert(0, GridEvent::MenuSelection { menu: id, value });
        self.close_menu(id);

        let origin = match id {
            MenuId::Cell(position) => position
                .indices()
                .map(|(row, column)| FocusTarget::Cell { row, column }),
            MenuId::Column(_) => None,
        };
        Ok(self.apply(reaction, origin))
    }

    fn close_menus(&mut self, ids: Vec<MenuId>) {
        for id in ids {
            self.close_menu(id);
        }
    }

    fn menu_parts(&mut self, id: MenuId) -> Result<(&mut Menu, &mut MenuRegistry), GridError> {
        let menu = match id {
            MenuId::Cell(position) => {
                let (row, column) = position.indices().ok_or(GridError::UnknownMenu(id))?;
                self.rows
                    .get_mut(row)
                    .and_then(|cells| cells.get_mut(column))
                    .and_then(Cell::menu_mut)
                    .ok_or(GridError::UnknownMenu(id))?
            }
            MenuId::Column(index) => self
                .columns
                .get_mut(index)
                .ok_or(GridError::UnknownMenu(id))?
                .menu_mut(),
        };
        Ok((menu, &mut self.menus))
    }

    // --- column headers --------------------------------------------------

    pub fn header_click(&mut self, index: usize, target: HeaderClickTarget) -> Result<(), GridError> {
        let reaction = self.column_mut(index)?.click(target);
        self.apply(reaction, None);
        Ok(())
    }

    pub fn header_context_menu(&mut self, index: usize) -> Result<(), GridError> {
        self.open_menu(MenuId::Column(index), None)
    }

    pub fn header_key_down(&mut self, index: usize, key: KeyInput) -> Result<EventControl, GridError> {
        let id = MenuId::Column(index);
        if self.menu(id).is_some_and(Menu::is_open) {
            return self.menu_key_down(id, key);
        }
        let reaction = self.column_mut(index)?.key_down(key);
        Ok(self.apply(reaction, None))
    }

    pub fn header_rename_input(&mut self, index: usize, text: &str) -> Result<(), GridError> {
        self.column_mut(index)?.rename_input(text);
        Ok(())
    }

    pub fn header_blur(&mut self, index: usize) -> Result<(), GridError> {
        let reaction = self.column_mut(index)?.finish_rename();
        self.apply(reaction, None);
        Ok(())
    }

    pub fn column_resize_start(&mut self, index: usize) -> Result<(), GridError> {
        self.column_mut(index)?.resize_start();
        self.emit(GridEvent::ResizeStart { column: index });
        Ok(())
    }

    pub fn column_resize(&mut self, index: usize, delta: f64) -> Result<(), GridError> {
        self.column_mut(index)?.resize(delta);
        self.emit(GridEvent::Resize {
            column: index,
            delta,
        });
        Ok(())
    }

    pub fn column_resize_end(&mut self, index: usize) -> Result<(), GridError> {
        self.column_mut(index)?;
        self.emit(GridEvent::ResizeEnd { column: index });
        Ok(())
    }

    // --- rows and columns ------------------------------------------------

    pub fn toggle_row_selection(&mut self, index: usize) -> Result<bool, GridError> {
        let row = self.row_values(index).ok_or(GridError::UnknownRow(index))?;
        let selected = if self.selected_rows.remove(&index) {
            false
        } else {
            self.selected_rows.insert(index);
            true
        };
        self.focus = Some(FocusTarget::Selector { row: index });
        self.emit(GridEvent::RowSelected {
            index,
            row,
            selected,
        });
        Ok(selected)
    }

    pub fn add_row(&mut self) -> usize {
        let index = self.rows.len();
        let values = vec![CellValue::Null; self.columns.len()];
        let cells = self.build_row(index, values.clone());
        self.rows.push(cells);
        self.emit(GridEvent::RowAdded(RowEvent { index, row: values }));
        index
    }

    /// Replaces a row's backing data; its cells are rebuilt from scratch.
    pub fn replace_row(&mut self, index: usize, values: Row) -> Result<(), GridError> {
        if index >= self.rows.len() {
            return Err(GridError::UnknownRow(index));
        }
        self.detach_row(index);
        let mut values = values;
        values.resize(self.columns.len(), CellValue::Null);
        self.rows[index] = self.build_row(index, values.clone());
        self.emit(GridEvent::RowUpdated(RowEvent { index, row: values }));
        Ok(())
    }

    /// Removes every selected row. No-op unless rows are removable.
    pub fn remove_selected_rows(&mut self) -> Vec<usize> {
        if !self.config.removable_rows || self.selected_rows.is_empty() {
            return Vec::new();
        }
        self.close_all_menus();

        let selected: Vec<usize> = std::mem::take(&mut self.selected_rows).into_iter().collect();
        let mut removed = Vec::new();
        for index in selected.into_iter().rev() {
            if index < self.rows.len() {
                let mut cells = self.rows.remove(index);
                cells.iter_mut().for_each(Cell::detach);
                let row = cells.iter().map(|cell| cell.value().clone()).collect();
                removed.push(RowEvent { index, row });
            }
        }
        removed.reverse();
        let indices = removed.iter().map(|event| event.index).collect();
        for event in removed {
            self.emit(GridEvent::RowRemoved(event));
        }
        self.reindex();
        indices
    }

    pub fn add_column(&mut self, name: &str) -> Result<usize, GridError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GridError::MissingColumnName);
        }
        self.close_all_menus();

        let index = self.columns.len();
        let header = self.build_header(index, name);
        self.columns.push(header);
        for (row, cells) in self.rows.iter_mut().enumerate() {
            let cell = Cell::new(Position::at(row, index), CellValue::Null)
                .with_readonly(self.config.readonly);
            cells.push(cell);
        }
        self.emit(GridEvent::ColumnAdded(ColumnEvent::bare(name)));
        Ok(index)
    }

    pub fn remove_column(&mut self, index: usize) -> Result<(), GridError> {
        if index >= self.columns.len() {
            return Err(GridError::UnknownColumn(index));
        }
        self.close_all_menus();
        self.columns.remove(index).detach();
        for cells in &mut self.rows {
            if index < cells.len() {
                cells.remove(index).detach();
            }
        }
        self.reindex();
        Ok(())
    }

    /// Reorders rows by one column. Cells keep their original values, so
    /// dirtiness travels with the row.
    pub fn sort_by_column(&mut self, name: &str, order: SortOrder) -> Result<(), GridError> {
        let index = self.column_index(name).ok_or(GridError::MissingColumnName)?;
        self.close_all_menus();

        self.rows.sort_by(|a, b| {
            compare_values(a.get(index).map(Cell::value), b.get(index).map(Cell::value))
        });
        if order == SortOrder::Desc {
            self.rows.reverse();
        }
        self.selected_rows.clear();
        self.reindex();
        Ok(())
    }

    // --- internals -------------------------------------------------------

    fn apply(&mut self, reaction: Reaction, origin: Option<FocusTarget>) -> EventControl {
        for event in reaction.events {
            self.emit(event);
        }

        for effect in &reaction.effects {
            if let Effect::FocusEditor(EditorId::Cell(position)) = effect {
                if let Some((row, column)) = position.indices() {
                    self.focus = Some(FocusTarget::Cell { row, column });
                }
            }
        }
        self.effects.extend(reaction.effects);

        if let (Some(movement), Some(origin)) = (reaction.movement, origin) {
            let navigator = self.navigator();
            let next = match movement {
                Movement::Step(direction) => navigator.step(origin, direction),
                Movement::NextRow => navigator.next_row(origin),
            };
            if let Some(next) = next {
                self.focus = Some(next);
                self.effects.push(Effect::Focus(next));
            }
        }

        EventControl {
            prevent_default: reaction.prevent_default,
            stop_propagation: reaction.stop_propagation,
        }
    }

    fn emit(&mut self, event: GridEvent) {
        tracing::debug!(event = event.name(), ?event, "grid event");
        self.outbox.push(event);
    }

    fn cell_indices(&self, position: Position) -> Result<(usize, usize), GridError> {
        self.cell(position)
            .and(position.indices())
            .ok_or(GridError::UnknownCell(position))
    }

    fn cell_mut(&mut self, position: Position) -> Result<&mut Cell, GridError> {
        let (row, column) = position.indices().ok_or(GridError::UnknownCell(position))?;
        self.rows
            .get_mut(row)
            .and_then(|cells| cells.get_mut(column))
            .ok_or(GridError::UnknownCell(position))
    }

    fn column_mut(&mut self, index: usize) -> Result<&mut ColumnHeader, GridError> {
        self.columns
            .get_mut(index)
            .ok_or(GridError::UnknownColumn(index))
    }

    fn build_header(&self, index: usize, name: &str) -> ColumnHeader {
        ColumnHeader::new(index, name)
            .with_width(Some(self.config.default_column_width))
            .with_readonly(self.config.readonly)
            .with_plugins(self.config.plugins.clone())
    }

    fn build_row(&self, row: usize, mut values: Row) -> Vec<Cell> {
        values.resize(self.columns.len(), CellValue::Undefined);
        values
            .into_iter()
            .enumerate()
            .map(|(column, value)| {
                let header = &self.columns[column];
                let kind = self
                    .schema
                    .get(header.identity())
                    .map(|type_name| ColumnKind::from_type_name(type_name))
                    .unwrap_or_default();
                let mut cell = Cell::new(Position::at(row, column), value)
                    .with_kind(kind)
                    .with_readonly(self.config.readonly);
                cell.set_plugin(header.active_plugin().cloned(), self.config.plugin_attributes.clone());
                cell
            })
            .collect()
    }

    fn sync_column_plugin(&mut self, index: usize) {
        let Some(header) = self.columns.get(index) else {
            return;
        };
        let plugin = header.active_plugin().cloned();
        let attributes = self.config.plugin_attributes.clone();
        for cells in &mut self.rows {
            if let Some(cell) = cells.get_mut(index) {
                cell.set_plugin(plugin.clone(), attributes.clone());
            }
        }
    }

    /// Rebuilds cells whose position changed after a structural edit.
    fn reindex(&mut self) {
        for (index, column) in self.columns.iter_mut().enumerate() {
            if column.index() != index {
                column.relocate(index);
            }
        }
        for (row, cells) in self.rows.iter_mut().enumerate() {
            for (column, cell) in cells.iter_mut().enumerate() {
                let position = Position::at(row, column);
                if cell.position() != position {
                    cell.relocate(position);
                }
            }
        }
        if let Some(focus) = self.focus {
            if !self.navigator().contains(focus) {
                self.focus = None;
            }
        }
    }

    fn detach_row(&mut self, index: usize) {
        let ids: Vec<MenuId> = self.rows[index]
            .iter()
            .filter_map(|cell| cell.menu().map(Menu::id))
            .collect();
        self.close_menus(ids);
        self.rows[index].iter_mut().for_each(Cell::detach);
    }

    fn close_all_menus(&mut self) {
        let open = self.menus.open_menus();
        self.close_menus(open);
    }

    fn detach_all(&mut self) {
        self.close_all_menus();
        self.menus.clear();
        for cell in self.rows.iter_mut().flatten() {
            cell.detach();
        }
        for column in &mut self.columns {
            column.detach();
        }
    }
}

fn compare_values(a: Option<&CellValue>, b: Option<&CellValue>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(left), Some(right)) => compare_value_pair(left, right),
    }
}

fn compare_value_pair(left: &CellValue, right: &CellValue) -> Ordering {
    match (left, right) {
        (CellValue::Bool(a), CellValue::Bool(b)) => a.cmp(b),
        (CellValue::Number(a), CellValue::Number(b)) => compare_numbers(a, b),
        (CellValue::String(a), CellValue::String(b)) => {
            a.to_ascii_lowercase().cmp(&b.to_ascii_lowercase())
        }
        _ => type_rank(left)
            .cmp(&type_rank(right))
            .then_with(|| left.edit_text().cmp(&right.edit_text())),
    }
}

fn compare_numbers(left: &Number, right: &Number) -> Ordering {
    match (left.as_i64(), right.as_i64()) {
        (Some(a), Some(b)) => a.cmp(&b),
        _ => match (left.as_u64(), right.as_u64()) {
            (Some(a), Some(b)) => a.cmp(&b),
            _ => {
                let left = left.as_f64().unwrap_or(f64::NAN);
                let right = right.as_f64().unwrap_or(f64::NAN);
                left.partial_cmp(&right).unwrap_or(Ordering::Equal)
            }
        },
    }
}

fn type_rank(value: &CellValue) -> u8 {
    match value {
        CellValue::Undefined => 0,
        CellValue::Null => 1,
        CellValue::Bool(_) => 2,
        CellValue::Number(_) => 3,
        CellValue::String(_) => 4,
        CellValue::Json(_) => 5,
    }
}

use std::collections::BTreeMap;

use serde_json::json;

use sheetgrid::config::GridConfig;
use sheetgrid::state::cell::CellView;
use sheetgrid::state::column::HeaderClickTarget;
use sheetgrid::state::data_model::{CellValue, ColumnKind, Dataset};
use sheetgrid::state::effects::{EditorId, Effect};
use sheetgrid::state::error::GridError;
use sheetgrid::state::events::{ColumnEvent, GridEvent, MenuId, RowEvent};
use sheetgrid::state::grid::{GridState, SortOrder};
use sheetgrid::state::keys::{KeyInput, KeyName};
use sheetgrid::state::navigator::FocusTarget;
use sheetgrid::state::plugin::ColumnPlugin;
use sheetgrid::state::position::Position;

fn people() -> Dataset {
    Dataset::new(
        vec!["name".to_string(), "email".to_string()],
        vec![
            vec![CellValue::from("Alice"), CellValue::from("alice@example.com")],
            vec![CellValue::from("Bob"), CellValue::Null],
        ],
    )
}

fn grid() -> GridState {
    GridState::from_dataset(people(), GridConfig::default())
}

fn cell(row: usize, column: usize) -> FocusTarget {
    FocusTarget::Cell { row, column }
}

fn stars() -> ColumnPlugin {
    ColumnPlugin {
        tag_name: "plugin-cell-stars".to_string(),
        config: String::new(),
        display_name: "Stars".to_string(),
        is_default: false,
    }
}

#[test]
fn test_from_dataset_builds_cells() {
    let grid = grid();
    assert_eq!(grid.row_count(), 2);
    assert_eq!(grid.column_count(), 2);
    assert_eq!(
        grid.cell(Position::at(0, 0)).unwrap().value(),
        &CellValue::from("Alice")
    );
    assert_eq!(grid.column(1).unwrap().name(), "email");
    assert_eq!(grid.column(1).unwrap().width(), Some(160.0));
    assert!(grid.events().is_empty());
}

#[test]
fn test_typing_into_cell_emits_update() {
    let mut grid = grid();
    let control = grid.key_down(cell(0, 0), KeyInput::char('b')).unwrap();

    assert!(control.prevent_default);
    assert_eq!(
        grid.drain_events(),
        vec![GridEvent::CellUpdated {
            position: Position::at(0, 0),
            value: CellValue::from("Aliceb"),
        }]
    );
    assert_eq!(
        grid.drain_effects(),
        vec![Effect::FocusEditor(EditorId::Cell(Position::at(0, 0)))]
    );
    assert_eq!(grid.focus(), Some(cell(0, 0)));
    assert!(grid.events().is_empty());
}

#[test]
fn test_arrow_keys_move_focus() {
    let mut grid = grid();
    grid.key_down(cell(0, 0), KeyInput::plain(KeyName::ArrowRight))
        .unwrap();
    assert_eq!(grid.focus(), Some(cell(0, 1)));
    assert_eq!(grid.drain_effects(), vec![Effect::Focus(cell(0, 1))]);

    grid.key_down(cell(0, 1), KeyInput::plain(KeyName::ArrowDown))
        .unwrap();
    assert_eq!(grid.focus(), Some(cell(1, 1)));
}

#[test]
fn test_arrow_past_edges_is_noop() {
    let mut grid = grid();
    grid.key_down(cell(0, 1), KeyInput::plain(KeyName::ArrowRight))
        .unwrap();
    grid.key_down(cell(1, 0), KeyInput::plain(KeyName::ArrowDown))
        .unwrap();
    assert_eq!(grid.focus(), None);
    assert!(grid.effects().is_empty());
}

#[test]
fn test_arrow_left_reaches_selector_and_back() {
    let mut grid = grid();
    grid.key_down(cell(1, 0), KeyInput::plain(KeyName::ArrowLeft))
        .unwrap();
    assert_eq!(grid.focus(), Some(FocusTarget::Selector { row: 1 }));

    grid.key_down(
        FocusTarget::Selector { row: 1 },
        KeyInput::plain(KeyName::ArrowRight),
    )
    .unwrap();
    assert_eq!(grid.focus(), Some(cell(1, 0)));
}

#[test]
fn test_context_menu_opens_and_second_menu_displaces_it() {
    let mut grid = grid();
    let cell_menu = MenuId::Cell(Position::at(0, 0));

    assert!(grid.cell_context_menu(Position::at(0, 0), false).unwrap());
    assert!(grid.menu(cell_menu).unwrap().is_open());
    assert_eq!(
        grid.drain_events(),
        vec![GridEvent::MenuOpened { menu: cell_menu }]
    );

    grid.header_context_menu(1).unwrap();
    assert!(!grid.menu(cell_menu).unwrap().is_open());
    assert!(grid.menu(MenuId::Column(1)).unwrap().is_open());
    assert_eq!(grid.menu_registry().open_menus(), vec![MenuId::Column(1)]);
}

#[test]
fn test_context_menu_inside_plugin_editor_opens_nothing() {
    let mut grid = grid();
    assert!(!grid.cell_context_menu(Position::at(0, 0), true).unwrap());
    assert!(grid.menu_registry().is_empty());
    assert!(grid.events().is_empty());
}

#[test]
fn test_outside_click_closes_menu() {
    let mut grid = grid();
    grid.cell_context_menu(Position::at(0, 0), false).unwrap();

    grid.outside_interaction(false);
    assert!(!grid
        .menu(MenuId::Cell(Position::at(0, 0)))
        .unwrap()
        .is_open());
    assert!(grid.menu_registry().is_empty());
}

#[test]
fn test_trigger_click_is_not_an_outside_click() {
    let mut grid = grid();
    let id = MenuId::Cell(Position::at(1, 1));

    grid.menu_trigger(id).unwrap();
    grid.outside_interaction(false);
    assert!(grid.menu(id).unwrap().is_open());

    grid.outside_interaction(false);
    assert!(!grid.menu(id).unwrap().is_open());
}

#[test]
fn test_trigger_click_toggles_closed() {
    let mut grid = grid();
    let id = MenuId::Column(0);

    grid.menu_trigger(id).unwrap();
    grid.outside_interaction(false);
    grid.menu_trigger(id).unwrap();
    grid.outside_interaction(false);
    assert!(!grid.menu(id).unwrap().is_open());
}

#[test]
fn test_leaf_click_emits_selection_and_applies_it() {
    let mut grid = grid();
    let id = MenuId::Cell(Position::at(0, 0));
    grid.cell_context_menu(Position::at(0, 0), false).unwrap();
    grid.drain_events();

    grid.menu_item_click(id, Some("clear")).unwrap();
    assert_eq!(
        grid.drain_events(),
        vec![
            GridEvent::MenuSelection {
                menu: id,
                value: "clear".to_string(),
            },
            GridEvent::CellUpdated {
                position: Position::at(0, 0),
                value: CellValue::Null,
            },
        ]
    );
    assert!(!grid.menu(id).unwrap().is_open());
    assert!(grid.cell(Position::at(0, 0)).unwrap().dirty());
}

#[test]
fn test_menu_click_without_value_is_rejected() {
    let mut grid = grid();
    let id = MenuId::Cell(Position::at(0, 0));
    grid.cell_context_menu(Position::at(0, 0), false).unwrap();
    grid.drain_events();

    assert_eq!(
        grid.menu_item_click(id, None).unwrap_err(),
        GridError::MissingSelectionValue
    );
    assert_eq!(
        grid.menu_item_click(id, Some("")).unwrap_err(),
        GridError::MissingSelectionValue
    );
    assert!(grid.events().is_empty());
    assert!(grid.menu(id).unwrap().is_open());
}

#[test]
fn test_plugin_submenu_then_leaf_installs_plugin() {
    let config = GridConfig {
        plugins: vec![stars()],
        ..GridConfig::default()
    };
    let mut grid = GridState::from_dataset(people(), config);
    let id = MenuId::Column(0);
    grid.header_context_menu(0).unwrap();
    grid.drain_events();

    let control = grid.menu_item_click(id, Some("plugins")).unwrap();
    assert!(control.stop_propagation);
    assert!(grid.events().is_empty());
    assert!(grid.menu(id).unwrap().is_open());
    assert_eq!(grid.menu(id).unwrap().depth(), 1);

    grid.menu_item_click(id, Some("plugin-cell-stars")).unwrap();
    assert_eq!(
        grid.drain_events(),
        vec![
            GridEvent::MenuSelection {
                menu: id,
                value: "plugin-cell-stars".to_string(),
            },
            GridEvent::ColumnPluginActivated {
                name: "name".to_string(),
                plugin: stars(),
            },
        ]
    );
    assert!(!grid.menu(id).unwrap().is_open());
    for row in 0..grid.row_count() {
        let cell = grid.cell(Position::at(row, 0)).unwrap();
        assert_eq!(cell.plugin(), Some(&stars()));
    }
    assert!(grid.cell(Position::at(0, 1)).unwrap().plugin().is_none());
}

#[test]
fn test_keyboard_navigates_open_menu_before_cell() {
    let mut grid = grid();
    let id = MenuId::Cell(Position::at(0, 0));
    grid.cell_context_menu(Position::at(0, 0), false).unwrap();
    grid.drain_events();

    grid.key_down(cell(0, 0), KeyInput::plain(KeyName::ArrowDown))
        .unwrap();
    assert_eq!(grid.menu(id).unwrap().focused(), Some("edit"));
    assert_eq!(grid.focus(), Some(cell(0, 0)));

    grid.key_down(cell(0, 0), KeyInput::plain(KeyName::Enter))
        .unwrap();
    assert!(!grid.menu(id).unwrap().is_open());
    assert!(grid.cell(Position::at(0, 0)).unwrap().is_editing());
    assert_eq!(
        grid.drain_events(),
        vec![GridEvent::MenuSelection {
            menu: id,
            value: "edit".to_string(),
        }]
    );
}

#[test]
fn test_header_menu_driven_by_keyboard() {
    let mut grid = grid();
    let id = MenuId::Column(0);
    grid.header_context_menu(0).unwrap();
    grid.drain_events();

    let control = grid
        .header_key_down(0, KeyInput::plain(KeyName::ArrowUp))
        .unwrap();
    assert!(control.prevent_default);
    assert!(control.stop_propagation);
    assert_eq!(grid.menu(id).unwrap().focused(), Some("delete"));

    grid.header_key_down(0, KeyInput::plain(KeyName::Enter))
        .unwrap();
    assert!(!grid.menu(id).unwrap().is_open());
    assert!(grid.menu_registry().is_empty());
    assert_eq!(
        grid.drain_events(),
        vec![
            GridEvent::MenuSelection {
                menu: id,
                value: "delete".to_string(),
            },
            GridEvent::ColumnRemoved(ColumnEvent::bare("name")),
        ]
    );
}

#[test]
fn test_space_on_header_trigger_opens_menu() {
    let mut grid = grid();
    let id = MenuId::Column(0);
    grid.cell_context_menu(Position::at(1, 1), false).unwrap();
    grid.drain_events();

    let control = grid.menu_key_down(id, KeyInput::char(' ')).unwrap();
    assert!(control.prevent_default);
    assert!(control.stop_propagation);
    assert!(grid.menu(id).unwrap().is_open());
    assert_eq!(grid.menu_registry().open_menus(), vec![id]);
    assert!(!grid.menu(MenuId::Cell(Position::at(1, 1))).unwrap().is_open());
    assert_eq!(grid.drain_events(), vec![GridEvent::MenuOpened { menu: id }]);

    grid.menu_key_down(id, KeyInput::plain(KeyName::Enter)).unwrap();
    assert!(!grid.menu(id).unwrap().is_open());
    assert!(grid.menu_registry().is_empty());
    assert!(grid.drain_events().is_empty());
}

#[test]
fn test_rejected_menu_choice_leaves_menu_untouched() {
    let mut grid = GridState::from_dataset(
        Dataset::new(vec![String::new()], vec![vec![CellValue::Null]]),
        GridConfig::default(),
    );
    let id = MenuId::Column(0);
    grid.header_context_menu(0).unwrap();
    grid.drain_events();

    assert_eq!(
        grid.menu_item_click(id, Some("hide")).unwrap_err(),
        GridError::MissingOriginalValue(0)
    );
    assert!(grid.menu(id).unwrap().selection().is_none());
    assert!(grid.menu(id).unwrap().is_open());

    for _ in 0..3 {
        grid.header_key_down(0, KeyInput::plain(KeyName::ArrowDown))
            .unwrap();
    }
    assert_eq!(grid.menu(id).unwrap().focused(), Some("hide"));
    assert_eq!(
        grid.header_key_down(0, KeyInput::plain(KeyName::Enter))
            .unwrap_err(),
        GridError::MissingOriginalValue(0)
    );
    let menu = grid.menu(id).unwrap();
    assert!(menu.is_open());
    assert!(menu.selection().is_none());
    assert_eq!(menu.focused(), Some("hide"));
    assert!(grid.menu_registry().is_registered(id));
    assert!(grid.events().is_empty());
}

#[test]
fn test_leaf_choice_is_recorded_on_success() {
    let mut grid = grid();
    let id = MenuId::Column(0);
    grid.header_context_menu(0).unwrap();
    grid.menu_item_click(id, Some("hide")).unwrap();
    assert_eq!(grid.menu(id).unwrap().selection(), Some("hide"));
    assert!(!grid.menu(id).unwrap().is_open());
}

#[test]
fn test_click_while_renaming_dismisses_other_menus() {
    let mut grid = grid();
    grid.header_context_menu(0).unwrap();
    grid.menu_item_click(MenuId::Column(0), Some("rename")).unwrap();
    grid.cell_context_menu(Position::at(0, 0), false).unwrap();

    grid.outside_interaction(false);
    assert!(grid.menu_registry().is_empty());
    assert!(grid.column(0).unwrap().is_renaming());
}

#[test]
fn test_editing_cell_renders_editor_view() {
    let mut grid = grid();
    grid.cell_double_click(Position::at(0, 0), false).unwrap();
    assert!(matches!(
        grid.cell(Position::at(0, 0)).unwrap().view(),
        CellView::Editing { .. }
    ));
}

#[test]
fn test_selector_gutter_is_blank_and_opens_nothing() {
    let mut grid = grid();
    let gutter = grid.cell(Position::SELECTOR).unwrap();
    assert!(gutter.is_blank());
    assert_eq!(gutter.view(), CellView::Blank);
    assert!(grid.menu(MenuId::Cell(Position::SELECTOR)).is_none());

    assert_eq!(grid.cell_context_menu(Position::SELECTOR, false), Ok(false));
    assert!(grid.menu_registry().is_empty());
    assert!(grid.events().is_empty());
}

#[test]
fn test_no_gutter_when_rows_are_not_removable() {
    let config = GridConfig {
        removable_rows: false,
        ..GridConfig::default()
    };
    let mut grid = GridState::from_dataset(people(), config);
    assert!(grid.cell(Position::SELECTOR).is_none());
    assert_eq!(
        grid.cell_context_menu(Position::SELECTOR, false),
        Err(GridError::UnknownCell(Position::SELECTOR))
    );
}

#[test]
fn test_selector_space_toggles_row() {
    let mut grid = grid();
    let control = grid
        .key_down(FocusTarget::Selector { row: 1 }, KeyInput::char(' '))
        .unwrap();

    assert!(control.prevent_default);
    assert!(grid.is_row_selected(1));
    assert_eq!(
        grid.drain_events(),
        vec![GridEvent::RowSelected {
            index: 1,
            row: vec![CellValue::from("Bob"), CellValue::Null],
            selected: true,
        }]
    );

    grid.toggle_row_selection(1).unwrap();
    assert!(!grid.is_row_selected(1));
}

#[test]
fn test_remove_selected_rows() {
    let mut grid = grid();
    grid.toggle_row_selection(0).unwrap();
    grid.drain_events();

    assert_eq!(grid.remove_selected_rows(), vec![0]);
    assert_eq!(
        grid.drain_events(),
        vec![GridEvent::RowRemoved(RowEvent {
            index: 0,
            row: vec![
                CellValue::from("Alice"),
                CellValue::from("alice@example.com"),
            ],
        })]
    );
    assert_eq!(grid.row_count(), 1);
    assert!(grid.selected_rows().is_empty());

    let moved = grid.cell(Position::at(0, 0)).unwrap();
    assert_eq!(moved.value(), &CellValue::from("Bob"));
    assert_eq!(moved.position(), Position::at(0, 0));
    assert_eq!(
        moved.menu().unwrap().id(),
        MenuId::Cell(Position::at(0, 0))
    );
}

#[test]
fn test_rows_not_removable_when_disabled() {
    let config = GridConfig {
        removable_rows: false,
        ..GridConfig::default()
    };
    let mut grid = GridState::from_dataset(people(), config);
    grid.toggle_row_selection(0).unwrap();
    grid.drain_events();

    assert!(grid.remove_selected_rows().is_empty());
    assert_eq!(grid.row_count(), 2);
    assert!(grid.events().is_empty());
    assert!(!grid.navigator().has_selector);
}

#[test]
fn test_add_row_appends_null_cells() {
    let mut grid = grid();
    assert_eq!(grid.add_row(), 2);
    assert_eq!(
        grid.drain_events(),
        vec![GridEvent::RowAdded(RowEvent {
            index: 2,
            row: vec![CellValue::Null, CellValue::Null],
        })]
    );
    assert_eq!(grid.row_values(2), Some(vec![CellValue::Null, CellValue::Null]));
}

#[test]
fn test_replace_row() {
    let mut grid = grid();
    grid.replace_row(1, vec![CellValue::from("Carol")]).unwrap();

    assert_eq!(
        grid.drain_events(),
        vec![GridEvent::RowUpdated(RowEvent {
            index: 1,
            row: vec![CellValue::from("Carol"), CellValue::Null],
        })]
    );
    assert!(!grid.cell(Position::at(1, 0)).unwrap().dirty());
    assert_eq!(
        grid.replace_row(9, Vec::new()).unwrap_err(),
        GridError::UnknownRow(9)
    );
}

#[test]
fn test_add_column_requires_name() {
    let mut grid = grid();
    assert_eq!(grid.add_column("  ").unwrap_err(), GridError::MissingColumnName);
    assert!(grid.events().is_empty());

    assert_eq!(grid.add_column("age").unwrap(), 2);
    assert_eq!(
        grid.drain_events(),
        vec![GridEvent::ColumnAdded(ColumnEvent::bare("age"))]
    );
    assert_eq!(grid.column_count(), 3);
    assert_eq!(
        grid.cell(Position::at(1, 2)).unwrap().value(),
        &CellValue::Null
    );
}

#[test]
fn test_remove_column_shifts_cells() {
    let mut grid = grid();
    grid.remove_column(0).unwrap();
    assert_eq!(grid.column_count(), 1);
    assert_eq!(grid.column(0).unwrap().name(), "email");
    assert_eq!(grid.column(0).unwrap().index(), 0);
    assert_eq!(
        grid.cell(Position::at(0, 0)).unwrap().value(),
        &CellValue::from("alice@example.com")
    );
    assert_eq!(grid.remove_column(5).unwrap_err(), GridError::UnknownColumn(5));
}

#[test]
fn test_header_click_and_sort() {
    let mut grid = grid();
    grid.header_click(0, HeaderClickTarget::Body).unwrap();
    assert_eq!(
        grid.drain_events(),
        vec![GridEvent::ColumnUpdated(ColumnEvent::action(
            "name",
            "sort:alphabetical:ascending"
        ))]
    );

    grid.sort_by_column("name", SortOrder::Desc).unwrap();
    assert_eq!(
        grid.cell(Position::at(0, 0)).unwrap().value(),
        &CellValue::from("Bob")
    );
    assert_eq!(
        SortOrder::from_action("sort:alphabetical:descending"),
        Some(SortOrder::Desc)
    );
}

#[test]
fn test_sort_keeps_dirty_values_with_their_row() {
    let mut grid = grid();
    grid.paste(Position::at(0, 1), "changed").unwrap();
    grid.sort_by_column("name", SortOrder::Desc).unwrap();

    let moved = grid.cell(Position::at(1, 1)).unwrap();
    assert_eq!(moved.value(), &CellValue::from("changed"));
    assert!(moved.dirty());
}

#[test]
fn test_resize_events() {
    let mut grid = grid();
    grid.column_resize_start(0).unwrap();
    grid.column_resize(0, 40.0).unwrap();
    grid.column_resize_end(0).unwrap();

    assert_eq!(
        grid.drain_events(),
        vec![
            GridEvent::ResizeStart { column: 0 },
            GridEvent::Resize {
                column: 0,
                delta: 40.0,
            },
            GridEvent::ResizeEnd { column: 0 },
        ]
    );
    assert_eq!(grid.column(0).unwrap().width(), Some(200.0));
}

#[test]
fn test_rename_column_through_menu() {
    let mut grid = grid();
    let id = MenuId::Column(1);
    grid.header_context_menu(1).unwrap();
    grid.drain_events();

    grid.menu_item_click(id, Some("rename")).unwrap();
    assert_eq!(
        grid.drain_effects(),
        vec![Effect::FocusEditor(EditorId::Column(1))]
    );
    assert!(grid.column(1).unwrap().is_renaming());

    grid.header_rename_input(1, "mail").unwrap();
    grid.header_blur(1).unwrap();
    let events = grid.drain_events();
    assert_eq!(
        events.last(),
        Some(&GridEvent::ColumnRenamed(ColumnEvent::rename("email", "mail")))
    );
}

#[test]
fn test_readonly_grid_blocks_editing() {
    let config = GridConfig {
        readonly: true,
        ..GridConfig::default()
    };
    let mut grid = GridState::from_dataset(people(), config);

    grid.key_down(cell(0, 0), KeyInput::char('b')).unwrap();
    grid.paste(Position::at(0, 0), "42").unwrap();
    assert!(grid.events().is_empty());

    let options = grid.cell(Position::at(0, 0)).unwrap().menu_options();
    assert_eq!(options.len(), 1);
    assert_eq!(options[0].value, "copy");
    assert!(grid.column(0).unwrap().is_readonly());
}

#[test]
fn test_paste_through_grid() {
    let mut grid = grid();
    grid.paste(Position::at(1, 1), "42").unwrap();

    assert_eq!(
        grid.drain_events(),
        vec![GridEvent::CellUpdated {
            position: Position::at(1, 1),
            value: CellValue::from("42"),
        }]
    );
    assert!(!grid.cell(Position::at(1, 1)).unwrap().is_editing());
}

#[test]
fn test_unknown_cell_is_rejected() {
    let mut grid = grid();
    assert_eq!(
        grid.cell_input(Position::at(7, 7), "x").unwrap_err(),
        GridError::UnknownCell(Position::at(7, 7))
    );
    assert_eq!(
        grid.menu_trigger(MenuId::Column(9)).unwrap_err(),
        GridError::UnknownMenu(MenuId::Column(9))
    );
}

#[test]
fn test_replace_dataset_closes_menus_and_clears_focus() {
    let mut grid = grid();
    grid.cell_context_menu(Position::at(0, 0), false).unwrap();
    grid.cell_double_click(Position::at(0, 1), false).unwrap();

    grid.replace_dataset(Dataset::new(
        vec!["id".to_string()],
        vec![vec![CellValue::Number(1.into())]],
    ));
    assert!(grid.menu_registry().is_empty());
    assert_eq!(grid.focus(), None);
    assert_eq!(grid.column_count(), 1);
    assert!(!grid.cell(Position::at(0, 0)).unwrap().is_editing());
}

#[test]
fn test_schema_sets_column_kind() {
    let schema = BTreeMap::from([
        ("active".to_string(), "BOOLEAN".to_string()),
        ("meta".to_string(), "jsonb".to_string()),
    ]);
    let dataset = Dataset::new(
        vec!["active".to_string(), "meta".to_string(), "note".to_string()],
        vec![vec![
            CellValue::Bool(true),
            CellValue::from(json!({"k": 1})),
            CellValue::from("hi"),
        ]],
    )
    .with_schema(schema);
    let grid = GridState::from_dataset(dataset, GridConfig::default());

    assert_eq!(
        grid.cell(Position::at(0, 0)).unwrap().kind(),
        &ColumnKind::Boolean
    );
    assert_eq!(grid.cell(Position::at(0, 1)).unwrap().kind(), &ColumnKind::Json);
    assert_eq!(grid.cell(Position::at(0, 2)).unwrap().kind(), &ColumnKind::Other);
}

#[test]
fn test_events_serialize_with_kebab_case_type() {
    let event = GridEvent::ColumnRenamed(ColumnEvent::rename("email", "mail"));
    assert_eq!(event.name(), "column-renamed");
    assert_eq!(
        serde_json::to_value(&event).unwrap(),
        json!({"type": "column-renamed", "name": "email", "data": {"name": "mail"}})
    );

    let updated = GridEvent::CellUpdated {
        position: Position::at(1, 2),
        value: CellValue::Undefined,
    };
    assert_eq!(
        serde_json::to_value(&updated).unwrap(),
        json!({"type": "cell-updated", "position": {"row": 1, "column": 2}, "value": null})
    );
}

use dioxus::prelude::*;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

use crate::state::cell::{Cell, CellView};
use crate::state::data_model::{CellValue, NULL_PLACEHOLDER};
use crate::state::effects::EditorId;
use crate::state::events::MenuId;
use crate::state::grid::{EventControl, GridState};
use crate::state::navigator::FocusTarget;
use crate::state::plugin::PluginAction;
use crate::state::position::Position;
use crate::ui::actions;
use crate::ui::keyboard::key_input;
use crate::ui::menu::MenuView;

/// Custom DOM events a plugin element may dispatch on its host.
const PLUGIN_EVENTS: &str = r#"["edit-start", "edit-stop", "edit-cancel", "update-cell"]"#;

#[derive(Debug, Deserialize)]
struct PluginMessage {
    action: String,
    #[serde(default)]
    value: Value,
}

#[component]
pub fn GridCell(grid: Signal<GridState>, row: usize, column: usize) -> Element {
    let position = Position::at(row, column);
    let target = FocusTarget::Cell { row, column };

    let (view, class) = {
        let state = grid.read();
        let Some(cell) = state.cell(position) else {
            return rsx! {};
        };
        let mut class = String::from("cell");
        if cell.dirty() && !state.config().hide_dirt {
            class.push_str(" dirty");
        }
        if cell.is_readonly() {
            class.push_str(" readonly");
        }
        if cell.is_editing() {
            class.push_str(" editing");
        }
        if state.focus() == Some(target) {
            class.push_str(" focused");
        }
        (cell.view(), class)
    };
    let has_menu = matches!(view, CellView::Value(_) | CellView::Null | CellView::Plugin { .. });

    rsx! {
        td {
            id: position.dom_id(),
            class: "{class}",
            tabindex: "0",
            onclick: move |_| {
                actions::dispatch(grid, |state| state.cell_click(position));
            },
            ondoubleclick: move |_| {
                actions::dispatch(grid, |state| state.cell_double_click(position, false));
            },
            oncontextmenu: move |evt| {
                if actions::dispatch(grid, |state| state.cell_context_menu(position, false)) == Some(true) {
                    evt.prevent_default();
                }
            },
            onkeydown: move |evt| {
                let key = key_input(&evt);
                if let Some(control) = actions::dispatch(grid, |state| state.key_down(target, key)) {
                    apply_control(&evt, control);
                }
            },
            {
                match view {
                    CellView::Blank => rsx! {},
                    CellView::Editing { text, readonly_input } => rsx! {
                        input {
                            id: EditorId::Cell(position).dom_id(),
                            class: "cell-input",
                            value: "{text}",
                            readonly: readonly_input,
                            oninput: move |evt| {
                                let text = evt.value();
                                actions::dispatch(grid, |state| state.cell_input(position, &text));
                            },
                            onblur: move |_| {
                                actions::dispatch(grid, |state| state.cell_blur(position));
                            },
                        }
                    },
                    CellView::Plugin { markup, editor_markup } => rsx! {
                        PluginHost { grid, position, markup, editor_markup }
                    },
                    CellView::Value(text) => rsx! {
                        span { class: "cell-value", "{text}" }
                    },
                    CellView::Null => rsx! {
                        span { class: "cell-value null", "{NULL_PLACEHOLDER}" }
                    },
                }
            }
            if has_menu {
                MenuView { grid, id: MenuId::Cell(position) }
            }
        }
    }
}

/// The row gutter: a blank cell whose content is whatever the row puts in it.
#[component]
pub fn BlankCell(grid: Signal<GridState>, children: Element) -> Element {
    let view = grid.read().cell(Position::SELECTOR).map(Cell::view);

    rsx! {
        td {
            class: "cell blank selector",
            oncontextmenu: move |evt| {
                if actions::dispatch(grid, |state| state.cell_context_menu(Position::SELECTOR, false)) == Some(true) {
                    evt.prevent_default();
                }
            },
            if view == Some(CellView::Blank) {
                {children}
            }
        }
    }
}

pub(crate) fn apply_control(evt: &KeyboardEvent, control: EventControl) {
    if control.prevent_default {
        evt.prevent_default();
    }
    if control.stop_propagation {
        evt.stop_propagation();
    }
}

#[component]
fn PluginHost(
    grid: Signal<GridState>,
    position: Position,
    markup: String,
    editor_markup: Option<String>,
) -> Element {
    let host_id = format!("{}-plugin", position.dom_id());

    use_future({
        let host_id = host_id.clone();
        move || plugin_bridge(grid, position, host_id.clone())
    });

    rsx! {
        div { id: "{host_id}", class: "plugin-host",
            div { class: "plugin-cell", dangerous_inner_html: "{markup}" }
            if let Some(editor) = editor_markup {
                div {
                    class: "plugin-editor",
                    onclick: move |evt| {
                        evt.stop_propagation();
                        actions::dispatch(grid, |state| {
                            state.outside_interaction(true);
                            Ok(())
                        });
                    },
                    oncontextmenu: move |evt| {
                        evt.stop_propagation();
                        actions::dispatch(grid, |state| state.cell_context_menu(position, true));
                    },
                    dangerous_inner_html: "{editor}",
                }
            }
        }
    }
}

/// Forwards the plugin element's custom events to the cell until the host
/// element goes away.
async fn plugin_bridge(grid: Signal<GridState>, position: Position, host_id: String) {
    tokio::time::sleep(Duration::ZERO).await;

    let script = format!(
        r#"const host = document.getElementById({host});
        if (host) {{
            for (const name of {events}) {{
                host.addEventListener(name, (event) => {{
                    event.stopPropagation();
                    dioxus.send({{ action: name, value: event.detail?.value ?? null }});
                }});
            }}
        }}
        await new Promise(() => {{}});"#,
        host = Value::String(host_id).to_string(),
        events = PLUGIN_EVENTS,
    );
    let mut eval = document::eval(&script);

    while let Ok(message) = eval.recv::<PluginMessage>().await {
        let action = match message.action.parse::<PluginAction>() {
            Ok(action) => action,
            Err(err) => {
                tracing::warn!(%err, %position, "ignoring plugin message");
                continue;
            }
        };
        let value = CellValue::from(message.value);
        actions::dispatch(grid, |state| state.plugin_action(position, action, value));
    }
}

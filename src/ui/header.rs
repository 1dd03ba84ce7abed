use dioxus::prelude::*;

use crate::state::column::HeaderClickTarget;
use crate::state::effects::EditorId;
use crate::state::events::MenuId;
use crate::state::grid::GridState;
use crate::ui::actions;
use crate::ui::cell::apply_control;
use crate::ui::keyboard::key_input;
use crate::ui::menu::MenuView;

/// A column resize in progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizeDrag {
    pub column: usize,
    pub start_x: f64,
}

#[component]
pub fn HeaderCell(grid: Signal<GridState>, index: usize, resizing: Signal<Option<ResizeDrag>>) -> Element {
    let (name, renaming, class, width, resizable) = {
        let state = grid.read();
        let Some(column) = state.column(index) else {
            return rsx! {};
        };
        let mut class = String::from("column-header");
        if column.dirty() && !state.config().hide_dirt {
            class.push_str(" dirty");
        }
        if column.active_plugin().is_some() {
            class.push_str(" has-plugin");
        }
        (
            column.name().to_string(),
            column.is_renaming(),
            class,
            column.width(),
            state.config().column_resizer,
        )
    };
    let style = width.map(|width| format!("width: {width}px;")).unwrap_or_default();

    rsx! {
        th {
            id: "column-{index}",
            class: "{class}",
            style: "{style}",
            tabindex: "0",
            oncontextmenu: move |evt| {
                evt.prevent_default();
                actions::dispatch(grid, |state| state.header_context_menu(index));
            },
            onkeydown: move |evt| {
                let key = key_input(&evt);
                if let Some(control) = actions::dispatch(grid, |state| state.header_key_down(index, key)) {
                    apply_control(&evt, control);
                }
            },
            if renaming {
                input {
                    id: EditorId::Column(index).dom_id(),
                    class: "column-input",
                    value: "{name}",
                    oninput: move |evt| {
                        let text = evt.value();
                        actions::dispatch(grid, |state| state.header_rename_input(index, &text));
                    },
                    onblur: move |_| {
                        actions::dispatch(grid, |state| state.header_blur(index));
                    },
                }
            } else {
                span {
                    class: "column-name",
                    onclick: move |_| {
                        actions::dispatch(grid, |state| state.header_click(index, HeaderClickTarget::Body));
                    },
                    "{name}"
                }
            }
            MenuView { grid, id: MenuId::Column(index) }
            if resizable {
                div {
                    class: "resizer",
                    onclick: move |_| {
                        actions::dispatch(grid, |state| state.header_click(index, HeaderClickTarget::Resizer));
                    },
                    onmousedown: move |evt| {
                        evt.stop_propagation();
                        evt.prevent_default();
                        resizing.set(Some(ResizeDrag {
                            column: index,
                            start_x: evt.client_coordinates().x,
                        }));
                        actions::dispatch(grid, |state| state.column_resize_start(index));
                    },
                }
            }
        }
    }
}

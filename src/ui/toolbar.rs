use dioxus::prelude::*;
use std::path::PathBuf;
use std::time::Duration;

use crate::state::grid::GridState;
use crate::ui::actions;

#[component]
pub fn Toolbar(
    grid: Signal<GridState>,
    file_path: Signal<Option<PathBuf>>,
    error_message: Signal<Option<String>>,
) -> Element {
    let mut new_column = use_signal(String::new);
    let mut load_success = use_signal(|| false);

    let (selected_count, removable) = {
        let state = grid.read();
        (state.selected_rows().len(), state.config().removable_rows)
    };

    rsx! {
        div { class: "toolbar",
            // File group
            div { class: "toolbar-group",
                button {
                    class: "toolbar-btn",
                    id: "btn-open",
                    onclick: move |_| {
                        spawn(async move {
                            if actions::open_dataset(grid, file_path, error_message).await {
                                load_success.set(true);
                                tokio::time::sleep(Duration::from_secs(2)).await;
                                load_success.set(false);
                            }
                        });
                    },
                    "\u{1F4C2} Open"
                }
                if *load_success.read() {
                    span { class: "load-success", "\u{2714} Loaded" }
                }
            }
            div { class: "toolbar-separator" }

            // Row/Column group
            div { class: "toolbar-group",
                button {
                    class: "toolbar-btn",
                    id: "btn-add-row",
                    onclick: move |_| {
                        actions::dispatch(grid, |state| Ok(state.add_row()));
                        error_message.set(None);
                    },
                    "\u{2795} Add row"
                }
                if removable {
                    button {
                        class: "toolbar-btn toolbar-btn-danger",
                        id: "btn-remove-rows",
                        disabled: selected_count == 0,
                        onclick: move |_| {
                            actions::dispatch(grid, |state| Ok(state.remove_selected_rows()));
                        },
                        "\u{1F5D1} Remove selected ({selected_count})"
                    }
                }
                input {
                    class: "toolbar-input",
                    id: "input-new-column",
                    placeholder: "New column name",
                    value: "{new_column.read()}",
                    oninput: move |evt| {
                        new_column.set(evt.value());
                    }
                }
                button {
                    class: "toolbar-btn",
                    id: "btn-add-column",
                    onclick: move |_| {
                        let name = new_column.read().clone();
                        let added = grid.with_mut(|state| state.add_column(&name));
                        actions::flush(grid);
                        match added {
                            Ok(_) => {
                                new_column.set(String::new());
                                error_message.set(None);
                            }
                            Err(err) => error_message.set(Some(err.to_string())),
                        }
                    },
                    "\u{2795} Add column"
                }
            }

            // Info area (right-aligned)
            div { class: "toolbar-info",
                if let Some(path) = file_path.read().as_ref() {
                    span { class: "file-path", "{path.display()}" }
                }
                if let Some(err) = error_message.read().as_ref() {
                    span { class: "error-message", "{err}" }
                }
            }
        }
    }
}

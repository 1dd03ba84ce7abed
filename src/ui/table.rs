use dioxus::prelude::*;

use crate::state::grid::GridState;
use crate::ui::actions;
use crate::ui::cell::GridCell;
use crate::ui::checkbox::RowSelector;
use crate::ui::header::{HeaderCell, ResizeDrag};

#[component]
pub fn Table(grid: Signal<GridState>) -> Element {
    let mut resizing = use_signal::<Option<ResizeDrag>>(|| None);

    let (theme, row_count, column_count, has_selector) = {
        let state = grid.read();
        (
            state.config().theme.class(),
            state.row_count(),
            state.column_count(),
            state.config().removable_rows,
        )
    };

    if column_count == 0 {
        return rsx! {
            p { class: "empty-message", id: "empty-message", "No data loaded. Click \"Open\" to load a JSON file." }
        };
    }

    rsx! {
        div {
            class: "table-container {theme}",
            id: "table-container",
            // Reached by every click nothing stopped: dismisses menus it did not open.
            onclick: move |_| {
                actions::dispatch(grid, |state| {
                    state.outside_interaction(false);
                    Ok(())
                });
            },
            onmousemove: move |evt| {
                let drag = *resizing.read();
                if let Some(drag) = drag {
                    let delta = evt.client_coordinates().x - drag.start_x;
                    actions::dispatch(grid, |state| state.column_resize(drag.column, delta));
                }
            },
            onmouseup: move |_| {
                let drag = *resizing.read();
                if let Some(drag) = drag {
                    resizing.set(None);
                    actions::dispatch(grid, |state| state.column_resize_end(drag.column));
                }
            },
            table {
                thead {
                    tr {
                        if has_selector {
                            th { class: "selector-header" }
                        }
                        for index in 0..column_count {
                            HeaderCell { key: "{index}", grid, index, resizing }
                        }
                    }
                }
                tbody {
                    for row in 0..row_count {
                        tr {
                            key: "{row}",
                            id: "row-{row}",
                            class: { if grid.read().is_row_selected(row) { "selected-row" } else if row % 2 == 0 { "even" } else { "odd" } },
                            if has_selector {
                                RowSelector { grid, row }
                            }
                            for column in 0..column_count {
                                GridCell { key: "{row}-{column}", grid, row, column }
                            }
                        }
                    }
                }
            }
        }
    }
}

use dioxus::prelude::*;

use crate::state::grid::GridState;
use crate::state::navigator::FocusTarget;
use crate::ui::actions;
use crate::ui::cell::{apply_control, BlankCell};
use crate::ui::keyboard::key_input;

/// Gutter cell holding a row's selection checkbox.
#[component]
pub fn RowSelector(grid: Signal<GridState>, row: usize) -> Element {
    let target = FocusTarget::Selector { row };
    let checked = grid.read().is_row_selected(row);

    rsx! {
        BlankCell { grid,
            input {
                id: target.dom_id(),
                r#type: "checkbox",
                checked,
                onclick: move |evt| {
                    evt.prevent_default();
                    actions::dispatch(grid, |state| state.toggle_row_selection(row));
                },
                onkeydown: move |evt| {
                    let key = key_input(&evt);
                    if let Some(control) = actions::dispatch(grid, |state| state.key_down(target, key)) {
                        apply_control(&evt, control);
                    }
                },
            }
        }
    }
}

use dioxus::prelude::*;

use crate::state::events::MenuId;
use crate::state::grid::GridState;
use crate::state::menu::{LabelSpan, MenuLabel, MenuOption};
use crate::ui::actions;
use crate::ui::cell::apply_control;
use crate::ui::keyboard::key_input;

#[component]
pub fn MenuView(grid: Signal<GridState>, id: MenuId) -> Element {
    let (open, focused, options) = {
        let state = grid.read();
        let Some(menu) = state.menu(id) else {
            return rsx! {};
        };
        (
            menu.is_open(),
            menu.focused().map(str::to_string),
            menu.visible_options().map(<[MenuOption]>::to_vec).unwrap_or_default(),
        )
    };

    rsx! {
        div { class: if open { "menu open" } else { "menu" },
            button {
                class: "menu-trigger",
                tabindex: "0",
                onclick: move |_| {
                    actions::dispatch(grid, |state| state.menu_trigger(id));
                },
                onkeydown: move |evt| {
                    let key = key_input(&evt);
                    if let Some(control) = actions::dispatch(grid, |state| state.menu_key_down(id, key)) {
                        apply_control(&evt, control);
                    }
                },
                "\u{22EE}"
            }
            if open {
                ul { class: "menu-list", role: "menu",
                    for option in options {
                        MenuItem {
                            key: "{option.label.plain_text()}",
                            grid,
                            id,
                            focused: focused.as_deref() == Some(option.value.as_str()),
                            option: option.clone(),
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn MenuItem(grid: Signal<GridState>, id: MenuId, option: MenuOption, focused: bool) -> Element {
    let mut class = String::from("menu-item");
    if focused {
        class.push_str(" focused");
    }
    if let Some(extra) = &option.classes {
        class.push(' ');
        class.push_str(extra);
    }
    let value = option.value.clone();

    rsx! {
        li {
            class: "{class}",
            role: "menuitem",
            onclick: move |evt| {
                let control = actions::dispatch(grid, |state| state.menu_item_click(id, Some(&value)));
                if control.is_some_and(|control| control.stop_propagation) {
                    evt.stop_propagation();
                }
            },
            {render_label(&option.label)}
        }
    }
}

fn render_label(label: &MenuLabel) -> Element {
    match label {
        MenuLabel::Text(text) => rsx! { "{text}" },
        MenuLabel::Fragment(spans) => rsx! {
            for part in spans.iter() {
                {render_span(part)}
            }
        },
    }
}

fn render_span(part: &LabelSpan) -> Element {
    match part {
        LabelSpan::Text(text) => rsx! { span { "{text}" } },
        LabelSpan::Emphasis(text) => rsx! { em { "{text}" } },
        LabelSpan::SubmenuCaret => rsx! { span { class: "submenu-caret", "\u{25B8}" } },
    }
}

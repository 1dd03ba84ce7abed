use dioxus::prelude::{Key, Modifiers, *};

use crate::state::keys::{KeyInput, KeyName};

/// Converts a DOM key press into the grid's key model.
pub fn key_input(evt: &KeyboardEvent) -> KeyInput {
    let modifiers = evt.modifiers();
    KeyInput {
        key: key_name(&evt.key()),
        shift: modifiers.contains(Modifiers::SHIFT),
        meta: modifiers.contains(Modifiers::META),
        ctrl: modifiers.contains(Modifiers::CONTROL),
    }
}

fn key_name(key: &Key) -> KeyName {
    match key {
        Key::Enter => KeyName::Enter,
        Key::Escape => KeyName::Escape,
        Key::Tab => KeyName::Tab,
        Key::Backspace => KeyName::Backspace,
        Key::Delete => KeyName::Delete,
        Key::ArrowUp => KeyName::ArrowUp,
        Key::ArrowDown => KeyName::ArrowDown,
        Key::ArrowLeft => KeyName::ArrowLeft,
        Key::ArrowRight => KeyName::ArrowRight,
        Key::Character(text) => {
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => KeyName::Char(ch),
                _ => KeyName::Other,
            }
        }
        _ => KeyName::Other,
    }
}

use crate::state::error::GridError;
use crate::state::events::MenuId;
use crate::state::keys::{KeyInput, KeyName};
use crate::state::menu_registry::{InteractionId, MenuRegistry};

/// A piece of a rich menu label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LabelSpan {
    Text(String),
    /// Rendered italic, e.g. the value in "Revert to <value>".
    Emphasis(String),
    /// Trailing arrow on entries that open a submenu.
    SubmenuCaret,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuLabel {
    Text(String),
    Fragment(Vec<LabelSpan>),
}

impl MenuLabel {
    /// Label as plain text. Also the stable key when rendering the list.
    pub fn plain_text(&self) -> String {
        match self {
            MenuLabel::Text(text) => text.clone(),
            MenuLabel::Fragment(spans) => spans
                .iter()
                .filter_map(|span| match span {
                    LabelSpan::Text(text) | LabelSpan::Emphasis(text) => Some(text.as_str()),
                    LabelSpan::SubmenuCaret => None,
                })
                .collect::<Vec<_>>()
                .join(""),
        }
    }
}

impl From<&str> for MenuLabel {
    fn from(text: &str) -> Self {
        MenuLabel::Text(text.to_string())
    }
}

impl From<String> for MenuLabel {
    fn from(text: String) -> Self {
        MenuLabel::Text(text)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuOption {
    pub label: MenuLabel,
    pub value: String,
    pub options: Option<Vec<MenuOption>>,
    pub classes: Option<String>,
}

impl MenuOption {
    pub fn new(label: impl Into<MenuLabel>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            options: None,
            classes: None,
        }
    }

    pub fn with_options(mut self, options: Vec<MenuOption>) -> Self {
        self.options = Some(options);
        self
    }

    pub fn with_classes(mut self, classes: impl Into<String>) -> Self {
        self.classes = Some(classes.into());
        self
    }

    pub fn is_submenu(&self) -> bool {
        self.options.as_ref().is_some_and(|options| !options.is_empty())
    }
}

/// Result of picking an option.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuSelect {
    /// Drilled into a submenu; the menu stays open and nothing is emitted.
    Submenu,
    /// A leaf was chosen.
    Leaf(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MenuKeyOutcome {
    /// The menu consumed the key; its owner must not act on it as well.
    pub handled: bool,
    pub prevent_default: bool,
    /// Menus displaced because this key opened the menu.
    pub displaced: Vec<MenuId>,
    pub selected: Option<MenuSelect>,
}

/// Popup menu with drill-down submenus.
#[derive(Clone, Debug, PartialEq)]
pub struct Menu {
    id: MenuId,
    open: bool,
    options: Vec<MenuOption>,
    active: Vec<MenuOption>,
    history: Vec<Vec<MenuOption>>,
    focused: Option<String>,
    selection: Option<String>,
}

impl Menu {
    pub fn new(id: MenuId, options: Vec<MenuOption>) -> Self {
        Self {
            id,
            open: false,
            active: options.clone(),
            options,
            history: Vec::new(),
            focused: None,
            selection: None,
        }
    }

    pub fn id(&self) -> MenuId {
        self.id
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn options(&self) -> &[MenuOption] {
        &self.options
    }

    pub fn active_options(&self) -> &[MenuOption] {
        &self.active
    }

    /// Options to render; nothing while closed.
    pub fn visible_options(&self) -> Option<&[MenuOption]> {
        self.open.then_some(self.active.as_slice())
    }

    pub fn depth(&self) -> usize {
        self.history.len()
    }

    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    /// Replaces the root options. Inside a submenu the current level stays put
    /// and the new root is restored when the menu collapses.
    pub fn set_options(&mut self, options: Vec<MenuOption>) {
        if self.history.is_empty() {
            self.active = options.clone();
        } else {
            self.history[0] = options.clone();
        }
        self.options = options;
    }

    /// Opens the menu and returns the menus it displaced.
    pub fn open(
        &mut self,
        registry: &mut MenuRegistry,
        activation: Option<InteractionId>,
    ) -> Vec<MenuId> {
        if self.open {
            return Vec::new();
        }
        self.open = true;
        registry.register(self.id, activation)
    }

    pub fn close(&mut self, registry: &mut MenuRegistry) {
        registry.deregister(self.id);
        if !self.open {
            return;
        }
        self.open = false;
        self.collapse();
        self.focused = None;
    }

    /// Click on the trigger.
    pub fn trigger(&mut self, registry: &mut MenuRegistry, interaction: InteractionId) -> Vec<MenuId> {
        if self.open {
            self.close(registry);
            Vec::new()
        } else {
            self.open(registry, Some(interaction))
        }
    }

    /// Picks the option with `value` from the current level. A leaf is only
    /// reported; see [`Menu::record_selection`].
    pub fn select(&mut self, value: &str) -> Result<MenuSelect, GridError> {
        if value.is_empty() {
            return Err(GridError::MissingSelectionValue);
        }

        let submenu = self
            .active
            .iter()
            .find(|option| option.value == value && option.is_submenu())
            .and_then(|option| option.options.clone());

        if let Some(submenu) = submenu {
            let current = std::mem::replace(&mut self.active, submenu);
            self.history.push(current);
            self.focused = None;
            return Ok(MenuSelect::Submenu);
        }

        Ok(MenuSelect::Leaf(value.to_string()))
    }

    /// Remembers a leaf once its owner has acted on it.
    pub fn record_selection(&mut self, value: impl Into<String>) {
        self.selection = Some(value.into());
    }

    pub fn key_down(&mut self, key: KeyInput, registry: &mut MenuRegistry) -> MenuKeyOutcome {
        let mut outcome = MenuKeyOutcome {
            handled: true,
            ..MenuKeyOutcome::default()
        };

        match key.key {
            KeyName::Escape => self.close(registry),
            _ if key.is_activation() => {
                outcome.prevent_default = true;
                if self.open {
                    if let Some(focused) = self.focused.clone() {
                        outcome.selected = self.select(&focused).ok();
                    }
                    self.close(registry);
                } else {
                    outcome.displaced = self.open(registry, None);
                }
            }
            KeyName::ArrowDown | KeyName::ArrowRight => {
                outcome.prevent_default = true;
                self.focus_next();
            }
            KeyName::ArrowUp | KeyName::ArrowLeft => {
                outcome.prevent_default = true;
                self.focus_previous();
            }
            KeyName::Tab => outcome.prevent_default = self.open,
            _ => outcome.handled = false,
        }

        outcome
    }

    pub fn focus_next(&mut self) {
        let len = self.active.len();
        if len == 0 {
            return;
        }
        let next = match self.focused_index() {
            Some(idx) => (idx + 1) % len,
            None => 0,
        };
        self.focused = Some(self.active[next].value.clone());
    }

    pub fn focus_previous(&mut self) {
        let len = self.active.len();
        if len == 0 {
            return;
        }
        let previous = match self.focused_index() {
            Some(0) | None => len - 1,
            Some(idx) => idx - 1,
        };
        self.focused = Some(self.active[previous].value.clone());
    }

    fn focused_index(&self) -> Option<usize> {
        let focused = self.focused.as_deref()?;
        self.active.iter().position(|option| option.value == focused)
    }

    fn collapse(&mut self) {
        if !self.history.is_empty() {
            self.history.clear();
            self.active = self.options.clone();
        }
    }
}

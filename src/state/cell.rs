use crate::state::data_model::{CellValue, ColumnKind, NULL_PLACEHOLDER};
use crate::state::effects::{EditorId, Effect, Movement, Reaction};
use crate::state::events::{GridEvent, MenuId};
use crate::state::keys::{KeyInput, KeyName};
use crate::state::menu::{LabelSpan, Menu, MenuLabel, MenuOption};
use crate::state::mutable_value::{MutableValue, ValueChanged};
use crate::state::plugin::{editor_tag_name, render_plugin_tag, ColumnPlugin, PluginAction};
use crate::state::position::Position;

pub const ACTION_EDIT: &str = "edit";
pub const ACTION_COPY: &str = "copy";
pub const ACTION_PASTE: &str = "paste";
pub const ACTION_CLEAR: &str = "clear";
pub const ACTION_RESET: &str = "reset";

/// What a cell renders right now.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CellView {
    /// Structural placeholder; renders only its children.
    Blank,
    Editing {
        text: String,
        /// Boolean cells show the input but do not accept typing.
        readonly_input: bool,
    },
    Plugin {
        markup: String,
        editor_markup: Option<String>,
    },
    Value(String),
    Null,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    position: Position,
    blank: bool,
    field: MutableValue<CellValue>,
    kind: ColumnKind,
    plugin: Option<ColumnPlugin>,
    plugin_attributes: String,
    displaying_plugin_editor: bool,
    menu: Option<Menu>,
}

impl Default for Cell {
    fn default() -> Self {
        Self::blank()
    }
}

impl Cell {
    pub fn new(position: Position, value: CellValue) -> Self {
        let mut cell = Self {
            position,
            blank: false,
            field: MutableValue::new(value),
            kind: ColumnKind::Other,
            plugin: None,
            plugin_attributes: String::new(),
            displaying_plugin_editor: false,
            menu: Some(Menu::new(MenuId::Cell(position), Vec::new())),
        };
        cell.refresh_menu();
        cell
    }

    /// A selector-gutter cell: no value, no editor, no menu.
    pub fn blank() -> Self {
        Self {
            position: Position::SELECTOR,
            blank: true,
            field: MutableValue::new(CellValue::Undefined).readonly(true),
            kind: ColumnKind::Other,
            plugin: None,
            plugin_attributes: String::new(),
            displaying_plugin_editor: false,
            menu: None,
        }
    }

    pub fn with_original(mut self, original: CellValue) -> Self {
        self.field = MutableValue::with_original(self.field.value().clone(), original)
            .readonly(self.field.is_readonly());
        self.refresh_menu();
        self
    }

    pub fn with_kind(mut self, kind: ColumnKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_readonly(mut self, readonly: bool) -> Self {
        self.set_readonly(readonly);
        self
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn is_blank(&self) -> bool {
        self.blank
    }

    pub fn value(&self) -> &CellValue {
        self.field.value()
    }

    pub fn original_value(&self) -> &CellValue {
        self.field.original()
    }

    pub fn dirty(&self) -> bool {
        !self.blank && self.field.dirty()
    }

    pub fn is_editing(&self) -> bool {
        self.field.is_editing()
    }

    pub fn is_readonly(&self) -> bool {
        self.field.is_readonly()
    }

    pub fn kind(&self) -> &ColumnKind {
        &self.kind
    }

    pub fn plugin(&self) -> Option<&ColumnPlugin> {
        self.plugin.as_ref()
    }

    pub fn is_displaying_plugin_editor(&self) -> bool {
        self.displaying_plugin_editor
    }

    pub fn menu(&self) -> Option<&Menu> {
        self.menu.as_ref()
    }

    pub(crate) fn menu_mut(&mut self) -> Option<&mut Menu> {
        self.menu.as_mut()
    }

    pub fn set_readonly(&mut self, readonly: bool) {
        if self.blank {
            return;
        }
        self.field.set_readonly(readonly);
        self.refresh_menu();
    }

    pub fn set_plugin(&mut self, plugin: Option<ColumnPlugin>, attributes: impl Into<String>) {
        self.plugin = plugin;
        self.plugin_attributes = attributes.into();
        self.displaying_plugin_editor = false;
    }

    /// Base actions, reduced to Copy when read-only, plus Revert when dirty.
    pub fn menu_options(&self) -> Vec<MenuOption> {
        let mut options = if self.field.is_readonly() {
            vec![MenuOption::new("Copy", ACTION_COPY)]
        } else {
            vec![
                MenuOption::new("Edit", ACTION_EDIT),
                MenuOption::new("Copy", ACTION_COPY),
                MenuOption::new("Paste", ACTION_PASTE),
                MenuOption::new("Clear", ACTION_CLEAR),
            ]
        };

        if self.dirty() {
            options.push(MenuOption::new(self.revert_label(), ACTION_RESET));
        }
        options
    }

    pub fn view(&self) -> CellView {
        if self.blank {
            return CellView::Blank;
        }

        if self.field.is_editing() {
            return CellView::Editing {
                text: self.value().edit_text(),
                readonly_input: self.kind == ColumnKind::Boolean || self.field.is_readonly(),
            };
        }

        if let Some(plugin) = &self.plugin {
            let cell_value = self.value().edit_text();
            let markup = render_plugin_tag(
                &plugin.tag_name,
                &cell_value,
                &plugin.config,
                &self.plugin_attributes,
            );
            let editor_markup = self.displaying_plugin_editor.then(|| {
                render_plugin_tag(
                    &editor_tag_name(&plugin.tag_name),
                    &cell_value,
                    &plugin.config,
                    &self.plugin_attributes,
                )
            });
            return CellView::Plugin {
                markup,
                editor_markup,
            };
        }

        match self.value().display_text() {
            Some(text) => CellView::Value(text),
            None => CellView::Null,
        }
    }

    /// Whether a right-click here should open the menu.
    pub fn accepts_context_menu(&self, inside_plugin_editor: bool) -> bool {
        !self.blank && !inside_plugin_editor && self.menu.is_some()
    }

    pub fn begin_edit(&mut self) -> Reaction {
        if self.blank {
            return Reaction::none();
        }
        match self.field.begin_edit() {
            Some(_) => Reaction::none().effect(Effect::FocusEditor(EditorId::Cell(self.position))),
            None => Reaction::none(),
        }
    }

    pub fn double_click(&mut self, from_plugin: bool) -> Reaction {
        if self.field.is_editing() || from_plugin || self.plugin.is_some() {
            return Reaction::none();
        }
        self.begin_edit()
    }

    /// Text typed into the editor input.
    pub fn input(&mut self, text: &str) -> Reaction {
        if self.blank || self.field.is_readonly() || self.kind == ColumnKind::Boolean {
            return Reaction::none();
        }
        self.apply(CellValue::String(text.to_string()))
    }

    pub fn blur(&mut self) {
        self.field.cancel_edit();
    }

    /// Clipboard text pasted onto the cell. Never enters edit mode.
    pub fn paste(&mut self, text: &str) -> Reaction {
        if self.blank || self.field.is_readonly() {
            return Reaction::none();
        }
        self.apply(CellValue::String(text.to_string()))
    }

    pub fn key_down(&mut self, key: KeyInput) -> Reaction {
        if self.blank {
            return Reaction::none();
        }

        if self.plugin.is_some() && key.key == KeyName::Enter {
            return Reaction::none().moving(Movement::NextRow);
        }

        if self.field.is_editing() {
            return match key.key {
                KeyName::Enter => {
                    self.field.cancel_edit();
                    Reaction::prevented()
                }
                KeyName::Escape => {
                    self.field.cancel_edit();
                    Reaction::none()
                }
                _ => Reaction::none(),
            };
        }

        if key.is_activation() {
            if self.field.is_readonly() {
                return Reaction::none();
            }
            let mut reaction = self.begin_edit();
            reaction.prevent_default = true;
            return reaction;
        }

        if key.is_copy() {
            return Reaction::prevented().effect(Effect::WriteClipboard(self.value().clipboard_text()));
        }

        if key.is_paste() {
            if self.field.is_readonly() {
                return Reaction::none();
            }
            return Reaction::prevented().effect(Effect::ReadClipboard(self.position));
        }

        if let Some(ch) = key.seed_char() {
            if self.kind.accepts_typing() && !self.field.is_readonly() {
                let seeded = self.value().with_appended(ch);
                let mut reaction = self.begin_edit();
                reaction.merge(self.apply(seeded));
                reaction.prevent_default = true;
                return reaction;
            }
        }

        if let Some(direction) = key.direction() {
            return Reaction::prevented().moving(Movement::Step(direction));
        }

        if matches!(key.key, KeyName::Backspace | KeyName::Delete) && !self.field.is_readonly() {
            let mut reaction = self.apply(CellValue::Undefined);
            reaction.prevent_default = true;
            return reaction;
        }

        Reaction::none()
    }

    pub fn menu_selection(&mut self, value: &str) -> Reaction {
        match value {
            ACTION_EDIT => self.begin_edit(),
            ACTION_COPY => {
                Reaction::none().effect(Effect::WriteClipboard(self.value().clipboard_text()))
            }
            ACTION_PASTE if !self.field.is_readonly() => {
                Reaction::none().effect(Effect::ReadClipboard(self.position))
            }
            ACTION_CLEAR if !self.field.is_readonly() => self.apply(CellValue::Null),
            ACTION_RESET => self.reset(),
            _ => Reaction::none(),
        }
    }

    /// Reverts to the original value; nothing happens on a clean cell.
    pub fn reset(&mut self) -> Reaction {
        let changed = self.field.reset_to_original();
        self.refresh_menu();
        match changed {
            Some(changed) => Reaction::none().event(self.updated(changed)),
            None => Reaction::none(),
        }
    }

    pub fn plugin_action(&mut self, action: PluginAction, value: CellValue) -> Reaction {
        match action {
            PluginAction::EditStart => {
                self.displaying_plugin_editor = true;
                Reaction::none()
            }
            PluginAction::EditStop | PluginAction::EditCancel => {
                self.displaying_plugin_editor = false;
                Reaction::none()
            }
            PluginAction::UpdateCell => self.apply(value),
        }
    }

    /// An outside click hides the plugin editor unless it landed inside it.
    pub fn dismiss_plugin_editor(&mut self, inside_plugin_editor: bool) {
        if !inside_plugin_editor {
            self.displaying_plugin_editor = false;
        }
    }

    /// Moves the cell after rows or columns shifted. Its menu must be closed.
    pub(crate) fn relocate(&mut self, position: Position) {
        self.position = position;
        if self.menu.is_some() {
            self.menu = Some(Menu::new(MenuId::Cell(position), self.menu_options()));
        }
    }

    /// Called when the cell goes away; never leaves it in edit mode.
    pub fn detach(&mut self) {
        self.field.detach();
        self.displaying_plugin_editor = false;
    }

    fn apply(&mut self, value: CellValue) -> Reaction {
        let changed = self.field.commit(value);
        self.refresh_menu();
        Reaction::none().event(self.updated(changed))
    }

    fn updated(&self, changed: ValueChanged<CellValue>) -> GridEvent {
        GridEvent::CellUpdated {
            position: self.position,
            value: changed.value,
        }
    }

    fn revert_label(&self) -> MenuLabel {
        let original = self.original_value();
        if original.is_structured() {
            return MenuLabel::Text("Revert".to_string());
        }
        let shown = original
            .display_text()
            .unwrap_or_else(|| NULL_PLACEHOLDER.to_string());
        MenuLabel::Fragment(vec![
            LabelSpan::Text("Revert to ".to_string()),
            LabelSpan::Emphasis(shown),
        ])
    }

    fn refresh_menu(&mut self) {
        let options = self.menu_options();
        if let Some(menu) = self.menu.as_mut() {
            menu.set_options(options);
        }
    }
}

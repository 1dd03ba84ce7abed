use crate::state::effects::{EditorId, Effect, Reaction};
use crate::state::error::GridError;
use crate::state::events::{ColumnEvent, GridEvent, MenuId};
use crate::state::keys::{KeyInput, KeyName};
use crate::state::menu::{LabelSpan, Menu, MenuLabel, MenuOption};
use crate::state::mutable_value::MutableValue;
use crate::state::plugin::{ColumnPlugin, InstalledPlugin};

pub const SORT_ASCENDING: &str = "sort:alphabetical:ascending";
pub const SORT_DESCENDING: &str = "sort:alphabetical:descending";
pub const ACTION_HIDE: &str = "hide";
pub const ACTION_RENAME: &str = "rename";
pub const ACTION_DELETE: &str = "delete";
pub const ACTION_RESET: &str = "reset";
pub const ACTION_PLUGINS: &str = "plugins";
pub const ACTION_UNINSTALL_PLUGIN: &str = "uninstall-column-plugin";

/// Where inside the header a click landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderClickTarget {
    Body,
    MenuTrigger,
    Resizer,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ColumnHeader {
    index: usize,
    name: MutableValue<String>,
    /// Last name the host was told about.
    committed: String,
    plugins: Vec<ColumnPlugin>,
    installed: Option<InstalledPlugin>,
    width: Option<f64>,
    previous_width: f64,
    menu: Menu,
}

impl ColumnHeader {
    pub fn new(index: usize, name: impl Into<String>) -> Self {
        let name = name.into();
        let mut header = Self {
            index,
            committed: name.clone(),
            name: MutableValue::new(name),
            plugins: Vec::new(),
            installed: None,
            width: None,
            previous_width: 0.0,
            menu: Menu::new(MenuId::Column(index), Vec::new()),
        };
        header.refresh_menu();
        header
    }

    pub fn with_width(mut self, width: Option<f64>) -> Self {
        self.width = width;
        self
    }

    pub fn with_readonly(mut self, readonly: bool) -> Self {
        self.set_readonly(readonly);
        self
    }

    pub fn with_plugins(mut self, plugins: Vec<ColumnPlugin>) -> Self {
        self.plugins = plugins;
        self.refresh_menu();
        self
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn name(&self) -> &str {
        self.name.value()
    }

    pub fn original_name(&self) -> &str {
        self.name.original()
    }

    /// The name the column is known by: its original, else the current value.
    pub fn identity(&self) -> &str {
        let original = self.name.original();
        if original.is_empty() {
            self.name.value()
        } else {
            original
        }
    }

    pub fn dirty(&self) -> bool {
        self.name.dirty()
    }

    pub fn is_renaming(&self) -> bool {
        self.name.is_editing()
    }

    pub fn is_readonly(&self) -> bool {
        self.name.is_readonly()
    }

    pub fn width(&self) -> Option<f64> {
        self.width
    }

    pub fn installed_plugin(&self) -> Option<&InstalledPlugin> {
        self.installed.as_ref()
    }

    /// The plugin cells of this column should render with, if any.
    pub fn active_plugin(&self) -> Option<&ColumnPlugin> {
        let installed = self.installed.as_ref()?;
        self.plugins
            .iter()
            .find(|plugin| plugin.tag_name == installed.tag_name)
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub(crate) fn menu_mut(&mut self) -> &mut Menu {
        &mut self.menu
    }

    pub fn set_readonly(&mut self, readonly: bool) {
        self.name.set_readonly(readonly);
        self.refresh_menu();
    }

    pub fn set_installed_plugin(&mut self, installed: Option<InstalledPlugin>) {
        self.installed = installed;
        self.refresh_menu();
    }

    fn has_plugin_installed(&self) -> bool {
        self.installed
            .as_ref()
            .is_some_and(|installed| !installed.is_default_plugin)
    }

    pub fn menu_options(&self) -> Vec<MenuOption> {
        let mut options = vec![
            MenuOption::new("Sort A-Z", SORT_ASCENDING),
            MenuOption::new("Sort Z-A", SORT_DESCENDING),
            MenuOption::new("Hide Column", ACTION_HIDE),
        ];
        if !self.name.is_readonly() {
            options.push(MenuOption::new("Rename Column", ACTION_RENAME));
        }
        options.push(MenuOption::new("Delete Column", ACTION_DELETE).with_classes("danger"));

        if self.dirty() {
            options.push(MenuOption::new(
                MenuLabel::Fragment(vec![
                    LabelSpan::Text("Revert to ".to_string()),
                    LabelSpan::Emphasis(self.name.original().clone()),
                ]),
                ACTION_RESET,
            ));
        }

        let plugin_options: Vec<MenuOption> = self
            .plugins
            .iter()
            .filter(|plugin| !plugin.is_default)
            .map(|plugin| MenuOption::new(plugin.display_name.as_str(), plugin.tag_name.as_str()))
            .collect();

        if !plugin_options.is_empty() {
            let entry = if self.has_plugin_installed() {
                MenuOption::new("Remove Plugin", ACTION_UNINSTALL_PLUGIN)
            } else {
                MenuOption::new(
                    MenuLabel::Fragment(vec![
                        LabelSpan::Text("Plugins".to_string()),
                        LabelSpan::SubmenuCaret,
                    ]),
                    ACTION_PLUGINS,
                )
                .with_options(plugin_options)
            };
            options.insert(2, entry);
        }

        options
    }

    /// A click on the header body asks the host to sort ascending.
    pub fn click(&self, target: HeaderClickTarget) -> Reaction {
        let name = self.identity();
        if target != HeaderClickTarget::Body || name.is_empty() || self.name.is_editing() {
            return Reaction::none();
        }
        Reaction::none().event(GridEvent::ColumnUpdated(ColumnEvent::action(
            name,
            SORT_ASCENDING,
        )))
    }

    pub fn menu_selection(&mut self, value: &str) -> Result<Reaction, GridError> {
        let column_name = self.identity().to_string();

        if let Some(plugin) = self.plugins.iter().find(|plugin| plugin.tag_name == value).cloned() {
            self.set_installed_plugin(Some(InstalledPlugin::from(&plugin)));
            return Ok(Reaction::none().event(GridEvent::ColumnPluginActivated {
                name: column_name,
                plugin,
            }));
        }

        match value {
            ACTION_UNINSTALL_PLUGIN => {
                let installed = self
                    .installed
                    .clone()
                    .ok_or_else(|| GridError::PluginNotInstalled(column_name.clone()))?;
                self.set_installed_plugin(None);
                Ok(Reaction::none().event(GridEvent::ColumnPluginDeactivated {
                    name: column_name,
                    plugin: installed,
                }))
            }
            ACTION_HIDE => {
                let original = self.required_original()?;
                Ok(Reaction::none().event(GridEvent::ColumnHidden(ColumnEvent::bare(original))))
            }
            ACTION_DELETE => {
                let original = self.required_original()?;
                Ok(Reaction::none().event(GridEvent::ColumnRemoved(ColumnEvent::bare(original))))
            }
            ACTION_RENAME => Ok(self.begin_rename()),
            ACTION_RESET => Ok(self.revert()),
            _ => Ok(Reaction::none().event(GridEvent::ColumnUpdated(ColumnEvent::action(
                column_name,
                value,
            )))),
        }
    }

    pub fn begin_rename(&mut self) -> Reaction {
        match self.name.begin_edit() {
            Some(_) => Reaction::none().effect(Effect::FocusEditor(EditorId::Column(self.index))),
            None => Reaction::none(),
        }
    }

    /// Text typed into the rename input.
    pub fn rename_input(&mut self, text: &str) {
        if self.name.is_editing() {
            self.name.commit(text.to_string());
            self.refresh_menu();
        }
    }

    /// Ends a rename (Enter or blur) and reports the new name if it changed.
    pub fn finish_rename(&mut self) -> Reaction {
        if !self.name.is_editing() {
            return Reaction::none();
        }
        self.name.cancel_edit();

        let proposed = self.name.value().trim().to_string();
        if proposed.is_empty() {
            self.name.commit(self.committed.clone());
            self.refresh_menu();
            return Reaction::none();
        }

        self.name.commit(proposed.clone());
        self.refresh_menu();
        if proposed == self.committed {
            return Reaction::none();
        }

        let previous = std::mem::replace(&mut self.committed, proposed.clone());
        Reaction::none().event(GridEvent::ColumnRenamed(ColumnEvent::rename(previous, proposed)))
    }

    /// Escape while renaming: leaves edit mode, keeps the typed text.
    pub fn cancel_rename(&mut self) {
        self.name.cancel_edit();
    }

    /// Restores the original name and tells the host about it.
    pub fn revert(&mut self) -> Reaction {
        let discarded = self.name.value().clone();
        if self.name.reset_to_original().is_none() {
            return Reaction::none();
        }
        self.name.cancel_edit();
        self.committed = self.name.original().clone();
        self.refresh_menu();
        Reaction::none().event(GridEvent::ColumnRenamed(ColumnEvent::rename(
            discarded,
            self.committed.clone(),
        )))
    }

    pub fn key_down(&mut self, key: KeyInput) -> Reaction {
        if !self.name.is_editing() {
            return Reaction::none();
        }
        match key.key {
            KeyName::Enter => {
                let mut reaction = self.finish_rename();
                reaction.prevent_default = true;
                reaction
            }
            KeyName::Escape => {
                self.cancel_rename();
                Reaction::none()
            }
            _ => Reaction::none(),
        }
    }

    pub fn resize_start(&mut self) {
        self.previous_width = self.width.unwrap_or(0.0);
    }

    /// `delta` is measured from where the drag started, not from the last step.
    pub fn resize(&mut self, delta: f64) {
        self.width = Some(self.previous_width + delta);
    }

    pub(crate) fn relocate(&mut self, index: usize) {
        self.index = index;
        self.menu = Menu::new(MenuId::Column(index), self.menu_options());
    }

    pub fn detach(&mut self) {
        self.name.detach();
    }

    fn required_original(&self) -> Result<String, GridError> {
        let original = self.name.original();
        if original.is_empty() {
            return Err(GridError::MissingOriginalValue(self.index));
        }
        Ok(original.clone())
    }

    fn refresh_menu(&mut self) {
        let options = self.menu_options();
        self.menu.set_options(options);
    }
}

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A custom cell renderer that can be attached to a column.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnPlugin {
    pub tag_name: String,
    /// Serialized configuration, forwarded verbatim to the renderer.
    #[serde(default)]
    pub config: String,
    pub display_name: String,
    #[serde(default)]
    pub is_default: bool,
}

/// What a column currently has installed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstalledPlugin {
    pub tag_name: String,
    #[serde(default)]
    pub is_default_plugin: bool,
}

impl From<&ColumnPlugin> for InstalledPlugin {
    fn from(plugin: &ColumnPlugin) -> Self {
        Self {
            tag_name: plugin.tag_name.clone(),
            is_default_plugin: plugin.is_default,
        }
    }
}

/// Actions a plugin renderer reports back to its cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PluginAction {
    EditStart,
    EditStop,
    EditCancel,
    UpdateCell,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown plugin action `{0}`")]
pub struct UnknownPluginAction(pub String);

impl FromStr for PluginAction {
    type Err = UnknownPluginAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "edit-start" | "onedit" => Ok(PluginAction::EditStart),
            "edit-stop" | "onstopedit" => Ok(PluginAction::EditStop),
            "edit-cancel" | "oncanceledit" => Ok(PluginAction::EditCancel),
            "update-cell" | "updatecell" => Ok(PluginAction::UpdateCell),
            _ => Err(UnknownPluginAction(s.to_string())),
        }
    }
}

/// Markup for a plugin element. Attribute values are escaped; extra attributes
/// are passed through as given by the host.
pub fn render_plugin_tag(tag_name: &str, cell_value: &str, config: &str, extra_attributes: &str) -> String {
    let mut out = format!(
        "<{tag_name} cellvalue='{}' configuration='{}'",
        escape_attribute(cell_value),
        escape_attribute(config)
    );
    if !extra_attributes.trim().is_empty() {
        out.push(' ');
        out.push_str(extra_attributes.trim());
    }
    out.push_str(&format!("></{tag_name}>"));
    out
}

/// The editor variant of a plugin cell element.
pub fn editor_tag_name(tag_name: &str) -> String {
    tag_name.replace("plugin-cell", "plugin-editor")
}

fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('\'', "&#39;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

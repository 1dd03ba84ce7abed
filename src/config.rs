use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::state::plugin::ColumnPlugin;

/// Path of a JSON file holding a [`GridConfig`].
pub const CONFIG_ENV: &str = "SHEETGRID_CONFIG";
/// Path of a dataset to open on startup.
pub const OPEN_ENV: &str = "SHEETGRID_OPEN";

pub const DEFAULT_COLUMN_WIDTH: f64 = 160.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn class(self) -> &'static str {
        match self {
            Theme::Light => "",
            Theme::Dark => "dark",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Cells and headers cannot be edited or renamed.
    pub readonly: bool,
    /// Adds the selector column and allows removing selected rows.
    pub removable_rows: bool,
    pub column_resizer: bool,
    /// Render dirty cells like clean ones.
    pub hide_dirt: bool,
    pub theme: Theme,
    pub default_column_width: f64,
    pub plugins: Vec<ColumnPlugin>,
    /// Extra attributes appended to every plugin element.
    pub plugin_attributes: String,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            readonly: false,
            removable_rows: true,
            column_resizer: true,
            hide_dirt: false,
            theme: Theme::default(),
            default_column_width: DEFAULT_COLUMN_WIDTH,
            plugins: Vec::new(),
            plugin_attributes: String::new(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl GridConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Reads the file named by [`CONFIG_ENV`], or the defaults when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }
}

/// Dataset path from [`OPEN_ENV`], if set.
pub fn startup_dataset() -> Option<PathBuf> {
    std::env::var_os(OPEN_ENV).map(PathBuf::from)
}

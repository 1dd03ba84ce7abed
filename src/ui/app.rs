use dioxus::prelude::*;
use std::path::PathBuf;

use crate::config::{self, GridConfig};
use crate::state::grid::GridState;
use crate::ui::actions;
use crate::ui::table::Table;
use crate::ui::toolbar::Toolbar;

const STYLES: Asset = asset!("/assets/styles.css");

#[component]
pub fn App() -> Element {
    let loaded_config = use_hook(|| GridConfig::from_env().map_err(|err| err.to_string()));
    let grid = use_signal({
        let loaded_config = loaded_config.clone();
        move || match loaded_config {
            Ok(config) => GridState::new(config),
            Err(err) => {
                tracing::warn!(%err, "falling back to default grid config");
                GridState::default()
            }
        }
    });
    let file_path = use_signal::<Option<PathBuf>>(|| None);
    let error_message = use_signal(|| loaded_config.err());

    use_effect(move || {
        if let Some(path) = config::startup_dataset() {
            let _ = actions::load_into(grid, path, file_path, error_message);
        }
    });

    rsx! {
        document::Stylesheet { href: STYLES }
        div { class: "app",
            Toolbar { grid, file_path, error_message }
            Table { grid }
        }
    }
}

use dioxus::prelude::*;
use serde_json::Value;
use std::path::PathBuf;
use std::time::Duration;

use crate::io::dataset;
use crate::state::effects::Effect;
use crate::state::error::GridError;
use crate::state::events::{ColumnData, GridEvent};
use crate::state::grid::{GridState, SortOrder};
use crate::state::position::Position;

/// Runs one interaction against the grid, then hands its events to the host
/// and schedules its effects. Rejected interactions are logged and dropped.
pub fn dispatch<R>(
    mut grid: Signal<GridState>,
    interaction: impl FnOnce(&mut GridState) -> Result<R, GridError>,
) -> Option<R> {
    let outcome = match grid.with_mut(interaction) {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(%err, "interaction rejected");
            None
        }
    };
    flush(grid);
    outcome
}

/// Drains queued events and effects after a state change.
pub fn flush(mut grid: Signal<GridState>) {
    let (events, effects) = grid.with_mut(|state| (state.drain_events(), state.drain_effects()));

    for event in &events {
        host_reaction(grid, event);
    }

    if !effects.is_empty() {
        spawn(async move {
            // Wait for the render triggered by this interaction.
            tokio::time::sleep(Duration::ZERO).await;
            for effect in effects {
                run_effect(grid, effect).await;
            }
        });
    }
}

/// What the demo host does with the requests the grid sends up.
fn host_reaction(mut grid: Signal<GridState>, event: &GridEvent) {
    match event {
        GridEvent::ColumnUpdated(column) => {
            let action = match &column.data {
                ColumnData::Action { action } => action.as_str(),
                _ => return,
            };
            if let Some(order) = SortOrder::from_action(action) {
                let sorted = grid.with_mut(|state| state.sort_by_column(&column.name, order));
                if let Err(err) = sorted {
                    tracing::warn!(%err, column = %column.name, "sort failed");
                }
            }
        }
        GridEvent::ColumnRemoved(column) => {
            let removed = grid.with_mut(|state| match state.column_index(&column.name) {
                Some(index) => state.remove_column(index),
                None => Err(GridError::MissingColumnName),
            });
            if let Err(err) = removed {
                tracing::warn!(%err, column = %column.name, "remove column failed");
            }
        }
        other => tracing::info!(event = other.name(), "grid event"),
    }
}

async fn run_effect(grid: Signal<GridState>, effect: Effect) {
    match effect {
        Effect::Focus(target) => {
            let script = format!("document.getElementById({})?.focus();", js_string(&target.dom_id()));
            let _ = document::eval(&script).join::<Value>().await;
        }
        Effect::FocusEditor(editor) => {
            let script = format!(
                r#"const input = document.getElementById({});
                if (input) {{
                    input.focus();
                    const end = input.value.length;
                    input.setSelectionRange(end, end);
                }}"#,
                js_string(&editor.dom_id())
            );
            let _ = document::eval(&script).join::<Value>().await;
        }
        Effect::WriteClipboard(text) => {
            let eval = document::eval(
                r#"const text = await dioxus.recv();
                await navigator.clipboard.writeText(text);"#,
            );
            if let Err(err) = eval.send(text) {
                tracing::warn!(?err, "clipboard write failed");
            }
        }
        Effect::ReadClipboard(position) => paste_from_clipboard(grid, position).await,
    }
}

async fn paste_from_clipboard(grid: Signal<GridState>, position: Position) {
    let eval = document::eval("return await navigator.clipboard.readText();");
    match eval.join::<String>().await {
        Ok(text) => {
            dispatch(grid, |state| state.paste(position, &text));
        }
        Err(err) => tracing::warn!(?err, %position, "clipboard read failed"),
    }
}

/// Returns whether a dataset was picked and loaded.
pub async fn open_dataset(
    grid: Signal<GridState>,
    file_path: Signal<Option<PathBuf>>,
    error_message: Signal<Option<String>>,
) -> bool {
    let task = rfd::AsyncFileDialog::new()
        .add_filter("JSON", &["json"])
        .pick_file()
        .await;

    match task {
        Some(handle) => load_into(grid, handle.path().to_path_buf(), file_path, error_message),
        None => false,
    }
}

pub fn load_into(
    mut grid: Signal<GridState>,
    path: PathBuf,
    mut file_path: Signal<Option<PathBuf>>,
    mut error_message: Signal<Option<String>>,
) -> bool {
    match dataset::load_dataset(&path) {
        Ok(dataset) => {
            grid.with_mut(|state| state.replace_dataset(dataset));
            file_path.set(Some(path));
            error_message.set(None);
            true
        }
        Err(err) => {
            tracing::warn!(%err, path = %path.display(), "dataset load failed");
            error_message.set(Some(err.to_string()));
            false
        }
    }
}

fn js_string(text: &str) -> String {
    Value::String(text.to_string()).to_string()
}

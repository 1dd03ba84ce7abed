use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use thiserror::Error;

use crate::state::data_model::{CellValue, Dataset, Schema};

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("JSON root is not an array or a {{\"rows\": [...]}} object")]
    NotAnArray,
    #[error("JSON array contains non-object elements")]
    NotArrayOfObjects,
    #[error("schema must map column names to type names")]
    InvalidSchema,
}

pub fn load_dataset(path: &Path) -> Result<Dataset, DatasetError> {
    let content = fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let dataset = parse_dataset(&content)?;
    tracing::info!(
        path = %path.display(),
        rows = dataset.rows.len(),
        columns = dataset.columns.len(),
        "dataset loaded"
    );
    Ok(dataset)
}

/// Accepts either a bare array of row objects or
/// `{"rows": [...], "schema": {"column": "type"}}`.
///
/// Columns are taken in order of first appearance across all rows; a row
/// missing a column gets `Undefined` there.
pub fn parse_dataset(content: &str) -> Result<Dataset, DatasetError> {
    let value: Value = serde_json::from_str(content)?;

    let (rows, schema) = match value {
        Value::Array(rows) => (rows, Schema::new()),
        Value::Object(mut root) => {
            let rows = match root.remove("rows") {
                Some(Value::Array(rows)) => rows,
                _ => return Err(DatasetError::NotAnArray),
            };
            let schema = match root.remove("schema") {
                None | Some(Value::Null) => Schema::new(),
                Some(Value::Object(schema)) => parse_schema(schema)?,
                Some(_) => return Err(DatasetError::InvalidSchema),
            };
            (rows, schema)
        }
        _ => return Err(DatasetError::NotAnArray),
    };

    let objects = rows
        .into_iter()
        .map(|row| match row {
            Value::Object(map) => Ok(map),
            _ => Err(DatasetError::NotArrayOfObjects),
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut columns: Vec<String> = Vec::new();
    for object in &objects {
        for key in object.keys() {
            if !columns.iter().any(|column| column == key) {
                columns.push(key.clone());
            }
        }
    }

    let rows = objects
        .into_iter()
        .map(|mut object| {
            columns
                .iter()
                .map(|column| object.remove(column).map(CellValue::from).unwrap_or_default())
                .collect()
        })
        .collect();

    Ok(Dataset::new(columns, rows).with_schema(schema))
}

fn parse_schema(schema: Map<String, Value>) -> Result<Schema, DatasetError> {
    schema
        .into_iter()
        .map(|(column, type_name)| match type_name {
            Value::String(type_name) => Ok((column, type_name)),
            _ => Err(DatasetError::InvalidSchema),
        })
        .collect()
}

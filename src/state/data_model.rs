use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// Placeholder shown for `Null` and `Undefined` cells.
pub const NULL_PLACEHOLDER: &str = "NULL";

/// Schema type names that make a column boolean-like.
pub const BOOLEAN_TYPES: &[&str] = &["bool", "boolean"];

/// Schema type names that make a column JSON-like.
pub const JSON_TYPES: &[&str] = &["json", "jsonb"];

/// A single cell's value.
///
/// `Undefined` is distinct from `Null`: it is what a cell holds after being
/// cleared from the keyboard, while `Null` comes from data or the "Clear" menu
/// action. Both render as [`NULL_PLACEHOLDER`].
#[derive(Clone, Debug, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Json(Value),
}

impl CellValue {
    pub fn is_nullish(&self) -> bool {
        matches!(self, CellValue::Undefined | CellValue::Null)
    }

    pub fn is_structured(&self) -> bool {
        matches!(self, CellValue::Json(_))
    }

    /// Text placed in the editor input; nullish values edit as an empty string.
    pub fn edit_text(&self) -> String {
        match self {
            CellValue::Undefined | CellValue::Null => String::new(),
            CellValue::Bool(b) => b.to_string(),
            CellValue::Number(n) => n.to_string(),
            CellValue::String(s) => s.clone(),
            CellValue::Json(v) => v.to_string(),
        }
    }

    /// Text written to the clipboard on copy.
    pub fn clipboard_text(&self) -> String {
        self.edit_text()
    }

    /// Text shown in display mode, `None` when the NULL placeholder applies.
    pub fn display_text(&self) -> Option<String> {
        if self.is_nullish() {
            None
        } else {
            Some(self.edit_text())
        }
    }

    /// Appends a typed character, replacing the value when it is empty.
    pub fn with_appended(&self, ch: char) -> CellValue {
        let mut text = self.edit_text();
        text.push(ch);
        CellValue::String(text)
    }

    pub fn to_json(&self) -> Value {
        match self {
            CellValue::Undefined | CellValue::Null => Value::Null,
            CellValue::Bool(b) => Value::Bool(*b),
            CellValue::Number(n) => Value::Number(n.clone()),
            CellValue::String(s) => Value::String(s.clone()),
            CellValue::Json(v) => v.clone(),
        }
    }
}

impl From<Value> for CellValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => CellValue::Null,
            Value::Bool(b) => CellValue::Bool(b),
            Value::Number(n) => CellValue::Number(n),
            Value::String(s) => CellValue::String(s),
            Value::Array(_) | Value::Object(_) => CellValue::Json(value),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::String(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::String(value)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.display_text() {
            Some(text) => f.write_str(&text),
            None => f.write_str(NULL_PLACEHOLDER),
        }
    }
}

impl Serialize for CellValue {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CellValue {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(CellValue::from)
    }
}

/// How a column's cells react to typing, derived from the schema type name.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum ColumnKind {
    Boolean,
    Json,
    #[default]
    Other,
}

impl ColumnKind {
    pub fn from_type_name(type_name: &str) -> Self {
        let lowered = type_name.trim().to_ascii_lowercase();
        if BOOLEAN_TYPES.contains(&lowered.as_str()) {
            ColumnKind::Boolean
        } else if JSON_TYPES.contains(&lowered.as_str()) {
            ColumnKind::Json
        } else {
            ColumnKind::Other
        }
    }

    /// Whether a printable keystroke may start editing a cell of this kind.
    pub fn accepts_typing(&self) -> bool {
        matches!(self, ColumnKind::Other)
    }
}

/// Column name to schema type name.
pub type Schema = BTreeMap<String, String>;

pub type Row = Vec<CellValue>;

/// Tabular data handed to the grid: ordered column names plus rows of values.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Dataset {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
    pub schema: Schema,
}

impl Dataset {
    pub fn new(columns: Vec<String>, rows: Vec<Row>) -> Self {
        Self {
            columns,
            rows,
            schema: Schema::new(),
        }
    }

    pub fn with_schema(mut self, schema: Schema) -> Self {
        self.schema = schema;
        self
    }

    pub fn column_kind(&self, column: &str) -> ColumnKind {
        self.schema
            .get(column)
            .map(|type_name| ColumnKind::from_type_name(type_name))
            .unwrap_or_default()
    }
}

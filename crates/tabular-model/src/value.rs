//! Cell values and their text coercion rules.

use serde::{Deserialize, Serialize};

/// A single cell value in a record.
///
/// Cells are dynamically typed the way spreadsheet and JSON data is: a cell
/// holds text, a number, a boolean, null, or a nested JSON fragment. Each
/// variant has exactly one text rendering, used by the CSV serializer:
///
/// | Variant  | Rendering                          |
/// |----------|------------------------------------|
/// | `Null`   | empty string                       |
/// | `Bool`   | `true` / `false`                   |
/// | `Number` | `f64` display (`30.0` → `"30"`)    |
/// | `Text`   | the string itself                  |
/// | `Nested` | compact JSON text                  |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Absent value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Numeric value.
    Number(f64),
    /// Plain text.
    Text(String),
    /// Nested object or array.
    Nested(serde_json::Value),
}

impl CellValue {
    /// Creates a text value.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Creates a numeric value.
    pub fn number(value: f64) -> Self {
        Self::Number(value)
    }

    /// Creates a boolean value.
    pub fn boolean(value: bool) -> Self {
        Self::Bool(value)
    }

    /// Returns true for `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Coerces the value to its cell text per the table above.
    pub fn to_text(&self) -> String {
        match self {
            Self::Null => String::new(),
            Self::Bool(value) => value.to_string(),
            Self::Number(value) => value.to_string(),
            Self::Text(value) => value.clone(),
            Self::Nested(value) => serde_json::to_string(value).unwrap_or_default(),
        }
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl From<serde_json::Value> for CellValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => match n.as_f64() {
                Some(f) => Self::Number(f),
                None => Self::Text(n.to_string()),
            },
            serde_json::Value::String(s) => Self::Text(s),
            other => Self::Nested(other),
        }
    }
}

//! JSON ingestion boundary.
//!
//! Export surfaces source record sets from JSON-producing APIs. This is the
//! one place the codec rejects input: anything that is not an object or an
//! array of objects fails fast instead of serializing garbage.

use serde_json::Value;
use tabular_model::{CellValue, Record, RecordSet, Schema};

use crate::error::{CodecError, Result};
use crate::options::SerializeOptions;
use crate::serialize::serialize_records_with_options;

/// Converts a JSON value into records.
///
/// Accepts a JSON array of objects (one record per element, empty array
/// allowed) or a single object (one record). Any other shape fails with
/// [`CodecError::InvalidInput`].
pub fn records_from_json(value: &Value) -> Result<RecordSet> {
    match value {
        Value::Object(_) => Ok(vec![record_from_object(value)?].into()),
        Value::Array(items) => items.iter().map(record_from_object).collect(),
        other => Err(CodecError::InvalidInput {
            expected: "an object or an array of objects",
            found: json_type(other),
        }),
    }
}

/// Serializes a JSON API payload straight to CSV text with default options.
pub fn json_to_csv(value: &Value, schema: Option<&Schema>) -> Result<String> {
    json_to_csv_with_options(value, schema, &SerializeOptions::default())
}

/// Serializes a JSON API payload straight to CSV text.
pub fn json_to_csv_with_options(
    value: &Value,
    schema: Option<&Schema>,
    options: &SerializeOptions,
) -> Result<String> {
    let records = records_from_json(value)?;
    Ok(serialize_records_with_options(&records, schema, options))
}

fn record_from_object(value: &Value) -> Result<Record> {
    let Value::Object(map) = value else {
        return Err(CodecError::InvalidInput {
            expected: "an object",
            found: json_type(value),
        });
    };
    Ok(map
        .iter()
        .map(|(name, value)| (name.clone(), CellValue::from(value.clone())))
        .collect())
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

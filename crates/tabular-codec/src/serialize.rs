//! Record serialization to CSV text.

use tabular_model::{CellValue, Record, RecordSet, Schema};

use crate::options::{QuotingStyle, SerializeOptions};

/// Serializes a record set to CSV text with default options.
///
/// The header row comes from `schema` when given, else from the first
/// record's key order. Records are projected onto the header: missing keys
/// render as empty cells. An empty record set serializes to the empty
/// string, schema or not. Rows are joined with `\n` and no trailing newline
/// is appended.
pub fn serialize_records(records: &RecordSet, schema: Option<&Schema>) -> String {
    serialize_records_with_options(records, schema, &SerializeOptions::default())
}

/// Serializes a record set to CSV text.
pub fn serialize_records_with_options(
    records: &RecordSet,
    schema: Option<&Schema>,
    options: &SerializeOptions,
) -> String {
    if records.is_empty() {
        return String::new();
    }
    let columns = resolve_columns(records.first(), schema, options);
    if columns.is_empty() {
        return String::new();
    }

    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(format_row(&columns, options.quoting));
    for record in records {
        lines.push(format_record_row(record, &columns, options.quoting));
    }
    lines.join("\n")
}

/// Serializes a single record to CSV text (header plus one data row).
///
/// The header comes from the record's own keys when no schema is given, so
/// it is emitted even for a single record.
pub fn serialize_record(record: &Record, schema: Option<&Schema>) -> String {
    serialize_record_with_options(record, schema, &SerializeOptions::default())
}

/// Serializes a single record to CSV text.
pub fn serialize_record_with_options(
    record: &Record,
    schema: Option<&Schema>,
    options: &SerializeOptions,
) -> String {
    let columns = resolve_columns(Some(record), schema, options);
    if columns.is_empty() {
        return String::new();
    }
    let header = format_row(&columns, options.quoting);
    let row = format_record_row(record, &columns, options.quoting);
    format!("{header}\n{row}")
}

/// Header precedence: explicit schema, then the first record's key order,
/// then the caller's fallback columns.
fn resolve_columns(
    first: Option<&Record>,
    schema: Option<&Schema>,
    options: &SerializeOptions,
) -> Vec<String> {
    if let Some(schema) = schema {
        return schema.columns().to_vec();
    }
    if let Some(record) = first
        && !record.is_empty()
    {
        return record.keys().map(str::to_string).collect();
    }
    options.fallback_columns.clone().unwrap_or_default()
}

fn format_record_row(record: &Record, columns: &[String], quoting: QuotingStyle) -> String {
    let fields: Vec<String> = columns
        .iter()
        .map(|column| {
            record
                .get(column)
                .map(CellValue::to_text)
                .unwrap_or_default()
        })
        .collect();
    format_row(&fields, quoting)
}

fn format_row(fields: &[String], quoting: QuotingStyle) -> String {
    // A lone unquoted empty field would read back as a blank line.
    if quoting == QuotingStyle::Minimal && fields.len() == 1 && fields[0].trim().is_empty() {
        return quote_field(&fields[0], QuotingStyle::Always);
    }
    let quoted: Vec<String> = fields
        .iter()
        .map(|field| quote_field(field, quoting))
        .collect();
    quoted.join(",")
}

fn quote_field(field: &str, quoting: QuotingStyle) -> String {
    let needs_quotes = match quoting {
        QuotingStyle::Always => true,
        QuotingStyle::Minimal => field.contains(['"', ',', '\n', '\r']),
    };
    if needs_quotes {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> Record {
        pairs.iter().map(|&(name, value)| (name, value)).collect()
    }

    #[test]
    fn test_header_from_first_record_keys() {
        let records: RecordSet = vec![
            record(&[("name", "Alice"), ("age", "30")]),
            record(&[("age", "25"), ("name", "Bob")]),
        ]
        .into();
        let csv = serialize_records(&records, None);
        assert_eq!(csv, "\"name\",\"age\"\n\"Alice\",\"30\"\n\"Bob\",\"25\"");
    }

    #[test]
    fn test_schema_overrides_key_order() {
        let records: RecordSet = vec![record(&[("b", "2"), ("a", "1")])].into();
        let schema = Schema::new(["a", "b"]);
        let csv = serialize_records(&records, Some(&schema));
        assert_eq!(csv, "\"a\",\"b\"\n\"1\",\"2\"");
    }

    #[test]
    fn test_missing_keys_render_empty() {
        let records: RecordSet = vec![record(&[("a", "1"), ("c", "3")])].into();
        let schema = Schema::new(["a", "b", "c"]);
        let csv = serialize_records(&records, Some(&schema));
        assert_eq!(csv, "\"a\",\"b\",\"c\"\n\"1\",\"\",\"3\"");
    }

    #[test]
    fn test_empty_record_set_is_empty_string() {
        let records = RecordSet::new();
        assert_eq!(serialize_records(&records, None), "");
        let schema = Schema::new(["a"]);
        assert_eq!(serialize_records(&records, Some(&schema)), "");
    }

    #[test]
    fn test_null_and_nested_values() {
        let mut rec = Record::new();
        rec.insert("empty", CellValue::Null);
        rec.insert("nested", CellValue::Nested(serde_json::json!({"k": 1})));
        let csv = serialize_record(&rec, None);
        assert_eq!(csv, "\"empty\",\"nested\"\n\"\",\"{\"\"k\"\":1}\"");
    }

    #[test]
    fn test_minimal_quoting_quotes_only_specials() {
        let records: RecordSet = vec![record(&[("name", "Bob, Jr."), ("age", "25")])].into();
        let csv =
            serialize_records_with_options(&records, None, &SerializeOptions::new().minimal_quoting());
        assert_eq!(csv, "name,age\n\"Bob, Jr.\",25");
    }

    #[test]
    fn test_minimal_quoting_protects_lone_empty_field() {
        let records: RecordSet = vec![record(&[("only", "")])].into();
        let csv =
            serialize_records_with_options(&records, None, &SerializeOptions::new().minimal_quoting());
        assert_eq!(csv, "only\n\"\"");
    }

    #[test]
    fn test_fallback_columns_for_empty_record() {
        let records: RecordSet = vec![Record::new()].into();
        let options = SerializeOptions::new().with_fallback_columns(["x", "y"]);
        let csv = serialize_records_with_options(&records, None, &options);
        assert_eq!(csv, "\"x\",\"y\"\n\"\",\"\"");
    }

    #[test]
    fn test_empty_record_without_fallback_is_empty_string() {
        assert_eq!(serialize_record(&Record::new(), None), "");
    }
}

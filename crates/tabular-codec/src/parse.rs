//! CSV text parsing into records.

use tabular_model::{CellValue, Record, RecordSet};

use crate::options::{ExtraFieldPolicy, ParseOptions};
use crate::scan::{ScannedRow, scan_rows};

/// Parses CSV text into records with default options.
///
/// The first row is the header; header fields follow the same quoting rules
/// as data fields. Rows that are blank after trimming are skipped and never
/// produce records. Rows shorter than the header fill the missing trailing
/// columns with empty text; rows longer than the header follow
/// [`ExtraFieldPolicy`]. Empty input, or input with only a header row,
/// yields an empty record set. Any input yields some record set; there is
/// no parse-error state.
///
/// Parsing is text-preserving, not type-preserving: every cell comes back
/// as text. Values round-trip exactly through the serializer with one
/// documented exception: a cell value that itself begins or ends with a
/// literal `"` loses that boundary quote, because stray boundary quotes are
/// trimmed defensively after scanning.
pub fn parse_records(text: &str) -> RecordSet {
    parse_records_with_options(text, &ParseOptions::default())
}

/// Parses CSV text into records.
pub fn parse_records_with_options(text: &str, options: &ParseOptions) -> RecordSet {
    let mut rows = scan_rows(text);
    if rows.len() < 2 {
        return RecordSet::new();
    }
    let header = rows.remove(0).fields;

    let mut records = RecordSet::new();
    for (index, row) in rows.into_iter().enumerate() {
        if row.is_blank() {
            continue;
        }
        records.push(build_record(&header, row, index, options));
    }
    records
}

fn build_record(
    header: &[String],
    row: ScannedRow,
    index: usize,
    options: &ParseOptions,
) -> Record {
    let width = row.fields.len();
    let mut record = Record::new();
    let mut fields = row.fields.into_iter();
    for column in header {
        let value = fields.next().unwrap_or_default();
        record.insert(column.clone(), CellValue::Text(value));
    }

    if width <= header.len() {
        return record;
    }
    match options.extra_fields {
        ExtraFieldPolicy::Drop => {
            tracing::warn!(
                row = index + 2,
                header_width = header.len(),
                field_count = width,
                "dropping fields beyond the header width"
            );
        }
        ExtraFieldPolicy::Extend => {
            for (offset, value) in fields.enumerate() {
                let name = format!("column_{}", header.len() + offset + 1);
                record.insert(name, CellValue::Text(value));
            }
        }
    }
    record
}

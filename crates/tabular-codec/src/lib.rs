//! Bidirectional CSV codec for tabular records and ragged grids.
//!
//! Converts between in-memory record sets and CSV text in both directions,
//! and normalizes freeform pasted or uploaded CSV text into rectangular
//! grids:
//!
//! - [`serialize_records`] / [`serialize_record`] render records as CSV
//!   with an explicit schema or a derived header.
//! - [`parse_records`] turns CSV text back into records, permissively: any
//!   input yields some record set, never a parse error.
//! - [`normalize_grid`] pads ragged rows into a rectangular grid.
//! - [`records_from_json`] / [`json_to_csv`] ingest JSON API payloads,
//!   rejecting non-tabular shapes.
//!
//! The codec is pure and synchronous: no I/O, no shared state, no retries.
//! Parsing is text-preserving, not type-preserving: numbers and booleans
//! come back as their string form.
//!
//! # Example
//!
//! ```
//! use tabular_codec::{parse_records, serialize_records};
//! use tabular_model::{CellValue, Record, RecordSet};
//!
//! let records: RecordSet = vec![
//!     [("name", CellValue::text("Alice")), ("age", 30i64.into())]
//!         .into_iter()
//!         .collect::<Record>(),
//! ]
//! .into();
//!
//! let csv = serialize_records(&records, None);
//! assert_eq!(csv, "\"name\",\"age\"\n\"Alice\",\"30\"");
//!
//! let round = parse_records(&csv);
//! assert_eq!(round.len(), 1);
//! let alice = round.first().unwrap();
//! assert_eq!(alice.get("age"), Some(&CellValue::text("30")));
//! ```

mod error;
mod json;
mod normalize;
mod options;
mod parse;
pub mod scan;
mod serialize;

pub use error::{CodecError, Result};
pub use json::{json_to_csv, json_to_csv_with_options, records_from_json};
pub use normalize::normalize_grid;
pub use options::{ExtraFieldPolicy, ParseOptions, QuotingStyle, SerializeOptions};
pub use parse::{parse_records, parse_records_with_options};
pub use serialize::{
    serialize_record, serialize_record_with_options, serialize_records,
    serialize_records_with_options,
};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

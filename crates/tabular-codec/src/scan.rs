//! Shared quote-aware CSV scanning.
//!
//! One tokenizer serves both the record parser and the grid normalizer so
//! edge-case handling cannot diverge between the two.

/// One scanned row: its fields plus whether the raw text between row
/// boundaries held anything beyond whitespace.
///
/// Blank-line detection has to look at the raw text: a line reading `""`
/// scans to a single empty field, but it is a quoted empty cell, not a
/// blank line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedRow {
    pub fields: Vec<String>,
    pub has_content: bool,
}

impl ScannedRow {
    /// Returns true if the raw row was empty or whitespace-only.
    pub fn is_blank(&self) -> bool {
        !self.has_content
    }
}

/// Splits CSV text into rows of fields.
///
/// The scan keeps one in-quotes flag across the whole input, so a `\n`
/// inside a quoted field is field content, not a row boundary. Outside
/// quotes, `,` ends the field and `\n` ends the row (a `\r` immediately
/// before the `\n` is dropped). A doubled quote inside a quoted field emits
/// one literal quote; a lone quote toggles quote mode without emitting.
/// After a field is accumulated, one leading and one trailing quote are
/// stripped if still present, guarding against stray boundary quotes in
/// malformed input. A leading UTF-8 BOM is stripped before scanning.
///
/// Always yields at least one row: empty input scans to one row holding a
/// single empty field.
pub fn scan_rows(text: &str) -> Vec<ScannedRow> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut rows = Vec::new();
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut has_content = false;
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if !c.is_whitespace() {
            has_content = true;
        }
        match c {
            '"' if !in_quotes => {
                in_quotes = true;
            }
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            ',' if !in_quotes => {
                fields.push(finish_field(&mut current));
            }
            '\n' if !in_quotes => {
                fields.push(finish_field(&mut current));
                rows.push(ScannedRow {
                    fields: std::mem::take(&mut fields),
                    has_content,
                });
                has_content = false;
            }
            '\r' if !in_quotes && chars.peek() == Some(&'\n') => {}
            _ => current.push(c),
        }
    }

    fields.push(finish_field(&mut current));
    rows.push(ScannedRow {
        fields,
        has_content,
    });
    rows
}

/// Splits a single CSV line into fields with the same rules as [`scan_rows`].
pub fn scan_fields(line: &str) -> Vec<String> {
    scan_rows(line)
        .into_iter()
        .next()
        .map(|row| row.fields)
        .unwrap_or_default()
}

fn finish_field(buffer: &mut String) -> String {
    strip_boundary_quotes(std::mem::take(buffer))
}

/// Strips one leading and one trailing `"`, each independently, if present.
fn strip_boundary_quotes(field: String) -> String {
    if !field.starts_with('"') && !field.ends_with('"') {
        return field;
    }
    let stripped = field.strip_prefix('"').unwrap_or(&field);
    let stripped = stripped.strip_suffix('"').unwrap_or(stripped);
    stripped.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields_of(rows: &[ScannedRow]) -> Vec<Vec<String>> {
        rows.iter().map(|row| row.fields.clone()).collect()
    }

    #[test]
    fn test_scan_fields_simple() {
        assert_eq!(scan_fields("a,b,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_scan_fields_quoted_comma() {
        assert_eq!(
            scan_fields("\"hello, world\",b"),
            vec!["hello, world", "b"]
        );
    }

    #[test]
    fn test_scan_fields_escaped_quotes() {
        assert_eq!(
            scan_fields("\"he said \"\"hello\"\"\",b"),
            vec!["he said \"hello\"", "b"]
        );
    }

    #[test]
    fn test_scan_fields_keeps_whitespace() {
        assert_eq!(scan_fields("  a  , b"), vec!["  a  ", " b"]);
    }

    #[test]
    fn test_scan_rows_crlf() {
        let rows = scan_rows("a,b\r\nc,d");
        assert_eq!(fields_of(&rows), vec![vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn test_newline_inside_quotes_is_content() {
        let rows = scan_rows("\"line1\nline2\",x");
        assert_eq!(fields_of(&rows), vec![vec!["line1\nline2", "x"]]);
    }

    #[test]
    fn test_empty_input_is_one_blank_row() {
        let rows = scan_rows("");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].fields, vec![""]);
        assert!(rows[0].is_blank());
    }

    #[test]
    fn test_quoted_empty_field_is_not_blank() {
        let rows = scan_rows("\"\"");
        assert_eq!(rows[0].fields, vec![""]);
        assert!(!rows[0].is_blank());
    }

    #[test]
    fn test_whitespace_only_row_is_blank() {
        let rows = scan_rows("   \nx");
        assert!(rows[0].is_blank());
        assert!(!rows[1].is_blank());
    }

    #[test]
    fn test_stray_boundary_quote_is_trimmed() {
        // Malformed triple quote leaves a stray boundary quote behind.
        assert_eq!(scan_fields("\"\"\"a"), vec!["a"]);
    }

    #[test]
    fn test_bom_is_stripped() {
        assert_eq!(scan_fields("\u{feff}a,b"), vec!["a", "b"]);
    }

    #[test]
    fn test_trailing_newline_yields_trailing_blank_row() {
        let rows = scan_rows("a\n");
        assert_eq!(fields_of(&rows), vec![vec!["a"], vec![""]]);
        assert!(rows[1].is_blank());
    }
}

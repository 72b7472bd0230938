//! Ragged text normalization into rectangular grids.

use tabular_model::Grid;

use crate::scan::scan_rows;

/// Normalizes freeform CSV text into a rectangular grid.
///
/// Every row is parsed with the shared quote-aware scanner and right-padded
/// with empty cells to the widest row; rows are never truncated. Blank rows
/// are kept (they become rows of empty cells), since raw grids feed an
/// editor that has not chosen a header convention yet. Empty input yields a
/// 1x1 grid holding one empty cell.
pub fn normalize_grid(text: &str) -> Grid {
    let rows = scan_rows(text);
    let max_cols = rows.iter().map(|row| row.fields.len()).max().unwrap_or(0);

    let mut cells = Vec::with_capacity(rows.len());
    for row in rows {
        let mut fields = row.fields;
        fields.resize(max_cols, String::new());
        cells.push(fields);
    }
    tracing::debug!(
        rows = cells.len(),
        columns = max_cols,
        "normalized ragged text into grid"
    );
    Grid::from_rows(cells)
}

use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result};
use calamine::{Data, Reader, Xlsx, XlsxError};
use thiserror::Error;

use super::model::{Cell, Column, Table};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Everything that can go wrong turning uploaded bytes into a [`Table`].
/// The shell shows these as a single message; no partial table escapes.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("reading CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("reading workbook: {0}")]
    Workbook(#[from] XlsxError),
    #[error("workbook has no sheets")]
    NoSheet,
    #[error("file has no header row")]
    NoHeader,
    #[error("row {row} has {got} fields, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        got: usize,
    },
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Parse an uploaded file's bytes into a [`Table`]. Dispatch by the declared
/// file name: `.xlsx` is read as a workbook's first sheet, anything else as
/// comma-separated text (the open dialog only offers csv/xlsx).
pub fn load_bytes(name: &str, bytes: &[u8]) -> Result<Table, LoadError> {
    if name.to_ascii_lowercase().ends_with(".xlsx") {
        load_xlsx(bytes)
    } else {
        load_csv(bytes)
    }
}

/// Read a file from disk and parse it. Used by the open-file dialog.
pub fn load_path(path: &Path) -> Result<Table> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("upload.csv");
    Ok(load_bytes(name, &bytes)?)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Header row with column names, one product per record. Cells that parse as
/// numbers stay numbers unless the column turns out mixed; empty cells are
/// missing.
fn load_csv(bytes: &[u8]) -> Result<Table, LoadError> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(bytes);

    let names: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();
    if names.is_empty() {
        return Err(LoadError::NoHeader);
    }

    let mut cells: Vec<Vec<Cell>> = vec![Vec::new(); names.len()];
    for (i, result) in reader.records().enumerate() {
        let record = result?;
        if record.len() > names.len() {
            return Err(LoadError::RaggedRow {
                row: i + 1,
                expected: names.len(),
                got: record.len(),
            });
        }
        for (col, raw) in cells.iter_mut().zip(record.iter()) {
            col.push(csv_cell(raw));
        }
        // A short record leaves trailing columns missing for this row.
        for col in cells.iter_mut().skip(record.len()) {
            col.push(Cell::Missing);
        }
    }

    Ok(Table::new(
        names,
        cells.into_iter().map(Column::from_cells).collect(),
    ))
}

fn csv_cell(raw: &str) -> Cell {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Cell::Missing;
    }
    match trimmed.parse::<f64>() {
        // "NaN"/"nan" cells are not-available markers, not numbers
        Ok(v) if v.is_nan() => Cell::Missing,
        Ok(v) => Cell::Number(v),
        Err(_) => Cell::Text(raw.to_string()),
    }
}

// ---------------------------------------------------------------------------
// XLSX loader
// ---------------------------------------------------------------------------

/// Read the first sheet of an `.xlsx` workbook. The first row supplies the
/// column names; unnamed header cells get positional names.
fn load_xlsx(bytes: &[u8]) -> Result<Table, LoadError> {
    let mut workbook = Xlsx::new(Cursor::new(bytes))?;
    let range = workbook.worksheet_range_at(0).ok_or(LoadError::NoSheet)??;

    let mut rows = range.rows();
    let header = rows.next().ok_or(LoadError::NoHeader)?;
    let names: Vec<String> = header
        .iter()
        .enumerate()
        .map(|(i, cell)| match cell {
            Data::Empty => format!("column_{i}"),
            other => other.to_string(),
        })
        .collect();

    let mut cells: Vec<Vec<Cell>> = vec![Vec::new(); names.len()];
    for row in rows {
        for (i, col) in cells.iter_mut().enumerate() {
            col.push(row.get(i).map_or(Cell::Missing, sheet_cell));
        }
    }

    Ok(Table::new(
        names,
        cells.into_iter().map(Column::from_cells).collect(),
    ))
}

fn sheet_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Missing,
        Data::Float(v) if v.is_nan() => Cell::Missing,
        Data::Float(v) => Cell::Number(*v),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::String(s) if s.trim().is_empty() => Cell::Missing,
        Data::String(s) => Cell::Text(s.clone()),
        other => Cell::Text(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::search::filter_contains;
    use crate::analysis::summary::summarize;

    const SHEET: &str = "name,price\n\
                         Coffee beans,10\n\
                         Ground coffee,20\n\
                         Filter paper,30\n\
                         Coffee press,40\n\
                         Kettle,50\n";

    #[test]
    fn csv_end_to_end_summary_and_search() {
        let table = load_bytes("prices.csv", SHEET.as_bytes()).unwrap();
        assert_eq!(table.n_rows(), 5);
        assert_eq!(table.column_names(), ["name", "price"]);
        assert_eq!(table.numeric_column_names(), vec!["price".to_string()]);

        let summary = summarize(&table, "price");
        assert_eq!(summary.count, 5);
        assert_eq!(format!("{:.2}", summary.mean.unwrap()), "30.00");
        assert_eq!(summary.max, Some(50.0));

        let subset = filter_contains(&table, "name", "coffee");
        assert_eq!(subset.n_rows(), 3);
        assert_eq!(subset.n_columns(), 2);
        assert_eq!(subset.column("price").unwrap().number(0), Some(10.0));
    }

    #[test]
    fn csv_missing_and_mixed_cells() {
        let data = "name,price,code\nA,10,7\nB,,x\nC,30,9\n";
        let table = load_bytes("p.csv", data.as_bytes()).unwrap();
        assert_eq!(table.column("price").unwrap().number(1), None);
        // code mixes numbers and text, so it is not offered as numeric
        assert_eq!(table.numeric_column_names(), vec!["price".to_string()]);
    }

    #[test]
    fn nan_cells_load_as_missing() {
        let data = "name,price\nA,10\nB,NaN\nC,nan\n";
        let table = load_bytes("p.csv", data.as_bytes()).unwrap();
        let price = table.column("price").unwrap();
        assert!(price.is_numeric());
        assert_eq!(price.number(1), None);
        assert_eq!(price.number(2), None);

        // one NA marker must not poison the statistics
        let s = summarize(&table, "price");
        assert_eq!(s.mean, Some(10.0));
        assert_eq!(s.max, Some(10.0));
    }

    #[test]
    fn extra_fields_are_an_error() {
        let data = "name,price\nA,10\nB,20,SURPRISE\n";
        let err = load_bytes("p.csv", data.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            LoadError::RaggedRow {
                row: 2,
                expected: 2,
                got: 3
            }
        ));
        assert!(err.to_string().contains("expected 2"));
    }

    #[test]
    fn short_csv_record_pads_missing_cells() {
        let data = "name,price\nA,10\nB\n";
        let table = load_bytes("p.csv", data.as_bytes()).unwrap();
        assert_eq!(table.n_rows(), 2);
        assert_eq!(table.column("price").unwrap().number(1), None);
    }

    #[test]
    fn unreadable_encoding_is_an_error() {
        let data = b"name,price\nA,\xff\xfe\n";
        assert!(matches!(
            load_bytes("p.csv", data),
            Err(LoadError::Csv(_))
        ));
    }

    #[test]
    fn corrupt_workbook_is_an_error() {
        let err = load_bytes("prices.xlsx", b"definitely not a zip").unwrap_err();
        assert!(matches!(err, LoadError::Workbook(_)));
        // the underlying message survives for the status line
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn dispatch_ignores_extension_case() {
        assert!(load_bytes("PRICES.XLSX", b"nope").is_err());
        assert!(load_bytes("prices.csv", SHEET.as_bytes()).is_ok());
    }
}

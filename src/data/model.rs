use std::fmt;

// ---------------------------------------------------------------------------
// Cell – one raw value as produced by the loaders, before column typing
// ---------------------------------------------------------------------------

/// A single parsed cell. Loaders emit these; [`Column::from_cells`] resolves
/// a whole column of them into one typed variant.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Number(f64),
    Text(String),
    Missing,
}

/// Format a number the way it appears in cell text: integral values without
/// a trailing `.0`.
pub fn number_text(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        v.to_string()
    }
}

// ---------------------------------------------------------------------------
// Column – typed, resolved once at load time
// ---------------------------------------------------------------------------

/// One column's values. The variant is decided once when the file is loaded
/// and never re-inferred: a column is `Numeric` iff every non-missing cell
/// is a number, otherwise the whole column is `Text` (numbers kept as their
/// textual form, no partial coercion).
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    Numeric(Vec<Option<f64>>),
    Text(Vec<Option<String>>),
}

impl Column {
    /// Resolve a run of raw cells into a typed column.
    pub fn from_cells(cells: Vec<Cell>) -> Self {
        let numeric = cells
            .iter()
            .all(|c| matches!(c, Cell::Number(_) | Cell::Missing));

        if numeric {
            Column::Numeric(
                cells
                    .into_iter()
                    .map(|c| match c {
                        Cell::Number(v) => Some(v),
                        _ => None,
                    })
                    .collect(),
            )
        } else {
            Column::Text(
                cells
                    .into_iter()
                    .map(|c| match c {
                        Cell::Text(s) => Some(s),
                        Cell::Number(v) => Some(number_text(v)),
                        Cell::Missing => None,
                    })
                    .collect(),
            )
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Column::Numeric(v) => v.len(),
            Column::Text(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Column::Numeric(_))
    }

    /// Numeric value at `row`; `None` for missing cells and text columns.
    pub fn number(&self, row: usize) -> Option<f64> {
        match self {
            Column::Numeric(v) => v.get(row).copied().flatten(),
            Column::Text(_) => None,
        }
    }

    /// Uniform cell-to-text conversion used for searching, pick-lists and
    /// ranking keys. Missing cells stay missing rather than becoming `""`.
    pub fn search_text(&self, row: usize) -> Option<String> {
        match self {
            Column::Numeric(v) => v.get(row).copied().flatten().map(number_text),
            Column::Text(v) => v.get(row).cloned().flatten(),
        }
    }

    /// Non-missing numeric values in row order. Empty for text columns.
    pub fn numbers(&self) -> Vec<f64> {
        match self {
            Column::Numeric(v) => v.iter().copied().flatten().collect(),
            Column::Text(_) => Vec::new(),
        }
    }

    /// Copy the given rows into a new column of the same variant.
    fn take_rows(&self, rows: &[usize]) -> Column {
        match self {
            Column::Numeric(v) => {
                Column::Numeric(rows.iter().map(|&r| v.get(r).copied().flatten()).collect())
            }
            Column::Text(v) => {
                Column::Text(rows.iter().map(|&r| v.get(r).cloned().flatten()).collect())
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Table – the complete loaded sheet
// ---------------------------------------------------------------------------

/// The loaded sheet: ordered named columns of equal length. Row order matches
/// the source file and is never reshuffled; derived subsets are new `Table`s.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    names: Vec<String>,
    columns: Vec<Column>,
    n_rows: usize,
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} rows x {} columns", self.n_rows, self.columns.len())
    }
}

impl Table {
    /// Assemble a table from parallel name/column lists. Columns must all
    /// have the same length; the loaders guarantee this.
    pub fn new(names: Vec<String>, columns: Vec<Column>) -> Self {
        debug_assert_eq!(names.len(), columns.len());
        let n_rows = columns.first().map_or(0, Column::len);
        debug_assert!(columns.iter().all(|c| c.len() == n_rows));
        Table {
            names,
            columns,
            n_rows,
        }
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.n_rows == 0
    }

    pub fn column_names(&self) -> &[String] {
        &self.names
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| &self.columns[i])
    }

    pub fn column_at(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    /// Names of the columns resolved as numeric, in table order. Drives
    /// which columns the price/ranking selectors offer.
    pub fn numeric_column_names(&self) -> Vec<String> {
        self.names
            .iter()
            .zip(&self.columns)
            .filter(|(_, c)| c.is_numeric())
            .map(|(n, _)| n.clone())
            .collect()
    }

    /// Derive a new table containing the given rows of every column, in the
    /// given order. The source table is untouched.
    pub fn take_rows(&self, rows: &[usize]) -> Table {
        Table {
            names: self.names.clone(),
            columns: self.columns.iter().map(|c| c.take_rows(rows)).collect(),
            n_rows: rows.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(raw: &[&str]) -> Vec<Cell> {
        raw.iter()
            .map(|s| {
                if s.is_empty() {
                    Cell::Missing
                } else if let Ok(v) = s.parse::<f64>() {
                    Cell::Number(v)
                } else {
                    Cell::Text(s.to_string())
                }
            })
            .collect()
    }

    #[test]
    fn all_numbers_resolve_to_numeric() {
        let col = Column::from_cells(cells(&["1.5", "2", ""]));
        assert_eq!(col, Column::Numeric(vec![Some(1.5), Some(2.0), None]));
    }

    #[test]
    fn mixed_column_resolves_to_text_wholesale() {
        let col = Column::from_cells(cells(&["1.5", "abc", ""]));
        assert!(!col.is_numeric());
        assert_eq!(col.search_text(0), Some("1.5".to_string()));
        assert_eq!(col.search_text(1), Some("abc".to_string()));
        assert_eq!(col.search_text(2), None);
    }

    #[test]
    fn numeric_search_text_drops_trailing_zero() {
        let col = Column::from_cells(vec![Cell::Number(30.0), Cell::Number(2.25)]);
        assert_eq!(col.search_text(0), Some("30".to_string()));
        assert_eq!(col.search_text(1), Some("2.25".to_string()));
    }

    #[test]
    fn take_rows_preserves_order_and_columns() {
        let table = Table::new(
            vec!["name".into(), "price".into()],
            vec![
                Column::from_cells(cells(&["a", "b", "c"])),
                Column::from_cells(cells(&["10", "20", "30"])),
            ],
        );
        let subset = table.take_rows(&[2, 0]);
        assert_eq!(subset.n_rows(), 2);
        assert_eq!(subset.column_names(), table.column_names());
        assert_eq!(
            subset.column("name").unwrap().search_text(0),
            Some("c".to_string())
        );
        assert_eq!(subset.column("price").unwrap().number(1), Some(10.0));
    }

    #[test]
    fn numeric_classification_excludes_mixed_columns() {
        let table = Table::new(
            vec!["name".into(), "price".into(), "code".into()],
            vec![
                Column::from_cells(cells(&["a", "b"])),
                Column::from_cells(cells(&["10", "20"])),
                Column::from_cells(cells(&["1", "x"])),
            ],
        );
        assert_eq!(table.numeric_column_names(), vec!["price".to_string()]);
    }
}

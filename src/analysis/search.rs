use crate::data::model::Table;

// ---------------------------------------------------------------------------
// Substring search over one column
// ---------------------------------------------------------------------------

/// Rows whose value in `column` contains `term`, case-insensitively, as a
/// new table with every column and the original row order intact.
///
/// An empty term is inert and returns the whole table unchanged. Missing
/// cells never match, whatever the term.
pub fn filter_contains(table: &Table, column: &str, term: &str) -> Table {
    if term.is_empty() {
        return table.clone();
    }

    let needle = term.to_lowercase();
    let rows: Vec<usize> = match table.column(column) {
        Some(col) => (0..table.n_rows())
            .filter(|&row| {
                col.search_text(row)
                    .is_some_and(|text| text.to_lowercase().contains(&needle))
            })
            .collect(),
        None => Vec::new(),
    };

    table.take_rows(&rows)
}

/// Distinct values of `column` in first-occurrence order, as search text.
/// Feeds the product pick-list, so it runs over the filtered subset.
pub fn unique_values(table: &Table, column: &str) -> Vec<String> {
    let Some(col) = table.column(column) else {
        return Vec::new();
    };
    let mut seen = std::collections::BTreeSet::new();
    (0..table.n_rows())
        .filter_map(|row| col.search_text(row))
        .filter(|text| seen.insert(text.clone()))
        .collect()
}

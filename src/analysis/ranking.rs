use crate::data::model::Table;

// ---------------------------------------------------------------------------
// Top-N ranking by a numeric column
// ---------------------------------------------------------------------------

/// One ranked row: the key column's text and the ranked value.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedRow {
    pub key: String,
    pub value: f64,
}

/// The `n` rows with the largest values in `value_column`, descending, each
/// paired with its `key_column` text. Ties keep original row order (stable
/// sort); rows with a missing value are skipped; `n` past the row count
/// returns everything.
pub fn top_n(table: &Table, key_column: &str, value_column: &str, n: usize) -> Vec<RankedRow> {
    let Some(values) = table.column(value_column) else {
        return Vec::new();
    };
    let keys = table.column(key_column);

    let mut ranked: Vec<(usize, f64)> = (0..table.n_rows())
        .filter_map(|row| values.number(row).map(|v| (row, v)))
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked.truncate(n);

    ranked
        .into_iter()
        .map(|(row, value)| RankedRow {
            key: keys
                .and_then(|col| col.search_text(row))
                .unwrap_or_default(),
            value,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Cell, Column, Table};

    fn table(keys: &[&str], values: &[Option<f64>]) -> Table {
        Table::new(
            vec!["name".into(), "price".into()],
            vec![
                Column::from_cells(keys.iter().map(|s| Cell::Text(s.to_string())).collect()),
                Column::from_cells(
                    values
                        .iter()
                        .map(|v| v.map_or(Cell::Missing, Cell::Number))
                        .collect(),
                ),
            ],
        )
    }

    #[test]
    fn ties_keep_original_row_order() {
        let t = table(
            &["a", "b", "c", "d", "e"],
            &[Some(10.0), Some(50.0), Some(30.0), Some(50.0), Some(20.0)],
        );
        let ranked = top_n(&t, "name", "price", 3);
        let pairs: Vec<(&str, f64)> = ranked.iter().map(|r| (r.key.as_str(), r.value)).collect();
        assert_eq!(pairs, vec![("b", 50.0), ("d", 50.0), ("c", 30.0)]);
    }

    #[test]
    fn n_past_row_count_returns_all_descending() {
        let t = table(&["a", "b"], &[Some(1.0), Some(2.0)]);
        let ranked = top_n(&t, "name", "price", 10);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].key, "b");
        assert_eq!(ranked[1].key, "a");
    }

    #[test]
    fn missing_values_are_skipped() {
        let t = table(&["a", "b", "c"], &[Some(1.0), None, Some(3.0)]);
        let ranked = top_n(&t, "name", "price", 5);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].key, "c");
    }

    #[test]
    fn zero_n_is_empty() {
        let t = table(&["a"], &[Some(1.0)]);
        assert!(top_n(&t, "name", "price", 0).is_empty());
    }
}

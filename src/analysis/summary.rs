use crate::data::model::Table;

// ---------------------------------------------------------------------------
// Column summary: count / mean / max
// ---------------------------------------------------------------------------

/// Quick statistics for one numeric column. `count` is the row count of the
/// whole table; `mean` and `max` skip missing cells and are `None` when the
/// column has no usable values (reported as unavailable, never NaN).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnSummary {
    pub count: usize,
    pub mean: Option<f64>,
    pub max: Option<f64>,
}

pub fn summarize(table: &Table, column: &str) -> ColumnSummary {
    // mean and max share one NaN-free value list, so neither can report a
    // result the other would mask
    let values: Vec<f64> = table
        .column(column)
        .map_or_else(Vec::new, |c| c.numbers())
        .into_iter()
        .filter(|v| !v.is_nan())
        .collect();

    let mean = if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    };
    let max = values.iter().copied().reduce(f64::max);

    ColumnSummary {
        count: table.n_rows(),
        mean,
        max,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Cell, Column, Table};

    fn price_table(prices: &[Option<f64>]) -> Table {
        let names: Vec<Cell> = prices
            .iter()
            .enumerate()
            .map(|(i, _)| Cell::Text(format!("p{i}")))
            .collect();
        let price: Vec<Cell> = prices
            .iter()
            .map(|p| p.map_or(Cell::Missing, Cell::Number))
            .collect();
        Table::new(
            vec!["name".into(), "price".into()],
            vec![Column::from_cells(names), Column::from_cells(price)],
        )
    }

    #[test]
    fn count_is_full_row_count() {
        let table = price_table(&[Some(10.0), None, Some(30.0)]);
        assert_eq!(summarize(&table, "price").count, 3);
    }

    #[test]
    fn mean_and_max_skip_missing() {
        let table = price_table(&[Some(10.0), None, Some(30.0)]);
        let s = summarize(&table, "price");
        assert_eq!(s.mean, Some(20.0));
        assert_eq!(s.max, Some(30.0));
    }

    #[test]
    fn all_missing_column_is_unavailable_not_nan() {
        let table = price_table(&[None, None]);
        let s = summarize(&table, "price");
        assert_eq!(s.count, 2);
        assert_eq!(s.mean, None);
        assert_eq!(s.max, None);
    }

    #[test]
    fn stray_nan_values_are_ignored_by_mean_and_max() {
        let table = Table::new(
            vec!["price".into()],
            vec![Column::Numeric(vec![Some(10.0), Some(f64::NAN), Some(30.0)])],
        );
        let s = summarize(&table, "price");
        assert_eq!(s.mean, Some(20.0));
        assert_eq!(s.max, Some(30.0));
    }

    #[test]
    fn mean_of_five_prices() {
        let table = price_table(&[Some(10.0), Some(20.0), Some(30.0), Some(40.0), Some(50.0)]);
        let s = summarize(&table, "price");
        assert_eq!(format!("{:.2}", s.mean.unwrap()), "30.00");
        assert_eq!(s.max, Some(50.0));
    }
}

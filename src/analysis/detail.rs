use crate::data::model::Table;

// ---------------------------------------------------------------------------
// Product detail: matching rows + delta against the population mean
// ---------------------------------------------------------------------------

/// Price position of one product relative to the whole sheet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceDelta {
    /// Selected price minus the population mean.
    pub difference: f64,
    /// `difference / mean * 100`; `None` when the mean is zero.
    pub percent: Option<f64>,
}

/// Rows of the subset matching the selected key, plus the delta when a price
/// column is active.
#[derive(Debug, Clone)]
pub struct ProductDetail {
    pub rows: Table,
    /// Price of the first matching row, also the histogram marker position.
    pub price: Option<f64>,
    pub delta: Option<PriceDelta>,
}

/// Resolve the selected key against the current subset. Duplicate keys keep
/// every matching row; the first row supplies the single comparison price.
/// An undefined population mean leaves the delta unavailable rather than
/// dividing through.
pub fn resolve_product(
    subset: &Table,
    search_column: &str,
    key: &str,
    price_column: Option<&str>,
    population_mean: Option<f64>,
) -> ProductDetail {
    let rows: Vec<usize> = match subset.column(search_column) {
        Some(col) => (0..subset.n_rows())
            .filter(|&row| col.search_text(row).as_deref() == Some(key))
            .collect(),
        None => Vec::new(),
    };
    let rows = subset.take_rows(&rows);

    let price = price_column
        .and_then(|name| rows.column(name))
        .and_then(|col| col.number(0));

    let delta = match (price, population_mean) {
        (Some(value), Some(mean)) => Some(PriceDelta {
            difference: value - mean,
            percent: (mean != 0.0).then(|| (value - mean) / mean * 100.0),
        }),
        _ => None,
    };

    ProductDetail { rows, price, delta }
}

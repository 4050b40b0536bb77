use crate::analysis::search::{filter_contains, unique_values};
use crate::data::model::Table;

/// Rows shown in the data preview grid.
pub const PREVIEW_ROWS: usize = 5;
/// Default for the top-products slider (range 5..=50).
pub const DEFAULT_TOP_N: usize = 10;

/// Which tab of the advanced-analysis section is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdvancedTab {
    #[default]
    Distribution,
    TopProducts,
}

// ---------------------------------------------------------------------------
// Session state
// ---------------------------------------------------------------------------

/// The whole session's state, independent of rendering. One loaded table is
/// the source of truth; everything else is derived from it and replaced
/// wholesale on the next load.
pub struct AppState {
    /// Loaded price sheet (None until a file is opened).
    pub table: Option<Table>,

    /// Cached numeric column names, recomputed per load.
    pub numeric_columns: Vec<String>,

    /// Column used for price statistics, distribution and ranking.
    pub price_column: Option<String>,

    /// Column the search runs over.
    pub search_column: Option<String>,

    /// Current search term. Empty means no search attempted.
    pub search_term: String,

    /// Filtered subset for the current term; `None` when no search has been
    /// attempted, `Some` with zero rows when the search matched nothing.
    pub results: Option<Table>,

    /// Pick-list for the product selector, derived from `results`.
    pub product_keys: Vec<String>,

    /// Selected key from `product_keys`.
    pub selected_product: Option<String>,

    /// Requested count for the top-products view.
    pub top_n: usize,

    /// Open tab in the advanced-analysis section.
    pub advanced_tab: AdvancedTab,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            table: None,
            numeric_columns: Vec::new(),
            price_column: None,
            search_column: None,
            search_term: String::new(),
            results: None,
            product_keys: Vec::new(),
            selected_product: None,
            top_n: DEFAULT_TOP_N,
            advanced_tab: AdvancedTab::default(),
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded table, replacing every derived selection.
    pub fn set_table(&mut self, table: Table) {
        self.numeric_columns = table.numeric_column_names();
        self.price_column = self.numeric_columns.first().cloned();
        self.search_column = table.column_names().first().cloned();
        self.search_term.clear();
        self.results = None;
        self.product_keys = Vec::new();
        self.selected_product = None;
        self.status_message = None;
        self.table = Some(table);
    }

    /// Recompute the filtered subset and its pick-list after the term or the
    /// search column changed. An empty term means search is inert.
    pub fn run_search(&mut self) {
        self.results = None;
        self.product_keys = Vec::new();
        self.selected_product = None;

        let (Some(table), Some(column)) = (&self.table, &self.search_column) else {
            return;
        };
        if self.search_term.is_empty() {
            return;
        }

        let subset = filter_contains(table, column, &self.search_term);
        self.product_keys = unique_values(&subset, column);
        self.selected_product = self.product_keys.first().cloned();
        self.results = Some(subset);
    }

    pub fn select_product(&mut self, key: String) {
        self.selected_product = Some(key);
    }
}

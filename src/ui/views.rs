use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::{Column as GridColumn, TableBuilder};

use crate::analysis::bins::{histogram, value_count_bins, HISTOGRAM_BINS, OVERVIEW_BINS};
use crate::analysis::detail::resolve_product;
use crate::analysis::ranking::top_n;
use crate::analysis::summary::{summarize, ColumnSummary};
use crate::data::model::Table;
use crate::state::{AdvancedTab, AppState, PREVIEW_ROWS};
use crate::ui::plot;

// ---------------------------------------------------------------------------
// Central report
// ---------------------------------------------------------------------------

/// Render the whole report for the current session state.
pub fn central_report(ui: &mut Ui, state: &mut AppState) {
    let Some(table) = state.table.clone() else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a price sheet to begin  (File → Open…)");
        });
        return;
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            preview_section(ui, &table);
            ui.separator();

            let summary = state
                .price_column
                .as_deref()
                .map(|col| summarize(&table, col));
            statistics_section(ui, &table, summary.as_ref());
            ui.separator();

            search_section(ui, state, &table, summary.as_ref());
            ui.separator();

            advanced_section(ui, state, &table);
        });
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

fn preview_section(ui: &mut Ui, table: &Table) {
    ui.heading("Data preview");
    table_grid(ui, table, "preview", Some(PREVIEW_ROWS));
}

fn statistics_section(ui: &mut Ui, table: &Table, summary: Option<&ColumnSummary>) {
    ui.heading("Basic statistics");
    ui.horizontal(|ui: &mut Ui| {
        metric(ui, "Products", table.n_rows().to_string());
        // No numeric column loaded → price metrics simply absent, not an error.
        if let Some(s) = summary {
            metric(ui, "Average price", format_price(s.mean));
            metric(ui, "Maximum price", format_price(s.max));
        }
    });
}

fn search_section(
    ui: &mut Ui,
    state: &mut AppState,
    table: &Table,
    summary: Option<&ColumnSummary>,
) {
    ui.heading("Product search");

    let Some(results) = state.results.clone() else {
        ui.label("Enter a search term in the panel on the left.");
        return;
    };

    if results.is_empty() {
        ui.colored_label(Color32::YELLOW, "No products match this search term.");
        return;
    }

    ui.colored_label(
        Color32::LIGHT_GREEN,
        format!("Found {} products", results.n_rows()),
    );
    table_grid(ui, &results, "results", None);

    let Some(key) = state.selected_product.clone() else {
        return;
    };
    let Some(search_column) = state.search_column.clone() else {
        return;
    };

    ui.add_space(8.0);
    ui.strong("Selected product");

    let price_column = state.price_column.as_deref();
    let mean = summary.and_then(|s| s.mean);
    let detail = resolve_product(&results, &search_column, &key, price_column, mean);
    table_grid(ui, &detail.rows, "detail", None);

    if let Some(col) = price_column {
        let values = table.column(col).map_or_else(Vec::new, |c| c.numbers());
        if let Some(hist) = histogram(&values, HISTOGRAM_BINS) {
            plot::histogram_plot(ui, &hist, detail.price);
        }

        match detail.delta {
            Some(delta) => {
                let percent = delta
                    .percent
                    .map_or_else(|| "unavailable".to_string(), |p| format!("{p:+.1}%"));
                metric(
                    ui,
                    "Difference to mean",
                    format!("{:+.2}  ({percent})", delta.difference),
                );
            }
            None => metric(ui, "Difference to mean", "unavailable".to_string()),
        }
    }
}

fn advanced_section(ui: &mut Ui, state: &mut AppState, table: &Table) {
    let Some(price_column) = state.price_column.clone() else {
        return;
    };

    ui.heading("Advanced analysis");
    ui.horizontal(|ui: &mut Ui| {
        ui.selectable_value(
            &mut state.advanced_tab,
            AdvancedTab::Distribution,
            "Distribution",
        );
        ui.selectable_value(
            &mut state.advanced_tab,
            AdvancedTab::TopProducts,
            "Top products",
        );
    });

    match state.advanced_tab {
        AdvancedTab::Distribution => {
            let values = table
                .column(&price_column)
                .map_or_else(Vec::new, |c| c.numbers());
            let bins = value_count_bins(&values, OVERVIEW_BINS);
            if bins.is_empty() {
                ui.label("No prices to summarise.");
            } else {
                plot::overview_chart(ui, &bins);
            }
        }
        AdvancedTab::TopProducts => {
            ui.add(egui::Slider::new(&mut state.top_n, 5..=50).text("Number of products"));
            let key_column = state
                .search_column
                .clone()
                .unwrap_or_else(|| price_column.clone());
            let ranked = top_n(table, &key_column, &price_column, state.top_n);
            ranked_grid(ui, &key_column, &price_column, &ranked);
        }
    }
}

// ---------------------------------------------------------------------------
// Grid helpers
// ---------------------------------------------------------------------------

/// Shared grid rendering for the preview, results and detail tables.
fn table_grid(ui: &mut Ui, table: &Table, id: &str, max_rows: Option<usize>) {
    let n_rows = max_rows.map_or(table.n_rows(), |m| table.n_rows().min(m));
    let n_cols = table.n_columns();

    ui.push_id(id, |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .columns(GridColumn::auto().resizable(true).at_least(60.0), n_cols)
            .header(20.0, |mut header| {
                for name in table.column_names() {
                    header.col(|ui| {
                        ui.strong(name);
                    });
                }
            })
            .body(|body| {
                body.rows(18.0, n_rows, |mut row| {
                    let r = row.index();
                    for c in 0..n_cols {
                        row.col(|ui| {
                            let text = table
                                .column_at(c)
                                .and_then(|col| col.search_text(r))
                                .unwrap_or_default();
                            ui.label(text);
                        });
                    }
                });
            });
    });
}

fn ranked_grid(
    ui: &mut Ui,
    key_column: &str,
    price_column: &str,
    ranked: &[crate::analysis::ranking::RankedRow],
) {
    ui.push_id("top_products", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .columns(GridColumn::auto().resizable(true).at_least(80.0), 2)
            .header(20.0, |mut header| {
                header.col(|ui| {
                    ui.strong(key_column);
                });
                header.col(|ui| {
                    ui.strong(price_column);
                });
            })
            .body(|body| {
                body.rows(18.0, ranked.len(), |mut row| {
                    let entry = &ranked[row.index()];
                    row.col(|ui| {
                        ui.label(&entry.key);
                    });
                    row.col(|ui| {
                        ui.label(format!("{:.2}", entry.value));
                    });
                });
            });
    });
}

fn metric(ui: &mut Ui, label: &str, value: String) {
    ui.vertical(|ui: &mut Ui| {
        ui.label(label);
        ui.label(RichText::new(value).heading());
    });
    ui.add_space(24.0);
}

fn format_price(value: Option<f64>) -> String {
    value.map_or_else(|| "unavailable".to_string(), |v| format!("{v:.2}"))
}

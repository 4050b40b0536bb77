use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::loader;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – analysis controls
// ---------------------------------------------------------------------------

/// Render the left controls panel: column selectors, search box, product
/// pick-list and the top-N slider.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Controls");
    ui.separator();

    let Some(table) = &state.table else {
        ui.label("No file loaded.");
        return;
    };

    // Clone the option lists so the combos can mutate state.
    let all_columns: Vec<String> = table.column_names().to_vec();
    let numeric_columns = state.numeric_columns.clone();
    let product_keys = state.product_keys.clone();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.strong("Price column");
            if numeric_columns.is_empty() {
                ui.label("No numeric columns in this file.");
            } else {
                let current = state.price_column.clone().unwrap_or_default();
                egui::ComboBox::from_id_salt("price_column")
                    .selected_text(&current)
                    .show_ui(ui, |ui: &mut Ui| {
                        for col in &numeric_columns {
                            if ui.selectable_label(current == *col, col).clicked() {
                                state.price_column = Some(col.clone());
                            }
                        }
                    });
            }
            ui.separator();

            ui.strong("Search column");
            let current = state.search_column.clone().unwrap_or_default();
            egui::ComboBox::from_id_salt("search_column")
                .selected_text(&current)
                .show_ui(ui, |ui: &mut Ui| {
                    for col in &all_columns {
                        if ui.selectable_label(current == *col, col).clicked() {
                            state.search_column = Some(col.clone());
                            state.run_search();
                        }
                    }
                });

            ui.strong("Search term");
            if ui.text_edit_singleline(&mut state.search_term).changed() {
                state.run_search();
            }
            ui.separator();

            if !product_keys.is_empty() {
                ui.strong("Product");
                let selected = state.selected_product.clone().unwrap_or_default();
                egui::ComboBox::from_id_salt("product_key")
                    .selected_text(&selected)
                    .show_ui(ui, |ui: &mut Ui| {
                        for key in &product_keys {
                            if ui.selectable_label(selected == *key, key).clicked() {
                                state.select_product(key.clone());
                            }
                        }
                    });
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(table) = &state.table {
            let visible = state
                .results
                .as_ref()
                .map_or(table.n_rows(), |r| r.n_rows());
            ui.label(format!("{} products loaded, {visible} shown", table.n_rows()));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open price sheet")
        .add_filter("Price sheets", &["csv", "xlsx"])
        .add_filter("CSV", &["csv"])
        .add_filter("Excel workbook", &["xlsx"])
        .pick_file();

    if let Some(path) = file {
        match loader::load_path(&path) {
            Ok(table) => {
                log::info!("Loaded {table} from {}", path.display());
                state.set_table(table);
            }
            Err(e) => {
                // Keep the previous table; only the message changes.
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}

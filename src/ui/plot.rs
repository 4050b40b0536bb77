use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, GridMark, LineStyle, Plot, VLine};

use crate::analysis::bins::{BinCount, Histogram};
use crate::color;

// ---------------------------------------------------------------------------
// Price distribution histogram
// ---------------------------------------------------------------------------

/// Render the price histogram, with a dashed marker at the selected
/// product's price when one is active.
pub fn histogram_plot(ui: &mut Ui, hist: &Histogram, marker: Option<f64>) {
    let bars: Vec<Bar> = hist
        .counts
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            Bar::new(hist.center(i), count as f64).width(hist.bin_width * 0.95)
        })
        .collect();

    Plot::new("price_histogram")
        .height(260.0)
        .x_axis_label("Price")
        .y_axis_label("Products")
        .allow_drag(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(
                BarChart::new(bars)
                    .name("Prices")
                    .color(color::HISTOGRAM_BAR),
            );
            if let Some(x) = marker {
                plot_ui.vline(
                    VLine::new(x)
                        .name("Selected product")
                        .color(color::PRICE_MARKER)
                        .style(LineStyle::dashed_loose())
                        .width(2.0),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Value-count overview bars
// ---------------------------------------------------------------------------

/// Render the compact value-count overview: one coloured bar per price
/// range, labels on the x axis, tallest ranges first.
pub fn overview_chart(ui: &mut Ui, bins: &[BinCount]) {
    let palette = color::bar_palette(bins.len());
    let bars: Vec<Bar> = bins
        .iter()
        .zip(&palette)
        .enumerate()
        .map(|(i, (bin, &col))| {
            Bar::new(i as f64, bin.count as f64)
                .width(0.8)
                .name(&bin.label)
                .fill(col)
        })
        .collect();

    let labels: Vec<String> = bins.iter().map(|b| b.label.clone()).collect();

    Plot::new("price_overview")
        .height(220.0)
        .y_axis_label("Products")
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .x_axis_formatter(move |mark: GridMark, _range| {
            let i = mark.value.round();
            if (mark.value - i).abs() > 1e-6 || i < 0.0 {
                return String::new();
            }
            labels.get(i as usize).cloned().unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

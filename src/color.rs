use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Chart colours
// ---------------------------------------------------------------------------

/// Fill for the price-distribution histogram bars.
pub const HISTOGRAM_BAR: Color32 = Color32::from_rgb(90, 140, 220);

/// Marker line for the selected product's price.
pub const PRICE_MARKER: Color32 = Color32::from_rgb(220, 70, 60);

/// `n` colours for the overview bars: a hue sweep from teal towards violet,
/// so adjacent bars stay distinguishable at small sizes.
pub fn bar_palette(n: usize) -> Vec<Color32> {
    (0..n)
        .map(|i| {
            let t = i as f32 / n.max(1) as f32;
            let hsl = Hsl::new(185.0 + t * 120.0, 0.6, 0.5);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

use anyhow::{Context, Result};
use serde::Serialize;

/// One line of the generated supplier sheet. `price` stays optional so the
/// output also exercises missing-value handling.
#[derive(Serialize)]
struct ProductRow {
    name: String,
    category: String,
    supplier: String,
    price: Option<f64>,
    stock: i64,
}

/// Minimal deterministic PRNG (splitmix64).
struct SampleRng(u64);

impl SampleRng {
    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9e3779b97f4a7c15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        z ^ (z >> 31)
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_f64() * (hi - lo)
    }
}

fn main() -> Result<()> {
    let mut rng = SampleRng(7);

    let adjectives = ["Premium", "Classic", "Eco", "Family", "Mini", "Pro"];
    let products: [(&str, &str, f64); 8] = [
        ("Coffee Beans 1kg", "Beverages", 42.0),
        ("Green Tea Box", "Beverages", 18.0),
        ("Olive Oil 500ml", "Pantry", 35.0),
        ("Whole Wheat Pasta", "Pantry", 9.0),
        ("Dish Soap", "Cleaning", 6.5),
        ("Laundry Powder 2kg", "Cleaning", 24.0),
        ("Notebook A5", "Stationery", 12.0),
        ("Ballpoint Pens 10x", "Stationery", 15.0),
    ];
    let suppliers = ["Atlas Foods", "Verde Trading", "Northline Supply"];

    let output_path = "sample_prices.csv";
    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;

    let mut n_rows = 0;
    for adjective in &adjectives {
        for (base_name, category, base_price) in &products {
            let supplier = suppliers[(rng.next_u64() % suppliers.len() as u64) as usize];
            let spread = rng.uniform(0.8, 1.4);
            // every 11th row ships without a price
            let price = (n_rows % 11 != 10)
                .then(|| (base_price * spread * 100.0).round() / 100.0);

            writer.serialize(ProductRow {
                name: format!("{adjective} {base_name}"),
                category: category.to_string(),
                supplier: supplier.to_string(),
                price,
                stock: (rng.uniform(0.0, 500.0)) as i64,
            })?;
            n_rows += 1;
        }
    }
    writer.flush().context("writing sample sheet")?;

    println!("Wrote {n_rows} products to {output_path}");
    Ok(())
}

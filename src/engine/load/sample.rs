use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::engine::core::{Dataset, Record};
use crate::engine::types::Value;

const REGIONS: &[&str] = &["North", "South", "East", "West"];
const DEPARTMENTS: &[&str] = &["Electronics", "Clothing", "Home", "Sports"];
const PRODUCTS: &[(&str, &str, f64)] = &[
    ("Electronics", "Headphones", 129.99),
    ("Electronics", "Smart Watch", 249.99),
    ("Clothing", "Running Shoes", 79.99),
    ("Clothing", "Rain Jacket", 99.5),
    ("Home", "Desk Lamp", 34.99),
    ("Home", "Coffee Grinder", 59.0),
    ("Sports", "Yoga Mat", 29.99),
    ("Sports", "Tennis Racket", 89.99),
];
const QUARTERS: &[&str] = &["Q1", "Q2", "Q3", "Q4"];

/// Bundled sales dataset for demos. The same `seed` always yields the same rows.
pub fn sample_dataset(rows: usize, seed: u64) -> Dataset {
    let mut rng = StdRng::seed_from_u64(seed);
    let records = (0..rows)
        .map(|i| {
            let department = DEPARTMENTS[rng.gen_range(0..DEPARTMENTS.len())];
            let candidates: Vec<&(&str, &str, f64)> =
                PRODUCTS.iter().filter(|p| p.0 == department).collect();
            let (_, product, price) = *candidates[rng.gen_range(0..candidates.len())];
            let units: u32 = rng.gen_range(1..=12);
            // Roughly one row in twenty carries a sales figure that failed to export
            let sales = if i > 0 && rng.gen_ratio(1, 20) {
                Value::from("N/A")
            } else {
                Value::Number((price * units as f64 * 100.0).round() / 100.0)
            };

            Record::new()
                .with("region", REGIONS[rng.gen_range(0..REGIONS.len())])
                .with("department", department)
                .with("product", product)
                .with("quarter", QUARTERS[rng.gen_range(0..QUARTERS.len())])
                .with("sales", sales)
                .with("units", Value::Number(units as f64))
                .with("returned", rng.gen_bool(0.08))
        })
        .collect();
    Dataset::new(records)
}

//! Product selection.

use std::collections::HashMap;

use crate::domain::{Dataset, ProductSeries, SeriesPoint};
use crate::error::AppError;

/// Resolve `requested` case-insensitively to the label used in the dataset.
///
/// When two labels differ only by case, the one seen first wins.
pub fn resolve_product(dataset: &Dataset, requested: &str) -> Result<String, AppError> {
    let mut lookup: HashMap<String, &str> = HashMap::new();
    for row in &dataset.rows {
        lookup
            .entry(row.product.to_lowercase())
            .or_insert(row.product.as_str());
    }

    lookup
        .get(&requested.to_lowercase())
        .map(|canonical| canonical.to_string())
        .ok_or_else(|| AppError::NotFound(requested.to_string()))
}

/// Filter `dataset` to one product, stably sorted by year.
///
/// Duplicate years are kept in source order. `pct_change` is left at zero
/// until the series goes through `analysis::derive_pct_change`.
pub fn select(dataset: &Dataset, requested: &str) -> Result<ProductSeries, AppError> {
    let product = resolve_product(dataset, requested)?;

    let mut points: Vec<SeriesPoint> = dataset
        .rows
        .iter()
        .filter(|r| r.product == product)
        .map(|r| SeriesPoint {
            year: r.year,
            value: r.value,
            pct_change: 0.0,
        })
        .collect();
    points.sort_by_key(|p| p.year);

    log::debug!("selected '{product}': {} observation(s)", points.len());
    Ok(ProductSeries { product, points })
}

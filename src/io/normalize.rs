//! Row normalization: `RawTable` -> `Dataset`.
//!
//! - coerce `god` (year) and `vrednost` (value) to numbers, treating anything
//!   unparseable as missing
//! - drop rows missing either field
//! - require the `nProizvod` product column
//! - relabel products through the translation table
//!
//! Row order is preserved apart from dropped rows.

use std::collections::BTreeSet;

use serde_json::Value;

use crate::domain::{Dataset, Observation, TranslationTable};
use crate::error::AppError;
use crate::io::ingest::{RawTable, Row};

pub const PRODUCT_COLUMN: &str = "nProizvod";
pub const YEAR_COLUMN: &str = "god";
pub const VALUE_COLUMN: &str = "vrednost";

/// Clean a raw table into typed observations with translated product labels.
pub fn clean(table: &RawTable, translation: &TranslationTable) -> Result<Dataset, AppError> {
    if !table.has_column(PRODUCT_COLUMN) {
        return Err(AppError::Schema(format!(
            "Source data has no '{PRODUCT_COLUMN}' (product name) column; found: [{}].",
            table.columns.iter().cloned().collect::<Vec<_>>().join(", ")
        )));
    }

    let rows: Vec<Observation> = table.rows.iter().filter_map(parse_row).collect();

    let dropped = table.len() - rows.len();
    if dropped > 0 {
        log::info!(
            "dropped {dropped} of {} row(s) with a missing product, year or value",
            table.len()
        );
    }

    Ok(relabel(&Dataset::new(rows), translation))
}

/// Rewrite every product label through `translation`.
///
/// Idempotent: translated labels are not keys of the table, so a second pass
/// leaves them unchanged.
pub fn relabel(dataset: &Dataset, translation: &TranslationTable) -> Dataset {
    let unmapped: BTreeSet<&str> = dataset
        .rows
        .iter()
        .map(|r| r.product.as_str())
        .filter(|p| !translation.contains(p))
        .collect();
    if !unmapped.is_empty() {
        log::debug!("labels without translation: {unmapped:?}");
    }

    let rows = dataset
        .rows
        .iter()
        .map(|r| Observation {
            product: translation.translate(&r.product).to_string(),
            ..r.clone()
        })
        .collect();
    Dataset::new(rows)
}

fn parse_row(row: &Row) -> Option<Observation> {
    let year = coerce_year(row.get(YEAR_COLUMN))?;
    let value = coerce_number(row.get(VALUE_COLUMN))?;
    let product = row.get(PRODUCT_COLUMN)?.as_str()?.to_string();
    Some(Observation {
        product,
        year,
        value,
    })
}

/// JSON number or numeric string -> finite `f64`.
pub fn coerce_number(value: Option<&Value>) -> Option<f64> {
    let v = match value? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    if v.is_finite() { Some(v) } else { None }
}

/// Like `coerce_number`, but the result must be a whole number that fits `i32`.
pub fn coerce_year(value: Option<&Value>) -> Option<i32> {
    let v = coerce_number(value)?;
    if v.fract() != 0.0 || v < i32::MIN as f64 || v > i32::MAX as f64 {
        return None;
    }
    Some(v as i32)
}

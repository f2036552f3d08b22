//! Formatted terminal output.
//!
//! We keep formatting code in one place so the analysis code stays free of
//! presentation concerns and output changes are localized.

use serde::Serialize;

use crate::analysis::round_to;
use crate::domain::{Dataset, ExtremaReport, Extremum, ProductSeries};
use crate::error::AppError;

/// Currency the source publishes prices in.
pub const CURRENCY: &str = "rsd";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Decrease,
    Increase,
}

impl Direction {
    fn word(self) -> &'static str {
        match self {
            Direction::Decrease => "decrease",
            Direction::Increase => "increase",
        }
    }
}

/// Report sentences: largest decrease, then largest increase.
///
/// A note line follows a sentence whose change was not measured against the
/// calendar year before it (gap or duplicate year in the source).
pub fn describe(report: &ExtremaReport, product: &str) -> Vec<String> {
    let mut lines = Vec::with_capacity(2);
    for (direction, e) in [
        (Direction::Decrease, &report.decrease),
        (Direction::Increase, &report.increase),
    ] {
        lines.push(sentence(direction, e, product));
        if let Some(note) = adjacency_note(e, product) {
            lines.push(note);
        }
    }
    lines
}

fn sentence(direction: Direction, e: &Extremum, product: &str) -> String {
    let word = direction.word();
    format!(
        "For {product} biggest {word} in price was in year {} where price was {} {CURRENCY} \
         which is total {word} of {}% from previous year {} where price was {} {CURRENCY}",
        e.year,
        fmt_price(e.price),
        fmt_pct(e.pct),
        e.prior_year,
        fmt_price(e.prior_price),
    )
}

fn adjacency_note(e: &Extremum, product: &str) -> Option<String> {
    let from = e.measured_from_year.filter(|_| !e.is_calendar_adjacent())?;
    let note = if from == e.year {
        format!(
            "Note: {product} has more than one entry for {}; the {} change is measured from the earlier entry.",
            e.year, e.year
        )
    } else {
        format!(
            "Note: {product} has no data for {}; the {} change is measured from {from}.",
            e.prior_year, e.year
        )
    };
    Some(note)
}

/// Fraction -> percent, 2 decimals (independent of the 4-decimal analysis rounding).
pub fn fmt_pct(pct: f64) -> String {
    // `+ 0.0` turns a rounded `-0.0` into `0.0`.
    format!("{:.2}", round_to(pct * 100.0, 2) + 0.0)
}

pub fn fmt_price(price: f64) -> String {
    format!("{:.2}", price + 0.0)
}

/// Numbered list of products the user can pick from.
pub fn format_product_list(names: &[String]) -> String {
    let mut out = String::new();
    out.push_str("Here is a list of products for which you can check prices over the years:\n");
    for (idx, name) in names.iter().enumerate() {
        out.push_str(&format!("{:>3}) {name}\n", idx + 1));
    }
    out
}

/// Chart-ready series: years on x, prices on y.
pub fn to_series(series: &ProductSeries) -> (Vec<i32>, Vec<f64>) {
    series.points.iter().map(|p| (p.year, p.value)).unzip()
}

/// Chart title; the year range is that of the whole source dataset.
pub fn chart_title(product: &str, dataset: &Dataset) -> String {
    match dataset.year_range() {
        Some((min, max)) => format!("Price of {product} from year {min}-{max}"),
        None => format!("Price of {product}"),
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    product: &'a str,
    currency: &'static str,
    decrease: &'a Extremum,
    increase: &'a Extremum,
    series: &'a ProductSeries,
}

/// Report plus the analysed series as pretty JSON (for scripting).
pub fn format_report_json(report: &ExtremaReport, series: &ProductSeries) -> Result<String, AppError> {
    let json = JsonReport {
        product: &series.product,
        currency: CURRENCY,
        decrease: &report.decrease,
        increase: &report.increase,
        series,
    };
    serde_json::to_string_pretty(&json)
        .map_err(|e| AppError::Io(format!("Failed to serialize report: {e}")))
}

//! Year-over-year change and its extremes.
//!
//! Percent change is always measured against the previous row of the sorted
//! series. Output labels the prior year as `year - 1`, so when the series has
//! a gap or a duplicate year the label and the row actually compared against
//! can disagree. `Extremum::measured_from_year` keeps that visible.

use crate::domain::{ExtremaReport, Extremum, ProductSeries};
use crate::error::AppError;

/// Decimals kept on `pct_change` before comparing rows.
const PCT_DECIMALS: i32 = 4;
/// Decimals kept on back-solved prices.
const PRICE_DECIMALS: i32 = 2;

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// Percent change of each value against the previous one, `0.0` for the first.
///
/// Zero to zero counts as no change; zero to anything else has no finite
/// percent change and is an error.
pub fn pct_changes(values: &[f64]) -> Result<Vec<f64>, AppError> {
    let mut out = Vec::with_capacity(values.len());
    for (i, &cur) in values.iter().enumerate() {
        if i == 0 {
            out.push(0.0);
            continue;
        }
        let prev = values[i - 1];
        let pct = if prev == 0.0 {
            if cur != 0.0 {
                return Err(AppError::Computation(format!(
                    "Cannot compute percent change from a zero price (row {i}: 0 -> {cur})."
                )));
            }
            0.0
        } else {
            round_to((cur - prev) / prev, PCT_DECIMALS)
        };
        out.push(pct);
    }
    Ok(out)
}

/// Copy of `series` with `pct_change` filled in.
pub fn derive_pct_change(series: &ProductSeries) -> Result<ProductSeries, AppError> {
    let values: Vec<f64> = series.points.iter().map(|p| p.value).collect();
    let pcts = pct_changes(&values)?;

    let mut out = series.clone();
    for (point, pct) in out.points.iter_mut().zip(pcts) {
        point.pct_change = pct;
    }
    Ok(out)
}

/// Reconstruct the previous price from `price` and the change that led to it.
///
/// `price / (1 + pct)`, rounded to 2 decimals. A -100% change leaves nothing
/// to divide by, so that is an error rather than an infinite price.
pub fn back_solve_prior(price: f64, pct: f64) -> Result<f64, AppError> {
    let base = 1.0 + pct;
    if base == 0.0 {
        return Err(AppError::Computation(format!(
            "Cannot reconstruct the prior price of {price} after a -100% change."
        )));
    }
    let prior = price / base;
    if !prior.is_finite() {
        return Err(AppError::Computation(format!(
            "Reconstructed prior price is not finite (price={price}, change={pct})."
        )));
    }
    Ok(round_to(prior, PRICE_DECIMALS))
}

/// Largest decrease and increase in `series`, deriving percent change first.
///
/// Ties go to the earliest row. A single-row series reports that row for
/// both, with no change and the same prior price.
pub fn analyze(series: &ProductSeries) -> Result<ExtremaReport, AppError> {
    find_extrema(&derive_pct_change(series)?)
}

/// Like `analyze`, for a series whose `pct_change` is already filled in.
pub fn find_extrema(series: &ProductSeries) -> Result<ExtremaReport, AppError> {
    if series.is_empty() {
        return Err(AppError::Computation(format!(
            "No observations for '{}'.",
            series.product
        )));
    }

    let points = &series.points;
    let mut min_idx = 0;
    let mut max_idx = 0;
    for (i, p) in points.iter().enumerate().skip(1) {
        if p.pct_change < points[min_idx].pct_change {
            min_idx = i;
        }
        if p.pct_change > points[max_idx].pct_change {
            max_idx = i;
        }
    }

    let report = ExtremaReport {
        decrease: extremum_at(series, min_idx)?,
        increase: extremum_at(series, max_idx)?,
    };

    for e in [&report.decrease, &report.increase] {
        if !e.is_calendar_adjacent() {
            log::warn!(
                "{} {}: change measured from {:?}, reported against {}",
                series.product,
                e.year,
                e.measured_from_year,
                e.prior_year
            );
        }
    }

    Ok(report)
}

fn extremum_at(series: &ProductSeries, idx: usize) -> Result<Extremum, AppError> {
    let point = &series.points[idx];

    // First row: nothing to reconstruct.
    let (prior_price, measured_from_year) = if idx == 0 {
        (point.value, None)
    } else {
        (
            back_solve_prior(point.value, point.pct_change)?,
            Some(series.points[idx - 1].year),
        )
    };

    Ok(Extremum {
        year: point.year,
        price: point.value,
        prior_year: point.year - 1,
        prior_price,
        pct: point.pct_change,
        measured_from_year,
    })
}

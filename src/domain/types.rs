//! Shared domain types.
//!
//! These types are intentionally kept lightweight value types: each pipeline
//! stage borrows its predecessor's output and builds a new value.
//!
//! - `Observation` / `Dataset`: normalized rows as fetched
//! - `ProductSeries`: one product, sorted by year, with YoY change
//! - `ExtremaReport`: largest decrease and increase in a series

use serde::Serialize;

/// One normalized row: a product's price in a given year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Observation {
    pub product: String,
    pub year: i32,
    pub value: f64,
}

/// Ordered collection of observations after cleaning.
///
/// Invariant: every row has a parsed year and a finite value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub rows: Vec<Observation>,
}

impl Dataset {
    pub fn new(rows: Vec<Observation>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct product labels, sorted.
    pub fn product_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.rows.iter().map(|r| r.product.clone()).collect();
        names.sort();
        names.dedup();
        names
    }

    /// Inclusive year range over the whole dataset (all products).
    pub fn year_range(&self) -> Option<(i32, i32)> {
        let min = self.rows.iter().map(|r| r.year).min()?;
        let max = self.rows.iter().map(|r| r.year).max()?;
        Some((min, max))
    }
}

/// A single point of a product series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub year: i32,
    pub value: f64,
    /// Change relative to the previous point, rounded to 4 decimals.
    /// `0.0` for the first point. Filled in by the analyzer.
    pub pct_change: f64,
}

/// One product's observations, stably sorted ascending by year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductSeries {
    pub product: String,
    pub points: Vec<SeriesPoint>,
}

impl ProductSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Largest move in one direction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Extremum {
    pub year: i32,
    pub price: f64,
    /// Always `year - 1`, regardless of which row the change was measured from.
    pub prior_year: i32,
    /// Back-solved as `price / (1 + pct)`, rounded to 2 decimals.
    pub prior_price: f64,
    /// Fractional change (e.g. `-0.2` for -20%), rounded to 4 decimals.
    pub pct: f64,
    /// Year of the row preceding this one in the sorted series, if any.
    pub measured_from_year: Option<i32>,
}

impl Extremum {
    /// Whether the change was measured against the calendar year before.
    ///
    /// False when the series has a gap or a duplicate year at this point.
    /// The first point of a series has nothing to compare against and counts
    /// as adjacent.
    pub fn is_calendar_adjacent(&self) -> bool {
        match self.measured_from_year {
            Some(prev) => prev == self.prior_year,
            None => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtremaReport {
    pub decrease: Extremum,
    pub increase: Extremum,
}

//! Selection and year-over-year analysis of a single product.

pub mod extrema;
pub mod select;

pub use extrema::{analyze, back_solve_prior, derive_pct_change, find_extrema, pct_changes, round_to};
pub use select::{resolve_product, select};

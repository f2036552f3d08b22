//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - normalized observations and the cleaned `Dataset`
//! - per-product series and the `ExtremaReport` derived from them
//! - the product-name `TranslationTable`

pub mod translation;
pub mod types;

pub use translation::TranslationTable;
pub use types::*;

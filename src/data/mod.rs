//! Remote data sources.

pub mod opendata;

pub use opendata::{DATASET_URL, Fetch, HttpFetcher};

//! Reporting: sentences, chart-ready series and JSON output.

pub mod format;

pub use format::*;

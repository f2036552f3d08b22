//! Input helpers.
//!
//! - shape-tolerant JSON ingest (`ingest`)
//! - coercion, row filtering and relabeling (`normalize`)

pub mod ingest;
pub mod normalize;

pub use ingest::*;
pub use normalize::*;

//! `agri-prices` library crate.
//!
//! Downloads the Serbian statistical office's agricultural producer price
//! dataset, lets the user pick a product, and reports that product's largest
//! year-over-year price decrease and increase with a bar chart.
//!
//! The binary (`agri`) is a thin wrapper around this library so that the
//! whole pipeline is testable without spawning processes or touching a
//! terminal.

pub mod analysis;
pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod io;
pub mod plot;
pub mod report;
pub mod tui;

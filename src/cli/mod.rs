//! Command-line parsing.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! pipeline. The data source is fixed; flags only choose the product and how
//! results are shown.

use clap::Parser;

use crate::plot::ChartMode;

pub mod picker;

/// Top-level CLI.
#[derive(Debug, Parser, Clone)]
#[command(
    name = "agri",
    version,
    about = "Year-over-year agricultural producer price swings (Serbian open data)"
)]
pub struct Cli {
    /// Product to analyse (case-insensitive). Prompts interactively when omitted.
    #[arg(short = 'p', long)]
    pub product: Option<String>,

    /// How to draw the bar chart.
    #[arg(long, value_enum, default_value_t = ChartMode::Tui)]
    pub chart: ChartMode,

    /// ASCII chart width (columns).
    #[arg(long, default_value_t = 80)]
    pub width: usize,

    /// ASCII chart height (rows).
    #[arg(long, default_value_t = 20)]
    pub height: usize,

    /// Also print the analysis as JSON.
    #[arg(long)]
    pub json: bool,

    /// Print the available products and exit.
    #[arg(long)]
    pub list: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["agri"]);
        assert_eq!(cli.product, None);
        assert_eq!(cli.chart, ChartMode::Tui);
        assert_eq!((cli.width, cli.height), (80, 20));
        assert!(!cli.json && !cli.list);
    }

    #[test]
    fn product_and_chart_flags() {
        let cli = Cli::parse_from(["agri", "-p", "Sour cherries", "--chart", "none", "--json"]);
        assert_eq!(cli.product.as_deref(), Some("Sour cherries"));
        assert_eq!(cli.chart, ChartMode::Off);
        assert!(cli.json);

        let cli = Cli::parse_from(["agri", "--chart", "ascii", "--width", "60"]);
        assert_eq!(cli.chart, ChartMode::Ascii);
        assert_eq!(cli.width, 60);
    }

    #[test]
    fn rejects_unknown_chart_mode() {
        assert!(Cli::try_parse_from(["agri", "--chart", "png"]).is_err());
    }
}

//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - wires the real fetcher, prompt and chart renderer
//! - hands them to the pipeline

use std::io::{self, IsTerminal};

use clap::Parser;

use crate::cli::Cli;
use crate::cli::picker::StdinPrompt;
use crate::data::{DATASET_URL, HttpFetcher};
use crate::error::AppError;
use crate::plot::{AsciiBarChart, ChartMode, ChartRenderer, NoChart};
use crate::tui::TerminalChart;

pub mod pipeline;

/// Settings for one run, resolved from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub product: Option<String>,
    pub chart: ChartMode,
    pub width: usize,
    pub height: usize,
    pub json: bool,
    pub list: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            product: None,
            chart: ChartMode::Tui,
            width: 80,
            height: 20,
            json: false,
            list: false,
        }
    }
}

/// Entry point for the `agri` binary.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = run_config_from_args(&cli);

    let fetcher = HttpFetcher::new()?;
    let mut prompt = StdinPrompt;
    let mut renderer = renderer_for(&config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    pipeline::run_session(
        &fetcher,
        DATASET_URL,
        &mut prompt,
        renderer.as_mut(),
        &mut out,
        &config,
    )?;
    Ok(())
}

pub fn run_config_from_args(cli: &Cli) -> RunConfig {
    RunConfig {
        product: cli
            .product
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string),
        chart: cli.chart,
        width: cli.width,
        height: cli.height,
        json: cli.json,
        list: cli.list,
    }
}

/// The full-screen chart needs a real terminal; piped output gets the ASCII chart.
fn renderer_for(config: &RunConfig) -> Box<dyn ChartRenderer> {
    match config.chart {
        ChartMode::Tui if io::stdout().is_terminal() => Box::new(TerminalChart),
        ChartMode::Tui => {
            log::info!("stdout is not a terminal; drawing the ASCII chart instead");
            Box::new(AsciiBarChart {
                width: config.width,
                height: config.height,
            })
        }
        ChartMode::Ascii => Box::new(AsciiBarChart {
            width: config.width,
            height: config.height,
        }),
        ChartMode::Off => Box::new(NoChart),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_from_flags() {
        let cli = Cli::parse_from(["agri", "-p", "  Wheat ", "--chart", "ascii", "--height", "10"]);
        let config = run_config_from_args(&cli);
        assert_eq!(config.product.as_deref(), Some("Wheat"));
        assert_eq!(config.chart, ChartMode::Ascii);
        assert_eq!(config.height, 10);
        assert_eq!(config.width, 80);
    }

    #[test]
    fn blank_product_flag_falls_back_to_prompt() {
        let cli = Cli::parse_from(["agri", "--product", "   "]);
        assert_eq!(run_config_from_args(&cli).product, None);
    }

    #[test]
    fn default_config_matches_cli_defaults() {
        let cli = Cli::parse_from(["agri"]);
        assert_eq!(run_config_from_args(&cli), RunConfig::default());
    }
}

//! Chart description and the renderers that draw it.
//!
//! The pipeline only builds a `ChartData`; drawing goes through the
//! `ChartRenderer` trait so the core never touches a terminal.

use clap::ValueEnum;

use crate::error::AppError;

pub mod ascii;

pub use ascii::render_ascii_bar_chart;

/// Bar chart: one bar per year.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub years: Vec<i32>,
    pub values: Vec<f64>,
    /// Text shown alongside the chart by renderers that have room for it.
    pub caption: Vec<String>,
}

impl ChartData {
    /// Year/price pairs, truncated to the shorter of the two series.
    pub fn bars(&self) -> impl Iterator<Item = (i32, f64)> + '_ {
        self.years.iter().copied().zip(self.values.iter().copied())
    }

    /// Largest finite price, or `None` when there is nothing positive to draw.
    pub fn max_value(&self) -> Option<f64> {
        self.values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |a| a.max(v))))
            .filter(|v| *v > 0.0)
    }
}

/// Draws a chart somewhere (stdout, full-screen terminal, nowhere).
pub trait ChartRenderer {
    /// Fail early if the output cannot be drawn to. Called before any report
    /// text is written.
    fn prepare(&mut self) -> Result<(), AppError> {
        Ok(())
    }

    fn render(&mut self, chart: &ChartData) -> Result<(), AppError>;
}

/// Which renderer to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ChartMode {
    /// Full-screen terminal chart (Plotters on Ratatui).
    Tui,
    /// Plain-text bar chart on stdout.
    Ascii,
    /// Skip the chart.
    #[value(name = "none")]
    Off,
}

/// Prints an ASCII bar chart to stdout.
pub struct AsciiBarChart {
    pub width: usize,
    pub height: usize,
}

impl ChartRenderer for AsciiBarChart {
    fn render(&mut self, chart: &ChartData) -> Result<(), AppError> {
        println!("{}", render_ascii_bar_chart(chart, self.width, self.height));
        Ok(())
    }
}

pub struct NoChart;

impl ChartRenderer for NoChart {
    fn render(&mut self, _chart: &ChartData) -> Result<(), AppError> {
        Ok(())
    }
}

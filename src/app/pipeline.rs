//! Shared pipeline logic used by the binary and the integration tests.
//!
//! fetch -> shape-tolerant parse -> clean/relabel -> select -> pct change
//! -> extrema -> report lines + chart data
//!
//! Nothing is printed or drawn until every stage has succeeded.

use std::io::Write;

use crate::analysis::{derive_pct_change, find_extrema, select};
use crate::app::RunConfig;
use crate::cli::picker::ProductPrompt;
use crate::data::Fetch;
use crate::domain::{Dataset, ExtremaReport, ProductSeries, TranslationTable};
use crate::error::AppError;
use crate::io::{clean, fetch_table};
use crate::plot::{ChartData, ChartRenderer};
use crate::report::{chart_title, describe, format_product_list, format_report_json, to_series};

/// All computed outputs for one product.
#[derive(Debug, Clone)]
pub struct RunOutput {
    /// Sorted series with percent changes filled in.
    pub series: ProductSeries,
    pub report: ExtremaReport,
    /// Report sentences (plus any gap/duplicate notes).
    pub lines: Vec<String>,
    pub chart: ChartData,
}

/// Fetch the source table and turn it into a clean, English-labelled dataset.
pub fn load_dataset(fetcher: &dyn Fetch, url: &str) -> Result<Dataset, AppError> {
    let table = fetch_table(fetcher, url)?;
    clean(&table, &TranslationTable::default())
}

/// Analyse one product of an already loaded dataset.
pub fn run_report(dataset: &Dataset, requested: &str) -> Result<RunOutput, AppError> {
    let selected = select(dataset, requested)?;
    let series = derive_pct_change(&selected)?;
    let report = find_extrema(&series)?;

    let lines = describe(&report, &series.product);
    let (years, values) = to_series(&series);
    let chart = ChartData {
        title: chart_title(&series.product, dataset),
        x_label: "Year".to_string(),
        y_label: "Price (rsd)".to_string(),
        years,
        values,
        caption: lines.clone(),
    };

    Ok(RunOutput {
        series,
        report,
        lines,
        chart,
    })
}

/// One interactive session: load, list/prompt, analyse, print, render.
///
/// The renderer is prepared before the report is printed, so a chart that
/// cannot be drawn leaves no report behind. Returns `None` when only the
/// product list was requested.
pub fn run_session(
    fetcher: &dyn Fetch,
    url: &str,
    prompt: &mut dyn ProductPrompt,
    renderer: &mut dyn ChartRenderer,
    out: &mut dyn Write,
    config: &RunConfig,
) -> Result<Option<RunOutput>, AppError> {
    let dataset = load_dataset(fetcher, url)?;
    let products = dataset.product_names();

    if config.list {
        write_text(out, &format_product_list(&products))?;
        return Ok(None);
    }

    let requested = match &config.product {
        Some(product) => product.clone(),
        None => {
            write_text(out, &format_product_list(&products))?;
            out.flush().map_err(write_error)?;
            prompt.prompt_for_product()?
        }
    };

    let run = run_report(&dataset, &requested)?;
    renderer.prepare()?;

    let mut text = run.lines.join("\n");
    text.push('\n');
    if config.json {
        text.push_str(&format_report_json(&run.report, &run.series)?);
        text.push('\n');
    }
    write_text(out, &text)?;
    out.flush().map_err(write_error)?;

    renderer.render(&run.chart)?;
    Ok(Some(run))
}

fn write_text(out: &mut dyn Write, text: &str) -> Result<(), AppError> {
    out.write_all(text.as_bytes()).map_err(write_error)
}

fn write_error(e: std::io::Error) -> AppError {
    AppError::Io(format!("Failed to write output: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Observation;

    fn dataset() -> Dataset {
        Dataset::new(vec![
            Observation { product: "Wheat".into(), year: 2022, value: 120.0 },
            Observation { product: "Corn".into(), year: 2019, value: 10.0 },
            Observation { product: "Wheat".into(), year: 2020, value: 100.0 },
            Observation { product: "Wheat".into(), year: 2021, value: 80.0 },
        ])
    }

    #[test]
    fn report_for_reference_series() {
        let run = run_report(&dataset(), "wheat").unwrap();
        assert_eq!(run.series.product, "Wheat");
        assert_eq!(run.report.decrease.year, 2021);
        assert_eq!(run.report.increase.year, 2022);
        assert_eq!(run.lines.len(), 2);
        assert_eq!(run.chart.years, vec![2020, 2021, 2022]);
        assert_eq!(run.chart.values, vec![100.0, 80.0, 120.0]);
        assert_eq!(run.chart.title, "Price of Wheat from year 2019-2022");
        assert_eq!(run.chart.caption, run.lines);

        let pcts: Vec<f64> = run.series.points.iter().map(|p| p.pct_change).collect();
        assert_eq!(pcts, vec![0.0, -0.2, 0.5]);
    }

    #[test]
    fn unknown_product_is_not_found() {
        let err = run_report(&dataset(), "Unicorn").unwrap_err();
        assert_eq!(err, AppError::NotFound("Unicorn".to_string()));
    }
}

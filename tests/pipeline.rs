//! End-to-end run of the offline pipeline: stub fetcher, scripted prompt,
//! recording renderer.

use agri_prices::app::RunConfig;
use agri_prices::app::pipeline::{load_dataset, run_session};
use agri_prices::cli::picker::ProductPrompt;
use agri_prices::data::Fetch;
use agri_prices::error::AppError;
use agri_prices::plot::{ChartData, ChartMode, ChartRenderer};

const URL: &str = "https://example.invalid/dataset.json";

const ROWS: &str = r#"[
    {"nProizvod": "Pšenica", "god": 2022, "vrednost": "120"},
    {"nProizvod": "Pšenica", "god": "2020", "vrednost": 100},
    {"nProizvod": "Pšenica", "god": 2021, "vrednost": 80.0},
    {"nProizvod": "Kukuruz", "god": 2019, "vrednost": 10},
    {"nProizvod": "Kukuruz", "god": 2020, "vrednost": "n/a"},
    {"nProizvod": "Višnje", "god": 2020, "vrednost": 50}
]"#;

struct StubFetch(String);

impl Fetch for StubFetch {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, AppError> {
        assert_eq!(url, URL);
        Ok(self.0.clone().into_bytes())
    }
}

struct ScriptedPrompt {
    answer: String,
    asked: usize,
}

impl ScriptedPrompt {
    fn new(answer: &str) -> Self {
        Self {
            answer: answer.to_string(),
            asked: 0,
        }
    }
}

impl ProductPrompt for ScriptedPrompt {
    fn prompt_for_product(&mut self) -> Result<String, AppError> {
        self.asked += 1;
        Ok(self.answer.clone())
    }
}

#[derive(Default)]
struct RecordingRenderer {
    prepared: usize,
    charts: Vec<ChartData>,
}

impl ChartRenderer for RecordingRenderer {
    fn prepare(&mut self) -> Result<(), AppError> {
        self.prepared += 1;
        Ok(())
    }

    fn render(&mut self, chart: &ChartData) -> Result<(), AppError> {
        self.charts.push(chart.clone());
        Ok(())
    }
}

fn config() -> RunConfig {
    RunConfig {
        chart: ChartMode::Off,
        ..RunConfig::default()
    }
}

fn session(
    payload: &str,
    answer: &str,
    config: &RunConfig,
) -> (Result<Option<agri_prices::app::pipeline::RunOutput>, AppError>, ScriptedPrompt, RecordingRenderer, String) {
    let fetcher = StubFetch(payload.to_string());
    let mut prompt = ScriptedPrompt::new(answer);
    let mut renderer = RecordingRenderer::default();
    let mut out = Vec::new();
    let result = run_session(&fetcher, URL, &mut prompt, &mut renderer, &mut out, config);
    let text = String::from_utf8(out).unwrap();
    (result, prompt, renderer, text)
}

#[test]
fn wheat_reference_numbers() {
    let (result, prompt, renderer, out) = session(ROWS, "Wheat", &config());
    let run = result.unwrap().unwrap();

    assert_eq!(prompt.asked, 1);
    assert!(out.starts_with("Here is a list of products"));
    assert!(out.contains("  1) Corn\n"));
    assert!(out.contains("  2) Sour cherries\n"));
    assert!(out.contains("  3) Wheat\n"));

    let d = &run.report.decrease;
    assert_eq!((d.year, d.prior_year), (2021, 2020));
    assert!((d.price - 80.0).abs() < 1e-9);
    assert!((d.prior_price - 100.0).abs() < 1e-9);
    assert!((d.pct + 0.2).abs() < 1e-9);

    let i = &run.report.increase;
    assert_eq!((i.year, i.prior_year), (2022, 2021));
    assert!((i.price - 120.0).abs() < 1e-9);
    assert!((i.prior_price - 80.0).abs() < 1e-9);
    assert!((i.pct - 0.5).abs() < 1e-9);

    assert!(out.contains(
        "For Wheat biggest decrease in price was in year 2021 where price was 80.00 rsd \
         which is total decrease of -20.00% from previous year 2020 where price was 100.00 rsd\n"
    ));
    assert!(out.contains("total increase of 50.00% from previous year 2021"));

    assert_eq!(renderer.prepared, 1);
    assert_eq!(renderer.charts.len(), 1);
    let chart = &renderer.charts[0];
    assert_eq!(chart.title, "Price of Wheat from year 2019-2022");
    assert_eq!(chart.years, vec![2020, 2021, 2022]);
    assert_eq!(chart.values, vec![100.0, 80.0, 120.0]);
}

#[test]
fn product_name_is_case_insensitive() {
    for answer in ["wheat", "WHEAT", "  Wheat  "] {
        let (result, _, renderer, _) = session(ROWS, answer.trim(), &config());
        let run = result.unwrap().unwrap();
        assert_eq!(run.series.product, "Wheat");
        assert_eq!(renderer.charts.len(), 1);
    }
}

#[test]
fn unknown_product_renders_nothing() {
    let (result, _, renderer, out) = session(ROWS, "Unicorn", &config());
    let err = result.unwrap_err();
    assert_eq!(err, AppError::NotFound("Unicorn".to_string()));
    assert_eq!(err.exit_code(), 3);
    assert!(err.to_string().contains("Re-run"));
    assert!(renderer.charts.is_empty());
    assert!(!out.contains("biggest"));
}

#[test]
fn product_flag_skips_the_prompt() {
    let config = RunConfig {
        product: Some("sour cherries".to_string()),
        json: true,
        ..config()
    };
    let (result, prompt, _, out) = session(ROWS, "ignored", &config);
    let run = result.unwrap().unwrap();

    assert_eq!(prompt.asked, 0);
    assert!(!out.contains("Here is a list"));
    assert_eq!(run.series.len(), 1);
    assert_eq!(run.report.decrease, run.report.increase);
    assert!((run.report.increase.prior_price - 50.0).abs() < 1e-9);
    assert!(out.contains("\"product\": \"Sour cherries\""));
}

#[test]
fn list_mode_prints_products_only() {
    let config = RunConfig {
        list: true,
        ..config()
    };
    let (result, prompt, renderer, out) = session(ROWS, "Wheat", &config);
    assert!(result.unwrap().is_none());
    assert_eq!(prompt.asked, 0);
    assert!(renderer.charts.is_empty());
    assert!(out.contains("  3) Wheat\n"));
}

#[test]
fn wrapped_payload_matches_bare_array() {
    let bare = load_dataset(&StubFetch(ROWS.to_string()), URL).unwrap();
    let wrapped = load_dataset(&StubFetch(format!(r#"{{"value": {ROWS}}}"#)), URL).unwrap();
    assert_eq!(bare, wrapped);
    assert_eq!(bare.len(), 5);
}

#[test]
fn missing_product_column_is_a_schema_error() {
    let payload = r#"[{"proizvod": "Pšenica", "god": 2020, "vrednost": 1}]"#;
    let (result, _, renderer, _) = session(payload, "Wheat", &config());
    assert!(matches!(result, Err(AppError::Schema(_))));
    assert!(renderer.charts.is_empty());
}

#[test]
fn malformed_body_is_a_format_error() {
    let (result, _, _, _) = session("not json", "Wheat", &config());
    assert!(matches!(result, Err(AppError::Format(_))));
}

/// A display that cannot be drawn to, like a TUI without a tty.
struct UnavailableRenderer {
    rendered: bool,
}

impl ChartRenderer for UnavailableRenderer {
    fn prepare(&mut self) -> Result<(), AppError> {
        Err(AppError::Terminal("no tty".to_string()))
    }

    fn render(&mut self, _chart: &ChartData) -> Result<(), AppError> {
        self.rendered = true;
        Ok(())
    }
}

#[test]
fn unusable_renderer_leaves_no_report() {
    let config = RunConfig {
        product: Some("Wheat".to_string()),
        json: true,
        ..config()
    };
    let fetcher = StubFetch(ROWS.to_string());
    let mut prompt = ScriptedPrompt::new("ignored");
    let mut renderer = UnavailableRenderer { rendered: false };
    let mut out = Vec::new();

    let err = run_session(&fetcher, URL, &mut prompt, &mut renderer, &mut out, &config).unwrap_err();

    assert_eq!(err, AppError::Terminal("no tty".to_string()));
    assert_eq!(err.exit_code(), 8);
    assert!(!renderer.rendered);
    let text = String::from_utf8(out).unwrap();
    assert!(!text.contains("biggest"), "report printed before failing: {text}");
    assert!(!text.contains("\"product\""));
}

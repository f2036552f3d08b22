//! ASCII bar chart for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal or a pipe
//! - deterministic output (helpful for golden tests)
//!
//! Bars are drawn with `#` from a zero baseline. Year labels are written
//! vertically under each bar so long series stay narrow. The caption is not
//! drawn; the caller prints the report itself.

use super::ChartData;

/// Render `chart` into a string of at most `height` bar rows.
///
/// `width` is a target: each bar gets between 2 and 6 columns, so very long
/// series may overflow it.
pub fn render_ascii_bar_chart(chart: &ChartData, width: usize, height: usize) -> String {
    let height = height.max(2);
    let bars: Vec<(i32, f64)> = chart.bars().collect();
    let y_max = chart.max_value().unwrap_or(1.0);

    let top_label = format!("{y_max:.2}");
    let zero_label = "0.00";
    let gutter = top_label.len().max(zero_label.len());
    let slot = (width.saturating_sub(gutter + 2) / bars.len().max(1)).clamp(2, 6);

    let mut out = String::new();
    push_line(&mut out, &chart.title);
    push_line(&mut out, &format!("{} vs {}", chart.y_label, chart.x_label));

    let filled: Vec<usize> = bars
        .iter()
        .map(|&(_, v)| bar_height(v, y_max, height))
        .collect();

    for row in 0..height {
        let level = height - row;
        let label = if row == 0 { top_label.as_str() } else { "" };
        let mut line = format!("{label:>gutter$} |");
        for &f in &filled {
            let ch = if f >= level { "#" } else { " " };
            line.push_str(&ch.repeat(slot - 1));
            line.push(' ');
        }
        push_line(&mut out, &line);
    }
    push_line(
        &mut out,
        &format!("{zero_label:>gutter$} +{}", "-".repeat(slot * bars.len())),
    );

    // Rotated year labels: one character per row.
    let labels: Vec<Vec<char>> = bars
        .iter()
        .map(|(year, _)| year.to_string().chars().collect())
        .collect();
    let depth = labels.iter().map(Vec::len).max().unwrap_or(0);
    for k in 0..depth {
        let mut line = " ".repeat(gutter + 2);
        for label in &labels {
            line.push(label.get(k).copied().unwrap_or(' '));
            line.push_str(&" ".repeat(slot - 1));
        }
        push_line(&mut out, &line);
    }

    out
}

fn bar_height(value: f64, y_max: f64, height: usize) -> usize {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    let rows = ((value / y_max) * height as f64).round() as usize;
    rows.clamp(1, height)
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line.trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wheat() -> ChartData {
        ChartData {
            title: "Price of Wheat from year 2020-2022".to_string(),
            x_label: "Year".to_string(),
            y_label: "Price (rsd)".to_string(),
            years: vec![2020, 2021, 2022],
            values: vec![100.0, 80.0, 120.0],
            caption: vec!["ignored".to_string()],
        }
    }

    #[test]
    fn bar_chart_golden_snapshot_small() {
        let txt = render_ascii_bar_chart(&wheat(), 20, 4);
        let expected = concat!(
            "Price of Wheat from year 2020-2022\n",
            "Price (rsd) vs Year\n",
            "120.00 |        ###\n",
            "       |### ### ###\n",
            "       |### ### ###\n",
            "       |### ### ###\n",
            "  0.00 +------------\n",
            "        2   2   2\n",
            "        0   0   0\n",
            "        2   2   2\n",
            "        0   1   2\n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn zero_and_tiny_values() {
        assert_eq!(bar_height(0.0, 10.0, 5), 0);
        assert_eq!(bar_height(f64::NAN, 10.0, 5), 0);
        assert_eq!(bar_height(0.01, 10.0, 5), 1);
        assert_eq!(bar_height(10.0, 10.0, 5), 5);
    }

    #[test]
    fn empty_chart_still_renders_axes() {
        let chart = ChartData {
            years: vec![],
            values: vec![],
            ..wheat()
        };
        let txt = render_ascii_bar_chart(&chart, 20, 3);
        assert!(txt.starts_with("Price of Wheat"));
        assert!(txt.contains("1.00 |"));
        assert!(txt.contains("0.00 +"));
    }
}

//! Plotters-powered price bar chart widget for Ratatui.
//!
//! Why Plotters instead of Ratatui's built-in `BarChart` widget?
//! - a real numeric y-axis with tick labels
//! - bars positioned by year, so gaps in the series stay visible
//!
//! We render Plotters output into the Ratatui buffer using `plotters-ratatui-backend`.

use plotters::prelude::*;
use plotters::style::FontTransform;
use plotters_ratatui_backend::widget_fn;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

/// Half the width of a bar, in years.
const BAR_HALF_WIDTH: f64 = 0.35;

/// A lightweight, render-only chart description.
///
/// All bounds are computed outside the render call (see `bar_bounds`).
pub struct PriceBarChart<'a> {
    /// `(year, price)` per bar.
    pub bars: &'a [(f64, f64)],
    /// X bounds (years, padded by half a year each side).
    pub x_bounds: [f64; 2],
    /// Y bounds (price, from zero).
    pub y_bounds: [f64; 2],
    pub x_label: &'a str,
    pub y_label: &'a str,
}

impl<'a> Widget for PriceBarChart<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // When the available area is too small, Plotters may fail to build a chart.
        // In that case, we render a small hint rather than panicking.
        if area.width < 20 || area.height < 8 {
            buf.set_string(
                area.x,
                area.y,
                "Chart area too small (resize terminal).",
                Style::default().fg(Color::Yellow),
            );
            return;
        }

        let [x0, x1] = self.x_bounds;
        let [y0, y1] = self.y_bounds;
        if !(x0.is_finite() && x1.is_finite() && y0.is_finite() && y1.is_finite()) || x1 <= x0 || y1 <= y0 {
            return;
        }

        let n_labels = self.bars.len().clamp(2, 12);

        let widget = widget_fn(move |root| {
            let mut chart = ChartBuilder::on(&root)
                .margin(1)
                // Terminal cells are low-res, so keep label areas compact.
                .set_label_area_size(LabelAreaPosition::Left, 8)
                .set_label_area_size(LabelAreaPosition::Bottom, 3)
                .build_cartesian_2d(x0..x1, y0..y1)?;

            chart
                .configure_mesh()
                .disable_x_mesh()
                .disable_y_mesh()
                .x_desc(self.x_label)
                .y_desc(self.y_label)
                .x_labels(n_labels)
                .y_labels(5)
                .x_label_formatter(&|v| format!("{v:.0}"))
                .y_label_formatter(&|v| format!("{v:.0}"))
                .label_style(("sans-serif", 10).into_font().color(&WHITE))
                .x_label_style(
                    ("sans-serif", 10)
                        .into_font()
                        .transform(FontTransform::Rotate90)
                        .color(&WHITE),
                )
                .axis_style(&WHITE)
                .bold_line_style(&WHITE)
                .draw()?;

            let bar_style = ShapeStyle {
                color: RGBAColor(0, 255, 255, 1.0), // cyan
                filled: true,
                stroke_width: 1,
            };

            chart.draw_series(self.bars.iter().map(|&(year, price)| {
                Rectangle::new(
                    [(year - BAR_HALF_WIDTH, 0.0), (year + BAR_HALF_WIDTH, price)],
                    bar_style,
                )
            }))?;

            Ok(())
        });

        widget.render(area, buf);
    }
}

/// Chart bounds for `bars`: half a year of padding on x, zero to max + 5% on y.
pub fn bar_bounds(bars: &[(f64, f64)]) -> Option<([f64; 2], [f64; 2])> {
    let finite = || bars.iter().filter(|(x, y)| x.is_finite() && y.is_finite());

    let x_min = finite().map(|&(x, _)| x).reduce(f64::min)?;
    let x_max = finite().map(|&(x, _)| x).reduce(f64::max)?;
    let y_max = finite().map(|&(_, y)| y).fold(0.0, f64::max);

    let y_top = if y_max > 0.0 { y_max * 1.05 } else { 1.0 };
    Some(([x_min - 0.5, x_max + 0.5], [0.0, y_top]))
}

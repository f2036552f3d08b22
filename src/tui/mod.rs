//! Ratatui-based chart view.
//!
//! Shows the selected product's bar chart with its caption (the report
//! sentences) below it, and closes on `q`, `Esc` or `Enter`.

use std::io::{self, IsTerminal};
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Terminal,
};

use crate::error::AppError;
use crate::plot::{ChartData, ChartRenderer};

mod plotters_chart;

use plotters_chart::{PriceBarChart, bar_bounds};

/// Full-screen terminal chart renderer. The chart caption is shown below the bars.
pub struct TerminalChart;

impl ChartRenderer for TerminalChart {
    fn prepare(&mut self) -> Result<(), AppError> {
        if !io::stdout().is_terminal() {
            return Err(AppError::Terminal("stdout is not a terminal.".to_string()));
        }
        terminal::size().map_err(|e| AppError::Terminal(format!("Failed to query terminal size: {e}")))?;
        enable_raw_mode().map_err(|e| AppError::Terminal(format!("Failed to enable raw mode: {e}")))?;
        disable_raw_mode().map_err(|e| AppError::Terminal(format!("Failed to disable raw mode: {e}")))
    }

    fn render(&mut self, chart: &ChartData) -> Result<(), AppError> {
        let _guard = TerminalGuard::new()?;

        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)
            .map_err(|e| AppError::Terminal(format!("Failed to initialize terminal: {e}")))?;

        let view = ChartView::new(chart);
        view.event_loop(&mut terminal)
    }
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::Terminal(format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::Terminal(format!("Failed to enter alternate screen: {e}")));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

struct ChartView<'a> {
    chart: &'a ChartData,
    bars: Vec<(f64, f64)>,
}

impl<'a> ChartView<'a> {
    fn new(chart: &'a ChartData) -> Self {
        let bars = chart.bars().map(|(year, price)| (year as f64, price)).collect();
        Self { chart, bars }
    }

    fn event_loop<B: ratatui::backend::Backend>(&self, terminal: &mut Terminal<B>) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::Terminal(format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::Terminal(format!("Event poll error: {e}")))?
            {
                continue;
            }

            match event::read().map_err(|e| AppError::Terminal(format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter) {
                        break;
                    }
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn draw(&self, frame: &mut ratatui::Frame<'_>) {
        let report_height = self.chart.caption.len() as u16 * 2 + 2;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(report_height),
                Constraint::Length(3),
            ])
            .split(frame.area());

        self.draw_header(frame, chunks[0]);
        self.draw_chart(frame, chunks[1]);
        self.draw_report(frame, chunks[2]);
        self.draw_footer(frame, chunks[3]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let line = Line::from(vec![
            Span::styled("agri", Style::default().fg(Color::Cyan)),
            Span::raw(" | "),
            Span::styled(
                self.chart.title.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_chart(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default().title("Price by year").borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Clear, inner);

        let Some((x_bounds, y_bounds)) = bar_bounds(&self.bars) else {
            let msg = Paragraph::new("No data to chart.").style(Style::default().fg(Color::Yellow));
            frame.render_widget(msg, inner);
            return;
        };

        let widget = PriceBarChart {
            bars: &self.bars,
            x_bounds,
            y_bounds,
            x_label: &self.chart.x_label,
            y_label: &self.chart.y_label,
        };
        frame.render_widget(widget, inner);
    }

    fn draw_report(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let lines: Vec<Line> = self
            .chart
            .caption
            .iter()
            .map(|l| Line::from(l.as_str()))
            .collect();
        let p = Paragraph::new(Text::from(lines))
            .wrap(Wrap { trim: true })
            .block(Block::default().title("Largest moves").borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = "q / Esc / Enter  close";
        let p = Paragraph::new(Span::styled(help, Style::default().fg(Color::Gray)))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

//! Parameter and statistics readouts

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use signal_lab::dsp::{Params, Stats};

pub fn param_lines(params: &Params) -> [String; 2] {
    [
        format!("Amplitude (UP/DOWN): {:.2}", params.amplitude),
        format!("Frequency (LEFT/RIGHT): {:.2}", params.frequency),
    ]
}

pub fn stat_lines(stats: Option<&Stats>) -> Vec<String> {
    match stats {
        Some(stats) => stats
            .entries()
            .iter()
            .map(|(name, value)| format!("{name}: {value:.5}"))
            .collect(),
        None => vec!["(empty buffer)".to_string()],
    }
}

/// Render the keyboard-adjustable parameters
pub fn render_params(frame: &mut Frame, area: Rect, params: &Params) {
    let style = Style::default().fg(Color::DarkGray);
    let lines: Vec<Line> = param_lines(params)
        .into_iter()
        .map(|text| Line::from(Span::styled(text, style)))
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}

/// Render the statistics panel
pub fn render_stats(frame: &mut Frame, area: Rect, stats: Option<&Stats>) {
    let style = Style::default().fg(Color::Blue);
    let lines: Vec<Line> = stat_lines(stats)
        .into_iter()
        .map(|text| Line::from(Span::styled(text, style)))
        .collect();

    let panel = Paragraph::new(lines).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL),
    );
    frame.render_widget(panel, area);
}

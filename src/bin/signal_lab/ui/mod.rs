//! TUI module for signal_lab
//!
//! Immediate mode: the whole screen is rebuilt from the lab state every
//! frame, and the button layout of that frame is handed back for
//! hit-testing the next click.

mod controls;
mod readout;
pub mod state;
mod waveform;

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use signal_lab::{io::InputBackend, SignalLab};

pub use controls::Action;
pub use state::{ButtonRegions, Status, UiState};

use controls::render_controls;
use readout::{render_params, render_stats};
use waveform::render_waveform;

const HELP: &str = " [1/2/3] Generate  [R] Rec  [S] Save  [Arrows] Params  [Q] Quit";

/// Render one frame and return the button regions it drew.
pub fn render<B: InputBackend>(frame: &mut Frame, lab: &SignalLab<B>, ui: &UiState) -> ButtonRegions {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Buttons
        Constraint::Length(2), // Parameters
        Constraint::Min(8),    // Waveform
        Constraint::Length(7), // Statistics
        Constraint::Length(1), // Status / help
    ])
    .split(frame.area());

    let regions = render_controls(frame, chunks[0], lab.is_recording(), ui.hover);
    render_params(frame, chunks[1], lab.params());
    render_waveform(frame, chunks[2], lab.signal());
    render_stats(frame, chunks[3], lab.stats());
    render_status(frame, chunks[4], lab, ui.status.as_ref());

    regions
}

fn render_status<B: InputBackend>(frame: &mut Frame, area: Rect, lab: &SignalLab<B>, status: Option<&Status>) {
    let line = if lab.is_recording() {
        let frames = lab.captured_frames();
        let seconds = frames as f64 / lab.config().sample_rate as f64;
        let mut spans = vec![Span::styled(
            format!(" ● REC  {frames} samples ({seconds:.1}s)"),
            Style::default().fg(Color::Red),
        )];
        let dropped = lab.dropped_chunks();
        if dropped > 0 {
            spans.push(Span::styled(
                format!("  {dropped} chunks dropped"),
                Style::default().fg(Color::Yellow),
            ));
        }
        Line::from(spans)
    } else if let Some(status) = status {
        let color = if status.is_error {
            Color::Red
        } else {
            Color::Green
        };
        Line::from(Span::styled(
            format!(" {}", status.text),
            Style::default().fg(color),
        ))
    } else {
        Line::from(Span::styled(HELP, Style::default().fg(Color::DarkGray)))
    };

    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};
    use signal_lab::{dsp::SignalKind, LabConfig};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn renders_buttons_params_and_stats() {
        let mut lab = SignalLab::new(LabConfig::new().seed(1));
        lab.generate(SignalKind::Pulse);
        let ui = UiState::default();

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let mut regions = ButtonRegions::default();
        terminal
            .draw(|frame| regions = render(frame, &lab, &ui))
            .unwrap();

        let text = screen_text(&terminal);
        for label in ["Polyharmonic", "AM Noise", "Pulse", "STOP/REC", "Save WAV"] {
            assert!(text.contains(label), "missing button {label}");
        }
        assert!(text.contains("Amplitude (UP/DOWN): 0.50"));
        assert!(text.contains("Max: 0.50000"));
        assert!(text.contains("[Q] Quit"));
        assert_eq!(regions.len(), 5);
    }

    #[test]
    fn regions_follow_button_order() {
        let lab = SignalLab::new(LabConfig::new().seed(1));
        let ui = UiState::default();

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let mut regions = ButtonRegions::default();
        terminal
            .draw(|frame| regions = render(frame, &lab, &ui))
            .unwrap();

        let actions: Vec<_> = regions.iter().map(|(_, action)| *action).collect();
        assert_eq!(actions, Action::ALL);

        let (first, _) = regions.iter().next().copied().unwrap();
        assert_eq!(
            regions.hit(first.x + 1, first.y + 1),
            Some(Action::Generate(SignalKind::Polyharmonic))
        );
    }

    #[test]
    fn status_replaces_help() {
        let lab = SignalLab::new(LabConfig::new().seed(1));
        let ui = UiState {
            status: Some(Status::info("Saved output.wav")),
            ..UiState::default()
        };

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|frame| {
                render(frame, &lab, &ui);
            })
            .unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Saved output.wav"));
        assert!(!text.contains("[Q] Quit"));
    }
}

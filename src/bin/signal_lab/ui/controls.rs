//! Button row: three generators, record toggle, save

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use signal_lab::dsp::SignalKind;

use super::state::{contains, ButtonRegions};

const BUTTON_WIDTH: u16 = 16;

/// What a button (or its shortcut key) does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Generate(SignalKind),
    ToggleRecord,
    Save,
}

impl Action {
    /// Buttons in screen order.
    pub const ALL: [Action; 5] = [
        Action::Generate(SignalKind::Polyharmonic),
        Action::Generate(SignalKind::AmNoise),
        Action::Generate(SignalKind::Pulse),
        Action::ToggleRecord,
        Action::Save,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Action::Generate(kind) => kind.label(),
            Action::ToggleRecord => "STOP/REC",
            Action::Save => "Save WAV",
        }
    }
}

/// Render the button row and return where each button landed.
pub fn render_controls(
    frame: &mut Frame,
    area: Rect,
    is_recording: bool,
    hover: Option<(u16, u16)>,
) -> ButtonRegions {
    // Generators, a gap, then record and save
    let slots = Layout::horizontal([
        Constraint::Length(BUTTON_WIDTH),
        Constraint::Length(BUTTON_WIDTH),
        Constraint::Length(BUTTON_WIDTH),
        Constraint::Length(3),
        Constraint::Length(BUTTON_WIDTH),
        Constraint::Length(BUTTON_WIDTH),
        Constraint::Min(0),
    ])
    .spacing(1)
    .split(area);

    let mut regions = ButtonRegions::default();
    let button_slots = [slots[0], slots[1], slots[2], slots[4], slots[5]];

    for (&slot, action) in button_slots.iter().zip(Action::ALL) {
        let hovered = hover.is_some_and(|(col, row)| contains(slot, col, row));
        let background = if hovered {
            Color::DarkGray
        } else if action == Action::ToggleRecord && is_recording {
            Color::Red
        } else {
            Color::Gray
        };

        let button = Paragraph::new(action.label())
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Black).bg(background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Black)),
            );
        frame.render_widget(button, slot);
        regions.push(slot, action);
    }

    regions
}

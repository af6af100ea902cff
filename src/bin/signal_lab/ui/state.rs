//! UI-only state: things the lab itself does not need to know

use ratatui::layout::Rect;

use super::controls::Action;

/// Message shown in the status line after an action.
#[derive(Clone, Debug, PartialEq)]
pub struct Status {
    pub text: String,
    pub is_error: bool,
}

impl Status {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

/// Screen rectangles of the buttons drawn in the last frame.
#[derive(Clone, Debug, Default)]
pub struct ButtonRegions {
    buttons: Vec<(Rect, Action)>,
}

impl ButtonRegions {
    pub fn push(&mut self, area: Rect, action: Action) {
        self.buttons.push((area, action));
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = &(Rect, Action)> {
        self.buttons.iter()
    }

    /// The button under terminal cell (`column`, `row`), if any.
    pub fn hit(&self, column: u16, row: u16) -> Option<Action> {
        self.buttons
            .iter()
            .find(|(area, _)| contains(*area, column, row))
            .map(|(_, action)| *action)
    }
}

pub fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
}

/// Everything the renderer needs besides the lab.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    /// Last known mouse position
    pub hover: Option<(u16, u16)>,
    /// Button layout from the previous frame, used for hit-testing clicks
    pub regions: ButtonRegions,
    pub status: Option<Status>,
}

//! App - event loop and input dispatch

use color_eyre::eyre::{Result as EyreResult, WrapErr};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
};
use ratatui::DefaultTerminal;
use std::time::Instant;

use signal_lab::{
    dsp::SignalKind,
    io::{CpalInput, InputBackend},
    lab::RecordEvent,
    LabConfig, SignalLab,
};

use super::ui::{self, Action, Status, UiState};

pub struct App<B: InputBackend = CpalInput> {
    lab: SignalLab<B>,
    ui: UiState,
    should_quit: bool,
}

impl App<CpalInput> {
    /// Create the app with a freshly generated polyharmonic signal
    pub fn new(config: LabConfig) -> Self {
        Self::with_lab(SignalLab::new(config))
    }
}

impl<B: InputBackend> App<B> {
    pub fn with_lab(mut lab: SignalLab<B>) -> Self {
        lab.generate(SignalKind::Polyharmonic);
        Self {
            lab,
            ui: UiState::default(),
            should_quit: false,
        }
    }

    /// Run the application (takes over the terminal until quit)
    pub fn run(mut self) -> EyreResult<()> {
        let mut terminal = ratatui::init();
        let result = execute!(std::io::stdout(), EnableMouseCapture)
            .wrap_err("failed to enable mouse capture")
            .and_then(|_| self.event_loop(&mut terminal));

        if self.lab.is_recording() {
            if let Err(err) = self.lab.stop_recording() {
                tracing::warn!("stopping recording on exit failed: {err}");
            }
        }

        let _ = execute!(std::io::stdout(), DisableMouseCapture);
        ratatui::restore();
        result
    }

    fn event_loop(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        let frame_interval = self.lab.config().frame_interval();

        while !self.should_quit {
            let frame_start = Instant::now();

            // Pull whatever the microphone delivered since the last frame
            self.lab.poll();

            let mut regions = ui::ButtonRegions::default();
            terminal.draw(|frame| regions = ui::render(frame, &self.lab, &self.ui))?;
            self.ui.regions = regions;

            // Handle input for the rest of the frame (~60fps)
            loop {
                let remaining = frame_interval.saturating_sub(frame_start.elapsed());
                if !event::poll(remaining)? {
                    break;
                }
                self.handle_event(event::read()?);
                if self.should_quit {
                    break;
                }
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    /// Handle keyboard input
    ///
    /// Arrow keys act on press and on auto-repeat, so holding one keeps
    /// adjusting the parameter.
    fn handle_key(&mut self, key: KeyEvent) {
        if !matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
            return;
        }

        match key.code {
            KeyCode::Up => self.lab.nudge_amplitude(1.0),
            KeyCode::Down => self.lab.nudge_amplitude(-1.0),
            KeyCode::Right => self.lab.nudge_frequency(1.0),
            KeyCode::Left => self.lab.nudge_frequency(-1.0),
            KeyCode::Char('1') => self.dispatch(Action::Generate(SignalKind::Polyharmonic)),
            KeyCode::Char('2') => self.dispatch(Action::Generate(SignalKind::AmNoise)),
            KeyCode::Char('3') => self.dispatch(Action::Generate(SignalKind::Pulse)),
            KeyCode::Char('r') | KeyCode::Char('R') => self.dispatch(Action::ToggleRecord),
            KeyCode::Char('s') | KeyCode::Char('S') => self.dispatch(Action::Save),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        self.ui.hover = Some((mouse.column, mouse.row));

        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            if let Some(action) = self.ui.regions.hit(mouse.column, mouse.row) {
                self.dispatch(action);
            }
        }
    }

    fn dispatch(&mut self, action: Action) {
        let status = match action {
            Action::Generate(kind) => {
                self.lab.generate(kind);
                Status::info(format!("Generated {}", kind.label()))
            }
            Action::ToggleRecord => match self.lab.toggle_record() {
                Ok(RecordEvent::Started) => Status::info("Recording..."),
                Ok(RecordEvent::Stopped { frames: 0 }) => {
                    Status::info("Nothing captured; signal unchanged")
                }
                Ok(RecordEvent::Stopped { frames }) => Status::info(format!(
                    "Recorded {frames} samples ({:.2}s)",
                    frames as f64 / self.lab.config().sample_rate as f64
                )),
                Err(err) => {
                    tracing::error!("record toggle failed: {err}");
                    Status::error(err.to_string())
                }
            },
            Action::Save => match self.lab.save() {
                Ok(path) => Status::info(format!("Saved {}", path.display())),
                Err(err) => {
                    tracing::error!("save failed: {err}");
                    Status::error(err.to_string())
                }
            },
        };
        self.ui.status = Some(status);
    }
}

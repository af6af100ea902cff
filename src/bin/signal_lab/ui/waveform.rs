//! Waveform plot widget
//!
//! Draws on the lab's fixed 900x350 plot surface; the canvas scales that
//! surface onto whatever terminal area it gets.

use ratatui::{
    layout::Rect,
    style::Color,
    symbols,
    widgets::{
        canvas::{Canvas, Line},
        Block, Borders,
    },
    Frame,
};
use signal_lab::plot::{center_axis, waveform_segments, PlotArea, Segment, AMPLITUDE_SCALE};

const PLOT: PlotArea = PlotArea::STANDARD;

/// Screen segments (y down) to canvas lines (y up).
fn to_canvas(segment: &Segment, color: Color) -> Line {
    Line::new(
        segment.x1 - PLOT.x,
        PLOT.bottom() - segment.y1,
        segment.x2 - PLOT.x,
        PLOT.bottom() - segment.y2,
        color,
    )
}

/// Render the current buffer
pub fn render_waveform(frame: &mut Frame, area: Rect, samples: &[f32]) {
    let axis = to_canvas(&center_axis(&PLOT), Color::Gray);
    let trace: Vec<Line> = waveform_segments(samples, &PLOT, AMPLITUDE_SCALE)
        .iter()
        .map(|segment| to_canvas(segment, Color::Blue))
        .collect();

    let canvas = Canvas::default()
        .block(Block::default().title(" Waveform ").borders(Borders::ALL))
        .marker(symbols::Marker::Braille)
        .background_color(Color::White)
        .x_bounds([0.0, PLOT.width])
        .y_bounds([0.0, PLOT.height])
        .paint(|ctx| {
            ctx.draw(&axis);
            for line in &trace {
                ctx.draw(line);
            }
        });

    frame.render_widget(canvas, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_flips_vertical_axis() {
        let top = Segment {
            x1: 0.0,
            y1: 0.0,
            x2: 900.0,
            y2: 350.0,
        };
        let line = to_canvas(&top, Color::Blue);
        assert_eq!((line.x1, line.y1), (0.0, 350.0));
        assert_eq!((line.x2, line.y2), (900.0, 0.0));
    }
}

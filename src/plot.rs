//! Waveform plot geometry
//!
//! Maps a sample buffer onto a rectangular drawing surface in screen space
//! (y grows downward). Sample index maps linearly to x across the full width;
//! amplitude maps to y around the horizontal center line with a fixed scale
//! and is clamped to the box so spikes are flattened against the border
//! instead of leaving the plot.
//!
//! Long buffers are decimated: only every `stride`-th sample becomes a point,
//! with `stride = max(1, ceil(len / width))`, which keeps the point count at
//! or below one per horizontal pixel.

/// Screen units per unit of amplitude.
pub const AMPLITUDE_SCALE: f64 = 100.0;

/// Rectangular plot surface in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    /// The lab's plot box: 900x350 pixels.
    pub const STANDARD: PlotArea = PlotArea::new(0.0, 0.0, 900.0, 350.0);

    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Whole pixels available horizontally (at least 1).
    pub fn pixel_width(&self) -> usize {
        if self.width.is_finite() && self.width >= 1.0 {
            self.width as usize
        } else {
            1
        }
    }
}

/// A straight line between two screen points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Sample stride that keeps `len` samples within `width` pixels.
pub fn decimation_stride(len: usize, width: usize) -> usize {
    let width = width.max(1);
    len.div_ceil(width).max(1)
}

/// Decimated, clamped screen points for `samples`.
///
/// Buffers shorter than two samples produce no points.
pub fn waveform_points(samples: &[f32], area: &PlotArea, scale: f64) -> Vec<(f64, f64)> {
    let len = samples.len();
    if len < 2 {
        return Vec::new();
    }

    let stride = decimation_stride(len, area.pixel_width());
    let center = area.center_y();

    (0..len)
        .step_by(stride)
        .map(|i| {
            let x = area.x + (i as f64 / len as f64) * area.width;
            let y = (center - samples[i] as f64 * scale).clamp(area.y, area.bottom());
            (x, y)
        })
        .collect()
}

/// Line segments joining consecutive decimated points.
pub fn waveform_segments(samples: &[f32], area: &PlotArea, scale: f64) -> Vec<Segment> {
    waveform_points(samples, area, scale)
        .windows(2)
        .map(|pair| Segment {
            x1: pair[0].0,
            y1: pair[0].1,
            x2: pair[1].0,
            y2: pair[1].1,
        })
        .collect()
}

/// The horizontal zero line.
pub fn center_axis(area: &PlotArea) -> Segment {
    let y = area.center_y();
    Segment {
        x1: area.x,
        y1: y,
        x2: area.right(),
        y2: y,
    }
}

//! Animated hero background: slow sine waves on a braille canvas, colored
//! round-robin from the active palette.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::symbols::Marker;
use ratatui::widgets::Widget;
use ratatui::widgets::canvas::{Canvas, Line};
use std::f64::consts::TAU;

use crate::core::palette::Palette;
use crate::tui::theme;

const SEGMENTS: usize = 96;

pub struct FloatingLines<'a> {
    palette: &'a Palette,
    line_count: u8,
    /// Elapsed seconds already scaled by the animation speed.
    phase: f64,
}

impl<'a> FloatingLines<'a> {
    pub fn new(palette: &'a Palette, line_count: u8, elapsed_secs: f32, speed: f32) -> Self {
        Self {
            palette,
            line_count,
            phase: f64::from(elapsed_secs) * f64::from(speed),
        }
    }
}

/// Height of wave `index` of `count` at horizontal position `x` in `[0, 1]`.
///
/// Stays within `[-1, 1]`.
pub fn wave_y(index: usize, count: usize, x: f64, phase: f64) -> f64 {
    let i = index as f64;
    let spread = if count > 1 {
        i / (count - 1) as f64
    } else {
        0.5
    };
    let baseline = -0.5 + spread;
    let amplitude = 0.18 + 0.04 * (i % 3.0);
    let frequency = 0.8 + 0.25 * i;
    let drift = phase * (0.6 + 0.12 * i);
    (baseline + amplitude * (TAU * frequency * x + drift + i).sin()).clamp(-1.0, 1.0)
}

impl Widget for FloatingLines<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let count = usize::from(self.line_count);
        Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([0.0, 1.0])
            .y_bounds([-1.0, 1.0])
            .paint(|ctx| {
                for index in 0..count {
                    let color = theme::color(self.palette[index % self.palette.len()]);
                    let mut prev = (0.0, wave_y(index, count, 0.0, self.phase));
                    for step in 1..=SEGMENTS {
                        let x = step as f64 / SEGMENTS as f64;
                        let y = wave_y(index, count, x, self.phase);
                        ctx.draw(&Line::new(prev.0, prev.1, x, y, color));
                        prev = (x, y);
                    }
                }
            })
            .render(area, buf);
    }
}

//! Terminal color helpers shared by the page components.

use ratatui::style::Color;

use crate::core::palette::Rgb;

pub fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

/// Mix `rgb` toward `toward` by `amount` in `[0, 1]` (0 keeps `rgb`).
pub fn mix(rgb: Rgb, toward: Rgb, amount: f32) -> Rgb {
    let t = amount.clamp(0.0, 1.0);
    let channel = |a: u8, b: u8| (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8;
    Rgb::new(
        channel(rgb.r, toward.r),
        channel(rgb.g, toward.g),
        channel(rgb.b, toward.b),
    )
}

/// Fade toward black; `opacity` 1 leaves the color unchanged.
pub fn fade(rgb: Rgb, opacity: f32) -> Color {
    color(mix(rgb, Rgb::new(0, 0, 0), 1.0 - opacity))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mix_endpoints() {
        let red = Rgb::new(255, 0, 0);
        let blue = Rgb::new(0, 0, 255);
        assert_eq!(mix(red, blue, 0.0), red);
        assert_eq!(mix(red, blue, 1.0), blue);
        assert_eq!(mix(red, blue, 0.5), Rgb::new(128, 0, 128));
    }

    #[test]
    fn fade_to_black() {
        assert_eq!(fade(Rgb::new(200, 100, 50), 0.0), Color::Rgb(0, 0, 0));
        assert_eq!(fade(Rgb::new(200, 100, 50), 1.0), Color::Rgb(200, 100, 50));
    }
}

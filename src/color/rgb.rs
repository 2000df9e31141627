//! sRGB triples and channel interpolation.

use serde::{Deserialize, Serialize};

/// An 8-bit-per-channel sRGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear blend toward `to`; `t` is clamped to `[0, 1]`.
    ///
    /// ```rust
    /// use huecycle::color::Rgb;
    ///
    /// let black = Rgb::new(0, 0, 0);
    /// let white = Rgb::new(255, 255, 255);
    /// assert_eq!(black.lerp(white, 0.0), black);
    /// assert_eq!(black.lerp(white, 1.0), white);
    /// assert_eq!(black.lerp(white, 0.5), Rgb::new(128, 128, 128));
    /// ```
    pub fn lerp(self, to: Rgb, t: f32) -> Rgb {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        Rgb {
            r: lerp_channel(self.r, to.r, t),
            g: lerp_channel(self.g, to.g, t),
            b: lerp_channel(self.b, to.b, t),
        }
    }
}

fn lerp_channel(from: u8, to: u8, t: f32) -> u8 {
    let value = f32::from(from) + (f32::from(to) - f32::from(from)) * t;
    value.round().clamp(0.0, 255.0) as u8
}

impl From<Rgb> for ratatui::style::Color {
    fn from(rgb: Rgb) -> Self {
        ratatui::style::Color::Rgb(rgb.r, rgb.g, rgb.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb = Rgb::new(255, 59, 48);
    const BLUE: Rgb = Rgb::new(0, 122, 255);

    #[test]
    fn lerp_hits_endpoints() {
        assert_eq!(RED.lerp(BLUE, 0.0), RED);
        assert_eq!(RED.lerp(BLUE, 1.0), BLUE);
    }

    #[test]
    fn lerp_clamps_out_of_range() {
        assert_eq!(RED.lerp(BLUE, -3.0), RED);
        assert_eq!(RED.lerp(BLUE, 7.5), BLUE);
        assert_eq!(RED.lerp(BLUE, f32::NAN), RED);
    }

    #[test]
    fn lerp_midpoint_rounds() {
        let mid = Rgb::new(0, 0, 0).lerp(Rgb::new(3, 5, 255), 0.5);
        assert_eq!(mid, Rgb::new(2, 3, 128));
    }

    #[test]
    fn converts_to_terminal_color() {
        let color: ratatui::style::Color = BLUE.into();
        assert_eq!(color, ratatui::style::Color::Rgb(0, 122, 255));
    }
}

//! Cosmetic interpolation between the old and new shape color.
//!
//! Nothing here feeds back into view state: a `ColorTransition` is built
//! from a `ColorChange` and sampled by the renderer until it completes.

use crate::color::Rgb;
use std::time::Duration;

/// Easing curve applied to normalized progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Curve {
    Linear,
    #[default]
    EaseInOut,
}

impl Curve {
    /// Map progress `t` in `[0, 1]` onto the curve. Input is clamped.
    pub fn apply(self, t: f32) -> f32 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Curve::Linear => t,
            // smoothstep
            Curve::EaseInOut => t * t * (3.0 - 2.0 * t),
        }
    }
}

/// The default transition requested on every tap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Animation {
    pub duration: Duration,
    pub curve: Curve,
}

impl Animation {
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(350);
}

impl Default for Animation {
    fn default() -> Self {
        Self {
            duration: Self::DEFAULT_DURATION,
            curve: Curve::EaseInOut,
        }
    }
}

/// An in-flight blend from one fill to another.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorTransition {
    from: Rgb,
    to: Rgb,
    animation: Animation,
}

impl ColorTransition {
    pub fn new(from: Rgb, to: Rgb, animation: Animation) -> Self {
        Self {
            from,
            to,
            animation,
        }
    }

    /// Linear progress in `[0, 1]`. A zero duration completes immediately.
    pub fn progress(&self, elapsed: Duration) -> f32 {
        if self.animation.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f32() / self.animation.duration.as_secs_f32()).min(1.0)
    }

    pub fn is_complete(&self, elapsed: Duration) -> bool {
        elapsed >= self.animation.duration
    }

    /// Fill color `elapsed` after the transition started.
    pub fn sample(&self, elapsed: Duration) -> Rgb {
        if self.is_complete(elapsed) {
            return self.to;
        }
        let eased = self.animation.curve.apply(self.progress(elapsed));
        self.from.lerp(self.to, eased)
    }

    /// Restart from wherever this transition currently is, heading to `to`.
    /// Used when a tap lands before the previous blend finished.
    pub fn retarget(&self, elapsed: Duration, to: Rgb, animation: Animation) -> Self {
        Self::new(self.sample(elapsed), to, animation)
    }

    pub fn target(&self) -> Rgb {
        self.to
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::DisplayColor;

    fn green_to_red() -> ColorTransition {
        ColorTransition::new(
            DisplayColor::Green.rgb(),
            DisplayColor::Red.rgb(),
            Animation::default(),
        )
    }

    #[test]
    fn default_is_ease_in_out() {
        let animation = Animation::default();
        assert_eq!(animation.duration, Duration::from_millis(350));
        assert_eq!(animation.curve, Curve::EaseInOut);
    }

    #[test]
    fn curves_fix_endpoints() {
        for curve in [Curve::Linear, Curve::EaseInOut] {
            assert_eq!(curve.apply(0.0), 0.0);
            assert_eq!(curve.apply(1.0), 1.0);
            assert_eq!(curve.apply(-1.0), 0.0);
            assert_eq!(curve.apply(2.0), 1.0);
        }
        assert_eq!(Curve::EaseInOut.apply(0.5), 0.5);
    }

    #[test]
    fn ease_in_out_starts_slow() {
        assert!(Curve::EaseInOut.apply(0.1) < Curve::Linear.apply(0.1));
        assert!(Curve::EaseInOut.apply(0.9) > Curve::Linear.apply(0.9));
    }

    #[test]
    fn sample_hits_endpoints() {
        let transition = green_to_red();
        assert_eq!(transition.sample(Duration::ZERO), DisplayColor::Green.rgb());
        assert_eq!(
            transition.sample(Duration::from_millis(350)),
            DisplayColor::Red.rgb()
        );
        assert_eq!(transition.sample(Duration::from_secs(5)), DisplayColor::Red.rgb());
    }

    #[test]
    fn red_channel_rises_monotonically() {
        let transition = green_to_red();
        let mut previous = 0u8;
        for ms in (0..=350).step_by(25) {
            let r = transition.sample(Duration::from_millis(ms)).r;
            assert!(r >= previous, "red channel dropped at {ms}ms");
            previous = r;
        }
    }

    #[test]
    fn completion_tracks_duration() {
        let transition = green_to_red();
        assert!(!transition.is_complete(Duration::from_millis(349)));
        assert!(transition.is_complete(Duration::from_millis(350)));
    }

    #[test]
    fn zero_duration_is_instant() {
        let transition = ColorTransition::new(
            DisplayColor::Blue.rgb(),
            DisplayColor::Green.rgb(),
            Animation {
                duration: Duration::ZERO,
                curve: Curve::Linear,
            },
        );
        assert_eq!(transition.progress(Duration::ZERO), 1.0);
        assert_eq!(transition.sample(Duration::ZERO), DisplayColor::Green.rgb());
    }

    #[test]
    fn retarget_starts_from_current_fill() {
        let transition = green_to_red();
        let midway = Duration::from_millis(175);
        let current = transition.sample(midway);

        let next = transition.retarget(midway, DisplayColor::Blue.rgb(), Animation::default());

        assert_eq!(next.sample(Duration::ZERO), current);
        assert_eq!(next.target(), DisplayColor::Blue.rgb());
    }
}

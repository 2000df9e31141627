//! The closed set of shape colors and the rotation between them.
//!
//! `next_color` is the whole of the domain logic: a total, pure map over
//! `{Green, Red, Blue}` that never returns its input.

mod error;
mod rgb;

pub use error::ColorError;
pub use rgb::Rgb;

use crate::core::State;
use crate::cycle::{BuildError, CycleBuilder, CycleMachine};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Color the tappable shape is filled with.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum DisplayColor {
    #[default]
    Green,
    Red,
    Blue,
}

impl DisplayColor {
    /// Every color, in rotation order starting from the initial one.
    pub const ALL: [DisplayColor; 3] = [DisplayColor::Green, DisplayColor::Red, DisplayColor::Blue];

    /// Successor in the rotation. Same as [`next_color`].
    pub fn next(self) -> DisplayColor {
        next_color(self)
    }

    pub fn rgb(self) -> Rgb {
        match self {
            DisplayColor::Green => Rgb::new(52, 199, 89),
            DisplayColor::Red => Rgb::new(255, 59, 48),
            DisplayColor::Blue => Rgb::new(0, 122, 255),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DisplayColor::Green => "Green",
            DisplayColor::Red => "Red",
            DisplayColor::Blue => "Blue",
        }
    }

    /// Parse a color name, falling back to `Green` for anything outside the set.
    pub fn from_name_or_default(name: &str) -> DisplayColor {
        name.parse().unwrap_or_default()
    }

    /// Machine that rotates through [`DisplayColor::ALL`] via [`next_color`],
    /// starting at `Green`.
    pub fn cycle_machine<Env>() -> Result<CycleMachine<DisplayColor, Env>, BuildError>
    where
        Env: Clone + Send + Sync + 'static,
    {
        DisplayColor::ALL
            .into_iter()
            .fold(CycleBuilder::new().initial(DisplayColor::default()), |builder, color| {
                builder.transition(color, next_color(color))
            })
            .build()
    }
}

/// Successor of `current`: Green → Red → Blue → Green.
///
/// ```rust
/// use huecycle::{next_color, DisplayColor};
///
/// assert_eq!(next_color(DisplayColor::Green), DisplayColor::Red);
/// assert_eq!(next_color(DisplayColor::Red), DisplayColor::Blue);
/// assert_eq!(next_color(DisplayColor::Blue), DisplayColor::Green);
/// ```
pub fn next_color(current: DisplayColor) -> DisplayColor {
    match current {
        DisplayColor::Green => DisplayColor::Red,
        DisplayColor::Red => DisplayColor::Blue,
        DisplayColor::Blue => DisplayColor::Green,
    }
}

/// Cycle a color given by name. Unknown names yield `Green`.
pub fn next_color_by_name(name: &str) -> DisplayColor {
    name.parse::<DisplayColor>()
        .map(next_color)
        .unwrap_or(DisplayColor::Green)
}

impl State for DisplayColor {
    fn name(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for DisplayColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisplayColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        DisplayColor::ALL
            .into_iter()
            .find(|color| color.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ColorError::Unknown(trimmed.to_string()))
    }
}

//! Change notifications delivered after every view-state mutation.

use crate::animation::Animation;
use crate::color::DisplayColor;

/// A tap's request to blend the shape from one color to the next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorChange {
    pub from: DisplayColor,
    pub to: DisplayColor,
    pub animation: Animation,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewEvent {
    /// The hint toggle now reads this value.
    HintToggled(bool),
    ColorChanged(ColorChange),
}

/// Anything that re-renders when the view changes.
///
/// Closures taking `&ViewEvent` implement this directly.
pub trait ViewObserver {
    fn on_event(&mut self, event: &ViewEvent);
}

impl<F> ViewObserver for F
where
    F: FnMut(&ViewEvent),
{
    fn on_event(&mut self, event: &ViewEvent) {
        self(event)
    }
}

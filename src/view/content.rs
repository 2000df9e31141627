//! The single screen: a hint toggle, optional hint text, and a tappable shape.

use crate::animation::Animation;
use crate::color::DisplayColor;
use crate::cycle::{CycleError, CycleMachine};
use crate::view::observer::{ColorChange, ViewEvent, ViewObserver};

pub const SHOW_HINT_LABEL: &str = "Show hint";
pub const HIDE_HINT_LABEL: &str = "Hide hint";
pub const HINT_TEXT: &str = "See what happens if you tap the circle 👀";

/// View-state container for the demo screen.
///
/// Holds the two independent pieces of state (hint visibility and the shape
/// color) and tells every subscribed observer about each change so it can
/// redraw.
///
/// ```rust
/// use huecycle::view::ContentView;
/// use huecycle::DisplayColor;
///
/// let mut view = ContentView::new();
/// assert_eq!(view.color(), DisplayColor::Green);
/// assert_eq!(view.toggle_label(), "Show hint");
///
/// view.on_toggle_flip();
/// assert_eq!(view.toggle_label(), "Hide hint");
/// assert!(view.hint_text().is_some());
/// ```
pub struct ContentView {
    hint_visible: bool,
    machine: CycleMachine<DisplayColor, ()>,
    animation: Animation,
    observers: Vec<Box<dyn ViewObserver>>,
}

impl ContentView {
    pub fn new() -> Self {
        Self {
            hint_visible: false,
            machine: DisplayColor::cycle_machine()
                .expect("the display color rotation is closed and always builds"),
            animation: Animation::default(),
            observers: Vec::new(),
        }
    }

    /// Register an observer. It sees every later change, after the observers
    /// registered before it.
    pub fn subscribe<O>(&mut self, observer: O)
    where
        O: ViewObserver + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    pub fn hint_visible(&self) -> bool {
        self.hint_visible
    }

    pub fn color(&self) -> DisplayColor {
        *self.machine.current_state()
    }

    /// Label shown next to the toggle.
    pub fn toggle_label(&self) -> &'static str {
        if self.hint_visible {
            HIDE_HINT_LABEL
        } else {
            SHOW_HINT_LABEL
        }
    }

    /// Explanatory text, present only while the hint is visible.
    pub fn hint_text(&self) -> Option<&'static str> {
        self.hint_visible.then_some(HINT_TEXT)
    }

    /// Colors shown so far, starting with the initial one.
    pub fn color_path(&self) -> Vec<DisplayColor> {
        let path = self.machine.history().get_path();
        if path.is_empty() {
            return vec![*self.machine.initial_state()];
        }
        path.into_iter().copied().collect()
    }

    pub fn tap_count(&self) -> usize {
        self.machine.history().len()
    }

    /// Flip the hint toggle. Returns the new value.
    pub fn on_toggle_flip(&mut self) -> bool {
        let visible = !self.hint_visible;
        self.write_hint(visible);
        visible
    }

    /// Write half of the toggle binding. Observers hear nothing when the
    /// value is unchanged.
    pub fn set_hint_visible(&mut self, visible: bool) {
        if visible != self.hint_visible {
            self.write_hint(visible);
        }
    }

    /// Advance the shape to its next color and request the default
    /// transition from the old fill to the new one.
    pub async fn on_shape_tap(&mut self) -> Result<ColorChange, CycleError> {
        let (from, to) = self.machine.advance(&()).await?;
        let change = ColorChange {
            from,
            to,
            animation: self.animation,
        };
        tracing::debug!(from = %from, to = %to, taps = self.tap_count(), "shape tapped");
        self.notify(ViewEvent::ColorChanged(change));
        Ok(change)
    }

    fn write_hint(&mut self, visible: bool) {
        self.hint_visible = visible;
        tracing::debug!(visible, "hint toggled");
        self.notify(ViewEvent::HintToggled(visible));
    }

    fn notify(&mut self, event: ViewEvent) {
        for observer in &mut self.observers {
            observer.on_event(&event);
        }
    }
}

impl Default for ContentView {
    fn default() -> Self {
        Self::new()
    }
}

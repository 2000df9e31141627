//! Immutable record of the states a view has shown.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One move from a state to its successor.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being replaced
    pub from: S,
    /// The state that replaced it
    pub to: S,
    /// When the transition was applied
    pub timestamp: DateTime<Utc>,
    /// 1-based position of this transition within its history
    pub sequence: usize,
}

/// Ordered history of transitions.
///
/// `record` never mutates; it hands back a new history with the transition
/// appended.
///
/// # Example
///
/// ```rust
/// use huecycle::core::StateHistory;
/// use huecycle::DisplayColor;
///
/// let history = StateHistory::new()
///     .record_step(DisplayColor::Green, DisplayColor::Red)
///     .record_step(DisplayColor::Red, DisplayColor::Blue);
///
/// let path = history.get_path();
/// assert_eq!(
///     path,
///     vec![&DisplayColor::Green, &DisplayColor::Red, &DisplayColor::Blue]
/// );
/// assert_eq!(history.last().map(|t| t.sequence), Some(2));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Append a prepared transition, returning a new history.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Append `from -> to` stamped with the current time and the next
    /// sequence number.
    pub fn record_step(&self, from: S, to: S) -> Self {
        self.record(StateTransition {
            from,
            to,
            timestamp: Utc::now(),
            sequence: self.transitions.len() + 1,
        })
    }

    /// States in the order they were shown: the first `from`, then every `to`.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        path.extend(self.transitions.iter().map(|t| &t.to));
        path
    }

    /// Time between the first and last transition, `None` when empty.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.first()?, self.transitions.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.last()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::DisplayColor;

    #[test]
    fn new_history_is_empty() {
        let history: StateHistory<DisplayColor> = StateHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
        assert!(history.last().is_none());
    }

    #[test]
    fn record_leaves_original_untouched() {
        let history = StateHistory::new();
        let next = history.record_step(DisplayColor::Green, DisplayColor::Red);

        assert_eq!(history.len(), 0);
        assert_eq!(next.len(), 1);
    }

    #[test]
    fn record_step_numbers_transitions() {
        let history = StateHistory::new()
            .record_step(DisplayColor::Green, DisplayColor::Red)
            .record_step(DisplayColor::Red, DisplayColor::Blue)
            .record_step(DisplayColor::Blue, DisplayColor::Green);

        let sequences: Vec<usize> = history.transitions().iter().map(|t| t.sequence).collect();
        assert_eq!(sequences, vec![1, 2, 3]);
    }

    #[test]
    fn path_starts_with_first_source() {
        let history = StateHistory::new()
            .record_step(DisplayColor::Green, DisplayColor::Red)
            .record_step(DisplayColor::Red, DisplayColor::Blue);

        let path = history.get_path();
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], &DisplayColor::Green);
        assert_eq!(path[2], &DisplayColor::Blue);
    }

    #[test]
    fn duration_spans_first_to_last() {
        let start = Utc::now();
        let history = StateHistory::new()
            .record(StateTransition {
                from: DisplayColor::Green,
                to: DisplayColor::Red,
                timestamp: start,
                sequence: 1,
            })
            .record(StateTransition {
                from: DisplayColor::Red,
                to: DisplayColor::Blue,
                timestamp: start + chrono::Duration::milliseconds(250),
                sequence: 2,
            });

        assert_eq!(history.duration(), Some(Duration::from_millis(250)));
    }

    #[test]
    fn single_transition_has_zero_duration() {
        let history = StateHistory::new().record_step(DisplayColor::Green, DisplayColor::Red);
        assert_eq!(history.duration(), Some(Duration::ZERO));
    }

    #[test]
    fn history_serializes() {
        let history = StateHistory::new().record_step(DisplayColor::Blue, DisplayColor::Green);

        let json = serde_json::to_string(&history).unwrap();
        let back: StateHistory<DisplayColor> = serde_json::from_str(&json).unwrap();

        assert_eq!(back.len(), 1);
        assert_eq!(back.transitions()[0].to, DisplayColor::Green);
    }
}

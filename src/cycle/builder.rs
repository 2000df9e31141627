//! Fluent construction of a validated rotation.

use crate::core::State;
use crate::cycle::error::BuildError;
use crate::cycle::machine::CycleMachine;
use crate::cycle::transition::Transition;
use std::marker::PhantomData;

/// Builder that only produces machines whose transitions form a closed
/// rotation: every state reached has exactly one way out, and no state maps
/// to itself.
///
/// ```rust
/// use huecycle::cycle::CycleBuilder;
/// use huecycle::DisplayColor;
///
/// let machine = CycleBuilder::<DisplayColor, ()>::new()
///     .initial(DisplayColor::Green)
///     .transition(DisplayColor::Green, DisplayColor::Red)
///     .transition(DisplayColor::Red, DisplayColor::Blue)
///     .transition(DisplayColor::Blue, DisplayColor::Green)
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.current_state(), &DisplayColor::Green);
/// ```
pub struct CycleBuilder<S: State + 'static, Env: Clone + Send + Sync + 'static> {
    initial: Option<S>,
    transitions: Vec<Transition<S, Env>>,
    _phantom: PhantomData<Env>,
}

impl<S: State + 'static, Env: Clone + Send + Sync + 'static> CycleBuilder<S, Env> {
    pub fn new() -> Self {
        Self {
            initial: None,
            transitions: Vec::new(),
            _phantom: PhantomData,
        }
    }

    /// Set the starting state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Add an unconditional `from -> to` transition.
    pub fn transition(self, from: S, to: S) -> Self {
        self.add_transition(Transition::unconditional(from, to))
    }

    /// Add a transition with a custom action.
    pub fn add_transition(mut self, transition: Transition<S, Env>) -> Self {
        self.transitions.push(transition);
        self
    }

    pub fn build(self) -> Result<CycleMachine<S, Env>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.transitions.is_empty() {
            return Err(BuildError::NoTransitions);
        }

        for (index, transition) in self.transitions.iter().enumerate() {
            if transition.from == transition.to {
                return Err(BuildError::SelfTransition {
                    state: transition.from.name().to_string(),
                });
            }
            if self.transitions[..index]
                .iter()
                .any(|earlier| earlier.from == transition.from)
            {
                return Err(BuildError::DuplicateSource {
                    state: transition.from.name().to_string(),
                });
            }
        }

        let has_exit = |state: &S| self.transitions.iter().any(|t| t.can_execute(state));
        let dead_end = std::iter::once(&initial)
            .chain(self.transitions.iter().map(|t| &t.to))
            .find(|state| !has_exit(state));
        if let Some(state) = dead_end {
            return Err(BuildError::DeadEnd {
                state: state.name().to_string(),
            });
        }

        let mut machine = CycleMachine::new(initial);
        for transition in self.transitions {
            machine.add_transition(transition);
        }

        Ok(machine)
    }
}

impl<S: State + 'static, Env: Clone + Send + Sync + 'static> Default for CycleBuilder<S, Env> {
    fn default() -> Self {
        Self::new()
    }
}

//! Machine that steps through a closed rotation of states.

use crate::core::{State, StateHistory};
use crate::cycle::error::CycleError;
use crate::cycle::transition::Transition;
use stillwater::effect::Effect;
use stillwater::prelude::*;

/// Holds the current state of a rotation and the history of moves so far.
///
/// Stepping is split in two: [`CycleMachine::step`] describes the move as an
/// effect, the caller runs it, then hands the outcome to
/// [`CycleMachine::apply`].
pub struct CycleMachine<S: State + 'static, Env: Clone + Send + Sync + 'static> {
    initial: S,
    current: S,
    transitions: Vec<Transition<S, Env>>,
    history: StateHistory<S>,
}

impl<S: State + 'static, Env: Clone + Send + Sync + 'static> CycleMachine<S, Env> {
    pub fn new(initial: S) -> Self {
        Self {
            current: initial.clone(),
            initial,
            transitions: Vec::new(),
            history: StateHistory::new(),
        }
    }

    pub fn add_transition(&mut self, transition: Transition<S, Env>) {
        self.transitions.push(transition);
    }

    pub fn current_state(&self) -> &S {
        &self.current
    }

    pub fn initial_state(&self) -> &S {
        &self.initial
    }

    pub fn history(&self) -> &StateHistory<S> {
        &self.history
    }

    pub fn transition_count(&self) -> usize {
        self.transitions.len()
    }

    /// Describe one move away from the current state.
    ///
    /// The effect yields `(from, to)`; pass both to `apply` once it has run.
    pub fn step(&self) -> impl Effect<Output = (S, S), Error = CycleError, Env = Env> + '_ {
        let Some(transition) = self
            .transitions
            .iter()
            .find(|t| t.can_execute(&self.current))
        else {
            return fail(CycleError::NoTransition {
                from: self.current.name().to_string(),
            })
            .boxed();
        };

        let from_state = self.current.clone();
        (transition.action)()
            .map(move |to| (from_state.clone(), to))
            .boxed()
    }

    /// Record `from -> to` and make `to` current.
    pub fn apply(&mut self, from: S, to: S) {
        tracing::trace!(from = from.name(), to = to.name(), "cycle step applied");
        self.history = self.history.record_step(from, to.clone());
        self.current = to;
    }

    /// Run `step` against `env` and apply the outcome.
    pub async fn advance(&mut self, env: &Env) -> Result<(S, S), CycleError> {
        let (from, to) = self.step().run(env).await?;
        self.apply(from.clone(), to.clone());
        Ok((from, to))
    }
}

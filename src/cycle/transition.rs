//! Transitions whose action is a Stillwater effect.

use crate::core::State;
use crate::cycle::error::CycleError;
use std::sync::Arc;
use stillwater::effect::BoxedEffect;
use stillwater::prelude::*;

/// Factory producing a fresh effect each time the transition fires.
/// The effect yields the state to move to.
pub type TransitionAction<S, Env> = Arc<dyn Fn() -> BoxedEffect<S, CycleError, Env> + Send + Sync>;

/// A move from one state to another.
pub struct Transition<S: State, Env> {
    pub from: S,
    pub to: S,
    pub action: TransitionAction<S, Env>,
}

impl<S: State + 'static, Env: Clone + Send + Sync + 'static> Transition<S, Env> {
    /// Transition whose action always lands on `to`.
    pub fn unconditional(from: S, to: S) -> Self {
        let target = to.clone();
        Self {
            from,
            to,
            action: Arc::new(move || pure(target.clone()).boxed()),
        }
    }
}

impl<S: State, Env> Transition<S, Env> {
    /// True when the machine sits in this transition's source state.
    pub fn can_execute(&self, current: &S) -> bool {
        *current == self.from
    }
}

impl<S: State, Env> Clone for Transition<S, Env> {
    fn clone(&self) -> Self {
        Self {
            from: self.from.clone(),
            to: self.to.clone(),
            action: Arc::clone(&self.action),
        }
    }
}

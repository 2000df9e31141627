//! Effectful driver around the pure rotation.
//!
//! The machine never performs a move on its own: `step` returns a Stillwater
//! effect describing the move and `apply` commits it. Collections store
//! `BoxedEffect` factories, one allocation per transition.

mod builder;
mod error;
mod machine;
mod transition;

pub use builder::CycleBuilder;
pub use error::{BuildError, CycleError};
pub use machine::CycleMachine;
pub use transition::{Transition, TransitionAction};

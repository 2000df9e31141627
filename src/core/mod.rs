//! Pure building blocks: the `State` trait and immutable transition history.
//!
//! Nothing in this module performs I/O or reads the clock except
//! `StateHistory::record_step`, which stamps the transition it appends.

mod history;
mod state;

pub use history::{StateHistory, StateTransition};
pub use state::State;

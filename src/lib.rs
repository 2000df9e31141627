//! Huecycle: a reactive view-state demo
//!
//! One screen holds two independent pieces of state: whether a hint is
//! visible, and which color a tappable shape is filled with. Tapping the
//! shape rotates its color Green → Red → Blue → Green and requests an
//! animated blend from the old fill to the new one.
//!
//! The rotation itself is a pure function, [`next_color`]. Around it:
//!
//! - **core**: the `State` trait and immutable transition history
//! - **cycle**: a validated rotation whose steps are Stillwater effects
//! - **view**: the view-state container and its change observers
//! - **animation**: the default cosmetic color transition
//! - **tui**: a terminal front end
//!
//! # Example
//!
//! ```rust
//! use huecycle::{next_color, DisplayColor};
//!
//! let mut color = DisplayColor::default();
//! for _ in 0..3 {
//!     color = next_color(color);
//! }
//! assert_eq!(color, DisplayColor::Green);
//! ```

pub mod animation;
pub mod color;
pub mod config;
pub mod core;
pub mod cycle;
pub mod logging;
pub mod tui;
pub mod view;

pub use color::{next_color, next_color_by_name, DisplayColor};
pub use crate::core::{State, StateHistory, StateTransition};
pub use view::{ColorChange, ContentView, ViewEvent, ViewObserver};

//! Presentation state and its change notifications.
//!
//! `ContentView` replaces a declarative re-render with an explicit one:
//! each mutation ends by calling every subscribed `ViewObserver`.

mod content;
mod observer;

pub use content::{ContentView, HIDE_HINT_LABEL, HINT_TEXT, SHOW_HINT_LABEL};
pub use observer::{ColorChange, ViewEvent, ViewObserver};

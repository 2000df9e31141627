//! The `State` trait shared by every value a cycle can rotate through.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for values held by a cycle machine.
///
/// Implementations are plain immutable values: a new value replaces the old
/// one on every transition, nothing is mutated in place.
///
/// # Required Traits
///
/// - `Clone`: states are copied into history records
/// - `PartialEq`: transitions are matched by comparing states
/// - `Debug`: states show up in logs and errors
/// - `Serialize` + `Deserialize`: histories can be dumped for inspection
///
/// # Example
///
/// ```rust
/// use huecycle::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Lamp {
///     Off,
///     On,
/// }
///
/// impl State for Lamp {
///     fn name(&self) -> &str {
///         match self {
///             Self::Off => "Off",
///             Self::On => "On",
///         }
///     }
/// }
///
/// assert_eq!(Lamp::On.name(), "On");
/// assert!(!Lamp::Off.is_final());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Human-readable name used for display and logging.
    fn name(&self) -> &str;

    /// Whether no further transitions are expected from this state.
    ///
    /// Cycles never terminate, so the default is `false`.
    fn is_final(&self) -> bool {
        false
    }
}

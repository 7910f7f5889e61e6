//! Core State trait for state machine states.
//!
//! A state is a plain value: it names one mode of a context and carries no
//! data and no reference back to the context that holds it.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// All methods are pure. Behavior that depends on the state lives in a
/// [`Workflow`](crate::core::Workflow), which matches on the state value.
///
/// # Required Traits
///
/// - `Clone` + `PartialEq`: states are compared and copied into history
/// - `Debug`: states show up in logs and test failures
/// - `Serialize` + `Deserialize`: states are written into snapshots
///
/// # Example
///
/// ```rust
/// use statecraft::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Turnstile {
///     Locked,
///     Unlocked,
/// }
///
/// impl State for Turnstile {
///     fn name(&self) -> &str {
///         match self {
///             Self::Locked => "Locked",
///             Self::Unlocked => "Unlocked",
///         }
///     }
/// }
///
/// assert_eq!(Turnstile::Locked.name(), "Locked");
/// assert!(!Turnstile::Unlocked.is_final());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// A final state has no outgoing transitions; every action taken there
    /// leaves the context where it is.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}

//! The imperative shell around the pure core.
//!
//! A [`Context`] owns the current state and the workflow's data, asks the
//! workflow how to react to each action, prints the reaction through a
//! [`Console`], and records transitions.

mod console;
mod context;

pub use console::{Console, Stdout, Transcript};
pub use context::{Context, DIRECT_TRIGGER};

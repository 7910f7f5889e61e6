//! Statecraft: the State pattern, written as plain Rust.
//!
//! A context object holds its current state and forwards every action to
//! it; the state decides what happens and which state comes next. Here a
//! state is an enum variant and "forwarding" is a `match` in a
//! [`Workflow`](crate::core::Workflow), so states never need a pointer back to the
//! context that owns them.
//!
//! # Core Concepts
//!
//! - **State**: enum variants implementing the `State` trait
//! - **Workflow**: the `(state, action) -> Reaction` table
//! - **Context**: owns the current state, prints reactions, applies transitions
//! - **History**: immutable record of transitions
//!
//! Two machines are included: a [`traffic_light`] and a [`document`] review
//! workflow.
//!
//! # Example
//!
//! ```rust
//! use statecraft::document::{Document, DocumentState};
//! use statecraft::effects::Transcript;
//!
//! let mut doc = Document::with_console("AAA", Transcript::new());
//! doc.review_passed(); // rejected: not submitted yet
//! doc.publish();
//! doc.review_passed();
//!
//! assert_eq!(doc.state(), DocumentState::Published);
//! assert_eq!(doc.history().get_path().len(), 3);
//! ```

pub mod core;
pub mod document;
pub mod effects;
pub mod logging;
mod macros;
pub mod snapshot;
pub mod traffic_light;

// Re-export commonly used types
pub use crate::core::{Action, Reaction, State, StateHistory, StateTransition, Workflow};
pub use document::{Document, DocumentState};
pub use effects::{Console, Context, Stdout, Transcript};
pub use snapshot::{Snapshot, SnapshotError};
pub use traffic_light::{Light, TrafficLight};

//! Instinct: a tick-driven finite state machine engine for per-object
//! behavioral logic.
//!
//! A behavior graph of named [`State`]s is authored once with a
//! [`GraphBuilder`], wired from opaque [`Action`]s (side effects) and
//! [`Decision`]s (boolean guards), then shared read-only between any number
//! of [`Controller`]s — one per object it drives. The surrounding loop
//! ticks each controller once per simulation step; transitions fire when a
//! state's ordered transition list finds its first applicable target.
//!
//! # Core Concepts
//!
//! - **State**: a named node owning entry/update/exit actions and ordered
//!   entry/update transitions
//! - **Transition**: a forced edge, or a decision with separate true/false
//!   branch targets (either branch may be absent)
//! - **Controller**: the per-instance driver holding the current/previous
//!   pair, opaque context data, and a last-value-cached change channel
//! - **Sentinel**: the reserved `"PreviousState"` node, substituted with
//!   the controller's previous state when targeted
//!
//! # Example
//!
//! ```rust
//! use instinct::{Controller, ControllerData, GraphBuilder, Transition};
//! use std::sync::Arc;
//!
//! struct Senses {
//!     target_visible: bool,
//! }
//!
//! fn has_target(controller: &mut Controller) -> bool {
//!     controller.data::<Senses>().target_visible
//! }
//!
//! let mut builder = GraphBuilder::new();
//! let idle = builder.add_state("Idle")?;
//! let walk = builder.add_state("Walk")?;
//! builder.configure(idle, |state| {
//!     state.update_transition(Transition::conditional(has_target, Some(walk), None))
//! })?;
//! builder.configure(walk, |state| {
//!     state.update_transition(Transition::conditional(has_target, None, Some(idle)))
//! })?;
//! let graph = Arc::new(builder.build()?);
//!
//! let mut npc = Controller::new(
//!     Arc::clone(&graph),
//!     ControllerData::new(Senses { target_visible: false }),
//! );
//! npc.set_state(Some(idle));
//!
//! npc.update();
//! assert_eq!(npc.current_state(), Some(idle));
//!
//! npc.data_mut::<Senses>().target_visible = true;
//! npc.update();
//! assert_eq!(npc.current_state(), Some(walk));
//! # Ok::<(), instinct::BuildError>(())
//! ```
//!
//! # Concurrency
//!
//! One controller, one logical thread: `update()` performs no internal
//! locking. A built graph is immutable, so many controllers — each with
//! its own context — may run against it from separate threads without
//! synchronization.
//!
//! # Failure semantics
//!
//! The engine catches nothing: a panic inside an action or decision
//! propagates to the caller of `update`/`transition_to`, and the
//! assignment algorithm is not transactional — exit hooks, field updates,
//! and entry hooks happen in sequence, and a failure partway through
//! leaves the controller exactly where it stopped.

pub mod builder;
pub mod controller;
pub mod core;
pub mod validate;

// Re-export commonly used types
pub use crate::builder::{BuildError, GraphBuilder, StateBuilder, TransitionBuilder};
pub use crate::controller::{
    ChangeChannel, ContextError, Controller, ControllerData, Subscription,
};
pub use crate::core::{
    Action, Decision, State, StateGraph, StateId, TraceRecord, Transition, TransitionTrace,
    PREVIOUS_STATE_NAME,
};
pub use crate::validate::{Violation, Violations};

//! Core engine types: the behavior graph and the units it is built from.
//!
//! Everything here is authoring-time data that becomes immutable once a
//! graph is built. The driving side — the per-instance controller, its
//! context data, and the change channel — lives in
//! [`controller`](crate::controller).

mod action;
mod decision;
mod graph;
mod state;
mod trace;
mod transition;

pub use action::Action;
pub use decision::Decision;
pub use graph::{StateGraph, StateId, PREVIOUS_STATE_NAME};
pub use state::State;
pub use trace::{TraceRecord, TransitionTrace};
pub use transition::Transition;

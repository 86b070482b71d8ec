//! Build errors for graph, state, and transition builders.

use crate::core::StateId;
use crate::validate::Violations;
use thiserror::Error;

/// Errors that can occur while authoring a graph.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("state name must not be empty")]
    EmptyName,

    #[error("state name '{name}' is reserved for the previous-state sentinel")]
    ReservedName { name: String },

    #[error("a state named '{name}' already exists in this graph")]
    DuplicateName { name: String },

    #[error("no state {id} in this graph builder")]
    UnknownState { id: StateId },

    #[error("forced transition has no target. Call .forced_to(state)")]
    MissingForcedTarget,

    #[error("conditional transition has no decision. Call .decision(..) or .when(..)")]
    MissingDecision,

    #[error("transition mixes forced and conditional fields; pick one mode")]
    AmbiguousTransition,

    #[error("graph validation failed: {0}")]
    InvalidGraph(Violations),
}

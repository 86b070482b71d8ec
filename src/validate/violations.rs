//! Violations reported by graph validation.

use crate::core::StateId;
use thiserror::Error;

/// Which transition list a violation was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Entry,
    Update,
}

impl std::fmt::Display for Trigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Entry => f.write_str("entry"),
            Self::Update => f.write_str("update"),
        }
    }
}

/// A single problem found in a graph.
///
/// Every variant names the offending state (and transition index where one
/// applies) so authoring tools can point at the exact edit that broke the
/// graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("state {id} takes the name reserved for the previous-state sentinel")]
    ReservedName { id: StateId },

    #[error("state name '{name}' is used by more than one state")]
    DuplicateName { name: String },

    #[error(
        "the previous-state sentinel must stay inert but carries \
         {actions} action(s) and {transitions} transition(s)"
    )]
    SentinelBehavior { actions: usize, transitions: usize },

    #[error("state '{state}' {trigger} transition {index} targets missing state {target}")]
    TargetOutOfBounds {
        state: String,
        trigger: Trigger,
        index: usize,
        target: StateId,
    },
}

/// Everything wrong with a graph, accumulated in one pass.
///
/// Validation deliberately does not stop at the first problem: fixing
/// authoring errors one build at a time is miserable, so all violations
/// are collected and reported together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violations(pub Vec<Violation>);

impl Violations {
    /// The individual violations, in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.0.iter()
    }

    /// Number of violations found.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: an empty set is reported as `Ok`, never as this type.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for Violations {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for violation in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{violation}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for Violations {}

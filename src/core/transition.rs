//! Transition edges between states.
//!
//! A transition is either *forced* (unconditional target) or *conditional*
//! (a decision with separate targets for the true and false branches,
//! either of which may be absent). An absent branch target means "no
//! transition on this branch" — the owning state keeps scanning its list.

use crate::controller::Controller;
use crate::core::decision::Decision;
use crate::core::graph::StateId;
use std::sync::Arc;

/// An edge out of a state.
///
/// Exactly one of the two modes is active per instance; the enum makes the
/// malformed combinations from raw authoring data unrepresentable here.
/// [`TransitionBuilder`](crate::builder::TransitionBuilder) accepts the raw
/// field set and reports a [`BuildError`](crate::builder::BuildError) for
/// anything that does not collapse into one of these variants.
pub enum Transition {
    /// Always taken when reached during a scan.
    Forced {
        /// The state to enter.
        target: StateId,
    },
    /// Guarded by a decision; each branch may or may not carry a target.
    Conditional {
        /// Predicate picking the branch.
        decision: Arc<dyn Decision>,
        /// Target when the decision returns `true`, if any.
        when_true: Option<StateId>,
        /// Target when the decision returns `false`, if any.
        when_false: Option<StateId>,
    },
}

impl Transition {
    /// Build a forced transition to `target`.
    pub fn forced(target: StateId) -> Self {
        Self::Forced { target }
    }

    /// Build a conditional transition from a decision and branch targets.
    pub fn conditional(
        decision: impl Decision + 'static,
        when_true: Option<StateId>,
        when_false: Option<StateId>,
    ) -> Self {
        Self::Conditional {
            decision: Arc::new(decision),
            when_true,
            when_false,
        }
    }

    /// Whether this is the forced variant.
    pub fn is_forced(&self) -> bool {
        matches!(self, Self::Forced { .. })
    }

    /// Targets this transition can ever produce, in branch order.
    pub fn targets(&self) -> Vec<StateId> {
        match self {
            Self::Forced { target } => vec![*target],
            Self::Conditional {
                when_true,
                when_false,
                ..
            } => when_true.iter().chain(when_false.iter()).copied().collect(),
        }
    }

    /// Resolve the target that applies on this tick, if any.
    ///
    /// Forced transitions always yield their target. Conditional transitions
    /// run the decision and yield the chosen branch's target; `None` means
    /// the transition is transparent this tick and the scan moves on.
    pub(crate) fn evaluate(&self, controller: &mut Controller) -> Option<StateId> {
        match self {
            Self::Forced { target } => Some(*target),
            Self::Conditional {
                decision,
                when_true,
                when_false,
            } => {
                if decision.decide(controller) {
                    *when_true
                } else {
                    *when_false
                }
            }
        }
    }
}

impl Clone for Transition {
    fn clone(&self) -> Self {
        match self {
            Self::Forced { target } => Self::Forced { target: *target },
            Self::Conditional {
                decision,
                when_true,
                when_false,
            } => Self::Conditional {
                decision: Arc::clone(decision),
                when_true: *when_true,
                when_false: *when_false,
            },
        }
    }
}

impl std::fmt::Debug for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Forced { target } => f.debug_struct("Forced").field("target", target).finish(),
            Self::Conditional {
                when_true,
                when_false,
                ..
            } => f
                .debug_struct("Conditional")
                .field("when_true", when_true)
                .field("when_false", when_false)
                .finish_non_exhaustive(),
        }
    }
}

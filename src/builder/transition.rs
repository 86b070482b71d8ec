//! Builder for transition edges.

use crate::builder::error::BuildError;
use crate::controller::Controller;
use crate::core::{Decision, StateId, Transition};
use std::sync::Arc;

/// Builds a [`Transition`] from the raw forced/conditional field set.
///
/// Authoring data (editors, config loaders) describes a transition as a
/// `forced` flag plus a handful of optional fields; this builder accepts
/// that shape and rejects every combination that does not collapse into
/// exactly one of the two transition modes. Code that knows its mode up
/// front can skip the builder and call [`Transition::forced`] or
/// [`Transition::conditional`] directly.
///
/// ```rust
/// use instinct::{Controller, GraphBuilder, TransitionBuilder};
///
/// let mut builder = GraphBuilder::new();
/// let idle = builder.add_state("Idle")?;
/// let walk = builder.add_state("Walk")?;
///
/// let transition = TransitionBuilder::new()
///     .when(|c: &mut Controller| *c.data::<bool>())
///     .when_true(walk)
///     .build()?;
/// builder.configure(idle, |state| state.update_transition(transition))?;
/// # Ok::<(), instinct::BuildError>(())
/// ```
pub struct TransitionBuilder {
    is_forced: bool,
    forced_target: Option<StateId>,
    decision: Option<Arc<dyn Decision>>,
    when_true: Option<StateId>,
    when_false: Option<StateId>,
}

impl TransitionBuilder {
    /// Start an empty builder.
    pub fn new() -> Self {
        Self {
            is_forced: false,
            forced_target: None,
            decision: None,
            when_true: None,
            when_false: None,
        }
    }

    /// Mark the transition as forced without naming a target yet.
    ///
    /// Mostly useful when mirroring external authoring data field by
    /// field; [`build`](Self::build) still requires a target.
    pub fn forced(mut self) -> Self {
        self.is_forced = true;
        self
    }

    /// Mark the transition as forced into `target`.
    pub fn forced_to(mut self, target: StateId) -> Self {
        self.is_forced = true;
        self.forced_target = Some(target);
        self
    }

    /// Guard the transition with a decision.
    pub fn decision(mut self, decision: impl Decision + 'static) -> Self {
        self.decision = Some(Arc::new(decision));
        self
    }

    /// Guard the transition with a closure.
    pub fn when<F>(self, predicate: F) -> Self
    where
        F: Fn(&mut Controller) -> bool + Send + Sync + 'static,
    {
        self.decision(predicate)
    }

    /// Target for the decision's true branch.
    pub fn when_true(mut self, target: StateId) -> Self {
        self.when_true = Some(target);
        self
    }

    /// Target for the decision's false branch.
    pub fn when_false(mut self, target: StateId) -> Self {
        self.when_false = Some(target);
        self
    }

    /// Build the transition, rejecting malformed field combinations.
    pub fn build(self) -> Result<Transition, BuildError> {
        if self.is_forced {
            if self.decision.is_some() || self.when_true.is_some() || self.when_false.is_some() {
                return Err(BuildError::AmbiguousTransition);
            }
            let target = self.forced_target.ok_or(BuildError::MissingForcedTarget)?;
            return Ok(Transition::Forced { target });
        }

        if self.forced_target.is_some() {
            return Err(BuildError::AmbiguousTransition);
        }
        let decision = self.decision.ok_or(BuildError::MissingDecision)?;
        Ok(Transition::Conditional {
            decision,
            when_true: self.when_true,
            when_false: self.when_false,
        })
    }
}

impl Default for TransitionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forced_to_builds_forced_transition() {
        let transition = TransitionBuilder::new().forced_to(StateId(2)).build().unwrap();

        assert!(transition.is_forced());
        assert_eq!(transition.targets(), vec![StateId(2)]);
    }

    #[test]
    fn forced_without_target_is_rejected() {
        let result = TransitionBuilder::new().forced().build();

        assert!(matches!(result, Err(BuildError::MissingForcedTarget)));
    }

    #[test]
    fn conditional_without_decision_is_rejected() {
        let result = TransitionBuilder::new().when_true(StateId(0)).build();

        assert!(matches!(result, Err(BuildError::MissingDecision)));
    }

    #[test]
    fn empty_builder_is_rejected() {
        let result = TransitionBuilder::new().build();

        assert!(matches!(result, Err(BuildError::MissingDecision)));
    }

    #[test]
    fn mixed_modes_are_rejected() {
        let result = TransitionBuilder::new()
            .forced_to(StateId(0))
            .when(|_: &mut Controller| true)
            .build();
        assert!(matches!(result, Err(BuildError::AmbiguousTransition)));

        let result = TransitionBuilder::new()
            .forced()
            .when_false(StateId(1))
            .build();
        assert!(matches!(result, Err(BuildError::AmbiguousTransition)));
    }

    #[test]
    fn branch_targets_may_be_absent() {
        let transition = TransitionBuilder::new()
            .when(|_: &mut Controller| true)
            .build()
            .unwrap();

        assert!(!transition.is_forced());
        assert!(transition.targets().is_empty());
    }

    #[test]
    fn both_branches_are_kept() {
        let transition = TransitionBuilder::new()
            .when(|_: &mut Controller| true)
            .when_true(StateId(1))
            .when_false(StateId(2))
            .build()
            .unwrap();

        assert_eq!(transition.targets(), vec![StateId(1), StateId(2)]);
    }
}

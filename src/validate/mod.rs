//! Whole-graph validation.
//!
//! [`GraphBuilder::build`](crate::builder::GraphBuilder::build) runs these
//! checks automatically, so graphs built through the public API are always
//! valid; the module stays public for authoring tools that want to re-check
//! a graph after their own assembly steps and report every problem at once.
//!
//! Validation accumulates ALL violations instead of failing fast —
//! comprehensive feedback in a single pass beats fixing errors one build at
//! a time.
//!
//! Reachability and transition-cycle analysis are deliberately out of
//! scope: graph correctness of that kind belongs to whoever authors the
//! graph.

mod rules;
mod violations;

pub use violations::{Trigger, Violation, Violations};

use crate::core::StateGraph;

/// Check a graph against every rule, accumulating all violations.
///
/// ```rust
/// use instinct::{validate, GraphBuilder};
///
/// let mut builder = GraphBuilder::new();
/// builder.add_state("Idle")?;
/// let graph = builder.build()?;
///
/// assert!(validate::check_graph(&graph).is_ok());
/// # Ok::<(), instinct::BuildError>(())
/// ```
pub fn check_graph(graph: &StateGraph) -> Result<(), Violations> {
    let mut found = Vec::new();
    found.extend(rules::unique_names(graph));
    found.extend(rules::sentinel_integrity(graph));
    found.extend(rules::targets_in_bounds(graph));

    if found.is_empty() {
        Ok(())
    } else {
        Err(Violations(found))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{State, StateId, Transition, PREVIOUS_STATE_NAME};

    fn bare_state(name: &str) -> State {
        State::new(
            name.to_owned(),
            false,
            Vec::new(),
            Vec::new(),
            Vec::new(),
            Vec::new(),
            Vec::new(),
        )
    }

    fn state_with_update_transitions(name: &str, transitions: Vec<Transition>) -> State {
        State::new(
            name.to_owned(),
            false,
            Vec::new(),
            Vec::new(),
            Vec::new(),
            Vec::new(),
            transitions,
        )
    }

    #[test]
    fn valid_graph_passes() {
        let graph = StateGraph::new(
            vec![
                state_with_update_transitions("A", vec![Transition::forced(StateId(1))]),
                bare_state("B"),
            ],
            None,
        );

        assert!(check_graph(&graph).is_ok());
    }

    #[test]
    fn duplicate_names_are_reported_once() {
        let graph = StateGraph::new(
            vec![bare_state("Idle"), bare_state("Idle"), bare_state("Idle")],
            None,
        );

        let violations = check_graph(&graph).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert!(matches!(
            violations.0[0],
            Violation::DuplicateName { .. }
        ));
    }

    #[test]
    fn unregistered_sentinel_name_is_reported() {
        // A state grabbed the reserved name without being the graph's
        // registered sentinel.
        let graph = StateGraph::new(vec![bare_state(PREVIOUS_STATE_NAME)], None);

        let violations = check_graph(&graph).unwrap_err();
        assert!(violations
            .iter()
            .any(|v| matches!(v, Violation::ReservedName { id: StateId(0) })));
    }

    #[test]
    fn sentinel_with_behavior_is_reported() {
        let sentinel = state_with_update_transitions(
            PREVIOUS_STATE_NAME,
            vec![Transition::forced(StateId(0))],
        );
        let graph = StateGraph::new(vec![sentinel], Some(StateId(0)));

        let violations = check_graph(&graph).unwrap_err();
        assert!(violations
            .iter()
            .any(|v| matches!(v, Violation::SentinelBehavior { transitions: 1, .. })));
    }

    #[test]
    fn out_of_bounds_target_names_state_and_index() {
        let graph = StateGraph::new(
            vec![state_with_update_transitions(
                "Walk",
                vec![
                    Transition::forced(StateId(0)),
                    Transition::forced(StateId(7)),
                ],
            )],
            None,
        );

        let violations = check_graph(&graph).unwrap_err();
        assert_eq!(violations.len(), 1);
        match &violations.0[0] {
            Violation::TargetOutOfBounds {
                state,
                trigger,
                index,
                target,
            } => {
                assert_eq!(state, "Walk");
                assert_eq!(*trigger, Trigger::Update);
                assert_eq!(*index, 1);
                assert_eq!(*target, StateId(7));
            }
            other => panic!("unexpected violation: {other:?}"),
        }
    }

    #[test]
    fn all_violations_accumulate_in_one_pass() {
        let graph = StateGraph::new(
            vec![
                bare_state("Dup"),
                bare_state("Dup"),
                state_with_update_transitions("C", vec![Transition::forced(StateId(42))]),
            ],
            None,
        );

        let violations = check_graph(&graph).unwrap_err();
        assert_eq!(violations.len(), 2);
    }
}

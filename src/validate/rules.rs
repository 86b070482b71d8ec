//! Individual validation rules. Each returns every violation it finds.

use crate::core::{StateGraph, StateId};
use crate::validate::violations::{Trigger, Violation};
use std::collections::HashSet;

/// State names must be unique within a graph.
pub(crate) fn unique_names(graph: &StateGraph) -> Vec<Violation> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut violations = Vec::new();
    for state in graph.states() {
        if !seen.insert(state.name()) && reported.insert(state.name()) {
            violations.push(Violation::DuplicateName {
                name: state.name().to_owned(),
            });
        }
    }
    violations
}

/// The reserved name may only belong to the registered sentinel, and the
/// sentinel itself must carry no behavior: it is a substitution marker,
/// never actually entered.
pub(crate) fn sentinel_integrity(graph: &StateGraph) -> Vec<Violation> {
    let mut violations = Vec::new();
    for (index, state) in graph.states().iter().enumerate() {
        if !state.is_previous_sentinel() {
            continue;
        }
        let id = StateId(index);
        if graph.previous_state() != Some(id) {
            violations.push(Violation::ReservedName { id });
            continue;
        }
        let actions = state.entry_actions().len()
            + state.update_actions().len()
            + state.exit_actions().len();
        let transitions = state.entry_transitions().len() + state.update_transitions().len();
        if actions + transitions > 0 {
            violations.push(Violation::SentinelBehavior {
                actions,
                transitions,
            });
        }
    }
    violations
}

/// Every transition target must point into this graph.
pub(crate) fn targets_in_bounds(graph: &StateGraph) -> Vec<Violation> {
    let mut violations = Vec::new();
    for state in graph.states() {
        let lists = [
            (Trigger::Entry, state.entry_transitions()),
            (Trigger::Update, state.update_transitions()),
        ];
        for (trigger, transitions) in lists {
            for (index, transition) in transitions.iter().enumerate() {
                for target in transition.targets() {
                    if graph.get(target).is_none() {
                        violations.push(Violation::TargetOutOfBounds {
                            state: state.name().to_owned(),
                            trigger,
                            index,
                            target,
                        });
                    }
                }
            }
        }
    }
    violations
}

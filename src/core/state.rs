//! State nodes: named bundles of actions and outgoing transitions.

use crate::controller::Controller;
use crate::core::action::Action;
use crate::core::transition::Transition;
use std::sync::Arc;

/// A named node in a behavior graph.
///
/// A state owns three ordered action lists (entry, update, exit) and two
/// ordered transition lists (entry, update). Order is execution order.
/// States are authored once via a [`GraphBuilder`](crate::builder::GraphBuilder)
/// and are immutable at runtime; the same graph — and therefore the same
/// state objects — may drive any number of controllers at once, so every
/// piece of per-instance mutable data lives in the controller's context,
/// never here.
///
/// Empty lists are fine: a state with no update transitions is terminal
/// under the tick trigger and only leaves when something calls
/// [`Controller::transition_to`](crate::controller::Controller::transition_to).
pub struct State {
    name: String,
    allow_self_transition: bool,
    entry_actions: Vec<Arc<dyn Action>>,
    update_actions: Vec<Arc<dyn Action>>,
    exit_actions: Vec<Arc<dyn Action>>,
    entry_transitions: Vec<Transition>,
    update_transitions: Vec<Transition>,
}

impl State {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        name: String,
        allow_self_transition: bool,
        entry_actions: Vec<Arc<dyn Action>>,
        update_actions: Vec<Arc<dyn Action>>,
        exit_actions: Vec<Arc<dyn Action>>,
        entry_transitions: Vec<Transition>,
        update_transitions: Vec<Transition>,
    ) -> Self {
        Self {
            name,
            allow_self_transition,
            entry_actions,
            update_actions,
            exit_actions,
            entry_transitions,
            update_transitions,
        }
    }

    /// The state's name, used for lookup and logging.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether consecutive transitions into this state re-run its
    /// entry/exit hooks. See the assignment algorithm on
    /// [`Controller`](crate::controller::Controller) for the exact gate.
    pub fn allow_self_transition(&self) -> bool {
        self.allow_self_transition
    }

    /// Actions run when the state is entered, in order.
    pub fn entry_actions(&self) -> &[Arc<dyn Action>] {
        &self.entry_actions
    }

    /// Actions run every tick while the state is active, in order.
    pub fn update_actions(&self) -> &[Arc<dyn Action>] {
        &self.update_actions
    }

    /// Actions run when the state is exited, in order.
    pub fn exit_actions(&self) -> &[Arc<dyn Action>] {
        &self.exit_actions
    }

    /// Transitions evaluated immediately after the entry actions.
    pub fn entry_transitions(&self) -> &[Transition] {
        &self.entry_transitions
    }

    /// Transitions evaluated every tick after the update actions.
    pub fn update_transitions(&self) -> &[Transition] {
        &self.update_transitions
    }

    /// Whether this node is the reserved previous-state sentinel.
    pub fn is_previous_sentinel(&self) -> bool {
        self.name == crate::core::graph::PREVIOUS_STATE_NAME
    }

    /// Entry hook: log, run entry actions, then scan entry transitions.
    ///
    /// Entry transitions firing here make the state a zero-duration
    /// pass-through: it is entered and left within the same assignment.
    pub(crate) fn on_entered(&self, controller: &mut Controller, entered_via_previous: bool) {
        if controller.logs_transitions() {
            tracing::debug!(
                state = %self.name,
                via_previous = entered_via_previous,
                "entered state"
            );
        }
        for action in &self.entry_actions {
            action.execute(controller);
        }
        self.scan_transitions(&self.entry_transitions, controller);
    }

    /// Exit hook: log, then run exit actions.
    pub(crate) fn on_exited(&self, controller: &mut Controller) {
        if controller.logs_transitions() {
            tracing::debug!(state = %self.name, "exited state");
        }
        for action in &self.exit_actions {
            action.execute(controller);
        }
    }

    /// Tick routine: run update actions, then scan update transitions.
    pub(crate) fn update(&self, controller: &mut Controller) {
        for action in &self.update_actions {
            action.execute(controller);
        }
        self.scan_transitions(&self.update_transitions, controller);
    }

    /// First transition (in list order) whose applicable branch has a
    /// target wins; transparent transitions are skipped. The scan stops as
    /// soon as a transition fires.
    fn scan_transitions(&self, transitions: &[Transition], controller: &mut Controller) {
        for transition in transitions {
            if let Some(target) = transition.evaluate(controller) {
                controller.transition_to(Some(target));
                return;
            }
        }
    }
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("name", &self.name)
            .field("allow_self_transition", &self.allow_self_transition)
            .field("entry_actions", &self.entry_actions.len())
            .field("update_actions", &self.update_actions.len())
            .field("exit_actions", &self.exit_actions.len())
            .field("entry_transitions", &self.entry_transitions)
            .field("update_transitions", &self.update_transitions)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::GraphBuilder;
    use crate::controller::ControllerData;
    use crate::core::transition::Transition;

    #[derive(Default)]
    struct Counts {
        entries: usize,
        updates: usize,
        exits: usize,
    }

    #[test]
    fn actions_run_in_list_order() {
        let mut builder = GraphBuilder::new();
        let node = builder.add_state("Ordered").unwrap();
        builder
            .configure(node, |state| {
                state
                    .update_action(|c: &mut Controller| c.data_mut::<Vec<u8>>().push(1))
                    .update_action(|c: &mut Controller| c.data_mut::<Vec<u8>>().push(2))
                    .update_action(|c: &mut Controller| c.data_mut::<Vec<u8>>().push(3))
            })
            .unwrap();
        let graph = Arc::new(builder.build().unwrap());

        let mut controller = Controller::new(graph, ControllerData::new(Vec::<u8>::new()));
        controller.set_state(Some(node));
        controller.update();

        assert_eq!(controller.data::<Vec<u8>>(), &vec![1, 2, 3]);
    }

    #[test]
    fn update_runs_actions_before_transitions() {
        let mut builder = GraphBuilder::new();
        let start = builder.add_state("Start").unwrap();
        let end = builder.add_state("End").unwrap();
        builder
            .configure(start, |state| {
                state
                    .update_action(|c: &mut Controller| c.data_mut::<Counts>().updates += 1)
                    .update_transition(Transition::forced(end))
            })
            .unwrap();
        let graph = Arc::new(builder.build().unwrap());

        let mut controller = Controller::new(graph, ControllerData::new(Counts::default()));
        controller.set_state(Some(start));
        controller.update();

        // The update action ran even though the forced transition left Start.
        assert_eq!(controller.data::<Counts>().updates, 1);
        assert_eq!(controller.current_state(), Some(end));
    }

    #[test]
    fn entry_transitions_make_pass_through_states() {
        let mut builder = GraphBuilder::new();
        let spawn = builder.add_state("Spawn").unwrap();
        let idle = builder.add_state("Idle").unwrap();
        builder
            .configure(spawn, |state| {
                state
                    .entry_action(|c: &mut Controller| c.data_mut::<Counts>().entries += 1)
                    .entry_transition(Transition::forced(idle))
            })
            .unwrap();
        let graph = Arc::new(builder.build().unwrap());

        let mut controller = Controller::new(graph, ControllerData::new(Counts::default()));
        controller.set_state(Some(spawn));

        // Spawn's entry actions ran, then its entry transition fired within
        // the same assignment.
        assert_eq!(controller.data::<Counts>().entries, 1);
        assert_eq!(controller.current_state(), Some(idle));
    }

    #[test]
    fn exit_actions_run_on_leaving() {
        let mut builder = GraphBuilder::new();
        let a = builder.add_state("A").unwrap();
        let b = builder.add_state("B").unwrap();
        builder
            .configure(a, |state| {
                state.exit_action(|c: &mut Controller| c.data_mut::<Counts>().exits += 1)
            })
            .unwrap();
        let graph = Arc::new(builder.build().unwrap());

        let mut controller = Controller::new(graph, ControllerData::new(Counts::default()));
        controller.set_state(Some(a));
        assert_eq!(controller.data::<Counts>().exits, 0);

        controller.transition_to(Some(b));
        assert_eq!(controller.data::<Counts>().exits, 1);
    }

    #[test]
    fn state_with_no_transitions_is_terminal_under_ticks() {
        let mut builder = GraphBuilder::new();
        let stuck = builder.add_state("Stuck").unwrap();
        let graph = Arc::new(builder.build().unwrap());

        let mut controller = Controller::new(graph, ControllerData::new(()));
        controller.set_state(Some(stuck));
        for _ in 0..5 {
            controller.update();
        }

        assert_eq!(controller.current_state(), Some(stuck));
    }
}

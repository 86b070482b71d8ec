//! Builder for individual state nodes.

use crate::core::{Action, State, Transition};
use std::sync::Arc;

/// Accumulates one state's actions, transitions, and flags.
///
/// State builders are only minted by
/// [`GraphBuilder`](crate::builder::GraphBuilder) — names go through its
/// duplicate and reserved-name checks — and reach user code inside
/// [`configure`](crate::builder::GraphBuilder::configure) closures:
///
/// ```rust
/// use instinct::{Controller, GraphBuilder, Transition};
///
/// let mut builder = GraphBuilder::new();
/// let flee = builder.add_state("Flee")?;
/// let idle = builder.add_state("Idle")?;
/// builder.configure(flee, |state| {
///     state
///         .entry_action(|c: &mut Controller| *c.data_mut::<u32>() = 0)
///         .update_transition(Transition::conditional(
///             |c: &mut Controller| *c.data::<u32>() > 10,
///             Some(idle),
///             None,
///         ))
/// })?;
/// # Ok::<(), instinct::BuildError>(())
/// ```
pub struct StateBuilder {
    name: String,
    allow_self_transition: bool,
    entry_actions: Vec<Arc<dyn Action>>,
    update_actions: Vec<Arc<dyn Action>>,
    exit_actions: Vec<Arc<dyn Action>>,
    entry_transitions: Vec<Transition>,
    update_transitions: Vec<Transition>,
}

impl StateBuilder {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            allow_self_transition: false,
            entry_actions: Vec::new(),
            update_actions: Vec::new(),
            exit_actions: Vec::new(),
            entry_transitions: Vec::new(),
            update_transitions: Vec::new(),
        }
    }

    /// The name this builder was declared with.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Let repeated transitions into this state re-run its entry/exit
    /// hooks. Off by default.
    pub fn allow_self_transition(mut self, allow: bool) -> Self {
        self.allow_self_transition = allow;
        self
    }

    /// Append an action to the entry list.
    pub fn entry_action(mut self, action: impl Action + 'static) -> Self {
        self.entry_actions.push(Arc::new(action));
        self
    }

    /// Append an action to the update list.
    pub fn update_action(mut self, action: impl Action + 'static) -> Self {
        self.update_actions.push(Arc::new(action));
        self
    }

    /// Append an action to the exit list.
    pub fn exit_action(mut self, action: impl Action + 'static) -> Self {
        self.exit_actions.push(Arc::new(action));
        self
    }

    /// Append a transition evaluated right after the entry actions.
    pub fn entry_transition(mut self, transition: Transition) -> Self {
        self.entry_transitions.push(transition);
        self
    }

    /// Append a transition evaluated every tick after the update actions.
    pub fn update_transition(mut self, transition: Transition) -> Self {
        self.update_transitions.push(transition);
        self
    }

    pub(crate) fn build(self) -> State {
        State::new(
            self.name,
            self.allow_self_transition,
            self.entry_actions,
            self.update_actions,
            self.exit_actions,
            self.entry_transitions,
            self.update_transitions,
        )
    }
}

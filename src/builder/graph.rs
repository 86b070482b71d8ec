//! Builder for whole state graphs.

use crate::builder::error::BuildError;
use crate::builder::state::StateBuilder;
use crate::core::{StateGraph, StateId, PREVIOUS_STATE_NAME};
use crate::validate;

/// Authoring entry point for a behavior graph.
///
/// Declaring states first and wiring them afterwards keeps cyclic graphs
/// straightforward: every [`StateId`] exists before any transition needs
/// it.
///
/// ```rust
/// use instinct::{Controller, GraphBuilder, Transition};
///
/// let mut builder = GraphBuilder::new();
/// let patrol = builder.add_state("Patrol")?;
/// let chase = builder.add_state("Chase")?;
///
/// builder.configure(patrol, |state| {
///     state.update_transition(Transition::conditional(
///         |c: &mut Controller| *c.data::<bool>(),
///         Some(chase),
///         None,
///     ))
/// })?;
/// builder.configure(chase, |state| {
///     state.update_transition(Transition::conditional(
///         |c: &mut Controller| *c.data::<bool>(),
///         None,
///         Some(patrol),
///     ))
/// })?;
///
/// let graph = builder.build()?;
/// assert_eq!(graph.len(), 2);
/// # Ok::<(), instinct::BuildError>(())
/// ```
pub struct GraphBuilder {
    states: Vec<StateBuilder>,
    sentinel: Option<StateId>,
}

impl GraphBuilder {
    /// Start an empty graph.
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            sentinel: None,
        }
    }

    /// Declare a state and get its id.
    ///
    /// Rejects the reserved sentinel name (use
    /// [`previous_state`](Self::previous_state) for that node), duplicates,
    /// and empty names.
    pub fn add_state(&mut self, name: impl Into<String>) -> Result<StateId, BuildError> {
        let name = name.into();
        if name.is_empty() {
            return Err(BuildError::EmptyName);
        }
        if name == PREVIOUS_STATE_NAME {
            return Err(BuildError::ReservedName { name });
        }
        if self.states.iter().any(|state| state.name() == name) {
            return Err(BuildError::DuplicateName { name });
        }
        self.states.push(StateBuilder::new(name));
        Ok(StateId(self.states.len() - 1))
    }

    /// Id of the previous-state sentinel, creating the node on first use.
    ///
    /// The sentinel is a target, not a real state: a transition into it is
    /// substituted with the controller's previous state at assignment time.
    pub fn previous_state(&mut self) -> StateId {
        if let Some(id) = self.sentinel {
            return id;
        }
        self.states.push(StateBuilder::new(PREVIOUS_STATE_NAME));
        let id = StateId(self.states.len() - 1);
        self.sentinel = Some(id);
        id
    }

    /// Attach actions, transitions, and flags to a declared state.
    ///
    /// The closure receives the state's builder and returns it after
    /// chaining whatever it needs. May be called multiple times for the
    /// same state; lists keep appending.
    pub fn configure<F>(&mut self, id: StateId, f: F) -> Result<(), BuildError>
    where
        F: FnOnce(StateBuilder) -> StateBuilder,
    {
        if id.0 >= self.states.len() {
            return Err(BuildError::UnknownState { id });
        }
        let slot = std::mem::replace(&mut self.states[id.0], StateBuilder::new(String::new()));
        self.states[id.0] = f(slot);
        Ok(())
    }

    /// Number of declared states, sentinel included.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether nothing has been declared yet.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Build the graph, running full validation.
    ///
    /// Wrap the result in an `Arc` to share it between controllers.
    pub fn build(self) -> Result<StateGraph, BuildError> {
        let states = self.states.into_iter().map(StateBuilder::build).collect();
        let graph = StateGraph::new(states, self.sentinel);
        validate::check_graph(&graph).map_err(BuildError::InvalidGraph)?;
        Ok(graph)
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

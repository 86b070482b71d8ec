//! The shared, immutable state graph and its index type.
//!
//! A graph is authored once with a [`GraphBuilder`](crate::builder::GraphBuilder),
//! then wrapped in an `Arc` and handed to any number of controllers. Nothing
//! in a built graph ever mutates, so concurrent controllers on separate
//! threads read it without synchronization.

use crate::core::state::State;

/// Name reserved for the previous-state sentinel node.
///
/// A transition targeting a state with this name is substituted with the
/// controller's previous state at assignment time. Authoring rejects the
/// name for real states.
pub const PREVIOUS_STATE_NAME: &str = "PreviousState";

/// Index of a state within its graph.
///
/// Ids are only meaningful for the graph that issued them. Handing an id
/// from one graph to a controller running another is a programming error
/// and fails fast when the state is looked up.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct StateId(pub(crate) usize);

impl StateId {
    /// Position of the state in its graph's arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for StateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An arena of states wired together by [`StateId`].
///
/// Indexing by id rather than reference-counting each node keeps cyclic
/// behavior graphs (patrol loops, back-and-forth chases) free of `Arc`
/// cycles.
pub struct StateGraph {
    states: Vec<State>,
    sentinel: Option<StateId>,
}

impl StateGraph {
    pub(crate) fn new(states: Vec<State>, sentinel: Option<StateId>) -> Self {
        Self { states, sentinel }
    }

    /// Look up a state, failing fast on a foreign or stale id.
    ///
    /// # Panics
    ///
    /// Panics when `id` was not issued by this graph's builder. Ids cannot
    /// go stale within one graph, so this only fires when graphs get mixed
    /// up.
    pub fn state(&self, id: StateId) -> &State {
        self.get(id).unwrap_or_else(|| {
            panic!(
                "state id {} out of bounds for a graph of {} states",
                id,
                self.states.len()
            )
        })
    }

    /// Look up a state without panicking.
    pub fn get(&self, id: StateId) -> Option<&State> {
        self.states.get(id.0)
    }

    /// All states in arena order.
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// Find a state by name.
    pub fn find(&self, name: &str) -> Option<StateId> {
        self.states
            .iter()
            .position(|state| state.name() == name)
            .map(StateId)
    }

    /// Id of the previous-state sentinel, when the graph has one.
    pub fn previous_state(&self) -> Option<StateId> {
        self.sentinel
    }

    /// Number of states, sentinel included.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether the graph has no states at all.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl std::fmt::Debug for StateGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateGraph")
            .field(
                "states",
                &self
                    .states
                    .iter()
                    .map(|state| state.name())
                    .collect::<Vec<_>>(),
            )
            .field("sentinel", &self.sentinel)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::GraphBuilder;

    #[test]
    fn find_resolves_names_to_ids() {
        let mut builder = GraphBuilder::new();
        let idle = builder.add_state("Idle").unwrap();
        let walk = builder.add_state("Walk").unwrap();
        let graph = builder.build().unwrap();

        assert_eq!(graph.find("Idle"), Some(idle));
        assert_eq!(graph.find("Walk"), Some(walk));
        assert_eq!(graph.find("Run"), None);
    }

    #[test]
    fn sentinel_is_absent_until_requested() {
        let graph = GraphBuilder::new().build().unwrap();
        assert!(graph.previous_state().is_none());

        let mut builder = GraphBuilder::new();
        let sentinel = builder.previous_state();
        let graph = builder.build().unwrap();
        assert_eq!(graph.previous_state(), Some(sentinel));
        assert_eq!(graph.find(PREVIOUS_STATE_NAME), Some(sentinel));
    }

    #[test]
    fn state_lookup_panics_on_foreign_id() {
        let mut big = GraphBuilder::new();
        big.add_state("A").unwrap();
        big.add_state("B").unwrap();
        let big = big.build().unwrap();
        let foreign = StateId(5);

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _ = big.state(foreign);
        }));
        assert!(result.is_err());
    }

    #[test]
    fn ids_index_in_declaration_order() {
        let mut builder = GraphBuilder::new();
        let first = builder.add_state("First").unwrap();
        let second = builder.add_state("Second").unwrap();

        assert_eq!(first.index(), 0);
        assert_eq!(second.index(), 1);

        let graph = builder.build().unwrap();
        assert_eq!(graph.len(), 2);
        assert_eq!(graph.state(first).name(), "First");
        assert_eq!(graph.state(second).name(), "Second");
    }
}

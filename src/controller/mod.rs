//! The per-instance driver that runs a behavior graph.
//!
//! A [`Controller`] owns a current/previous state pair, one opaque context
//! slot, a change channel, and a trace. The surrounding loop ticks it once
//! per simulation step; everything interesting happens in the graph it
//! references, not in the controller itself.

mod channel;
mod data;

pub use channel::{ChangeChannel, Subscription};
pub use data::{ContextError, ControllerData};

use crate::core::{StateGraph, StateId, TraceRecord, TransitionTrace};
use chrono::Utc;
use std::any::Any;
use std::sync::Arc;

/// Drives one instance of a shared behavior graph.
///
/// The controller has only two states of its own: uninitialized (no current
/// state) and active. It becomes active the first time
/// [`set_state`](Self::set_state) assigns a state and goes back to
/// uninitialized when a transition targets `None`.
///
/// ```rust
/// use instinct::{Controller, ControllerData, GraphBuilder, Transition};
/// use std::sync::Arc;
///
/// struct Senses {
///     target_visible: bool,
/// }
///
/// let mut builder = GraphBuilder::new();
/// let idle = builder.add_state("Idle")?;
/// let walk = builder.add_state("Walk")?;
/// builder.configure(idle, |state| {
///     state.update_transition(Transition::conditional(
///         |c: &mut Controller| c.data::<Senses>().target_visible,
///         Some(walk),
///         None,
///     ))
/// })?;
/// let graph = Arc::new(builder.build()?);
///
/// let mut guard = Controller::new(
///     Arc::clone(&graph),
///     ControllerData::new(Senses { target_visible: false }),
/// );
/// guard.set_state(Some(idle));
///
/// guard.update();
/// assert_eq!(guard.current_state(), Some(idle));
///
/// guard.data_mut::<Senses>().target_visible = true;
/// guard.update();
/// assert_eq!(guard.current_state(), Some(walk));
/// # Ok::<(), instinct::BuildError>(())
/// ```
pub struct Controller {
    graph: Arc<StateGraph>,
    current: Option<StateId>,
    previous: Option<StateId>,
    data: ControllerData,
    on_state_changed: ChangeChannel<Option<StateId>>,
    trace: TransitionTrace,
    log_transitions: bool,
    entered_via_previous: bool,
}

impl Controller {
    /// Create an uninitialized controller over `graph` with the given
    /// context. Call [`set_state`](Self::set_state) once before the first
    /// tick.
    pub fn new(graph: Arc<StateGraph>, data: ControllerData) -> Self {
        Self {
            graph,
            current: None,
            previous: None,
            data,
            on_state_changed: ChangeChannel::new(None),
            trace: TransitionTrace::new(),
            log_transitions: false,
            entered_via_previous: false,
        }
    }

    /// The graph this controller runs.
    pub fn graph(&self) -> &Arc<StateGraph> {
        &self.graph
    }

    /// Currently active state, if any.
    pub fn current_state(&self) -> Option<StateId> {
        self.current
    }

    /// State active before the last assignment, if any.
    pub fn previous_state(&self) -> Option<StateId> {
        self.previous
    }

    /// Name of the currently active state, for diagnostics.
    pub fn current_state_name(&self) -> Option<&str> {
        self.current.map(|id| self.graph.state(id).name())
    }

    /// Whether the controller has a current state.
    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    /// Whether the most recent assignment reached its target through the
    /// previous-state sentinel. Readable from entry actions.
    pub fn entered_via_previous_state(&self) -> bool {
        self.entered_via_previous
    }

    /// Initialize (or re-initialize) the current state.
    ///
    /// Runs the same assignment algorithm as [`transition_to`](Self::transition_to);
    /// the separate name marks call sites that set up a controller before
    /// its first tick.
    pub fn set_state(&mut self, target: Option<StateId>) {
        self.assign(target);
    }

    /// Request a change of state.
    ///
    /// `None` deactivates the controller: the current state's exit hook
    /// runs, the change is published, and no entry hook follows.
    pub fn transition_to(&mut self, target: Option<StateId>) {
        self.assign(target);
    }

    /// Tick the controller: no-op while uninitialized, otherwise the
    /// current state runs its update actions and update transitions.
    ///
    /// Panics from actions and decisions propagate to the caller; the
    /// engine neither catches nor retries (see the crate docs on failure
    /// semantics).
    pub fn update(&mut self) {
        let Some(id) = self.current else {
            return;
        };
        let graph = Arc::clone(&self.graph);
        graph.state(id).update(self);
    }

    /// The assignment algorithm shared by `set_state` and `transition_to`.
    ///
    /// `entering_same` deliberately compares the pair as it stood *before*
    /// this assignment: it detects that the previous transition was already
    /// a self-transition into the state that is still active, lagging one
    /// step behind the intuitive "is the target the current state" check.
    /// Existing graphs depend on this exact gate; see `DESIGN.md` before
    /// changing it.
    fn assign(&mut self, target: Option<StateId>) {
        let graph = Arc::clone(&self.graph);

        let entering_same = match (self.previous, self.current) {
            (Some(previous), Some(current)) => previous == current,
            _ => false,
        };

        let mut target = target;
        let mut via_previous = false;
        if let Some(id) = target {
            if graph.state(id).is_previous_sentinel() {
                target = self.previous;
                via_previous = true;
            }
        }

        // One gate for the exit hook, the publish, and the entry hook: a
        // repeated self-transition runs them only when the state opts in.
        let run_hooks = !entering_same
            || self
                .current
                .is_some_and(|id| graph.state(id).allow_self_transition());

        let exiting = self.current;
        if let Some(id) = exiting {
            self.previous = Some(id);
            if run_hooks {
                graph.state(id).on_exited(self);
            }
        }

        self.current = target;
        self.entered_via_previous = via_previous;

        self.trace.record(TraceRecord {
            from: exiting.map(|id| graph.state(id).name().to_owned()),
            to: target.map(|id| graph.state(id).name().to_owned()),
            timestamp: Utc::now(),
            via_previous,
        });

        if run_hooks {
            self.on_state_changed.publish(self.current);
        }

        let Some(entering) = target else {
            return;
        };
        if run_hooks {
            graph.state(entering).on_entered(self, via_previous);
        }
    }

    /// Borrow the context data as `T`, panicking on a type mismatch.
    ///
    /// Actions and decisions have no error channel, so the typed accessors
    /// fail loudly instead of returning a default; use
    /// [`try_data`](Self::try_data) where a `Result` can be handled.
    ///
    /// # Panics
    ///
    /// Panics with both type names when the context does not hold a `T`.
    pub fn data<T: Any>(&self) -> &T {
        match self.data.get::<T>() {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }

    /// Mutably borrow the context data as `T`, panicking on a type
    /// mismatch.
    ///
    /// # Panics
    ///
    /// Panics with both type names when the context does not hold a `T`.
    pub fn data_mut<T: Any>(&mut self) -> &mut T {
        match self.data.get_mut::<T>() {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }

    /// Borrow the context data as `T`.
    pub fn try_data<T: Any>(&self) -> Result<&T, ContextError> {
        self.data.get::<T>()
    }

    /// Mutably borrow the context data as `T`.
    pub fn try_data_mut<T: Any>(&mut self) -> Result<&mut T, ContextError> {
        self.data.get_mut::<T>()
    }

    /// The change channel carrying the current state.
    ///
    /// Subscribers receive every assignment that is not suppressed by the
    /// self-transition gate, plus the cached value at subscribe time.
    pub fn on_state_changed(&self) -> &ChangeChannel<Option<StateId>> {
        &self.on_state_changed
    }

    /// The trace of assignments performed so far.
    pub fn trace(&self) -> &TransitionTrace {
        &self.trace
    }

    /// Drop all trace records.
    pub fn clear_trace(&mut self) {
        self.trace.clear();
    }

    /// Enable or disable the per-transition log lines emitted from the
    /// entry/exit hooks.
    pub fn set_transition_logging(&mut self, enabled: bool) {
        self.log_transitions = enabled;
    }

    /// Whether transition logging is enabled.
    pub fn logs_transitions(&self) -> bool {
        self.log_transitions
    }
}

impl std::fmt::Debug for Controller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Controller")
            .field("current", &self.current_state_name())
            .field("previous", &self.previous.map(|id| self.graph.state(id).name()))
            .field("data", &self.data)
            .field("subscribers", &self.on_state_changed.subscriber_count())
            .finish_non_exhaustive()
    }
}

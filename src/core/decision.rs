//! Decisions: boolean predicates that guard conditional transitions.
//!
//! A decision inspects the controller (usually its context data) and
//! answers a single yes/no question. Decisions are evaluated every tick for
//! the active state's update transitions, so they should be cheap; anything
//! long-running belongs in a state that polls for completion instead.

use crate::controller::Controller;

/// A predicate over controller context, used to pick a transition branch.
///
/// Like [`Action`](crate::core::Action), decisions are `Send + Sync` so the
/// graph owning them can be shared between controllers on different
/// threads. The engine does not require purity: a decision may mutate the
/// controller's context data (e.g. caching a scan result), though most are
/// simple reads.
///
/// ```rust
/// use instinct::{Controller, Decision};
///
/// struct Senses {
///     target_visible: bool,
/// }
///
/// struct HasTarget;
///
/// impl Decision for HasTarget {
///     fn decide(&self, controller: &mut Controller) -> bool {
///         controller.data::<Senses>().target_visible
///     }
/// }
/// ```
pub trait Decision: Send + Sync {
    /// Evaluate the predicate against the given controller.
    fn decide(&self, controller: &mut Controller) -> bool;
}

impl<F> Decision for F
where
    F: Fn(&mut Controller) -> bool + Send + Sync,
{
    fn decide(&self, controller: &mut Controller) -> bool {
        self(controller)
    }
}

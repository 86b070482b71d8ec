//! Actions: side-effecting units run on state entry, update, and exit.
//!
//! Actions are opaque to the engine. They receive the controller that is
//! executing them, which gives them access to the controller's context data
//! and lets them request transitions. The engine never catches errors from
//! an action; a panic propagates to whoever called `update` or
//! `transition_to`.

use crate::controller::Controller;

/// A callable unit of behavior attached to a state.
///
/// Implementors must be `Send + Sync` because the state graph that owns
/// them is shared read-only between controllers, possibly across threads.
/// All per-run mutable data belongs in the controller's context, never in
/// the action itself.
///
/// Plain closures work directly thanks to the blanket impl:
///
/// ```rust
/// use instinct::{Action, Controller};
///
/// struct Ammo(u32);
///
/// fn reload(controller: &mut Controller) {
///     controller.data_mut::<Ammo>().0 = 30;
/// }
///
/// // A fn pointer (or closure) is already an Action.
/// let _action: &dyn Action = &reload;
/// ```
pub trait Action: Send + Sync {
    /// Run the action against the given controller.
    fn execute(&self, controller: &mut Controller);
}

impl<F> Action for F
where
    F: Fn(&mut Controller) + Send + Sync,
{
    fn execute(&self, controller: &mut Controller) {
        self(controller)
    }
}

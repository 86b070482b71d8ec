//! Opaque, controller-owned context data.
//!
//! The engine never looks inside a controller's context; it exists so that
//! actions and decisions can exchange typed state through the controller
//! without the engine depending on that type. Each controller carries
//! exactly one slot, typed by the consumer at construction.

use std::any::{type_name, Any};
use thiserror::Error;

/// Error returned when context is requested as a type it does not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContextError {
    /// The slot holds a different type than the one requested.
    #[error("controller data holds '{stored}' but was requested as '{requested}'")]
    TypeMismatch {
        /// Type name captured when the slot was filled.
        stored: &'static str,
        /// Type name of the failed request.
        requested: &'static str,
    },
}

/// The single opaque context slot carried by a controller.
///
/// Access is narrowed back to the stored type at runtime; a mismatch is an
/// implementation error and fails loudly rather than returning a default.
///
/// ```rust
/// use instinct::ControllerData;
///
/// struct GuardBrain {
///     alertness: f32,
/// }
///
/// let mut data = ControllerData::new(GuardBrain { alertness: 0.0 });
/// data.get_mut::<GuardBrain>().unwrap().alertness = 0.5;
/// assert_eq!(data.get::<GuardBrain>().unwrap().alertness, 0.5);
/// assert!(data.get::<String>().is_err());
/// ```
pub struct ControllerData {
    value: Box<dyn Any + Send>,
    type_name: &'static str,
}

impl ControllerData {
    /// Wrap a value as controller context.
    pub fn new<T: Any + Send>(value: T) -> Self {
        Self {
            value: Box::new(value),
            type_name: type_name::<T>(),
        }
    }

    /// Context for controllers that need none.
    pub fn empty() -> Self {
        Self::new(())
    }

    /// Name of the stored type, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Borrow the context as `T`.
    pub fn get<T: Any>(&self) -> Result<&T, ContextError> {
        self.value
            .downcast_ref::<T>()
            .ok_or(ContextError::TypeMismatch {
                stored: self.type_name,
                requested: type_name::<T>(),
            })
    }

    /// Mutably borrow the context as `T`.
    pub fn get_mut<T: Any>(&mut self) -> Result<&mut T, ContextError> {
        // Capture first: the failed downcast borrows self.value.
        let stored = self.type_name;
        self.value
            .downcast_mut::<T>()
            .ok_or(ContextError::TypeMismatch {
                stored,
                requested: type_name::<T>(),
            })
    }
}

impl std::fmt::Debug for ControllerData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ControllerData")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Brain {
        morale: i32,
    }

    #[test]
    fn get_returns_stored_value() {
        let data = ControllerData::new(Brain { morale: 7 });
        assert_eq!(data.get::<Brain>().unwrap().morale, 7);
    }

    #[test]
    fn get_mut_allows_mutation() {
        let mut data = ControllerData::new(Brain { morale: 0 });
        data.get_mut::<Brain>().unwrap().morale = -3;
        assert_eq!(data.get::<Brain>().unwrap().morale, -3);
    }

    #[test]
    fn mismatch_reports_both_type_names() {
        let data = ControllerData::new(Brain { morale: 0 });
        let err = data.get::<u32>().unwrap_err();

        let ContextError::TypeMismatch { stored, requested } = err;
        assert!(stored.contains("Brain"));
        assert!(requested.contains("u32"));
    }

    #[test]
    fn mismatch_never_returns_a_default() {
        let mut data = ControllerData::new(0u64);
        assert!(data.get::<i64>().is_err());
        assert!(data.get_mut::<i64>().is_err());
    }

    #[test]
    fn empty_context_holds_unit() {
        let data = ControllerData::empty();
        assert!(data.get::<()>().is_ok());
    }
}

//! Fluent authoring API for behavior graphs.
//!
//! Graphs are wired by id: declare every state on a
//! [`GraphBuilder`] first, then attach behavior with
//! [`configure`](GraphBuilder::configure). `build()` validates the whole
//! graph and hands back an immutable [`StateGraph`](crate::core::StateGraph)
//! ready to be shared between controllers.

mod error;
mod graph;
mod state;
mod transition;

pub use error::BuildError;
pub use graph::GraphBuilder;
pub use state::StateBuilder;
pub use transition::TransitionBuilder;

//! Patrol guard
//!
//! A minimal two-state behavior: the guard idles until a target becomes
//! visible, walks while it stays visible, and returns to idling when it is
//! lost. An animation binder (here: a println) watches the change channel.
//!
//! Run with: cargo run --example patrol

use instinct::{Controller, ControllerData, Decision, GraphBuilder, Transition};
use std::sync::Arc;

struct Senses {
    target_visible: bool,
}

struct HasTarget;

impl Decision for HasTarget {
    fn decide(&self, controller: &mut Controller) -> bool {
        controller.data::<Senses>().target_visible
    }
}

fn main() -> Result<(), instinct::BuildError> {
    let mut builder = GraphBuilder::new();
    let idle = builder.add_state("Idle")?;
    let walk = builder.add_state("Walk")?;

    builder.configure(idle, |state| {
        state.update_transition(Transition::conditional(HasTarget, Some(walk), None))
    })?;
    builder.configure(walk, |state| {
        // A visible target keeps the guard walking: the true branch has no
        // target, so the transition is transparent and the scan ends.
        state.update_transition(Transition::conditional(HasTarget, None, Some(idle)))
    })?;

    let graph = Arc::new(builder.build()?);

    let mut guard = Controller::new(
        Arc::clone(&graph),
        ControllerData::new(Senses {
            target_visible: false,
        }),
    );

    let binder_graph = Arc::clone(&graph);
    let _subscription = guard.on_state_changed().subscribe(move |state| {
        match state {
            Some(id) => println!("  [binder] now playing '{}' animation", binder_graph.state(*id).name()),
            None => println!("  [binder] controller inactive"),
        }
    });

    guard.set_state(Some(idle));

    println!("ticking with no target in sight:");
    for tick in 0..3 {
        guard.update();
        println!("  tick {tick}: {:?}", guard.current_state_name());
    }

    println!("a target appears:");
    guard.data_mut::<Senses>().target_visible = true;
    guard.update();
    println!("  -> {:?}", guard.current_state_name());

    println!("target stays visible, guard keeps walking:");
    guard.update();
    guard.update();
    println!("  -> {:?}", guard.current_state_name());

    println!("target lost:");
    guard.data_mut::<Senses>().target_visible = false;
    guard.update();
    println!("  -> {:?}", guard.current_state_name());

    println!("\nassignments recorded: {:?}", guard.trace().path());
    Ok(())
}

//! Pass-through states and the previous-state sentinel
//!
//! `Reload` is a zero-duration state: its entry actions refill the magazine
//! and its entry transition immediately targets the reserved
//! `PreviousState` node, which the controller substitutes with whatever
//! state was active before the reload. The fighter never spends a tick
//! reloading.
//!
//! Run with: cargo run --example pass_through

use instinct::{Controller, ControllerData, GraphBuilder, Transition};
use std::sync::Arc;

struct Ammo {
    rounds: u32,
}

fn main() -> Result<(), instinct::BuildError> {
    let mut builder = GraphBuilder::new();
    let fight = builder.add_state("Fight")?;
    let reload = builder.add_state("Reload")?;
    let previous = builder.previous_state();

    builder.configure(fight, |state| {
        state
            .update_action(|c: &mut Controller| {
                let ammo = c.data_mut::<Ammo>();
                ammo.rounds = ammo.rounds.saturating_sub(1);
                println!("  bang! {} round(s) left", ammo.rounds);
            })
            .update_transition(Transition::conditional(
                |c: &mut Controller| c.data::<Ammo>().rounds == 0,
                Some(reload),
                None,
            ))
    })?;

    builder.configure(reload, |state| {
        state
            .entry_action(|c: &mut Controller| {
                c.data_mut::<Ammo>().rounds = 3;
                println!("  [reload] magazine refilled");
            })
            // Entered, refilled, and straight back to where we came from.
            .entry_transition(Transition::forced(previous))
    })?;

    let graph = Arc::new(builder.build()?);
    let mut fighter = Controller::new(Arc::clone(&graph), ControllerData::new(Ammo { rounds: 2 }));

    fighter.set_state(Some(fight));

    for tick in 0..5 {
        println!("tick {tick} ({:?}):", fighter.current_state_name());
        fighter.update();
    }

    println!("\nevery hop the controller took:");
    for record in fighter.trace().records() {
        println!(
            "  {:?} -> {:?}{}",
            record.from,
            record.to,
            if record.via_previous { "  (via sentinel)" } else { "" }
        );
    }
    Ok(())
}

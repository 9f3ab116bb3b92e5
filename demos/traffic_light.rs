//! Traffic Light State Machine
//!
//! This example demonstrates a simple cyclic state machine.
//!
//! Key concepts:
//! - Cyclic state transitions (states repeat)
//! - Name-keyed state registration
//! - Rejected moves return false instead of erroring
//!
//! Run with: cargo run --example traffic_light

use lockstep::state_graph;

fn main() -> Result<(), lockstep::MachineError> {
    println!("=== Traffic Light State Machine ===\n");

    let mut machine = state_graph! {
        "Red" => ["Green"],
        "Green" => ["Yellow"],
        "Yellow" => ["Red"],
    };

    machine.on_transition(|event| {
        println!("  light changed: {} -> {}", event.from(), event.to());
    });

    machine.start("Red")?;
    println!("Initial state: {:?}\n", machine.current());

    println!("Cycling twice:");
    for target in ["Green", "Yellow", "Red", "Green", "Yellow", "Red"] {
        machine.transition(target)?;
    }

    println!("\nSkipping a phase is rejected:");
    let accepted = machine.transition("Yellow")?;
    println!("  Red -> Yellow accepted? {accepted}");
    println!("  still at: {:?}", machine.current());

    println!("\nWalk so far: {:?}", machine.path());
    println!("Events recorded: {}", machine.history().len());

    println!("\n=== Example Complete ===");
    Ok(())
}

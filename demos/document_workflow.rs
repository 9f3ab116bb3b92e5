//! Document Workflow State Machine
//!
//! This example demonstrates an approval workflow with branching paths,
//! the fluent builder, and static graph analysis.
//!
//! Key concepts:
//! - Builder construction with an initial state
//! - Branching transitions (Review can approve or bounce back)
//! - Audit trail inspection with timestamps
//! - Detecting declaration mistakes before running
//!
//! Run with: cargo run --example document_workflow

use lockstep::analysis::analyze_from;
use lockstep::StateMachineBuilder;

fn main() -> Result<(), lockstep::MachineError> {
    println!("=== Document Workflow State Machine ===\n");

    let mut machine = StateMachineBuilder::new()
        .state("Draft", ["Review"])
        .state("Review", ["Draft", "Approved", "Rejected"])
        .state("Approved", ["Published"])
        .state("Rejected", ["Draft"])
        .state("Published", Vec::<String>::new())
        .initial("Draft")
        .build()
        .expect("workflow should build");

    println!("States: {:?}", machine.states());

    let violations = analyze_from(&machine, "Draft");
    println!("Graph violations: {}\n", violations.len());

    println!("A bumpy road to publication:");
    machine.transition("Review")?;
    machine.transition("Rejected")?; // reviewer bounces it
    machine.transition("Draft")?;
    machine.transition("Review")?;
    machine.transition("Approved")?;
    machine.transition("Published")?;

    for event in machine.history() {
        println!(
            "  {} -> {} ({} ms)",
            event.from(),
            event.to(),
            event.timestamp_millis()
        );
    }

    println!("\nFinal state: {:?}", machine.current());
    println!("Published is terminal: {}", !machine.can_transition("Draft"));

    println!("\n=== Example Complete ===");
    Ok(())
}

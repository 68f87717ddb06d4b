//! Document Workflow State Machine
//!
//! This example demonstrates a review workflow built with the fluent
//! builder instead of the state_table! macro.
//!
//! Key concepts:
//! - Fluent builder construction
//! - reachable_states() for introspecting the table
//! - reset() returning to the initial state without touching history
//!
//! Run with: cargo run --example document_workflow

use stateline::{StateDefinition, StateMachine};

fn main() {
    println!("=== Document Workflow ===\n");

    let mut machine = StateMachine::builder()
        .initial("draft")
        .state("draft", StateDefinition::new().on("submit", "review"))
        .state(
            "review",
            StateDefinition::new()
                .on("approve", "published")
                .on("reject", "draft"),
        )
        .state("published", StateDefinition::new().on("retract", "draft"))
        .build()
        .expect("initial state is set");

    println!("All states: {:?}", machine.reachable_states(None));
    println!(
        "States that can 'reject': {:?}\n",
        machine.reachable_states(Some("reject"))
    );

    println!("Walking draft -> review -> published:");
    for event in ["submit", "approve"] {
        machine.trigger(event).expect("event is defined");
        println!("  {} -> {}", event, machine.current_state());
    }

    println!("\nHistory so far: {:?}", machine.history().path());
    if let Some(duration) = machine.history().duration() {
        println!("Time from first to last visit: {duration:?}");
    }

    println!("\nReset jumps back to '{}'...", machine.initial_state());
    machine.reset();
    println!("  current: {}", machine.current_state());
    println!(
        "  history is untouched: {:?}",
        machine.history().path()
    );

    println!("\n=== Example Complete ===");
}

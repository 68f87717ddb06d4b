//! Turnstile State Machine
//!
//! This example demonstrates the classic coin-operated turnstile.
//!
//! Key concepts:
//! - Declarative string-keyed state table
//! - Event-driven transitions via trigger()
//! - Rejected events leave the machine untouched
//! - Undo/redo over the visit history
//!
//! Run with: cargo run --example turnstile

use stateline::{state_table, StateMachine};

fn main() {
    println!("=== Turnstile State Machine ===\n");

    let mut machine = StateMachine::new(state_table! {
        initial: "locked",
        states: {
            "locked" => { "coin" => "unlocked" },
            "unlocked" => { "push" => "locked" },
        }
    });

    println!("Initial state: {}\n", machine.current_state());

    println!("Inserting a coin...");
    machine.trigger("coin").expect("locked state accepts coin");
    println!("  state: {}", machine.current_state());

    println!("Pushing through...");
    machine.trigger("push").expect("unlocked state accepts push");
    println!("  state: {}\n", machine.current_state());

    println!("Pushing while locked is rejected:");
    match machine.trigger("push") {
        Ok(()) => unreachable!(),
        Err(err) => println!("  error: {err}"),
    }
    println!("  state unchanged: {}\n", machine.current_state());

    println!("Visit history: {:?}", machine.history().path());

    println!("\nUndoing twice:");
    machine.undo();
    println!("  state: {}", machine.current_state());
    machine.undo();
    println!("  state: {}", machine.current_state());
    println!("Undo past the front returns: {}", machine.undo());

    println!("\nRedoing back to the tail:");
    while machine.redo() {
        println!("  state: {}", machine.current_state());
    }

    println!("\n=== Example Complete ===");
}

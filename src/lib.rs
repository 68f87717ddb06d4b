//! Stateline: a lightweight declarative state machine with undo/redo.
//!
//! Stateline is a state container, not a framework: you hand it a map of
//! states and their event-triggered transitions, and it tracks the current
//! state, validates every move against the table, and keeps a linear
//! undo/redo history of visited states. It suits UI widget states, workflow
//! steps, and similar places where a full state-machine framework would be
//! overkill.
//!
//! # Core Concepts
//!
//! - **Configuration**: a declarative table of states and their transitions
//! - **StateMachine**: the container validating transitions against the table
//! - **HistoryLog**: an append-only visit log with an undo/redo cursor
//!
//! Everything is synchronous and in-memory: no I/O, no internal locking, no
//! retries. Errors propagate immediately; running out of undo/redo history
//! is an ordinary `false` return, not an error.
//!
//! # Example
//!
//! ```rust
//! use stateline::{state_table, StateMachine};
//!
//! let mut machine = StateMachine::new(state_table! {
//!     initial: "draft",
//!     states: {
//!         "draft" => { "submit" => "review" },
//!         "review" => { "approve" => "published", "reject" => "draft" },
//!         "published" => {},
//!     }
//! });
//!
//! machine.trigger("submit").unwrap();
//! machine.trigger("approve").unwrap();
//! assert_eq!(machine.current_state(), "published");
//!
//! assert!(machine.undo());
//! assert_eq!(machine.current_state(), "review");
//! assert!(machine.redo());
//! assert_eq!(machine.current_state(), "published");
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod error;

// Re-export commonly used types
pub use builder::StateMachineBuilder;
pub use config::{Configuration, StateDefinition};
pub use core::{HistoryEntry, HistoryLog, StateMachine};
pub use error::MachineError;

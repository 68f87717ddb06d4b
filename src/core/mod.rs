//! Core state machine container and its history log.
//!
//! This module holds the synchronous heart of the crate:
//! - [`StateMachine`]: current state, state table, transition validation
//! - [`HistoryLog`]: the linear undo/redo log of visited states
//!
//! Everything here is plain in-memory mutation — no I/O, no suspension
//! points, no internal locking.

mod history;
mod machine;

pub use history::{HistoryEntry, HistoryLog};
pub use machine::StateMachine;

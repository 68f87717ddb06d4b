//! The state machine container: current state, state table, history.

use crate::builder::StateMachineBuilder;
use crate::config::{Configuration, StateDefinition};
use crate::core::history::HistoryLog;
use crate::error::MachineError;
use serde::{Deserialize, Serialize};

/// A declarative finite-state machine with a linear undo/redo history.
///
/// The machine owns its current state, an immutable state table, and a
/// [`HistoryLog`] of visited states. Transitions are validated against the
/// table; every successful state change is recorded in the log, and
/// [`undo`](StateMachine::undo)/[`redo`](StateMachine::redo) walk the log
/// back and forth.
///
/// The machine is a plain synchronous container: no operation blocks,
/// performs I/O, or retries. It is `Send` but not internally synchronized —
/// concurrent callers must provide their own mutual exclusion.
///
/// # Example
///
/// ```rust
/// use stateline::{StateDefinition, StateMachine};
///
/// let mut machine = StateMachine::builder()
///     .initial("off")
///     .state("off", StateDefinition::new().on("flip", "on"))
///     .state("on", StateDefinition::new().on("flip", "off"))
///     .build()
///     .unwrap();
///
/// machine.trigger("flip").unwrap();
/// assert_eq!(machine.current_state(), "on");
///
/// assert!(machine.undo());
/// assert_eq!(machine.current_state(), "off");
/// assert!(machine.redo());
/// assert_eq!(machine.current_state(), "on");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StateMachine {
    initial: String,
    current: String,
    states: Vec<(String, StateDefinition)>,
    history: HistoryLog,
}

impl StateMachine {
    /// Create a machine from a configuration.
    ///
    /// The machine starts in `config.initial` with a one-entry history.
    /// The initial state is intentionally not validated against the state
    /// table: a machine whose initial state is undefined constructs fine
    /// and fails with [`MachineError::InvalidState`] on the first operation
    /// that has to look it up.
    pub fn new(config: Configuration) -> Self {
        let current = config.initial.clone();
        let history = HistoryLog::starting_at(current.as_str());
        Self {
            initial: config.initial,
            current,
            states: config.states,
            history,
        }
    }

    /// Start a fluent [`StateMachineBuilder`].
    pub fn builder() -> StateMachineBuilder {
        StateMachineBuilder::new()
    }

    /// The state the machine is currently in.
    pub fn current_state(&self) -> &str {
        &self.current
    }

    /// The state the machine was configured to start in.
    pub fn initial_state(&self) -> &str {
        &self.initial
    }

    /// Read access to the visit history.
    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// Move directly to `target`, bypassing event rules.
    ///
    /// Fails with [`MachineError::InvalidState`] when `target` is not in
    /// the state table, leaving the machine untouched. On success the move
    /// is recorded in the history: a new entry is appended when `target`
    /// differs from the last visit, and in either case the history cursor
    /// is re-pinned to the tail (see [`HistoryLog::record`]).
    ///
    /// # Example
    ///
    /// ```rust
    /// use stateline::{StateDefinition, StateMachine};
    ///
    /// let mut machine = StateMachine::builder()
    ///     .initial("idle")
    ///     .state("idle", StateDefinition::new())
    ///     .state("busy", StateDefinition::new())
    ///     .build()
    ///     .unwrap();
    ///
    /// machine.change_state("busy").unwrap();
    /// assert_eq!(machine.current_state(), "busy");
    /// assert!(machine.change_state("asleep").is_err());
    /// assert_eq!(machine.current_state(), "busy");
    /// ```
    pub fn change_state(&mut self, target: &str) -> Result<(), MachineError> {
        if self.definition(target).is_none() {
            return Err(MachineError::InvalidState(target.to_string()));
        }
        self.current = target.to_string();
        self.history.record(target);
        Ok(())
    }

    /// Fire an event, following the current state's transition rules.
    ///
    /// Fails with [`MachineError::UnknownEvent`] when the current state
    /// does not define `event`, and with [`MachineError::InvalidState`]
    /// when the current state itself is missing from the table (only
    /// possible with an undefined initial state before any successful
    /// transition). No mutation happens on either failure; on success this
    /// delegates to [`change_state`](StateMachine::change_state) and
    /// inherits its history semantics.
    pub fn trigger(&mut self, event: &str) -> Result<(), MachineError> {
        let definition = self
            .definition(&self.current)
            .ok_or_else(|| MachineError::InvalidState(self.current.clone()))?;
        let target = definition
            .target(event)
            .ok_or_else(|| MachineError::UnknownEvent {
                state: self.current.clone(),
                event: event.to_string(),
            })?
            .to_string();
        self.change_state(&target)
    }

    /// Return to the initial state.
    ///
    /// Only `current` changes: the history and its cursor are deliberately
    /// untouched, so `history()[cursor]` may diverge from the current state
    /// until the next `change_state`/`trigger`/`undo`/`redo` call. Callers
    /// that want a history-consistent reset should also call
    /// [`clear_history`](StateMachine::clear_history).
    pub fn reset(&mut self) {
        self.current = self.initial.clone();
    }

    /// States that respond to `event`, in state-table declaration order.
    ///
    /// With `None` (or an empty event name, which is treated as no filter)
    /// this returns every state in the table. Never fails; an event no
    /// state defines yields an empty vec.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stateline::{StateDefinition, StateMachine};
    ///
    /// let machine = StateMachine::builder()
    ///     .initial("solid")
    ///     .state("solid", StateDefinition::new().on("melt", "liquid"))
    ///     .state("liquid", StateDefinition::new().on("freeze", "solid"))
    ///     .state("gas", StateDefinition::new())
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(machine.reachable_states(None), vec!["solid", "liquid", "gas"]);
    /// assert_eq!(machine.reachable_states(Some("melt")), vec!["solid"]);
    /// assert!(machine.reachable_states(Some("sublimate")).is_empty());
    /// ```
    pub fn reachable_states(&self, event: Option<&str>) -> Vec<&str> {
        match event {
            Some(event) if !event.is_empty() => self
                .states
                .iter()
                .filter(|(_, definition)| definition.defines(event))
                .map(|(name, _)| name.as_str())
                .collect(),
            _ => self.states.iter().map(|(name, _)| name.as_str()).collect(),
        }
    }

    /// Step back to the previously visited state.
    ///
    /// Returns `false` without mutating anything when no earlier visit is
    /// available (fresh machine, cursor at the front, or cleared history).
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(state) => {
                self.current = state.to_string();
                true
            }
            None => false,
        }
    }

    /// Step forward to the next visited state.
    ///
    /// Returns `false` without mutating anything when the cursor is already
    /// at the most recent visit (or the history was cleared).
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(state) => {
                self.current = state.to_string();
                true
            }
            None => false,
        }
    }

    /// Discard the visit history.
    ///
    /// The current state is untouched, and so is the history cursor (see
    /// [`HistoryLog::clear`]): until the next recorded state change the
    /// cursor points past the end of the empty log, and both
    /// [`undo`](StateMachine::undo) and [`redo`](StateMachine::redo)
    /// return `false`. Do not rely on the cursor/current pairing right
    /// after a clear.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    fn definition(&self, name: &str) -> Option<&StateDefinition> {
        self.states
            .iter()
            .find(|(state, _)| state == name)
            .map(|(_, definition)| definition)
    }
}

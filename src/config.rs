//! Declarative configuration for state machines.
//!
//! A [`Configuration`] is a plain data description of a machine: the initial
//! state and a table mapping each state name to the events it responds to.
//! The table preserves insertion order, so queries that enumerate states
//! (like [`StateMachine::reachable_states`]) report them in the order the
//! configuration declared them.
//!
//! [`StateMachine::reachable_states`]: crate::core::StateMachine::reachable_states

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The event-to-target map for a single state.
///
/// Each event a state defines leads to exactly one target state. Definitions
/// are built up with the chainable [`on`](StateDefinition::on) helper.
///
/// # Example
///
/// ```rust
/// use stateline::config::StateDefinition;
///
/// let def = StateDefinition::new()
///     .on("submit", "review")
///     .on("discard", "trash");
///
/// assert_eq!(def.target("submit"), Some("review"));
/// assert_eq!(def.target("publish"), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StateDefinition {
    /// Events defined for this state, mapped to the state each leads to.
    pub transitions: HashMap<String, String>,
}

impl StateDefinition {
    /// Create a definition with no transitions (a dead-end state).
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an event transition, returning the updated definition.
    ///
    /// Re-declaring an event replaces the earlier target.
    pub fn on(mut self, event: impl Into<String>, target: impl Into<String>) -> Self {
        self.transitions.insert(event.into(), target.into());
        self
    }

    /// Look up the target state for an event, if this state defines it.
    pub fn target(&self, event: &str) -> Option<&str> {
        self.transitions.get(event).map(String::as_str)
    }

    /// Check whether this state defines the given event.
    pub fn defines(&self, event: &str) -> bool {
        self.transitions.contains_key(event)
    }
}

/// Complete machine description: initial state plus the state table.
///
/// The table is an ordered sequence of `(name, definition)` pairs rather
/// than a map, so iteration order is the declaration order. Lookups are a
/// linear scan, which is the right trade-off for the handful of states
/// these machines carry.
///
/// The initial state is intentionally not validated against the table:
/// a machine configured with an unknown initial state constructs fine and
/// only fails on the first operation that has to look it up.
///
/// # Example
///
/// ```rust
/// use stateline::config::{Configuration, StateDefinition};
///
/// let config = Configuration::new("off")
///     .state("off", StateDefinition::new().on("flip", "on"))
///     .state("on", StateDefinition::new().on("flip", "off"));
///
/// assert_eq!(config.initial, "off");
/// assert!(config.definition("on").is_some());
/// assert!(config.definition("broken").is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    /// The state the machine starts in.
    pub initial: String,
    /// Ordered state table: declaration order is iteration order.
    pub states: Vec<(String, StateDefinition)>,
}

impl Configuration {
    /// Create a configuration with the given initial state and no states.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            initial: initial.into(),
            states: Vec::new(),
        }
    }

    /// Add a state definition, returning the updated configuration.
    ///
    /// Re-declaring a state replaces the earlier definition in place, so
    /// the state keeps its original position in the table.
    pub fn state(mut self, name: impl Into<String>, definition: StateDefinition) -> Self {
        let name = name.into();
        if let Some(slot) = self.states.iter_mut().find(|(existing, _)| *existing == name) {
            slot.1 = definition;
        } else {
            self.states.push((name, definition));
        }
        self
    }

    /// Look up a state's definition by name.
    pub fn definition(&self, name: &str) -> Option<&StateDefinition> {
        self.states
            .iter()
            .find(|(state, _)| state == name)
            .map(|(_, definition)| definition)
    }
}

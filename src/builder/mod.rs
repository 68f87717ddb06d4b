//! Builder API for ergonomic machine construction.
//!
//! This module provides a fluent builder and the [`state_table!`] macro for
//! declaring machines with minimal boilerplate.
//!
//! [`state_table!`]: crate::state_table

pub mod macros;

use crate::config::{Configuration, StateDefinition};
use crate::core::StateMachine;
use crate::error::MachineError;

/// Builder for constructing state machines with a fluent API.
///
/// The initial state is required; [`build`](StateMachineBuilder::build)
/// fails with [`MachineError::Configuration`] without it. The state table
/// may be empty — such a machine simply rejects every transition, the same
/// way an unvalidated configuration would.
///
/// # Example
///
/// ```rust
/// use stateline::{StateDefinition, StateMachineBuilder};
///
/// let machine = StateMachineBuilder::new()
///     .initial("normal")
///     .state("normal", StateDefinition::new().on("study", "focused"))
///     .state("focused", StateDefinition::new().on("rest", "normal"))
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.current_state(), "normal");
/// ```
#[derive(Clone, Debug, Default)]
pub struct StateMachineBuilder {
    initial: Option<String>,
    states: Vec<(String, StateDefinition)>,
}

impl StateMachineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<String>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Add a state definition.
    ///
    /// Re-declaring a state replaces the earlier definition in place.
    pub fn state(mut self, name: impl Into<String>, definition: StateDefinition) -> Self {
        let name = name.into();
        if let Some(slot) = self.states.iter_mut().find(|(existing, _)| *existing == name) {
            slot.1 = definition;
        } else {
            self.states.push((name, definition));
        }
        self
    }

    /// Assemble the configuration without constructing a machine.
    pub fn into_configuration(self) -> Result<Configuration, MachineError> {
        let initial = self
            .initial
            .ok_or(MachineError::Configuration(
                "initial state not specified; call .initial(state) before .build()",
            ))?;
        Ok(Configuration {
            initial,
            states: self.states,
        })
    }

    /// Build the state machine.
    pub fn build(self) -> Result<StateMachine, MachineError> {
        Ok(StateMachine::new(self.into_configuration()?))
    }
}

//! Errors surfaced by state machine construction and transitions.

use thiserror::Error;

/// Errors that can occur when building or driving a state machine.
///
/// Undo/redo exhaustion is deliberately *not* represented here: running out
/// of history is an expected, recoverable outcome, so [`undo`] and [`redo`]
/// report it with a `bool` instead of an error.
///
/// [`undo`]: crate::core::StateMachine::undo
/// [`redo`]: crate::core::StateMachine::redo
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MachineError {
    /// The builder was asked to produce a machine without the required
    /// configuration. The payload names the missing piece.
    #[error("incomplete configuration: {0}")]
    Configuration(&'static str),

    /// A transition targeted a state that is not defined in the state table,
    /// or the machine's current state is itself undefined (possible only
    /// when the configured initial state was never in the table).
    #[error("state '{0}' is not defined in the state table")]
    InvalidState(String),

    /// `trigger` was called with an event the current state does not define.
    #[error("event '{event}' is not defined for state '{state}'")]
    UnknownEvent { state: String, event: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_name_the_offender() {
        let err = MachineError::InvalidState("limbo".to_string());
        assert_eq!(err.to_string(), "state 'limbo' is not defined in the state table");

        let err = MachineError::UnknownEvent {
            state: "off".to_string(),
            event: "explode".to_string(),
        };
        assert_eq!(err.to_string(), "event 'explode' is not defined for state 'off'");
    }

    #[test]
    fn configuration_error_carries_hint() {
        let err = MachineError::Configuration("initial state not specified");
        assert!(err.to_string().contains("initial state"));
    }
}

//! Macros for declarative state table construction.

/// Build a [`Configuration`](crate::config::Configuration) from a literal
/// state table.
///
/// Each state block lists `event => target` pairs; trailing commas are
/// allowed everywhere. Re-declared states follow the same last-wins rule as
/// [`Configuration::state`](crate::config::Configuration::state).
///
/// # Example
///
/// ```rust
/// use stateline::{state_table, StateMachine};
///
/// let config = state_table! {
///     initial: "off",
///     states: {
///         "off" => { "flip" => "on" },
///         "on" => { "flip" => "off" },
///     }
/// };
///
/// let mut machine = StateMachine::new(config);
/// machine.trigger("flip").unwrap();
/// assert_eq!(machine.current_state(), "on");
/// ```
#[macro_export]
macro_rules! state_table {
    (
        initial: $initial:expr,
        states: {
            $(
                $state:expr => {
                    $( $event:expr => $target:expr ),* $(,)?
                }
            ),* $(,)?
        }
    ) => {
        $crate::config::Configuration::new($initial)
            $(
                .state(
                    $state,
                    $crate::config::StateDefinition::new()
                        $( .on($event, $target) )*
                )
            )*
    };
}

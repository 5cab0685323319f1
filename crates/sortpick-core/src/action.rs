//! Closed set of prompt actions.

use crate::cursor::NavDirection;
use crate::order::MoveDirection;
use crate::state::PromptState;

/// A single input, already classified.
///
/// Key decoding lives with the input source; the state machine only sees
/// these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Validate and finish.
    Submit,
    /// Move the cursor to the neighboring selectable entry.
    Navigate(NavDirection),
    /// Toggle the highlighted entry.
    ToggleActive,
    /// Check all, or uncheck all when everything is already checked.
    ToggleAll,
    /// Toggle every entry.
    InvertAll,
    /// Jump to a 1-based position and toggle it.
    ToggleAtPosition(u8),
    /// Reorder the highlighted entry.
    Move(MoveDirection),
    /// Unrecognized input.
    None,
}

/// Result of dispatching an action.
#[derive(Debug, Clone)]
pub enum Transition<T> {
    /// The next state. May be identical to the previous one.
    Updated(PromptState<T>),
    /// The user asked to submit; run the submission check on this state.
    SubmitRequested(PromptState<T>),
}

impl<T> Transition<T> {
    pub fn into_state(self) -> PromptState<T> {
        match self {
            Self::Updated(state) | Self::SubmitRequested(state) => state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::choice::Choice;

    #[test]
    fn test_transition_into_state() {
        let state = PromptState::new(["a", "b"].map(Choice::new)).unwrap();
        let state = Transition::Updated(state.navigate(NavDirection::Next)).into_state();
        assert_eq!(state.active(), 1);

        let state = Transition::SubmitRequested(state).into_state();
        assert_eq!(state.active(), 1);
        assert!(state.is_pending());
    }
}

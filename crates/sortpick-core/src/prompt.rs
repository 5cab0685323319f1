//! The prompt: configuration, validator and the action dispatcher.

use std::fmt;

use crate::action::{Action, Transition};
use crate::choice::Choice;
use crate::config::PromptConfig;
use crate::error::PromptError;
use crate::state::PromptState;
use crate::validate::{AcceptAll, REQUIRED_MESSAGE, Submission, Validator};

/// A configured prompt.
///
/// Holds no per-run state: [`Prompt::start`] creates a [`PromptState`] which
/// is then threaded through [`Prompt::dispatch`] and [`Prompt::submit`].
pub struct Prompt<T> {
    config: PromptConfig,
    validator: Box<dyn Validator<T>>,
}

impl<T> fmt::Debug for Prompt<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Prompt")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<T> Prompt<T> {
    /// Create a prompt that accepts any selection.
    pub fn new(config: PromptConfig) -> Self {
        Self {
            config,
            validator: Box::new(AcceptAll),
        }
    }

    /// Set the validator run on submit.
    pub fn with_validator(mut self, validator: impl Validator<T> + 'static) -> Self {
        self.validator = Box::new(validator);
        self
    }

    pub fn config(&self) -> &PromptConfig {
        &self.config
    }

    /// Build the initial state for `choices`.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError::InvalidConfig`] for a bad config and
    /// [`PromptError::NoSelectableChoices`] when no choice can be selected.
    pub fn start(&self, choices: impl IntoIterator<Item = Choice<T>>) -> Result<PromptState<T>, PromptError> {
        self.config.validate()?;
        let state = PromptState::new(choices)?;
        tracing::debug!(
            prompt = %self.config.message,
            items = state.items().len(),
            active = state.active(),
            "prompt started"
        );
        Ok(state)
    }

    /// Apply one action.
    ///
    /// Submit is not resolved here because validation may suspend; it comes
    /// back as [`Transition::SubmitRequested`] for [`Prompt::submit`].
    pub fn dispatch(&self, state: PromptState<T>, action: Action) -> Transition<T> {
        if !state.is_pending() {
            return Transition::Updated(state);
        }

        tracing::debug!(?action, active = state.active(), "dispatch");
        let next = match action {
            Action::Submit => return Transition::SubmitRequested(state),
            Action::Navigate(direction) => state.navigate(direction),
            Action::ToggleActive => state.toggle_active(),
            Action::ToggleAll => state.toggle_all(),
            Action::InvertAll => state.invert_all(),
            Action::ToggleAtPosition(position) => state.toggle_at_position(position),
            Action::Move(direction) => state.move_active(direction, self.config.sorting_loop),
            Action::None => state,
        };
        Transition::Updated(next)
    }

    /// Run the required-selection rule and the validator.
    pub async fn submit(&self, state: PromptState<T>) -> Submission<T> {
        if !state.is_pending() {
            return Submission::Accepted(state);
        }

        let rejection = {
            let selection: Vec<_> = state.selection().collect();
            if self.config.required && selection.is_empty() {
                Some(REQUIRED_MESSAGE.to_string())
            } else {
                self.validator.validate(&selection).await.error_message()
            }
        };

        match rejection {
            Some(message) => {
                tracing::info!(reason = %message, "submission rejected");
                Submission::Rejected(state.with_error(message))
            }
            None => {
                let state = state.finish();
                tracing::info!(selected = state.selection().count(), "submission accepted");
                Submission::Accepted(state)
            }
        }
    }

    /// Dispatch an action and resolve a submit request in one step.
    pub async fn handle(&self, state: PromptState<T>, action: Action) -> PromptState<T> {
        match self.dispatch(state, action) {
            Transition::Updated(state) => state,
            Transition::SubmitRequested(state) => self.submit(state).await.into_state(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::NavDirection;
    use crate::order::MoveDirection;
    use crate::state::Status;
    use crate::validate::{INVALID_MESSAGE, validator_fn};

    fn prompt() -> Prompt<&'static str> {
        Prompt::new(PromptConfig::new("Pick"))
    }

    #[test]
    fn test_start_rejects_bad_config() {
        let mut config = PromptConfig::new("Pick");
        config.page_size = 0;
        let err = Prompt::<u8>::new(config).start(vec![Choice::new(1)]).unwrap_err();
        assert!(matches!(err, PromptError::InvalidConfig { .. }));
    }

    #[test]
    fn test_dispatch_submit_requests_validation() {
        let prompt = prompt();
        let state = prompt.start(vec![Choice::new("a")]).unwrap();
        assert!(matches!(
            prompt.dispatch(state, Action::Submit),
            Transition::SubmitRequested(_)
        ));
    }

    #[test]
    fn test_dispatch_none_is_noop() {
        let prompt = prompt();
        let state = prompt.start(vec![Choice::new("a"), Choice::new("b")]).unwrap();
        let state = prompt.dispatch(state, Action::None).into_state();
        assert_eq!(state.active(), 0);
        assert!(state.show_help_tip());
    }

    #[test]
    fn test_dispatch_uses_sorting_loop() {
        let looping = Prompt::new(PromptConfig::builder().message("m").sorting_loop(true).build().unwrap());
        let state = looping.start(["A", "B", "C"].map(Choice::new)).unwrap();
        let state = looping.dispatch(state, Action::Move(MoveDirection::Up)).into_state();
        assert_eq!(state.active(), 2);

        let plain = prompt();
        let state = plain.start(["A", "B", "C"].map(Choice::new)).unwrap();
        let state = plain.dispatch(state, Action::Move(MoveDirection::Up)).into_state();
        assert_eq!(state.active(), 0);
    }

    #[tokio::test]
    async fn test_done_state_ignores_actions() {
        let prompt = prompt();
        let state = prompt.start(vec![Choice::new("a"), Choice::new("b")]).unwrap();
        let state = prompt.handle(state, Action::Submit).await;
        assert_eq!(state.status(), Status::Done);

        let state = prompt.handle(state, Action::Navigate(NavDirection::Next)).await;
        assert_eq!(state.active(), 0);
        let state = prompt.handle(state, Action::ToggleActive).await;
        assert!(state.selection().next().is_none());
    }

    #[tokio::test]
    async fn test_submit_rejection_messages() {
        let prompt = prompt().with_validator(validator_fn(|selection: &[&Choice<&str>]| !selection.is_empty()));
        let state = prompt.start(vec![Choice::new("a")]).unwrap();
        let submission = prompt.submit(state).await;
        assert!(!submission.is_accepted());
        assert_eq!(submission.state().error(), Some(INVALID_MESSAGE));
        assert_eq!(submission.state().status(), Status::Pending);
    }
}

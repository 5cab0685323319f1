//! Submission checks: the required-selection rule and caller validators.

use std::future::Future;

use futures::future::{BoxFuture, FutureExt};

use crate::choice::Choice;
use crate::state::PromptState;

/// Error shown when `required` is set and nothing is checked.
pub const REQUIRED_MESSAGE: &str = "At least one choice must be selected";

/// Error shown when a validator rejects without a message.
pub const INVALID_MESSAGE: &str = "You must select a valid value";

/// Verdict of a validator over the checked choices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Valid,
    Invalid,
    /// Rejected, with a message for the user.
    Message(String),
}

impl Validation {
    /// The message to display, `None` when valid.
    pub fn error_message(self) -> Option<String> {
        match self {
            Self::Valid => None,
            Self::Message(message) if !message.is_empty() => Some(message),
            Self::Invalid | Self::Message(_) => Some(INVALID_MESSAGE.to_string()),
        }
    }
}

impl From<bool> for Validation {
    fn from(valid: bool) -> Self {
        if valid { Self::Valid } else { Self::Invalid }
    }
}

impl From<String> for Validation {
    fn from(message: String) -> Self {
        Self::Message(message)
    }
}

impl From<&str> for Validation {
    fn from(message: &str) -> Self {
        Self::Message(message.to_string())
    }
}

impl From<Result<(), String>> for Validation {
    fn from(result: Result<(), String>) -> Self {
        match result {
            Ok(()) => Self::Valid,
            Err(message) => Self::Message(message),
        }
    }
}

/// Caller-supplied check over the checked choices, in list order.
///
/// The future may suspend; the host loop keeps collecting key events while
/// it is outstanding.
pub trait Validator<T>: Send + Sync {
    fn validate<'a>(&'a self, selection: &'a [&'a Choice<T>]) -> BoxFuture<'a, Validation>;
}

/// Accepts every selection.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl<T> Validator<T> for AcceptAll {
    fn validate<'a>(&'a self, _selection: &'a [&'a Choice<T>]) -> BoxFuture<'a, Validation> {
        futures::future::ready(Validation::Valid).boxed()
    }
}

/// Validator backed by a synchronous closure. See [`validator_fn`].
#[derive(Debug, Clone)]
pub struct FnValidator<F>(F);

impl<T, F, V> Validator<T> for FnValidator<F>
where
    F: Fn(&[&Choice<T>]) -> V + Send + Sync,
    V: Into<Validation>,
{
    fn validate<'a>(&'a self, selection: &'a [&'a Choice<T>]) -> BoxFuture<'a, Validation> {
        let verdict = (self.0)(selection).into();
        futures::future::ready(verdict).boxed()
    }
}

/// Wrap a synchronous closure returning `bool`, a message, or `Result<(), String>`.
pub fn validator_fn<T, F, V>(f: F) -> FnValidator<F>
where
    F: Fn(&[&Choice<T>]) -> V + Send + Sync,
    V: Into<Validation>,
{
    FnValidator(f)
}

/// Validator backed by a closure returning a future. See [`async_validator_fn`].
#[derive(Debug, Clone)]
pub struct AsyncFnValidator<F>(F);

impl<T, F, Fut, V> Validator<T> for AsyncFnValidator<F>
where
    F: Fn(&[&Choice<T>]) -> Fut + Send + Sync,
    Fut: Future<Output = V> + Send + 'static,
    V: Into<Validation>,
{
    fn validate<'a>(&'a self, selection: &'a [&'a Choice<T>]) -> BoxFuture<'a, Validation> {
        let pending = (self.0)(selection);
        async move { pending.await.into() }.boxed()
    }
}

/// Wrap a closure that returns an owned future.
///
/// The future cannot borrow the selection; copy out what it needs first.
pub fn async_validator_fn<T, F, Fut, V>(f: F) -> AsyncFnValidator<F>
where
    F: Fn(&[&Choice<T>]) -> Fut + Send + Sync,
    Fut: Future<Output = V> + Send + 'static,
    V: Into<Validation>,
{
    AsyncFnValidator(f)
}

/// Outcome of a submit attempt.
#[derive(Debug, Clone)]
pub enum Submission<T> {
    /// The state is [`Status::Done`](crate::Status::Done); take the answer with
    /// [`PromptState::into_answer`].
    Accepted(PromptState<T>),
    /// Still pending, with the reason in [`PromptState::error`].
    Rejected(PromptState<T>),
}

impl<T> Submission<T> {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    pub fn state(&self) -> &PromptState<T> {
        match self {
            Self::Accepted(state) | Self::Rejected(state) => state,
        }
    }

    pub fn into_state(self) -> PromptState<T> {
        match self {
            Self::Accepted(state) | Self::Rejected(state) => state,
        }
    }
}

//! Prompt state snapshots.

use serde::{Deserialize, Serialize};
use strum::Display;

use crate::bounds::Bounds;
use crate::choice::Choice;
use crate::error::PromptError;

/// Lifecycle of a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Pending,
    Done,
}

/// Immutable snapshot of a running prompt.
///
/// Every accepted action consumes the snapshot and returns the next one.
/// While [`Status::Pending`], `active` always points at a selectable entry.
#[derive(Debug, Clone)]
pub struct PromptState<T> {
    pub(crate) status: Status,
    pub(crate) items: Vec<Choice<T>>,
    pub(crate) active: usize,
    pub(crate) bounds: Bounds,
    pub(crate) error: Option<String>,
    pub(crate) show_help_tip: bool,
    pub(crate) first_render_done: bool,
}

impl<T> PromptState<T> {
    /// Create the initial state, with the cursor on the first selectable choice.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError::NoSelectableChoices`] when every choice is disabled
    /// or the list is empty.
    pub fn new(choices: impl IntoIterator<Item = Choice<T>>) -> Result<Self, PromptError> {
        let items: Vec<Choice<T>> = choices.into_iter().collect();
        let Some(bounds) = Bounds::resolve(&items) else {
            tracing::warn!(count = items.len(), "no selectable choices");
            return Err(PromptError::NoSelectableChoices);
        };

        Ok(Self {
            status: Status::Pending,
            items,
            active: bounds.first,
            bounds,
            error: None,
            show_help_tip: true,
            first_render_done: false,
        })
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_pending(&self) -> bool {
        self.status == Status::Pending
    }

    /// All entries in current order.
    pub fn items(&self) -> &[Choice<T>] {
        &self.items
    }

    /// Index of the highlighted entry.
    pub fn active(&self) -> usize {
        self.active
    }

    /// The highlighted entry.
    pub fn active_choice(&self) -> Option<&Choice<T>> {
        self.items.get(self.active)
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Inline error banner, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether the key help should still be shown.
    pub fn show_help_tip(&self) -> bool {
        self.show_help_tip
    }

    pub fn first_render_done(&self) -> bool {
        self.first_render_done
    }

    /// Checked entries in current list order.
    pub fn selection(&self) -> impl Iterator<Item = &Choice<T>> {
        self.items.iter().filter(|choice| choice.is_checked())
    }

    /// Values of the checked entries in current list order.
    pub fn selected_values(&self) -> Vec<&T> {
        self.selection().map(Choice::value).collect()
    }

    /// Whether a frame for this state should carry the "more choices" hint.
    pub fn needs_overflow_hint(&self, page_size: usize) -> bool {
        !self.first_render_done && self.items.len() > page_size
    }

    /// Latch that the overflow hint has been displayed once.
    pub fn mark_first_render_done(mut self) -> Self {
        self.first_render_done = true;
        self
    }

    /// Replace the error banner.
    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.error = Some(message.into());
        self
    }

    pub(crate) fn clear_error(mut self) -> Self {
        self.error = None;
        self
    }

    pub(crate) fn hide_help_tip(mut self) -> Self {
        self.show_help_tip = false;
        self
    }

    pub(crate) fn finish(mut self) -> Self {
        self.status = Status::Done;
        self.error = None;
        self
    }

    /// Consume the state, returning checked values in current list order.
    pub fn into_answer(self) -> Vec<T> {
        self.items
            .into_iter()
            .filter(Choice::is_checked)
            .map(Choice::into_value)
            .collect()
    }
}

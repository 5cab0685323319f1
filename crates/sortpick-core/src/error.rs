//! Error types for prompt construction and execution.

use thiserror::Error;

/// Errors that abort a prompt.
///
/// Runtime problems the user can fix (an empty required selection, a
/// rejected validation) are not errors: they are reported inline through
/// [`PromptState::error`](crate::PromptState::error).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PromptError {
    /// Every choice is disabled, so nothing could ever be highlighted.
    #[error("no selectable choices")]
    NoSelectableChoices,

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// The host aborted the prompt (Ctrl-C).
    #[error("Prompt aborted")]
    Aborted,

    /// The input source ended before the prompt was submitted.
    #[error("Input closed before the prompt was submitted")]
    InputClosed,
}

impl PromptError {
    /// Create a configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Whether this error happened while building the prompt, before any input.
    pub fn is_setup_error(&self) -> bool {
        matches!(self, Self::NoSelectableChoices | Self::InvalidConfig { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            PromptError::NoSelectableChoices.to_string(),
            "no selectable choices"
        );
        assert_eq!(
            PromptError::invalid_config("page size must be at least 1").to_string(),
            "Invalid configuration: page size must be at least 1"
        );
    }

    #[test]
    fn test_setup_errors() {
        assert!(PromptError::NoSelectableChoices.is_setup_error());
        assert!(PromptError::invalid_config("x").is_setup_error());
        assert!(!PromptError::Aborted.is_setup_error());
        assert!(!PromptError::InputClosed.is_setup_error());
    }
}

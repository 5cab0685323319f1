//! Prompt configuration types.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::error::PromptError;

/// Default number of visible rows.
pub const DEFAULT_PAGE_SIZE: usize = 7;

/// Key help shown until the first selection change.
pub const DEFAULT_INSTRUCTIONS: &str = "(Press <space> to select, <a> to toggle all, <i> to invert selection, <ctrl+up>/<ctrl+down> to reorder, and <enter> to proceed)";

/// What to show as key help next to the message.
///
/// Deserializes from `true` (default text), `false` (hidden) or a string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "InstructionsRepr", into = "InstructionsRepr")]
pub enum Instructions {
    #[default]
    Default,
    Hidden,
    Custom(String),
}

impl Instructions {
    /// The help text, or `None` when suppressed.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Default => Some(DEFAULT_INSTRUCTIONS),
            Self::Hidden => None,
            Self::Custom(text) => Some(text),
        }
    }
}

impl From<bool> for Instructions {
    fn from(show: bool) -> Self {
        if show { Self::Default } else { Self::Hidden }
    }
}

impl From<&str> for Instructions {
    fn from(text: &str) -> Self {
        Self::Custom(text.to_string())
    }
}

impl From<String> for Instructions {
    fn from(text: String) -> Self {
        Self::Custom(text)
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum InstructionsRepr {
    Flag(bool),
    Text(String),
}

impl From<InstructionsRepr> for Instructions {
    fn from(repr: InstructionsRepr) -> Self {
        match repr {
            InstructionsRepr::Flag(flag) => flag.into(),
            InstructionsRepr::Text(text) => text.into(),
        }
    }
}

impl From<Instructions> for InstructionsRepr {
    fn from(instructions: Instructions) -> Self {
        match instructions {
            Instructions::Default => Self::Flag(true),
            Instructions::Hidden => Self::Flag(false),
            Instructions::Custom(text) => Self::Text(text),
        }
    }
}

/// Configuration for a prompt.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct PromptConfig {
    /// Prompt label.
    pub message: String,

    /// Number of visible rows.
    #[builder(default = "DEFAULT_PAGE_SIZE")]
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Key help shown beside the message.
    #[builder(default)]
    #[serde(default)]
    pub instructions: Instructions,

    /// Rotate the list when moving an item past either end.
    #[builder(default = "false")]
    #[serde(default)]
    pub sorting_loop: bool,

    /// Refuse to submit an empty selection.
    #[builder(default = "false")]
    #[serde(default)]
    pub required: bool,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl PromptConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        match &self.message {
            Some(message) if message.trim().is_empty() => {
                return Err("Message cannot be empty".to_string());
            }
            Some(_) => {}
            None => return Err("Message is required".to_string()),
        }
        if self.page_size == Some(0) {
            return Err("Page size must be at least 1".to_string());
        }
        Ok(())
    }
}

impl From<PromptConfigBuilderError> for PromptError {
    fn from(err: PromptConfigBuilderError) -> Self {
        PromptError::invalid_config(err.to_string())
    }
}

impl PromptConfig {
    /// Create a new prompt config builder.
    pub fn builder() -> PromptConfigBuilder {
        PromptConfigBuilder::default()
    }

    /// Create a config with defaults for everything but the message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            page_size: DEFAULT_PAGE_SIZE,
            instructions: Instructions::Default,
            sorting_loop: false,
            required: false,
        }
    }

    /// Check a config that did not come through the builder (e.g. deserialized).
    ///
    /// # Errors
    ///
    /// Returns [`PromptError::InvalidConfig`] for an empty message or a zero page size.
    pub fn validate(&self) -> Result<(), PromptError> {
        if self.message.trim().is_empty() {
            return Err(PromptError::invalid_config("Message cannot be empty"));
        }
        if self.page_size == 0 {
            return Err(PromptError::invalid_config("Page size must be at least 1"));
        }
        Ok(())
    }
}

//! Selectable entries of the prompt.

use std::fmt;

use compact_str::{CompactString, ToCompactString};
use serde::{Deserialize, Serialize};

/// Label shown next to a disabled entry that carries no reason.
pub const DEFAULT_DISABLED_LABEL: &str = "(disabled)";

/// Whether an entry can be interacted with.
///
/// Deserializes from `false`/`true` or from a reason string, which is how
/// prompt files describe it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "DisabledRepr", into = "DisabledRepr")]
pub enum Disabled {
    /// The entry is selectable.
    #[default]
    Enabled,
    /// The entry is disabled without explanation.
    Disabled,
    /// The entry is disabled, with a reason shown to the user.
    Reason(String),
}

impl Disabled {
    /// Check if the entry is selectable.
    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Enabled)
    }

    /// Text shown beside a disabled entry, `None` when enabled.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Enabled => None,
            Self::Disabled => Some(DEFAULT_DISABLED_LABEL),
            Self::Reason(reason) => Some(reason),
        }
    }
}

impl From<bool> for Disabled {
    fn from(disabled: bool) -> Self {
        if disabled { Self::Disabled } else { Self::Enabled }
    }
}

impl From<&str> for Disabled {
    fn from(reason: &str) -> Self {
        Self::Reason(reason.to_string())
    }
}

impl From<String> for Disabled {
    fn from(reason: String) -> Self {
        Self::Reason(reason)
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum DisabledRepr {
    Flag(bool),
    Reason(String),
}

impl From<DisabledRepr> for Disabled {
    fn from(repr: DisabledRepr) -> Self {
        match repr {
            DisabledRepr::Flag(flag) => flag.into(),
            DisabledRepr::Reason(reason) => reason.into(),
        }
    }
}

impl From<Disabled> for DisabledRepr {
    fn from(disabled: Disabled) -> Self {
        match disabled {
            Disabled::Enabled => Self::Flag(false),
            Disabled::Disabled => Self::Flag(true),
            Disabled::Reason(reason) => Self::Reason(reason),
        }
    }
}

/// One row of the prompt.
///
/// The value is opaque: it is never compared, only carried along and
/// handed back in list order once the prompt is submitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Choice<T> {
    value: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    label: Option<CompactString>,
    #[serde(default, skip_serializing_if = "Disabled::is_enabled")]
    disabled: Disabled,
    #[serde(default)]
    checked: bool,
}

impl<T> Choice<T> {
    /// Create an enabled, unchecked choice.
    pub fn new(value: T) -> Self {
        Self {
            value,
            label: None,
            disabled: Disabled::Enabled,
            checked: false,
        }
    }

    /// Set the display label.
    pub fn with_label(mut self, label: impl Into<CompactString>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the initial checked flag.
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Set the disabled state.
    pub fn with_disabled(mut self, disabled: impl Into<Disabled>) -> Self {
        self.disabled = disabled.into();
        self
    }

    /// Disable the choice.
    pub fn disabled(self) -> Self {
        self.with_disabled(Disabled::Disabled)
    }

    /// Disable the choice and explain why.
    pub fn disabled_because(self, reason: impl Into<String>) -> Self {
        self.with_disabled(Disabled::Reason(reason.into()))
    }

    /// The carried value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Consume the choice, returning its value.
    pub fn into_value(self) -> T {
        self.value
    }

    /// The explicit label, if one was set.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// The disabled state.
    pub fn disabled_state(&self) -> &Disabled {
        &self.disabled
    }

    /// The raw checked flag. Prefer [`Choice::is_checked`].
    pub fn checked_flag(&self) -> bool {
        self.checked
    }

    /// A choice can be highlighted and checked only when it is not disabled.
    pub fn is_selectable(&self) -> bool {
        self.disabled.is_enabled()
    }

    /// Checked and selectable.
    pub fn is_checked(&self) -> bool {
        self.is_selectable() && self.checked
    }

    /// Flip the checked flag. Disabled choices come back unchanged.
    pub fn toggle(self) -> Self {
        let checked = !self.checked;
        self.set_checked(checked)
    }

    /// Set the checked flag. Disabled choices come back unchanged.
    pub fn set_checked(mut self, checked: bool) -> Self {
        if self.is_selectable() {
            self.checked = checked;
        }
        self
    }
}

impl<T: fmt::Display> Choice<T> {
    /// The label, falling back to the value's string form.
    pub fn display_label(&self) -> CompactString {
        match &self.label {
            Some(label) => label.clone(),
            None => self.value.to_compact_string(),
        }
    }
}

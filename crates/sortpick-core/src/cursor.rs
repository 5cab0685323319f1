//! Cursor movement among selectable entries.

use crate::state::PromptState;

/// Direction of cursor navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    Prev,
    Next,
}

impl<T> PromptState<T> {
    /// Move the cursor to the neighboring selectable entry.
    ///
    /// Disabled entries are skipped. The cursor stops at the bounds instead of
    /// wrapping, and an inline error stays visible.
    pub fn navigate(mut self, direction: NavDirection) -> Self {
        let at_edge = match direction {
            NavDirection::Prev => self.active == self.bounds.first,
            NavDirection::Next => self.active == self.bounds.last,
        };
        if at_edge || self.items.is_empty() {
            return self;
        }

        let len = self.items.len();
        let mut next = self.active;
        loop {
            next = match direction {
                NavDirection::Prev => (next + len - 1) % len,
                NavDirection::Next => (next + 1) % len,
            };
            if self.items[next].is_selectable() {
                break;
            }
        }

        self.active = next;
        self
    }
}

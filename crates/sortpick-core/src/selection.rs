//! Checking and unchecking entries.
//!
//! Each mutation dismisses the inline error and hides the key help.

use crate::choice::Choice;
use crate::state::PromptState;

impl<T> PromptState<T> {
    /// Toggle the highlighted entry.
    pub fn toggle_active(mut self) -> Self {
        let active = self.active;
        self.items = self
            .items
            .into_iter()
            .enumerate()
            .map(|(index, choice)| if index == active { choice.toggle() } else { choice })
            .collect();
        self.clear_error().hide_help_tip()
    }

    /// Check every selectable entry if any of them is unchecked, otherwise
    /// uncheck them all.
    pub fn toggle_all(mut self) -> Self {
        let any_unchecked = self
            .items
            .iter()
            .any(|choice| choice.is_selectable() && !choice.checked_flag());
        self.items = self
            .items
            .into_iter()
            .map(|choice| choice.set_checked(any_unchecked))
            .collect();
        self.clear_error().hide_help_tip()
    }

    /// Toggle every selectable entry independently.
    pub fn invert_all(mut self) -> Self {
        self.items = self.items.into_iter().map(Choice::toggle).collect();
        self.clear_error().hide_help_tip()
    }

    /// Jump to the 1-based `position` and toggle it.
    ///
    /// Positions outside the list or pointing at a disabled entry leave the
    /// state untouched.
    pub fn toggle_at_position(mut self, position: u8) -> Self {
        let Some(index) = usize::from(position).checked_sub(1) else {
            return self;
        };
        match self.items.get(index) {
            Some(choice) if choice.is_selectable() => {
                self.active = index;
                self.toggle_active()
            }
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mixed() -> PromptState<u32> {
        PromptState::new(vec![
            Choice::new(1).checked(true),
            Choice::new(2),
            Choice::new(3).disabled(),
            Choice::new(4).checked(true).disabled_because("locked"),
            Choice::new(5),
        ])
        .unwrap()
    }

    fn flags(state: &PromptState<u32>) -> Vec<bool> {
        state.items().iter().map(Choice::checked_flag).collect()
    }

    #[test]
    fn test_toggle_active() {
        let state = mixed().toggle_active();
        assert_eq!(flags(&state), vec![false, false, false, true, false]);
        assert!(!state.show_help_tip());

        let state = state.toggle_active();
        assert_eq!(flags(&state), vec![true, false, false, true, false]);
    }

    #[test]
    fn test_toggle_active_clears_error() {
        let state = mixed().with_error("boom").toggle_active();
        assert!(state.error().is_none());
    }

    #[test]
    fn test_toggle_all_checks_when_any_unchecked() {
        let state = mixed().toggle_all();
        assert_eq!(flags(&state), vec![true, true, false, true, true]);

        let state = state.toggle_all();
        assert_eq!(flags(&state), vec![false, false, false, true, false]);
    }

    #[test]
    fn test_invert_all_leaves_disabled() {
        let state = mixed().invert_all();
        assert_eq!(flags(&state), vec![false, true, false, true, true]);

        let state = state.invert_all();
        assert_eq!(flags(&state), vec![true, false, false, true, false]);
    }

    #[test]
    fn test_toggle_at_position() {
        let state = mixed().toggle_at_position(5);
        assert_eq!(state.active(), 4);
        assert_eq!(flags(&state), vec![true, false, false, true, true]);
    }

    #[test]
    fn test_toggle_at_position_noops() {
        let state = mixed().with_error("stay");

        let state = state.toggle_at_position(3);
        assert_eq!(state.active(), 0);
        assert_eq!(state.error(), Some("stay"));

        let state = state.toggle_at_position(9);
        assert_eq!(state.active(), 0);

        let state = state.toggle_at_position(0);
        assert_eq!(state.active(), 0);
        assert_eq!(flags(&state), flags(&mixed()));
        assert!(state.show_help_tip());
    }
}

//! Key classification for the prompt.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use sortpick_core::{Action, MoveDirection, NavDirection};

/// What a key press means to the host loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Feed the action to the prompt.
    Prompt(Action),
    /// Stop the prompt without an answer (Ctrl-C).
    Abort,
}

impl KeyAction {
    /// Convert a key event to an action.
    ///
    /// Arrows only navigate without modifiers and only reorder with Ctrl;
    /// any other combination is ignored.
    pub fn from_key_event(event: KeyEvent) -> Self {
        let action = match (event.code, event.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => return KeyAction::Abort,

            // Submit
            (KeyCode::Enter, _) => Action::Submit,

            // Navigation
            (KeyCode::Up, KeyModifiers::NONE) => Action::Navigate(NavDirection::Prev),
            (KeyCode::Down, KeyModifiers::NONE) => Action::Navigate(NavDirection::Next),

            // Selection
            (KeyCode::Char(' '), KeyModifiers::NONE) => Action::ToggleActive,
            (KeyCode::Char('a'), KeyModifiers::NONE) => Action::ToggleAll,
            (KeyCode::Char('i'), KeyModifiers::NONE) => Action::InvertAll,
            (KeyCode::Char(digit @ '1'..='9'), KeyModifiers::NONE) => {
                Action::ToggleAtPosition(digit as u8 - b'0')
            }

            // Reordering
            (KeyCode::Up, KeyModifiers::CONTROL) => Action::Move(MoveDirection::Up),
            (KeyCode::Down, KeyModifiers::CONTROL) => Action::Move(MoveDirection::Down),

            _ => Action::None,
        };
        KeyAction::Prompt(action)
    }
}

/// Key binding for display in help.
pub struct KeyBinding {
    pub keys: &'static str,
    pub description: &'static str,
}

/// All key bindings, in classification order.
pub fn get_key_bindings() -> Vec<KeyBinding> {
    vec![
        KeyBinding { keys: "Enter", description: "Submit" },
        KeyBinding { keys: "↑/↓", description: "Move cursor" },
        KeyBinding { keys: "Space", description: "Toggle item" },
        KeyBinding { keys: "a", description: "Select/deselect all" },
        KeyBinding { keys: "i", description: "Invert selection" },
        KeyBinding { keys: "1-9", description: "Jump to item and toggle" },
        KeyBinding { keys: "Ctrl-↑/↓", description: "Move item up/down" },
        KeyBinding { keys: "Ctrl-c", description: "Abort" },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyAction {
        KeyAction::from_key_event(KeyEvent::new(code, modifiers))
    }

    fn action(code: KeyCode, modifiers: KeyModifiers) -> Action {
        match key(code, modifiers) {
            KeyAction::Prompt(action) => action,
            KeyAction::Abort => panic!("unexpected abort"),
        }
    }

    #[test]
    fn test_keybinding_contract() {
        assert_eq!(action(KeyCode::Enter, KeyModifiers::NONE), Action::Submit);
        assert_eq!(action(KeyCode::Up, KeyModifiers::NONE), Action::Navigate(NavDirection::Prev));
        assert_eq!(action(KeyCode::Down, KeyModifiers::NONE), Action::Navigate(NavDirection::Next));
        assert_eq!(action(KeyCode::Char(' '), KeyModifiers::NONE), Action::ToggleActive);
        assert_eq!(action(KeyCode::Char('a'), KeyModifiers::NONE), Action::ToggleAll);
        assert_eq!(action(KeyCode::Char('i'), KeyModifiers::NONE), Action::InvertAll);
        assert_eq!(action(KeyCode::Up, KeyModifiers::CONTROL), Action::Move(MoveDirection::Up));
        assert_eq!(action(KeyCode::Down, KeyModifiers::CONTROL), Action::Move(MoveDirection::Down));
    }

    #[test]
    fn test_digits() {
        assert_eq!(action(KeyCode::Char('1'), KeyModifiers::NONE), Action::ToggleAtPosition(1));
        assert_eq!(action(KeyCode::Char('9'), KeyModifiers::NONE), Action::ToggleAtPosition(9));
        assert_eq!(action(KeyCode::Char('0'), KeyModifiers::NONE), Action::None);
    }

    #[test]
    fn test_unrecognized_keys() {
        assert_eq!(action(KeyCode::Up, KeyModifiers::SHIFT), Action::None);
        assert_eq!(action(KeyCode::Char('A'), KeyModifiers::SHIFT), Action::None);
        assert_eq!(action(KeyCode::Char('a'), KeyModifiers::CONTROL), Action::None);
        assert_eq!(action(KeyCode::Char('x'), KeyModifiers::NONE), Action::None);
        assert_eq!(action(KeyCode::Esc, KeyModifiers::NONE), Action::None);
        assert_eq!(action(KeyCode::Left, KeyModifiers::NONE), Action::None);
    }

    #[test]
    fn test_abort() {
        assert_eq!(key(KeyCode::Char('c'), KeyModifiers::CONTROL), KeyAction::Abort);
        assert_ne!(key(KeyCode::Char('c'), KeyModifiers::NONE), KeyAction::Abort);
    }

    #[test]
    fn test_key_bindings_listed() {
        let bindings = get_key_bindings();
        assert!(bindings.iter().any(|b| b.keys == "Space"));
        assert!(bindings.iter().any(|b| b.keys == "Ctrl-↑/↓"));
    }
}

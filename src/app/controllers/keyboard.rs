use crate::app::domain::messages::{KeyCode, KeyInput};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    ToggleTheme,
    EnableFocusRing,
}

/// Map a key press to a page-level shortcut.
pub fn shortcut_for(input: &KeyInput) -> Option<KeyAction> {
    match input.key {
        KeyCode::Tab => Some(KeyAction::EnableFocusRing),
        KeyCode::Char('t') if !(input.ctrl || input.meta || input.alt) && !input.in_text_input => {
            Some(KeyAction::ToggleTheme)
        }
        _ => None,
    }
}

/// Visible focus ring, on while navigating with the keyboard.
#[derive(Debug, Default)]
pub struct FocusMode {
    keyboard: bool,
}

impl FocusMode {
    /// Returns true if the mode changed.
    pub fn set_keyboard(&mut self, keyboard: bool) -> bool {
        let changed = self.keyboard != keyboard;
        self.keyboard = keyboard;
        changed
    }

    pub fn is_keyboard(&self) -> bool {
        self.keyboard
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(key: KeyCode) -> KeyInput {
        KeyInput {
            key,
            ctrl: false,
            meta: false,
            alt: false,
            in_text_input: false,
        }
    }

    #[test]
    fn test_plain_t_toggles() {
        assert_eq!(shortcut_for(&key(KeyCode::Char('t'))), Some(KeyAction::ToggleTheme));
    }

    #[test]
    fn test_t_ignored_in_text_input() {
        let input = KeyInput {
            in_text_input: true,
            ..key(KeyCode::Char('t'))
        };
        assert_eq!(shortcut_for(&input), None);
    }

    #[test]
    fn test_t_with_modifier_ignored() {
        for input in [
            KeyInput { ctrl: true, ..key(KeyCode::Char('t')) },
            KeyInput { meta: true, ..key(KeyCode::Char('t')) },
            KeyInput { alt: true, ..key(KeyCode::Char('t')) },
        ] {
            assert_eq!(shortcut_for(&input), None);
        }
    }

    #[test]
    fn test_uppercase_and_other_keys() {
        assert_eq!(shortcut_for(&key(KeyCode::Char('T'))), None);
        assert_eq!(shortcut_for(&key(KeyCode::Other)), None);
    }

    #[test]
    fn test_tab_enables_focus_ring_even_in_inputs() {
        let input = KeyInput {
            in_text_input: true,
            ..key(KeyCode::Tab)
        };
        assert_eq!(shortcut_for(&input), Some(KeyAction::EnableFocusRing));
    }

    #[test]
    fn test_focus_mode_reports_changes() {
        let mut mode = FocusMode::default();
        assert!(mode.set_keyboard(true));
        assert!(!mode.set_keyboard(true));
        assert!(mode.is_keyboard());
        assert!(mode.set_keyboard(false));
    }
}

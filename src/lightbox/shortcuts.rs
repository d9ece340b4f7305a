// SPDX-License-Identifier: MPL-2.0
//! Window-level shortcuts, active whether or not an overlay is open.
//!
//! | Key | Action |
//! |---|---|
//! | `F` | toggle fit-to-screen |
//! | `Alt+N` | toggle filename labels |
//! | `Alt+D` | toggle folder entries |

use iced::keyboard::{Key, Modifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    ToggleFitToScreen,
    ToggleFilenames,
    ToggleFolders,
}

/// Matches an unmodified key press against the shortcut table.
#[must_use]
pub fn match_shortcut(key: &Key, modifiers: Modifiers) -> Option<Shortcut> {
    let Key::Character(c) = key else {
        return None;
    };
    if modifiers.control() || modifiers.logo() {
        return None;
    }

    match (c.to_lowercase().as_str(), modifiers.alt()) {
        ("f", false) => Some(Shortcut::ToggleFitToScreen),
        ("n", true) => Some(Shortcut::ToggleFilenames),
        ("d", true) => Some(Shortcut::ToggleFolders),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::keyboard::key::Named;

    fn char_key(c: &str) -> Key {
        Key::Character(c.into())
    }

    #[test]
    fn plain_f_toggles_fit() {
        assert_eq!(
            match_shortcut(&char_key("f"), Modifiers::empty()),
            Some(Shortcut::ToggleFitToScreen)
        );
        assert_eq!(
            match_shortcut(&char_key("F"), Modifiers::SHIFT),
            Some(Shortcut::ToggleFitToScreen)
        );
    }

    #[test]
    fn alt_combinations() {
        assert_eq!(
            match_shortcut(&char_key("n"), Modifiers::ALT),
            Some(Shortcut::ToggleFilenames)
        );
        assert_eq!(
            match_shortcut(&char_key("d"), Modifiers::ALT),
            Some(Shortcut::ToggleFolders)
        );
        assert_eq!(match_shortcut(&char_key("n"), Modifiers::empty()), None);
        assert_eq!(match_shortcut(&char_key("f"), Modifiers::ALT), None);
    }

    #[test]
    fn ctrl_and_logo_disable_shortcuts() {
        assert_eq!(match_shortcut(&char_key("f"), Modifiers::CTRL), None);
        assert_eq!(match_shortcut(&char_key("n"), Modifiers::ALT | Modifiers::LOGO), None);
    }

    #[test]
    fn named_keys_never_match() {
        assert_eq!(
            match_shortcut(&Key::Named(Named::Escape), Modifiers::empty()),
            None
        );
    }
}

//! # Keybindings
//!
//! Keys are matched by name ("j", "enter", "ctrl+c") so a binding can list
//! several aliases and the help overlay can print them as-is.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A set of key names plus the text shown for them in the help overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    pub keys: &'static [&'static str],
    pub help_key: &'static str,
    pub help_desc: &'static str,
}

impl KeyBinding {
    pub const fn new(
        keys: &'static [&'static str],
        help_key: &'static str,
        help_desc: &'static str,
    ) -> Self {
        Self {
            keys,
            help_key,
            help_desc,
        }
    }

    pub fn matches(&self, key: &KeyEvent) -> bool {
        key_name(key).is_some_and(|name| self.keys.contains(&name.as_str()))
    }
}

/// Canonical name of a key press. Shift is folded into the character itself,
/// so `G` arrives as "G" rather than "shift+g".
pub fn key_name(key: &KeyEvent) -> Option<String> {
    let base = match key.code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "enter".to_string(),
        KeyCode::Esc => "esc".to_string(),
        KeyCode::Backspace => "backspace".to_string(),
        KeyCode::Tab => "tab".to_string(),
        KeyCode::BackTab => "shift+tab".to_string(),
        KeyCode::Up => "up".to_string(),
        KeyCode::Down => "down".to_string(),
        KeyCode::Left => "left".to_string(),
        KeyCode::Right => "right".to_string(),
        KeyCode::Home => "home".to_string(),
        KeyCode::End => "end".to_string(),
        KeyCode::PageUp => "pgup".to_string(),
        KeyCode::PageDown => "pgdown".to_string(),
        _ => return None,
    };
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        Some(format!("ctrl+{base}"))
    } else {
        Some(base)
    }
}

// Global
pub const QUIT: KeyBinding = KeyBinding::new(&["q", "ctrl+c"], "q", "quit");
pub const HELP: KeyBinding = KeyBinding::new(&["?"], "?", "toggle help");
pub const BACK: KeyBinding = KeyBinding::new(&["esc"], "esc", "back");
pub const TAB: KeyBinding = KeyBinding::new(&["tab"], "tab", "switch focus");
pub const VIEW_1: KeyBinding = KeyBinding::new(&["1"], "1", "subscribers");
pub const VIEW_2: KeyBinding = KeyBinding::new(&["2"], "2", "campaigns");
pub const VIEW_3: KeyBinding = KeyBinding::new(&["3"], "3", "automations");
pub const VIEW_4: KeyBinding = KeyBinding::new(&["4"], "4", "groups");
pub const VIEW_5: KeyBinding = KeyBinding::new(&["5"], "5", "forms");

// Navigation
pub const UP: KeyBinding = KeyBinding::new(&["k", "up"], "↑/k", "move up");
pub const DOWN: KeyBinding = KeyBinding::new(&["j", "down"], "↓/j", "move down");
pub const LEFT: KeyBinding = KeyBinding::new(&["h", "left"], "←/h", "previous tab");
pub const RIGHT: KeyBinding = KeyBinding::new(&["l", "right"], "→/l", "next tab");
pub const TOP: KeyBinding = KeyBinding::new(&["g", "home"], "g", "go to top");
pub const BOTTOM: KeyBinding = KeyBinding::new(&["G", "end"], "G", "go to bottom");
pub const ENTER: KeyBinding = KeyBinding::new(&["enter"], "enter", "open details");
pub const REFRESH: KeyBinding = KeyBinding::new(&["r"], "r", "refresh");
pub const CLOSE_DETAIL: KeyBinding =
    KeyBinding::new(&["esc", "backspace", "q"], "esc", "close details");

/// Bindings listed in the help overlay, grouped by section.
pub fn help_sections() -> Vec<(&'static str, Vec<KeyBinding>)> {
    vec![
        ("Global", vec![QUIT, HELP, TAB]),
        ("Views", vec![VIEW_1, VIEW_2, VIEW_3, VIEW_4, VIEW_5]),
        (
            "Navigation",
            vec![UP, DOWN, TOP, BOTTOM, ENTER, CLOSE_DETAIL, REFRESH, LEFT, RIGHT],
        ),
    ]
}

#[cfg(test)]
pub(crate) fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[cfg(test)]
pub(crate) fn char_key(c: char) -> KeyEvent {
    press(KeyCode::Char(c))
}

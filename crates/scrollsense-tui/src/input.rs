use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use scrollsense_core::HeaderBehavior;

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    LineDown,
    LineUp,
    HalfPageDown,
    HalfPageUp,
    PageDown,
    PageUp,
    Top,
    Bottom,
    SetBehavior(HeaderBehavior),
    Reset,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) | (KeyCode::Esc, _) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) => Action::LineDown,
        (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) => Action::LineUp,
        (KeyCode::Char('d'), KeyModifiers::CONTROL) => Action::HalfPageDown,
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => Action::HalfPageUp,
        (KeyCode::Char('f'), KeyModifiers::CONTROL) | (KeyCode::PageDown, _) => Action::PageDown,
        (KeyCode::Char('b'), KeyModifiers::CONTROL) | (KeyCode::PageUp, _) => Action::PageUp,
        (KeyCode::Char('g'), KeyModifiers::NONE) | (KeyCode::Home, _) => Action::Top,
        (KeyCode::Char('G'), _) | (KeyCode::End, _) => Action::Bottom,

        (KeyCode::Char('1'), _) => Action::SetBehavior(HeaderBehavior::HideOnScroll),
        (KeyCode::Char('2'), _) => Action::SetBehavior(HeaderBehavior::AlwaysFixed),
        (KeyCode::Char('3'), _) => Action::SetBehavior(HeaderBehavior::AlwaysTop),
        (KeyCode::Char('r'), KeyModifiers::NONE) => Action::Reset,

        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(handle_key_event(key(KeyCode::Char('j'), KeyModifiers::NONE)), Action::LineDown);
        assert_eq!(handle_key_event(key(KeyCode::Up, KeyModifiers::NONE)), Action::LineUp);
        assert_eq!(
            handle_key_event(key(KeyCode::Char('d'), KeyModifiers::CONTROL)),
            Action::HalfPageDown
        );
        assert_eq!(handle_key_event(key(KeyCode::Char('G'), KeyModifiers::SHIFT)), Action::Bottom);
    }

    #[test]
    fn test_behavior_keys() {
        assert_eq!(
            handle_key_event(key(KeyCode::Char('2'), KeyModifiers::NONE)),
            Action::SetBehavior(HeaderBehavior::AlwaysFixed)
        );
        assert_eq!(handle_key_event(key(KeyCode::Char('r'), KeyModifiers::NONE)), Action::Reset);
        assert_eq!(handle_key_event(key(KeyCode::Char('x'), KeyModifiers::NONE)), Action::None);
    }
}

//! Keybinding definitions for the TUI.
//!
//! While a text field is being edited, printable keys become input; the
//! navigation bindings apply otherwise.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    NextView,
    PrevView,
    SwitchView(usize),
    MoveUp,
    MoveDown,
    Increase,
    Decrease,
    Toggle,
    Confirm,
    Cancel,
    Submit,
    CheckHealth,
    OpenHelp,
    Input(char),
    Backspace,
}

pub fn map_key(event: KeyEvent, editing: bool) -> Option<Action> {
    let KeyEvent { code, modifiers, .. } = event;

    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    if editing {
        return match code {
            KeyCode::Char(c) => Some(Action::Input(c)),
            KeyCode::Backspace => Some(Action::Backspace),
            KeyCode::Enter => Some(Action::Confirm),
            KeyCode::Esc => Some(Action::Cancel),
            KeyCode::Tab => Some(Action::NextView),
            KeyCode::BackTab => Some(Action::PrevView),
            KeyCode::Up => Some(Action::MoveUp),
            KeyCode::Down => Some(Action::MoveDown),
            _ => None,
        };
    }

    match code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('?') => Some(Action::OpenHelp),
        KeyCode::Char('s') => Some(Action::Submit),
        KeyCode::Char('H') => Some(Action::CheckHealth),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(Action::Increase),
        KeyCode::Char('-') => Some(Action::Decrease),
        KeyCode::Enter | KeyCode::Char('i') => Some(Action::Confirm),
        KeyCode::Esc => Some(Action::Cancel),
        KeyCode::Tab => Some(Action::NextView),
        KeyCode::BackTab => Some(Action::PrevView),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::Decrease),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::Increase),
        KeyCode::Char(' ') => Some(Action::Toggle),
        KeyCode::Char(c @ '1'..='4') => Some(Action::SwitchView(c as usize - '1' as usize)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn editing_turns_letters_into_input() {
        assert_eq!(map_key(key(KeyCode::Char('q')), true), Some(Action::Input('q')));
        assert_eq!(map_key(key(KeyCode::Char('q')), false), Some(Action::Quit));
    }

    #[test]
    fn ctrl_c_quits_in_both_modes() {
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(event, true), Some(Action::Quit));
        assert_eq!(map_key(event, false), Some(Action::Quit));
    }

    #[test]
    fn digits_switch_tabs() {
        assert_eq!(map_key(key(KeyCode::Char('1')), false), Some(Action::SwitchView(0)));
        assert_eq!(map_key(key(KeyCode::Char('4')), false), Some(Action::SwitchView(3)));
        assert_eq!(map_key(key(KeyCode::Char('5')), false), None);
    }

    #[test]
    fn escape_leaves_editing() {
        assert_eq!(map_key(key(KeyCode::Esc), true), Some(Action::Cancel));
        assert_eq!(map_key(key(KeyCode::Backspace), true), Some(Action::Backspace));
    }
}

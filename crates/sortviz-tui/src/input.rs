use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use sortviz_core::Speed;

use crate::app::{App, Mode};
use crate::keymap::Keymap;

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Start,
    PauseResume,
    Reset,
    NextAlgorithm,
    PrevAlgorithm,
    SetSpeed(Speed),
    CycleSpeed,
    ShowHelp,
    GrowArray,
    ShrinkArray,
    ExitMode,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App, keymap: &Keymap) -> Action {
    match app.mode {
        Mode::Help => handle_help_mode(key),
        Mode::Normal => keymap.lookup(&key).unwrap_or(Action::None),
    }
}

/// Any key closes the help popup; Ctrl+C still quits
fn handle_help_mode(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        _ => Action::ExitMode,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortviz_core::AppConfig;
    use std::sync::Arc;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_normal_mode_uses_keymap() {
        let app = App::new(Arc::new(AppConfig::default()), Default::default()).unwrap();
        let keymap = Keymap::default();

        assert_eq!(handle_key_event(key(KeyCode::Enter), &app, &keymap), Action::Start);
        assert_eq!(handle_key_event(key(KeyCode::Char('r')), &app, &keymap), Action::Reset);
        assert_eq!(handle_key_event(key(KeyCode::Char('z')), &app, &keymap), Action::None);
    }

    #[test]
    fn test_help_mode_closes_on_any_key() {
        let mut app = App::new(Arc::new(AppConfig::default()), Default::default()).unwrap();
        app.mode = Mode::Help;
        let keymap = Keymap::default();

        assert_eq!(handle_key_event(key(KeyCode::Char('q')), &app, &keymap), Action::ExitMode);
        assert_eq!(handle_key_event(key(KeyCode::Enter), &app, &keymap), Action::ExitMode);
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), &app, &keymap),
            Action::Quit
        );
    }
}

//! Input handling - maps terminal events to actions.

use crate::app::actions::Action;
use crossterm::event::{Event as CtEvent, KeyCode, KeyEvent, KeyEventKind};
use swatch::Dir;

pub fn map_input_to_action(ev: &CtEvent) -> Option<Action> {
    match ev {
        CtEvent::Resize(_, _) => Some(Action::Resize),
        CtEvent::Mouse(m) => Some(Action::Mouse(*m)),
        CtEvent::Key(k) if k.kind == KeyEventKind::Press => handle_key(*k),
        _ => None,
    }
}

fn handle_key(k: KeyEvent) -> Option<Action> {
    match k.code {
        // Quit
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Esc => Some(Action::Quit),

        // Grid navigation - vim style
        KeyCode::Up | KeyCode::Char('k') => Some(Action::Move(Dir::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::Move(Dir::Down)),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::Move(Dir::Left)),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::Move(Dir::Right)),

        // Palette switching - Tab cycles, digits jump
        KeyCode::Tab => Some(Action::NextPalette),
        KeyCode::BackTab => Some(Action::PrevPalette),
        KeyCode::Char(c @ '1'..='9') => Some(Action::SetPalette(c as usize - '1' as usize)),

        // Actions
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Select),
        KeyCode::Char('a') => Some(Action::ToggleAlpha),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> CtEvent {
        CtEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(map_input_to_action(&press(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(map_input_to_action(&press(KeyCode::Esc)), Some(Action::Quit));
    }

    #[test]
    fn test_vim_navigation() {
        assert_eq!(
            map_input_to_action(&press(KeyCode::Char('j'))),
            Some(Action::Move(Dir::Down))
        );
        assert_eq!(
            map_input_to_action(&press(KeyCode::Left)),
            Some(Action::Move(Dir::Left))
        );
    }

    #[test]
    fn test_digit_jumps_to_palette() {
        assert_eq!(map_input_to_action(&press(KeyCode::Char('3'))), Some(Action::SetPalette(2)));
    }

    #[test]
    fn test_select_keys() {
        assert_eq!(map_input_to_action(&press(KeyCode::Enter)), Some(Action::Select));
        assert_eq!(map_input_to_action(&press(KeyCode::Char(' '))), Some(Action::Select));
    }

    #[test]
    fn test_release_events_are_ignored() {
        let k = KeyEvent::new_with_kind(
            KeyCode::Char('q'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        );
        assert_eq!(map_input_to_action(&CtEvent::Key(k)), None);
    }
}

//! Maps crossterm events to UI intents. Everything else is filtered out.

use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    /// Select the card under the keyboard cursor.
    Activate,
    /// Select the card under a mouse click, if any.
    ClickAt { column: u16, row: u16 },
    ToggleSound,
    NewRound,
    Quit,
}

pub fn map_key(key: KeyEvent) -> Option<UiEvent> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(UiEvent::Quit);
    }
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => Some(UiEvent::CursorLeft),
        KeyCode::Right | KeyCode::Char('l') => Some(UiEvent::CursorRight),
        KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::CursorUp),
        KeyCode::Down | KeyCode::Char('j') => Some(UiEvent::CursorDown),
        KeyCode::Enter | KeyCode::Char(' ') => Some(UiEvent::Activate),
        KeyCode::Char('m') => Some(UiEvent::ToggleSound),
        KeyCode::Char('r') => Some(UiEvent::NewRound),
        KeyCode::Char('q') | KeyCode::Esc => Some(UiEvent::Quit),
        _ => None,
    }
}

pub fn map_mouse(mouse: MouseEvent) -> Option<UiEvent> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(UiEvent::ClickAt {
            column: mouse.column,
            row: mouse.row,
        }),
        _ => None,
    }
}

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind,
};
use log::warn;
use std::time::Duration;

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    // Handled regardless of mode
    ForceQuit, // Ctrl+C
    Resize,

    // Composer editing
    Submit,
    InputChar(char),
    Paste(String), // Bracketed paste - preserves newlines
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    CursorHome,
    CursorEnd,
    ToggleSearch, // Ctrl+T
    Attach,       // Ctrl+U

    // Page navigation
    Escape,
    Tab,
    ScrollUp,
    ScrollDown,
    ScrollPageUp,
    ScrollPageDown,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: Duration) -> Option<TuiEvent> {
    match event::poll(timeout) {
        Ok(true) => {}
        Ok(false) => return None,
        Err(e) => {
            warn!("Event poll failed: {}", e);
            return None;
        }
    }
    match event::read() {
        Ok(ev) => map_event(ev),
        Err(e) => {
            warn!("Event read failed: {}", e);
            None
        }
    }
}

pub fn map_event(ev: Event) -> Option<TuiEvent> {
    match ev {
        Event::Key(key_event) => map_key(key_event),
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::ScrollUp => Some(TuiEvent::ScrollUp),
            MouseEventKind::ScrollDown => Some(TuiEvent::ScrollDown),
            _ => None,
        },
        Event::Paste(data) => Some(TuiEvent::Paste(data)),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

pub fn map_key(key_event: KeyEvent) -> Option<TuiEvent> {
    // With REPORT_EVENT_TYPES enabled, releases arrive too
    if key_event.kind == KeyEventKind::Release {
        return None;
    }
    log::debug!(
        "Key event: {:?} with modifiers {:?}",
        key_event.code,
        key_event.modifiers
    );
    let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
    match key_event.code {
        KeyCode::Char('c') if ctrl => Some(TuiEvent::ForceQuit),
        // Ctrl+J inserts newline (ASCII LF; Ctrl+Enter sends this in most terminals)
        KeyCode::Char('j') if ctrl => Some(TuiEvent::InputChar('\n')),
        KeyCode::Char('t') if ctrl => Some(TuiEvent::ToggleSearch),
        KeyCode::Char('u') if ctrl => Some(TuiEvent::Attach),
        KeyCode::Char(_) if ctrl || key_event.modifiers.contains(KeyModifiers::ALT) => None,
        KeyCode::Char(c) => Some(TuiEvent::InputChar(c)),
        KeyCode::Enter if key_event.modifiers.contains(KeyModifiers::SHIFT) => {
            Some(TuiEvent::InputChar('\n'))
        }
        KeyCode::Enter => Some(TuiEvent::Submit),
        KeyCode::Backspace => Some(TuiEvent::Backspace),
        KeyCode::Delete => Some(TuiEvent::Delete),
        KeyCode::Esc => Some(TuiEvent::Escape),
        KeyCode::Tab => Some(TuiEvent::Tab),
        KeyCode::Left => Some(TuiEvent::CursorLeft),
        KeyCode::Right => Some(TuiEvent::CursorRight),
        KeyCode::Up => Some(TuiEvent::CursorUp),
        KeyCode::Down => Some(TuiEvent::CursorDown),
        KeyCode::Home => Some(TuiEvent::CursorHome),
        KeyCode::End => Some(TuiEvent::CursorEnd),
        KeyCode::PageUp => Some(TuiEvent::ScrollPageUp),
        KeyCode::PageDown => Some(TuiEvent::ScrollPageDown),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn enter_submits_and_shift_enter_breaks_line() {
        assert_eq!(
            map_key(key(KeyCode::Enter, KeyModifiers::NONE)),
            Some(TuiEvent::Submit)
        );
        assert_eq!(
            map_key(key(KeyCode::Enter, KeyModifiers::SHIFT)),
            Some(TuiEvent::InputChar('\n'))
        );
        assert_eq!(
            map_key(key(KeyCode::Char('j'), KeyModifiers::CONTROL)),
            Some(TuiEvent::InputChar('\n'))
        );
    }

    #[test]
    fn control_chords() {
        assert_eq!(
            map_key(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(TuiEvent::ForceQuit)
        );
        assert_eq!(
            map_key(key(KeyCode::Char('t'), KeyModifiers::CONTROL)),
            Some(TuiEvent::ToggleSearch)
        );
        assert_eq!(
            map_key(key(KeyCode::Char('u'), KeyModifiers::CONTROL)),
            Some(TuiEvent::Attach)
        );
        assert_eq!(map_key(key(KeyCode::Char('x'), KeyModifiers::CONTROL)), None);
    }

    #[test]
    fn shifted_characters_are_typed() {
        assert_eq!(
            map_key(key(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            Some(TuiEvent::InputChar('A'))
        );
    }

    #[test]
    fn key_releases_are_dropped() {
        let release = KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(release), None);
    }

    #[test]
    fn paste_and_resize_pass_through() {
        assert_eq!(
            map_event(Event::Paste("a\nb".to_string())),
            Some(TuiEvent::Paste("a\nb".to_string()))
        );
        assert_eq!(map_event(Event::Resize(80, 24)), Some(TuiEvent::Resize));
    }
}

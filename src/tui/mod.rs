//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the pages,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (landing page background, overlay entrances, popups):
//!   draws every ~80ms.
//! - **Idle** (dashboard): sleeps up to 500ms and only redraws on events,
//!   typing frames or terminal resize.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor because
//! ratatui's `set_cursor_position` resets the terminal's blink timer on every
//! `draw()` call, making blinking cursors appear erratic during continuous redraws.
//!
//! ## Typing driver lifecycle
//!
//! The composer placeholder animation runs as a tokio task owned through a
//! [`TypingDriver`]. `update()` asks for it with `Effect::StartTyping` when the
//! landing page is entered and retires it with `Effect::StopTyping` when the
//! landing page is left; quitting drops it.

mod component;
mod components;
mod event;
mod theme;
mod typing_driver;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::copy::Anchor;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{
    ColorPanelEvent, ColorPanelState, ComposerEvent, LandingState, TestPopupEvent, TestPopupState,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::typing_driver::TypingDriver;

const ANIMATING_TIMEOUT: Duration = Duration::from_millis(80);
const IDLE_TIMEOUT: Duration = Duration::from_millis(500);

/// Modal input mode on the landing page: determines how keys are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Keys go to the composer. Esc switches to Browse.
    Input,
    /// Single-key page navigation. Typing auto-switches to Input.
    Browse,
}

/// TUI-specific presentation state (not part of core page logic)
pub struct TuiState {
    // Persistent component state, rebuilt on every visit to the landing page
    pub landing: LandingState,
    pub input_mode: InputMode,
    // Overlays (None = hidden)
    pub color_panel: Option<ColorPanelState>,
    pub test_popup: Option<TestPopupState>,
    pub typing: Option<TypingDriver>,
    started: Instant,
}

impl TuiState {
    pub fn new(app: &App) -> Self {
        Self {
            landing: LandingState::new(app.min_lines, app.max_lines),
            input_mode: InputMode::Input, // User expects to type immediately
            color_panel: None,
            test_popup: None,
            typing: None,
            started: Instant::now(),
        }
    }

    /// Time since the TUI started; the clock for all page animations.
    pub fn now(&self) -> Duration {
        self.started.elapsed()
    }

    fn is_animating(&self, app: &App) -> bool {
        let now = self.now();
        app.on_landing()
            || self.landing.is_animating(now)
            || self.test_popup.as_ref().is_some_and(|p| p.is_animating(now))
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Kitty keyboard protocol enables Shift+Enter detection; terminals
        // without it ignore the request
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!(
            "Terminal modes enabled (mouse, bracketed paste, steady block cursor, keyboard enhancement)"
        );
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            DisableBracketedPaste,
            Hide
        );
    }
}

/// Carry out the side effect `update()` asked for. Returns true on quit.
fn apply_effect(
    effect: Effect,
    app: &App,
    tui: &mut TuiState,
    tx: &mpsc::Sender<Action>,
) -> bool {
    match effect {
        Effect::None => false,
        Effect::Quit => true,
        Effect::StartTyping => {
            tui.landing = LandingState::new(app.min_lines, app.max_lines);
            tui.input_mode = InputMode::Input;
            tui.typing = TypingDriver::start(&app.phrases, app.typing_generation, tx.clone());
            false
        }
        Effect::StopTyping => {
            if let Some(mut driver) = tui.typing.take() {
                driver.dispose();
            }
            tui.test_popup = None;
            tui.color_panel = None;
            false
        }
    }
}

/// Route one input event. Returns the action it produces, if any.
fn handle_event(event: TuiEvent, app: &mut App, tui: &mut TuiState) -> Option<Action> {
    // Ctrl+C always quits regardless of mode or overlay
    if matches!(event, TuiEvent::ForceQuit) {
        return Some(Action::Quit);
    }

    // Open overlays take every event
    if let Some(panel) = tui.color_panel.as_mut() {
        return match panel.handle_event(&event)? {
            ColorPanelEvent::SelectPreset(preset) => Some(Action::SelectPreset(preset)),
            ColorPanelEvent::SetBaseColor(base) => Some(Action::SetBaseColor(base)),
            ColorPanelEvent::Dismiss => {
                tui.color_panel = None;
                None
            }
        };
    }
    if let Some(popup) = tui.test_popup.as_mut() {
        if let Some(TestPopupEvent::Dismiss) = popup.handle_event(&event) {
            tui.test_popup = None;
        }
        return None;
    }

    if !app.on_landing() {
        return match event {
            TuiEvent::Escape | TuiEvent::InputChar('b') => Some(Action::NavigateBack),
            TuiEvent::InputChar('q') => Some(Action::Quit),
            _ => None,
        };
    }

    // Scrolling works in both modes
    if matches!(
        event,
        TuiEvent::ScrollUp | TuiEvent::ScrollDown | TuiEvent::ScrollPageUp | TuiEvent::ScrollPageDown
    ) {
        tui.landing.handle_event(&event);
        return None;
    }

    match tui.input_mode {
        InputMode::Input => {
            if matches!(event, TuiEvent::Escape) {
                tui.input_mode = InputMode::Browse;
                return None;
            }
            match tui.landing.composer.handle_event(&event)? {
                ComposerEvent::Submit(text) => Some(Action::Submit(text)),
                ComposerEvent::SearchToggled(on) => {
                    app.status_message = format!("Search: {}", if on { "on" } else { "off" });
                    None
                }
                ComposerEvent::AttachRequested => Some(Action::AttachRequested),
                ComposerEvent::ContentChanged => None,
            }
        }
        InputMode::Browse => match event {
            TuiEvent::InputChar('a') => {
                tui.landing.scroll_to(Anchor::About);
                None
            }
            TuiEvent::InputChar('f') => {
                tui.landing.scroll_to(Anchor::Features);
                None
            }
            TuiEvent::InputChar('t') => {
                tui.test_popup = Some(TestPopupState::open(tui.now()));
                None
            }
            TuiEvent::InputChar('c') => {
                tui.color_panel = Some(ColorPanelState::new(app.palette));
                None
            }
            TuiEvent::InputChar('d') => Some(Action::FollowCta),
            TuiEvent::InputChar('q') => Some(Action::Quit),
            TuiEvent::CursorUp => {
                tui.landing.handle_event(&TuiEvent::ScrollUp);
                None
            }
            TuiEvent::CursorDown => {
                tui.landing.handle_event(&TuiEvent::ScrollDown);
                None
            }
            // Enter switches back to the composer
            TuiEvent::Submit => {
                tui.input_mode = InputMode::Input;
                None
            }
            // Typing auto-switches to Input mode and forwards the event
            TuiEvent::InputChar(_) | TuiEvent::Paste(_) => {
                tui.input_mode = InputMode::Input;
                match tui.landing.composer.handle_event(&event)? {
                    ComposerEvent::Submit(text) => Some(Action::Submit(text)),
                    _ => None,
                }
            }
            _ => None,
        },
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new(&app);

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    if app.on_landing() {
        tui.typing = TypingDriver::start(&app.phrases, app.typing_generation, tx.clone());
    }

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();
    info!("Starting on {}", app.route.path());

    let mut needs_redraw = true; // Force first frame

    loop {
        tui.landing.composer.focused = tui.input_mode == InputMode::Input
            && tui.color_panel.is_none()
            && tui.test_popup.is_none();

        let animating = tui.is_animating(&app);
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let timeout = if animating {
            ANIMATING_TIMEOUT
        } else {
            IDLE_TIMEOUT
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }
            if let Some(action) = handle_event(event, &mut app, &mut tui) {
                let effect = update(&mut app, action);
                if apply_effect(effect, &app, &mut tui, &tx) {
                    should_quit = true;
                    break;
                }
            }
        }

        if should_quit {
            break;
        }

        // Handle background task actions (typing frames)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effect = update(&mut app, action);
            if apply_effect(effect, &app, &mut tui, &tx) {
                should_quit = true;
            }
        }

        if should_quit {
            break;
        }
    }

    if let Some(mut driver) = tui.typing.take() {
        driver.dispose();
    }
    info!("Shutting down");
    ratatui::restore();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::palette::{PaletteSource, Preset};
    use crate::core::route::Route;

    fn setup() -> (App, TuiState) {
        let app = App::new();
        let tui = TuiState::new(&app);
        (app, tui)
    }

    fn type_text(text: &str, app: &mut App, tui: &mut TuiState) {
        for c in text.chars() {
            assert_eq!(handle_event(TuiEvent::InputChar(c), app, tui), None);
        }
    }

    #[test]
    fn submit_produces_action_with_exact_text() {
        let (mut app, mut tui) = setup();
        type_text("Find leads for fintech", &mut app, &mut tui);
        assert_eq!(
            handle_event(TuiEvent::Submit, &mut app, &mut tui),
            Some(Action::Submit("Find leads for fintech".to_string()))
        );
        assert_eq!(tui.landing.composer.text(), "");
    }

    #[test]
    fn blank_submit_produces_nothing() {
        let (mut app, mut tui) = setup();
        type_text("   ", &mut app, &mut tui);
        assert_eq!(handle_event(TuiEvent::Submit, &mut app, &mut tui), None);
        assert_eq!(tui.landing.composer.text(), "   ");
    }

    #[test]
    fn escape_enters_browse_and_typing_returns_to_input() {
        let (mut app, mut tui) = setup();
        handle_event(TuiEvent::Escape, &mut app, &mut tui);
        assert_eq!(tui.input_mode, InputMode::Browse);

        assert_eq!(
            handle_event(TuiEvent::InputChar('d'), &mut app, &mut tui),
            Some(Action::FollowCta)
        );
        handle_event(TuiEvent::InputChar('x'), &mut app, &mut tui);
        assert_eq!(tui.input_mode, InputMode::Input);
        assert_eq!(tui.landing.composer.text(), "x");
    }

    #[test]
    fn browse_keys_open_overlays() {
        let (mut app, mut tui) = setup();
        handle_event(TuiEvent::Escape, &mut app, &mut tui);

        handle_event(TuiEvent::InputChar('t'), &mut app, &mut tui);
        assert!(tui.test_popup.is_some());
        handle_event(TuiEvent::Escape, &mut app, &mut tui);
        assert!(tui.test_popup.is_none());

        handle_event(TuiEvent::InputChar('c'), &mut app, &mut tui);
        assert!(tui.color_panel.is_some());
        handle_event(TuiEvent::Tab, &mut app, &mut tui);
        assert!(matches!(
            handle_event(TuiEvent::CursorRight, &mut app, &mut tui),
            Some(Action::SetBaseColor(_))
        ));
        handle_event(TuiEvent::Escape, &mut app, &mut tui);
        assert!(tui.color_panel.is_none());
        assert_eq!(tui.input_mode, InputMode::Browse);
    }

    #[test]
    fn dashboard_keys() {
        let (mut app, mut tui) = setup();
        app.route = Route::Dashboard {
            initial_input: None,
        };
        assert_eq!(
            handle_event(TuiEvent::InputChar('b'), &mut app, &mut tui),
            Some(Action::NavigateBack)
        );
        assert_eq!(
            handle_event(TuiEvent::Escape, &mut app, &mut tui),
            Some(Action::NavigateBack)
        );
        assert_eq!(handle_event(TuiEvent::InputChar('x'), &mut app, &mut tui), None);
    }

    #[test]
    fn force_quit_wins_over_overlays() {
        let (mut app, mut tui) = setup();
        tui.color_panel = Some(ColorPanelState::new(PaletteSource::Preset(Preset::Fire)));
        assert_eq!(
            handle_event(TuiEvent::ForceQuit, &mut app, &mut tui),
            Some(Action::Quit)
        );
    }

    #[test]
    fn search_toggle_sets_status() {
        let (mut app, mut tui) = setup();
        handle_event(TuiEvent::ToggleSearch, &mut app, &mut tui);
        assert_eq!(app.status_message, "Search: on");
    }

    #[tokio::test]
    async fn leaving_landing_disposes_driver_and_returning_restarts_it() {
        let (mut app, mut tui) = setup();
        let (tx, _rx) = mpsc::channel();
        tui.typing = TypingDriver::start(&app.phrases, app.typing_generation, tx.clone());
        assert!(tui.typing.is_some());

        let effect = update(&mut app, Action::Submit("B2B SaaS".to_string()));
        assert_eq!(effect, Effect::StopTyping);
        assert!(!apply_effect(effect, &app, &mut tui, &tx));
        assert!(tui.typing.is_none());

        let effect = update(&mut app, Action::NavigateBack);
        assert_eq!(effect, Effect::StartTyping);
        apply_effect(effect, &app, &mut tui, &tx);
        let driver = tui.typing.as_ref().unwrap();
        assert_eq!(driver.generation(), app.typing_generation);
    }
}
